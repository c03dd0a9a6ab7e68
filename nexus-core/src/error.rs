use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("api key is not configured")]
    MissingApiKey,
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("generation response carried no text")]
    EmptyResponse,
}
