use nexus_core::{
    GatewayConfig, InsightGateway, Platform, BRIEFING_FAILED, MISSING_KEY, SUMMARY_FAILED,
};
use reqwest::Client;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(server: &MockServer) -> InsightGateway {
    let config = GatewayConfig {
        api_key: Some("test-key".into()),
        endpoint: server.uri(),
        model: "gemini-3-flash-preview".into(),
    };
    InsightGateway::new(Client::new(), config)
}

fn generation_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn summarize_returns_generated_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-flash-preview:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_body("A sharp insight.")))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let summary = gateway.summarize("some article text", Platform::Blog).await;
    assert_eq!(summary, "A sharp insight.");
}

#[tokio::test]
async fn summarize_failure_yields_fixed_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let summary = gateway.summarize("text", Platform::Video).await;
    assert_eq!(summary, SUMMARY_FAILED);
}

#[tokio::test]
async fn summarize_empty_candidates_yields_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let summary = gateway.summarize("text", Platform::Forum).await;
    assert_eq!(summary, SUMMARY_FAILED);
}

#[tokio::test]
async fn briefing_returns_generated_paragraph() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-flash-preview:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_body("Calm news day.")))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    let titles = vec!["Headline one".to_string(), "Headline two".to_string()];
    assert_eq!(gateway.briefing(&titles).await, "Calm news day.");
}

#[tokio::test]
async fn briefing_failure_yields_fixed_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let gateway = gateway_for(&server);
    assert_eq!(gateway.briefing(&["T".to_string()]).await, BRIEFING_FAILED);
}

#[tokio::test]
async fn missing_api_key_short_circuits_without_network_access() {
    let server = MockServer::start().await;
    // Any request reaching the server would trip this expectation.
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(generation_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let config = GatewayConfig {
        api_key: None,
        endpoint: server.uri(),
        model: "gemini-3-flash-preview".into(),
    };
    let gateway = InsightGateway::new(Client::new(), config);

    assert_eq!(gateway.summarize("text", Platform::Blog).await, MISSING_KEY);
    assert_eq!(gateway.briefing(&["T".to_string()]).await, MISSING_KEY);
    server.verify().await;
}
