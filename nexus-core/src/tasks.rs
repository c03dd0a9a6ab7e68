use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::gateway::InsightGateway;
use crate::models::{Article, FeedSource, Platform};
use crate::synth::synthesize_articles;

/// Results of suspended operations, delivered back to the event loop.
#[derive(Debug, Clone)]
pub enum Event {
    ArticlesReady(Vec<Article>),
    SummaryReady { article_id: String, summary: String },
    BriefingReady(String),
}

/// Synthesizes a fresh batch off-thread after the configured latency and
/// emits `Event::ArticlesReady`. There is no cancellation; a batch in
/// flight is always delivered.
pub fn spawn_refresh(
    sources: Vec<FeedSource>,
    config: DashboardConfig,
    tx: mpsc::Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(config.refresh_latency()).await;
        let mut rng = StdRng::from_entropy();
        let batch = synthesize_articles(&sources, config.batch_size, &mut rng);
        debug!(count = batch.len(), "synthesized refresh batch");
        if tx.send(Event::ArticlesReady(batch)).await.is_err() {
            warn!("refresh receiver dropped");
        }
    })
}

/// Requests a summary for one article and emits `Event::SummaryReady` with
/// whatever string the gateway resolves to.
pub fn spawn_summary(
    gateway: Arc<InsightGateway>,
    article_id: String,
    content: String,
    platform: Platform,
    tx: mpsc::Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let summary = gateway.summarize(&content, platform).await;
        if tx
            .send(Event::SummaryReady {
                article_id,
                summary,
            })
            .await
            .is_err()
        {
            warn!("summary receiver dropped");
        }
    })
}

/// Requests a briefing over the given headlines and emits
/// `Event::BriefingReady`.
pub fn spawn_briefing(
    gateway: Arc<InsightGateway>,
    titles: Vec<String>,
    tx: mpsc::Sender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let briefing = gateway.briefing(&titles).await;
        if tx.send(Event::BriefingReady(briefing)).await.is_err() {
            warn!("briefing receiver dropped");
        }
    })
}
