use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::FeedSource;

pub type SharedSourceList = Arc<RwLock<Vec<FeedSource>>>;

pub fn shared_source_list(initial: Vec<FeedSource>) -> SharedSourceList {
    Arc::new(RwLock::new(initial))
}

pub async fn add_source(store: &SharedSourceList, source: FeedSource) {
    let mut sources = store.write().await;
    sources.retain(|existing| existing.id != source.id);
    sources.push(source);
}

pub async fn remove_source(store: &SharedSourceList, source_id: &str) {
    let mut sources = store.write().await;
    sources.retain(|existing| existing.id != source_id);
}

pub async fn list_sources(store: &SharedSourceList) -> Vec<FeedSource> {
    store.read().await.clone()
}
