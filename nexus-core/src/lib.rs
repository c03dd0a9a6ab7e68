pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod source;
pub mod state;
pub mod synth;
pub mod tasks;

pub use config::{DashboardConfig, GatewayConfig};
pub use error::GatewayError;
pub use gateway::InsightGateway;
pub use gateway::{BRIEFING_FAILED, MISSING_KEY, SUMMARY_FAILED};
pub use models::{default_sources, Article, FeedSource, Platform, ALL_PLATFORMS};
pub use source::{add_source, list_sources, remove_source, shared_source_list, SharedSourceList};
pub use state::{Dashboard, DashboardStats, PlatformFilter};
pub use synth::{synthesize_articles, TOPIC_TAGS};
pub use tasks::{spawn_briefing, spawn_refresh, spawn_summary, Event};
