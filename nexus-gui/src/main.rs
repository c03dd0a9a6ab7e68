mod app;

use std::sync::Arc;

use eframe::{egui, NativeOptions};
use nexus_core::{
    default_sources, shared_source_list, DashboardConfig, GatewayConfig, InsightGateway,
};
use reqwest::ClientBuilder;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::{AppInit, NexusApp};

fn main() -> eframe::Result<()> {
    init_tracing();

    let runtime = Arc::new(Runtime::new().expect("failed to initialise Tokio runtime"));
    let sources = shared_source_list(default_sources());
    let (event_tx, event_rx) = mpsc::channel(64);
    let client = ClientBuilder::new()
        .user_agent("Nexus/0.1")
        .build()
        .expect("failed to build HTTP client");
    let gateway = Arc::new(InsightGateway::new(client, GatewayConfig::from_env()));
    let config = load_dashboard_config();

    let init = AppInit {
        runtime,
        sources,
        gateway,
        config,
        event_tx,
        events: event_rx,
    };

    eframe::run_native(
        "Nexus",
        NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1100.0, 780.0])
                .with_min_inner_size([700.0, 500.0]),
            ..Default::default()
        },
        Box::new(move |_cc| Box::new(NexusApp::new(init))),
    )
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn load_dashboard_config() -> DashboardConfig {
    // Linux: ~/.config/nexus/config.json
    let mut path = dirs::config_dir().unwrap_or_else(|| std::env::current_dir().unwrap());
    path.push("nexus");
    path.push("config.json");
    if path.exists() {
        DashboardConfig::from_file(&path)
    } else {
        DashboardConfig::default()
    }
}
