//! Parley Daemon - small conversational web backend
//!
//! Answers factual questions by fuzzy lookup against a static knowledge
//! base and exposes a handful of side features (lie detector, rock paper
//! scissors, topic search, dice, alarms) over HTTP/JSON.

use anyhow::Result;
use parleyd::config::Config;
use parleyd::knowledge::KnowledgeBase;
use parleyd::server::{self, AppState};
use parleyd::wiki::WikiClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Parley daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();

    // No knowledge base, nothing to serve: abort startup
    let knowledge = KnowledgeBase::load(&config.knowledge.path)?;
    let wiki = WikiClient::new(&config.wiki)?;

    let state = AppState::new(knowledge, wiki);
    info!("Parley daemon ready");

    server::run(state, &config.server.bind).await
}
