//! HTTP server for parleyd.

use crate::alarm::AlarmScheduler;
use crate::knowledge::KnowledgeBase;
use crate::routes;
use crate::wiki::WikiClient;
use anyhow::{Context, Result};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers. The knowledge base is
/// immutable after construction; the alarm scheduler owns the only
/// mutable state in the process.
pub struct AppState {
    pub knowledge: KnowledgeBase,
    pub wiki: WikiClient,
    pub alarms: AlarmScheduler,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(knowledge: KnowledgeBase, wiki: WikiClient) -> Self {
        Self {
            knowledge,
            wiki,
            alarms: AlarmScheduler::new(),
            start_time: Instant::now(),
        }
    }
}

/// Run the HTTP server until the process is stopped.
pub async fn run(state: AppState, bind: &str) -> Result<()> {
    let state = Arc::new(state);

    let app = Router::new()
        .merge(routes::chat_routes())
        .merge(routes::game_routes())
        .merge(routes::analysis_routes())
        .merge(routes::search_routes())
        .merge(routes::alarm_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    info!("  Listening on http://{}", bind);

    axum::serve(listener, app).await?;
    Ok(())
}
