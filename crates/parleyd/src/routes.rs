//! API routes for parleyd.
//!
//! Every chat-surface endpoint answers HTTP 200; validation and lookup
//! failures are reported as plain text inside the `response` field, which
//! is the contract the original chat page relies on.

use crate::server::AppState;
use crate::{deception, games, intent};
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use parley_common::{
    AlarmListReply, AnalysisReply, ChatMessage, ChatRequest, HealthResponse, Reply, RpsOutcome,
    RpsRequest, SearchRequest,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

type AppStateArc = Arc<AppState>;

const LIE_DETECTOR_INVALID: &str = "Invalid input. Send a list of messages with speaker and message.";
const ALARM_INVALID: &str = "Invalid input. Provide positive minutes and a message.";
const SEARCH_EMPTY: &str = "Please provide a topic to search.";
const NO_ANSWER: &str = "I don't understand.";

// ============================================================================
// Chat Routes
// ============================================================================

pub fn chat_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/", get(landing))
        .route("/chat", post(chat))
}

async fn landing() -> &'static str {
    "Parley is listening. POST {\"message\": \"...\"} to /chat."
}

async fn chat(State(state): State<AppStateArc>, Json(req): Json<ChatRequest>) -> Json<Reply> {
    let input = req.message.trim();
    let intent = intent::classify(input);
    info!("Chat message routed to intent: {}", intent);

    let response = if let Some(hint) = intent.hint() {
        hint.to_string()
    } else if intent == intent::ChatIntent::DiceRoll {
        dice_reply(games::roll_die())
    } else {
        state
            .knowledge
            .reply(input)
            .unwrap_or(NO_ANSWER)
            .to_string()
    };

    Json(Reply::new(response))
}

/// Chat reply for an inline dice roll.
fn dice_reply(roll: u8) -> String {
    format!("🎲 You rolled a {}.", roll)
}

// ============================================================================
// Game Routes
// ============================================================================

pub fn game_routes() -> Router<AppStateArc> {
    Router::new().route("/play-rps", post(play_rps))
}

async fn play_rps(Json(req): Json<RpsRequest>) -> Json<Reply> {
    let response = match games::play_rps(&req.choice) {
        Ok(outcome) => rps_reply(&outcome),
        Err(e) => e.to_string(),
    };
    Json(Reply::new(response))
}

/// Human-readable round description from the player's perspective.
fn rps_reply(outcome: &RpsOutcome) -> String {
    format!(
        "Your choice: {}. Computer chose: {}. Result: {}!",
        outcome.player,
        outcome.computer,
        outcome.result.capitalized()
    )
}

// ============================================================================
// Analysis Routes
// ============================================================================

pub fn analysis_routes() -> Router<AppStateArc> {
    Router::new().route("/lie-detector", post(lie_detector))
}

/// Body handling is lenient on purpose: anything that is not a list of
/// message objects earns the fixed invalid-input reply, not an HTTP error.
async fn lie_detector(Json(body): Json<Value>) -> Response {
    // A missing key is an empty transcript; a present non-list is invalid
    let messages = body
        .get("messages")
        .cloned()
        .unwrap_or_else(|| Value::Array(Vec::new()));
    if !messages.is_array() {
        return Json(Reply::new(LIE_DETECTOR_INVALID)).into_response();
    }

    let messages: Vec<ChatMessage> = match serde_json::from_value(messages) {
        Ok(m) => m,
        Err(_) => return Json(Reply::new(LIE_DETECTOR_INVALID)).into_response(),
    };

    info!("Analyzing conversation of {} messages", messages.len());
    let summary = deception::score_conversation(&messages);
    Json(AnalysisReply { response: summary }).into_response()
}

// ============================================================================
// Search Routes
// ============================================================================

pub fn search_routes() -> Router<AppStateArc> {
    Router::new().route("/search", post(search))
}

async fn search(State(state): State<AppStateArc>, Json(req): Json<SearchRequest>) -> Json<Reply> {
    if req.topic.is_empty() {
        return Json(Reply::new(SEARCH_EMPTY));
    }

    info!("Summarizing topic: {}", req.topic);
    let summary = state.wiki.summarize(&req.topic).await;
    Json(Reply::new(summary))
}

// ============================================================================
// Alarm Routes
// ============================================================================

pub fn alarm_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/set-alarm", post(set_alarm))
        .route("/alarms", get(list_alarms))
}

async fn set_alarm(State(state): State<AppStateArc>, Json(body): Json<Value>) -> Json<Reply> {
    let minutes = coerce_minutes(body.get("minutes"));
    let message = body
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let response = match minutes {
        Some(minutes) => match state.alarms.schedule(minutes, message).await {
            Ok(confirmation) => confirmation,
            Err(_) => ALARM_INVALID.to_string(),
        },
        None => ALARM_INVALID.to_string(),
    };

    Json(Reply::new(response))
}

/// Coerce a JSON value into whole minutes. Accepts integers, floats
/// (truncated) and numeric strings; everything else is a validation
/// failure surfaced by the caller.
pub fn coerce_minutes(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

async fn list_alarms(State(state): State<AppStateArc>) -> Json<AlarmListReply> {
    Json(AlarmListReply {
        response: state.alarms.list().await,
    })
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        knowledge_entries: state.knowledge.len(),
    })
}
