//! HTTP request/response bodies shared by daemon and client.
//!
//! Every chat-surface endpoint answers HTTP 200 with a single `response`
//! field; validation failures travel inside that field as plain text.

use crate::analysis::SpeakerScoreSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body for `POST /chat`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

/// Body for `POST /play-rps`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpsRequest {
    #[serde(default)]
    pub choice: String,
}

/// Body for `POST /search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub topic: String,
}

/// Plain-text reply envelope used by most endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub response: String,
}

impl Reply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

/// Reply envelope for `POST /lie-detector`: per-speaker summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReply {
    pub response: BTreeMap<String, SpeakerScoreSummary>,
}

/// Lifecycle of a scheduled alarm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlarmStatus {
    Pending,
    Fired,
}

/// A scheduled alarm, keyed by its message in the scheduler's store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmRecord {
    pub minutes: u64,
    pub status: AlarmStatus,
    pub scheduled_at: DateTime<Utc>,
    /// Announcement text, set once when the alarm fires.
    pub note: Option<String>,
}

/// Reply envelope for `GET /alarms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlarmListReply {
    pub response: BTreeMap<String, AlarmRecord>,
}

/// Reply for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub knowledge_entries: usize,
}
