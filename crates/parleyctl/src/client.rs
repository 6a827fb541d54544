//! HTTP client for the Parley daemon.

use anyhow::{Context, Result};
use parley_common::{AlarmListReply, HealthResponse, Reply};
use serde_json::{json, Value};
use std::time::Duration;

/// Default daemon address, matching parleyd's default bind.
const DEFAULT_URL: &str = "http://127.0.0.1:5000";

pub struct DaemonClient {
    http: reqwest::Client,
    base_url: String,
}

impl DaemonClient {
    /// Resolve the daemon base URL.
    ///
    /// Priority:
    /// 1. Explicit --url flag
    /// 2. $PARLEYD_URL environment variable
    /// 3. http://127.0.0.1:5000 (default)
    pub fn discover_url(explicit: Option<&str>) -> String {
        if let Some(url) = explicit {
            return url.trim_end_matches('/').to_string();
        }
        if let Ok(url) = std::env::var("PARLEYD_URL") {
            return url.trim_end_matches('/').to_string();
        }
        DEFAULT_URL.to_string()
    }

    pub fn new(explicit_url: Option<&str>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: Self::discover_url(explicit_url),
        })
    }

    async fn post_for_reply(&self, path: &str, body: Value) -> Result<String> {
        let reply: Reply = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await
            .with_context(|| format!("Daemon unavailable at {}. Is parleyd running?", self.base_url))?
            .json()
            .await
            .context("Malformed daemon reply")?;
        Ok(reply.response)
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        self.http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .with_context(|| format!("Daemon unavailable at {}. Is parleyd running?", self.base_url))?
            .json()
            .await
            .context("Malformed health reply")
    }

    pub async fn chat(&self, message: &str) -> Result<String> {
        self.post_for_reply("/chat", json!({ "message": message })).await
    }

    pub async fn play_rps(&self, choice: &str) -> Result<String> {
        self.post_for_reply("/play-rps", json!({ "choice": choice })).await
    }

    /// Returns the raw reply body: the `response` field is a per-speaker
    /// map on success but plain text for invalid transcripts.
    pub async fn detect(&self, messages: Value) -> Result<Value> {
        self.http
            .post(format!("{}/lie-detector", self.base_url))
            .json(&json!({ "messages": messages }))
            .send()
            .await
            .with_context(|| format!("Daemon unavailable at {}. Is parleyd running?", self.base_url))?
            .json()
            .await
            .context("Malformed analysis reply")
    }

    pub async fn search(&self, topic: &str) -> Result<String> {
        self.post_for_reply("/search", json!({ "topic": topic })).await
    }

    pub async fn set_alarm(&self, minutes: i64, message: &str) -> Result<String> {
        self.post_for_reply(
            "/set-alarm",
            json!({ "minutes": minutes, "message": message }),
        )
        .await
    }

    pub async fn alarms(&self) -> Result<AlarmListReply> {
        self.http
            .get(format!("{}/alarms", self.base_url))
            .send()
            .await
            .with_context(|| format!("Daemon unavailable at {}. Is parleyd running?", self.base_url))?
            .json()
            .await
            .context("Malformed alarm list reply")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_url_prefers_explicit_flag() {
        assert_eq!(
            DaemonClient::discover_url(Some("http://10.0.0.2:9000/")),
            "http://10.0.0.2:9000"
        );
    }
}
