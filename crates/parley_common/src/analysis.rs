//! Conversation analysis types shared by daemon and client.

use serde::{Deserialize, Serialize};

/// A single conversation entry submitted for analysis.
///
/// Both fields default to empty so partially-shaped client input is
/// tolerated rather than rejected at the transport layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub speaker: String,
    #[serde(default)]
    pub message: String,
}

/// Categorical suspicion label derived from an averaged per-speaker score.
///
/// Wire format keeps the spaced spelling clients already display verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Likely Truthful")]
    LikelyTruthful,
    #[serde(rename = "Suspicious")]
    Suspicious,
    #[serde(rename = "Highly Suspicious")]
    HighlySuspicious,
}

impl Verdict {
    /// Classify an averaged suspicion score.
    ///
    /// Boundaries are strict: an average of exactly 1.2 is Suspicious and
    /// exactly 0.5 is Likely Truthful.
    pub fn from_average(avg: f64) -> Self {
        if avg > 1.2 {
            Self::HighlySuspicious
        } else if avg > 0.5 {
            Self::Suspicious
        } else {
            Self::LikelyTruthful
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::LikelyTruthful => "Likely Truthful",
            Self::Suspicious => "Suspicious",
            Self::HighlySuspicious => "Highly Suspicious",
        };
        write!(f, "{}", s)
    }
}

/// Per-speaker analysis result, computed fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerScoreSummary {
    pub average_score: f64,
    pub verdict: Verdict,
}
