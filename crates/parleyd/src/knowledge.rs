//! Knowledge base store and fuzzy question matching.
//!
//! The knowledge base is loaded once at startup and read-only afterwards;
//! it is passed by reference through the app state, never held in a global.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Minimum similarity for a fuzzy match to count. Load-bearing constant:
/// lowering it makes the bot answer questions it was never asked.
pub const SIMILARITY_THRESHOLD: f64 = 0.65;

/// One question/answer pair. Immutable after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
}

/// On-disk knowledge base format: `{"questions": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KnowledgeFile {
    questions: Vec<KnowledgeEntry>,
}

/// In-memory knowledge base. Question uniqueness is assumed but not
/// enforced; lookups return the first match.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        Self { entries }
    }

    /// Load the knowledge base from a JSON file. Failure here aborts
    /// daemon startup; there is nothing useful to serve without it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read knowledge base: {}", path.display()))?;
        let file: KnowledgeFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse knowledge base: {}", path.display()))?;

        info!("Loaded {} knowledge entries from {}", file.questions.len(), path.display());
        Ok(Self::new(file.questions))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All known question texts, in file order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    /// Exact case-insensitive lookup. First entry wins when questions
    /// are duplicated; `None` stays possible as a defensive contract even
    /// though matched questions normally come from this same base.
    pub fn answer_for(&self, question: &str) -> Option<&str> {
        let wanted = question.to_lowercase();
        self.entries
            .iter()
            .find(|e| e.question.to_lowercase() == wanted)
            .map(|e| e.answer.as_str())
    }

    /// Full Q&A path: fuzzy-match the user text against known questions,
    /// then look up the answer for the matched question.
    pub fn reply(&self, user_text: &str) -> Option<&str> {
        let matched = find_best_match(user_text, self.questions())?;
        self.answer_for(matched)
    }
}

/// Find the known question most similar to the user text.
///
/// Both sides are lowercased; similarity is a normalized edit-distance
/// ratio in [0,1]. Returns the first candidate attaining the maximum
/// score when that score clears the threshold. Pure; never errors.
pub fn find_best_match<'a>(
    user_text: &str,
    questions: impl IntoIterator<Item = &'a str>,
) -> Option<&'a str> {
    let needle = user_text.to_lowercase();
    let mut best: Option<(&'a str, f64)> = None;

    for candidate in questions {
        let score = strsim::normalized_levenshtein(&needle, &candidate.to_lowercase());
        // Strictly-greater keeps the first candidate on ties
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((candidate, score));
        }
    }

    best.filter(|&(_, score)| score >= SIMILARITY_THRESHOLD)
        .map(|(q, _)| q)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> KnowledgeBase {
        KnowledgeBase::new(vec![
            KnowledgeEntry {
                question: "What is your name?".to_string(),
                answer: "I am Parley.".to_string(),
            },
            KnowledgeEntry {
                question: "How old are you?".to_string(),
                answer: "Old enough.".to_string(),
            },
        ])
    }

    #[test]
    fn test_find_best_match_tolerates_case_and_punctuation() {
        let questions = ["What is your name?", "How old are you?"];
        let matched = find_best_match("what is your name", questions);
        assert_eq!(matched, Some("What is your name?"));
    }

    #[test]
    fn test_find_best_match_rejects_gibberish() {
        let questions = ["What is your name?", "How old are you?"];
        assert_eq!(find_best_match("zzz qqq", questions), None);
    }

    #[test]
    fn test_find_best_match_empty_candidates() {
        assert_eq!(find_best_match("anything", []), None);
    }

    #[test]
    fn test_find_best_match_tie_break_is_first_wins() {
        // Both candidates are one edit away from the input and score
        // identically; the first one encountered must win
        let questions = ["what time is it x", "what time is it y"];
        let matched = find_best_match("what time is it", questions);
        assert_eq!(matched, Some("what time is it x"));
    }

    #[test]
    fn test_answer_lookup_is_case_insensitive_first_match() {
        let kb = KnowledgeBase::new(vec![
            KnowledgeEntry {
                question: "Duplicate?".to_string(),
                answer: "first".to_string(),
            },
            KnowledgeEntry {
                question: "duplicate?".to_string(),
                answer: "second".to_string(),
            },
        ]);
        assert_eq!(kb.answer_for("DUPLICATE?"), Some("first"));
        assert_eq!(kb.answer_for("unknown"), None);
    }

    #[test]
    fn test_reply_end_to_end() {
        let kb = base();
        assert_eq!(kb.reply("what is your name"), Some("I am Parley."));
        assert_eq!(kb.reply("zzz qqq"), None);
    }

    #[test]
    fn test_load_parses_original_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        std::fs::write(
            &path,
            r#"{"questions": [{"question": "Hi?", "answer": "Hello!"}]}"#,
        )
        .unwrap();

        let kb = KnowledgeBase::load(&path).unwrap();
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.answer_for("hi?"), Some("Hello!"));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kb.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(KnowledgeBase::load(&path).is_err());
    }
}
