//! Heuristic deception scoring over conversation transcripts.
//!
//! Deterministic, stateless, case-insensitive substring analysis. The
//! score is a relative suspicion signal, not a probability: unbounded
//! above, and it can go negative.

use parley_common::{ChatMessage, SpeakerScoreSummary, Verdict};
use std::collections::BTreeMap;

/// Linguistic markers of uncertainty. Any single match adds +2, however
/// many of them appear. Matching is substring-based, so short entries
/// like "just" fire inside longer words too; that is intended looseness,
/// not precision.
const HEDGE_PHRASES: &[&str] = &[
    "maybe",
    "perhaps",
    "possibly",
    "could be",
    "might be",
    "i guess",
    "i suppose",
    "i think",
    "i’m not sure",
    "not really",
    "kind of",
    "sort of",
    "more or less",
    "i’d say",
    "it seems like",
    "as far as i remember",
    "i believe",
    "to some extent",
    "you could say that",
    "depends",
    "that’s hard to say",
    "let’s just say",
    "i wouldn’t say that exactly",
    "not exactly",
    "not technically",
    "in a way",
    "something like that",
    "i don’t know",
    "i mean",
    "i guess you could say",
    "just",
    "only",
    "barely",
    "hardly",
    "a little",
    "not that much",
    "nothing major",
    "no big deal",
    "wasn’t serious",
    "sorta",
    "kinda",
    "a tiny bit",
    "at some point",
    "a while back",
    "recently",
    "i think it was yesterday",
    "not sure when",
    "back then",
    "sometime",
    "earlier maybe",
    "can’t remember exactly",
    "..",
    "wasn't",
    "*",
];

/// Assertion/counter-assertion pairs; both sides present in one message
/// adds +2 per pair.
const CONTRADICTION_PAIRS: &[(&str, &str)] = &[
    ("yes", "no"),
    ("never", "sometimes"),
    ("always", "not always"),
];

/// Outright refusals to answer. +3 for any match.
const AVOIDANCE_PHRASES: &[&str] = &["idk", "don't wanna say", "prefer not to answer"];

/// Messages with fewer tokens than this pick up the short-message bonus.
const SHORT_MESSAGE_TOKENS: usize = 4;

/// Score a single message. Additive signals:
/// hedging +2, short message +1, each contradiction pair +2,
/// avoidance +3, question mark -0.5.
pub fn score_message(text: &str) -> f64 {
    let text = text.to_lowercase();
    let mut score = 0.0;

    if HEDGE_PHRASES.iter().any(|hw| text.contains(hw)) {
        score += 2.0;
    }

    if text.split_whitespace().count() < SHORT_MESSAGE_TOKENS {
        score += 1.0;
    }

    for (a, b) in CONTRADICTION_PAIRS {
        if text.contains(a) && text.contains(b) {
            score += 2.0;
        }
    }

    if AVOIDANCE_PHRASES.iter().any(|p| text.contains(p)) {
        score += 3.0;
    }

    if text.contains('?') {
        score -= 0.5;
    }

    score
}

/// Score a whole conversation, grouped by speaker.
///
/// A speaker appears in the result iff they have at least one message,
/// so the average is always over a non-empty set. Empty message text is
/// scored like any other text.
pub fn score_conversation(messages: &[ChatMessage]) -> BTreeMap<String, SpeakerScoreSummary> {
    let mut scores: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for entry in messages {
        scores
            .entry(entry.speaker.clone())
            .or_default()
            .push(score_message(&entry.message));
    }

    scores
        .into_iter()
        .map(|(speaker, vals)| {
            let avg = vals.iter().sum::<f64>() / vals.len() as f64;
            let summary = SpeakerScoreSummary {
                average_score: avg,
                verdict: Verdict::from_average(avg),
            };
            (speaker, summary)
        })
        .collect()
}
