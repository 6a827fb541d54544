//! Deterministic chat intent router.
//!
//! An ordered list of substring trigger rules, evaluated top to bottom:
//! minigame and side-feature triggers win over the Q&A fallback, and rule
//! order is part of the contract ("search for dice roll" routes to
//! Search, not DiceRoll).

/// Known chat intents, in routing priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIntent {
    /// "play rps" / "rock paper scissors" => point at /play-rps
    Rps,
    /// "lie detector" => point at /lie-detector
    LieDetector,
    /// "search" => point at /search
    Search,
    /// "dice roll" => roll inline and answer with the result
    DiceRoll,
    /// "set alarm" => point at /set-alarm
    SetAlarm,
    /// Anything else => fuzzy knowledge-base Q&A
    Question,
}

impl std::fmt::Display for ChatIntent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Rps => "rps",
            Self::LieDetector => "lie_detector",
            Self::Search => "search",
            Self::DiceRoll => "dice_roll",
            Self::SetAlarm => "set_alarm",
            Self::Question => "question",
        };
        write!(f, "{}", s)
    }
}

impl ChatIntent {
    /// Routing hint sent back for intents handled by a dedicated
    /// endpoint. DiceRoll and Question are answered inline and have none.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Rps => Some(
                "To play, send POST to /play-rps with your choice (rock, paper, or scissors).",
            ),
            Self::LieDetector => {
                Some("Send conversation messages to /lie-detector as JSON to analyze.")
            }
            Self::Search => Some("Send your search topic to /search as JSON to get Wikipedia intro."),
            Self::SetAlarm => Some("Send POST to /set-alarm with minutes and message in JSON."),
            Self::DiceRoll | Self::Question => None,
        }
    }
}

/// Classify a chat message to an intent. Trigger phrases are matched
/// case-insensitively anywhere in the text.
pub fn classify(message: &str) -> ChatIntent {
    let m = message.to_lowercase();

    if m.contains("play rps") || m.contains("rock paper scissors") {
        return ChatIntent::Rps;
    }

    if m.contains("lie detector") {
        return ChatIntent::LieDetector;
    }

    if m.contains("search") {
        return ChatIntent::Search;
    }

    if m.contains("dice roll") {
        return ChatIntent::DiceRoll;
    }

    if m.contains("set alarm") {
        return ChatIntent::SetAlarm;
    }

    ChatIntent::Question
}
