//! Golden tests for chat intent routing.
//!
//! Verifies that trigger phrases route to the right feature, that rule
//! precedence is stable, and that the routing hints keep their exact
//! wording (clients display them verbatim).

use parleyd::intent::{classify, ChatIntent};

#[test]
fn golden_trigger_phrases() {
    let cases = [
        ("play rps", ChatIntent::Rps),
        ("i want to play rps now", ChatIntent::Rps),
        ("rock paper scissors", ChatIntent::Rps),
        ("lie detector", ChatIntent::LieDetector),
        ("start the lie detector please", ChatIntent::LieDetector),
        ("search", ChatIntent::Search),
        ("can you search wikipedia", ChatIntent::Search),
        ("dice roll", ChatIntent::DiceRoll),
        ("give me a dice roll", ChatIntent::DiceRoll),
        ("set alarm", ChatIntent::SetAlarm),
        ("please set alarm for lunch", ChatIntent::SetAlarm),
    ];

    for (message, expected) in cases {
        assert_eq!(classify(message), expected, "message: {:?}", message);
    }
}

#[test]
fn golden_fallback_to_question() {
    for message in [
        "what is your name",
        "how old are you?",
        "tell me about rust",
        "",
        "roll the dice", // not the literal trigger phrase
    ] {
        assert_eq!(classify(message), ChatIntent::Question, "message: {:?}", message);
    }
}

#[test]
fn golden_precedence_order() {
    // Full precedence chain: each message contains the trigger of every
    // later rule too, and the earliest rule must win.
    let chain = [
        (
            "play rps lie detector search dice roll set alarm",
            ChatIntent::Rps,
        ),
        ("lie detector search dice roll set alarm", ChatIntent::LieDetector),
        ("search dice roll set alarm", ChatIntent::Search),
        ("dice roll set alarm", ChatIntent::DiceRoll),
        ("set alarm", ChatIntent::SetAlarm),
    ];

    for (message, expected) in chain {
        assert_eq!(classify(message), expected, "message: {:?}", message);
    }
}

#[test]
fn golden_triggers_are_case_insensitive() {
    assert_eq!(classify("PLAY RPS"), ChatIntent::Rps);
    assert_eq!(classify("Lie Detector"), ChatIntent::LieDetector);
    assert_eq!(classify("SET ALARM"), ChatIntent::SetAlarm);
}

#[test]
fn golden_hint_wording() {
    assert_eq!(
        ChatIntent::Rps.hint(),
        Some("To play, send POST to /play-rps with your choice (rock, paper, or scissors).")
    );
    assert_eq!(
        ChatIntent::LieDetector.hint(),
        Some("Send conversation messages to /lie-detector as JSON to analyze.")
    );
    assert_eq!(
        ChatIntent::Search.hint(),
        Some("Send your search topic to /search as JSON to get Wikipedia intro.")
    );
    assert_eq!(
        ChatIntent::SetAlarm.hint(),
        Some("Send POST to /set-alarm with minutes and message in JSON.")
    );
}
