//! Minigame domain types.

use serde::{Deserialize, Serialize};

/// A rock-paper-scissors move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpsChoice {
    Rock,
    Paper,
    Scissors,
}

impl RpsChoice {
    /// Parse a player move, case-insensitively. Anything that is not
    /// exactly rock/paper/scissors is rejected.
    pub fn parse(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "rock" => Some(Self::Rock),
            "paper" => Some(Self::Paper),
            "scissors" => Some(Self::Scissors),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
        }
    }

    /// Standard cyclic dominance, from self's perspective.
    pub fn versus(self, other: Self) -> RpsResult {
        if self == other {
            RpsResult::Tie
        } else if matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Paper, Self::Rock) | (Self::Scissors, Self::Paper)
        ) {
            RpsResult::Win
        } else {
            RpsResult::Lose
        }
    }
}

impl std::fmt::Display for RpsChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Round outcome from the player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RpsResult {
    Win,
    Lose,
    Tie,
}

impl RpsResult {
    /// Capitalized form used in chat replies ("Result: Win!").
    pub fn capitalized(&self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Tie => "Tie",
        }
    }
}

/// A resolved rock-paper-scissors round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpsOutcome {
    pub player: RpsChoice,
    pub computer: RpsChoice,
    pub result: RpsResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(RpsChoice::parse("Rock"), Some(RpsChoice::Rock));
        assert_eq!(RpsChoice::parse("SCISSORS"), Some(RpsChoice::Scissors));
        assert_eq!(RpsChoice::parse("banana"), None);
        assert_eq!(RpsChoice::parse(""), None);
    }

    #[test]
    fn test_cyclic_dominance() {
        use RpsChoice::*;
        assert_eq!(Rock.versus(Scissors), RpsResult::Win);
        assert_eq!(Rock.versus(Paper), RpsResult::Lose);
        assert_eq!(Rock.versus(Rock), RpsResult::Tie);
        assert_eq!(Paper.versus(Rock), RpsResult::Win);
        assert_eq!(Scissors.versus(Paper), RpsResult::Win);
        assert_eq!(Scissors.versus(Rock), RpsResult::Lose);
    }
}
