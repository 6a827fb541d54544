//! Stateless minigames: rock-paper-scissors and a dice roll.

use parley_common::{RpsChoice, RpsOutcome};
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid choice. Choose rock, paper, or scissors.")]
    InvalidChoice,
}

/// Play one round against a uniformly random computer move.
///
/// The choice is validated before any random draw happens, so an invalid
/// choice never consumes randomness.
pub fn play_rps(choice: &str) -> Result<RpsOutcome, GameError> {
    let player = RpsChoice::parse(choice).ok_or(GameError::InvalidChoice)?;

    let computer = match rand::thread_rng().gen_range(0..3) {
        0 => RpsChoice::Rock,
        1 => RpsChoice::Paper,
        _ => RpsChoice::Scissors,
    };

    Ok(RpsOutcome {
        player,
        computer,
        result: player.versus(computer),
    })
}

/// Roll a six-sided die.
pub fn roll_die() -> u8 {
    rand::thread_rng().gen_range(1..=6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use parley_common::RpsResult;

    #[test]
    fn test_invalid_choice_is_rejected() {
        assert_eq!(play_rps("banana"), Err(GameError::InvalidChoice));
        assert_eq!(play_rps(""), Err(GameError::InvalidChoice));
    }

    #[test]
    fn test_outcome_is_consistent_with_moves() {
        for _ in 0..100 {
            let outcome = play_rps("Rock").unwrap();
            assert_eq!(outcome.player, RpsChoice::Rock);
            let expected = match outcome.computer {
                RpsChoice::Scissors => RpsResult::Win,
                RpsChoice::Paper => RpsResult::Lose,
                RpsChoice::Rock => RpsResult::Tie,
            };
            assert_eq!(outcome.result, expected);
        }
    }

    #[test]
    fn test_dice_rolls_are_in_range_and_cover_all_faces() {
        let mut seen = [0u32; 6];
        for _ in 0..1000 {
            let roll = roll_die();
            assert!((1..=6).contains(&roll));
            seen[(roll - 1) as usize] += 1;
        }
        // Roughly uniform: each face should show up well over chance-floor
        // for 1000 trials (expected ~166 each)
        for (face, count) in seen.iter().enumerate() {
            assert!(*count > 80, "face {} appeared only {} times", face + 1, count);
        }
    }
}
