//! Game orchestration
//!
//! Bombers receive the opening kickoff, Gunners the second-half kickoff.
//! The score carries across halves; the clock resets.

pub mod clock;
pub mod half;
pub mod result;
pub mod scoreboard;

pub use clock::Clock;
pub use half::{simulate_half, HalfResult};
pub use result::GameResult;
pub use scoreboard::Scoreboard;

use crate::core::dice::{self, Dice};
use crate::core::error::Result;
use crate::core::types::{GameId, Half, Team};
use crate::field::kickoff_spot;
use crate::policy::CoachProfile;

/// Simulate a full game with the default coach
///
/// Without a seed one is drawn from the thread RNG and kept on the result,
/// so any game can be replayed.
pub fn simulate_game(seed: Option<u64>) -> Result<GameResult> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = dice::seeded(seed);
    let mut result = simulate_game_with(&CoachProfile::default(), &mut rng)?;
    result.seed = Some(seed);
    Ok(result)
}

/// Simulate a full game with an explicit coach and dice
pub fn simulate_game_with<D: Dice + ?Sized>(coach: &CoachProfile, dice: &mut D) -> Result<GameResult> {
    let mut score = Scoreboard::new();

    let first = simulate_half(
        Team::Bombers,
        kickoff_spot(Team::Bombers),
        &mut score,
        Half::First,
        coach,
        dice,
    )?;
    let second = simulate_half(
        Team::Gunners,
        kickoff_spot(Team::Gunners),
        &mut score,
        Half::Second,
        coach,
        dice,
    )?;

    let mut drives = first.drives;
    drives.extend(second.drives);

    tracing::debug!("Final: {} ({} drives)", score, drives.len());

    Ok(GameResult {
        id: GameId::new(),
        seed: None,
        drives,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_game() {
        let a = simulate_game(Some(2024)).unwrap();
        let b = simulate_game(Some(2024)).unwrap();
        assert_eq!(a.score, b.score);
        assert_eq!(a.drives, b.drives);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_unseeded_game_keeps_its_seed() {
        let game = simulate_game(None).unwrap();
        let seed = game.seed.unwrap();
        let replay = simulate_game(Some(seed)).unwrap();
        assert_eq!(game.drives, replay.drives);
    }

    #[test]
    fn test_halves_open_with_kickoffs() {
        let game = simulate_game(Some(5)).unwrap();
        let first = game.drives_in(Half::First).next().unwrap();
        let second = game.drives_in(Half::Second).next().unwrap();
        assert_eq!((first.team, first.start), (Team::Bombers, 30));
        assert_eq!((second.team, second.start), (Team::Gunners, 70));
    }

    #[test]
    fn test_winner_and_margin() {
        let game = simulate_game(Some(11)).unwrap();
        match game.winner() {
            Some(team) => assert_eq!(game.margin() as i32, game.score.lead(team)),
            None => assert_eq!(game.margin(), 0),
        }
    }
}
