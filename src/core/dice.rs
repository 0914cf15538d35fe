//! Randomness for the drive engine
//!
//! Every random number is requested with a purpose tag. Production code
//! backs the trait with a seeded ChaCha stream; tests script specific
//! faces per purpose and let everything else fall through to the stream.

use std::collections::VecDeque;

use ahash::AHashMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Generator used for one game. Independent games use independent instances.
pub type GameRng = ChaCha8Rng;

/// Create a game generator from a seed
pub fn seeded(seed: u64) -> GameRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Create a generator for the `index`-th game of a batch sharing one seed
pub fn stream(seed: u64, index: u64) -> GameRng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);
    rng
}

/// What a die roll is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RollPurpose {
    /// Drive outcome table (d20)
    Drive,
    /// Turnover check (d20)
    Turnover,
    /// Clock cost of a touchdown row (d20)
    TouchdownClock,
    /// Fourth-down distance (d8 / d10 / d20 by style)
    DistanceToGo,
    /// Fourth-down conversion table (d20)
    Conversion,
    /// Field-goal table, also used for one-point kicks (d20)
    Kick,
    /// Two-point try (d10)
    TwoPoint,
}

impl RollPurpose {
    pub fn label(self) -> &'static str {
        match self {
            RollPurpose::Drive => "Drive",
            RollPurpose::Turnover => "Turnover check",
            RollPurpose::TouchdownClock => "TD clock",
            RollPurpose::DistanceToGo => "4th down distance",
            RollPurpose::Conversion => "4th down attempt",
            RollPurpose::Kick => "Kick",
            RollPurpose::TwoPoint => "2pt try",
        }
    }
}

/// What a uniform [0, 1) draw is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawPurpose {
    /// Coach's play style choice
    Style,
    /// Go-for-it Bernoulli draw
    GoForIt,
    /// One- or two-point choice after a touchdown
    ConversionChoice,
    /// End / field goal / go choice on an untimed down
    UntimedDown,
}

/// One recorded roll, kept on the drive log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    pub purpose: RollPurpose,
    pub sides: u32,
    pub value: u32,
}

/// Source of die rolls and uniform draws
pub trait Dice {
    /// Roll a die with `sides` faces, returning 1..=sides
    fn roll(&mut self, purpose: RollPurpose, sides: u32) -> u32;

    /// Uniform sample in [0, 1)
    fn draw(&mut self, purpose: DrawPurpose) -> f64;
}

impl Dice for ChaCha8Rng {
    fn roll(&mut self, _purpose: RollPurpose, sides: u32) -> u32 {
        self.gen_range(1..=sides)
    }

    fn draw(&mut self, _purpose: DrawPurpose) -> f64 {
        self.gen::<f64>()
    }
}

/// Dice with per-purpose scripted results
///
/// Scripted faces are consumed in order; when a purpose has nothing left the
/// fallback stream answers. A scripted face outside 1..=sides panics, since
/// it can only come from a broken script.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: AHashMap<RollPurpose, VecDeque<u32>>,
    draws: AHashMap<DrawPurpose, VecDeque<f64>>,
    fallback: GameRng,
}

impl ScriptedDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rolls: AHashMap::new(),
            draws: AHashMap::new(),
            fallback: seeded(seed),
        }
    }

    /// Queue a face for the next roll with this purpose
    pub fn with_roll(mut self, purpose: RollPurpose, value: u32) -> Self {
        self.rolls.entry(purpose).or_default().push_back(value);
        self
    }

    /// Queue a sample for the next draw with this purpose
    pub fn with_draw(mut self, purpose: DrawPurpose, value: f64) -> Self {
        self.draws.entry(purpose).or_default().push_back(value);
        self
    }

    /// Number of scripted rolls not yet consumed
    pub fn pending_rolls(&self) -> usize {
        self.rolls.values().map(VecDeque::len).sum()
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, purpose: RollPurpose, sides: u32) -> u32 {
        match self.rolls.get_mut(&purpose).and_then(VecDeque::pop_front) {
            Some(value) => {
                assert!(
                    (1..=sides).contains(&value),
                    "scripted {:?} roll {} outside 1..={}",
                    purpose,
                    value,
                    sides
                );
                value
            }
            None => self.fallback.roll(purpose, sides),
        }
    }

    fn draw(&mut self, purpose: DrawPurpose) -> f64 {
        match self.draws.get_mut(&purpose).and_then(VecDeque::pop_front) {
            Some(value) => value,
            None => self.fallback.draw(purpose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_rolls_stay_on_the_die() {
        let mut rng = seeded(7);
        for sides in [6, 8, 10, 20] {
            for _ in 0..500 {
                let roll = rng.roll(RollPurpose::Drive, sides);
                assert!((1..=sides).contains(&roll));
            }
        }
    }

    #[test]
    fn test_same_seed_same_rolls() {
        let mut a = seeded(99);
        let mut b = seeded(99);
        for _ in 0..50 {
            assert_eq!(a.roll(RollPurpose::Drive, 20), b.roll(RollPurpose::Drive, 20));
        }
    }

    #[test]
    fn test_streams_differ() {
        let mut a = stream(5, 0);
        let mut b = stream(5, 1);
        let rolls_a: Vec<u32> = (0..20).map(|_| a.roll(RollPurpose::Drive, 20)).collect();
        let rolls_b: Vec<u32> = (0..20).map(|_| b.roll(RollPurpose::Drive, 20)).collect();
        assert_ne!(rolls_a, rolls_b);
    }

    #[test]
    fn test_scripted_rolls_are_per_purpose() {
        let mut dice = ScriptedDice::new(1)
            .with_roll(RollPurpose::Turnover, 20)
            .with_roll(RollPurpose::Drive, 3)
            .with_roll(RollPurpose::Drive, 4);

        assert_eq!(dice.roll(RollPurpose::Drive, 20), 3);
        assert_eq!(dice.roll(RollPurpose::Turnover, 20), 20);
        assert_eq!(dice.roll(RollPurpose::Drive, 20), 4);
        assert_eq!(dice.pending_rolls(), 0);
    }

    #[test]
    #[should_panic(expected = "outside 1..=20")]
    fn test_scripted_out_of_range_fails_fast() {
        let mut dice = ScriptedDice::new(1).with_roll(RollPurpose::Drive, 21);
        dice.roll(RollPurpose::Drive, 20);
    }
}
