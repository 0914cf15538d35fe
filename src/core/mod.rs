pub mod config;
pub mod dice;
pub mod error;
pub mod types;

pub use config::{install_rules, load_rules_from, rules, set_rules, RulesConfig};
pub use dice::{Dice, DrawPurpose, GameRng, RollPurpose, RollRecord, ScriptedDice};
pub use error::{GridironError, Result};
pub use types::{Block, GameId, Half, PlayStyle, Team, Yard};
