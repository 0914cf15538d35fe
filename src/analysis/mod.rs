//! Batch statistics over simulated games and drives
//!
//! Games are independent, so batches run on rayon with one generator
//! stream per game.

pub mod batch;
pub mod drives;
pub mod games;

pub use batch::{simulate_games, simulate_many, simulate_many_with, BatchSummary, ScoreLine};
pub use drives::{play_possession, study_drives, study_drives_with, DriveStudy, KickTally};
pub use games::{start_position_report, style_report, PositionTally, StartPositionReport, StyleReport, StyleTally};
