//! Gridiron Dice - table-driven dice football

pub mod analysis;
pub mod core;
pub mod drive;
pub mod field;
pub mod game;
pub mod policy;
pub mod report;
pub mod session;
pub mod tables;
