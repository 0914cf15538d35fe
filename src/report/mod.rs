//! Read-only views over the tables and finished games

pub mod chart;
pub mod play_aid;
pub mod tables;

pub use chart::{drive_chart, field_label};
pub use play_aid::play_aid;
pub use tables::{write_special_teams_csv, write_tables_csv};
