use thiserror::Error;

use crate::core::types::Block;

#[derive(Error, Debug)]
pub enum GridironError {
    #[error("Unknown play style: {0:?}")]
    UnknownStyle(String),

    #[error("Unknown team: {0:?}")]
    UnknownTeam(String),

    #[error("Clock underflow: tried to spend {requested} blocks with {remaining} remaining")]
    ClockUnderflow { requested: Block, remaining: Block },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Coach profile error: {0}")]
    CoachProfile(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, GridironError>;
