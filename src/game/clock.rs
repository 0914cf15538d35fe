//! Half clock in 10-second blocks

use serde::{Deserialize, Serialize};

use crate::core::config::rules;
use crate::core::error::{GridironError, Result};
use crate::core::types::Block;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clock {
    allotted: Block,
    remaining: Block,
}

impl Clock {
    pub fn new(blocks: Block) -> Self {
        Self {
            allotted: blocks,
            remaining: blocks,
        }
    }

    /// Clock for a fresh half
    pub fn full_half() -> Self {
        Self::new(rules().blocks_per_half)
    }

    pub fn remaining(&self) -> Block {
        self.remaining
    }

    pub fn used(&self) -> Block {
        self.allotted - self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Take `blocks` off the clock
    ///
    /// Overdrawing is an invariant violation: drive resolution caps every
    /// drive to the time left before it gets here.
    pub fn spend(&mut self, blocks: Block) -> Result<()> {
        if blocks > self.remaining {
            return Err(GridironError::ClockUnderflow {
                requested: blocks,
                remaining: self.remaining,
            });
        }
        self.remaining -= blocks;
        Ok(())
    }

    /// End the half regardless of time left
    pub fn expire(&mut self) {
        self.remaining = 0;
    }
}

impl std::fmt::Display for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seconds = self.remaining * 10;
        write!(f, "{}:{:02}", seconds / 60, seconds % 60)
    }
}
