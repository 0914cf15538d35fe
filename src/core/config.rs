//! Rule constants with documented meaning
//!
//! Every number the drive engine depends on that is not part of a dice
//! table lives here. Tables themselves are in `crate::tables`.

use serde::{Deserialize, Serialize};

use crate::core::types::{Block, Yard};

/// Configuration for the game rules
///
/// Defaults reproduce the tabletop game. Changing them changes scoring
/// rates and pacing, so batch analysis should be rerun afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    // === CLOCK ===
    /// Time blocks in each half
    ///
    /// At 10 seconds per block, 180 blocks is a 30 minute half.
    pub blocks_per_half: Block,

    /// Remaining blocks at or below which the coach treats the half as "late"
    ///
    /// Drives style selection and the two-point decision. 60 blocks = 10 minutes.
    pub late_half_blocks: Block,

    /// Remaining blocks at or below which second-half fourth-down urgency applies
    ///
    /// 30 blocks = the last 5 minutes.
    pub final_minutes_blocks: Block,

    // === FIELD ===
    /// Yard line (from the receiving team's goal) where kickoffs are spotted
    pub kickoff_yard_line: Yard,

    /// Yard line (from the receiving team's goal) used for touchbacks
    ///
    /// Also where the opponent takes over after a touchdown is negated
    /// by a turnover.
    pub touchback_yard_line: Yard,

    /// Net distance of every punt
    pub punt_yards: Yard,

    /// Yards the ball moves back from the attempt spot after a missed field goal
    pub missed_field_goal_step_back: Yard,

    /// Maximum yards-to-goal from which a field goal may be attempted
    pub field_goal_range: Yard,

    // === SCORING ===
    /// First-down distance on a standard series
    pub first_down_yards: Yard,

    /// Make distance a one-point kick must reach on the field-goal table
    ///
    /// 15 yards fails only on a natural 1, roughly a 95% kick.
    pub extra_point_distance: Yard,

    /// Minimum d10 roll for a successful two-point try (7+ = 40%)
    pub two_point_target: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            // Clock
            blocks_per_half: 180,
            late_half_blocks: 60,
            final_minutes_blocks: 30,

            // Field
            kickoff_yard_line: 30,
            touchback_yard_line: 20,
            punt_yards: 40,
            missed_field_goal_step_back: 7,
            field_goal_range: 50,

            // Scoring
            first_down_yards: 10,
            extra_point_distance: 15,
            two_point_target: 7,
        }
    }
}

impl RulesConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.blocks_per_half == 0 {
            return Err("blocks_per_half must be positive".into());
        }

        if self.final_minutes_blocks > self.late_half_blocks
            || self.late_half_blocks > self.blocks_per_half
        {
            return Err(format!(
                "clock thresholds must be ordered: final_minutes_blocks ({}) <= late_half_blocks ({}) <= blocks_per_half ({})",
                self.final_minutes_blocks, self.late_half_blocks, self.blocks_per_half
            ));
        }

        for (name, line) in [
            ("kickoff_yard_line", self.kickoff_yard_line),
            ("touchback_yard_line", self.touchback_yard_line),
        ] {
            if !(1..50).contains(&line) {
                return Err(format!("{} ({}) must be inside the team's own half", name, line));
            }
        }

        if self.field_goal_range <= 0 || self.field_goal_range >= 100 {
            return Err(format!(
                "field_goal_range ({}) must be between 1 and 99",
                self.field_goal_range
            ));
        }

        if !(1..=10).contains(&self.two_point_target) {
            return Err(format!(
                "two_point_target ({}) must be a d10 face",
                self.two_point_target
            ));
        }

        Ok(())
    }
}

// === GLOBAL RULES ACCESS ===

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use crate::core::error::GridironError;

static RULES: OnceLock<RulesConfig> = OnceLock::new();

/// Get the global rules (initializes with defaults if not set)
pub fn rules() -> &'static RulesConfig {
    RULES.get_or_init(RulesConfig::default)
}

/// Set the global rules (can only be called once)
///
/// Returns Err if rules were already set.
pub fn set_rules(rules: RulesConfig) -> Result<(), RulesConfig> {
    RULES.set(rules)
}

/// Read a rules file; keys it leaves out keep their defaults
pub fn load_rules_from(path: &Path) -> crate::core::error::Result<RulesConfig> {
    let contents = fs::read_to_string(path)?;
    let rules: RulesConfig = toml::from_str(&contents)
        .map_err(|e| GridironError::InvalidConfig(format!("Failed to parse rules TOML: {}", e)))?;
    rules.validate().map_err(GridironError::InvalidConfig)?;
    Ok(rules)
}

/// Validate and install `rules` before any game is played
pub fn install_rules(rules: RulesConfig) -> crate::core::error::Result<()> {
    rules.validate().map_err(GridironError::InvalidConfig)?;
    set_rules(rules).map_err(|_| GridironError::InvalidConfig("rules were already set".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_validate() {
        assert!(RulesConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_half_is_thirty_minutes() {
        let rules = RulesConfig::default();
        assert_eq!(rules.blocks_per_half * 10, 30 * 60);
    }

    #[test]
    fn test_misordered_clock_thresholds_rejected() {
        let rules = RulesConfig {
            late_half_blocks: 20,
            final_minutes_blocks: 30,
            ..RulesConfig::default()
        };
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_invalid_rules_file_rejected() {
        let path = std::env::temp_dir().join(format!("gridiron_rules_{}.toml", std::process::id()));
        fs::write(&path, "two_point_target = 12\n").unwrap();
        let result = load_rules_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(GridironError::InvalidConfig(_))));
    }

    #[test]
    fn test_rules_parse_from_partial_toml() {
        let rules: RulesConfig = toml::from_str("punt_yards = 45\n").unwrap();
        assert_eq!(rules.punt_yards, 45);
        assert_eq!(rules.blocks_per_half, 180);
    }
}
