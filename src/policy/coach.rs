//! Coach profiles loaded from TOML
//!
//! A profile holds every tuned probability the computer coach uses. The
//! defaults match `data/coaches/default.toml`; other files override only
//! the sections they name.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{GridironError, Result};
use crate::core::types::{PlayStyle, Yard};

/// One entry of a cumulative style draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleWeight {
    pub style: PlayStyle,
    pub weight: f64,
}

const fn weight(style: PlayStyle, weight: f64) -> StyleWeight {
    StyleWeight { style, weight }
}

/// Style weights by game situation. Entries are drawn in listed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Late in the half, offense behind
    pub late_trailing: Vec<StyleWeight>,
    /// Late in the half, offense ahead
    pub late_leading: Vec<StyleWeight>,
    /// Late in the half, tied
    pub late_tied: Vec<StyleWeight>,
    /// Everything else
    pub standard: Vec<StyleWeight>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            late_trailing: vec![
                weight(PlayStyle::Pass, 0.55),
                weight(PlayStyle::Balanced, 0.35),
                weight(PlayStyle::Run, 0.10),
            ],
            late_leading: vec![
                weight(PlayStyle::Run, 0.50),
                weight(PlayStyle::Balanced, 0.40),
                weight(PlayStyle::Pass, 0.10),
            ],
            late_tied: vec![
                weight(PlayStyle::Pass, 0.40),
                weight(PlayStyle::Balanced, 0.45),
                weight(PlayStyle::Run, 0.15),
            ],
            standard: vec![
                weight(PlayStyle::Balanced, 0.50),
                weight(PlayStyle::Pass, 0.30),
                weight(PlayStyle::Run, 0.20),
            ],
        }
    }
}

/// Go-for-it probabilities on fourth down
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FourthDownConfig {
    /// Yards-to-go at or below which a down counts as "short"
    pub short_yards: Yard,
    /// Yards-to-go at or below which a down counts as "medium"
    pub medium_yards: Yard,

    pub goal_short: f64,
    pub goal_medium: f64,
    pub goal_long: f64,
    pub short: f64,
    pub medium: f64,
    pub long: f64,

    /// Yards-to-goal for the red-zone bonus
    pub red_zone_yards: Yard,
    pub red_zone_bonus: f64,
    /// Yards-to-goal for the smaller scoring-territory bonus
    pub scoring_territory_yards: Yard,
    pub scoring_territory_bonus: f64,

    /// Deficit beyond which the largest late-game bonus applies
    pub big_deficit: i32,
    pub big_deficit_bonus: f64,
    pub trailing_bonus: f64,
    /// Largest lead that still earns the small late-game bonus
    pub close_lead: i32,
    pub close_game_bonus: f64,
}

impl Default for FourthDownConfig {
    fn default() -> Self {
        Self {
            short_yards: 3,
            medium_yards: 5,

            goal_short: 0.60,
            goal_medium: 0.40,
            goal_long: 0.20,
            short: 0.30,
            medium: 0.15,
            long: 0.05,

            red_zone_yards: 20,
            red_zone_bonus: 0.15,
            scoring_territory_yards: 40,
            scoring_territory_bonus: 0.05,

            big_deficit: 3,
            big_deficit_bonus: 0.30,
            trailing_bonus: 0.15,
            close_lead: 7,
            close_game_bonus: 0.05,
        }
    }
}

/// Two-point probabilities keyed by the lead before the touchdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraPointConfig {
    pub down_eight_or_more: f64,
    pub down_seven: f64,
    pub down_six: f64,
    /// Tied before the touchdown. Zero keeps the kick.
    pub two_point_when_tied: f64,
}

impl Default for ExtraPointConfig {
    fn default() -> Self {
        Self {
            down_eight_or_more: 0.70,
            down_seven: 0.80,
            down_six: 0.20,
            two_point_when_tied: 0.0,
        }
    }
}

/// Weights for the three untimed-down calls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UntimedMix {
    pub field_goal: f64,
    pub go_for_it: f64,
    pub end_half: f64,
}

impl Default for UntimedMix {
    fn default() -> Self {
        Self {
            field_goal: 0.0,
            go_for_it: 0.0,
            end_half: 1.0,
        }
    }
}

const fn mix(field_goal: f64, go_for_it: f64, end_half: f64) -> UntimedMix {
    UntimedMix {
        field_goal,
        go_for_it,
        end_half,
    }
}

/// Untimed final-down weights by half, range and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UntimedConfig {
    /// Kick distances up to this are "short"
    pub short_kick_yards: Yard,

    pub first_half_short_kick: UntimedMix,
    pub first_half_long_kick: UntimedMix,
    pub first_half_out_of_range: UntimedMix,

    pub second_half_leading_in_range: UntimedMix,
    pub second_half_leading_out_of_range: UntimedMix,

    /// Tied, or behind by no more than a field goal
    pub second_half_close_in_range: UntimedMix,
    pub second_half_close_out_of_range: UntimedMix,

    pub second_half_trailing_in_range: UntimedMix,
    pub second_half_trailing_out_of_range: UntimedMix,
}

impl Default for UntimedConfig {
    fn default() -> Self {
        Self {
            short_kick_yards: 35,

            first_half_short_kick: mix(0.85, 0.10, 0.05),
            first_half_long_kick: mix(0.60, 0.15, 0.25),
            first_half_out_of_range: mix(0.0, 0.30, 0.70),

            second_half_leading_in_range: mix(0.70, 0.0, 0.30),
            second_half_leading_out_of_range: mix(0.0, 0.0, 1.0),

            second_half_close_in_range: mix(0.95, 0.05, 0.0),
            second_half_close_out_of_range: mix(0.0, 1.0, 0.0),

            second_half_trailing_in_range: mix(0.05, 0.90, 0.05),
            second_half_trailing_out_of_range: mix(0.0, 0.90, 0.10),
        }
    }
}

/// Complete computer-coach profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachProfile {
    /// Name of this profile (set from filename)
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub fourth_down: FourthDownConfig,
    #[serde(default)]
    pub extra_point: ExtraPointConfig,
    #[serde(default)]
    pub untimed: UntimedConfig,
}

impl Default for CoachProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            style: StyleConfig::default(),
            fourth_down: FourthDownConfig::default(),
            extra_point: ExtraPointConfig::default(),
            untimed: UntimedConfig::default(),
        }
    }
}

impl CoachProfile {
    /// Check that every probability is usable
    pub fn validate(&self) -> std::result::Result<(), String> {
        for (name, weights) in [
            ("style.late_trailing", &self.style.late_trailing),
            ("style.late_leading", &self.style.late_leading),
            ("style.late_tied", &self.style.late_tied),
            ("style.standard", &self.style.standard),
        ] {
            if weights.is_empty() {
                return Err(format!("{} has no entries", name));
            }
            if weights.iter().any(|w| !(0.0..=1.0).contains(&w.weight)) {
                return Err(format!("{} has a weight outside [0, 1]", name));
            }
        }

        let fd = &self.fourth_down;
        if fd.short_yards > fd.medium_yards {
            return Err(format!(
                "fourth_down.short_yards ({}) must not exceed medium_yards ({})",
                fd.short_yards, fd.medium_yards
            ));
        }
        for (name, p) in [
            ("fourth_down.goal_short", fd.goal_short),
            ("fourth_down.goal_medium", fd.goal_medium),
            ("fourth_down.goal_long", fd.goal_long),
            ("fourth_down.short", fd.short),
            ("fourth_down.medium", fd.medium),
            ("fourth_down.long", fd.long),
            ("extra_point.down_eight_or_more", self.extra_point.down_eight_or_more),
            ("extra_point.down_seven", self.extra_point.down_seven),
            ("extra_point.down_six", self.extra_point.down_six),
            ("extra_point.two_point_when_tied", self.extra_point.two_point_when_tied),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(format!("{} ({}) must be a probability", name, p));
            }
        }

        let u = &self.untimed;
        for (name, m) in [
            ("first_half_short_kick", u.first_half_short_kick),
            ("first_half_long_kick", u.first_half_long_kick),
            ("first_half_out_of_range", u.first_half_out_of_range),
            ("second_half_leading_in_range", u.second_half_leading_in_range),
            ("second_half_leading_out_of_range", u.second_half_leading_out_of_range),
            ("second_half_close_in_range", u.second_half_close_in_range),
            ("second_half_close_out_of_range", u.second_half_close_out_of_range),
            ("second_half_trailing_in_range", u.second_half_trailing_in_range),
            ("second_half_trailing_out_of_range", u.second_half_trailing_out_of_range),
        ] {
            if [m.field_goal, m.go_for_it, m.end_half].iter().any(|w| *w < 0.0) {
                return Err(format!("untimed.{} has a negative weight", name));
            }
            if m.field_goal + m.go_for_it + m.end_half <= 0.0 {
                return Err(format!("untimed.{} has no positive weight", name));
            }
        }

        Ok(())
    }
}

/// Load a coach profile by name
///
/// Loads from `data/coaches/{name}.toml`
pub fn load_coach(name: &str) -> Result<CoachProfile> {
    let mut coach = load_coach_from(&coach_path(name))?;
    coach.name = name.to_string();
    Ok(coach)
}

/// Load a coach profile from an explicit path
pub fn load_coach_from(path: &Path) -> Result<CoachProfile> {
    let contents = fs::read_to_string(path).map_err(|e| {
        GridironError::CoachProfile(format!("Failed to read coach file {:?}: {}", path, e))
    })?;

    let mut coach: CoachProfile = toml::from_str(&contents)
        .map_err(|e| GridironError::CoachProfile(format!("Failed to parse coach TOML: {}", e)))?;

    coach.validate().map_err(GridironError::CoachProfile)?;

    if coach.name.is_empty() {
        coach.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }
    Ok(coach)
}

/// Get path to a coach file
pub fn coach_path(name: &str) -> PathBuf {
    PathBuf::from("data/coaches").join(format!("{}.toml", name))
}
