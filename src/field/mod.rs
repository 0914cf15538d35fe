//! Field coordinates and geometry
//!
//! Positions are absolute: x=0 is the Bombers' goal line, x=100 the
//! Gunners'. Each team advances toward the other's goal, so every
//! function here is parameterised by the team in possession.

use crate::core::config::rules;
use crate::core::types::{Team, Yard};

/// Last coordinate on the field
pub const FIELD_LENGTH: Yard = 100;

/// Distance from `x` to the goal `team` is attacking
pub fn yards_to_goal(team: Team, x: Yard) -> Yard {
    match team {
        Team::Bombers => FIELD_LENGTH - x,
        Team::Gunners => x,
    }
}

/// Distance from `team`'s own goal line to `x`
pub fn yards_from_own_goal(team: Team, x: Yard) -> Yard {
    FIELD_LENGTH - yards_to_goal(team, x)
}

/// Position after gaining `yards` without clamping to the field
///
/// Safety detection needs this value: once clamped, a loss that ran past
/// the goal line is indistinguishable from one that stopped on it.
pub fn raw_advance(team: Team, x: Yard, yards: Yard) -> Yard {
    x + team.direction() * yards
}

/// Position after gaining (or losing) `yards`, clamped to [0, 100]
pub fn advance(team: Team, x: Yard, yards: Yard) -> Yard {
    clamp_to_field(raw_advance(team, x, yards))
}

pub fn clamp_to_field(x: Yard) -> Yard {
    x.clamp(0, FIELD_LENGTH)
}

/// True once `x` reaches or passes the goal `team` is attacking
pub fn is_touchdown(team: Team, x: Yard) -> bool {
    match team {
        Team::Bombers => x >= FIELD_LENGTH,
        Team::Gunners => x <= 0,
    }
}

/// True if the unclamped position `raw_x` is at or behind `team`'s own goal line
pub fn is_safety(team: Team, raw_x: Yard) -> bool {
    match team {
        Team::Bombers => raw_x <= 0,
        Team::Gunners => raw_x >= FIELD_LENGTH,
    }
}

/// Whether a field goal may be attempted from `x`
pub fn within_field_goal_range(team: Team, x: Yard) -> bool {
    yards_to_goal(team, x) <= rules().field_goal_range
}

/// Where `receiving` starts after a kickoff
pub fn kickoff_spot(receiving: Team) -> Yard {
    receiving.own_yard_line(rules().kickoff_yard_line)
}

/// `team`'s own 20 (or whatever the configured touchback line is)
pub fn touchback_spot(team: Team) -> Yard {
    team.own_yard_line(rules().touchback_yard_line)
}

/// Spot for the receiving team after `kicking` punts from `x`
///
/// The punt travels a fixed distance; anything that would land beyond the
/// receiving team's touchback line comes out to it.
pub fn punt_spot(kicking: Team, x: Yard) -> Yard {
    let landing = clamp_to_field(raw_advance(kicking, x, rules().punt_yards));
    touchback_floor(kicking.opponent(), landing)
}

/// Spot for the receiving team after `kicking` misses a field goal from `x`
pub fn missed_field_goal_spot(kicking: Team, x: Yard) -> Yard {
    let spot = clamp_to_field(raw_advance(kicking, x, -rules().missed_field_goal_step_back));
    touchback_floor(kicking.opponent(), spot)
}

/// Keep `receiving` from starting deeper than its touchback line
fn touchback_floor(receiving: Team, x: Yard) -> Yard {
    if yards_from_own_goal(receiving, x) < rules().touchback_yard_line {
        touchback_spot(receiving)
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yards_to_goal() {
        assert_eq!(yards_to_goal(Team::Bombers, 30), 70);
        assert_eq!(yards_to_goal(Team::Gunners, 30), 30);
        assert_eq!(yards_to_goal(Team::Gunners, 70), 70);
    }

    #[test]
    fn test_advance_clamps() {
        assert_eq!(advance(Team::Bombers, 90, 25), 100);
        assert_eq!(advance(Team::Gunners, 10, 25), 0);
        assert_eq!(advance(Team::Bombers, 5, -10), 0);
        assert_eq!(advance(Team::Gunners, 95, -10), 100);
        assert_eq!(advance(Team::Gunners, 70, 12), 58);
    }

    #[test]
    fn test_advance_then_distance_round_trip() {
        for team in Team::ALL {
            for x in [20, 35, 50, 65, 80] {
                for yards in [-10, -2, 0, 3, 12, 15] {
                    let end = advance(team, x, yards);
                    assert_eq!(yards_to_goal(team, end), yards_to_goal(team, x) - yards);
                }
            }
        }
    }

    #[test]
    fn test_touchdown_is_boundary_inclusive() {
        assert!(is_touchdown(Team::Bombers, 100));
        assert!(!is_touchdown(Team::Bombers, 99));
        assert!(is_touchdown(Team::Gunners, 0));
        assert!(!is_touchdown(Team::Gunners, 1));
    }

    #[test]
    fn test_safety_uses_unclamped_position() {
        // Bombers at their own 2 lose 10: clamped position is 0, raw is -8
        let raw = raw_advance(Team::Bombers, 2, -10);
        assert_eq!(raw, -8);
        assert!(is_safety(Team::Bombers, raw));

        let raw = raw_advance(Team::Gunners, 98, -10);
        assert!(is_safety(Team::Gunners, raw));

        // Stopping on the goal line counts
        assert!(is_safety(Team::Bombers, raw_advance(Team::Bombers, 10, -10)));
        assert!(!is_safety(Team::Bombers, raw_advance(Team::Bombers, 30, -10)));
        assert!(!is_safety(Team::Gunners, raw_advance(Team::Gunners, 70, -10)));
    }

    #[test]
    fn test_kickoff_spots() {
        assert_eq!(kickoff_spot(Team::Bombers), 30);
        assert_eq!(kickoff_spot(Team::Gunners), 70);
    }

    #[test]
    fn test_punt_spot() {
        assert_eq!(punt_spot(Team::Bombers, 30), 70);
        assert_eq!(punt_spot(Team::Gunners, 70), 30);
        // Lands inside the Gunners' 20: comes out to x=80
        assert_eq!(punt_spot(Team::Bombers, 45), 80);
        assert_eq!(punt_spot(Team::Gunners, 30), 20);
    }

    #[test]
    fn test_missed_field_goal_spot() {
        // Bombers miss from x=60 (40 yards out): ball back to x=53
        assert_eq!(missed_field_goal_spot(Team::Bombers, 60), 53);
        // Bombers miss from x=95: 88 is inside the Gunners' 20, so x=80
        assert_eq!(missed_field_goal_spot(Team::Bombers, 95), 80);
        assert_eq!(missed_field_goal_spot(Team::Gunners, 40), 47);
        assert_eq!(missed_field_goal_spot(Team::Gunners, 8), 20);
    }

    #[test]
    fn test_field_goal_range() {
        assert!(within_field_goal_range(Team::Bombers, 50));
        assert!(!within_field_goal_range(Team::Bombers, 49));
        assert!(within_field_goal_range(Team::Gunners, 50));
        assert!(!within_field_goal_range(Team::Gunners, 51));
    }
}
