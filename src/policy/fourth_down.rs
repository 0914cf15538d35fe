//! Fourth-down aggressiveness

use crate::core::dice::{Dice, DrawPurpose};
use crate::core::types::Yard;
use crate::drive::ToGo;
use crate::policy::coach::CoachProfile;
use crate::policy::{FourthDownCall, GameSituation};

/// Probability the coach goes for it
///
/// Base rate from the distance bucket, plus a field-position bonus and a
/// late-game bonus in the last five minutes of the second half.
pub fn go_for_it_probability(
    coach: &CoachProfile,
    situation: &GameSituation,
    yards_to_goal: Yard,
    to_go: ToGo,
) -> f64 {
    let cfg = &coach.fourth_down;

    let mut p = match to_go {
        ToGo::Goal(_) if yards_to_goal <= cfg.short_yards => cfg.goal_short,
        ToGo::Goal(_) if yards_to_goal <= cfg.medium_yards => cfg.goal_medium,
        ToGo::Goal(_) => cfg.goal_long,
        ToGo::Yards(n) if n <= cfg.short_yards => cfg.short,
        ToGo::Yards(n) if n <= cfg.medium_yards => cfg.medium,
        ToGo::Yards(_) => cfg.long,
    };

    if yards_to_goal <= cfg.red_zone_yards {
        p += cfg.red_zone_bonus;
    } else if yards_to_goal <= cfg.scoring_territory_yards {
        p += cfg.scoring_territory_bonus;
    }

    if situation.is_final_minutes() {
        if situation.lead < -cfg.big_deficit {
            p += cfg.big_deficit_bonus;
        } else if situation.lead < 0 {
            p += cfg.trailing_bonus;
        } else if situation.lead <= cfg.close_lead {
            p += cfg.close_game_bonus;
        }
    }

    p
}

/// Bernoulli draw against `go_for_it_probability`
pub fn should_go_for_it<D: Dice + ?Sized>(
    coach: &CoachProfile,
    situation: &GameSituation,
    yards_to_goal: Yard,
    to_go: ToGo,
    dice: &mut D,
) -> bool {
    let p = go_for_it_probability(coach, situation, yards_to_goal, to_go);
    dice.draw(DrawPurpose::GoForIt) < p
}

/// Go for it if the draw says so, otherwise kick in range or punt
pub fn choose_fourth_down_call<D: Dice + ?Sized>(
    coach: &CoachProfile,
    situation: &GameSituation,
    yards_to_goal: Yard,
    to_go: ToGo,
    in_field_goal_range: bool,
    dice: &mut D,
) -> FourthDownCall {
    if should_go_for_it(coach, situation, yards_to_goal, to_go, dice) {
        FourthDownCall::GoForIt
    } else if in_field_goal_range {
        FourthDownCall::FieldGoal
    } else {
        FourthDownCall::Punt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dice::ScriptedDice;
    use crate::core::types::Half;

    fn early() -> GameSituation {
        GameSituation::new(Half::First, 150, 0)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_base_rates() {
        let coach = CoachProfile::default();
        assert!(close(go_for_it_probability(&coach, &early(), 60, ToGo::Yards(2)), 0.30));
        assert!(close(go_for_it_probability(&coach, &early(), 60, ToGo::Yards(5)), 0.15));
        assert!(close(go_for_it_probability(&coach, &early(), 60, ToGo::Yards(9)), 0.05));
    }

    #[test]
    fn test_goal_to_go_uses_distance_to_goal() {
        let coach = CoachProfile::default();
        // 0.60 base + 0.15 red zone
        assert!(close(go_for_it_probability(&coach, &early(), 3, ToGo::Goal(3)), 0.75));
        assert!(close(go_for_it_probability(&coach, &early(), 5, ToGo::Goal(5)), 0.55));
        assert!(close(go_for_it_probability(&coach, &early(), 8, ToGo::Goal(8)), 0.35));
    }

    #[test]
    fn test_field_position_bonus() {
        let coach = CoachProfile::default();
        assert!(close(go_for_it_probability(&coach, &early(), 35, ToGo::Yards(2)), 0.35));
        assert!(close(go_for_it_probability(&coach, &early(), 41, ToGo::Yards(2)), 0.30));
    }

    #[test]
    fn test_late_game_bonus_only_in_second_half() {
        let coach = CoachProfile::default();
        let first = GameSituation::new(Half::First, 20, -10);
        let second = GameSituation::new(Half::Second, 20, -10);
        assert!(close(go_for_it_probability(&coach, &first, 60, ToGo::Yards(9)), 0.05));
        assert!(close(go_for_it_probability(&coach, &second, 60, ToGo::Yards(9)), 0.35));

        let down_two = GameSituation::new(Half::Second, 20, -2);
        assert!(close(go_for_it_probability(&coach, &down_two, 60, ToGo::Yards(9)), 0.20));

        let up_seven = GameSituation::new(Half::Second, 20, 7);
        assert!(close(go_for_it_probability(&coach, &up_seven, 60, ToGo::Yards(9)), 0.10));

        let up_ten = GameSituation::new(Half::Second, 20, 10);
        assert!(close(go_for_it_probability(&coach, &up_ten, 60, ToGo::Yards(9)), 0.05));
    }

    #[test]
    fn test_decision_is_a_draw() {
        let coach = CoachProfile::default();
        let mut dice = ScriptedDice::new(0)
            .with_draw(DrawPurpose::GoForIt, 0.29)
            .with_draw(DrawPurpose::GoForIt, 0.30);
        assert!(should_go_for_it(&coach, &early(), 60, ToGo::Yards(2), &mut dice));
        assert!(!should_go_for_it(&coach, &early(), 60, ToGo::Yards(2), &mut dice));
    }

    #[test]
    fn test_kick_in_range_otherwise_punt() {
        let coach = CoachProfile::default();
        let mut dice = ScriptedDice::new(0)
            .with_draw(DrawPurpose::GoForIt, 0.99)
            .with_draw(DrawPurpose::GoForIt, 0.99);
        assert_eq!(
            choose_fourth_down_call(&coach, &early(), 45, ToGo::Yards(7), true, &mut dice),
            FourthDownCall::FieldGoal
        );
        assert_eq!(
            choose_fourth_down_call(&coach, &early(), 65, ToGo::Yards(7), false, &mut dice),
            FourthDownCall::Punt
        );
    }
}
