//! Untimed final down when the clock runs out mid-drive

use crate::core::dice::{Dice, DrawPurpose};
use crate::core::types::{Half, Yard};
use crate::policy::coach::{CoachProfile, UntimedMix};
use crate::policy::{pick_weighted, GameSituation, UntimedCall};

/// Weights for the final down
///
/// `kick_distance` is the yards to goal from the spot of the last play.
pub fn untimed_mix(
    coach: &CoachProfile,
    situation: &GameSituation,
    in_range: bool,
    kick_distance: Yard,
) -> UntimedMix {
    let cfg = &coach.untimed;
    match situation.half {
        Half::First => {
            if !in_range {
                cfg.first_half_out_of_range
            } else if kick_distance <= cfg.short_kick_yards {
                cfg.first_half_short_kick
            } else {
                cfg.first_half_long_kick
            }
        }
        Half::Second => match (situation.lead, in_range) {
            (lead, true) if lead > 0 => cfg.second_half_leading_in_range,
            (lead, false) if lead > 0 => cfg.second_half_leading_out_of_range,
            (lead, true) if lead >= -3 => cfg.second_half_close_in_range,
            (lead, false) if lead >= -3 => cfg.second_half_close_out_of_range,
            (_, true) => cfg.second_half_trailing_in_range,
            (_, false) => cfg.second_half_trailing_out_of_range,
        },
    }
}

/// Draw the final-down call. A kick is never chosen out of range.
pub fn choose_untimed_call<D: Dice + ?Sized>(
    coach: &CoachProfile,
    situation: &GameSituation,
    in_range: bool,
    kick_distance: Yard,
    dice: &mut D,
) -> UntimedCall {
    let mix = untimed_mix(coach, situation, in_range, kick_distance);
    let field_goal = if in_range { mix.field_goal } else { 0.0 };
    let total = field_goal + mix.go_for_it + mix.end_half;
    if total <= 0.0 {
        return UntimedCall::EndHalf;
    }

    let weights = [
        (UntimedCall::FieldGoal, field_goal / total),
        (UntimedCall::GoForIt, mix.go_for_it / total),
        (UntimedCall::EndHalf, mix.end_half / total),
    ];
    let sample = dice.draw(DrawPurpose::UntimedDown);
    pick_weighted(&weights, sample).unwrap_or(UntimedCall::EndHalf)
}
