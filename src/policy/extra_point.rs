//! One-or-two decision after a touchdown

use crate::core::dice::{Dice, DrawPurpose};
use crate::policy::coach::CoachProfile;
use crate::policy::{ConversionKind, GameSituation};

/// Chance of going for two
///
/// `situation.lead` is the margin before the touchdown's six points. Only
/// late in a half does the coach consider anything but the kick.
pub fn two_point_probability(coach: &CoachProfile, situation: &GameSituation) -> f64 {
    if !situation.is_late() {
        return 0.0;
    }
    let cfg = &coach.extra_point;
    match situation.lead {
        lead if lead <= -8 => cfg.down_eight_or_more,
        -7 => cfg.down_seven,
        -6 => cfg.down_six,
        0 => cfg.two_point_when_tied,
        _ => 0.0,
    }
}

pub fn choose_conversion<D: Dice + ?Sized>(
    coach: &CoachProfile,
    situation: &GameSituation,
    dice: &mut D,
) -> ConversionKind {
    let p = two_point_probability(coach, situation);
    if p <= 0.0 {
        return ConversionKind::OnePoint;
    }
    if dice.draw(DrawPurpose::ConversionChoice) < p {
        ConversionKind::TwoPoint
    } else {
        ConversionKind::OnePoint
    }
}
