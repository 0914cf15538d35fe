//! Play-style selection

use crate::core::dice::{Dice, DrawPurpose};
use crate::core::types::PlayStyle;
use crate::policy::coach::{CoachProfile, StyleWeight};
use crate::policy::{pick_weighted, GameSituation};

/// Weights the coach uses in this situation
///
/// Trailing late favours the pass, leading late favours the run.
pub fn style_weights<'a>(coach: &'a CoachProfile, situation: &GameSituation) -> &'a [StyleWeight] {
    let styles = &coach.style;
    if situation.is_late() {
        match situation.lead {
            lead if lead < 0 => &styles.late_trailing,
            lead if lead > 0 => &styles.late_leading,
            _ => &styles.late_tied,
        }
    } else {
        &styles.standard
    }
}

/// Draw a style for the next drive; balanced if the weights fall short
pub fn choose_style<D: Dice + ?Sized>(
    coach: &CoachProfile,
    situation: &GameSituation,
    dice: &mut D,
) -> PlayStyle {
    let weights: Vec<(PlayStyle, f64)> = style_weights(coach, situation)
        .iter()
        .map(|w| (w.style, w.weight))
        .collect();
    let sample = dice.draw(DrawPurpose::Style);
    pick_weighted(&weights, sample).unwrap_or(PlayStyle::Balanced)
}
