//! Drive resolution and drive records

pub mod outcome;
pub mod resolver;

pub use outcome::{ConversionResult, DriveLog, DriveOutcome, ToGo};
pub use resolver::{
    attempt_extra_point, attempt_field_goal, attempt_fourth_down, fourth_down_distance, resolve_drive,
    resolve_extra_point, resolve_fourth_down, resolve_untimed_down, start_drive, DriveProgress, DriveResolution,
    DriveState, FourthDownAttempt, FourthDownSituation, PendingTouchdown, Possession, UntimedSituation,
};
