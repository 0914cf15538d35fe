//! Dice tables
//!
//! All tables are indexed by a d20 face (1..=20). A face outside that
//! range is a generator bug and panics instead of being clamped.

use serde::{Deserialize, Serialize};

use crate::core::config::rules;
use crate::core::types::{Block, PlayStyle, Yard};

/// Faces on every table die
pub const TABLE_DIE: u32 = 20;

/// Die rolled for the clock cost of a touchdown row
pub const TOUCHDOWN_CLOCK_DIE: u32 = 20;

/// Die rolled for a two-point try
pub const TWO_POINT_DIE: u32 = 10;

/// One row of a drive outcome table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveRow {
    /// Net yards and clock cost of the drive
    Gain { yards: Yard, time: Block },
    /// Drive scores; clock cost is rolled (1-20) and capped
    Touchdown,
}

const fn gain(yards: Yard, time: Block) -> DriveRow {
    DriveRow::Gain { yards, time }
}

const TD: DriveRow = DriveRow::Touchdown;

/// A 20-row outcome table for one play style
#[derive(Debug)]
pub struct OutcomeTable {
    pub style: PlayStyle,
    rows: [DriveRow; 20],
}

/// Flat clock cost, small steady gains
pub static RUN_TABLE: OutcomeTable = OutcomeTable {
    style: PlayStyle::Run,
    rows: [
        gain(-2, 12), gain(0, 12), gain(2, 12), gain(3, 12), gain(4, 12),
        gain(6, 12), gain(8, 12), gain(10, 15), gain(12, 17), gain(15, 18),
        gain(18, 20), gain(22, 22), gain(26, 24), gain(30, 27), gain(34, 32),
        gain(38, 35), gain(42, 39), gain(60, 40), gain(90, 45), TD,
    ],
};

pub static BALANCED_TABLE: OutcomeTable = OutcomeTable {
    style: PlayStyle::Balanced,
    rows: [
        gain(-10, 4), gain(0, 5), gain(3, 6), gain(5, 6), gain(6, 7),
        gain(7, 8), gain(9, 9), gain(12, 10), gain(15, 11), gain(18, 14),
        gain(25, 17), gain(32, 19), gain(38, 22), gain(45, 26), gain(55, 31),
        gain(68, 38), TD, TD, TD, TD,
    ],
};

/// Widest swings, cheapest clock
pub static PASS_TABLE: OutcomeTable = OutcomeTable {
    style: PlayStyle::Pass,
    rows: [
        gain(-10, 2), gain(-5, 3), gain(0, 4), gain(5, 4), gain(8, 5),
        gain(12, 6), gain(15, 7), gain(18, 8), gain(22, 9), gain(28, 12),
        gain(35, 15), gain(42, 17), gain(50, 20), gain(60, 24), gain(70, 29),
        gain(80, 36), TD, TD, TD, TD,
    ],
};

/// Outcome table for a style
pub fn table(style: PlayStyle) -> &'static OutcomeTable {
    match style {
        PlayStyle::Run => &RUN_TABLE,
        PlayStyle::Balanced => &BALANCED_TABLE,
        PlayStyle::Pass => &PASS_TABLE,
    }
}

impl OutcomeTable {
    /// Row for a d20 face
    pub fn row(&self, roll: u32) -> DriveRow {
        self.rows[face_index(roll)]
    }

    pub fn rows(&self) -> &[DriveRow; 20] {
        &self.rows
    }

    /// Non-touchdown rows as (yards, time), in roll order
    pub fn gains(&self) -> impl Iterator<Item = (Yard, Block)> + '_ {
        self.rows.iter().filter_map(|row| match *row {
            DriveRow::Gain { yards, time } => Some((yards, time)),
            DriveRow::Touchdown => None,
        })
    }

    /// Cheapest clock cost of any gain row that covers `yards_needed`
    ///
    /// When no row covers the distance, the most expensive gain row is used.
    pub fn touchdown_time_cap(&self, yards_needed: Yard) -> Block {
        self.gains()
            .filter(|&(yards, _)| yards >= yards_needed)
            .map(|(_, time)| time)
            .min()
            .unwrap_or_else(|| self.gains().map(|(_, time)| time).max().unwrap_or(0))
    }

    /// Gain row with the largest clock cost that leaves at least one block
    ///
    /// Ties go to the later row. With no fitting row the drive is (0, 0).
    pub fn largest_fitting_row(&self, blocks_left: Block) -> (Yard, Block) {
        let limit = blocks_left.saturating_sub(1);
        self.gains()
            .filter(|&(_, time)| time <= limit)
            .fold((0, 0), |best, row| if row.1 >= best.1 { row } else { best })
    }
}

/// Turnover-die faces that cost the offense the ball
pub fn turnover_faces(style: PlayStyle) -> &'static [u32] {
    match style {
        PlayStyle::Run => &[1],
        PlayStyle::Balanced => &[1, 2],
        PlayStyle::Pass => &[1, 2, 3, 4],
    }
}

pub fn is_turnover(style: PlayStyle, roll: u32) -> bool {
    assert_face(roll);
    turnover_faces(style).contains(&roll)
}

/// Designed turnover probability for a style
pub fn turnover_rate(style: PlayStyle) -> f64 {
    turnover_faces(style).len() as f64 / TABLE_DIE as f64
}

/// One row of the fourth-down conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionRow {
    Yards(Yard),
    Touchdown,
}

pub static FOURTH_DOWN_TABLE: [ConversionRow; 20] = [
    ConversionRow::Yards(-10),
    ConversionRow::Yards(-5),
    ConversionRow::Yards(-3),
    ConversionRow::Yards(0),
    ConversionRow::Yards(1),
    ConversionRow::Yards(2),
    ConversionRow::Yards(3),
    ConversionRow::Yards(4),
    ConversionRow::Yards(5),
    ConversionRow::Yards(6),
    ConversionRow::Yards(7),
    ConversionRow::Yards(8),
    ConversionRow::Yards(10),
    ConversionRow::Yards(12),
    ConversionRow::Yards(15),
    ConversionRow::Yards(18),
    ConversionRow::Yards(20),
    ConversionRow::Yards(25),
    ConversionRow::Yards(30),
    ConversionRow::Touchdown,
];

pub fn conversion_row(roll: u32) -> ConversionRow {
    FOURTH_DOWN_TABLE[face_index(roll)]
}

/// Longest kick that is good for each d20 face
pub static FIELD_GOAL_DISTANCE: [Yard; 20] = [
    0, 15, 20, 25, 30, 30, 30, 30, 30, 35, 35, 35, 35, 40, 40, 40, 40, 45, 45, 50,
];

pub fn field_goal_make_distance(roll: u32) -> Yard {
    FIELD_GOAL_DISTANCE[face_index(roll)]
}

/// Whether a kick rolled `roll` is good from `distance` yards
pub fn kick_is_good(roll: u32, distance: Yard) -> bool {
    field_goal_make_distance(roll) >= distance
}

/// Whether a one-point kick rolled `roll` is good
pub fn extra_point_is_good(roll: u32) -> bool {
    kick_is_good(roll, rules().extra_point_distance)
}

/// Whether a d10 two-point roll is good
pub fn two_point_is_good(roll: u32) -> bool {
    assert!(
        (1..=TWO_POINT_DIE).contains(&roll),
        "two-point roll {} outside 1..={}",
        roll,
        TWO_POINT_DIE
    );
    roll >= rules().two_point_target
}

fn assert_face(roll: u32) {
    assert!(
        (1..=TABLE_DIE).contains(&roll),
        "table roll {} outside 1..={}",
        roll,
        TABLE_DIE
    );
}

fn face_index(roll: u32) -> usize {
    assert_face(roll);
    (roll - 1) as usize
}
