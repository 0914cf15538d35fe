//! Markdown play aid

use std::fmt::Write;

use crate::core::config::rules;
use crate::core::types::PlayStyle;
use crate::report::tables::COLUMNS;
use crate::tables::{
    self, turnover_faces, ConversionRow, DriveRow, FIELD_GOAL_DISTANCE, FOURTH_DOWN_TABLE, TABLE_DIE, TWO_POINT_DIE,
};

fn cell(row: DriveRow) -> String {
    match row {
        DriveRow::Gain { yards, time } => format!("{} / {}", yards, time),
        DriveRow::Touchdown => "**TD** / 1-20".to_string(),
    }
}

fn faces(style: PlayStyle) -> String {
    turnover_faces(style)
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reference sheet for playing at the table
pub fn play_aid() -> String {
    let r = rules();
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "# Gridiron Dice Football - Play Aid\n");
    let _ = writeln!(out, "## Drive Outcome Tables\n");
    let _ = writeln!(out, "Roll a d20 and consult the column for your play style.\n");
    let _ = writeln!(out, "**Format:** Yards / Time Blocks (1 block = 10 seconds)\n");

    let _ = write!(out, "| Roll |");
    for style in COLUMNS {
        let _ = write!(out, " {} |", style.label());
    }
    let _ = writeln!(out, "\n|------|----------|----------|----------|");
    for roll in 1..=TABLE_DIE {
        let _ = write!(out, "| {:>4} |", roll);
        for style in COLUMNS {
            let _ = write!(out, " {} |", cell(tables::table(style).row(roll)));
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "\nTouchdown rows: roll a d20 for time, capped at the time of the cheapest row that covers the distance.\n");

    let _ = writeln!(out, "## Turnovers\n");
    let _ = writeln!(out, "Roll a second d20 with every drive. A turnover face loses the ball at the end spot.\n");
    let _ = writeln!(out, "| Style | Turnover faces | Rate |");
    let _ = writeln!(out, "|-------|----------------|------|");
    for style in COLUMNS {
        let _ = writeln!(
            out,
            "| {} | {} | {:.0}% |",
            style.label(),
            faces(style),
            100.0 * tables::turnover_rate(style)
        );
    }

    let _ = writeln!(out, "\n## Fourth Down\n");
    let _ = writeln!(
        out,
        "- Gained under {} yards: yards to go = {} minus yards gained",
        r.first_down_yards, r.first_down_yards
    );
    let _ = writeln!(out, "- Otherwise roll for yards to go: Run-First d8, Balanced d10, Pass-First d20");
    let _ = writeln!(out, "- Yards to go reaching the goal line is fourth and goal\n");
    let _ = writeln!(out, "| Roll | Go For It | FG Make Distance |");
    let _ = writeln!(out, "|------|-----------|------------------|");
    for (index, (conversion, make)) in FOURTH_DOWN_TABLE.iter().zip(FIELD_GOAL_DISTANCE.iter()).enumerate() {
        let conversion = match conversion {
            ConversionRow::Yards(yards) => yards.to_string(),
            ConversionRow::Touchdown => "**TD**".to_string(),
        };
        let _ = writeln!(out, "| {:>4} | {} | {} |", index + 1, conversion, make);
    }

    let _ = writeln!(out, "\n## Game Rules Summary\n");
    let _ = writeln!(
        out,
        "- **Halves:** {} blocks each. Bombers receive first, Gunners receive the second half.",
        r.blocks_per_half
    );
    let _ = writeln!(out, "- **Kickoffs:** Receiving team starts at its own {}.", r.kickoff_yard_line);
    let _ = writeln!(
        out,
        "- **Safety:** Drive ends at or behind the offense's own goal line. 2 points to the defense, who receive at their own {}.",
        r.kickoff_yard_line
    );
    let _ = writeln!(
        out,
        "- **Touchdown:** 6 points. A turnover roll on the same drive cancels it; the defense takes over at its own {}.",
        r.touchback_yard_line
    );
    let _ = writeln!(
        out,
        "- **Extra point:** Kick is good if a field-goal roll makes {}+ yards. Two-point try is good on d{} {}+.",
        r.extra_point_distance, TWO_POINT_DIE, r.two_point_target
    );
    let _ = writeln!(
        out,
        "- **Field goal:** {} yards or closer. Good if the make distance reaches. A miss gives the ball to the defense {} yards back, no deeper than its own {}.",
        r.field_goal_range, r.missed_field_goal_step_back, r.touchback_yard_line
    );
    let _ = writeln!(
        out,
        "- **Punt:** {} yards. Anything past the receiving team's {} comes out to the {}.",
        r.punt_yards, r.touchback_yard_line, r.touchback_yard_line
    );
    let _ = writeln!(
        out,
        "- **End of half:** If a drive needs more time than is left, use the longest row that leaves a block. A drive that stops short gets one untimed down: kick, go for it, or let the half end."
    );

    out
}
