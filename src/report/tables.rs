//! CSV dumps of the dice tables

use std::io;

use crate::core::error::Result;
use crate::core::types::PlayStyle;
use crate::tables::{self, ConversionRow, DriveRow, FIELD_GOAL_DISTANCE, FOURTH_DOWN_TABLE, TABLE_DIE};

fn drive_cells(row: DriveRow) -> [String; 2] {
    match row {
        DriveRow::Gain { yards, time } => [yards.to_string(), time.to_string()],
        DriveRow::Touchdown => ["TD".to_string(), "1-20".to_string()],
    }
}

/// Column order used on the printed tables
pub const COLUMNS: [PlayStyle; 3] = [PlayStyle::Balanced, PlayStyle::Run, PlayStyle::Pass];

/// Roll, then yards and time for each style
pub fn write_tables_csv<W: io::Write>(writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);

    let mut header = vec!["Roll".to_string()];
    for style in COLUMNS {
        header.push(format!("{} Yards", style.label()));
        header.push(format!("{} Time", style.label()));
    }
    out.write_record(&header)?;

    for roll in 1..=TABLE_DIE {
        let mut record = vec![roll.to_string()];
        for style in COLUMNS {
            record.extend(drive_cells(tables::table(style).row(roll)));
        }
        out.write_record(&record)?;
    }

    out.flush()?;
    Ok(())
}

/// Roll, fourth-down yards, field-goal make distance
pub fn write_special_teams_csv<W: io::Write>(writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(["Roll", "4th Down Yards", "FG Make Distance"])?;

    for (index, (conversion, make)) in FOURTH_DOWN_TABLE.iter().zip(FIELD_GOAL_DISTANCE.iter()).enumerate() {
        let conversion = match conversion {
            ConversionRow::Yards(yards) => yards.to_string(),
            ConversionRow::Touchdown => "TD".to_string(),
        };
        out.write_record([(index + 1).to_string(), conversion, make.to_string()])?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_csv_shape() {
        let mut buf = Vec::new();
        write_tables_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(
            lines[0],
            "Roll,Balanced Yards,Balanced Time,Run-First Yards,Run-First Time,Pass-First Yards,Pass-First Time"
        );
        assert!(lines.iter().skip(1).all(|l| l.split(',').count() == 7));
        assert!(text.contains("TD,1-20"));
    }

    #[test]
    fn test_special_teams_csv_has_every_roll() {
        let mut buf = Vec::new();
        write_special_teams_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 21);
        assert!(text.lines().last().unwrap().starts_with("20,"));
    }
}
