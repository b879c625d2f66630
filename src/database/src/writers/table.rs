use crate::error::DatabaseError;
use core::league::{LeagueTable, LeagueTableRow};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const COLUMNS: [(&str, usize); 10] = [
    ("Pl", 5),
    ("Team", 24),
    ("P", 5),
    ("W", 4),
    ("D", 4),
    ("L", 5),
    ("GF", 5),
    ("GA", 5),
    ("GD", 5),
    ("Pts", 3),
];

/// Render the standings block: header, dash rule and one fixed-width row
/// per team in place order.
pub fn format_table(table: &LeagueTable) -> String {
    let mut out = String::new();

    for (label, width) in COLUMNS {
        let _ = write!(out, "{:<width$}", label, width = width);
    }
    let line_len = out.len();
    out.push('\n');
    let _ = writeln!(out, "{}", "-".repeat(line_len));

    for row in table.standings() {
        let values = [
            row.place.to_string(),
            row.team.clone(),
            row.played.to_string(),
            row.win.to_string(),
            row.draw.to_string(),
            row.lost.to_string(),
            row.goals_for.to_string(),
            row.goals_against.to_string(),
            row.goal_diff.to_string(),
            row.points.to_string(),
        ];

        for (value, (_, width)) in values.iter().zip(COLUMNS) {
            let _ = write!(out, "{:<width$}", value, width = width);
        }
        while out.ends_with(' ') {
            out.pop();
        }
        out.push('\n');
    }

    out
}

pub fn write_table(path: &Path, table: &LeagueTable) -> Result<(), DatabaseError> {
    fs::write(path, format_table(table))?;
    Ok(())
}

/// Parse a standings block back into rows, in file (place) order.
pub fn read_table(path: &Path) -> Result<Vec<LeagueTableRow>, DatabaseError> {
    let content = fs::read_to_string(path)?;
    let file = path.display().to_string();

    let mut rows = Vec::new();

    for (number, line) in content.lines().enumerate().skip(2) {
        if line.trim().is_empty() {
            continue;
        }

        let padded = format!("{:<66}", line);
        let mut fields = Vec::with_capacity(COLUMNS.len());
        let mut offset = 0;
        for (_, width) in COLUMNS {
            fields.push(padded[offset..(offset + width).min(padded.len())].trim());
            offset += width;
        }

        let numeric = |idx: usize| -> Result<i16, DatabaseError> {
            fields[idx].parse::<i16>().map_err(|_| {
                DatabaseError::parse(
                    &file,
                    number + 1,
                    format!("bad {} value {:?}", COLUMNS[idx].0, fields[idx]),
                )
            })
        };

        rows.push(LeagueTableRow {
            place: numeric(0)?,
            team: String::from(fields[1]),
            played: numeric(2)?,
            win: numeric(3)?,
            draw: numeric(4)?,
            lost: numeric(5)?,
            goals_for: numeric(6)?,
            goals_against: numeric(7)?,
            goal_diff: numeric(8)?,
            points: numeric(9)?,
        });
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_table() -> LeagueTable {
        let names: Vec<String> = ["Ashford", "Bankside", "Milltown", "Riverside"]
            .iter()
            .map(|n| String::from(*n))
            .collect();
        let mut table = LeagueTable::new(&names);

        table.update(0, 1, 3, 1);
        table.update(2, 3, 0, 0);
        table.update(1, 2, 2, 4);
        table.update(3, 0, 1, 2);
        table.rank();

        table
    }

    #[test]
    fn header_has_the_canonical_layout() {
        let text = format_table(&sample_table());
        let mut lines = text.lines();

        assert_eq!(
            "Pl   Team                    P    W   D   L    GF   GA   GD   Pts",
            lines.next().unwrap()
        );
        assert!(lines.next().unwrap().chars().all(|c| c == '-'));
    }

    #[test]
    fn rows_are_in_place_order() {
        let text = format_table(&sample_table());
        let first_row = text.lines().nth(2).unwrap();

        assert!(first_row.starts_with('1'));
    }

    #[test]
    fn table_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.txt");

        let table = sample_table();
        write_table(&path, &table).unwrap();
        let rows = read_table(&path).unwrap();

        assert_eq!(table.rows.len(), rows.len());
        for loaded in &rows {
            let original = table
                .rows
                .iter()
                .find(|r| r.team == loaded.team)
                .expect("team preserved");
            assert_eq!(original, loaded);
        }
    }
}
