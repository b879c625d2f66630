use crate::error::DatabaseError;
use core::club::{N_STARTERS, N_SUBS, Position, Tactic, Teamsheet, TeamsheetEntry};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

// Fixed line layout: team name, tactic letter, a blank, eleven starters,
// a blank, five substitutes, a blank and the penalty taker.
const STARTERS_START: usize = 3;
const SUBS_START: usize = STARTERS_START + N_STARTERS + 1;
const PK_LINE: usize = SUBS_START + N_SUBS + 1;

pub fn load_teamsheet(path: &Path) -> Result<Teamsheet, DatabaseError> {
    let content = fs::read_to_string(path)?;
    let file = path.display().to_string();
    let lines: Vec<&str> = content.lines().collect();

    if lines.len() <= PK_LINE {
        return Err(DatabaseError::Capacity(format!(
            "{}: teamsheet has {} lines, {} required",
            file,
            lines.len(),
            PK_LINE + 1
        )));
    }

    let team_name = String::from(lines[0].trim_end());

    let tactic_letter = lines[1].trim();
    let tactic = tactic_letter
        .chars()
        .next()
        .and_then(Tactic::from_letter)
        .ok_or_else(|| {
            DatabaseError::parse(&file, 2, format!("unknown tactic {:?}", tactic_letter))
        })?;

    let mut starters = Vec::with_capacity(N_STARTERS);
    for (offset, line) in lines[STARTERS_START..STARTERS_START + N_STARTERS]
        .iter()
        .enumerate()
    {
        starters.push(parse_entry(line, &file, STARTERS_START + offset + 1)?);
    }

    let mut subs = Vec::with_capacity(N_SUBS);
    for (offset, line) in lines[SUBS_START..SUBS_START + N_SUBS].iter().enumerate() {
        subs.push(parse_entry(line, &file, SUBS_START + offset + 1)?);
    }

    let penalty_taker = lines[PK_LINE]
        .strip_prefix("PK:")
        .map(|name| String::from(name.trim()))
        .ok_or_else(|| DatabaseError::parse(&file, PK_LINE + 1, "missing PK line"))?;

    Ok(Teamsheet {
        team_name,
        tactic,
        starters,
        subs,
        penalty_taker,
    })
}

/// One lineup line: `"<POS> <Name>"`, with the two letter keeper code
/// collapsing the pad space (`"GK Name"`).
fn parse_entry(line: &str, file: &str, number: usize) -> Result<TeamsheetEntry, DatabaseError> {
    let (code, name) = line
        .split_once(' ')
        .ok_or_else(|| DatabaseError::parse(file, number, "missing position code"))?;

    let position = Position::parse(code)
        .ok_or_else(|| DatabaseError::parse(file, number, format!("bad position {:?}", code)))?;

    Ok(TeamsheetEntry::new(position, String::from(name.trim())))
}

pub fn save_teamsheet(path: &Path, sheet: &Teamsheet) -> Result<(), DatabaseError> {
    fs::write(path, format_teamsheet(sheet))?;
    Ok(())
}

pub fn format_teamsheet(sheet: &Teamsheet) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", sheet.team_name);
    let _ = writeln!(out, "{}", sheet.tactic.letter());
    out.push('\n');

    for entry in &sheet.starters {
        let _ = writeln!(out, "{} {}", entry.position.code().trim_end(), entry.name);
    }
    out.push('\n');

    for entry in &sheet.subs {
        let _ = writeln!(out, "{} {}", entry.position.code().trim_end(), entry.name);
    }
    out.push('\n');

    let _ = writeln!(out, "PK: {}", sheet.penalty_taker);

    out
}
