use crate::error::DatabaseError;
use core::club::N_LINEUP;
use core::r#match::{MatchResult, TeamMatchState};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-match report: the score, a placeholder for the minute-by-minute
/// log, and one fixed-width statistics table per team with a totals row.
pub fn write_commentary(dir: &Path, result: &MatchResult) -> Result<PathBuf, DatabaseError> {
    let path = dir.join(commentary_file_name(
        &result.home.team_name,
        &result.away.team_name,
    ));

    fs::write(&path, format_commentary(result))?;
    Ok(path)
}

pub fn commentary_file_name(home: &str, away: &str) -> String {
    format!(
        "{}_{}.txt",
        home.replace(' ', "_"),
        away.replace(' ', "_")
    )
}

pub fn format_commentary(result: &MatchResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {} - {} {}",
        result.home.team_name, result.home.score, result.away.score, result.away.team_name
    );
    out.push('\n');
    out.push_str("Game log goes here\n");
    out.push('\n');

    push_team_block(&mut out, &result.home);
    out.push('\n');
    push_team_block(&mut out, &result.away);

    out
}

fn push_team_block(out: &mut String, team: &TeamMatchState) {
    let _ = writeln!(out, "{}", team.team_name);

    let _ = write!(out, "{:<13}{:<5}", "Name", "Pos");
    for label in ["Min", "Sav", "Ktk", "Kps", "Sht", "Gls", "Ass", "Yel", "Red"] {
        let _ = write!(out, "{:>4}", label);
    }
    out.push('\n');
    let _ = writeln!(out, "{}", "-".repeat(13 + 5 + 9 * 4));

    let mut totals = [0i32; 9];

    for slot in 0..N_LINEUP {
        let red = if team.red[slot] { 1 } else { 0 };
        let values = [
            team.minutes[slot] as i32,
            team.saves[slot] as i32,
            team.key_tackles[slot] as i32,
            team.key_passes[slot] as i32,
            team.shots[slot] as i32,
            team.goals[slot] as i32,
            team.assists[slot] as i32,
            team.yellow[slot] as i32,
            red,
        ];

        let _ = write!(out, "{:<13}{:<5}", team.names[slot], team.positions[slot].code());
        for (total, value) in totals.iter_mut().zip(values) {
            *total += value;
            let _ = write!(out, "{:>4}", value);
        }
        out.push('\n');
    }

    let _ = write!(out, "{:<13}{:<5}", "Total", "");
    for total in totals {
        let _ = write!(out, "{:>4}", total);
    }
    out.push('\n');
}
