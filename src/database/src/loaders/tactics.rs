use crate::error::DatabaseError;
use core::club::{EXPECTED_BONUS_ROWS, Position, PositionGroup, SkillKind, Tactic, TacticsTable};
use log::warn;
use std::fs;
use std::path::Path;

/// Parse the tactics file: `M <tactic> <position> <skill> <mult>` rows for
/// the per-tactic multipliers and `B <opp_tactic> <own_tactic> <position>
/// <skill> <mult>` rows for the matchup bonuses. Anything else is skipped.
pub fn load_tactics(path: &Path) -> Result<TacticsTable, DatabaseError> {
    let content = fs::read_to_string(path)?;
    parse_tactics(&content, &path.display().to_string())
}

pub fn parse_tactics(content: &str, file: &str) -> Result<TacticsTable, DatabaseError> {
    let mut table = TacticsTable::new();

    for (number, line) in content.lines().enumerate() {
        let number = number + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        match tokens.first() {
            Some(&"M") => {
                if tokens.len() != 5 {
                    return Err(DatabaseError::parse(file, number, "malformed M row"));
                }
                let tactic = parse_tactic(tokens[1], file, number)?;
                let group = parse_group(tokens[2], file, number)?;
                let skill = parse_skill(tokens[3], file, number)?;
                let value = parse_value(tokens[4], file, number)?;
                table.insert_multiplier(tactic, group, skill, value);
            }
            Some(&"B") => {
                if tokens.len() != 6 {
                    return Err(DatabaseError::parse(file, number, "malformed B row"));
                }
                let opponent = parse_tactic(tokens[1], file, number)?;
                let own = parse_tactic(tokens[2], file, number)?;
                let group = parse_group(tokens[3], file, number)?;
                let skill = parse_skill(tokens[4], file, number)?;
                let value = parse_value(tokens[5], file, number)?;
                table.insert_bonus(own, opponent, group, skill, value);
            }
            _ => {}
        }
    }

    let missing = table.missing_multipliers();
    if !missing.is_empty() {
        let (tactic, group, skill) = missing[0];
        return Err(DatabaseError::Config(format!(
            "{}: {} multiplier rows missing, first: {} {} {}",
            file,
            missing.len(),
            tactic.letter(),
            group.code(),
            skill.code()
        )));
    }

    if table.bonus_count() != EXPECTED_BONUS_ROWS {
        warn!(
            "{}: {} bonus rows, {} expected",
            file,
            table.bonus_count(),
            EXPECTED_BONUS_ROWS
        );
    }

    Ok(table)
}

fn parse_tactic(token: &str, file: &str, number: usize) -> Result<Tactic, DatabaseError> {
    token
        .chars()
        .next()
        .filter(|_| token.len() == 1)
        .and_then(Tactic::from_letter)
        .ok_or_else(|| DatabaseError::parse(file, number, format!("unknown tactic {:?}", token)))
}

fn parse_group(token: &str, file: &str, number: usize) -> Result<PositionGroup, DatabaseError> {
    // Accept a bare group code or a full position code.
    PositionGroup::from_code(token)
        .or_else(|| Position::parse(token).map(|p| p.group))
        .ok_or_else(|| DatabaseError::parse(file, number, format!("unknown position {:?}", token)))
}

fn parse_skill(token: &str, file: &str, number: usize) -> Result<SkillKind, DatabaseError> {
    SkillKind::from_code(token)
        .ok_or_else(|| DatabaseError::parse(file, number, format!("unknown skill {:?}", token)))
}

fn parse_value(token: &str, file: &str, number: usize) -> Result<f32, DatabaseError> {
    token
        .parse::<f32>()
        .map_err(|_| DatabaseError::parse(file, number, format!("bad multiplier {:?}", token)))
}
