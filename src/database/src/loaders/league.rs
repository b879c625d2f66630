use crate::error::DatabaseError;
use std::fs;
use std::path::Path;

/// Read the league file: one team name per line. The first `n_teams`
/// names are taken and sorted lexicographically into the team vector.
pub fn load_team_names(path: &Path, n_teams: usize) -> Result<Vec<String>, DatabaseError> {
    let content = fs::read_to_string(path)?;

    let mut names: Vec<String> = content
        .lines()
        .map(|line| String::from(line.trim_end()))
        .filter(|line| !line.is_empty())
        .take(n_teams)
        .collect();

    if names.len() < n_teams {
        return Err(DatabaseError::Capacity(format!(
            "{}: {} team names found, {} requested",
            path.display(),
            names.len(),
            n_teams
        )));
    }

    names.sort();
    Ok(names)
}
