pub mod league;
pub mod roster;
pub mod tactics;
pub mod teamsheet;

pub use league::load_team_names;
pub use roster::{load_roster, save_roster};
pub use tactics::load_tactics;
pub use teamsheet::{load_teamsheet, save_teamsheet};

use crate::error::DatabaseError;
use core::club::{Roster, TacticsTable};
use std::path::Path;

/// Roster files are named after the team, with path-unfriendly spaces
/// replaced.
pub fn roster_file_name(team: &str) -> String {
    format!("{}.dat", team.replace(' ', "_"))
}

/// Everything a league needs from disk.
pub struct LoadedData {
    pub team_names: Vec<String>,
    pub rosters: Vec<Roster>,
    pub tactics: TacticsTable,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Load the league file, the tactics table and one roster per team
    /// from a data directory.
    pub fn load(dir: &Path, n_teams: usize) -> Result<LoadedData, DatabaseError> {
        let team_names = load_team_names(&dir.join("league.dat"), n_teams)?;
        let tactics = load_tactics(&dir.join("tactics.dat"))?;

        let rosters = team_names
            .iter()
            .map(|team| load_roster(&dir.join(roster_file_name(team))))
            .collect::<Result<Vec<Roster>, DatabaseError>>()?;

        Ok(LoadedData {
            team_names,
            rosters,
            tactics,
        })
    }
}
