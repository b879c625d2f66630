use crate::error::DatabaseError;
use crate::generators::RosterGenerator;
use crate::loaders::{load_team_names, roster_file_name};
use crate::loaders::roster::save_roster;
use log::info;
use std::fs;
use std::path::Path;

const DEFAULT_LEAGUE: &str = include_str!("data/league.dat");
const DEFAULT_TACTICS: &str = include_str!("data/tactics.dat");

/// Make sure a data directory is usable: create it, drop in the packaged
/// league and tactics files when absent, and generate a roster file for
/// every team that has none yet.
pub fn seed_data_dir(dir: &Path, n_teams: usize, seed: u64) -> Result<(), DatabaseError> {
    fs::create_dir_all(dir)?;

    let league_path = dir.join("league.dat");
    if !league_path.exists() {
        info!("seeding {}", league_path.display());
        fs::write(&league_path, DEFAULT_LEAGUE)?;
    }

    let tactics_path = dir.join("tactics.dat");
    if !tactics_path.exists() {
        info!("seeding {}", tactics_path.display());
        fs::write(&tactics_path, DEFAULT_TACTICS)?;
    }

    let team_names = load_team_names(&league_path, n_teams)?;

    for (index, team) in team_names.iter().enumerate() {
        let roster_path = dir.join(roster_file_name(team));
        if !roster_path.exists() {
            info!("seeding {}", roster_path.display());
            save_roster(&roster_path, &RosterGenerator::generate(index, seed))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::DatabaseLoader;
    use tempfile::tempdir;

    #[test]
    fn seeds_a_fresh_directory() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");

        seed_data_dir(&data, 20, 0).unwrap();

        assert!(data.join("league.dat").exists());
        assert!(data.join("tactics.dat").exists());
        assert!(data.join("Ashford.dat").exists());
        assert!(data.join("Westfield.dat").exists());

        let loaded = DatabaseLoader::load(&data, 20).unwrap();
        assert_eq!(20, loaded.rosters.len());
    }

    #[test]
    fn seeding_is_idempotent() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");

        seed_data_dir(&data, 4, 7).unwrap();
        let first = fs::read_to_string(data.join("Ashford.dat")).unwrap();

        seed_data_dir(&data, 4, 7).unwrap();
        let second = fs::read_to_string(data.join("Ashford.dat")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn existing_files_are_not_overwritten() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir_all(&data).unwrap();
        fs::write(data.join("league.dat"), "Alpha\nBeta\n").unwrap();

        seed_data_dir(&data, 2, 0).unwrap();

        let league = fs::read_to_string(data.join("league.dat")).unwrap();
        assert_eq!("Alpha\nBeta\n", league);
        assert!(data.join("Alpha.dat").exists());
        assert!(data.join("Beta.dat").exists());
    }
}
