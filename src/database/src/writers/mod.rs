pub mod commentary;
pub mod table;

pub use commentary::{commentary_file_name, format_commentary, write_commentary};
pub use table::{format_table, read_table, write_table};

use crate::error::DatabaseError;
use crate::loaders::roster_file_name;
use crate::loaders::roster::save_roster;
use core::club::Roster;
use std::path::Path;

/// Write every roster back to its team file.
pub fn save_rosters(
    dir: &Path,
    team_names: &[String],
    rosters: &[Roster],
) -> Result<(), DatabaseError> {
    for (team, roster) in team_names.iter().zip(rosters) {
        save_roster(&dir.join(roster_file_name(team)), roster)?;
    }

    Ok(())
}
