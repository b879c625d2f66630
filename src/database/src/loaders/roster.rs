use crate::error::DatabaseError;
use core::club::{MAX_PLAYERS, Player, PlayerAbilities, PlayerSkills, PlayerStatistics, Roster};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Column widths of the roster file, in order: Name, Age, Nat, Prs, the
/// six skills, the four abilities and the eleven statistics.
const WIDTHS: [usize; 25] = [
    13, 3, 4, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4, 4,
];

const LINE_LEN: usize = 102;

/// Two header lines of [`LINE_LEN`] characters plus their newlines.
const HEADER_LEN: usize = 2 * (LINE_LEN + 1);

const LEGEND: [&str; 25] = [
    "Name", "Age", "Nat", "Prs", "St", "Tk", "Ps", "Sh", "Sm", "Ag", "KAb", "TAb", "PAb", "SAb",
    "Gam", "Sav", "Ktk", "Kps", "Sht", "Gls", "Ass", "DP", "Inj", "Sus", "Fit",
];

pub fn load_roster(path: &Path) -> Result<Roster, DatabaseError> {
    let content = fs::read_to_string(path)?;
    let file = path.display().to_string();

    if content.len() < HEADER_LEN {
        return Err(DatabaseError::parse(&file, 1, "missing roster header"));
    }

    let mut players = Vec::new();

    for (number, line) in content[HEADER_LEN..].split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        if players.len() == MAX_PLAYERS {
            return Err(DatabaseError::Capacity(format!(
                "{}: more than {} roster lines",
                file, MAX_PLAYERS
            )));
        }

        players.push(parse_line(line, &file, number + 3)?);
    }

    Ok(Roster::new(players))
}

fn parse_line(line: &str, file: &str, number: usize) -> Result<Player, DatabaseError> {
    // Editors may strip trailing blanks; restore the fixed width.
    let padded = format!("{:<width$}", line, width = LINE_LEN);

    let mut fields = Vec::with_capacity(WIDTHS.len());
    let mut offset = 0;
    for width in WIDTHS {
        let field = padded
            .get(offset..offset + width)
            .ok_or_else(|| DatabaseError::parse(file, number, "line too short"))?;
        fields.push(field.trim());
        offset += width;
    }

    let number_field = |idx: usize| -> Result<i16, DatabaseError> {
        fields[idx].parse::<i16>().map_err(|_| {
            DatabaseError::parse(
                file,
                number,
                format!("bad {} value {:?}", LEGEND[idx], fields[idx]),
            )
        })
    };

    Ok(Player {
        name: String::from(fields[0]),
        age: number_field(1)?,
        nationality: String::from(fields[2]),
        preferred_side: String::from(fields[3]),
        skills: PlayerSkills {
            shot_stopping: number_field(4)?,
            tackling: number_field(5)?,
            passing: number_field(6)?,
            shooting: number_field(7)?,
            stamina: number_field(8)?,
            aggression: number_field(9)?,
        },
        abilities: PlayerAbilities {
            keeping: number_field(10)?,
            tackling: number_field(11)?,
            passing: number_field(12)?,
            shooting: number_field(13)?,
        },
        statistics: PlayerStatistics {
            games: number_field(14)?,
            saves: number_field(15)?,
            key_tackles: number_field(16)?,
            key_passes: number_field(17)?,
            shots: number_field(18)?,
            goals: number_field(19)?,
            assists: number_field(20)?,
            disciplinary_points: number_field(21)?,
            injury: number_field(22)?,
            suspension: number_field(23)?,
            fitness: number_field(24)?,
        },
    })
}

pub fn save_roster(path: &Path, roster: &Roster) -> Result<(), DatabaseError> {
    fs::write(path, format_roster(roster))?;
    Ok(())
}

pub fn format_roster(roster: &Roster) -> String {
    let mut out = String::new();

    let mut legend = String::new();
    for (idx, label) in LEGEND.iter().enumerate() {
        if idx == 0 {
            let _ = write!(legend, "{:<width$}", label, width = WIDTHS[idx]);
        } else {
            let _ = write!(legend, "{:>width$}", label, width = WIDTHS[idx]);
        }
    }
    out.push_str(&legend);
    out.push('\n');
    out.push_str(&"-".repeat(LINE_LEN));
    out.push('\n');

    for player in &roster.players {
        let s = &player.skills;
        let a = &player.abilities;
        let t = &player.statistics;

        let _ = write!(out, "{:<13}", player.name);
        let _ = write!(out, "{:>3}", player.age);
        let _ = write!(out, "{:>4}", player.nationality);
        let _ = write!(out, "{:>4}", player.preferred_side);
        for value in [
            s.shot_stopping,
            s.tackling,
            s.passing,
            s.shooting,
            s.stamina,
            s.aggression,
        ] {
            let _ = write!(out, "{:>3}", value);
        }
        for value in [
            a.keeping,
            a.tackling,
            a.passing,
            a.shooting,
            t.games,
            t.saves,
            t.key_tackles,
            t.key_passes,
            t.shots,
            t.goals,
            t.assists,
            t.disciplinary_points,
            t.injury,
            t.suspension,
            t.fitness,
        ] {
            let _ = write!(out, "{:>4}", value);
        }
        out.push('\n');
    }

    out
}
