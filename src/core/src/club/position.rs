use std::fmt::{Display, Formatter};

/// Field position groups, ordered the way lineups are filled.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub enum PositionGroup {
    Goalkeeper,
    Defender,
    DefensiveMidfielder,
    Midfielder,
    AttackingMidfielder,
    Forward,
}

impl PositionGroup {
    pub const ALL: [PositionGroup; 6] = [
        PositionGroup::Goalkeeper,
        PositionGroup::Defender,
        PositionGroup::DefensiveMidfielder,
        PositionGroup::Midfielder,
        PositionGroup::AttackingMidfielder,
        PositionGroup::Forward,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            PositionGroup::Goalkeeper => "GK",
            PositionGroup::Defender => "DF",
            PositionGroup::DefensiveMidfielder => "DM",
            PositionGroup::Midfielder => "MF",
            PositionGroup::AttackingMidfielder => "AM",
            PositionGroup::Forward => "FW",
        }
    }

    pub fn from_code(code: &str) -> Option<PositionGroup> {
        match code {
            "GK" => Some(PositionGroup::Goalkeeper),
            "DF" => Some(PositionGroup::Defender),
            "DM" => Some(PositionGroup::DefensiveMidfielder),
            "MF" => Some(PositionGroup::Midfielder),
            "AM" => Some(PositionGroup::AttackingMidfielder),
            "FW" => Some(PositionGroup::Forward),
            _ => None,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        *self == PositionGroup::Goalkeeper
    }
}

/// A lineup position: group plus side. Goalkeepers carry a blank side,
/// every other position one of `R`, `L`, `C`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Position {
    pub group: PositionGroup,
    pub side: char,
}

impl Position {
    pub fn new(group: PositionGroup, side: char) -> Self {
        Position { group, side }
    }

    pub fn goalkeeper() -> Self {
        Position {
            group: PositionGroup::Goalkeeper,
            side: ' ',
        }
    }

    /// Parse a three character code such as `"FWC"` or `"GK "`.
    pub fn parse(code: &str) -> Option<Position> {
        if code.len() < 2 {
            return None;
        }

        let group = PositionGroup::from_code(&code[0..2])?;
        let side = code.chars().nth(2).unwrap_or(' ');

        if group.is_goalkeeper() {
            return Some(Position::goalkeeper());
        }

        match side {
            'R' | 'L' | 'C' => Some(Position { group, side }),
            _ => None,
        }
    }

    pub fn code(&self) -> String {
        format!("{}{}", self.group.code(), self.side)
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.group.is_goalkeeper()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
