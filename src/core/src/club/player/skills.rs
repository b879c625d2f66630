use crate::club::PositionGroup;

/// Intrinsic player ratings, fit range 1..99 for real players.
/// Placeholder roster entries carry all-zero skills.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct PlayerSkills {
    pub shot_stopping: i16,
    pub tackling: i16,
    pub passing: i16,
    pub shooting: i16,
    pub stamina: i16,
    pub aggression: i16,
}

impl PlayerSkills {
    /// The skill a position group is ranked by when picking a lineup.
    pub fn for_group(&self, group: PositionGroup) -> i16 {
        match group {
            PositionGroup::Goalkeeper => self.shot_stopping,
            PositionGroup::Defender => self.tackling,
            PositionGroup::Midfielder => self.passing,
            PositionGroup::Forward => self.shooting,
            _ => self.passing,
        }
    }

    pub fn clamp_ratings(&mut self) {
        self.shot_stopping = self.shot_stopping.clamp(1, 99);
        self.tackling = self.tackling.clamp(1, 99);
        self.passing = self.passing.clamp(1, 99);
        self.shooting = self.shooting.clamp(1, 99);
        self.stamina = self.stamina.clamp(1, 99);
        self.aggression = self.aggression.clamp(1, 99);
    }
}

/// Progression state, default 300 for every player including placeholders.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PlayerAbilities {
    pub keeping: i16,
    pub tackling: i16,
    pub passing: i16,
    pub shooting: i16,
}

pub const DEFAULT_ABILITY: i16 = 300;

impl Default for PlayerAbilities {
    fn default() -> Self {
        PlayerAbilities {
            keeping: DEFAULT_ABILITY,
            tackling: DEFAULT_ABILITY,
            passing: DEFAULT_ABILITY,
            shooting: DEFAULT_ABILITY,
        }
    }
}
