use crate::club::PositionGroup;
use std::collections::HashMap;

/// One letter team tactic codes.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub enum Tactic {
    Normal,
    Defensive,
    Attacking,
    CounterAttack,
    LongBall,
    Passing,
}

impl Tactic {
    pub const ALL: [Tactic; 6] = [
        Tactic::Normal,
        Tactic::Defensive,
        Tactic::Attacking,
        Tactic::CounterAttack,
        Tactic::LongBall,
        Tactic::Passing,
    ];

    pub fn letter(&self) -> char {
        match self {
            Tactic::Normal => 'N',
            Tactic::Defensive => 'D',
            Tactic::Attacking => 'A',
            Tactic::CounterAttack => 'C',
            Tactic::LongBall => 'L',
            Tactic::Passing => 'P',
        }
    }

    pub fn from_letter(letter: char) -> Option<Tactic> {
        match letter {
            'N' => Some(Tactic::Normal),
            'D' => Some(Tactic::Defensive),
            'A' => Some(Tactic::Attacking),
            'C' => Some(Tactic::CounterAttack),
            'L' => Some(Tactic::LongBall),
            'P' => Some(Tactic::Passing),
            _ => None,
        }
    }
}

/// The three per-minute contribution channels a multiplier can target.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub enum SkillKind {
    Shooting,
    Passing,
    Tackling,
}

impl SkillKind {
    pub const ALL: [SkillKind; 3] = [SkillKind::Shooting, SkillKind::Passing, SkillKind::Tackling];

    pub fn code(&self) -> &'static str {
        match self {
            SkillKind::Shooting => "SH",
            SkillKind::Passing => "PS",
            SkillKind::Tackling => "TK",
        }
    }

    pub fn from_code(code: &str) -> Option<SkillKind> {
        match code {
            "SH" => Some(SkillKind::Shooting),
            "PS" => Some(SkillKind::Passing),
            "TK" => Some(SkillKind::Tackling),
            _ => None,
        }
    }
}

/// Number of tactic-versus-tactic bonus rows the packaged table carries.
pub const EXPECTED_BONUS_ROWS: usize = 12;

/// Multiplier tables driving the contribution calculator. Built once by
/// the tactics file loader, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TacticsTable {
    multipliers: HashMap<(Tactic, PositionGroup, SkillKind), f32>,
    bonuses: HashMap<(Tactic, Tactic, PositionGroup, SkillKind), f32>,
}

impl TacticsTable {
    pub fn new() -> Self {
        TacticsTable::default()
    }

    pub fn insert_multiplier(
        &mut self,
        tactic: Tactic,
        group: PositionGroup,
        skill: SkillKind,
        value: f32,
    ) {
        self.multipliers.insert((tactic, group, skill), value);
    }

    pub fn insert_bonus(
        &mut self,
        own: Tactic,
        opponent: Tactic,
        group: PositionGroup,
        skill: SkillKind,
        value: f32,
    ) {
        self.bonuses.insert((own, opponent, group, skill), value);
    }

    /// Multiplier for a tactic on a contribution channel. Goalkeepers are
    /// never adjusted and missing rows resolve to neutral.
    pub fn multiplier(&self, tactic: Tactic, group: PositionGroup, skill: SkillKind) -> f32 {
        if group.is_goalkeeper() {
            return 1.0;
        }

        self.multipliers
            .get(&(tactic, group, skill))
            .copied()
            .unwrap_or(1.0)
    }

    /// Extra multiplier for a tactic matchup; 1.0 when no row is configured.
    pub fn bonus(
        &self,
        own: Tactic,
        opponent: Tactic,
        group: PositionGroup,
        skill: SkillKind,
    ) -> f32 {
        self.bonuses
            .get(&(own, opponent, group, skill))
            .copied()
            .unwrap_or(1.0)
    }

    pub fn bonus_count(&self) -> usize {
        self.bonuses.len()
    }

    /// Every tactic x outfield group x skill combination the engine can ask
    /// for that has no configured row.
    pub fn missing_multipliers(&self) -> Vec<(Tactic, PositionGroup, SkillKind)> {
        let mut missing = Vec::new();

        for tactic in Tactic::ALL {
            for group in PositionGroup::ALL {
                if group.is_goalkeeper() {
                    continue;
                }
                for skill in SkillKind::ALL {
                    if !self.multipliers.contains_key(&(tactic, group, skill)) {
                        missing.push((tactic, group, skill));
                    }
                }
            }
        }

        missing
    }
}
