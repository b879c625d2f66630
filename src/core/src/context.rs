use crate::club::{PositionGroup, Tactic, TacticsTable};

/// Per-group starter and substitute quotas used by the automatic
/// teamsheet selector, in the order the lineup is filled.
#[derive(Debug, Clone)]
pub struct TeamSheetConfig {
    pub quotas: [(PositionGroup, usize, usize); 6],
    pub default_tactic: Tactic,
}

impl Default for TeamSheetConfig {
    fn default() -> Self {
        TeamSheetConfig {
            quotas: [
                (PositionGroup::Goalkeeper, 1, 1),
                (PositionGroup::Defender, 4, 1),
                (PositionGroup::DefensiveMidfielder, 0, 0),
                (PositionGroup::Midfielder, 4, 2),
                (PositionGroup::AttackingMidfielder, 0, 0),
                (PositionGroup::Forward, 2, 1),
            ],
            default_tactic: Tactic::Normal,
        }
    }
}

/// Constants for folding match statistics back into the roster.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    pub dp_yellow: i16,
    pub dp_red: i16,
    /// Disciplinary points per suspension threshold.
    pub suspension_margin: i16,
    /// Upper bound for the games-out roll on a fresh injury.
    pub max_injury: i16,
    /// Fitness recovered between matches.
    pub fitness_gain: i16,
    /// Fitness a player returns with after an injury ends.
    pub fitness_after_injury: i16,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        UpdateConfig {
            dp_yellow: 4,
            dp_red: 10,
            suspension_margin: 10,
            max_injury: 9,
            fitness_gain: 20,
            fitness_after_injury: 80,
        }
    }
}

/// Match-level tuning that is not part of the multiplier tables.
#[derive(Debug, Clone)]
pub struct TacticsConfig {
    /// Additive shot-probability bonus for the home side.
    pub home_bonus: f64,
    pub max_subs: u8,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        TacticsConfig {
            home_bonus: 0.02,
            max_subs: 3,
        }
    }
}

/// Owning bundle of the process-wide configuration blocks. Built once at
/// startup; everything downstream borrows through [`GlobalContext`].
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub teamsheet: TeamSheetConfig,
    pub update: UpdateConfig,
    pub tactics: TacticsConfig,
}

impl Config {
    pub fn context<'g>(&'g self, table: &'g TacticsTable) -> GlobalContext<'g> {
        GlobalContext {
            teamsheet: &self.teamsheet,
            update: &self.update,
            tactics: &self.tactics,
            table,
        }
    }
}

/// Borrowed view of the configuration passed down the simulation call
/// stack. Copyable so parallel match workers can share it freely.
#[derive(Debug, Copy, Clone)]
pub struct GlobalContext<'g> {
    pub teamsheet: &'g TeamSheetConfig,
    pub update: &'g UpdateConfig,
    pub tactics: &'g TacticsConfig,
    pub table: &'g TacticsTable,
}
