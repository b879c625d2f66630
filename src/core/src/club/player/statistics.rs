/// Upper bound for the high-volume counters. Kept for compatibility with
/// the historical roster file format, which reserves three digits.
pub const STAT_CAP: i16 = 999;

pub const FITNESS_MAX: i16 = 100;

/// Season-to-date statistics carried in the roster between matches.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize)]
pub struct PlayerStatistics {
    pub games: i16,
    pub saves: i16,
    pub key_tackles: i16,
    pub key_passes: i16,
    pub shots: i16,
    pub goals: i16,
    pub assists: i16,
    pub disciplinary_points: i16,
    pub injury: i16,
    pub suspension: i16,
    pub fitness: i16,
}

impl Default for PlayerStatistics {
    fn default() -> Self {
        PlayerStatistics {
            games: 0,
            saves: 0,
            key_tackles: 0,
            key_passes: 0,
            shots: 0,
            goals: 0,
            assists: 0,
            disciplinary_points: 0,
            injury: 0,
            suspension: 0,
            fitness: FITNESS_MAX,
        }
    }
}

impl PlayerStatistics {
    /// Cap the counters that the roster file stores in three digits.
    pub fn saturate(&mut self) {
        self.saves = self.saves.min(STAT_CAP);
        self.key_tackles = self.key_tackles.min(STAT_CAP);
        self.key_passes = self.key_passes.min(STAT_CAP);
        self.shots = self.shots.min(STAT_CAP);
        self.goals = self.goals.min(STAT_CAP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fresh() {
        let stats = PlayerStatistics::default();

        assert_eq!(0, stats.games);
        assert_eq!(0, stats.goals);
        assert_eq!(0, stats.suspension);
        assert_eq!(FITNESS_MAX, stats.fitness);
    }

    #[test]
    fn saturate_caps_high_volume_counters() {
        let mut stats = PlayerStatistics {
            saves: 1200,
            key_tackles: 1000,
            key_passes: 999,
            shots: 1500,
            goals: 1001,
            ..PlayerStatistics::default()
        };

        stats.saturate();

        assert_eq!(STAT_CAP, stats.saves);
        assert_eq!(STAT_CAP, stats.key_tackles);
        assert_eq!(STAT_CAP, stats.key_passes);
        assert_eq!(STAT_CAP, stats.shots);
        assert_eq!(STAT_CAP, stats.goals);
    }
}
