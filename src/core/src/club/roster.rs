use crate::club::Player;
use crate::context::UpdateConfig;
use crate::r#match::TeamMatchState;
use rand::RngExt;
use rand::rngs::StdRng;

/// Fixed roster size. Short teams are padded with placeholder entries so
/// every roster file and every in-memory pool has the same shape.
pub const MAX_PLAYERS: usize = 30;

/// The persistent player pool of one team.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub players: Vec<Player>,
}

impl Roster {
    /// Build a roster from up to [`MAX_PLAYERS`] players, padding the tail
    /// with placeholders.
    pub fn new(mut players: Vec<Player>) -> Self {
        assert!(
            players.len() <= MAX_PLAYERS,
            "roster of {} exceeds {} players",
            players.len(),
            MAX_PLAYERS
        );

        while players.len() < MAX_PLAYERS {
            players.push(Player::placeholder());
        }

        Roster { players }
    }

    /// First roster slot carrying the given name.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name == name)
    }

    /// Fold one finished match back into the pool, then apply the
    /// between-matches maintenance tick to every player.
    pub fn update_from_match(
        &mut self,
        comms: &TeamMatchState,
        config: &UpdateConfig,
        rng: &mut StdRng,
    ) {
        for slot in 0..comms.names.len() {
            let Some(idx) = self.position_of(&comms.names[slot]) else {
                continue;
            };

            let player = &mut self.players[idx];
            let stats = &mut player.statistics;

            if comms.minutes[slot] > 0 {
                stats.games += 1;
            }

            stats.saves += comms.saves[slot];
            stats.key_tackles += comms.key_tackles[slot];
            stats.key_passes += comms.key_passes[slot];
            stats.shots += comms.shots[slot];
            stats.goals += comms.goals[slot];
            stats.assists += comms.assists[slot];

            let dp_before = stats.disciplinary_points;
            stats.disciplinary_points += comms.yellow[slot] as i16 * config.dp_yellow;
            if comms.red[slot] {
                stats.disciplinary_points += config.dp_red;
            }

            // Crossing a multiple of the margin adds the whole threshold
            // count, not the delta.
            let before = dp_before / config.suspension_margin;
            let after = stats.disciplinary_points / config.suspension_margin;
            if after > before {
                stats.suspension += after;
            }

            if comms.injured[slot] {
                stats.injury += rng.random_range(0..=config.max_injury);
            }

            stats.fitness = (100.0 * comms.fatigue[slot]).floor() as i16;
            stats.saturate();
        }

        self.maintenance(config);
    }

    /// Between-matches recovery: fitness regain, injury and suspension
    /// count-down. Runs over the whole pool, lineup or not.
    fn maintenance(&mut self, config: &UpdateConfig) {
        for player in &mut self.players {
            let stats = &mut player.statistics;

            stats.fitness = (stats.fitness + config.fitness_gain).min(100);
            if stats.injury == 1 {
                stats.fitness = config.fitness_after_injury;
            }
            stats.suspension = (stats.suspension - 1).max(0);
            stats.injury = (stats.injury - 1).max(0);
        }
    }

    /// Wipe season statistics while keeping identities and ratings.
    pub fn clear_season_state(&mut self) {
        for player in &mut self.players {
            player.statistics = Default::default();
        }
    }
}
