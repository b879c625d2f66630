use crate::club::PlayerStatistics;
use crate::context::GlobalContext;
use crate::league::League;
use crate::utils::mix_seed;
use itertools::Itertools;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
#[cfg(feature = "replica-parallel")]
use rayon::prelude::*;

/// Floor the acceptance threshold shrinks toward.
const MIN_THRESHOLD: f64 = 0.001;

/// Hyper-parameters of the threshold-acceptance loop.
#[derive(Debug, Clone)]
pub struct SearchParams {
    pub steps: u32,
    pub replicas: usize,
    /// Starting acceptance threshold.
    pub threshold: f64,
    /// Threshold shrink per accepted step.
    pub threshold_decay: f64,
    /// Starting half-width of the rating perturbation.
    pub step_size: i16,
    /// Consecutive rejections before restarting from the best state.
    pub stale_limit: u32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            steps: 100,
            replicas: 2,
            threshold: 50.0,
            threshold_decay: 0.5,
            step_size: 10,
            stale_limit: 100,
        }
    }
}

/// Fits player ratings against a baseline league's season-end statistics
/// by repeated full-season simulation under threshold acceptance: accept
/// a proposal whenever its error is within a shrinking threshold of the
/// last accepted error, back off to the last accepted ratings on
/// rejection, and restart from the best ratings seen when progress stalls.
pub struct RatingSearch {
    pub baseline: League,
    pub replicas: Vec<League>,
    pub params: SearchParams,

    threshold: f64,
    step_size: i16,
    rmse_last: f64,
    rmse_best: f64,
    stale: u32,
    rng: StdRng,

    /// Last accepted replica set; rejected proposals restart from here.
    last: Vec<League>,
    /// Best replica set seen so far.
    best: Vec<League>,
}

impl RatingSearch {
    /// Set up the search around a baseline. Replicas start as copies of
    /// the baseline with their own seed streams; call one of the `init_*`
    /// methods to pick the starting ratings.
    pub fn new(baseline: League, params: SearchParams, root_seed: u64) -> Self {
        assert!(params.replicas > 0, "at least one replica required");

        let replicas: Vec<League> = (0..params.replicas)
            .map(|index| {
                let mut replica = baseline.clone();
                replica.root_seed = mix_seed(root_seed, 1, index as u64);
                replica
            })
            .collect();

        RatingSearch {
            threshold: params.threshold,
            step_size: params.step_size,
            rmse_last: f64::INFINITY,
            rmse_best: f64::INFINITY,
            stale: 0,
            rng: StdRng::seed_from_u64(mix_seed(root_seed, 0, 0)),
            last: replicas.clone(),
            best: replicas.clone(),
            baseline,
            replicas,
            params,
        }
    }

    /// Start from six independent uniform ratings per real player.
    pub fn init_random(&mut self) {
        let n_teams = self.baseline.n_teams();
        let n_players = self.baseline.rosters[0].players.len();

        for team in 0..n_teams {
            for slot in 0..n_players {
                if self.replicas[0].rosters[team].players[slot].is_placeholder() {
                    continue;
                }

                let ratings: [i16; 6] = std::array::from_fn(|_| self.rng.random_range(1..=99));
                for replica in &mut self.replicas {
                    let skills = &mut replica.rosters[team].players[slot].skills;
                    skills.shot_stopping = ratings[0];
                    skills.tackling = ratings[1];
                    skills.passing = ratings[2];
                    skills.shooting = ratings[3];
                    skills.stamina = ratings[4];
                    skills.aggression = ratings[5];
                }
            }
        }

        self.resync_snapshots();
    }

    /// Start from the baseline's season statistics: each counting category
    /// is mapped through its empirical CDF over the whole league and
    /// scaled onto the 1..99 rating range.
    pub fn init_percentile(&mut self) {
        let saves = Self::population(&self.baseline, |s| s.saves);
        let tackles = Self::population(&self.baseline, |s| s.key_tackles);
        let passes = Self::population(&self.baseline, |s| s.key_passes);
        let shots = Self::population(&self.baseline, |s| s.shots);

        let n_teams = self.baseline.n_teams();
        let n_players = self.baseline.rosters[0].players.len();

        for team in 0..n_teams {
            for slot in 0..n_players {
                let player = &self.baseline.rosters[team].players[slot];
                if player.is_placeholder() {
                    continue;
                }

                let stats = player.statistics;
                let shot_stopping = Self::percentile_rating(&saves, stats.saves);
                let tackling = Self::percentile_rating(&tackles, stats.key_tackles);
                let passing = Self::percentile_rating(&passes, stats.key_passes);
                let shooting = Self::percentile_rating(&shots, stats.shots);

                for replica in &mut self.replicas {
                    let skills = &mut replica.rosters[team].players[slot].skills;
                    skills.shot_stopping = shot_stopping;
                    skills.tackling = tackling;
                    skills.passing = passing;
                    skills.shooting = shooting;
                    skills.aggression = 30;
                    skills.stamina = 50;
                }
            }
        }

        self.resync_snapshots();
    }

    fn population(baseline: &League, pick: impl Fn(&PlayerStatistics) -> i16) -> Vec<i16> {
        baseline
            .rosters
            .iter()
            .flat_map(|roster| roster.players.iter())
            .map(|player| pick(&player.statistics))
            .sorted()
            .collect()
    }

    fn percentile_rating(sorted: &[i16], value: i16) -> i16 {
        let below_or_equal = sorted.partition_point(|v| *v <= value);
        let cdf = below_or_equal as f64 / sorted.len() as f64;
        ((cdf * 100.0) as i16).clamp(1, 99)
    }

    /// Run the configured number of steps and leave the best ratings in
    /// place. Returns the best error seen.
    pub fn run(&mut self, ctx: &GlobalContext<'_>) -> f64 {
        for step in 1..=self.params.steps {
            let error = self.step(step, ctx);
            debug!(
                "search step {}/{}: rmse {:.3} (best {:.3}, threshold {:.3}, step size {})",
                step, self.params.steps, error, self.rmse_best, self.threshold, self.step_size
            );
        }

        info!("search finished: best rmse {:.3}", self.rmse_best);
        self.rmse_best
    }

    /// One threshold-acceptance step: simulate every replica's season with
    /// the candidate ratings, score, then accept, reject or restart.
    pub fn step(&mut self, step_no: u32, ctx: &GlobalContext<'_>) -> f64 {
        #[cfg(feature = "replica-parallel")]
        self.replicas.par_iter_mut().for_each(|replica| {
            replica.clear_season_state(ctx);
            replica.play_season(ctx);
        });
        #[cfg(not(feature = "replica-parallel"))]
        for replica in &mut self.replicas {
            replica.clear_season_state(ctx);
            replica.play_season(ctx);
        }

        let error = rmse(&self.baseline, &self.replicas);

        // A non-finite score cannot be compared; treat it as a rejection.
        let accepted = error.is_finite() && error < self.rmse_last + self.threshold;

        if accepted {
            if step_no > 1 && error < self.rmse_best {
                self.rmse_best = error;
                self.best = self.replicas.clone();
            }
            self.rmse_last = error;
            self.last = self.replicas.clone();
            self.threshold = (self.threshold - self.params.threshold_decay).max(MIN_THRESHOLD);
            self.stale = 0;
            self.propose(false);
        } else {
            self.stale += 1;
            if self.stale >= self.params.stale_limit {
                self.replicas = self.best.clone();
                self.threshold = self.params.threshold;
                self.step_size = self.params.step_size;
                self.rmse_last = f64::INFINITY;
                self.stale = 0;
            } else {
                self.propose(true);
                self.step_size = (self.step_size - 1).max(1);
            }
        }

        error
    }

    /// Perturb every real player's six ratings by an independent uniform
    /// draw. The same perturbation is written to every replica, so the
    /// replica rosters stay identical in ratings and differ only in seed.
    fn propose(&mut self, from_last: bool) {
        let source: Vec<_> = if from_last {
            self.last[0].rosters.clone()
        } else {
            self.replicas[0].rosters.clone()
        };

        let half_width = self.step_size.max(1);

        for (team, roster) in source.iter().enumerate() {
            for (slot, player) in roster.players.iter().enumerate() {
                if player.is_placeholder() {
                    continue;
                }

                let mut skills = player.skills;
                skills.shot_stopping += self.rng.random_range(-half_width..=half_width);
                skills.tackling += self.rng.random_range(-half_width..=half_width);
                skills.passing += self.rng.random_range(-half_width..=half_width);
                skills.shooting += self.rng.random_range(-half_width..=half_width);
                skills.stamina += self.rng.random_range(-half_width..=half_width);
                skills.aggression += self.rng.random_range(-half_width..=half_width);
                skills.clamp_ratings();

                for replica in &mut self.replicas {
                    replica.rosters[team].players[slot].skills = skills;
                }
            }
        }
    }

    /// After re-initializing ratings, the accepted and best snapshots must
    /// match the fresh candidate again.
    fn resync_snapshots(&mut self) {
        self.last = self.replicas.clone();
        self.best = self.replicas.clone();
        self.rmse_last = f64::INFINITY;
        self.rmse_best = f64::INFINITY;
        self.stale = 0;
    }

    pub fn best_rmse(&self) -> f64 {
        self.rmse_best
    }

    pub fn best_replicas(&self) -> &[League] {
        &self.best
    }
}

/// Error between a baseline league and a set of simulated replicas: the
/// root mean square of the per-slot differences over the eight player
/// counting statistics and the eight standings fields, normalized by
/// teams times replicas.
pub fn rmse(baseline: &League, replicas: &[League]) -> f64 {
    let mut sum_sq: i64 = 0;

    for replica in replicas {
        for (base_roster, sim_roster) in baseline.rosters.iter().zip(&replica.rosters) {
            for (base, sim) in base_roster.players.iter().zip(&sim_roster.players) {
                let x = &base.statistics;
                let y = &sim.statistics;

                for (a, b) in [
                    (x.games, y.games),
                    (x.saves, y.saves),
                    (x.key_tackles, y.key_tackles),
                    (x.key_passes, y.key_passes),
                    (x.shots, y.shots),
                    (x.goals, y.goals),
                    (x.assists, y.assists),
                    (x.disciplinary_points, y.disciplinary_points),
                ] {
                    let diff = (a - b) as i64;
                    sum_sq += diff * diff;
                }
            }
        }

        for (base, sim) in baseline.table.rows.iter().zip(&replica.table.rows) {
            for (a, b) in [
                (base.played, sim.played),
                (base.win, sim.win),
                (base.draw, sim.draw),
                (base.lost, sim.lost),
                (base.goals_for, sim.goals_for),
                (base.goals_against, sim.goals_against),
                (base.goal_diff, sim.goal_diff),
                (base.points, sim.points),
            ] {
                let diff = (a - b) as i64;
                sum_sq += diff * diff;
            }
        }
    }

    let normalizer = (baseline.n_teams() * replicas.len()) as f64;
    (sum_sq as f64 / normalizer).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{Player, PlayerSkills, Roster, TacticsTable};
    use crate::context::Config;

    fn test_roster(team: usize) -> Roster {
        let mut players = Vec::new();
        for i in 0..18i16 {
            let t = team as i16;
            let mut player = Player::new(
                format!("T{:02} Player {:02}", team, i),
                21 + (i % 12),
                String::from("eng"),
                String::from("C"),
            );
            player.skills = PlayerSkills {
                shot_stopping: 20 + (i * 7 + t * 13) % 70,
                tackling: 20 + (i * 11 + t * 5) % 70,
                passing: 20 + (i * 13 + t * 3) % 70,
                shooting: 20 + (i * 17 + t * 11) % 70,
                stamina: 35 + (i * 3 + t) % 50,
                aggression: 15 + (i * 5 + t * 7) % 50,
            };
            players.push(player);
        }

        Roster::new(players)
    }

    fn baseline_league(config: &Config, table: &TacticsTable, seed: u64) -> League {
        let ctx = config.context(table);
        let team_names: Vec<String> = (0..4).map(|i| format!("Team {:02}", i)).collect();
        let rosters: Vec<Roster> = (0..4).map(test_roster).collect();

        let mut league = League::new(team_names, rosters, &ctx, seed);
        league.play_season(&ctx);
        league
    }

    #[test]
    fn rmse_of_identical_leagues_is_zero() {
        let config = Config::default();
        let table = TacticsTable::new();
        let baseline = baseline_league(&config, &table, 3);

        let copy = baseline.clone();
        assert_eq!(0.0, rmse(&baseline, &[copy]));
    }

    #[test]
    fn rmse_counts_every_difference() {
        let config = Config::default();
        let table = TacticsTable::new();
        let baseline = baseline_league(&config, &table, 3);

        let mut copy = baseline.clone();
        copy.rosters[0].players[0].statistics.goals += 2;

        // One squared difference of 4 over 4 teams and 1 replica.
        assert!((rmse(&baseline, &[copy]) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn first_step_rmse_is_reproducible() {
        let config = Config::default();
        let table = TacticsTable::new();
        let baseline = baseline_league(&config, &table, 3);
        let ctx = config.context(&table);

        let params = SearchParams {
            steps: 1,
            replicas: 1,
            ..SearchParams::default()
        };

        let mut first = RatingSearch::new(baseline.clone(), params.clone(), 9);
        let mut second = RatingSearch::new(baseline, params, 9);

        assert_eq!(first.step(1, &ctx), second.step(1, &ctx));
    }

    #[test]
    fn random_init_stays_in_rating_range() {
        let config = Config::default();
        let table = TacticsTable::new();
        let baseline = baseline_league(&config, &table, 5);

        let mut search = RatingSearch::new(baseline, SearchParams::default(), 4);
        search.init_random();

        for replica in &search.replicas {
            for roster in &replica.rosters {
                for player in roster.players.iter().filter(|p| !p.is_placeholder()) {
                    for rating in [
                        player.skills.shot_stopping,
                        player.skills.tackling,
                        player.skills.passing,
                        player.skills.shooting,
                        player.skills.stamina,
                        player.skills.aggression,
                    ] {
                        assert!((1..=99).contains(&rating));
                    }
                }
            }
        }
    }

    #[test]
    fn percentile_init_maps_stats_onto_ratings() {
        let config = Config::default();
        let table = TacticsTable::new();
        let baseline = baseline_league(&config, &table, 5);

        let mut search = RatingSearch::new(baseline, SearchParams::default(), 4);
        search.init_percentile();

        for roster in &search.replicas[0].rosters {
            for player in roster.players.iter().filter(|p| !p.is_placeholder()) {
                assert!((1..=99).contains(&player.skills.shot_stopping));
                assert!((1..=99).contains(&player.skills.tackling));
                assert!((1..=99).contains(&player.skills.passing));
                assert!((1..=99).contains(&player.skills.shooting));
                assert_eq!(30, player.skills.aggression);
                assert_eq!(50, player.skills.stamina);
            }
        }
    }

    #[test]
    fn percentile_init_leaves_placeholders_alone() {
        let config = Config::default();
        let table = TacticsTable::new();
        let baseline = baseline_league(&config, &table, 5);

        let mut search = RatingSearch::new(baseline, SearchParams::default(), 4);
        search.init_percentile();

        for replica in &search.replicas {
            for roster in &replica.rosters {
                for player in roster.players.iter().filter(|p| p.is_placeholder()) {
                    assert_eq!(0, player.skills.shooting);
                    assert_eq!(0, player.skills.aggression);
                }
            }
        }
    }

    #[test]
    fn search_keeps_ratings_legal_and_error_finite() {
        let config = Config::default();
        let table = TacticsTable::new();
        let baseline = baseline_league(&config, &table, 7);
        let ctx = config.context(&table);

        let params = SearchParams {
            steps: 4,
            replicas: 1,
            threshold: 500.0,
            threshold_decay: 1.0,
            step_size: 8,
            stale_limit: 100,
        };

        let mut search = RatingSearch::new(baseline, params, 11);
        search.init_percentile();
        let best = search.run(&ctx);

        assert!(best.is_finite());
        for roster in &search.replicas[0].rosters {
            for player in roster.players.iter().filter(|p| !p.is_placeholder()) {
                for rating in [
                    player.skills.shot_stopping,
                    player.skills.tackling,
                    player.skills.passing,
                    player.skills.shooting,
                    player.skills.stamina,
                    player.skills.aggression,
                ] {
                    assert!((1..=99).contains(&rating), "rating {} out of range", rating);
                }
            }
        }
    }

    #[test]
    fn stalled_search_restarts_from_best() {
        let config = Config::default();
        let table = TacticsTable::new();
        let baseline = baseline_league(&config, &table, 13);
        let ctx = config.context(&table);

        let params = SearchParams {
            steps: 1,
            replicas: 1,
            threshold: 0.5,
            threshold_decay: 0.0,
            step_size: 5,
            stale_limit: 3,
        };

        let mut search = RatingSearch::new(baseline, params.clone(), 17);
        search.init_percentile();

        // First step always accepts against an infinite last error.
        search.step(1, &ctx);
        assert!(search.rmse_last.is_finite());

        // An unreachable last error forces every following step to reject.
        search.rmse_last = -1.0;
        for step in 2..=4 {
            search.step(step, &ctx);
        }

        // Three rejections in a row trigger the restart.
        assert_eq!(f64::INFINITY, search.rmse_last);
        assert_eq!(params.threshold, search.threshold);
        assert_eq!(params.step_size, search.step_size);
    }
}
