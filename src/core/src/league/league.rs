use crate::club::{Roster, Teamsheet, TeamsheetSelector};
use crate::context::GlobalContext;
use crate::league::{LeagueTable, WeekFixtures, build_schedule};
use crate::r#match::{Match, MatchResult};
use crate::utils::mix_seed;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
#[cfg(not(feature = "replica-parallel"))]
use rayon::prelude::*;

/// A league season: the team pool, the standings and the fixture list,
/// plus the root seed every match and update stream is derived from.
#[derive(Debug, Clone)]
pub struct League {
    pub team_names: Vec<String>,
    pub rosters: Vec<Roster>,
    pub teamsheets: Vec<Teamsheet>,
    pub table: LeagueTable,
    pub schedule: Vec<WeekFixtures>,
    pub current_week: usize,
    pub root_seed: u64,

    /// Pristine post-load pools, for a full reset.
    initial_rosters: Vec<Roster>,
}

impl League {
    pub fn new(
        team_names: Vec<String>,
        rosters: Vec<Roster>,
        ctx: &GlobalContext<'_>,
        root_seed: u64,
    ) -> Self {
        assert_eq!(
            team_names.len(),
            rosters.len(),
            "one roster per team required"
        );

        let teamsheets = Self::select_all(&team_names, &rosters, ctx);
        let table = LeagueTable::new(&team_names);
        let schedule = build_schedule(team_names.len());

        League {
            initial_rosters: rosters.clone(),
            team_names,
            rosters,
            teamsheets,
            table,
            schedule,
            current_week: 0,
            root_seed,
        }
    }

    fn select_all(
        team_names: &[String],
        rosters: &[Roster],
        ctx: &GlobalContext<'_>,
    ) -> Vec<Teamsheet> {
        team_names
            .iter()
            .zip(rosters)
            .map(|(name, roster)| {
                TeamsheetSelector::select(name, roster, ctx.teamsheet.default_tactic, ctx.teamsheet)
            })
            .collect()
    }

    /// Play one fixture as a stand-alone game, leaving the league untouched.
    pub fn play_game(
        &self,
        home: usize,
        away: usize,
        ctx: &GlobalContext<'_>,
        seed: u64,
    ) -> MatchResult {
        let game = Match::make(
            &self.rosters[home],
            &self.teamsheets[home],
            &self.rosters[away],
            &self.teamsheets[away],
            ctx,
        );

        let mut rng = StdRng::seed_from_u64(seed);
        game.play(ctx, &mut rng)
    }

    /// Play every fixture of the current week, fold the results back into
    /// the standings and the rosters, and reselect next week's lineups.
    ///
    /// Matches within a week touch disjoint teams, so they run on the
    /// rayon pool; each match draws from its own seed-derived RNG stream,
    /// making the outcome independent of worker scheduling.
    pub fn play_week(&mut self, ctx: &GlobalContext<'_>) -> Vec<MatchResult> {
        let week = self.current_week;
        if week >= self.schedule.len() {
            return Vec::new();
        }

        let fixtures = &self.schedule[week];
        let rosters = &self.rosters;
        let teamsheets = &self.teamsheets;
        let root = self.root_seed;

        let play_one = |(index, &(home, away)): (usize, &(usize, usize))| {
            let game = Match::make(
                &rosters[home],
                &teamsheets[home],
                &rosters[away],
                &teamsheets[away],
                ctx,
            );
            let mut rng =
                StdRng::seed_from_u64(mix_seed(root, 2 * week as u64, index as u64));
            (home, away, game.play(ctx, &mut rng))
        };

        #[cfg(not(feature = "replica-parallel"))]
        let played: Vec<(usize, usize, MatchResult)> =
            fixtures.par_iter().enumerate().map(play_one).collect();
        #[cfg(feature = "replica-parallel")]
        let played: Vec<(usize, usize, MatchResult)> =
            fixtures.iter().enumerate().map(play_one).collect();

        for (home, away, result) in &played {
            debug!(
                "week {}: {} {} - {} {}",
                week + 1,
                self.team_names[*home],
                result.home.score,
                result.away.score,
                self.team_names[*away]
            );

            self.table
                .update(*home, *away, result.home.score, result.away.score);

            for (team, comms) in [(*home, &result.home), (*away, &result.away)] {
                let mut rng = StdRng::seed_from_u64(mix_seed(
                    root,
                    2 * week as u64 + 1,
                    team as u64,
                ));
                self.rosters[team].update_from_match(comms, ctx.update, &mut rng);
                self.teamsheets[team] = TeamsheetSelector::select(
                    &self.team_names[team],
                    &self.rosters[team],
                    ctx.teamsheet.default_tactic,
                    ctx.teamsheet,
                );
            }
        }

        self.current_week += 1;

        played.into_iter().map(|(_, _, result)| result).collect()
    }

    /// Run the remaining weeks and rank the final table.
    pub fn play_season(&mut self, ctx: &GlobalContext<'_>) {
        while self.current_week < self.schedule.len() {
            self.play_week(ctx);
        }

        self.table.rank();
    }

    /// Restore the league to its freshly loaded state.
    pub fn reset(&mut self, ctx: &GlobalContext<'_>) {
        self.rosters = self.initial_rosters.clone();
        self.teamsheets = Self::select_all(&self.team_names, &self.rosters, ctx);
        self.table.reset();
        self.current_week = 0;
    }

    /// Start a new season with the current ratings: statistics wiped,
    /// fitness restored, lineups reselected. Used by the rating search,
    /// which mutates ratings between seasons.
    pub fn clear_season_state(&mut self, ctx: &GlobalContext<'_>) {
        for roster in &mut self.rosters {
            roster.clear_season_state();
        }
        self.teamsheets = Self::select_all(&self.team_names, &self.rosters, ctx);
        self.table.reset();
        self.current_week = 0;
    }

    pub fn n_teams(&self) -> usize {
        self.team_names.len()
    }
}
