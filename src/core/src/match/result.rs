use crate::r#match::TeamMatchState;

/// Final state of a played match. Both team snapshots are kept whole so
/// the roster updater can fold every counter back into the pools.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub home: TeamMatchState,
    pub away: TeamMatchState,
}

impl MatchResult {
    pub fn new(home: TeamMatchState, away: TeamMatchState) -> Self {
        MatchResult { home, away }
    }

    pub fn home_goals(&self) -> i16 {
        self.home.score
    }

    pub fn away_goals(&self) -> i16 {
        self.away.score
    }
}
