use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LeagueTableRow {
    pub place: i16,
    pub team: String,
    pub played: i16,
    pub win: i16,
    pub draw: i16,
    pub lost: i16,
    pub goals_for: i16,
    pub goals_against: i16,
    pub goal_diff: i16,
    pub points: i16,
}

impl LeagueTableRow {
    fn new(team: String) -> Self {
        LeagueTableRow {
            place: 0,
            team,
            played: 0,
            win: 0,
            draw: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
        }
    }

    fn record_result(&mut self, scored: i16, conceded: i16) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;

        match scored.cmp(&conceded) {
            Ordering::Greater => self.win += 1,
            Ordering::Equal => self.draw += 1,
            Ordering::Less => self.lost += 1,
        }

        self.goal_diff = self.goals_for - self.goals_against;
        self.points = 3 * self.win + self.draw;
    }
}

/// The standings, kept in team order so match results can index straight
/// into it. `rank` assigns places without reordering the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueTable {
    pub rows: Vec<LeagueTableRow>,
}

impl LeagueTable {
    pub fn new(team_names: &[String]) -> Self {
        LeagueTable {
            rows: team_names
                .iter()
                .map(|name| LeagueTableRow::new(name.clone()))
                .collect(),
        }
    }

    /// Record one final score into both rows.
    pub fn update(&mut self, home_idx: usize, away_idx: usize, home_goals: i16, away_goals: i16) {
        self.rows[home_idx].record_result(home_goals, away_goals);
        self.rows[away_idx].record_result(away_goals, home_goals);
    }

    /// Assign places 1..n by repeatedly pulling the best remaining row:
    /// points, then goal difference, then goals scored (offset by one so a
    /// scoreless record still compares cleanly). Remaining ties go to the
    /// earlier team slot.
    pub fn rank(&mut self) {
        let n = self.rows.len();
        let mut placed = vec![false; n];

        for place in 1..=n {
            let mut leader: Option<usize> = None;

            for idx in 0..n {
                if placed[idx] {
                    continue;
                }
                match leader {
                    None => leader = Some(idx),
                    Some(current) => {
                        if Self::sort_key(&self.rows[idx]) > Self::sort_key(&self.rows[current]) {
                            leader = Some(idx);
                        }
                    }
                }
            }

            let leader = leader.expect("fewer leaders than rows");
            self.rows[leader].place = place as i16;
            placed[leader] = true;
        }
    }

    fn sort_key(row: &LeagueTableRow) -> (i16, i16, i16) {
        (row.points, row.goal_diff, row.goals_for + 1)
    }

    pub fn reset(&mut self) {
        for row in &mut self.rows {
            *row = LeagueTableRow::new(std::mem::take(&mut row.team));
        }
    }

    /// Rows in place order, for display.
    pub fn standings(&self) -> Vec<&LeagueTableRow> {
        let mut rows: Vec<&LeagueTableRow> = self.rows.iter().collect();
        rows.sort_by_key(|r| r.place);
        rows
    }
}
