use crate::club::{Player, Position, PositionGroup, Roster, Tactic};
use crate::context::TeamSheetConfig;
use log::warn;

pub const N_STARTERS: usize = 11;
pub const N_SUBS: usize = 5;
pub const N_LINEUP: usize = N_STARTERS + N_SUBS;

#[derive(Debug, Clone, PartialEq)]
pub struct TeamsheetEntry {
    pub position: Position,
    pub name: String,
}

impl TeamsheetEntry {
    pub fn new(position: Position, name: String) -> Self {
        TeamsheetEntry { position, name }
    }
}

/// A lineup selection: 11 starters, 5 substitutes, the designated penalty
/// taker and the tactic the team lines up with.
#[derive(Debug, Clone, PartialEq)]
pub struct Teamsheet {
    pub team_name: String,
    pub tactic: Tactic,
    pub starters: Vec<TeamsheetEntry>,
    pub subs: Vec<TeamsheetEntry>,
    pub penalty_taker: String,
}

impl Teamsheet {
    /// All sixteen entries, starters first.
    pub fn lineup(&self) -> impl Iterator<Item = &TeamsheetEntry> {
        self.starters.iter().chain(self.subs.iter())
    }
}

pub struct TeamsheetSelector;

impl TeamsheetSelector {
    /// Pick the best available lineup from a roster.
    ///
    /// Players are ranked per position group by the group's key skill
    /// weighted with available fitness (zero while injured or suspended);
    /// ties go to the earlier roster slot. Groups are filled in field
    /// order, goalkeeper first, and every selected player is removed from
    /// the pool before the next group is ranked.
    pub fn select(
        team_name: &str,
        roster: &Roster,
        tactic: Tactic,
        config: &TeamSheetConfig,
    ) -> Teamsheet {
        let mut avail_fitness: Vec<f32> =
            roster.players.iter().map(Player::available_fitness).collect();

        let penalty_taker = Self::pick_penalty_taker(roster, &avail_fitness);

        let eligible = avail_fitness.iter().filter(|f| **f > 0.0).count();
        if eligible < N_LINEUP {
            warn!(
                "teamsheet for {}: only {} match-fit players for {} slots",
                team_name, eligible, N_LINEUP
            );
        }

        let mut starters = Vec::with_capacity(N_STARTERS);
        let mut subs = Vec::with_capacity(N_SUBS);

        for &(group, n_starters, n_subs) in &config.quotas {
            let side = if group.is_goalkeeper() { ' ' } else { 'C' };

            for pick in 0..n_starters + n_subs {
                let Some(idx) = Self::best_for_group(roster, &avail_fitness, group) else {
                    break;
                };

                // Out of the pool for the remaining groups.
                avail_fitness[idx] = -1.0;

                let entry = TeamsheetEntry::new(
                    Position::new(group, side),
                    roster.players[idx].name.clone(),
                );

                if pick < n_starters {
                    starters.push(entry);
                } else {
                    subs.push(entry);
                }
            }
        }

        Teamsheet {
            team_name: String::from(team_name),
            tactic,
            starters,
            subs,
            penalty_taker,
        }
    }

    fn pick_penalty_taker(roster: &Roster, avail_fitness: &[f32]) -> String {
        let mut best = 0;
        let mut best_score = f32::MIN;

        for (idx, player) in roster.players.iter().enumerate() {
            let score = player.skills.shooting as f32 * avail_fitness[idx];
            if score > best_score {
                best = idx;
                best_score = score;
            }
        }

        roster.players[best].name.clone()
    }

    fn best_for_group(
        roster: &Roster,
        avail_fitness: &[f32],
        group: PositionGroup,
    ) -> Option<usize> {
        let mut best = None;
        let mut best_score = f32::MIN;

        for (idx, player) in roster.players.iter().enumerate() {
            if avail_fitness[idx] < 0.0 {
                continue;
            }

            let score = player.skills.for_group(group) as f32 * avail_fitness[idx];
            if score > best_score {
                best = Some(idx);
                best_score = score;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::PlayerSkills;

    fn player(name: &str, skills: PlayerSkills) -> Player {
        let mut p = Player::new(
            String::from(name),
            25,
            String::from("eng"),
            String::from("C"),
        );
        p.skills = skills;
        p
    }

    fn keeper(name: &str, shot_stopping: i16) -> Player {
        player(
            name,
            PlayerSkills {
                shot_stopping,
                tackling: 10,
                passing: 10,
                shooting: 5,
                stamina: 50,
                aggression: 20,
            },
        )
    }

    fn outfielder(name: &str, tackling: i16, passing: i16, shooting: i16) -> Player {
        player(
            name,
            PlayerSkills {
                shot_stopping: 1,
                tackling,
                passing,
                shooting,
                stamina: 50,
                aggression: 30,
            },
        )
    }

    fn test_roster() -> Roster {
        let mut players = Vec::new();
        players.push(keeper("Keeper A", 80));
        players.push(keeper("Keeper B", 70));
        for i in 0..8 {
            players.push(outfielder(&format!("Back {}", i), 70 - i, 40, 20));
        }
        for i in 0..8 {
            players.push(outfielder(&format!("Mid {}", i), 40, 72 - i, 40));
        }
        for i in 0..6 {
            players.push(outfielder(&format!("Front {}", i), 20, 45, 78 - i));
        }

        Roster::new(players)
    }

    #[test]
    fn selects_full_lineup_with_expected_shape() {
        let sheet = TeamsheetSelector::select(
            "Testers",
            &test_roster(),
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert_eq!(N_STARTERS, sheet.starters.len());
        assert_eq!(N_SUBS, sheet.subs.len());

        assert_eq!("GK ", sheet.starters[0].position.code());
        assert_eq!("Keeper A", sheet.starters[0].name);
        assert_eq!("Keeper B", sheet.subs[0].name);

        let defenders = sheet
            .starters
            .iter()
            .filter(|e| e.position.group == PositionGroup::Defender)
            .count();
        let midfielders = sheet
            .starters
            .iter()
            .filter(|e| e.position.group == PositionGroup::Midfielder)
            .count();
        let forwards = sheet
            .starters
            .iter()
            .filter(|e| e.position.group == PositionGroup::Forward)
            .count();

        assert_eq!(4, defenders);
        assert_eq!(4, midfielders);
        assert_eq!(2, forwards);
    }

    #[test]
    fn outfield_sides_are_center() {
        let sheet = TeamsheetSelector::select(
            "Testers",
            &test_roster(),
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        for entry in sheet.lineup() {
            if entry.position.is_goalkeeper() {
                assert_eq!(' ', entry.position.side);
            } else {
                assert_eq!('C', entry.position.side);
            }
        }
    }

    #[test]
    fn no_player_selected_twice() {
        let sheet = TeamsheetSelector::select(
            "Testers",
            &test_roster(),
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        let mut names: Vec<&str> = sheet.lineup().map(|e| e.name.as_str()).collect();
        names.sort();
        let len = names.len();
        names.dedup();

        assert_eq!(len, names.len());
    }

    #[test]
    fn penalty_taker_is_best_available_shooter() {
        let sheet = TeamsheetSelector::select(
            "Testers",
            &test_roster(),
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert_eq!("Front 0", sheet.penalty_taker);
    }

    #[test]
    fn suspended_players_are_skipped() {
        let mut roster = test_roster();
        let idx = roster.position_of("Keeper A").unwrap();
        roster.players[idx].statistics.suspension = 1;

        let sheet = TeamsheetSelector::select(
            "Testers",
            &roster,
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert_eq!("Keeper B", sheet.starters[0].name);
        assert!(sheet.lineup().all(|e| e.name != "Keeper A"));
    }

    #[test]
    fn injured_penalty_taker_is_replaced() {
        let mut roster = test_roster();
        let idx = roster.position_of("Front 0").unwrap();
        roster.players[idx].statistics.injury = 2;

        let sheet = TeamsheetSelector::select(
            "Testers",
            &roster,
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert_eq!("Front 1", sheet.penalty_taker);
    }

    #[test]
    fn placeholders_rank_last() {
        // 16 real players exactly fill the lineup; placeholders stay out.
        let mut players = vec![keeper("Keeper A", 60)];
        for i in 0..15 {
            players.push(outfielder(&format!("Out {:02}", i), 50, 50, 50));
        }
        let roster = Roster::new(players);

        let sheet = TeamsheetSelector::select(
            "Testers",
            &roster,
            Tactic::Normal,
            &TeamSheetConfig::default(),
        );

        assert!(sheet.lineup().all(|e| e.name != crate::club::PLACEHOLDER_NAME));
    }
}
