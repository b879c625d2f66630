use crate::club::{N_LINEUP, PositionGroup, SkillKind, Tactic};
use crate::context::GlobalContext;
use crate::r#match::TeamMatchState;

/// Penalty on every channel when a side is lopsided between right and left.
const UNBALANCED_SIDE_PENALTY: f32 = 0.25;

/// Penalty for stacking more than three players through the middle.
const CROWDED_CENTER_FACTOR: f32 = 0.87;

/// Penalty for playing a player on a side they are not comfortable on.
const WRONG_SIDE_FACTOR: f32 = 0.75;

/// Builds the per-slot contribution channels consumed by the event
/// probabilities: raw skill, shaped by side balance, side preference, the
/// team tactic and the tactic matchup bonus. Goalkeepers contribute
/// nothing to open play.
pub struct ContributionCalculator;

impl ContributionCalculator {
    /// Recompute all sixteen slots. Called at kickoff for both teams.
    pub fn compute(ms: &mut TeamMatchState, opponent_tactic: Tactic, ctx: &GlobalContext<'_>) {
        for slot in 0..N_LINEUP {
            Self::reset_slot(ms, slot);
        }

        for slot in 0..N_LINEUP {
            Self::shape_slot(ms, slot, opponent_tactic, ctx);
        }

        ms.recompute_effective();
    }

    /// Recompute a single slot, using the current side counts. Used when a
    /// substitute enters in a position the kickoff pass did not cover.
    pub fn compute_slot(
        ms: &mut TeamMatchState,
        slot: usize,
        opponent_tactic: Tactic,
        ctx: &GlobalContext<'_>,
    ) {
        Self::reset_slot(ms, slot);
        Self::shape_slot(ms, slot, opponent_tactic, ctx);
        ms.recompute_effective();
    }

    fn reset_slot(ms: &mut TeamMatchState, slot: usize) {
        ms.base_shooting[slot] = ms.shooting[slot] as f32;
        ms.base_passing[slot] = ms.passing[slot] as f32;
        ms.base_tackling[slot] = ms.tackling[slot] as f32;
    }

    fn shape_slot(
        ms: &mut TeamMatchState,
        slot: usize,
        opponent_tactic: Tactic,
        ctx: &GlobalContext<'_>,
    ) {
        let position = ms.positions[slot];

        if position.is_goalkeeper() {
            ms.base_shooting[slot] = 0.0;
            ms.base_passing[slot] = 0.0;
            ms.base_tackling[slot] = 0.0;
            return;
        }

        let mut factor = Self::side_balance_factor(ms, position.group);

        if !ms.preferred_sides[slot].contains(position.side) {
            factor *= WRONG_SIDE_FACTOR;
        }

        ms.base_shooting[slot] *= factor;
        ms.base_passing[slot] *= factor;
        ms.base_tackling[slot] *= factor;

        let tactic = ms.tactic;
        for (kind, channel) in [
            (SkillKind::Shooting, &mut ms.base_shooting[slot]),
            (SkillKind::Passing, &mut ms.base_passing[slot]),
            (SkillKind::Tackling, &mut ms.base_tackling[slot]),
        ] {
            *channel *= ctx.table.multiplier(tactic, position.group, kind);
            *channel *= ctx
                .table
                .bonus(tactic, opponent_tactic, position.group, kind);
        }
    }

    /// How well a position group covers the width of the pitch, from the
    /// active players currently assigned to it.
    fn side_balance_factor(ms: &TeamMatchState, group: PositionGroup) -> f32 {
        let mut right = 0i32;
        let mut left = 0i32;
        let mut center = 0i32;

        for slot in 0..N_LINEUP {
            if !ms.active[slot] || ms.positions[slot].group != group {
                continue;
            }
            match ms.positions[slot].side {
                'R' => right += 1,
                'L' => left += 1,
                'C' => center += 1,
                _ => {}
            }
        }

        if right != left {
            let spread = right + left;
            return 1.0 - UNBALANCED_SIDE_PENALTY * (right - left).abs() as f32 / spread as f32;
        }

        if center > 3 && right == 0 && left == 0 {
            return CROWDED_CENTER_FACTOR;
        }

        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{
        Player, PlayerSkills, Position, Roster, Tactic, TacticsTable, Teamsheet, TeamsheetEntry,
    };
    use crate::context::Config;

    fn player(name: &str, side: &str) -> Player {
        let mut p = Player::new(String::from(name), 25, String::from("eng"), String::from(side));
        p.skills = PlayerSkills {
            shot_stopping: 50,
            tackling: 40,
            passing: 40,
            shooting: 40,
            stamina: 50,
            aggression: 30,
        };
        p
    }

    fn sheet_with_sides(sides: &[(PositionGroup, char)]) -> (Roster, Teamsheet) {
        let mut players = Vec::new();
        let mut starters = Vec::new();

        players.push(player("Keeper", ""));
        starters.push(TeamsheetEntry::new(
            Position::goalkeeper(),
            String::from("Keeper"),
        ));

        for (i, &(group, side)) in sides.iter().enumerate() {
            let name = format!("Out {:02}", i);
            players.push(player(&name, "RLC"));
            starters.push(TeamsheetEntry::new(Position::new(group, side), name));
        }

        let roster = Roster::new(players);
        let sheet = Teamsheet {
            team_name: String::from("Testers"),
            tactic: Tactic::Normal,
            starters,
            subs: Vec::new(),
            penalty_taker: String::from("Out 00"),
        };

        (roster, sheet)
    }

    fn compute(roster: &Roster, sheet: &Teamsheet) -> crate::r#match::TeamMatchState {
        let config = Config::default();
        let table = TacticsTable::new();
        let ctx = config.context(&table);

        let mut ms = crate::r#match::TeamMatchState::from_teamsheet(roster, sheet);
        ContributionCalculator::compute(&mut ms, Tactic::Normal, &ctx);
        ms
    }

    #[test]
    fn goalkeeper_contributes_nothing() {
        let (roster, sheet) = sheet_with_sides(&[
            (PositionGroup::Defender, 'C'),
            (PositionGroup::Midfielder, 'C'),
            (PositionGroup::Forward, 'C'),
        ]);

        let ms = compute(&roster, &sheet);

        assert_eq!(0.0, ms.base_shooting[0]);
        assert_eq!(0.0, ms.base_passing[0]);
        assert_eq!(0.0, ms.base_tackling[0]);
    }

    #[test]
    fn balanced_wings_are_neutral() {
        let (roster, sheet) = sheet_with_sides(&[
            (PositionGroup::Defender, 'R'),
            (PositionGroup::Defender, 'L'),
            (PositionGroup::Defender, 'C'),
        ]);

        let ms = compute(&roster, &sheet);

        assert!((ms.base_tackling[1] - 40.0).abs() < 1e-4);
        assert!((ms.base_tackling[2] - 40.0).abs() < 1e-4);
    }

    #[test]
    fn lopsided_wings_are_penalized() {
        let (roster, sheet) = sheet_with_sides(&[
            (PositionGroup::Defender, 'R'),
            (PositionGroup::Defender, 'R'),
            (PositionGroup::Defender, 'L'),
        ]);

        let ms = compute(&roster, &sheet);

        // 1 - 0.25 * |2-1| / 3
        let expected = 40.0 * (1.0 - 0.25 / 3.0);
        assert!((ms.base_tackling[1] - expected).abs() < 1e-3);
    }

    #[test]
    fn crowded_center_is_penalized() {
        let (roster, sheet) = sheet_with_sides(&[
            (PositionGroup::Midfielder, 'C'),
            (PositionGroup::Midfielder, 'C'),
            (PositionGroup::Midfielder, 'C'),
            (PositionGroup::Midfielder, 'C'),
        ]);

        let ms = compute(&roster, &sheet);

        let expected = 40.0 * 0.87;
        assert!((ms.base_passing[1] - expected).abs() < 1e-3);
    }

    #[test]
    fn three_or_fewer_through_the_center_is_fine() {
        let (roster, sheet) = sheet_with_sides(&[
            (PositionGroup::Midfielder, 'C'),
            (PositionGroup::Midfielder, 'C'),
            (PositionGroup::Midfielder, 'C'),
        ]);

        let ms = compute(&roster, &sheet);

        assert!((ms.base_passing[1] - 40.0).abs() < 1e-4);
    }

    #[test]
    fn wrong_side_assignment_costs_a_quarter() {
        let mut players = vec![player("Keeper", ""), player("Winger", "R")];
        players[1].skills.passing = 40;

        let roster = Roster::new(players);
        let sheet = Teamsheet {
            team_name: String::from("Testers"),
            tactic: Tactic::Normal,
            starters: vec![
                TeamsheetEntry::new(Position::goalkeeper(), String::from("Keeper")),
                TeamsheetEntry::new(
                    Position::new(PositionGroup::Midfielder, 'L'),
                    String::from("Winger"),
                ),
            ],
            subs: Vec::new(),
            penalty_taker: String::from("Winger"),
        };

        let ms = compute(&roster, &sheet);

        // Only one midfielder: left count 1, right 0 -> 1 - 0.25 * 1/1,
        // then the wrong-side penalty on top.
        let expected = 40.0 * 0.75 * 0.75;
        assert!((ms.base_passing[1] - expected).abs() < 1e-3);
    }

    #[test]
    fn tactic_multiplier_applies_to_matching_channel() {
        let (roster, sheet) = sheet_with_sides(&[(PositionGroup::Forward, 'C')]);

        let config = Config::default();
        let mut table = TacticsTable::new();
        table.insert_multiplier(
            Tactic::Normal,
            PositionGroup::Forward,
            SkillKind::Shooting,
            1.5,
        );
        let ctx = config.context(&table);

        let mut ms = crate::r#match::TeamMatchState::from_teamsheet(&roster, &sheet);
        ContributionCalculator::compute(&mut ms, Tactic::Normal, &ctx);

        assert!((ms.base_shooting[1] - 60.0).abs() < 1e-3);
        assert!((ms.base_passing[1] - 40.0).abs() < 1e-3);
    }

    #[test]
    fn bonus_multiplier_applies_on_matchup() {
        let (roster, sheet) = sheet_with_sides(&[(PositionGroup::Forward, 'C')]);

        let config = Config::default();
        let mut table = TacticsTable::new();
        table.insert_bonus(
            Tactic::Normal,
            Tactic::Defensive,
            PositionGroup::Forward,
            SkillKind::Shooting,
            1.2,
        );
        let ctx = config.context(&table);

        let mut ms = crate::r#match::TeamMatchState::from_teamsheet(&roster, &sheet);
        ContributionCalculator::compute(&mut ms, Tactic::Defensive, &ctx);

        assert!((ms.base_shooting[1] - 48.0).abs() < 1e-3);

        // No bonus against a different tactic.
        ContributionCalculator::compute(&mut ms, Tactic::Attacking, &ctx);
        assert!((ms.base_shooting[1] - 40.0).abs() < 1e-3);
    }
}
