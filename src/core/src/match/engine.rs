use crate::club::{N_LINEUP, Roster, Teamsheet};
use crate::context::GlobalContext;
use crate::r#match::{ContributionCalculator, MatchResult, TeamMatchState, substitution};
use crate::utils::weighted_index;
use rand::RngExt;
use rand::rngs::StdRng;

pub const MATCH_MINUTES: u32 = 90;

/// A side that drops below this many players forfeits the rest of the match.
pub const MIN_ON_FIELD: usize = 7;

// Shot model.
const SHOT_SCALE: f64 = 1.8;
const SHOT_AGGRESSION_DIVISOR: f64 = 500_000.0;
const SHOT_PRESSURE_WEIGHT: f64 = 0.08;
const PASS_PROBABILITY: f64 = 0.75;
const TACKLE_SCALE: f64 = 0.4;
const ON_TARGET_SCALE: f64 = 0.58;
const GOAL_SKILL_SCALE: f64 = 0.02;
const GOAL_BASE: f64 = 0.35;
const GOAL_CONFIRM_PROBABILITY: f64 = 0.95;

// Foul model.
const FOUL_SCALE: f64 = 0.75;
const FOUL_AGGRESSION_DIVISOR: f64 = 10_000.0;
const YELLOW_PROBABILITY: f64 = 0.6;
const RED_PROBABILITY: f64 = 0.04;
const PENALTY_PROBABILITY: f64 = 0.05;
const PENALTY_BASE: f64 = 0.8;
const PENALTY_SKILL_SCALE: f64 = 0.01;

// Injury model.
const INJURY_SCALE: f64 = 0.15;
const INJURY_AGGRESSION_DIVISOR: f64 = 50_000.0;

/// One scheduled match between two snapshots. The two sides act strictly
/// in turn within a minute, so the whole match runs on one RNG stream.
pub struct Match {
    pub home: TeamMatchState,
    pub away: TeamMatchState,
}

impl Match {
    /// Snapshot both lineups and run the kickoff contribution pass.
    pub fn make(
        home_roster: &Roster,
        home_sheet: &Teamsheet,
        away_roster: &Roster,
        away_sheet: &Teamsheet,
        ctx: &GlobalContext<'_>,
    ) -> Self {
        let mut home = TeamMatchState::from_teamsheet(home_roster, home_sheet);
        let mut away = TeamMatchState::from_teamsheet(away_roster, away_sheet);

        ContributionCalculator::compute(&mut home, away.tactic, ctx);
        ContributionCalculator::compute(&mut away, home.tactic, ctx);

        Match { home, away }
    }

    pub fn play(mut self, ctx: &GlobalContext<'_>, rng: &mut StdRng) -> MatchResult {
        for _minute in 1..=MATCH_MINUTES {
            if self.home.active_count() < MIN_ON_FIELD || self.away.active_count() < MIN_ON_FIELD
            {
                break;
            }

            self.step(ctx, rng);
        }

        MatchResult::new(self.home, self.away)
    }

    /// One minute: wear both sides down, then run the home side's shot,
    /// foul and injury chances, then the away side's.
    fn step(&mut self, ctx: &GlobalContext<'_>, rng: &mut StdRng) {
        self.home.fatigue_step(rng);
        self.away.fatigue_step(rng);

        shot_event(&mut self.home, &mut self.away, true, ctx, rng);
        foul_event(&mut self.home, &mut self.away, rng);
        injury_event(&mut self.home, &mut self.away, ctx, rng);

        shot_event(&mut self.away, &mut self.home, false, ctx, rng);
        foul_event(&mut self.away, &mut self.home, rng);
        injury_event(&mut self.away, &mut self.home, ctx, rng);
    }
}

/// Attacking chance for one side: maybe a shot, built up through an
/// optional pass, contested by a tackle, then resolved against the keeper.
fn shot_event(
    attack: &mut TeamMatchState,
    defend: &mut TeamMatchState,
    is_home: bool,
    ctx: &GlobalContext<'_>,
    rng: &mut StdRng,
) {
    let sum_shooting = attack.sum_eff_shooting();
    let sum_passing = attack.sum_eff_passing();
    let sum_defend_tackling = defend.sum_eff_tackling();

    let momentum = (sum_shooting + 2.0 * sum_passing) / 3.0 / (sum_defend_tackling + 1.0);
    let mut p_shot = SHOT_SCALE
        * (attack.sum_active_aggression() / SHOT_AGGRESSION_DIVISOR
            + SHOT_PRESSURE_WEIGHT * momentum * momentum);
    if is_home {
        p_shot += ctx.tactics.home_bonus;
    }

    if rng.random::<f64>() >= p_shot.min(1.0) {
        return;
    }

    let Some(shooter) = weighted_index(&attack.eff_shooting, rng) else {
        return;
    };

    // Build-up pass. The key pass is credited as soon as the passer is
    // picked, whether or not the move survives the tackle.
    let mut passer = None;
    if rng.random::<f64>() < PASS_PROBABILITY {
        let mut weights = attack.eff_passing;
        weights[shooter] = 0.0;

        if let Some(first) = weighted_index(&weights, rng) {
            let mut chosen = first;
            if attack.positions[shooter].side != attack.positions[chosen].side {
                if let Some(second) = weighted_index(&weights, rng) {
                    chosen = second;
                }
            }
            attack.key_passes[chosen] += 1;
            passer = Some(chosen);
        }
    }

    let p_tackle =
        (TACKLE_SCALE * 3.0 * sum_defend_tackling / (2.0 * sum_passing + sum_shooting)).min(1.0);
    if rng.random::<f64>() < p_tackle {
        if let Some(tackler) = weighted_index(&defend.eff_tackling, rng) {
            defend.key_tackles[tackler] += 1;
            return;
        }
    }

    attack.shots[shooter] += 1;

    let on_target = rng.random::<f64>() < ON_TARGET_SCALE * f64::from(attack.fatigue[shooter]);
    if !on_target {
        return;
    }

    let keeper = defend.goalkeeper;
    let p_goal = (GOAL_SKILL_SCALE
        * f64::from(attack.shooting[shooter])
        * f64::from(attack.fatigue[shooter])
        - GOAL_SKILL_SCALE * f64::from(defend.shot_stopping[keeper])
        + GOAL_BASE)
        .clamp(0.1, 0.9);

    if rng.random::<f64>() < p_goal {
        // A small share of goals is chalked off.
        if rng.random::<f64>() < GOAL_CONFIRM_PROBABILITY {
            attack.goals[shooter] += 1;
            attack.score += 1;
            if let Some(passer) = passer {
                attack.assists[passer] += 1;
            }
        }
    } else {
        defend.saves[keeper] += 1;
    }
}

/// Discipline check for one side: a foul can draw a card, and a keeper
/// foul or an unlucky roll concedes a penalty to the opposition.
fn foul_event(side: &mut TeamMatchState, opponent: &mut TeamMatchState, rng: &mut StdRng) {
    let p_foul = FOUL_SCALE * side.sum_active_aggression() / FOUL_AGGRESSION_DIVISOR;
    if rng.random::<f64>() >= p_foul {
        return;
    }

    let mut weights = [0f32; N_LINEUP];
    for slot in 0..N_LINEUP {
        if side.active[slot] {
            weights[slot] = side.aggression[slot] as f32;
        }
    }
    let Some(fouler) = weighted_index(&weights, rng) else {
        return;
    };

    if rng.random::<f64>() < YELLOW_PROBABILITY {
        side.yellow[fouler] += 1;
        if side.yellow[fouler] >= 2 {
            side.active[fouler] = false;
        }
    } else if rng.random::<f64>() < RED_PROBABILITY {
        side.red[fouler] = true;
        side.active[fouler] = false;
    }

    if side.positions[fouler].is_goalkeeper() || rng.random::<f64>() < PENALTY_PROBABILITY {
        penalty_kick(opponent, side, rng);
    }
}

fn penalty_kick(attack: &mut TeamMatchState, defend: &mut TeamMatchState, rng: &mut StdRng) {
    let taker = if attack.active[attack.penalty_taker] {
        Some(attack.penalty_taker)
    } else {
        best_active_shooter(attack)
    };
    let Some(taker) = taker else {
        return;
    };

    let keeper = defend.goalkeeper;
    let p_score = (PENALTY_BASE
        + PENALTY_SKILL_SCALE
            * f64::from(attack.shooting[taker] - defend.shot_stopping[keeper]))
    .clamp(0.0, 1.0);

    if rng.random::<f64>() < p_score {
        attack.goals[taker] += 1;
        attack.score += 1;
    }
}

/// Stand-in penalty taker: the strongest fresh shooter still on the pitch.
fn best_active_shooter(ms: &TeamMatchState) -> Option<usize> {
    let mut best = None;
    let mut best_score = f32::MIN;

    for slot in 0..N_LINEUP {
        if !ms.active[slot] {
            continue;
        }
        let score = ms.shooting[slot] as f32 * ms.fatigue[slot];
        if score > best_score {
            best = Some(slot);
            best_score = score;
        }
    }

    best
}

/// Knocks driven by the opposition's aggression; the victim leaves the
/// pitch and the substitution logic takes over.
fn injury_event(
    side: &mut TeamMatchState,
    opponent: &mut TeamMatchState,
    ctx: &GlobalContext<'_>,
    rng: &mut StdRng,
) {
    let p_injury = INJURY_SCALE * opponent.sum_active_aggression() / INJURY_AGGRESSION_DIVISOR;
    if rng.random::<f64>() >= p_injury {
        return;
    }

    let mut weights = [0f32; N_LINEUP];
    for slot in 0..N_LINEUP {
        if side.active[slot] {
            weights[slot] = 1.0;
        }
    }
    let Some(victim) = weighted_index(&weights, rng) else {
        return;
    };

    substitution::substitute_injured(side, victim, opponent.tactic, ctx);
}
