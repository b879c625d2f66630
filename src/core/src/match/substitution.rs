use crate::club::{N_LINEUP, Tactic};
use crate::context::GlobalContext;
use crate::r#match::{ContributionCalculator, TeamMatchState};

/// Handles an injured player leaving the pitch: find a replacement from
/// the bench if any substitutions remain, promote an outfield player to
/// goalkeeper when the keeper goes down with nobody left, or simply play
/// a man down.
pub fn substitute_injured(
    ms: &mut TeamMatchState,
    victim: usize,
    opponent_tactic: Tactic,
    ctx: &GlobalContext<'_>,
) {
    let victim_position = ms.positions[victim];

    let available: Vec<usize> = (0..N_LINEUP)
        .filter(|&slot| {
            !ms.active[slot] && !ms.injured[slot] && !ms.red[slot] && ms.yellow[slot] < 2
        })
        .collect();

    if available.is_empty() || ms.subs_used >= ctx.tactics.max_subs {
        if victim_position.is_goalkeeper() {
            promote_best_active_keeper(ms, victim);
        }
        retire(ms, victim);
        return;
    }

    // Like-for-like: same group and side.
    if let Some(&slot) = available
        .iter()
        .find(|&&slot| ms.positions[slot] == victim_position)
    {
        ms.active[slot] = true;
        if victim_position.is_goalkeeper() {
            ms.goalkeeper = slot;
        }
    } else if victim_position.is_goalkeeper() {
        // No backup keeper: send on the best pair of hands instead.
        let slot = best_by_shot_stopping(ms, &available);
        ms.active[slot] = true;
        ms.promote_to_goalkeeper(slot);
    } else {
        // Same group on any side, then any outfielder, then anyone.
        let slot = available
            .iter()
            .copied()
            .find(|&slot| ms.positions[slot].group == victim_position.group)
            .or_else(|| {
                available
                    .iter()
                    .copied()
                    .find(|&slot| !ms.positions[slot].is_goalkeeper())
            })
            .unwrap_or(available[0]);

        ms.active[slot] = true;
        ContributionCalculator::compute_slot(ms, slot, opponent_tactic, ctx);
    }

    ms.subs_used += 1;
    retire(ms, victim);
}

fn retire(ms: &mut TeamMatchState, victim: usize) {
    ms.active[victim] = false;
    ms.injured[victim] = true;
}

/// Emergency keeper change with no bench left: the remaining player with
/// the best shot stopping pulls on the gloves.
fn promote_best_active_keeper(ms: &mut TeamMatchState, victim: usize) {
    let mut best = None;
    let mut best_score = 0i16;

    for slot in 0..N_LINEUP {
        if slot == victim || !ms.active[slot] {
            continue;
        }
        if best.is_none() || ms.shot_stopping[slot] > best_score {
            best = Some(slot);
            best_score = ms.shot_stopping[slot];
        }
    }

    if let Some(slot) = best {
        ms.promote_to_goalkeeper(slot);
    }
}

fn best_by_shot_stopping(ms: &TeamMatchState, candidates: &[usize]) -> usize {
    let mut best = candidates[0];
    let mut best_score = ms.shot_stopping[best];

    for &slot in &candidates[1..] {
        if ms.shot_stopping[slot] > best_score {
            best = slot;
            best_score = ms.shot_stopping[slot];
        }
    }

    best
}
