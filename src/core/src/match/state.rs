use crate::club::{N_LINEUP, Position, Roster, Tactic, Teamsheet};
use rand::RngExt;
use rand::rngs::StdRng;

/// Per-minute fatigue loss at average stamina; scaled by the stamina gap.
const BASE_FATIGUE_DEDUCTION: f32 = 0.0031;
const STAMINA_FATIGUE_SCALE: f32 = 0.0022;

/// Uniform per-slot per-minute noise on the fatigue loss.
const FATIGUE_NOISE: f32 = 0.003;

pub const MIN_FATIGUE: f32 = 0.1;

/// Mutable per-team snapshot of one match: the sixteen lineup slots with
/// skill copies, fatigue and contribution channels, plus team-level state.
/// Rebuilt from roster and teamsheet at every kickoff.
#[derive(Debug, Clone)]
pub struct TeamMatchState {
    pub team_name: String,
    pub tactic: Tactic,

    pub names: Vec<String>,
    pub positions: [Position; N_LINEUP],
    pub preferred_sides: Vec<String>,

    // Raw skill copies.
    pub shot_stopping: [i16; N_LINEUP],
    pub tackling: [i16; N_LINEUP],
    pub passing: [i16; N_LINEUP],
    pub shooting: [i16; N_LINEUP],
    pub stamina: [i16; N_LINEUP],
    pub aggression: [i16; N_LINEUP],

    pub active: [bool; N_LINEUP],
    pub fatigue: [f32; N_LINEUP],
    pub fatigue_deduction: [f32; N_LINEUP],

    // Contributions after side, tactic and bonus adjustments, before fatigue.
    pub base_shooting: [f32; N_LINEUP],
    pub base_passing: [f32; N_LINEUP],
    pub base_tackling: [f32; N_LINEUP],

    // Contributions after fatigue, recomputed every minute.
    pub eff_shooting: [f32; N_LINEUP],
    pub eff_passing: [f32; N_LINEUP],
    pub eff_tackling: [f32; N_LINEUP],

    // Match counters mirroring the roster statistics.
    pub minutes: [i16; N_LINEUP],
    pub saves: [i16; N_LINEUP],
    pub key_tackles: [i16; N_LINEUP],
    pub key_passes: [i16; N_LINEUP],
    pub shots: [i16; N_LINEUP],
    pub goals: [i16; N_LINEUP],
    pub assists: [i16; N_LINEUP],
    pub yellow: [u8; N_LINEUP],
    pub red: [bool; N_LINEUP],
    pub injured: [bool; N_LINEUP],

    pub penalty_taker: usize,
    pub goalkeeper: usize,
    pub subs_used: u8,
    pub score: i16,
}

impl TeamMatchState {
    /// Snapshot a lineup at kickoff. Starters are active; the five bench
    /// slots wait for the substitution logic.
    pub fn from_teamsheet(roster: &Roster, sheet: &Teamsheet) -> Self {
        let mut state = TeamMatchState {
            team_name: sheet.team_name.clone(),
            tactic: sheet.tactic,
            names: vec![String::new(); N_LINEUP],
            positions: [Position::goalkeeper(); N_LINEUP],
            preferred_sides: vec![String::new(); N_LINEUP],
            shot_stopping: [0; N_LINEUP],
            tackling: [0; N_LINEUP],
            passing: [0; N_LINEUP],
            shooting: [0; N_LINEUP],
            stamina: [0; N_LINEUP],
            aggression: [0; N_LINEUP],
            active: [false; N_LINEUP],
            fatigue: [MIN_FATIGUE; N_LINEUP],
            fatigue_deduction: [0.0; N_LINEUP],
            base_shooting: [0.0; N_LINEUP],
            base_passing: [0.0; N_LINEUP],
            base_tackling: [0.0; N_LINEUP],
            eff_shooting: [0.0; N_LINEUP],
            eff_passing: [0.0; N_LINEUP],
            eff_tackling: [0.0; N_LINEUP],
            minutes: [0; N_LINEUP],
            saves: [0; N_LINEUP],
            key_tackles: [0; N_LINEUP],
            key_passes: [0; N_LINEUP],
            shots: [0; N_LINEUP],
            goals: [0; N_LINEUP],
            assists: [0; N_LINEUP],
            yellow: [0; N_LINEUP],
            red: [false; N_LINEUP],
            injured: [false; N_LINEUP],
            penalty_taker: 0,
            goalkeeper: 0,
            subs_used: 0,
            score: 0,
        };

        for (slot, entry) in sheet.lineup().enumerate() {
            state.names[slot] = entry.name.clone();
            state.positions[slot] = entry.position;
            state.active[slot] = slot < sheet.starters.len();

            let Some(idx) = roster.position_of(&entry.name) else {
                continue;
            };
            let player = &roster.players[idx];

            state.preferred_sides[slot] = player.preferred_side.clone();
            state.shot_stopping[slot] = player.skills.shot_stopping;
            state.tackling[slot] = player.skills.tackling;
            state.passing[slot] = player.skills.passing;
            state.shooting[slot] = player.skills.shooting;
            state.stamina[slot] = player.skills.stamina;
            state.aggression[slot] = player.skills.aggression;

            state.fatigue[slot] =
                (player.statistics.fitness as f32 / 100.0).clamp(MIN_FATIGUE, 1.0);
            state.fatigue_deduction[slot] = if entry.position.is_goalkeeper() {
                0.0
            } else {
                BASE_FATIGUE_DEDUCTION
                    - STAMINA_FATIGUE_SCALE * (player.skills.stamina as f32 - 50.0) / 50.0
            };
        }

        state.goalkeeper = state
            .positions
            .iter()
            .take(sheet.starters.len())
            .position(Position::is_goalkeeper)
            .unwrap_or(0);
        state.penalty_taker = state
            .names
            .iter()
            .position(|n| *n == sheet.penalty_taker)
            .unwrap_or(0);

        state
    }

    pub fn active_count(&self) -> usize {
        self.active.iter().filter(|a| **a).count()
    }

    /// One minute of wear: minutes tick up, fatigue drifts down with a
    /// little noise, and the effective contributions are refreshed.
    pub fn fatigue_step(&mut self, rng: &mut StdRng) {
        for slot in 0..N_LINEUP {
            let noise = rng.random_range(-FATIGUE_NOISE..FATIGUE_NOISE);

            if self.active[slot] {
                self.minutes[slot] += 1;
                self.fatigue[slot] = (self.fatigue[slot]
                    - (self.fatigue_deduction[slot] - noise))
                    .clamp(MIN_FATIGUE, 1.0);
            }
        }

        self.recompute_effective();
    }

    pub fn recompute_effective(&mut self) {
        for slot in 0..N_LINEUP {
            let weight = if self.active[slot] { self.fatigue[slot] } else { 0.0 };
            self.eff_shooting[slot] = self.base_shooting[slot] * weight;
            self.eff_passing[slot] = self.base_passing[slot] * weight;
            self.eff_tackling[slot] = self.base_tackling[slot] * weight;
        }
    }

    pub fn sum_eff_shooting(&self) -> f64 {
        self.eff_shooting.iter().map(|v| f64::from(*v)).sum()
    }

    pub fn sum_eff_passing(&self) -> f64 {
        self.eff_passing.iter().map(|v| f64::from(*v)).sum()
    }

    pub fn sum_eff_tackling(&self) -> f64 {
        self.eff_tackling.iter().map(|v| f64::from(*v)).sum()
    }

    pub fn sum_active_aggression(&self) -> f64 {
        (0..N_LINEUP)
            .filter(|s| self.active[*s])
            .map(|s| f64::from(self.aggression[s]))
            .sum()
    }

    /// Turn a slot into the goalkeeper: keeper position, no outfield
    /// contributions, no fatigue loss.
    pub fn promote_to_goalkeeper(&mut self, slot: usize) {
        self.positions[slot] = Position::goalkeeper();
        self.base_shooting[slot] = 0.0;
        self.base_passing[slot] = 0.0;
        self.base_tackling[slot] = 0.0;
        self.fatigue_deduction[slot] = 0.0;
        self.goalkeeper = slot;
    }
}
