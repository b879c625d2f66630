use crate::club::player::skills::{PlayerAbilities, PlayerSkills};
use crate::club::player::statistics::{FITNESS_MAX, PlayerStatistics};

/// Sentinel name used to pad short rosters up to the fixed size.
pub const PLACEHOLDER_NAME: &str = "PLACEHOLDER";

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Player {
    pub name: String,
    pub age: i16,
    pub nationality: String,
    /// Up to four characters from `R`, `L`, `C` (and padding spaces).
    pub preferred_side: String,
    pub skills: PlayerSkills,
    pub abilities: PlayerAbilities,
    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn new(name: String, age: i16, nationality: String, preferred_side: String) -> Self {
        Player {
            name,
            age,
            nationality,
            preferred_side,
            skills: PlayerSkills::default(),
            abilities: PlayerAbilities::default(),
            statistics: PlayerStatistics::default(),
        }
    }

    /// Roster filler: zero ratings, default abilities, full fitness.
    /// Never competitive in lineup selection because every ranking score
    /// multiplies through its all-zero skills.
    pub fn placeholder() -> Self {
        Player {
            name: String::from(PLACEHOLDER_NAME),
            age: 0,
            nationality: String::new(),
            preferred_side: String::new(),
            skills: PlayerSkills::default(),
            abilities: PlayerAbilities::default(),
            statistics: PlayerStatistics {
                fitness: FITNESS_MAX,
                ..PlayerStatistics::default()
            },
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == PLACEHOLDER_NAME
    }

    /// Fitness usable for selection: zero while injured or suspended.
    pub fn available_fitness(&self) -> f32 {
        if self.statistics.injury > 0 || self.statistics.suspension > 0 {
            return 0.0;
        }

        self.statistics.fitness as f32
    }

    /// Whether the player is comfortable on the given side of the pitch.
    pub fn prefers_side(&self, side: char) -> bool {
        self.preferred_side.contains(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_inert() {
        let player = Player::placeholder();

        assert!(player.is_placeholder());
        assert_eq!(0, player.skills.shooting);
        assert_eq!(300, player.abilities.keeping);
        assert_eq!(100, player.statistics.fitness);
        assert_eq!(100.0, player.available_fitness());
    }

    #[test]
    fn injury_and_suspension_zero_available_fitness() {
        let mut player = Player::new(
            String::from("Keane"),
            28,
            String::from("irl"),
            String::from("C"),
        );
        assert_eq!(100.0, player.available_fitness());

        player.statistics.injury = 2;
        assert_eq!(0.0, player.available_fitness());

        player.statistics.injury = 0;
        player.statistics.suspension = 1;
        assert_eq!(0.0, player.available_fitness());
    }

    #[test]
    fn side_preference_is_substring_based() {
        let player = Player::new(
            String::from("Giggs"),
            30,
            String::from("wal"),
            String::from("RL"),
        );

        assert!(player.prefers_side('R'));
        assert!(player.prefers_side('L'));
        assert!(!player.prefers_side('C'));
    }
}
