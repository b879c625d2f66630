use core::club::{Player, PlayerSkills, Roster};
use core::utils::mix_seed;
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

const STATIC_NAMES_JSON: &str = include_str!("../data/names.json");

/// Generated squad shape: keepers, defenders, midfielders, forwards.
const SQUAD_SHAPE: [(Role, usize); 4] = [
    (Role::Keeper, 3),
    (Role::Defender, 8),
    (Role::Midfielder, 9),
    (Role::Forward, 6),
];

const NAME_WIDTH: usize = 13;

#[derive(Copy, Clone)]
enum Role {
    Keeper,
    Defender,
    Midfielder,
    Forward,
}

#[derive(Deserialize)]
struct NamePools {
    first: Vec<String>,
    last: Vec<String>,
    nations: Vec<String>,
}

pub struct RosterGenerator;

impl RosterGenerator {
    /// Deterministically generate a default roster for one team. The same
    /// seed and team index always produce the same squad.
    pub fn generate(team_index: usize, seed: u64) -> Roster {
        let pools: NamePools =
            serde_json::from_str(STATIC_NAMES_JSON).expect("packaged name pools");

        let mut rng = StdRng::seed_from_u64(mix_seed(seed, 2, team_index as u64));
        let mut players = Vec::new();

        for (role, count) in SQUAD_SHAPE {
            for _ in 0..count {
                players.push(Self::generate_player(role, &pools, &mut rng));
            }
        }

        Roster::new(players)
    }

    fn generate_player(role: Role, pools: &NamePools, rng: &mut StdRng) -> Player {
        let first = &pools.first[rng.random_range(0..pools.first.len())];
        let last = &pools.last[rng.random_range(0..pools.last.len())];
        let mut name = format!("{} {}", first, last);
        name.truncate(NAME_WIDTH);

        let nationality = pools.nations[rng.random_range(0..pools.nations.len())].clone();
        let age = rng.random_range(17..=34);

        let preferred_side = match role {
            Role::Keeper => String::from("C"),
            _ => {
                let sides = ["C", "C", "C", "R", "L", "RC", "LC", "RL"];
                String::from(sides[rng.random_range(0..sides.len())])
            }
        };

        let primary = rng.random_range(45..=85);
        let secondary = rng.random_range(25..=60);

        let mut player = Player::new(name, age, nationality, preferred_side);
        let mut skills = PlayerSkills {
            shot_stopping: rng.random_range(5..=30),
            tackling: rng.random_range(15..=50),
            passing: rng.random_range(15..=50),
            shooting: rng.random_range(10..=45),
            stamina: rng.random_range(35..=85),
            aggression: rng.random_range(10..=60),
        };

        match role {
            Role::Keeper => {
                skills.shot_stopping = primary;
                skills.shooting = rng.random_range(3..=15);
            }
            Role::Defender => {
                skills.tackling = primary;
                skills.passing = secondary;
            }
            Role::Midfielder => {
                skills.passing = primary;
                skills.shooting = secondary;
            }
            Role::Forward => {
                skills.shooting = primary;
                skills.passing = secondary;
            }
        }

        player.skills = skills;
        player
    }
}
