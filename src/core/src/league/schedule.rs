/// One week of fixtures: `(home_idx, away_idx)` pairs into the team vector.
pub type WeekFixtures = Vec<(usize, usize)>;

/// Circle-method double round robin. Odd team counts get a ghost team
/// whose pairings are dropped, giving each real team one bye per round.
/// The second half repeats the first with home and away swapped.
pub fn build_schedule(n_teams: usize) -> Vec<WeekFixtures> {
    if n_teams < 2 {
        return Vec::new();
    }

    let ghost = n_teams % 2 == 1;
    let ring_size = if ghost { n_teams + 1 } else { n_teams };

    let mut ring: Vec<usize> = (0..ring_size).collect();
    let mut weeks: Vec<WeekFixtures> = Vec::with_capacity(2 * (ring_size - 1));

    for _ in 0..ring_size - 1 {
        let mut week = Vec::with_capacity(ring_size / 2);

        for pair in 0..ring_size / 2 {
            let home = ring[pair];
            let away = ring[ring_size - 1 - pair];
            if home >= n_teams || away >= n_teams {
                continue;
            }
            week.push((home, away));
        }

        weeks.push(week);
        rotate(&mut ring);
    }

    let reverse: Vec<WeekFixtures> = weeks
        .iter()
        .map(|week| week.iter().map(|&(home, away)| (away, home)).collect())
        .collect();
    weeks.extend(reverse);

    weeks
}

/// Keep the first team fixed and rotate the rest one step clockwise.
fn rotate(ring: &mut [usize]) {
    let last = ring[ring.len() - 1];
    for idx in (2..ring.len()).rev() {
        ring[idx] = ring[idx - 1];
    }
    ring[1] = last;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn pair_counts(weeks: &[WeekFixtures]) -> HashMap<(usize, usize), usize> {
        let mut counts = HashMap::new();
        for week in weeks {
            for &fixture in week {
                *counts.entry(fixture).or_insert(0) += 1;
            }
        }
        counts
    }

    #[test]
    fn every_pair_meets_twice_once_at_each_ground() {
        for n_teams in [2, 4, 16, 20] {
            let weeks = build_schedule(n_teams);
            let counts = pair_counts(&weeks);

            for home in 0..n_teams {
                for away in 0..n_teams {
                    if home == away {
                        assert!(!counts.contains_key(&(home, away)));
                    } else {
                        assert_eq!(
                            Some(&1),
                            counts.get(&(home, away)),
                            "{} teams: fixture {}v{}",
                            n_teams,
                            home,
                            away
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn each_team_appears_once_per_week() {
        for n_teams in [4, 20] {
            let weeks = build_schedule(n_teams);
            assert_eq!(2 * (n_teams - 1), weeks.len());

            for (num, week) in weeks.iter().enumerate() {
                let mut seen = vec![0; n_teams];
                for &(home, away) in week {
                    seen[home] += 1;
                    seen[away] += 1;
                }
                for (team, appearances) in seen.iter().enumerate() {
                    assert_eq!(
                        1, *appearances,
                        "team {} appears {} times in week {}",
                        team, appearances, num
                    );
                }
            }
        }
    }

    #[test]
    fn odd_team_count_gives_byes() {
        let n_teams = 5;
        let weeks = build_schedule(n_teams);

        // A ghost round robin spans six slots: ten weeks total.
        assert_eq!(10, weeks.len());

        for week in &weeks {
            assert_eq!(2, week.len());
        }

        let counts = pair_counts(&weeks);
        for home in 0..n_teams {
            for away in 0..n_teams {
                if home != away {
                    assert_eq!(Some(&1), counts.get(&(home, away)));
                }
            }
        }
    }

    #[test]
    fn degenerate_sizes() {
        assert!(build_schedule(0).is_empty());
        assert!(build_schedule(1).is_empty());

        let two = build_schedule(2);
        assert_eq!(vec![vec![(0, 1)], vec![(1, 0)]], two);
    }
}
