use core::utils::TimeEstimation;
use core::{Config, League, RatingSearch, SearchParams};
use database::{DatabaseLoader, save_rosters, seed_data_dir, write_table};
use env_logger::Env;
use log::info;
use std::env;
use std::path::PathBuf;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let data_dir = PathBuf::from(env::var("DATA_DIR").unwrap_or_else(|_| String::from("data")));
    let n_teams: usize = env_number("TEAMS", 20);
    let seed: u64 = env_number("SEED", 0);
    let mode = env::var("MODE").unwrap_or_else(|_| String::from("SEASON"));

    seed_data_dir(&data_dir, n_teams, seed)?;

    let (loaded, estimated) = TimeEstimation::estimate(|| DatabaseLoader::load(&data_dir, n_teams));
    let loaded = loaded?;
    info!("database loaded: {} ms", estimated);

    let config = Config::default();
    let tactics = loaded.tactics;
    let ctx = config.context(&tactics);

    let mut league = League::new(loaded.team_names, loaded.rosters, &ctx, seed);

    if mode == "SEARCH" {
        // Ground truth: one full season with the loaded ratings.
        league.play_season(&ctx);

        let params = SearchParams {
            steps: env_number("NSTEPS", 100),
            replicas: env_number("NREPS", 2),
            ..SearchParams::default()
        };

        info!(
            "rating search: {} steps, {} replicas",
            params.steps, params.replicas
        );

        let mut search = RatingSearch::new(league, params, seed.wrapping_add(1));
        match env::var("INIT").as_deref() {
            Ok("RANDOM") => search.init_random(),
            _ => search.init_percentile(),
        }

        let (best_rmse, estimated) = TimeEstimation::estimate(|| search.run(&ctx));
        info!("search done: best rmse {:.3} in {} ms", best_rmse, estimated);

        let fitted_dir = data_dir.join("fitted");
        std::fs::create_dir_all(&fitted_dir)?;
        let fitted = &search.best_replicas()[0];
        save_rosters(&fitted_dir, &fitted.team_names, &fitted.rosters)?;
        info!("fitted rosters written to {}", fitted_dir.display());

        return Ok(());
    }

    let (_, estimated) = TimeEstimation::estimate(|| league.play_season(&ctx));
    info!("season played: {} ms", estimated);

    write_table(&data_dir.join("table.txt"), &league.table)?;
    save_rosters(&data_dir, &league.team_names, &league.rosters)?;

    print!("{}", database::writers::format_table(&league.table));

    Ok(())
}

fn env_number<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
