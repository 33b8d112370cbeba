use std::env;
use std::error::Error;
use std::str::FromStr;

use colored::Colorize;
use csv::Writer;
use dotenv::dotenv;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{info, span, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{CONVERGENCE_CSV_PATH, COORD_RANGE, SEED, WAYPOINT_COUNT};
use crate::config::AcoConfig;
use crate::domain::solution::SolveReport;
use crate::fixtures::data_generator::generate_random_waypoints;
use crate::setup::init::{load_waypoints, setup};
use crate::solver::ant_colony::colony::Colony;

/// Initialize tracing and environment
fn init_tracing_and_env() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .with_writer(std::io::stderr)
                .pretty(),
        )
        .init();

    dotenv().ok();
    Ok(())
}

/// Parse an optional environment variable; a present-but-malformed value is a
/// configuration error.
fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>, Box<dyn Error>> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| format!("Invalid value for {}: {}", key, raw).into()),
        Err(_) => Ok(None),
    }
}

/// Build the hyperparameters from ACO_* environment variables, falling back
/// to the documented defaults.
fn load_config_from_env() -> Result<AcoConfig, Box<dyn Error>> {
    let defaults = AcoConfig::default();
    Ok(AcoConfig {
        ants: env_parse("ACO_ANTS")?.unwrap_or(defaults.ants),
        iterations: env_parse("ACO_ITERATIONS")?.unwrap_or(defaults.iterations),
        alpha: env_parse("ACO_ALPHA")?.unwrap_or(defaults.alpha),
        beta: env_parse("ACO_BETA")?.unwrap_or(defaults.beta),
        rho: env_parse("ACO_RHO")?.unwrap_or(defaults.rho),
        q: env_parse("ACO_Q")?.unwrap_or(defaults.q),
    })
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing_and_env()?;

    let config = load_config_from_env()?;

    let waypoints = match env::var("ACO_INPUT") {
        Ok(path) => load_waypoints(&path)?,
        // Default random waypoints if no input file is provided
        Err(_) => generate_random_waypoints(WAYPOINT_COUNT, COORD_RANGE, SEED),
    };

    if waypoints.is_empty() {
        return Err("No waypoints provided".into());
    }

    info!(
        "Starting ACO solver with {} waypoints, {} ants, {} iterations",
        waypoints.len(),
        config.ants,
        config.iterations
    );

    let instance = {
        let span = span!(Level::INFO, "setup");
        let _guard = span.enter();
        setup(waypoints)
    };

    let rng = match env_parse::<u64>("ACO_SEED")? {
        Some(seed) => {
            info!("Using fixed RNG seed {}", seed);
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    let mut colony = Colony::new(&instance, config, rng)?;

    let best = {
        let solve_span = span!(Level::INFO, "solve");
        let _guard = solve_span.enter();
        colony.solve()
    };

    let report = SolveReport::from_tour(&best, &instance.waypoints);
    println!("{}", serde_json::to_string(&report)?);
    eprintln!(
        "{}",
        format_args!("Best tour length: {:.2}", best.length)
            .to_string()
            .green()
    );

    save_convergence_csv(colony.best_updates(), CONVERGENCE_CSV_PATH)?;

    Ok(())
}

fn save_convergence_csv(
    best_updates: &[(usize, f64)],
    filename: &str,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["iteration", "new_best_length"])?;

    for (iteration, length) in best_updates {
        wtr.write_record([iteration.to_string(), length.to_string()])?;
    }

    wtr.flush()?;
    Ok(())
}
