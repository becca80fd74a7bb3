use std::sync::mpsc::channel;

use tracing::{info, warn};

use crate::error::Result;
use crate::init_config::SimConfig;
use crate::simulation::Simulation;

pub mod command_loop;
pub mod simulation_loop;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }
}

/// Build the simulation from the configuration file.
pub fn build_simulation(config: &SimConfig) -> Result<Simulation> {
    let mut simulation = Simulation::new(config);
    simulation.setup_random_particles(config.initial_particles)?;
    if config.boundaries_active {
        simulation.toggle_boundaries();
    }
    Ok(simulation)
}

pub fn run() -> Result<()> {
    init_tracing();

    let config = SimConfig::load_default().unwrap_or_else(|e| {
        warn!(error = %e, "invalid configuration, using defaults");
        SimConfig::default()
    });
    info!(?config, "starting");

    let simulation = build_simulation(&config)?;
    let period = crate::config::tick_interval(config.tick_hz);

    let (tx, rx) = channel();
    let sim_thread = std::thread::spawn(move || {
        simulation_loop::run_simulation_loop(rx, simulation, period);
    });

    println!("{}", crate::commands::HELP);
    command_loop::run_command_loop(std::io::stdin().lock(), &tx)?;
    drop(tx);

    if sim_thread.join().is_err() {
        warn!("simulation thread panicked");
    }
    info!("stopped");
    Ok(())
}
