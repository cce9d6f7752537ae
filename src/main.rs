//! bouncerun headless runner.
//!
//! Builds the demo scene, drives the player with an [`Autopilot`] and runs
//! a fixed number of ticks. The simulation is written with:
//! - **bevy_ecs** for the entity-component-system architecture
//! - **configparser** for the INI game configuration
//! - **log / env_logger** for diagnostics (`RUST_LOG=debug` traces every
//!   spawn, destroy and bounce)
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --ticks 900 --json
//! cargo run --release -- --autoplay 42
//! ```

use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};

use bouncerun::autopilot::Autopilot;
use bouncerun::game;
use bouncerun::resources::gameconfig::GameConfig;
use bouncerun::resources::input::InputState;
use bouncerun::snapshot::WorldSnapshot;

/// Bounce, sprint and pick up: a headless platformer sandbox.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// INI configuration file. Missing file or keys fall back to defaults.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Number of ticks to simulate (overrides `[sim] ticks`).
    #[arg(long)]
    ticks: Option<u32>,

    /// Tick length in seconds (overrides `[sim] dt`).
    #[arg(long)]
    dt: Option<f32>,

    /// Drive the player with random input instead of the scripted run.
    /// Optionally provide a seed (default: 0).
    #[arg(long, value_name = "SEED")]
    autoplay: Option<Option<u64>>,

    /// Print the final world snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config.clone());
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(ticks) = cli.ticks {
        config.sim.ticks = ticks;
    }
    if let Some(dt) = cli.dt {
        config.sim.dt = dt;
    }

    // Early-exit: persist the configuration and quit
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    let ticks = config.sim.ticks;
    let dt = config.sim.dt;
    let mut pilot = match cli.autoplay {
        Some(seed) => Autopilot::random(seed.unwrap_or(0)),
        None => Autopilot::Scripted,
    };

    let mut world = game::init_world(config);
    if game::spawn_demo_scene(&mut world).is_none() {
        error!("Demo scene needs the enemy and pickup prefabs");
        std::process::exit(1);
    }
    let mut schedule = game::build_tick_schedule();

    info!("Running {} ticks of {}s", ticks, dt);
    for tick in 0..ticks {
        pilot.drive(tick, &mut world.resource_mut::<InputState>());
        game::step(&mut world, &mut schedule, dt);
    }

    let snapshot = WorldSnapshot::capture(&mut world);
    info!(
        "Finished after {:.2}s: {} tagged entities",
        snapshot.elapsed,
        snapshot.entities.len()
    );
    if cli.json {
        match snapshot.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
