//! Orrery Pulse Engine CLI
//!
//! Host layer around the cycle engine: loads tuning parameters, the genesis
//! topology, and the saved session state, runs a batch of cycles, reports
//! each record, and persists the state back out.

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use orrery_core::{CycleEngine, RandomSource, SeededSource, Topology};
use orrery_state::{GenesisMap, SessionState};

mod config;
mod glyphs;
mod store;

use config::{Config, DEFAULT_TUNING_PATH};
use glyphs::GlyphRegistry;
use store::StateStore;

/// URI of the embedded fallback genesis map.
const BUILTIN_GENESIS_URI: &str = "genesis://primus";

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "orrery")]
#[command(about = "A stochastic orbit/planet/moon pulse simulation")]
struct Args {
    /// Random seed for reproducibility (overrides tuning.toml)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of cycles to run (overrides tuning.toml)
    #[arg(long)]
    cycles: Option<u64>,

    /// Tuning file path
    #[arg(long, default_value = DEFAULT_TUNING_PATH)]
    tuning: String,

    /// Session state path (overrides tuning.toml)
    #[arg(long)]
    state_path: Option<String>,

    /// Genesis map path (overrides tuning.toml)
    #[arg(long)]
    genesis_path: Option<String>,

    /// Discard any saved session state and start fresh
    #[arg(long)]
    fresh: bool,
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` takes priority; the default level is "info".
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init()
        .ok();
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default(&args.tuning);
    let cycles = args.cycles.unwrap_or(config.simulation.cycles);
    let seed = args.seed.or(config.simulation.seed);
    let state_path = args.state_path.unwrap_or_else(|| config.paths.state.clone());
    let genesis_path = args
        .genesis_path
        .unwrap_or_else(|| config.paths.genesis.clone());

    println!("Orrery Pulse Engine");
    println!("===================");
    match seed {
        Some(s) => println!("Seed: {}", s),
        None => println!("Seed: entropy"),
    }
    println!("Cycles: {}", cycles);
    println!();

    let genesis = load_genesis(&genesis_path)?;
    println!(
        "Core: {} ({} planets)",
        genesis.core,
        genesis.planet_count()
    );
    let topology = Arc::new(Topology::from_genesis(genesis));

    let store = StateStore::new(&state_path);
    let state = if args.fresh {
        SessionState::default()
    } else {
        store.load()?
    };
    println!(
        "Resuming at cycle {} with {:.1} energy",
        state.cycle_count, state.energy
    );
    println!();

    let rng: Box<dyn RandomSource> = match seed {
        Some(s) => Box::new(SeededSource::seeded(s)),
        None => Box::new(SeededSource::from_entropy()),
    };
    let mut engine = CycleEngine::from_state(topology, config.engine_config(), rng, state)?;

    let records = engine.run_n(cycles)?;
    for record in &records {
        println!(
            "[Cycle {:>4}] {} -> {} -> {} | cost {:>2} | energy {:>6.1}",
            record.cycle,
            record.orbit,
            record.planet,
            record.moon,
            record.cost,
            record.remaining_energy
        );
    }

    let final_state = engine.export_state();
    store.save(&final_state)?;

    println!();
    println!(
        "Session complete. {} cycles total, {:.1} energy remaining.",
        final_state.cycle_count, final_state.energy
    );
    println!(
        "Trust entries: {}, regret entries: {}.",
        final_state.trustmap.len(),
        final_state.regret_lattice.len()
    );
    println!("State saved to {}.", store.path().display());

    Ok(())
}

/// Loads the genesis map from disk, falling back to the embedded map when
/// the file does not exist.
fn load_genesis(path: &str) -> Result<GenesisMap, Box<dyn std::error::Error>> {
    if Path::new(path).exists() {
        let raw = std::fs::read_to_string(path)?;
        return Ok(GenesisMap::from_json(&raw)?);
    }
    tracing::info!(path, "genesis file not found, using built-in map");
    let registry = builtin_genesis_registry();
    Ok(registry.load(BUILTIN_GENESIS_URI).unwrap_or_default())
}

/// Registry of embedded genesis maps.
fn builtin_genesis_registry() -> GlyphRegistry<GenesisMap> {
    let mut registry = GlyphRegistry::new();
    registry.register(BUILTIN_GENESIS_URI, || {
        GenesisMap::new()
            .with_planet("Aurelia", "Inner Ring", &["Luma", "Kess"])
            .with_planet("Verdantis", "Inner Ring", &["Thorn"])
            .with_planet("Cryon", "Outer Ring", &["Vex", "Orin", "Tal"])
            .with_planet("Pyralis", "Outer Ring", &[])
            .with_planet("Umbra", "Drift", &["Noct"])
    });
    registry
}
