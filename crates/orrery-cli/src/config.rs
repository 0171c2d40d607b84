//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without
//! recompiling.

use serde::Deserialize;
use std::path::Path;

use orrery_core::{cycle_constants, EngineConfig, DEFAULT_DECAY_FACTOR};

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Simulation parameters
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Cycles to run per invocation
    pub cycles: u64,
    /// Random seed; omit for entropy-seeded runs
    pub seed: Option<u64>,
    pub starting_energy: f64,
    pub decay_factor: f64,
    pub min_cost: u32,
    pub max_cost: u32,
    pub reinforce_weight: f64,
}

/// File locations
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Session state snapshot
    pub state: String,
    /// Genesis topology document
    pub genesis: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cycles: 1,
            seed: None,
            starting_energy: cycle_constants::DEFAULT_STARTING_ENERGY,
            decay_factor: DEFAULT_DECAY_FACTOR,
            min_cost: cycle_constants::DEFAULT_MIN_COST,
            max_cost: cycle_constants::DEFAULT_MAX_COST,
            reinforce_weight: cycle_constants::DEFAULT_REINFORCE_WEIGHT,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            state: "data/state.json".to_string(),
            genesis: "data/genesis.json".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            paths: PathsConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::IoError)?;
        toml::from_str(&content).map_err(ConfigError::TomlError)
    }

    /// Load configuration from the given path, or use defaults if not found
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path.as_ref()).unwrap_or_else(|e| {
            tracing::warn!("could not load {}: {}. Using defaults.", path.as_ref().display(), e);
            Self::default()
        })
    }

    /// The engine configuration these tuning parameters describe.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            starting_energy: self.simulation.starting_energy,
            decay_factor: self.simulation.decay_factor,
            min_cost: self.simulation.min_cost,
            max_cost: self.simulation.max_cost,
            reinforce_weight: self.simulation.reinforce_weight,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file
    IoError(std::io::Error),
    /// Error parsing TOML config
    TomlError(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::TomlError(e) => Some(e),
        }
    }
}
