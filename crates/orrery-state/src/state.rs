//! Session State
//!
//! The durable state of a simulation session: energy level, trust map,
//! regret lattice, and cycle counter.
//!
//! This is the exact record the persistence collaborator reads and writes,
//! so the field layout matches the on-disk JSON verbatim.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Energy level a fresh session starts with.
pub const DEFAULT_STARTING_ENERGY: f64 = 100.0;

/// Complete persistable state of one simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Remaining energy budget
    #[serde(default = "default_energy")]
    pub energy: f64,
    /// Accumulated trust weight per path key
    #[serde(default)]
    pub trustmap: HashMap<String, f64>,
    /// Ordered (path key, reason) regret entries
    #[serde(default)]
    pub regret_lattice: Vec<(String, String)>,
    /// Number of completed cycles
    #[serde(default)]
    pub cycle_count: u64,
}

fn default_energy() -> f64 {
    DEFAULT_STARTING_ENERGY
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            energy: DEFAULT_STARTING_ENERGY,
            trustmap: HashMap::new(),
            regret_lattice: Vec::new(),
            cycle_count: 0,
        }
    }
}

impl SessionState {
    /// Creates a fresh session state with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the state to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the state to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a state from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
