//! Cycle Records
//!
//! Serialization struct for the result of one simulation cycle, emitted by
//! the engine and reported verbatim by the caller (CLI, log file, API).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of a single completed cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Cycle counter value after this cycle completed
    pub cycle: u64,
    /// Sampled orbit identifier
    pub orbit: String,
    /// Sampled planet identifier
    pub planet: String,
    /// Sampled moon identifier, or "none" for a moonless planet
    pub moon: String,
    /// Energy cost drawn for this cycle
    pub cost: u32,
    /// Energy remaining after the spend attempt
    pub remaining_energy: f64,
    /// Trust map snapshot taken after the post-cycle decay
    pub trustmap: HashMap<String, f64>,
}

impl CycleRecord {
    /// The sampled path as an "orbit/planet/moon" key.
    pub fn path_key(&self) -> String {
        format!("{}/{}/{}", self.orbit, self.planet, self.moon)
    }

    /// Serializes the record to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
