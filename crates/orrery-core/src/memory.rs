//! Adaptive Memory
//!
//! Two structures track how cycles went: a trust map accumulating decaying
//! reinforcement per path key, and an append-only regret lattice of
//! (path key, reason) pairs for cycles that could not pay their cost.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::InvalidArgumentError;

/// Trust entries falling strictly below this weight after a decay pass are
/// removed rather than kept at near-zero.
pub const PRUNE_THRESHOLD: f64 = 0.1;

/// Decay factor applied after every cycle.
pub const DEFAULT_DECAY_FACTOR: f64 = 0.95;

/// Immutable copy of the memory state for persistence or reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub trustmap: HashMap<String, f64>,
    pub regret_lattice: Vec<(String, String)>,
}

/// Reinforcement memory with time decay and a regret log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdaptiveMemory {
    trustmap: HashMap<String, f64>,
    regret_lattice: Vec<(String, String)>,
}

impl AdaptiveMemory {
    /// Creates an empty memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a memory from previously persisted parts.
    pub fn from_parts(
        trustmap: HashMap<String, f64>,
        regret_lattice: Vec<(String, String)>,
    ) -> Self {
        Self {
            trustmap,
            regret_lattice,
        }
    }

    /// Adds `weight` to the trust entry for `key`, creating it at zero
    /// first if absent.
    pub fn reinforce(&mut self, key: &str, weight: f64) {
        let entry = self.trustmap.entry(key.to_string()).or_insert(0.0);
        *entry += weight;
        tracing::debug!(key, weight, total = *entry, "trustmap updated");
    }

    /// Appends a (key, reason) pair to the regret lattice. Never fails,
    /// never deduplicates.
    pub fn log_regret(&mut self, key: &str, reason: &str) {
        tracing::debug!(key, reason, "regret logged");
        self.regret_lattice
            .push((key.to_string(), reason.to_string()));
    }

    /// Multiplies every trust weight by `factor` and prunes entries that
    /// fall strictly below [`PRUNE_THRESHOLD`].
    ///
    /// `factor` must lie in the open interval (0, 1); anything else is a
    /// configuration error.
    pub fn decay(&mut self, factor: f64) -> Result<(), InvalidArgumentError> {
        if !(factor > 0.0 && factor < 1.0) {
            return Err(InvalidArgumentError::new(format!(
                "decay factor must be in (0, 1), got {}",
                factor
            )));
        }
        for weight in self.trustmap.values_mut() {
            *weight *= factor;
        }
        self.trustmap.retain(|_, weight| *weight >= PRUNE_THRESHOLD);
        Ok(())
    }

    /// Returns owned copies of the trust map and regret lattice.
    pub fn snapshot(&self) -> MemorySnapshot {
        MemorySnapshot {
            trustmap: self.trustmap.clone(),
            regret_lattice: self.regret_lattice.clone(),
        }
    }

    /// Current trust weight for a key, if present.
    pub fn trust_weight(&self, key: &str) -> Option<f64> {
        self.trustmap.get(key).copied()
    }

    /// The trust map.
    pub fn trustmap(&self) -> &HashMap<String, f64> {
        &self.trustmap
    }

    /// The regret lattice, in occurrence order.
    pub fn regret_lattice(&self) -> &[(String, String)] {
        &self.regret_lattice
    }
}
