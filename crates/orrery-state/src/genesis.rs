//! Genesis Map
//!
//! The immutable topology document a session is created from: which orbit
//! each planet belongs to, and which moons each planet carries.
//!
//! Ordered maps keep iteration deterministic, so a seeded random source
//! always walks the topology in the same order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Genesis document describing the orbit/planet/moon hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenesisMap {
    /// Name of the central body
    #[serde(default = "default_core")]
    pub core: String,
    /// Planet identifier -> orbit identifier (many planets share one orbit)
    #[serde(default)]
    pub orbits: BTreeMap<String, String>,
    /// Planet identifier -> ordered moon identifiers (may be empty)
    #[serde(default)]
    pub planets: BTreeMap<String, Vec<String>>,
}

fn default_core() -> String {
    "Primus".to_string()
}

impl GenesisMap {
    /// Creates an empty genesis map with the default core name.
    pub fn new() -> Self {
        Self {
            core: default_core(),
            orbits: BTreeMap::new(),
            planets: BTreeMap::new(),
        }
    }

    /// Adds a planet to an orbit, with its moons.
    pub fn with_planet(
        mut self,
        planet: impl Into<String>,
        orbit: impl Into<String>,
        moons: &[&str],
    ) -> Self {
        let planet = planet.into();
        self.orbits.insert(planet.clone(), orbit.into());
        self.planets
            .insert(planet, moons.iter().map(|m| m.to_string()).collect());
        self
    }

    /// Number of planets in the map.
    pub fn planet_count(&self) -> usize {
        self.orbits.len()
    }

    /// Serializes the map to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a map from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
