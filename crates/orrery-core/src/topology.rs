//! Hierarchical Topology
//!
//! The immutable orbit -> planet -> moon hierarchy and its uniform sampler.
//!
//! Orbit sampling is uniform over planets, not over distinct orbit names: an
//! orbit shared by N planets is N times more likely to be drawn. That bias
//! is intentional "pick a planet first" semantics.
//!
//! Sampling never mutates the topology, so one `Arc<Topology>` can be shared
//! read-only across independent sessions.

use std::collections::BTreeMap;

use orrery_state::GenesisMap;

use crate::error::EmptyTopologyError;
use crate::rng::RandomSource;

/// Sentinel moon identifier for planets with no moons.
pub const NO_MOON: &str = "none";

/// Immutable orbit/planet/moon hierarchy built from a genesis map.
#[derive(Debug, Clone)]
pub struct Topology {
    core: String,
    /// Planet -> orbit. BTreeMap keeps sampling order deterministic.
    orbits: BTreeMap<String, String>,
    /// Planet -> ordered moons. Planets without an entry have no moons.
    moons: BTreeMap<String, Vec<String>>,
}

impl Topology {
    /// Builds a topology from a genesis map.
    ///
    /// Planets referenced in the orbit map but missing from the moon map get
    /// an empty moon list.
    pub fn from_genesis(genesis: GenesisMap) -> Self {
        let GenesisMap {
            core,
            orbits,
            mut planets,
        } = genesis;

        for planet in orbits.keys() {
            planets.entry(planet.clone()).or_default();
        }

        Self {
            core,
            orbits,
            moons: planets,
        }
    }

    /// Name of the central body.
    pub fn core(&self) -> &str {
        &self.core
    }

    /// Number of planets.
    pub fn planet_count(&self) -> usize {
        self.orbits.len()
    }

    /// The orbit a planet belongs to, if the planet exists.
    pub fn orbit_of(&self, planet: &str) -> Option<&str> {
        self.orbits.get(planet).map(String::as_str)
    }

    /// The moons of a planet. Unknown planets have no moons.
    pub fn moons_of(&self, planet: &str) -> &[String] {
        self.moons.get(planet).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Draws an orbit uniformly over the multiset of orbit values attached
    /// to all planets.
    pub fn sample_orbit(&self, rng: &mut dyn RandomSource) -> Result<&str, EmptyTopologyError> {
        let orbits: Vec<&str> = self.orbits.values().map(String::as_str).collect();
        if orbits.is_empty() {
            return Err(EmptyTopologyError::new("no planets configured"));
        }
        Ok(orbits[rng.pick_index(orbits.len())])
    }

    /// Draws a planet uniformly among planets belonging to `orbit`.
    ///
    /// Cannot fail for an orbit obtained from [`sample_orbit`], but unknown
    /// orbits are still rejected.
    ///
    /// [`sample_orbit`]: Topology::sample_orbit
    pub fn sample_planet(
        &self,
        rng: &mut dyn RandomSource,
        orbit: &str,
    ) -> Result<&str, EmptyTopologyError> {
        let matching: Vec<&str> = self
            .orbits
            .iter()
            .filter(|(_, o)| o.as_str() == orbit)
            .map(|(p, _)| p.as_str())
            .collect();
        if matching.is_empty() {
            return Err(EmptyTopologyError::new(format!(
                "no planets in orbit '{}'",
                orbit
            )));
        }
        Ok(matching[rng.pick_index(matching.len())])
    }

    /// Draws a moon uniformly among a planet's moons, or [`NO_MOON`] when
    /// the planet has none. Never fails.
    pub fn sample_moon(&self, rng: &mut dyn RandomSource, planet: &str) -> &str {
        let moons = self.moons_of(planet);
        if moons.is_empty() {
            return NO_MOON;
        }
        &moons[rng.pick_index(moons.len())]
    }
}
