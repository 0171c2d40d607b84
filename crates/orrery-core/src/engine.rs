//! Cycle Engine
//!
//! Orchestrates one simulation cycle: sample an orbit/planet/moon path, draw
//! a cost, attempt to pay it from the energy budget, reinforce or regret the
//! path, decay the trust map, and advance the cycle counter.
//!
//! The engine exclusively owns its budget and memory for the lifetime of a
//! session; the topology is shared read-only via `Arc`.

use std::sync::Arc;

use orrery_state::{CycleRecord, SessionState};

use crate::energy::EnergyBudget;
use crate::error::{EmptyTopologyError, InvalidArgumentError};
use crate::memory::{AdaptiveMemory, DEFAULT_DECAY_FACTOR};
use crate::rng::RandomSource;
use crate::topology::Topology;

/// Constants governing the default cycle behavior
pub mod cycle_constants {
    /// Energy a fresh session starts with
    pub const DEFAULT_STARTING_ENERGY: f64 = 100.0;
    /// Inclusive lower bound of the per-cycle cost draw
    pub const DEFAULT_MIN_COST: u32 = 1;
    /// Inclusive upper bound of the per-cycle cost draw
    pub const DEFAULT_MAX_COST: u32 = 10;
    /// Trust weight added on a successful spend
    pub const DEFAULT_REINFORCE_WEIGHT: f64 = 1.0;
    /// Reason recorded when a cycle cannot pay its cost
    pub const REGRET_INSUFFICIENT_ENERGY: &str = "Insufficient energy";
}

/// Tunable parameters for a cycle engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Energy level for fresh sessions
    pub starting_energy: f64,
    /// Trust decay factor applied after every cycle, in (0, 1)
    pub decay_factor: f64,
    /// Inclusive cost range drawn each cycle
    pub min_cost: u32,
    pub max_cost: u32,
    /// Trust weight added on each successful spend
    pub reinforce_weight: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            starting_energy: cycle_constants::DEFAULT_STARTING_ENERGY,
            decay_factor: DEFAULT_DECAY_FACTOR,
            min_cost: cycle_constants::DEFAULT_MIN_COST,
            max_cost: cycle_constants::DEFAULT_MAX_COST,
            reinforce_weight: cycle_constants::DEFAULT_REINFORCE_WEIGHT,
        }
    }
}

impl EngineConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), InvalidArgumentError> {
        if !self.starting_energy.is_finite() || self.starting_energy < 0.0 {
            return Err(InvalidArgumentError::new(format!(
                "starting energy must be a non-negative number, got {}",
                self.starting_energy
            )));
        }
        if !(self.decay_factor > 0.0 && self.decay_factor < 1.0) {
            return Err(InvalidArgumentError::new(format!(
                "decay factor must be in (0, 1), got {}",
                self.decay_factor
            )));
        }
        if self.min_cost > self.max_cost {
            return Err(InvalidArgumentError::new(format!(
                "cost range is inverted: [{}, {}]",
                self.min_cost, self.max_cost
            )));
        }
        if !self.reinforce_weight.is_finite() || self.reinforce_weight <= 0.0 {
            return Err(InvalidArgumentError::new(format!(
                "reinforce weight must be a positive number, got {}",
                self.reinforce_weight
            )));
        }
        Ok(())
    }
}

/// Errors a cycle engine can return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The topology has nothing to sample
    EmptyTopology(EmptyTopologyError),
    /// A configuration value or restored state is outside its domain
    InvalidArgument(InvalidArgumentError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::EmptyTopology(e) => write!(f, "topology error: {}", e),
            EngineError::InvalidArgument(e) => write!(f, "argument error: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::EmptyTopology(e) => Some(e),
            EngineError::InvalidArgument(e) => Some(e),
        }
    }
}

impl From<EmptyTopologyError> for EngineError {
    fn from(e: EmptyTopologyError) -> Self {
        EngineError::EmptyTopology(e)
    }
}

impl From<InvalidArgumentError> for EngineError {
    fn from(e: InvalidArgumentError) -> Self {
        EngineError::InvalidArgument(e)
    }
}

/// One simulation session: budget, memory, cycle counter, and a random
/// source, stepping over a shared topology.
pub struct CycleEngine {
    topology: Arc<Topology>,
    config: EngineConfig,
    budget: EnergyBudget,
    memory: AdaptiveMemory,
    cycle_count: u64,
    rng: Box<dyn RandomSource>,
}

impl CycleEngine {
    /// Creates a fresh session with default state.
    pub fn new(
        topology: Arc<Topology>,
        config: EngineConfig,
        rng: Box<dyn RandomSource>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let budget = EnergyBudget::new(config.starting_energy);
        Ok(Self {
            topology,
            config,
            budget,
            memory: AdaptiveMemory::new(),
            cycle_count: 0,
            rng,
        })
    }

    /// Restores a session from a persisted state record.
    pub fn from_state(
        topology: Arc<Topology>,
        config: EngineConfig,
        rng: Box<dyn RandomSource>,
        state: SessionState,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        if !state.energy.is_finite() || state.energy < 0.0 {
            return Err(InvalidArgumentError::new(format!(
                "restored energy must be a non-negative number, got {}",
                state.energy
            ))
            .into());
        }
        Ok(Self {
            topology,
            config,
            budget: EnergyBudget::new(state.energy),
            memory: AdaptiveMemory::from_parts(state.trustmap, state.regret_lattice),
            cycle_count: state.cycle_count,
            rng,
        })
    }

    /// Runs one cycle and returns its result record.
    ///
    /// The only failure mode under a valid configuration is an empty
    /// topology; "insufficient energy" is a normal outcome recorded as a
    /// regret entry.
    pub fn step(&mut self) -> Result<CycleRecord, EngineError> {
        let orbit = self.topology.sample_orbit(self.rng.as_mut())?.to_string();
        let planet = self
            .topology
            .sample_planet(self.rng.as_mut(), &orbit)?
            .to_string();
        let moon = self
            .topology
            .sample_moon(self.rng.as_mut(), &planet)
            .to_string();
        let key = format!("{}/{}/{}", orbit, planet, moon);

        let cost = self.rng.roll_cost(self.config.min_cost, self.config.max_cost);
        if self.budget.try_spend(f64::from(cost))? {
            self.memory.reinforce(&key, self.config.reinforce_weight);
        } else {
            self.memory
                .log_regret(&key, cycle_constants::REGRET_INSUFFICIENT_ENERGY);
        }

        self.memory.decay(self.config.decay_factor)?;
        self.cycle_count += 1;

        tracing::trace!(
            cycle = self.cycle_count,
            %key,
            cost,
            remaining = self.budget.peek(),
            "cycle complete"
        );

        Ok(CycleRecord {
            cycle: self.cycle_count,
            orbit,
            planet,
            moon,
            cost,
            remaining_energy: self.budget.peek(),
            trustmap: self.memory.snapshot().trustmap,
        })
    }

    /// Runs `count` sequential cycles, returning their records in order.
    pub fn run_n(&mut self, count: u64) -> Result<Vec<CycleRecord>, EngineError> {
        let mut records = Vec::with_capacity(count as usize);
        for _ in 0..count {
            records.push(self.step()?);
        }
        Ok(records)
    }

    /// Exports the session as a persistable state record.
    pub fn export_state(&self) -> SessionState {
        let snapshot = self.memory.snapshot();
        SessionState {
            energy: self.budget.peek(),
            trustmap: snapshot.trustmap,
            regret_lattice: snapshot.regret_lattice,
            cycle_count: self.cycle_count,
        }
    }

    /// Number of completed cycles.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Remaining energy.
    pub fn remaining_energy(&self) -> f64 {
        self.budget.peek()
    }

    /// The session's adaptive memory.
    pub fn memory(&self) -> &AdaptiveMemory {
        &self.memory
    }

    /// The shared topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedSource, SeededSource};
    use orrery_state::GenesisMap;

    fn single_path_topology() -> Arc<Topology> {
        Arc::new(Topology::from_genesis(
            GenesisMap::new().with_planet("PlanetA", "Orbit1", &["MoonX"]),
        ))
    }

    fn multi_planet_topology() -> Arc<Topology> {
        Arc::new(Topology::from_genesis(
            GenesisMap::new()
                .with_planet("Aurelia", "Inner Ring", &["Luma", "Kess"])
                .with_planet("Verdantis", "Inner Ring", &["Thorn"])
                .with_planet("Pyralis", "Outer Ring", &[]),
        ))
    }

    #[test]
    fn test_step_forced_path_and_cost() {
        // Orbit, planet, and moon draws take 0.0 (the single path); the
        // cost draw takes 0.4, so cost = floor(0.4 * 10) + 1 = 5.
        let rng = ScriptedSource::from_values(&[0.0, 0.0, 0.0, 0.4]);
        let mut engine =
            CycleEngine::new(single_path_topology(), EngineConfig::default(), Box::new(rng))
                .unwrap();

        let record = engine.step().unwrap();
        assert_eq!(record.cycle, 1);
        assert_eq!(record.orbit, "Orbit1");
        assert_eq!(record.planet, "PlanetA");
        assert_eq!(record.moon, "MoonX");
        assert_eq!(record.cost, 5);
        assert_eq!(record.remaining_energy, 95.0);
        // Reinforced by 1.0, then decayed once: 1.0 * 0.95
        assert_eq!(record.trustmap["Orbit1/PlanetA/MoonX"], 0.95);
        assert!(engine.memory().regret_lattice().is_empty());
    }

    #[test]
    fn test_step_with_zero_energy_logs_regret() {
        let rng = ScriptedSource::from_values(&[0.0, 0.0, 0.0, 0.05]);
        let state = SessionState {
            energy: 0.0,
            ..SessionState::default()
        };
        let mut engine = CycleEngine::from_state(
            single_path_topology(),
            EngineConfig::default(),
            Box::new(rng),
            state,
        )
        .unwrap();

        let record = engine.step().unwrap();
        assert_eq!(record.cost, 1);
        assert_eq!(record.remaining_energy, 0.0);
        assert!(record.trustmap.is_empty());
        assert_eq!(
            engine.memory().regret_lattice(),
            &[(
                "Orbit1/PlanetA/MoonX".to_string(),
                "Insufficient energy".to_string()
            )]
        );
    }

    #[test]
    fn test_run_n_advances_counter_and_returns_ordered_records() {
        let rng = SeededSource::seeded(42);
        let mut engine =
            CycleEngine::new(multi_planet_topology(), EngineConfig::default(), Box::new(rng))
                .unwrap();

        let records = engine.run_n(25).unwrap();
        assert_eq!(records.len(), 25);
        assert_eq!(engine.cycle_count(), 25);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.cycle, i as u64 + 1);
            assert!((1..=10).contains(&record.cost));
            assert!(record.remaining_energy >= 0.0);
        }
    }

    #[test]
    fn test_run_n_resumes_cycle_count() {
        let state = SessionState {
            cycle_count: 40,
            ..SessionState::default()
        };
        let mut engine = CycleEngine::from_state(
            multi_planet_topology(),
            EngineConfig::default(),
            Box::new(SeededSource::seeded(7)),
            state,
        )
        .unwrap();

        let records = engine.run_n(3).unwrap();
        assert_eq!(records[0].cycle, 41);
        assert_eq!(engine.cycle_count(), 43);
    }

    #[test]
    fn test_export_state_matches_session() {
        let mut engine = CycleEngine::new(
            multi_planet_topology(),
            EngineConfig::default(),
            Box::new(SeededSource::seeded(11)),
        )
        .unwrap();
        engine.run_n(10).unwrap();

        let state = engine.export_state();
        assert_eq!(state.cycle_count, 10);
        assert_eq!(state.energy, engine.remaining_energy());
        assert_eq!(&state.trustmap, engine.memory().trustmap());
    }

    #[test]
    fn test_export_then_restore_roundtrip() {
        let mut engine = CycleEngine::new(
            multi_planet_topology(),
            EngineConfig::default(),
            Box::new(SeededSource::seeded(5)),
        )
        .unwrap();
        engine.run_n(8).unwrap();
        let exported = engine.export_state();

        let restored = CycleEngine::from_state(
            multi_planet_topology(),
            EngineConfig::default(),
            Box::new(SeededSource::seeded(5)),
            exported.clone(),
        )
        .unwrap();
        assert_eq!(restored.export_state(), exported);
    }

    #[test]
    fn test_step_on_empty_topology_fails() {
        let topology = Arc::new(Topology::from_genesis(GenesisMap::new()));
        let mut engine = CycleEngine::new(
            topology,
            EngineConfig::default(),
            Box::new(SeededSource::seeded(1)),
        )
        .unwrap();

        assert!(matches!(
            engine.step(),
            Err(EngineError::EmptyTopology(_))
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad_decay = EngineConfig {
            decay_factor: 1.0,
            ..EngineConfig::default()
        };
        let result = CycleEngine::new(
            single_path_topology(),
            bad_decay,
            Box::new(SeededSource::seeded(1)),
        );
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));

        let bad_range = EngineConfig {
            min_cost: 10,
            max_cost: 1,
            ..EngineConfig::default()
        };
        let result = CycleEngine::new(
            single_path_topology(),
            bad_range,
            Box::new(SeededSource::seeded(1)),
        );
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn test_restore_rejects_negative_energy() {
        let state = SessionState {
            energy: -1.0,
            ..SessionState::default()
        };
        let result = CycleEngine::from_state(
            single_path_topology(),
            EngineConfig::default(),
            Box::new(SeededSource::seeded(1)),
            state,
        );
        assert!(matches!(result, Err(EngineError::InvalidArgument(_))));
    }

    #[test]
    fn test_moonless_planet_yields_sentinel_key() {
        let topology = Arc::new(Topology::from_genesis(
            GenesisMap::new().with_planet("Pyralis", "Outer Ring", &[]),
        ));
        let rng = ScriptedSource::from_values(&[0.0]);
        let mut engine =
            CycleEngine::new(topology, EngineConfig::default(), Box::new(rng)).unwrap();

        let record = engine.step().unwrap();
        assert_eq!(record.moon, "none");
        assert_eq!(record.path_key(), "Outer Ring/Pyralis/none");
    }
}
