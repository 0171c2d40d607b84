//! Core simulation logic: topology sampling, energy budget, adaptive memory,
//! and the cycle engine that ties them together.
//!
//! One cycle samples a random orbit/planet/moon path, attempts to pay a
//! random energy cost, reinforces the path on success or logs a regret on
//! failure, then decays every trust weight. All randomness flows through the
//! [`RandomSource`] trait so runs can be seeded or scripted.

pub mod energy;
pub mod engine;
pub mod error;
pub mod memory;
pub mod rng;
pub mod topology;

pub use energy::EnergyBudget;
pub use engine::{cycle_constants, CycleEngine, EngineConfig, EngineError};
pub use error::{EmptyTopologyError, InvalidArgumentError};
pub use memory::{AdaptiveMemory, MemorySnapshot, DEFAULT_DECAY_FACTOR, PRUNE_THRESHOLD};
pub use rng::{RandomSource, ScriptedSource, SeededSource};
pub use topology::{Topology, NO_MOON};
