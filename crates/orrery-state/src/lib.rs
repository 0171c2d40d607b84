//! Shared state types and serialization for the orrery simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod genesis;
pub mod record;
pub mod state;

// Re-export genesis types
pub use genesis::GenesisMap;

// Re-export cycle record types
pub use record::CycleRecord;

// Re-export session state types
pub use state::{SessionState, DEFAULT_STARTING_ENERGY};
