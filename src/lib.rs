//! Umbrella crate for the Chromatium simulation.
//!
//! Re-exports the entity model (`chromatium_data`) and the engine
//! (`chromatium_core`) as one public surface for analysis code and
//! integration tests.

pub use chromatium_core;
pub use chromatium_data;

pub use chromatium_core::{
    init_logging, Metrics, RunSummary, Simulation, SimulationConfig, StepRecord,
};
pub use chromatium_data::{ColorMethod, Creature, Position, Rgb, SimError};
