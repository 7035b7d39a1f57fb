//! # Chromatium Core
//!
//! The simulation engine for Chromatium - colored creatures breeding,
//! mutating, and dying on a bounded plane.
//!
//! This crate contains:
//! - Parameter validation and TOML configuration
//! - The step loop (placement, death, pairing, breeding)
//! - Per-step population history and run summaries
//! - Metrics collection and structured logging
//!
//! ## Example
//!
//! ```
//! use chromatium_core::{Simulation, SimulationConfig};
//! use chromatium_data::{Creature, Rgb};
//!
//! let config = SimulationConfig {
//!     steps: 10,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let starting: Vec<Creature> = (0..20).map(|_| Creature::new(Rgb::random())).collect();
//! let run = Simulation::run(starting, config).expect("valid config");
//! assert_eq!(run.history().len(), 10);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Per-step population records and end-of-run aggregates
pub mod history;
/// Metrics collection and logging setup
pub mod metrics;
/// The population engine
pub mod simulation;

pub use config::SimulationConfig;
pub use history::{RunSummary, StepRecord};
pub use metrics::{init_logging, Metrics};
pub use simulation::Simulation;
