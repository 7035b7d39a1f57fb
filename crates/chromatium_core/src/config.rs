//! Configuration management for simulation parameters.
//!
//! Strongly-typed parameters for one simulation run, loadable from a
//! `config.toml` fragment. Defaults mirror the stock experiment setup.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! size = 1000.0
//! view_distance = 250.0
//! color_method = "discrete"
//! min_color_similarity = 0.0
//! steps = 100
//! chance_death = 0.1
//! chance_breed = 0.5
//! chance_mutant = 0.0
//! seed = 42
//! ```

use chromatium_data::{ColorMethod, SimError};
use serde::{Deserialize, Serialize};

/// Behavioral parameters of a simulation run.
///
/// `seed` is the optional determinism hook: `Some(n)` makes the run
/// reproducible, `None` seeds from entropy.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SimulationConfig {
    /// Side length of the square domain; both axes span `[0, size]`.
    pub size: f64,
    /// Maximum distance between breeding partners.
    pub view_distance: f64,
    /// Offspring color assignment rule.
    pub color_method: ColorMethod,
    /// Minimum color similarity required to breed.
    pub min_color_similarity: f64,
    /// Number of simulated steps.
    pub steps: u64,
    /// Per-creature, per-step death probability.
    pub chance_death: f64,
    /// Per-pair, per-step breeding-attempt probability.
    pub chance_breed: f64,
    /// Per-offspring mutation probability.
    pub chance_mutant: f64,
    /// Optional RNG seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: 1000.0,
            view_distance: 250.0,
            color_method: ColorMethod::Discrete,
            min_color_similarity: 0.0,
            steps: 100,
            chance_death: 0.1,
            chance_breed: 0.5,
            chance_mutant: 0.0,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Validates all parameters.
    ///
    /// Returns `Ok(())` if every parameter is in its documented domain,
    /// or the first violation as `SimError::InvalidParameter`.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(SimError::InvalidParameter {
                name: "size",
                value: self.size,
                expected: "a positive finite number",
            });
        }
        if !self.view_distance.is_finite() || self.view_distance < 0.0 {
            return Err(SimError::InvalidParameter {
                name: "view_distance",
                value: self.view_distance,
                expected: "a non-negative finite number",
            });
        }
        for (name, value) in [
            ("min_color_similarity", self.min_color_similarity),
            ("chance_death", self.chance_death),
            ("chance_breed", self.chance_breed),
            ("chance_mutant", self.chance_mutant),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimError::unit_interval(name, value));
            }
        }
        Ok(())
    }

    /// Loads and validates configuration from TOML content.
    ///
    /// Missing keys fall back to defaults; unknown `color_method` names
    /// and out-of-domain values are rejected.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }
}
