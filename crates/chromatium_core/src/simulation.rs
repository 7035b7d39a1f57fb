//! The population engine.
//!
//! Each step applies three phases to the live set, in order: placement
//! of unpositioned creatures, independent per-creature deaths, then
//! randomly paired breeding gated by distance and color similarity. A
//! population record is appended after every step; a run that goes
//! extinct keeps recording zeros until its step count is exhausted.

use crate::config::SimulationConfig;
use crate::history::{RunSummary, StepRecord};
use crate::metrics::Metrics;
use chromatium_data::{Creature, Position, SimError};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A completed simulation run.
///
/// Construction validates the configuration and then drives the whole
/// run synchronously; there is no incremental stepping API. The
/// accessors expose the per-step history and the final live set.
pub struct Simulation {
    config: SimulationConfig,
    creatures: Vec<Creature>,
    history: Vec<StepRecord>,
    metrics: Metrics,
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Validates `config`, then runs the full simulation with
    /// `starting` as the initial population.
    ///
    /// Fails fast with `SimError::InvalidParameter` before any step is
    /// simulated. Creatures passed in without a position are placed
    /// uniformly at random; pre-placed creatures keep their position.
    pub fn run(starting: Vec<Creature>, config: SimulationConfig) -> Result<Self, SimError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut sim = Self {
            history: Vec::with_capacity(config.steps as usize),
            creatures: starting,
            metrics: Metrics::new(),
            config,
            rng,
        };
        sim.execute()?;
        Ok(sim)
    }

    /// The per-step population records, one per completed step.
    #[must_use]
    pub fn history(&self) -> &[StepRecord] {
        &self.history
    }

    /// Read-only snapshot of the live set after the last step.
    #[must_use]
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// The configuration the run was built with.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The counters collected while the run executed.
    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Aggregate counters for the completed run.
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            steps: self.config.steps,
            final_population: self.creatures.len(),
            peak_population: self
                .history
                .iter()
                .map(|record| record.population)
                .max()
                .unwrap_or(0),
            total_births: self.metrics.birth_count() as usize,
            total_deaths: self.metrics.death_count() as usize,
            mutant_count: self
                .creatures
                .iter()
                .filter(|creature| creature.is_mutant)
                .count(),
        }
    }

    fn execute(&mut self) -> Result<(), SimError> {
        self.place_unpositioned();
        for step in 0..self.config.steps {
            self.simulate_step(step)?;
        }
        tracing::info!(
            steps = self.config.steps,
            population = self.creatures.len(),
            "Run complete"
        );
        Ok(())
    }

    fn simulate_step(&mut self, step: u64) -> Result<(), SimError> {
        let deaths = self.death_phase();
        let births = self.breeding_phase()?;
        let population = self.creatures.len();
        self.history.push(StepRecord { step, population });
        self.metrics.record_step(population, births, deaths);
        tracing::debug!(step, deaths, births, population, "Step complete");
        Ok(())
    }

    /// Assigns an independent uniform position in `[0, size]²` to every
    /// creature that lacks one.
    fn place_unpositioned(&mut self) {
        let size = self.config.size;
        let rng = &mut self.rng;
        for creature in self.creatures.iter_mut() {
            if creature.position.is_none() {
                creature.position = Some(Position {
                    x: rng.gen_range(0.0..=size),
                    y: rng.gen_range(0.0..=size),
                });
            }
        }
    }

    /// Removes each creature with independent probability
    /// `chance_death`, clearing its position before removal.
    fn death_phase(&mut self) -> usize {
        let chance_death = self.config.chance_death;
        let rng = &mut self.rng;
        let before = self.creatures.len();
        self.creatures.retain_mut(|creature| {
            if rng.gen_bool(chance_death) {
                creature.position = None;
                false
            } else {
                true
            }
        });
        before - self.creatures.len()
    }

    /// Pairs the live set through a uniform random permutation (first
    /// half against second half; an odd creature sits this step out),
    /// lets each pair attempt to breed, and adds the placed offspring
    /// to the live set. Returns the number of births.
    fn breeding_phase(&mut self) -> Result<usize, SimError> {
        self.creatures.shuffle(&mut self.rng);
        let pair_count = self.creatures.len() / 2;

        let mut offspring = Vec::new();
        for i in 0..pair_count {
            if !self.rng.gen_bool(self.config.chance_breed) {
                continue;
            }
            let first = &self.creatures[i];
            let second = &self.creatures[i + pair_count];
            // An undefined distance means an unplaced partner, which is
            // ineligible rather than an error.
            match first.distance(second) {
                Some(distance) if distance <= self.config.view_distance => {
                    if let Some(child) = first.breed_with_rng(
                        second,
                        self.config.min_color_similarity,
                        self.config.chance_mutant,
                        self.config.color_method,
                        &mut self.rng,
                    )? {
                        offspring.push(child);
                    }
                }
                _ => {}
            }
        }

        let births = offspring.len();
        let size = self.config.size;
        for child in &mut offspring {
            child.position = Some(Position {
                x: self.rng.gen_range(0.0..=size),
                y: self.rng.gen_range(0.0..=size),
            });
        }
        self.creatures.extend(offspring);
        Ok(births)
    }
}
