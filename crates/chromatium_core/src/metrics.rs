//! Run metrics collection for the simulation.
//!
//! Provides structured logging and lightweight counters for monitoring
//! a run's progress and health.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters tracked while a simulation runs.
#[derive(Debug, Default)]
pub struct Metrics {
    steps: AtomicU64,
    births: AtomicU64,
    deaths: AtomicU64,
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed step with its birth and death counts.
    pub fn record_step(&self, population: usize, births: usize, deaths: usize) {
        self.births.fetch_add(births as u64, Ordering::Relaxed);
        self.deaths.fetch_add(deaths as u64, Ordering::Relaxed);
        let step = self.steps.fetch_add(1, Ordering::Relaxed) + 1;

        // Log at info level every 100 steps
        if step.is_multiple_of(100) {
            tracing::info!(
                step = step,
                population = population,
                births = births,
                deaths = deaths,
                "Simulation step"
            );
        }
    }

    /// Gets the number of completed steps.
    #[must_use]
    pub fn step_count(&self) -> u64 {
        self.steps.load(Ordering::Relaxed)
    }

    /// Gets the total number of births recorded so far.
    #[must_use]
    pub fn birth_count(&self) -> u64 {
        self.births.load(Ordering::Relaxed)
    }

    /// Gets the total number of deaths recorded so far.
    #[must_use]
    pub fn death_count(&self) -> u64 {
        self.deaths.load(Ordering::Relaxed)
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}
