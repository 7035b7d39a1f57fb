//! Per-step population records and end-of-run aggregates.
//!
//! The history is the run's sole output artifact: one record per
//! completed step, in step order, appended after the step's death and
//! breeding phases have settled.

use serde::{Deserialize, Serialize};

/// Population count recorded after one completed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u64,
    pub population: usize,
}

/// Aggregate counters for a completed run.
///
/// `peak_population` is the largest recorded per-step count; a run with
/// zero steps records nothing and reports a peak of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    pub steps: u64,
    pub final_population: usize,
    pub peak_population: usize,
    pub total_births: usize,
    pub total_deaths: usize,
    pub mutant_count: usize,
}
