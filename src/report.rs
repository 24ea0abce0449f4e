use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::GaConfig;

/// Best, median and worst of the per-run best fitness values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub best: f32,
    pub median: f32,
    pub worst: f32,
}

impl Summary {
    /// `sorted` must be in ascending order. Returns `None` when empty.
    ///
    /// The median is the element at `(len - 1) / 2`, the lower middle for an
    /// even count.
    pub fn from_sorted(sorted: &[f32]) -> Option<Self> {
        let worst = *sorted.first()?;
        let best = *sorted.last()?;
        let median = sorted[(sorted.len() - 1) / 2];
        Some(Self {
            best,
            median,
            worst,
        })
    }
}

/// Console report: the fixed parameters followed by the run summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub config: GaConfig,
    pub summary: Summary,
}

impl Report {
    pub fn new(config: GaConfig, summary: Summary) -> Self {
        Self { config, summary }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.config;
        writeln!(f, "Population Size: {}", c.population_size)?;
        writeln!(f, "Population Count: {}", c.population_count)?;
        writeln!(f, "Iteration Count: {}", c.iterations)?;
        writeln!(f, "Crossover Per Iteration: {}", c.crossovers_per_iteration)?;
        writeln!(f, "Crossover Ratio: {}", c.crossover_rate)?;
        writeln!(f, "Mutation Ratio: {}", c.mutation_rate)?;
        writeln!(f, "Bits Per Value: {}", c.bits)?;
        writeln!(f, "-----------------")?;
        writeln!(f, "Best: {}", self.summary.best)?;
        writeln!(f, "Median: {}", self.summary.median)?;
        writeln!(f, "Worst: {}", self.summary.worst)
    }
}
