//! Fixed algorithm parameters.

use serde::{Deserialize, Serialize};

use crate::encoding::Encoding;

/// Immutable parameter set shared by every component of the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Chromosomes per population.
    pub population_size: usize,
    /// Independent population runs aggregated into the report.
    pub population_count: usize,
    /// Generations per run.
    pub iterations: usize,
    /// Offspring produced by crossover in each generation.
    pub crossovers_per_iteration: usize,
    /// Per-bit probability of inheriting from the left parent.
    pub crossover_rate: f32,
    /// Per-bit flip probability.
    pub mutation_rate: f32,
    /// Width of each gene.
    pub bits: u32,
    /// Seed for the experiment's single generator.
    pub seed: u64,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            population_count: 20,
            iterations: 100,
            crossovers_per_iteration: 10,
            crossover_rate: 0.5,
            mutation_rate: 0.02,
            bits: 12,
            seed: 0,
        }
    }
}

impl GaConfig {
    /// Largest supported gene width; see [`Encoding::MAX_BITS`].
    pub const MAX_BITS: u32 = Encoding::MAX_BITS;

    pub fn encoding(&self) -> Result<Encoding, ConfigError> {
        Encoding::new(self.bits)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // The elite-safe slot draw needs at least one non-elite slot
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.population_count == 0 {
            return Err(ConfigError::NoRuns);
        }
        self.encoding()?;

        let check_rate = |value: f32, name: &'static str| {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::InvalidRate { name, value })
            }
        };

        check_rate(self.crossover_rate, "crossover rate")?;
        check_rate(self.mutation_rate, "mutation rate")?;

        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Population size must be at least 2, got {0}")]
    PopulationTooSmall(usize),
    #[error("Population count must be non-zero")]
    NoRuns,
    #[error("Bits per value must be between 1 and 24, got {0}")]
    InvalidBitWidth(u32),
    #[error("Seed population has {actual} individuals, expected {expected}")]
    SeedSizeMismatch { expected: usize, actual: usize },
    #[error("The {name} must be within [0, 1], got {value}")]
    InvalidRate { name: &'static str, value: f32 },
}
