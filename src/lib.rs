//! Bit-encoded elitist genetic algorithm.
//!
//! Searches a two-variable polynomial for its maximum by evolving a fixed-size
//! population of bit-packed chromosomes. Each chromosome holds two genes, each
//! a `bits`-wide unsigned integer that decodes linearly onto a real interval.
//!
//! # Example
//!
//! ```rust,no_run
//! use bitga::{Chromosome, GaConfig, Polynomial, Report, runner::Experiment};
//!
//! let config = GaConfig::default();
//! let mut experiment = Experiment::<Chromosome, _>::new(config.clone(), Polynomial).unwrap();
//! let results = experiment.run();
//!
//! if let Some(summary) = results.summary() {
//!     print!("{}", Report::new(config, summary));
//! }
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub mod chromosome;
pub mod config;
pub mod encoding;
pub mod fitness;
pub mod operators;
pub mod report;
pub mod runner;
pub mod selection;

pub mod algorithms {
    pub mod elitist;
}

pub use chromosome::Chromosome;
pub use config::{ConfigError, GaConfig};
pub use encoding::Encoding;
pub use fitness::Polynomial;
pub use report::{Report, Summary};

/// The 'DNA' of an individual.
/// Defined by how it changes, not what it does.
pub trait Genotype: Clone + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync {
    /// Draw a fresh individual uniformly over the encoding's gene range.
    fn random<R: Rng>(rng: &mut R, encoding: &Encoding) -> Self;

    /// Flip each bit independently with probability `rate`.
    fn mutate<R: Rng>(&mut self, rng: &mut R, encoding: &Encoding, rate: f32);

    /// Build one offspring. Each bit comes from `self` with probability `rate`,
    /// otherwise from `other`. Parents are left untouched.
    fn crossover<R: Rng>(
        &self,
        other: &Self,
        rng: &mut R,
        encoding: &Encoding,
        rate: f32,
    ) -> Self;
}

/// A trait for systems that can decode DNA and score it.
pub trait Evaluator<G: Genotype>: Send + Sync {
    /// Higher is fitter.
    fn evaluate(&self, genotype: &G, encoding: &Encoding) -> f32;
}

/// The master engine trait.
pub trait Evolver<G: Genotype> {
    fn step<E: Evaluator<G>>(&mut self, evaluator: &E);
    fn population(&self) -> &[G];
}
