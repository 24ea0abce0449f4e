//! Steady-state elitist GA over a fixed-size population.
//!
//! Each generation:
//! 1. Overwrites `crossovers_per_iteration` non-elite slots with offspring of
//!    two fitness-proportional parents
//! 2. Mutates every slot except the current fittest
//! 3. Rescores the whole population and re-identifies the fittest
//!
//! Parent selection reads the scores from the start of the generation even
//! though slots are overwritten along the way, and the same slot may be
//! overwritten more than once in one generation. The fittest slot is never
//! overwritten or mutated, so the tracked best score never decreases.

use crate::config::{ConfigError, GaConfig};
use crate::encoding::Encoding;
use crate::selection::{cumulative_individual, elite_offspring_slot, fittest_index};
use crate::{Evaluator, Evolver, Genotype};
use log::trace;
use rand::prelude::SeedableRng;
use rand_pcg::Pcg64; // Specific, serializable generator
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Serialize, Deserialize)]
#[serde(bound = "G: Genotype")]
pub struct ElitistGA<G: Genotype> {
    population: Vec<G>,
    /// `scores[i]` always reflects `population[i]` as of the last rescore.
    scores: Vec<f32>,
    fittest: usize,
    generation: usize,
    config: GaConfig,
    encoding: Encoding,
    rng: Pcg64,
}

impl<G: Genotype> ElitistGA<G> {
    /// Validates `config` and seeds the generator from `config.seed`.
    ///
    /// The population starts empty; call [`initialize`](Self::initialize)
    /// before stepping.
    pub fn new(config: GaConfig) -> Result<Self, ConfigError> {
        let rng = Pcg64::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Like [`new`](Self::new) but continues from an existing generator.
    pub fn with_rng(config: GaConfig, rng: Pcg64) -> Result<Self, ConfigError> {
        config.validate()?;
        let encoding = config.encoding()?;
        Ok(Self {
            population: Vec::new(),
            scores: Vec::new(),
            fittest: 0,
            generation: 0,
            config,
            encoding,
            rng,
        })
    }

    /// Start a fresh run: random population, scored, fittest located.
    pub fn initialize<E: Evaluator<G>>(&mut self, evaluator: &E) {
        let encoding = self.encoding();
        self.population = (0..self.config.population_size)
            .map(|_| G::random(&mut self.rng, &encoding))
            .collect();
        self.scores = vec![0.0; self.population.len()];
        self.generation = 0;
        self.rescore(evaluator);
    }

    /// Replace the population with `initial_pop` and score it.
    ///
    /// The length must match `population_size`; otherwise the engine is left
    /// unchanged.
    pub fn seed_population<E: Evaluator<G>>(
        &mut self,
        initial_pop: Vec<G>,
        evaluator: &E,
    ) -> Result<(), ConfigError> {
        if initial_pop.len() != self.config.population_size {
            return Err(ConfigError::SeedSizeMismatch {
                expected: self.config.population_size,
                actual: initial_pop.len(),
            });
        }
        self.population = initial_pop;
        self.scores = vec![0.0; self.population.len()];
        self.generation = 0;
        self.rescore(evaluator);
        Ok(())
    }

    fn rescore<E: Evaluator<G>>(&mut self, evaluator: &E) {
        let encoding = self.encoding();

        #[cfg(feature = "parallel")]
        self.scores
            .par_iter_mut()
            .zip(self.population.par_iter())
            .for_each(|(score, g)| *score = evaluator.evaluate(g, &encoding));
        #[cfg(not(feature = "parallel"))]
        for (score, g) in self.scores.iter_mut().zip(&self.population) {
            *score = evaluator.evaluate(g, &encoding);
        }

        self.fittest = fittest_index(&self.scores);
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn scores(&self) -> &[f32] {
        &self.scores
    }

    /// Generations stepped since the last initialization.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn fittest_index(&self) -> usize {
        self.fittest
    }

    /// The elite individual and its score, if the population is initialized.
    pub fn fittest(&self) -> Option<(&G, f32)> {
        let g = self.population.get(self.fittest)?;
        Some((g, self.scores[self.fittest]))
    }

    /// Hand back the generator so another engine can continue the same stream.
    pub fn into_rng(self) -> Pcg64 {
        self.rng
    }
}

impl<G: Genotype> Evolver<G> for ElitistGA<G> {
    fn step<E: Evaluator<G>>(&mut self, evaluator: &E) {
        if self.population.is_empty() {
            return;
        }

        let encoding = self.encoding();
        let len = self.population.len();

        for _ in 0..self.config.crossovers_per_iteration {
            let slot = elite_offspring_slot(&mut self.rng, self.fittest, len);
            let left = cumulative_individual(&mut self.rng, &self.scores);
            let right = cumulative_individual(&mut self.rng, &self.scores);
            let child = self.population[left].crossover(
                &self.population[right],
                &mut self.rng,
                &encoding,
                self.config.crossover_rate,
            );
            self.population[slot] = child;
        }

        let fittest = self.fittest;
        for (i, individual) in self.population.iter_mut().enumerate() {
            if i != fittest {
                individual.mutate(&mut self.rng, &encoding, self.config.mutation_rate);
            }
        }

        self.rescore(evaluator);
        self.generation += 1;

        trace!(
            "generation {}: fittest slot {} scores {} ({:?})",
            self.generation, self.fittest, self.scores[self.fittest], self.population[self.fittest]
        );
    }

    fn population(&self) -> &[G] {
        &self.population
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::fitness::Polynomial;

    fn small_config() -> GaConfig {
        GaConfig {
            population_size: 30,
            iterations: 50,
            ..GaConfig::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GaConfig {
            population_size: 1,
            ..GaConfig::default()
        };
        assert!(ElitistGA::<Chromosome>::new(config).is_err());
    }

    #[test]
    fn test_step_before_initialize_is_noop() {
        let mut ga = ElitistGA::<Chromosome>::new(small_config()).unwrap();
        ga.step(&Polynomial);
        assert!(ga.population().is_empty());
        assert_eq!(ga.generation(), 0);
        assert!(ga.fittest().is_none());
    }

    #[test]
    fn test_initialize_fills_and_scores() {
        let mut ga = ElitistGA::<Chromosome>::new(small_config()).unwrap();
        ga.initialize(&Polynomial);

        assert_eq!(ga.population().len(), 30);
        assert_eq!(ga.scores().len(), 30);
        let enc = ga.encoding();
        for (g, &s) in ga.population().iter().zip(ga.scores()) {
            assert!(g.x1 <= enc.mask() && g.x2 <= enc.mask());
            assert_eq!(s, Polynomial.evaluate(g, &enc));
        }
        assert_eq!(ga.fittest_index(), fittest_index(ga.scores()));
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut ga = ElitistGA::<Chromosome>::new(small_config()).unwrap();
        ga.initialize(&Polynomial);

        let mut previous = ga.fittest().unwrap().1;
        for _ in 0..200 {
            ga.step(&Polynomial);
            let current = ga.fittest().unwrap().1;
            assert!(
                current >= previous,
                "best score fell from {previous} to {current} at generation {}",
                ga.generation()
            );
            previous = current;
        }
    }

    #[test]
    fn test_elite_survives_generation_untouched() {
        let mut ga = ElitistGA::<Chromosome>::new(small_config()).unwrap();
        ga.initialize(&Polynomial);

        for _ in 0..50 {
            let elite_slot = ga.fittest_index();
            let elite = ga.population()[elite_slot];
            ga.step(&Polynomial);
            assert_eq!(ga.population()[elite_slot], elite);
        }
    }

    #[test]
    fn test_scores_stay_in_sync_after_step() {
        let mut ga = ElitistGA::<Chromosome>::new(small_config()).unwrap();
        ga.initialize(&Polynomial);
        for _ in 0..10 {
            ga.step(&Polynomial);
        }

        let enc = ga.encoding();
        for (g, &s) in ga.population().iter().zip(ga.scores()) {
            assert_eq!(s, Polynomial.evaluate(g, &enc));
        }
        assert_eq!(ga.generation(), 10);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let run = || {
            let mut ga = ElitistGA::<Chromosome>::new(small_config()).unwrap();
            ga.initialize(&Polynomial);
            for _ in 0..25 {
                ga.step(&Polynomial);
            }
            ga.population().to_vec()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_seed_population_wrong_size_leaves_engine_untouched() {
        let mut ga = ElitistGA::<Chromosome>::new(small_config()).unwrap();
        ga.initialize(&Polynomial);
        let before = ga.population().to_vec();

        let result = ga.seed_population(vec![Chromosome::default(); 3], &Polynomial);

        assert_eq!(
            result,
            Err(ConfigError::SeedSizeMismatch {
                expected: 30,
                actual: 3
            })
        );
        assert_eq!(ga.population(), before.as_slice());
    }

    #[test]
    fn test_seed_population_identical_individuals_stay_converged_without_mutation() {
        let config = GaConfig {
            population_size: 5,
            mutation_rate: 0.0,
            ..GaConfig::default()
        };
        let mut ga = ElitistGA::<Chromosome>::new(config).unwrap();
        let c = Chromosome::new(100, 200);
        ga.seed_population(vec![c; 5], &Polynomial).unwrap();

        for _ in 0..20 {
            ga.step(&Polynomial);
        }
        assert!(ga.population().iter().all(|g| *g == c));
    }
}
