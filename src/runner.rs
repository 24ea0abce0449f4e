//! Repeats independent population runs and aggregates their best scores.

use log::debug;

use crate::algorithms::elitist::ElitistGA;
use crate::config::{ConfigError, GaConfig};
use crate::encoding::Encoding;
use crate::report::Summary;
use crate::{Evaluator, Evolver, Genotype};

/// Outcome of one population run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord<G> {
    /// Position of the run in execution order.
    pub run: usize,
    /// Score of the fittest individual after the final generation.
    pub fitness: f32,
    pub fittest: G,
}

/// Run records sorted ascending by fitness.
#[derive(Debug, Clone)]
pub struct Results<G> {
    records: Vec<RunRecord<G>>,
}

impl<G> Results<G> {
    pub fn new(mut records: Vec<RunRecord<G>>) -> Self {
        records.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));
        Self { records }
    }

    pub fn records(&self) -> &[RunRecord<G>] {
        &self.records
    }

    pub fn fitness_values(&self) -> Vec<f32> {
        self.records.iter().map(|r| r.fitness).collect()
    }

    pub fn best(&self) -> Option<&RunRecord<G>> {
        self.records.last()
    }

    pub fn summary(&self) -> Option<Summary> {
        Summary::from_sorted(&self.fitness_values())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Drives `population_count` sequential runs from one seeded generator.
///
/// Every run re-initializes the same engine, so the generator stream carries
/// across runs and an identical config always yields identical results.
pub struct Experiment<G: Genotype, E: Evaluator<G>> {
    engine: ElitistGA<G>,
    evaluator: E,
}

impl<G: Genotype, E: Evaluator<G>> Experiment<G, E> {
    pub fn new(config: GaConfig, evaluator: E) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: ElitistGA::new(config)?,
            evaluator,
        })
    }

    pub fn config(&self) -> &GaConfig {
        self.engine.config()
    }

    pub fn encoding(&self) -> Encoding {
        self.engine.encoding()
    }

    /// One run: fresh population, all generations, best individual recorded.
    pub fn run_once(&mut self, run: usize) -> RunRecord<G> {
        self.engine.initialize(&self.evaluator);
        for _ in 0..self.engine.config().iterations {
            self.engine.step(&self.evaluator);
        }

        let (fittest, fitness) = self
            .engine
            .fittest()
            .map(|(g, score)| (g.clone(), score))
            .expect("validated config guarantees a non-empty population");

        debug!("run {run}: best fitness {fitness} from {fittest:?}");

        RunRecord {
            run,
            fitness,
            fittest,
        }
    }

    pub fn run(&mut self) -> Results<G> {
        let count = self.engine.config().population_count;
        let records = (0..count).map(|run| self.run_once(run)).collect();
        Results::new(records)
    }
}
