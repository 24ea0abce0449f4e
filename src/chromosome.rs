use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Genotype;
use crate::encoding::Encoding;
use crate::operators::{crossover_genes, random_bitmask};

/// A candidate solution: one gene per domain variable.
///
/// Plain value type. Operators produce copies; a chromosome has no identity
/// beyond its slot in the population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Chromosome {
    pub x1: u32,
    pub x2: u32,
}

impl Chromosome {
    pub fn new(x1: u32, x2: u32) -> Self {
        Self { x1, x2 }
    }

    /// XOR both genes with their masks. Applying the same masks twice is a no-op.
    pub fn flip(&mut self, mask_x1: u32, mask_x2: u32) {
        self.x1 ^= mask_x1;
        self.x2 ^= mask_x2;
    }

    /// Decoded `(x1, x2)`.
    pub fn decode(&self, encoding: &Encoding) -> (f32, f32) {
        (encoding.decode_x1(self.x1), encoding.decode_x2(self.x2))
    }
}

impl Genotype for Chromosome {
    fn random<R: Rng>(rng: &mut R, encoding: &Encoding) -> Self {
        let x1 = encoding.random_gene(rng);
        let x2 = encoding.random_gene(rng);
        Self::new(x1, x2)
    }

    fn mutate<R: Rng>(&mut self, rng: &mut R, encoding: &Encoding, rate: f32) {
        let mask_x1 = random_bitmask(rng, encoding, rate);
        let mask_x2 = random_bitmask(rng, encoding, rate);
        self.flip(mask_x1, mask_x2);
    }

    fn crossover<R: Rng>(
        &self,
        other: &Self,
        rng: &mut R,
        encoding: &Encoding,
        rate: f32,
    ) -> Self {
        let mask_x1 = random_bitmask(rng, encoding, rate);
        let mask_x2 = random_bitmask(rng, encoding, rate);
        Self::new(
            crossover_genes(self.x1, other.x1, mask_x1, encoding),
            crossover_genes(self.x2, other.x2, mask_x2, encoding),
        )
    }
}
