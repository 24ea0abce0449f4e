use crate::Evaluator;
use crate::chromosome::Chromosome;
use crate::encoding::Encoding;

/// `40 - 4.5·x1 + 4·x2 - x1² - 2·x2² + 2·x1·x2 - x1⁴ + 2·x1²·x2`
pub fn polynomial_score(x1: f32, x2: f32) -> f32 {
    let x1_sq = x1 * x1;

    let mut score = 40.0;
    score -= 4.5 * x1;
    score += 4.0 * x2;
    score -= x1_sq;
    score -= 2.0 * x2 * x2;
    score += 2.0 * x1 * x2;
    score -= x1_sq * x1_sq;
    score += 2.0 * x1_sq * x2;
    score
}

/// Scores a [`Chromosome`] with [`polynomial_score`] over its decoded genes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Polynomial;

impl Evaluator<Chromosome> for Polynomial {
    fn evaluate(&self, genotype: &Chromosome, encoding: &Encoding) -> f32 {
        let (x1, x2) = genotype.decode(encoding);
        polynomial_score(x1, x2)
    }
}
