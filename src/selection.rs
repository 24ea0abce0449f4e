//! Parent and slot selection over a population's index space.
//!
//! Every function works on indices into a population and its synchronized
//! score slice; none of them touch the chromosomes themselves.

use log::debug;
use rand::Rng;

/// Uniform index in `[0, len)`. `len` must be non-zero.
pub fn random_individual<R: Rng>(rng: &mut R, len: usize) -> usize {
    rng.random_range(0..len)
}

/// Roulette-wheel lookup for a given draw `point` in `[0, 1)`.
///
/// Walks the scores accumulating each one's share of the total and returns the
/// first index whose running share reaches `point`. When no index qualifies
/// (rounding leaves the total just under `point`, or the shares are not finite
/// because the total is zero) the result falls back to index 0.
///
/// Negative totals are not guarded: the shares are used as computed.
pub fn cumulative_index(scores: &[f32], point: f32) -> usize {
    let sum: f32 = scores.iter().sum();
    let mut cumulative = 0.0_f32;

    for (i, &score) in scores.iter().enumerate() {
        cumulative += score / sum;
        if !cumulative.is_finite() {
            break;
        }
        if point <= cumulative {
            return i;
        }
    }

    debug!("cumulative selection fell back to index 0 (point {point}, total {sum})");
    0
}

/// Fitness-proportional draw; see [`cumulative_index`].
pub fn cumulative_individual<R: Rng>(rng: &mut R, scores: &[f32]) -> usize {
    let point = rng.random::<f32>();
    cumulative_index(scores, point)
}

/// Uniform index that is guaranteed not to be `fittest`.
///
/// Redraws until it misses the elite slot, so `len` must be at least 2.
pub fn elite_offspring_slot<R: Rng>(rng: &mut R, fittest: usize, len: usize) -> usize {
    debug_assert!(len >= 2, "elite-safe slot needs a second slot");
    loop {
        let slot = random_individual(rng, len);
        if slot != fittest {
            return slot;
        }
    }
}

/// First index holding the maximum score. Ties go to the lowest index.
pub fn fittest_index(scores: &[f32]) -> usize {
    let mut fittest = 0;
    for (i, &score) in scores.iter().enumerate() {
        if score > scores[fittest] {
            fittest = i;
        }
    }
    fittest
}
