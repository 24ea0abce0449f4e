//! Bitwise genetic operators shared by crossover and mutation.

use rand::Rng;

use crate::encoding::Encoding;

/// Sets each of the encoding's `bits` positions independently with
/// probability `probability`.
///
/// Crossover masks and mutation masks both come from here; only the
/// probability differs.
pub fn random_bitmask<R: Rng>(rng: &mut R, encoding: &Encoding, probability: f32) -> u32 {
    let mut mask = 0;
    for bit in 0..encoding.bits() {
        if rng.random::<f32>() < probability {
            mask |= 1 << bit;
        }
    }
    mask & encoding.mask()
}

/// Takes the bits selected by `mask` from `left` and the rest from `right`.
pub fn crossover_genes(left: u32, right: u32, mask: u32, encoding: &Encoding) -> u32 {
    (left & mask) | (right & !mask & encoding.mask())
}
