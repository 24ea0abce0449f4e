use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Maps `bits`-wide genes onto the two domain variables.
///
/// `x1` covers `[-1.5, 2.5)` and `x2` covers `[0, 5)`, each split into
/// `2^bits` evenly spaced steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Encoding {
    bits: u32,
}

impl Encoding {
    pub const X1_BASE: f32 = -1.5;
    pub const X1_SPAN: f32 = 4.0;
    pub const X2_SPAN: f32 = 5.0;

    /// Widest gene whose mask is still exact in an `f32` mantissa. Past this
    /// the top gene rounds up onto the open upper bound of each interval.
    pub const MAX_BITS: u32 = f32::MANTISSA_DIGITS;

    pub fn new(bits: u32) -> Result<Self, ConfigError> {
        if bits == 0 || bits > Self::MAX_BITS {
            return Err(ConfigError::InvalidBitWidth(bits));
        }
        Ok(Self { bits })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Number of distinct gene values, `2^bits`.
    pub fn period(&self) -> u32 {
        1 << self.bits
    }

    pub fn mask(&self) -> u32 {
        self.period() - 1
    }

    pub fn decode_x1(&self, gene: u32) -> f32 {
        Self::X1_BASE + gene as f32 * (Self::X1_SPAN / self.period() as f32)
    }

    pub fn decode_x2(&self, gene: u32) -> f32 {
        gene as f32 * (Self::X2_SPAN / self.period() as f32)
    }

    /// Uniform draw over `[0, 2^bits - 1]`.
    pub fn random_gene<R: Rng>(&self, rng: &mut R) -> u32 {
        rng.random_range(0..=self.mask())
    }
}

impl TryFrom<u32> for Encoding {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<Encoding> for u32 {
    fn from(encoding: Encoding) -> Self {
        encoding.bits
    }
}
