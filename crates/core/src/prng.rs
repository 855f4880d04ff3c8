//! Seedable Xorshift64 stream backing every snowflake render.
//!
//! The CLI creates one stream per invocation and keeps drawing from it across
//! a whole batch, so consecutive snowflakes are independent samples of the
//! same sequence. The core algorithm is pure integer arithmetic and therefore
//! reproducible across platforms for a given seed.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

/// Xorshift64 PRNG with shifts (13, 7, 17).
///
/// A seed of 0 is a fixed point of the algorithm and is replaced with a
/// non-zero fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform f64 in [0, 1) built from the upper 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform f64 in [min, max).
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform integer in `[low, high]`, both ends inclusive.
    ///
    /// Uses modulo reduction; the bias is negligible for the small ranges
    /// snowflake parameters use.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn next_int_inclusive(&mut self, low: i64, high: i64) -> i64 {
        assert!(low <= high, "next_int_inclusive: low {low} > high {high}");
        let span = (i128::from(high) - i128::from(low) + 1) as u128;
        let offset = u128::from(self.next_u64()) % span;
        (i128::from(low) + offset as i128) as i64
    }

    /// Normally distributed sample via the Box-Muller transform.
    ///
    /// Consumes two uniforms per call; the paired second variate is discarded
    /// so the serialized state stays a single word.
    pub fn next_normal(&mut self, mean: f64, sd: f64) -> f64 {
        // 1 - [0, 1) keeps u1 in (0, 1] so ln never sees zero.
        let u1 = 1.0 - self.next_f64();
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        mean + sd * z
    }
}
