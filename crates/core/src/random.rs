//! The random-number capability handed to generators and drawers.
//!
//! Drawers never reach for a global generator: the caller passes a
//! `&mut dyn RandomSource`, which production code backs with a single
//! [`Xorshift64`] stream and tests back with a fixed seed or a scripted fake.

use crate::prng::Xorshift64;

/// Source of scalar samples for snowflake generation.
///
/// Object-safe, so drawers take `&mut dyn RandomSource`. Implementations are
/// stateful streams; successive calls must yield independent samples.
pub trait RandomSource {
    /// A sample from the normal distribution `N(mean, sd²)`.
    fn normal(&mut self, mean: f64, sd: f64) -> f64;

    /// A uniform integer in `[low, high]` (inclusive on both ends).
    fn uniform_int(&mut self, low: i64, high: i64) -> i64;

    /// A uniform float in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl RandomSource for Xorshift64 {
    fn normal(&mut self, mean: f64, sd: f64) -> f64 {
        self.next_normal(mean, sd)
    }

    fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        self.next_int_inclusive(low, high)
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.next_range(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: usize = 1_000;

    fn sigma_fractions(source: &mut dyn RandomSource) -> (f64, f64) {
        let samples: Vec<f64> = (0..SAMPLES).map(|_| source.normal(0.0, 1.0)).collect();
        let within = |k: f64| samples.iter().filter(|s| s.abs() <= k).count() as f64;
        (within(1.0) / SAMPLES as f64, within(2.0) / SAMPLES as f64)
    }

    #[test]
    fn normal_samples_follow_the_68_95_rule() {
        for seed in [7, 42, 2024] {
            let mut rng = Xorshift64::new(seed);
            let (one, two) = sigma_fractions(&mut rng);
            assert!(
                (0.63..=0.73).contains(&one),
                "seed {seed}: {one} of samples within one sd"
            );
            assert!(
                (0.90..=1.0).contains(&two),
                "seed {seed}: {two} of samples within two sd"
            );
        }
    }

    #[test]
    fn normal_respects_mean_and_sd() {
        let mut rng = Xorshift64::new(99);
        let source: &mut dyn RandomSource = &mut rng;
        let samples: Vec<f64> = (0..SAMPLES).map(|_| source.normal(10.0, 2.0)).collect();
        let mean = samples.iter().sum::<f64>() / SAMPLES as f64;
        let var = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / SAMPLES as f64;
        assert!((mean - 10.0).abs() < 0.25, "mean {mean}");
        assert!((var.sqrt() - 2.0).abs() < 0.25, "sd {}", var.sqrt());
    }

    #[test]
    fn uniform_int_is_inclusive_through_trait_object() {
        let mut rng = Xorshift64::new(4);
        let source: &mut dyn RandomSource = &mut rng;
        let draws: Vec<i64> = (0..2_000).map(|_| source.uniform_int(-2, 2)).collect();
        assert!(draws.iter().all(|d| (-2..=2).contains(d)));
        assert!(draws.contains(&-2) && draws.contains(&2));
    }

    #[test]
    fn uniform_stays_half_open() {
        let mut rng = Xorshift64::new(8);
        for _ in 0..2_000 {
            let v = rng.uniform(0.85, 1.15);
            assert!((0.85..1.15).contains(&v), "{v}");
        }
    }

    #[test]
    fn stream_is_not_reseeded_between_calls() {
        let mut rng = Xorshift64::new(42);
        let first = rng.uniform_int(0, i64::MAX);
        let second = rng.uniform_int(0, i64::MAX);
        assert_ne!(first, second);
    }
}
