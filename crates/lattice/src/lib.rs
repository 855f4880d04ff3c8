#![deny(unsafe_code)]
//! Polygon-lattice snowflakes: stellar plates and triangular crystals.
//!
//! Both families draw a large "mother" shape with a smaller "son" shape
//! inside it, sized by random draws. When the draws come out the wrong way
//! round the mother is bumped up rather than failing the render.

pub mod stellar;
pub mod triangular;

pub use stellar::{StellarPlate, StellarPlateParams};
pub use triangular::{TriangularCrystal, TriangularCrystalParams};

use snowflake_core::{RandomSource, SnowflakeError};
use tracing::debug;

/// How far a clamped mother ends up above the son.
pub const MOTHER_MARGIN: u32 = 20;

/// Returns a mother size strictly larger than `son`.
///
/// `mother` is kept when it already exceeds `son`; otherwise it becomes
/// `son + MOTHER_MARGIN`.
pub fn clamp_mother(mother: u32, son: u32) -> u32 {
    if mother > son {
        mother
    } else {
        let bumped = son.saturating_add(MOTHER_MARGIN);
        debug!(mother, son, bumped, "mother not larger than son, clamping");
        bumped
    }
}

/// Inclusive bounds for one random size draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeRange {
    pub low: u32,
    pub high: u32,
}

impl SizeRange {
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    pub fn sample(&self, rng: &mut dyn RandomSource) -> u32 {
        rng.uniform_int(i64::from(self.low), i64::from(self.high)) as u32
    }

    /// Rejects empty ranges and zero sizes, naming the offending parameter.
    pub fn validate(&self, name: &str) -> Result<(), SnowflakeError> {
        if self.low == 0 {
            return Err(SnowflakeError::invalid_param(
                &format!("{name}_low"),
                "must be at least 1",
            ));
        }
        if self.low > self.high {
            return Err(SnowflakeError::invalid_param(
                &format!("{name}_low"),
                format!("{} exceeds {name}_high {}", self.low, self.high),
            ));
        }
        Ok(())
    }
}

/// Draws a mother size, then a son size, then clamps the mother.
pub fn sample_sizes(
    mother: SizeRange,
    son: SizeRange,
    rng: &mut dyn RandomSource,
) -> (u32, u32) {
    let m = mother.sample(rng);
    let s = son.sample(rng);
    (clamp_mother(m, s), s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use snowflake_core::Xorshift64;

    #[test]
    fn larger_mother_is_kept() {
        assert_eq!(clamp_mother(200, 100), 200);
    }

    #[test]
    fn equal_sizes_bump_mother() {
        assert_eq!(clamp_mother(150, 150), 170);
    }

    #[test]
    fn smaller_mother_is_bumped_above_son() {
        assert_eq!(clamp_mother(100, 180), 200);
    }

    #[test]
    fn clamp_saturates_at_u32_max() {
        assert_eq!(clamp_mother(0, u32::MAX), u32::MAX);
    }

    #[test]
    fn overlapping_ranges_always_yield_larger_mother() {
        let mut rng = Xorshift64::new(17);
        let mother = SizeRange::new(50, 120);
        let son = SizeRange::new(60, 200);
        for _ in 0..1000 {
            let (m, s) = sample_sizes(mother, son, &mut rng);
            assert!(m > s);
            assert!((60..=200).contains(&s));
        }
    }

    #[test]
    fn size_range_validation() {
        assert!(SizeRange::new(10, 20).validate("mother").is_ok());
        assert!(SizeRange::new(5, 5).validate("mother").is_ok());
        let err = SizeRange::new(30, 20).validate("son").unwrap_err();
        assert!(err.to_string().contains("son_low"), "{err}");
        assert!(SizeRange::new(0, 20).validate("son").is_err());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clamp_result_exceeds_son(mother: u32, son in 0_u32..u32::MAX - MOTHER_MARGIN) {
                let m = clamp_mother(mother, son);
                prop_assert!(m > son);
                prop_assert!(m == mother || m == son + MOTHER_MARGIN);
            }
        }
    }
}
