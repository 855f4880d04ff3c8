//! N-fold rotational symmetry with an optional mirror axis.
//!
//! A [`SymmetryGroup`] turns one base arm into the full figure. Anything that
//! can be rotated about the origin and reflected across a line through it
//! implements [`Symmetric`]: points, particles, chains, segments, polygons.
//!
//! Composition order: the rotations of the base come first (fold index
//! ascending), then the rotations of the *mirrored base*. The mirror is
//! applied once to the base, not to each rotated copy. Drawers paint copies in
//! exactly this order, which fixes the z-order of overlapping fills.

use std::f64::consts::TAU;

use tracing::debug;

use crate::error::SnowflakeError;
use crate::vector::Vector2D;

/// Geometry that can be rotated about the origin and mirrored across an axis.
pub trait Symmetric: Sized {
    /// A copy rotated counter-clockwise by `theta` radians about the origin.
    fn rotated(&self, theta: f64) -> Self;

    /// A copy reflected across the line through the origin along `axis`.
    fn mirrored(&self, axis: Vector2D) -> Result<Self, SnowflakeError>;
}

impl Symmetric for Vector2D {
    fn rotated(&self, theta: f64) -> Self {
        self.rotate(theta)
    }

    fn mirrored(&self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        self.mirror(axis)
    }
}

impl<T: Symmetric> Symmetric for Vec<T> {
    fn rotated(&self, theta: f64) -> Self {
        self.iter().map(|item| item.rotated(theta)).collect()
    }

    fn mirrored(&self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        self.iter().map(|item| item.mirrored(axis)).collect()
    }
}

/// Reflects `shape` across `axis`.
pub fn mirror<T: Symmetric>(shape: &T, axis: Vector2D) -> Result<T, SnowflakeError> {
    shape.mirrored(axis)
}

/// Fold count plus optional mirror axis, consumed once per render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetryGroup {
    fold_count: u32,
    mirror_axis: Option<Vector2D>,
}

impl SymmetryGroup {
    /// Creates a group with `fold_count` rotations and an optional mirror.
    ///
    /// Returns `SnowflakeError::InvalidFoldCount` for zero folds and
    /// `SnowflakeError::DivideByZero` for a zero-length mirror axis.
    pub fn new(fold_count: u32, mirror_axis: Option<Vector2D>) -> Result<Self, SnowflakeError> {
        if fold_count == 0 {
            return Err(SnowflakeError::InvalidFoldCount(fold_count));
        }
        if let Some(axis) = mirror_axis {
            axis.unit()?;
        }
        Ok(Self {
            fold_count,
            mirror_axis,
        })
    }

    /// Six folds, no mirror.
    pub fn hexagonal() -> Self {
        Self {
            fold_count: 6,
            mirror_axis: None,
        }
    }

    pub fn fold_count(&self) -> u32 {
        self.fold_count
    }

    pub fn mirror_axis(&self) -> Option<Vector2D> {
        self.mirror_axis
    }

    /// Angle between consecutive copies, `2π / fold_count`.
    pub fn angle_step(&self) -> f64 {
        TAU / f64::from(self.fold_count)
    }

    /// `fold_count` copies of `base`, copy `k` rotated by `k * angle_step()`.
    /// Copy 0 is `base` unchanged.
    pub fn rotations<T: Symmetric>(&self, base: &T) -> Vec<T> {
        let step = self.angle_step();
        (0..self.fold_count)
            .map(|k| base.rotated(f64::from(k) * step))
            .collect()
    }

    /// The full figure: rotations of `base`, followed (when a mirror axis is
    /// set) by rotations of `base` mirrored once across that axis.
    pub fn replicate<T: Symmetric>(&self, base: &T) -> Result<Vec<T>, SnowflakeError> {
        let mut copies = self.rotations(base);
        if let Some(axis) = self.mirror_axis {
            let reflected = base.mirrored(axis)?;
            copies.extend(self.rotations(&reflected));
        }
        debug!(
            folds = self.fold_count,
            mirrored = self.mirror_axis.is_some(),
            copies = copies.len(),
            "replicated base arm"
        );
        Ok(copies)
    }
}
