//! Two-dimensional vector value type.
//!
//! [`Vector2D`] is a plain `Copy` value with named, pure operations. The
//! arithmetic is delegated to `glam::DVec2`; the wrapper exists so that
//! normalization of a zero vector surfaces as [`SnowflakeError::DivideByZero`]
//! instead of silently producing NaN.
//!
//! Equality is exact component comparison with no epsilon.

use glam::DVec2;

use crate::error::SnowflakeError;

/// A 2D vector (or point) in origin-centered drawing coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    /// The origin `(0, 0)`.
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Builds a vector of length `radius` at angle `theta` radians from +x.
    pub fn from_polar(radius: f64, theta: f64) -> Self {
        (DVec2::from_angle(theta) * radius).into()
    }

    pub fn add(self, other: Vector2D) -> Self {
        (self.as_dvec2() + other.as_dvec2()).into()
    }

    pub fn sub(self, other: Vector2D) -> Self {
        (self.as_dvec2() - other.as_dvec2()).into()
    }

    pub fn scale(self, c: f64) -> Self {
        (self.as_dvec2() * c).into()
    }

    pub fn dot(self, other: Vector2D) -> f64 {
        self.as_dvec2().dot(other.as_dvec2())
    }

    pub fn distance(self, other: Vector2D) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    pub fn magnitude(self) -> f64 {
        self.as_dvec2().length()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Returns `SnowflakeError::DivideByZero` for the zero vector.
    pub fn unit(self) -> Result<Self, SnowflakeError> {
        let len = self.magnitude();
        if len == 0.0 {
            return Err(SnowflakeError::DivideByZero);
        }
        Ok(Self::new(self.x / len, self.y / len))
    }

    /// Returns this vector rotated counter-clockwise by `theta` radians.
    pub fn rotate(self, theta: f64) -> Self {
        DVec2::from_angle(theta).rotate(self.as_dvec2()).into()
    }

    /// Rotates this vector in place, counter-clockwise by `theta` radians.
    pub fn rotate_mut(&mut self, theta: f64) {
        *self = self.rotate(theta);
    }

    /// Counter-clockwise perpendicular `(-y, x)`.
    pub fn perp(self) -> Self {
        self.as_dvec2().perp().into()
    }

    /// Projection of `self` onto the line along `axis`:
    /// `(self · axis / |axis|) * unit(axis)`.
    pub fn project(self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        let u = axis.unit()?;
        Ok(u.scale(self.dot(axis) / axis.magnitude()))
    }

    /// Reflection of `self` across the line through the origin along `axis`:
    /// `2 * project(self, axis) - self`.
    pub fn mirror(self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        Ok(self.project(axis)?.scale(2.0).sub(self))
    }

    fn as_dvec2(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        DVec2::new(v.x, v.y)
    }
}
