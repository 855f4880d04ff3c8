//! Line segments and polygons as symmetric geometry.

use crate::error::SnowflakeError;
use crate::symmetry::Symmetric;
use crate::vector::Vector2D;

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Vector2D,
    pub to: Vector2D,
}

impl Segment {
    pub fn new(from: Vector2D, to: Vector2D) -> Self {
        Self { from, to }
    }

    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }
}

impl Symmetric for Segment {
    fn rotated(&self, theta: f64) -> Self {
        Self::new(self.from.rotate(theta), self.to.rotate(theta))
    }

    fn mirrored(&self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        Ok(Self::new(self.from.mirror(axis)?, self.to.mirror(axis)?))
    }
}

/// A closed polygon given by its vertices in order.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2D>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vector2D>) -> Self {
        Self { vertices }
    }

    /// Regular `sides`-gon of circumradius `radius`, centered at `center`,
    /// built by rotating a radius vector in steps of `2π / sides`. The first
    /// vertex sits at angle `phase`.
    pub fn regular(center: Vector2D, radius: f64, sides: u32, phase: f64) -> Self {
        let spoke = Vector2D::from_polar(radius, phase);
        let step = std::f64::consts::TAU / f64::from(sides.max(1));
        let vertices = (0..sides)
            .map(|k| center.add(spoke.rotate(f64::from(k) * step)))
            .collect();
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vector2D] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl Symmetric for Polygon {
    fn rotated(&self, theta: f64) -> Self {
        Self::new(self.vertices.rotated(theta))
    }

    fn mirrored(&self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        Ok(Self::new(self.vertices.mirrored(axis)?))
    }
}
