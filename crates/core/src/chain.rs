//! Particle chains: tangent circles grown outward by a biased random walk.
//!
//! Particle 0 sits at the origin. Every later particle is placed so that it
//! touches the previous one: the distance between consecutive centers equals
//! the sum of their radii, which keeps the chain connected without overlap.

use tracing::trace;

use crate::color::Srgb;
use crate::error::SnowflakeError;
use crate::symmetry::Symmetric;
use crate::vector::Vector2D;

/// One drawn circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub center: Vector2D,
    pub radius: u32,
    pub color: Srgb,
}

impl Particle {
    /// A white particle.
    pub fn new(center: Vector2D, radius: u32) -> Self {
        Self {
            center,
            radius,
            color: Srgb::WHITE,
        }
    }
}

impl Symmetric for Particle {
    fn rotated(&self, theta: f64) -> Self {
        Self {
            center: self.center.rotate(theta),
            ..*self
        }
    }

    fn mirrored(&self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        Ok(Self {
            center: self.center.mirror(axis)?,
            ..*self
        })
    }
}

/// Center of a circle of radius `new_radius` touching the circle at `start`
/// with radius `start_radius`, in direction `dir`.
///
/// `dir` is normalized first, so only its heading matters. Returns
/// `SnowflakeError::DivideByZero` when `dir` is the zero vector.
pub fn next_center(
    start: Vector2D,
    start_radius: u32,
    dir: Vector2D,
    new_radius: u32,
) -> Result<Vector2D, SnowflakeError> {
    let heading = dir.unit()?;
    let gap = f64::from(start_radius) + f64::from(new_radius);
    Ok(start.add(heading.scale(gap)))
}

/// Ordered particles; index order is generation order and spatial adjacency.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleChain {
    particles: Vec<Particle>,
}

impl ParticleChain {
    /// Grows a chain of `count` particles.
    ///
    /// Particle 0 is `(origin, start_radius)`. For each following particle a
    /// direction is drawn first, then a radius; both samplers receive `rng`
    /// so they can share one random stream. `count == 0` yields an empty chain.
    ///
    /// Fails with `SnowflakeError::DivideByZero` if the direction sampler
    /// ever returns the zero vector.
    pub fn generate<R: ?Sized>(
        count: usize,
        start_radius: u32,
        rng: &mut R,
        mut radius_sampler: impl FnMut(&mut R) -> u32,
        mut direction_sampler: impl FnMut(&mut R) -> Vector2D,
    ) -> Result<Self, SnowflakeError> {
        let mut particles = Vec::with_capacity(count);
        if count == 0 {
            return Ok(Self { particles });
        }
        particles.push(Particle::new(Vector2D::ZERO, start_radius));
        for i in 1..count {
            let prev = particles[i - 1];
            let dir = direction_sampler(rng);
            let radius = radius_sampler(rng);
            let center = next_center(prev.center, prev.radius, dir, radius)?;
            trace!(index = i, x = center.x, y = center.y, radius, "placed particle");
            particles.push(Particle::new(center, radius));
        }
        Ok(Self { particles })
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    /// Assigns each particle a color from `shade(index, len)`.
    pub fn paint(&mut self, mut shade: impl FnMut(usize, usize) -> Srgb) {
        let len = self.particles.len();
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.color = shade(i, len);
        }
    }

    /// Largest distance from the origin to any particle's outer edge.
    pub fn reach(&self) -> f64 {
        self.particles
            .iter()
            .map(|p| p.center.magnitude() + f64::from(p.radius))
            .fold(0.0, f64::max)
    }
}

impl Symmetric for ParticleChain {
    fn rotated(&self, theta: f64) -> Self {
        Self {
            particles: self.particles.rotated(theta),
        }
    }

    fn mirrored(&self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        Ok(Self {
            particles: self.particles.mirrored(axis)?,
        })
    }
}

impl<'a> IntoIterator for &'a ParticleChain {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
