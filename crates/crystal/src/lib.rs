#![deny(unsafe_code)]
//! Radial particle-chain snowflakes.
//!
//! One arm is grown as a chain of tangent circles walking mostly rightward
//! with normally distributed vertical jitter. The arm is then replicated
//! `fold_count` times around the center, and the same rotations are repeated
//! for a copy of the arm mirrored across an axis jittered around `(1, 1)`.

use serde_json::{json, Value};
use snowflake_core::params::{param_bool, param_f64, param_u32, param_usize};
use snowflake_core::{
    Drawer, Palette, ParticleChain, RandomSource, SnowflakeError, Surface, SymmetryGroup, Vector2D,
};
use tracing::debug;

/// Default number of particles per arm.
const DEFAULT_COUNT: usize = 50;
/// Default radius of the root particle at the center.
const DEFAULT_START_RADIUS: u32 = 4;
/// Default inclusive bounds for later particle radii.
const DEFAULT_RADIUS_LOW: u32 = 1;
const DEFAULT_RADIUS_HIGH: u32 = 10;
/// Default mean and standard deviation of the direction's y component.
const DEFAULT_DIRECTION_MEAN: f64 = 1.0;
const DEFAULT_DIRECTION_SD: f64 = 1.0;
/// Default standard deviation of the mirror axis jitter around (1, 1).
const DEFAULT_MIRROR_JITTER: f64 = 0.1;
const DEFAULT_FOLD_COUNT: u32 = 6;
/// Largest accepted particle count per arm.
pub const MAX_COUNT: usize = 10_000;

/// Tunable constants of the crystal family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrystalParams {
    /// Particles per arm, root included.
    pub count: usize,
    pub start_radius: u32,
    pub radius_low: u32,
    pub radius_high: u32,
    /// Each step heads along `(1, normal(direction_mean, direction_sd))`.
    pub direction_mean: f64,
    pub direction_sd: f64,
    /// Whether to add the mirrored set of arms.
    pub mirror: bool,
    pub mirror_jitter: f64,
    pub fold_count: u32,
}

impl Default for CrystalParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            start_radius: DEFAULT_START_RADIUS,
            radius_low: DEFAULT_RADIUS_LOW,
            radius_high: DEFAULT_RADIUS_HIGH,
            direction_mean: DEFAULT_DIRECTION_MEAN,
            direction_sd: DEFAULT_DIRECTION_SD,
            mirror: true,
            mirror_jitter: DEFAULT_MIRROR_JITTER,
            fold_count: DEFAULT_FOLD_COUNT,
        }
    }
}

impl CrystalParams {
    /// Extracts parameters from a JSON object, falling back to defaults.
    pub fn from_json(params: &Value) -> Self {
        Self {
            count: param_usize(params, "count", DEFAULT_COUNT),
            start_radius: param_u32(params, "start_radius", DEFAULT_START_RADIUS),
            radius_low: param_u32(params, "radius_low", DEFAULT_RADIUS_LOW),
            radius_high: param_u32(params, "radius_high", DEFAULT_RADIUS_HIGH),
            direction_mean: param_f64(params, "direction_mean", DEFAULT_DIRECTION_MEAN),
            direction_sd: param_f64(params, "direction_sd", DEFAULT_DIRECTION_SD),
            mirror: param_bool(params, "mirror", true),
            mirror_jitter: param_f64(params, "mirror_jitter", DEFAULT_MIRROR_JITTER),
            fold_count: param_u32(params, "fold_count", DEFAULT_FOLD_COUNT),
        }
    }

    pub fn validate(&self) -> Result<(), SnowflakeError> {
        if self.count > MAX_COUNT {
            return Err(SnowflakeError::invalid_param(
                "count",
                format!("{} exceeds the maximum of {MAX_COUNT}", self.count),
            ));
        }
        if self.radius_low > self.radius_high {
            return Err(SnowflakeError::invalid_param(
                "radius_low",
                format!(
                    "{} exceeds radius_high {}",
                    self.radius_low, self.radius_high
                ),
            ));
        }
        if !(self.direction_sd >= 0.0 && self.direction_sd.is_finite()) {
            return Err(SnowflakeError::invalid_param(
                "direction_sd",
                "must be a finite non-negative number",
            ));
        }
        if !(self.mirror_jitter >= 0.0 && self.mirror_jitter.is_finite()) {
            return Err(SnowflakeError::invalid_param(
                "mirror_jitter",
                "must be a finite non-negative number",
            ));
        }
        if !self.direction_mean.is_finite() {
            return Err(SnowflakeError::invalid_param(
                "direction_mean",
                "must be finite",
            ));
        }
        if self.fold_count == 0 {
            return Err(SnowflakeError::InvalidFoldCount(0));
        }
        Ok(())
    }
}

/// The radial particle-chain family.
#[derive(Debug, Clone)]
pub struct Crystal {
    params: CrystalParams,
}

impl Crystal {
    /// Creates a crystal drawer, rejecting inconsistent parameters.
    pub fn new(params: CrystalParams) -> Result<Self, SnowflakeError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn from_json(params: &Value) -> Result<Self, SnowflakeError> {
        Self::new(CrystalParams::from_json(params))
    }

    pub fn settings(&self) -> &CrystalParams {
        &self.params
    }

    /// Grows one arm and colors it along the palette's ink gradient.
    pub fn grow_arm(
        &self,
        rng: &mut dyn RandomSource,
        palette: &Palette,
    ) -> Result<ParticleChain, SnowflakeError> {
        let p = self.params;
        let (low, high) = (i64::from(p.radius_low), i64::from(p.radius_high));
        let mut arm = ParticleChain::generate(
            p.count,
            p.start_radius,
            rng,
            |r| r.uniform_int(low, high) as u32,
            |r| Vector2D::new(1.0, r.normal(p.direction_mean, p.direction_sd)),
        )?;
        arm.paint(|i, n| palette.sample(i as f64 / n.saturating_sub(1).max(1) as f64));
        debug!(particles = arm.len(), reach = arm.reach(), "grew crystal arm");
        Ok(arm)
    }

    /// Samples the symmetry group for one render: the configured fold count
    /// plus, when mirroring is on, an axis jittered around `(1, 1)`.
    pub fn sample_symmetry(
        &self,
        rng: &mut dyn RandomSource,
    ) -> Result<SymmetryGroup, SnowflakeError> {
        let axis = self.params.mirror.then(|| {
            Vector2D::new(
                1.0 + rng.normal(0.0, self.params.mirror_jitter),
                1.0 + rng.normal(0.0, self.params.mirror_jitter),
            )
        });
        SymmetryGroup::new(self.params.fold_count, axis)
    }
}

impl Default for Crystal {
    fn default() -> Self {
        Self {
            params: CrystalParams::default(),
        }
    }
}

impl Drawer for Crystal {
    fn name(&self) -> &'static str {
        "crystal"
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        rng: &mut dyn RandomSource,
        palette: &Palette,
    ) -> Result<(), SnowflakeError> {
        let arm = self.grow_arm(rng, palette)?;
        let group = self.sample_symmetry(rng)?;
        for copy in group.replicate(&arm)? {
            for particle in &copy {
                surface.fill_circle(particle.center, f64::from(particle.radius), particle.color);
            }
        }
        Ok(())
    }

    fn params(&self) -> Value {
        let p = &self.params;
        json!({
            "count": p.count,
            "start_radius": p.start_radius,
            "radius_low": p.radius_low,
            "radius_high": p.radius_high,
            "direction_mean": p.direction_mean,
            "direction_sd": p.direction_sd,
            "mirror": p.mirror,
            "mirror_jitter": p.mirror_jitter,
            "fold_count": p.fold_count,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "count": {
                "type": "integer",
                "default": DEFAULT_COUNT,
                "max": MAX_COUNT,
                "description": "Particles per arm, root included"
            },
            "start_radius": {
                "type": "integer",
                "default": DEFAULT_START_RADIUS,
                "description": "Radius of the root particle at the center"
            },
            "radius_low": {
                "type": "integer",
                "default": DEFAULT_RADIUS_LOW,
                "description": "Smallest radius of later particles (inclusive)"
            },
            "radius_high": {
                "type": "integer",
                "default": DEFAULT_RADIUS_HIGH,
                "description": "Largest radius of later particles (inclusive)"
            },
            "direction_mean": {
                "type": "number",
                "default": DEFAULT_DIRECTION_MEAN,
                "description": "Mean y component of each step direction (x is 1)"
            },
            "direction_sd": {
                "type": "number",
                "default": DEFAULT_DIRECTION_SD,
                "min": 0.0,
                "description": "Standard deviation of the step direction's y component"
            },
            "mirror": {
                "type": "boolean",
                "default": true,
                "description": "Add the mirrored set of arms"
            },
            "mirror_jitter": {
                "type": "number",
                "default": DEFAULT_MIRROR_JITTER,
                "min": 0.0,
                "description": "Standard deviation of the mirror axis around (1, 1)"
            },
            "fold_count": {
                "type": "integer",
                "default": DEFAULT_FOLD_COUNT,
                "min": 1,
                "description": "Order of rotational symmetry"
            }
        })
    }
}
