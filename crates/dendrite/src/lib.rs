#![deny(unsafe_code)]
//! Radiating dendrite (fern) snowflakes.
//!
//! A straight main arm runs from the center along `+x`. Every `node_length`
//! units a branch leaves the arm at `branch_angle`, paired with its mirror
//! image across the arm; each branch is `rate` times shorter than the one
//! before it. The finished arm is repeated six times around the center.

use serde_json::{json, Value};
use snowflake_core::params::{param_f64, param_u32};
use snowflake_core::symmetry::mirror;
use snowflake_core::{
    Drawer, Palette, RandomSource, Segment, SnowflakeError, Surface, Symmetric, SymmetryGroup,
    Vector2D,
};
use tracing::debug;

/// Arms per dendrite; this family does not take a fold count.
pub const DENDRITE_FOLD: u32 = 6;

const DEFAULT_ARM_LENGTH: f64 = 420.0;
const DEFAULT_NODE_LENGTH: f64 = 36.0;
const DEFAULT_BRANCH_LENGTH: f64 = 140.0;
const DEFAULT_BRANCH_ANGLE_DEG: f64 = 60.0;
const DEFAULT_RATE: f64 = 0.88;
const DEFAULT_THICKNESS: u32 = 4;
const DEFAULT_ANGLE_JITTER_DEG: f64 = 4.0;
const DEFAULT_LENGTH_JITTER_LOW: f64 = 0.85;
const DEFAULT_LENGTH_JITTER_HIGH: f64 = 1.15;
/// Largest accepted number of branch nodes per arm.
pub const MAX_NODES: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DendriteParams {
    pub arm_length: f64,
    /// Spacing between branch nodes along the arm.
    pub node_length: f64,
    /// Length of the first branch before discounting.
    pub branch_length: f64,
    pub branch_angle_deg: f64,
    /// Discount applied to the branch length after every node.
    pub rate: f64,
    pub thickness: u32,
    /// Standard deviation of the per-branch angle perturbation, in degrees.
    pub angle_jitter_deg: f64,
    pub length_jitter_low: f64,
    pub length_jitter_high: f64,
}

impl Default for DendriteParams {
    fn default() -> Self {
        Self {
            arm_length: DEFAULT_ARM_LENGTH,
            node_length: DEFAULT_NODE_LENGTH,
            branch_length: DEFAULT_BRANCH_LENGTH,
            branch_angle_deg: DEFAULT_BRANCH_ANGLE_DEG,
            rate: DEFAULT_RATE,
            thickness: DEFAULT_THICKNESS,
            angle_jitter_deg: DEFAULT_ANGLE_JITTER_DEG,
            length_jitter_low: DEFAULT_LENGTH_JITTER_LOW,
            length_jitter_high: DEFAULT_LENGTH_JITTER_HIGH,
        }
    }
}

impl DendriteParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            arm_length: param_f64(params, "arm_length", DEFAULT_ARM_LENGTH),
            node_length: param_f64(params, "node_length", DEFAULT_NODE_LENGTH),
            branch_length: param_f64(params, "branch_length", DEFAULT_BRANCH_LENGTH),
            branch_angle_deg: param_f64(params, "branch_angle", DEFAULT_BRANCH_ANGLE_DEG),
            rate: param_f64(params, "rate", DEFAULT_RATE),
            thickness: param_u32(params, "thickness", DEFAULT_THICKNESS),
            angle_jitter_deg: param_f64(params, "angle_jitter", DEFAULT_ANGLE_JITTER_DEG),
            length_jitter_low: param_f64(params, "length_jitter_low", DEFAULT_LENGTH_JITTER_LOW),
            length_jitter_high: param_f64(
                params,
                "length_jitter_high",
                DEFAULT_LENGTH_JITTER_HIGH,
            ),
        }
    }

    pub fn validate(&self) -> Result<(), SnowflakeError> {
        let positive = |name: &str, v: f64| {
            if v > 0.0 && v.is_finite() {
                Ok(())
            } else {
                Err(SnowflakeError::invalid_param(
                    name,
                    format!("must be a positive finite number, got {v}"),
                ))
            }
        };
        positive("arm_length", self.arm_length)?;
        positive("node_length", self.node_length)?;
        positive("length_jitter_low", self.length_jitter_low)?;
        let nodes = self.node_span();
        if nodes > MAX_NODES as f64 {
            return Err(SnowflakeError::invalid_param(
                "node_length",
                format!(
                    "{} nodes along arm_length {} exceed the maximum of {MAX_NODES}",
                    nodes, self.arm_length
                ),
            ));
        }
        if !(self.branch_length >= 0.0 && self.branch_length.is_finite()) {
            return Err(SnowflakeError::invalid_param(
                "branch_length",
                "must be a finite non-negative number",
            ));
        }
        if !(self.rate > 0.0 && self.rate < 1.0) {
            return Err(SnowflakeError::invalid_param(
                "rate",
                format!("must lie strictly between 0 and 1, got {}", self.rate),
            ));
        }
        if self.thickness == 0 {
            return Err(SnowflakeError::invalid_param("thickness", "must be at least 1"));
        }
        if !(self.angle_jitter_deg >= 0.0 && self.angle_jitter_deg.is_finite()) {
            return Err(SnowflakeError::invalid_param(
                "angle_jitter",
                "must be a finite non-negative number",
            ));
        }
        if !self.branch_angle_deg.is_finite() {
            return Err(SnowflakeError::invalid_param("branch_angle", "must be finite"));
        }
        if !(self.length_jitter_high >= self.length_jitter_low
            && self.length_jitter_high.is_finite())
        {
            return Err(SnowflakeError::invalid_param(
                "length_jitter_high",
                "must be finite and at least length_jitter_low",
            ));
        }
        Ok(())
    }

    /// Nodes strictly inside the arm, as a float so oversized ratios can be
    /// rejected before any allocation.
    fn node_span(&self) -> f64 {
        ((self.arm_length / self.node_length).ceil() - 1.0).max(0.0)
    }

    /// Number of branch nodes along the arm.
    pub fn node_count(&self) -> usize {
        let span = self.node_span();
        if span.is_finite() {
            (span as usize).min(MAX_NODES)
        } else {
            0
        }
    }

    /// Distances of the branch nodes from the center, nearest first.
    ///
    /// Node `k` sits at exactly `k * node_length`.
    pub fn node_positions(&self) -> Vec<f64> {
        (1..=self.node_count())
            .map(|k| self.node_length * k as f64)
            .take_while(|&d| d < self.arm_length)
            .collect()
    }
}

/// A line segment with its stroke width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub segment: Segment,
    pub thickness: f64,
}

impl Symmetric for Stroke {
    fn rotated(&self, theta: f64) -> Self {
        Self {
            segment: self.segment.rotated(theta),
            thickness: self.thickness,
        }
    }

    fn mirrored(&self, axis: Vector2D) -> Result<Self, SnowflakeError> {
        Ok(Self {
            segment: self.segment.mirrored(axis)?,
            thickness: self.thickness,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct Dendrite {
    params: DendriteParams,
}

impl Dendrite {
    pub fn new(params: DendriteParams) -> Result<Self, SnowflakeError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn from_json(params: &Value) -> Result<Self, SnowflakeError> {
        Self::new(DendriteParams::from_json(params))
    }

    pub fn settings(&self) -> &DendriteParams {
        &self.params
    }

    /// Builds the base arm: the trunk first, then each branch followed by its
    /// mirror image across the trunk.
    ///
    /// Jitter is drawn here, once per branch, so every rotated arm of the
    /// final figure is identical.
    pub fn build_arm(&self, rng: &mut dyn RandomSource) -> Result<Vec<Stroke>, SnowflakeError> {
        let p = &self.params;
        let direction = Vector2D::new(1.0, 0.0);
        let trunk = f64::from(p.thickness);
        let mut strokes = vec![Stroke {
            segment: Segment::new(Vector2D::ZERO, direction.scale(p.arm_length)),
            thickness: trunk,
        }];

        let mut alpha = 1.0;
        for d in p.node_positions() {
            let start = direction.scale(d);
            let theta = (p.branch_angle_deg + rng.normal(0.0, p.angle_jitter_deg)).to_radians();
            let jitter = rng.uniform(p.length_jitter_low, p.length_jitter_high);
            let end = start.add(direction.rotate(theta).scale(alpha * p.branch_length * jitter));
            let branch = Stroke {
                segment: Segment::new(start, end),
                thickness: (trunk * alpha).max(1.0),
            };
            strokes.push(branch);
            strokes.push(mirror(&branch, direction)?);
            alpha *= p.rate;
        }
        debug!(strokes = strokes.len(), "built dendrite arm");
        Ok(strokes)
    }
}

impl Drawer for Dendrite {
    fn name(&self) -> &'static str {
        "radiating-dendrite"
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        rng: &mut dyn RandomSource,
        palette: &Palette,
    ) -> Result<(), SnowflakeError> {
        let arm = self.build_arm(rng)?;
        let group = SymmetryGroup::new(DENDRITE_FOLD, None)?;
        let arms = group.replicate(&arm)?;
        let depth = arm.len().saturating_sub(1).max(1) as f64;
        for copy in &arms {
            for (i, stroke) in copy.iter().enumerate() {
                let color = if i == 0 {
                    palette.branch
                } else {
                    palette.sample(i as f64 / depth)
                };
                surface.draw_line(stroke.segment.from, stroke.segment.to, color, stroke.thickness);
            }
        }
        Ok(())
    }

    fn params(&self) -> Value {
        let p = &self.params;
        json!({
            "arm_length": p.arm_length,
            "node_length": p.node_length,
            "branch_length": p.branch_length,
            "branch_angle": p.branch_angle_deg,
            "rate": p.rate,
            "thickness": p.thickness,
            "angle_jitter": p.angle_jitter_deg,
            "length_jitter_low": p.length_jitter_low,
            "length_jitter_high": p.length_jitter_high,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "arm_length": {
                "type": "number",
                "default": DEFAULT_ARM_LENGTH,
                "min": 0.0,
                "description": "Length of each main arm in pixels"
            },
            "node_length": {
                "type": "number",
                "default": DEFAULT_NODE_LENGTH,
                "min": 0.0,
                "description": "Spacing between branch nodes along the arm"
            },
            "branch_length": {
                "type": "number",
                "default": DEFAULT_BRANCH_LENGTH,
                "min": 0.0,
                "description": "Length of the innermost branch"
            },
            "branch_angle": {
                "type": "number",
                "default": DEFAULT_BRANCH_ANGLE_DEG,
                "description": "Angle between arm and branch in degrees"
            },
            "rate": {
                "type": "number",
                "default": DEFAULT_RATE,
                "min": 0.0,
                "max": 1.0,
                "description": "Branch length discount per node"
            },
            "thickness": {
                "type": "integer",
                "default": DEFAULT_THICKNESS,
                "min": 1,
                "description": "Stroke width of the main arm"
            },
            "angle_jitter": {
                "type": "number",
                "default": DEFAULT_ANGLE_JITTER_DEG,
                "min": 0.0,
                "description": "Standard deviation of branch angle noise in degrees"
            },
            "length_jitter_low": {
                "type": "number",
                "default": DEFAULT_LENGTH_JITTER_LOW,
                "description": "Lower bound of the branch length factor"
            },
            "length_jitter_high": {
                "type": "number",
                "default": DEFAULT_LENGTH_JITTER_HIGH,
                "description": "Upper bound of the branch length factor"
            }
        })
    }
}
