//! Triangular crystal: an upward mother triangle, a son triangle turned by
//! 60 degrees, and a dot on every vertex.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use serde_json::{json, Value};
use snowflake_core::params::param_u32;
use snowflake_core::{
    Drawer, Palette, Polygon, RandomSource, SnowflakeError, Surface, SymmetryGroup, Vector2D,
};
use tracing::debug;

use crate::{sample_sizes, SizeRange};

const DEFAULT_MOTHER: SizeRange = SizeRange::new(150, 300);
const DEFAULT_SON: SizeRange = SizeRange::new(50, 180);
const DEFAULT_DOT_RADIUS: u32 = 8;
const TRIANGLE_FOLD: u32 = 3;
/// Surface y grows downward, so a first vertex at -90° points up on screen.
const UP: f64 = -FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularCrystalParams {
    pub mother: SizeRange,
    pub son: SizeRange,
    pub dot_radius: u32,
}

impl Default for TriangularCrystalParams {
    fn default() -> Self {
        Self {
            mother: DEFAULT_MOTHER,
            son: DEFAULT_SON,
            dot_radius: DEFAULT_DOT_RADIUS,
        }
    }
}

impl TriangularCrystalParams {
    pub fn from_json(params: &Value) -> Self {
        Self {
            mother: SizeRange::new(
                param_u32(params, "mother_low", DEFAULT_MOTHER.low),
                param_u32(params, "mother_high", DEFAULT_MOTHER.high),
            ),
            son: SizeRange::new(
                param_u32(params, "son_low", DEFAULT_SON.low),
                param_u32(params, "son_high", DEFAULT_SON.high),
            ),
            dot_radius: param_u32(params, "dot_radius", DEFAULT_DOT_RADIUS),
        }
    }

    pub fn validate(&self) -> Result<(), SnowflakeError> {
        self.mother.validate("mother")?;
        self.son.validate("son")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TriangularFigure {
    pub mother: Polygon,
    pub son: Polygon,
    /// Vertex dots, grouped per rotation: mother vertex then son vertex.
    pub dots: Vec<Vec<Vector2D>>,
}

#[derive(Debug, Clone, Default)]
pub struct TriangularCrystal {
    params: TriangularCrystalParams,
}

impl TriangularCrystal {
    pub fn new(params: TriangularCrystalParams) -> Result<Self, SnowflakeError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn from_json(params: &Value) -> Result<Self, SnowflakeError> {
        Self::new(TriangularCrystalParams::from_json(params))
    }

    pub fn settings(&self) -> &TriangularCrystalParams {
        &self.params
    }

    pub fn figure(&self, rng: &mut dyn RandomSource) -> Result<TriangularFigure, SnowflakeError> {
        let (mother, son) = sample_sizes(self.params.mother, self.params.son, rng);
        let mother = Polygon::regular(Vector2D::ZERO, f64::from(mother), TRIANGLE_FOLD, UP);
        let son = Polygon::regular(
            Vector2D::ZERO,
            f64::from(son),
            TRIANGLE_FOLD,
            UP + FRAC_PI_3,
        );
        let base = vec![mother.vertices()[0], son.vertices()[0]];
        let dots = SymmetryGroup::new(TRIANGLE_FOLD, None)?.rotations(&base);
        debug!(dots = dots.len() * base.len(), "laid out triangular crystal");
        Ok(TriangularFigure { mother, son, dots })
    }
}

impl Drawer for TriangularCrystal {
    fn name(&self) -> &'static str {
        "triangular-crystal"
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        rng: &mut dyn RandomSource,
        palette: &Palette,
    ) -> Result<(), SnowflakeError> {
        let figure = self.figure(rng)?;
        let radius = f64::from(self.params.dot_radius);

        surface.fill_polygon(figure.mother.vertices(), palette.plate);
        surface.fill_polygon(figure.son.vertices(), palette.accent);
        for dot in figure.dots.iter().flatten() {
            surface.fill_circle(*dot, radius, palette.branch);
        }
        Ok(())
    }

    fn params(&self) -> Value {
        let p = &self.params;
        json!({
            "mother_low": p.mother.low,
            "mother_high": p.mother.high,
            "son_low": p.son.low,
            "son_high": p.son.high,
            "dot_radius": p.dot_radius,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "mother_low": {
                "type": "integer",
                "default": DEFAULT_MOTHER.low,
                "description": "Smallest outer triangle circumradius"
            },
            "mother_high": {
                "type": "integer",
                "default": DEFAULT_MOTHER.high,
                "description": "Largest outer triangle circumradius"
            },
            "son_low": {
                "type": "integer",
                "default": DEFAULT_SON.low,
                "description": "Smallest inner triangle circumradius"
            },
            "son_high": {
                "type": "integer",
                "default": DEFAULT_SON.high,
                "description": "Largest inner triangle circumradius"
            },
            "dot_radius": {
                "type": "integer",
                "default": DEFAULT_DOT_RADIUS,
                "description": "Radius of the vertex dots"
            }
        })
    }
}
