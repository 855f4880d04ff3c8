//! Stellar plate: a hexagonal plate with ribs, an inner hexagon and small
//! hexagons capping each corner.

use serde_json::{json, Value};
use snowflake_core::params::{param_f64, param_u32};
use snowflake_core::{
    Drawer, Palette, Polygon, RandomSource, Segment, SnowflakeError, Surface, SymmetryGroup,
    Vector2D,
};
use tracing::debug;

use crate::{sample_sizes, SizeRange};

const DEFAULT_MOTHER: SizeRange = SizeRange::new(180, 320);
const DEFAULT_SON: SizeRange = SizeRange::new(60, 200);
/// Tip hexagon circumradius as a fraction of the mother's.
const DEFAULT_TIP_RATIO: f64 = 0.12;
const DEFAULT_RIB_THICKNESS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarPlateParams {
    pub mother: SizeRange,
    pub son: SizeRange,
    pub tip_ratio: f64,
    pub rib_thickness: u32,
}

impl Default for StellarPlateParams {
    fn default() -> Self {
        Self {
            mother: DEFAULT_MOTHER,
            son: DEFAULT_SON,
            tip_ratio: DEFAULT_TIP_RATIO,
            rib_thickness: DEFAULT_RIB_THICKNESS,
        }
    }
}

impl StellarPlateParams {
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
            tip_ratio: param_f64(params, "tip_ratio", DEFAULT_TIP_RATIO),
            rib_thickness: param_u32(params, "rib_thickness", DEFAULT_RIB_THICKNESS),
        }
    }

    pub fn validate(&self) -> Result<(), SnowflakeError> {
        self.mother.validate("mother")?;
        self.son.validate("son")?;
        if !(self.tip_ratio >= 0.0 && self.tip_ratio <= 1.0) {
            return Err(SnowflakeError::invalid_param(
                "tip_ratio",
                format!("must lie in [0, 1], got {}", self.tip_ratio),
            ));
        }
        if self.rib_thickness == 0 {
            return Err(SnowflakeError::invalid_param(
                "rib_thickness",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

/// The pieces of one stellar plate, origin-centered.
#[derive(Debug, Clone, PartialEq)]
pub struct StellarPlateFigure {
    pub mother: Polygon,
    pub ribs: Vec<Segment>,
    pub son: Polygon,
    pub tips: Vec<Polygon>,
}

#[derive(Debug, Clone, Default)]
pub struct StellarPlate {
    params: StellarPlateParams,
}

impl StellarPlate {
    pub fn new(params: StellarPlateParams) -> Result<Self, SnowflakeError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn from_json(params: &Value) -> Result<Self, SnowflakeError> {
        Self::new(StellarPlateParams::from_json(params))
    }

    pub fn settings(&self) -> &StellarPlateParams {
        &self.params
    }

    /// Samples sizes and lays out the plate. Ribs and tips are one base
    /// piece each, rotated through the six folds.
    pub fn figure(&self, rng: &mut dyn RandomSource) -> StellarPlateFigure {
        let (mother, son) = sample_sizes(self.params.mother, self.params.son, rng);
        let m = f64::from(mother);
        let hexagonal = SymmetryGroup::hexagonal();

        let rib = Segment::new(Vector2D::ZERO, Vector2D::new(m, 0.0));
        let tip = Polygon::regular(Vector2D::new(m, 0.0), m * self.params.tip_ratio, 6, 0.0);
        debug!(mother, son, "laid out stellar plate");

        StellarPlateFigure {
            mother: Polygon::regular(Vector2D::ZERO, m, 6, 0.0),
            ribs: hexagonal.rotations(&rib),
            son: Polygon::regular(Vector2D::ZERO, f64::from(son), 6, 0.0),
            tips: hexagonal.rotations(&tip),
        }
    }
}

impl Drawer for StellarPlate {
    fn name(&self) -> &'static str {
        "stellar-plate"
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        rng: &mut dyn RandomSource,
        palette: &Palette,
    ) -> Result<(), SnowflakeError> {
        let figure = self.figure(rng);
        let thickness = f64::from(self.params.rib_thickness);

        surface.fill_polygon(figure.mother.vertices(), palette.plate);
        for rib in &figure.ribs {
            surface.draw_line(rib.from, rib.to, palette.background, thickness);
        }
        surface.fill_polygon(figure.son.vertices(), palette.accent);
        for tip in &figure.tips {
            surface.fill_polygon(tip.vertices(), palette.branch);
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
            "tip_ratio": p.tip_ratio,
            "rib_thickness": p.rib_thickness,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "mother_low": {
                "type": "integer",
                "default": DEFAULT_MOTHER.low,
                "description": "Smallest outer hexagon circumradius"
            },
            "mother_high": {
                "type": "integer",
                "default": DEFAULT_MOTHER.high,
                "description": "Largest outer hexagon circumradius"
            },
            "son_low": {
                "type": "integer",
                "default": DEFAULT_SON.low,
                "description": "Smallest inner hexagon circumradius"
            },
            "son_high": {
                "type": "integer",
                "default": DEFAULT_SON.high,
                "description": "Largest inner hexagon circumradius"
            },
            "tip_ratio": {
                "type": "number",
                "default": DEFAULT_TIP_RATIO,
                "min": 0.0,
                "max": 1.0,
                "description": "Corner hexagon size relative to the outer hexagon"
            },
            "rib_thickness": {
                "type": "integer",
                "default": DEFAULT_RIB_THICKNESS,
                "min": 1,
                "description": "Stroke width of the six ribs"
            }
        })
    }
}
