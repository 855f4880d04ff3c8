#![deny(unsafe_code)]
//! Snowflake family registry: maps kind names to drawers and renders them
//! onto a CPU raster.
//!
//! The CLI goes through this crate rather than naming family crates
//! directly, so adding a family means touching only [`SnowflakeKind`].

pub mod label;

#[cfg(feature = "png")]
pub mod snapshot;

use serde_json::Value;
use snowflake_core::{
    Centered, Drawer, Palette, RandomSource, Raster, SnowflakeError, Surface,
};
use snowflake_crystal::Crystal;
use snowflake_dendrite::Dendrite;
use snowflake_lattice::{StellarPlate, TriangularCrystal};
use tracing::debug;

/// All registered kind names, in menu order.
const KIND_NAMES: &[&str] = &[
    "crystal",
    "radiating-dendrite",
    "stellar-plate",
    "triangular-crystal",
];

/// Every snowflake family, dispatching [`Drawer`] to the wrapped drawer.
#[derive(Debug, Clone)]
pub enum SnowflakeKind {
    Crystal(Crystal),
    RadiatingDendrite(Dendrite),
    StellarPlate(StellarPlate),
    TriangularCrystal(TriangularCrystal),
}

impl SnowflakeKind {
    /// Constructs a drawer by name with parameters from `params`.
    ///
    /// Returns `SnowflakeError::UnknownKind` for unrecognized names and
    /// `InvalidParameter` when the family rejects a parameter.
    pub fn from_name(name: &str, params: &Value) -> Result<Self, SnowflakeError> {
        match name {
            "crystal" => Ok(Self::Crystal(Crystal::from_json(params)?)),
            "radiating-dendrite" => Ok(Self::RadiatingDendrite(Dendrite::from_json(params)?)),
            "stellar-plate" => Ok(Self::StellarPlate(StellarPlate::from_json(params)?)),
            "triangular-crystal" => {
                Ok(Self::TriangularCrystal(TriangularCrystal::from_json(params)?))
            }
            _ => Err(SnowflakeError::UnknownKind(name.to_string())),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        KIND_NAMES
    }

    fn inner(&self) -> &dyn Drawer {
        match self {
            Self::Crystal(d) => d,
            Self::RadiatingDendrite(d) => d,
            Self::StellarPlate(d) => d,
            Self::TriangularCrystal(d) => d,
        }
    }
}

impl Drawer for SnowflakeKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn draw(
        &self,
        surface: &mut dyn Surface,
        rng: &mut dyn RandomSource,
        palette: &Palette,
    ) -> Result<(), SnowflakeError> {
        self.inner().draw(surface, rng, palette)
    }

    fn params(&self) -> Value {
        self.inner().params()
    }

    fn param_schema(&self) -> Value {
        self.inner().param_schema()
    }
}

/// Renders one snowflake centered on a fresh `size` x `size` raster filled
/// with the palette background.
pub fn render(
    drawer: &dyn Drawer,
    size: u32,
    palette: &Palette,
    rng: &mut dyn RandomSource,
) -> Result<Raster, SnowflakeError> {
    let mut raster = Raster::new(size, size, palette.background)?;
    {
        let mut centered = Centered::new(&mut raster);
        drawer.draw(&mut centered, rng, palette)?;
    }
    debug!(kind = drawer.name(), size, "rendered snowflake");
    Ok(raster)
}
