//! The `Drawer` trait every snowflake family implements.
//!
//! The trait is object-safe so the registry and CLI can hold `dyn Drawer`
//! and switch families at runtime.

use serde_json::Value;

use crate::error::SnowflakeError;
use crate::palette::Palette;
use crate::random::RandomSource;
use crate::surface::Surface;

/// A snowflake family.
///
/// Drawers keep no state between calls: each [`draw`](Drawer::draw) is a
/// function of the drawer's parameters, the palette, and whatever it pulls
/// from `rng`. Geometry is origin-centered; callers wrap raw surfaces in
/// [`Centered`](crate::surface::Centered).
pub trait Drawer {
    /// Registry name, e.g. `"crystal"`.
    fn name(&self) -> &'static str;

    /// Draws one snowflake onto `surface`.
    fn draw(
        &self,
        surface: &mut dyn Surface,
        rng: &mut dyn RandomSource,
        palette: &Palette,
    ) -> Result<(), SnowflakeError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Type, default and description for each parameter.
    fn param_schema(&self) -> Value;
}
