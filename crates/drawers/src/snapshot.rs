//! PNG persistence for rendered rasters.
//!
//! Feature-gated behind `png` (default on) so the registry can be used
//! without pulling in the `image` crate.

use std::path::Path;

use snowflake_core::{Raster, SnowflakeError, Surface};
use tracing::info;

/// Writes `raster` to `path` as a PNG.
///
/// The parent directory must already exist: it is never created, and a
/// missing directory yields `SnowflakeError::MissingDirectory` before any
/// file is touched. Encoding or write failures yield `SnowflakeError::Io`.
pub fn save(raster: &Raster, path: &Path) -> Result<(), SnowflakeError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(SnowflakeError::MissingDirectory(
                parent.display().to_string(),
            ));
        }
    }
    let img = image::RgbaImage::from_raw(raster.width(), raster.height(), raster.data().to_vec())
        .ok_or_else(|| SnowflakeError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SnowflakeError::Io(e.to_string()))?;
    info!(path = %path.display(), "saved snowflake");
    Ok(())
}
