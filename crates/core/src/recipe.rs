//! Reproducible description of one image in a rendered batch.

use serde::{Deserialize, Serialize};

use crate::error::SnowflakeError;

/// Everything needed to recreate one snowflake image.
///
/// The batch shares a single random stream seeded with `seed`; `index` is the
/// image's position in that batch, so reproducing image `n` means replaying
/// images `0..n` from the same seed first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub kind: String,
    pub size: u32,
    pub seed: u64,
    pub index: usize,
    pub params: serde_json::Value,
}

impl Recipe {
    /// Creates a recipe with empty params and index 0.
    pub fn new(kind: &str, size: u32, seed: u64) -> Self {
        Self {
            kind: kind.to_string(),
            size,
            seed,
            index: 0,
            params: serde_json::Value::Object(serde_json::Map::new()),
        }
    }

    /// The same recipe at another batch position.
    pub fn at(&self, index: usize) -> Self {
        Self {
            index,
            ..self.clone()
        }
    }

    /// Checks that the square canvas is non-empty and addressable.
    pub fn validate(&self) -> Result<(), SnowflakeError> {
        if self.size == 0 {
            return Err(SnowflakeError::InvalidDimensions);
        }
        (self.size as usize)
            .checked_mul(self.size as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or(SnowflakeError::InvalidDimensions)?;
        Ok(())
    }
}
