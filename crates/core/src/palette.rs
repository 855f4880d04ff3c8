//! Explicit color configuration passed into every drawer.
//!
//! A [`Palette`] names a color for each role a snowflake family draws with,
//! plus an `ink` gradient that families sample by position (chain index,
//! branch depth, vertex order). Presets are looked up by name; custom
//! palettes load from JSON with hex colors.

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::SnowflakeError;

const PALETTE_NAMES: &[&str] = &["classic", "frost", "aurora", "ink"];

/// Colors for one render, by drawing role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub background: Srgb,
    /// Gradient stops, sampled with [`Palette::sample`]. Never empty.
    pub ink: Vec<Srgb>,
    pub branch: Srgb,
    pub plate: Srgb,
    pub accent: Srgb,
    pub label: Srgb,
}

impl Palette {
    /// White on black.
    pub fn classic() -> Self {
        Self {
            name: "classic".into(),
            background: Srgb::BLACK,
            ink: vec![Srgb::WHITE],
            branch: Srgb::WHITE,
            plate: Srgb::WHITE,
            accent: Srgb::from_rgb8(200, 200, 200),
            label: Srgb::WHITE,
        }
    }

    pub fn frost() -> Self {
        Self {
            name: "frost".into(),
            background: Srgb::from_rgb8(0x08, 0x12, 0x2a),
            ink: vec![
                Srgb::from_rgb8(0x5f, 0xa8, 0xd3),
                Srgb::from_rgb8(0xbf, 0xe6, 0xff),
                Srgb::WHITE,
            ],
            branch: Srgb::from_rgb8(0xd6, 0xf0, 0xff),
            plate: Srgb::from_rgb8(0x9f, 0xd8, 0xff),
            accent: Srgb::from_rgb8(0xe8, 0xf7, 0xff),
            label: Srgb::from_rgb8(0xbf, 0xe6, 0xff),
        }
    }

    pub fn aurora() -> Self {
        Self {
            name: "aurora".into(),
            background: Srgb::from_rgb8(0x05, 0x05, 0x10),
            ink: vec![
                Srgb::from_rgb8(0x1d, 0xe9, 0xb6),
                Srgb::from_rgb8(0x3a, 0x86, 0xff),
                Srgb::from_rgb8(0xb3, 0x88, 0xff),
            ],
            branch: Srgb::from_rgb8(0x1d, 0xe9, 0xb6),
            plate: Srgb::from_rgb8(0x3a, 0x86, 0xff),
            accent: Srgb::from_rgb8(0xb3, 0x88, 0xff),
            label: Srgb::from_rgb8(0xe0, 0xe0, 0xff),
        }
    }

    /// Dark ink on paper.
    pub fn ink() -> Self {
        Self {
            name: "ink".into(),
            background: Srgb::from_rgb8(0xf7, 0xf4, 0xec),
            ink: vec![Srgb::from_rgb8(0x1b, 0x26, 0x3b), Srgb::from_rgb8(0x41, 0x5a, 0x77)],
            branch: Srgb::from_rgb8(0x1b, 0x26, 0x3b),
            plate: Srgb::from_rgb8(0x41, 0x5a, 0x77),
            accent: Srgb::from_rgb8(0x77, 0x8d, 0xa9),
            label: Srgb::from_rgb8(0x1b, 0x26, 0x3b),
        }
    }

    /// Looks up a preset by name.
    pub fn from_name(name: &str) -> Result<Self, SnowflakeError> {
        match name {
            "classic" => Ok(Self::classic()),
            "frost" => Ok(Self::frost()),
            "aurora" => Ok(Self::aurora()),
            "ink" => Ok(Self::ink()),
            _ => Err(SnowflakeError::InvalidPalette(format!(
                "unknown palette '{name}', expected one of: {}",
                PALETTE_NAMES.join(", ")
            ))),
        }
    }

    /// Parses a palette from JSON and checks that the ink gradient is non-empty.
    pub fn from_json(json: &str) -> Result<Self, SnowflakeError> {
        let palette: Palette = serde_json::from_str(json)
            .map_err(|e| SnowflakeError::InvalidPalette(e.to_string()))?;
        if palette.ink.is_empty() {
            return Err(SnowflakeError::InvalidPalette(
                "ink gradient requires at least 1 color".into(),
            ));
        }
        Ok(palette)
    }

    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Samples the ink gradient at `t` in [0, 1] (clamped; NaN reads as 0).
    pub fn sample(&self, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self.ink.len() {
            0 => self.branch,
            1 => self.ink[0],
            n => {
                let scaled = t * (n - 1) as f64;
                let idx = (scaled as usize).min(n - 2);
                self.ink[idx].mix(self.ink[idx + 1], scaled - idx as f64)
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_resolves() {
        for name in Palette::list_names() {
            let p = Palette::from_name(name).unwrap();
            assert_eq!(p.name, *name);
            assert!(!p.ink.is_empty());
        }
    }

    #[test]
    fn unknown_name_lists_valid_choices() {
        let err = Palette::from_name("sepia").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("sepia") && msg.contains("frost"), "got: {msg}");
    }

    #[test]
    fn classic_is_white_on_black() {
        let p = Palette::classic();
        assert_eq!(p.background, Srgb::BLACK);
        assert_eq!(p.sample(0.3), Srgb::WHITE);
    }

    #[test]
    fn sample_hits_first_and_last_stops() {
        let p = Palette::frost();
        assert_eq!(p.sample(0.0).to_hex(), p.ink[0].to_hex());
        assert_eq!(p.sample(1.0).to_hex(), p.ink[2].to_hex());
    }

    #[test]
    fn sample_clamps_and_tolerates_nan() {
        let p = Palette::aurora();
        assert_eq!(p.sample(-3.0).to_hex(), p.sample(0.0).to_hex());
        assert_eq!(p.sample(7.0).to_hex(), p.sample(1.0).to_hex());
        assert_eq!(p.sample(f64::NAN).to_hex(), p.sample(0.0).to_hex());
    }

    #[test]
    fn json_round_trip_preserves_palette() {
        let p = Palette::ink();
        let json = serde_json::to_string_pretty(&p).unwrap();
        assert!(json.contains("\"#f7f4ec\""));
        assert_eq!(Palette::from_json(&json).unwrap(), p);
    }

    #[test]
    fn from_json_rejects_empty_ink() {
        let mut p = Palette::classic();
        p.ink.clear();
        let json = serde_json::to_string(&p).unwrap();
        assert!(matches!(
            Palette::from_json(&json),
            Err(SnowflakeError::InvalidPalette(_))
        ));
    }

    #[test]
    fn from_json_rejects_bad_color() {
        let json = r##"{"name":"x","background":"#zzzzzz","ink":["#ffffff"],
            "branch":"#ffffff","plate":"#ffffff","accent":"#ffffff","label":"#ffffff"}"##;
        assert!(Palette::from_json(json).is_err());
    }
}
