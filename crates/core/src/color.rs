//! sRGB colors for snowflake drawing.
//!
//! [`Srgb`] holds components in [0, 1] and serializes as `"#rrggbb"`.
//! Gradient mixing happens in linear light so that blends between a dark
//! and a bright stop do not sag in the middle.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SnowflakeError;

/// sRGB color with components in [0, 1].
///
/// The hex round-trip quantizes to 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const BLACK: Srgb = Srgb { r: 0.0, g: 0.0, b: 0.0 };
    pub const WHITE: Srgb = Srgb { r: 1.0, g: 1.0, b: 1.0 };

    /// Builds a color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r) / 255.0,
            g: f64::from(g) / 255.0,
            b: f64::from(b) / 255.0,
        }
    }

    /// Parses `"#rrggbb"` or `"rrggbb"`, case insensitive.
    pub fn from_hex(hex: &str) -> Result<Srgb, SnowflakeError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(SnowflakeError::InvalidColor(format!(
                "expected 6 hex digits, got '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|e| SnowflakeError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Srgb::from_rgb8(
            channel(0..2, "red")?,
            channel(2..4, "green")?,
            channel(4..6, "blue")?,
        ))
    }

    /// Formats as lower-case `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Quantizes to opaque RGBA8.
    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), 255]
    }

    /// Mixes toward `other` by `t` in [0, 1], interpolating in linear light.
    pub fn mix(self, other: Srgb, t: f64) -> Srgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let lerp = |a: f64, b: f64| {
            let (la, lb) = (to_linear(a), to_linear(b));
            to_srgb(la + (lb - la) * t)
        };
        Srgb {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

fn to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_accepts_with_and_without_hash() {
        let a = Srgb::from_hex("#ff8000").unwrap();
        let b = Srgb::from_hex("FF8000").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_rgba8(), [255, 128, 0, 255]);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(matches!(
            Srgb::from_hex("#fff"),
            Err(SnowflakeError::InvalidColor(_))
        ));
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Srgb::from_hex("#gg0000").is_err());
    }

    #[test]
    fn from_hex_rejects_multibyte_input_without_panicking() {
        assert!(Srgb::from_hex("ééé").is_err());
    }

    #[test]
    fn hex_round_trip_is_stable() {
        for hex in ["#000000", "#ffffff", "#0a1b2c", "#9fd8ff"] {
            assert_eq!(Srgb::from_hex(hex).unwrap().to_hex(), hex);
        }
    }

    #[test]
    fn to_rgba8_clamps_out_of_range_components() {
        let c = Srgb { r: 1.5, g: -0.2, b: 0.5 };
        assert_eq!(c.to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn mix_endpoints_return_inputs() {
        let a = Srgb::from_hex("#102030").unwrap();
        let b = Srgb::from_hex("#f0e0d0").unwrap();
        assert_eq!(a.mix(b, 0.0).to_hex(), a.to_hex());
        assert_eq!(a.mix(b, 1.0).to_hex(), b.to_hex());
    }

    #[test]
    fn mix_midpoint_in_linear_light_is_brighter_than_naive() {
        let mid = Srgb::BLACK.mix(Srgb::WHITE, 0.5);
        assert!(mid.r > 0.5, "linear-light midpoint should exceed 0.5, got {}", mid.r);
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&Srgb::WHITE).unwrap();
        assert_eq!(json, "\"#ffffff\"");
        let back: Srgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Srgb::WHITE);
    }
}
