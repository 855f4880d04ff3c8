//! Caption text stamped onto rendered snowflakes.

use serde_json::Value;
use snowflake_core::fmt::format_significant;
use snowflake_core::font::{text_width, GLYPH_HEIGHT};
use snowflake_core::raster::TEXT_SCALE;
use snowflake_core::{Drawer, Palette, Surface, Vector2D};

/// Significant digits for parameter values in captions.
pub const CAPTION_PRECISION: usize = 3;
/// Distance of the caption from the top-left corner, in pixels.
const MARGIN: f64 = 8.0;
/// Vertical gap between wrapped caption lines, in pixels.
const LINE_GAP: i64 = 4;

/// Builds an upper-case caption: kind, batch index, then every numeric
/// parameter as `KEY=VALUE`.
///
/// ```text
/// CRYSTAL #002 COUNT=50 DIRECTION_MEAN=1 ...
/// ```
pub fn caption(drawer: &dyn Drawer, index: usize) -> String {
    let mut text = format!("{} #{index:03}", drawer.name());
    if let Value::Object(params) = drawer.params() {
        for (key, value) in &params {
            if let Some(v) = value.as_f64() {
                text.push(' ');
                text.push_str(key);
                text.push('=');
                text.push_str(&format_significant(v, CAPTION_PRECISION));
            }
        }
    }
    text.to_uppercase()
}

/// Splits `caption` into lines no wider than `max_width` pixels, breaking at
/// spaces. A single word wider than the limit gets a line of its own.
pub fn wrap(caption: &str, max_width: f64) -> Vec<String> {
    let fits = |s: &str| (i64::from(text_width(s)) * TEXT_SCALE) as f64 <= max_width;
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in caption.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if fits(&candidate) {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draws `caption` at the top-left corner of `surface` in the palette's
/// label color, wrapping to the surface width.
pub fn annotate(surface: &mut dyn Surface, caption: &str, palette: &Palette) {
    let max_width = f64::from(surface.width()) - 2.0 * MARGIN;
    let line_height = (i64::from(GLYPH_HEIGHT) * TEXT_SCALE + LINE_GAP) as f64;
    for (i, line) in wrap(caption, max_width).iter().enumerate() {
        let origin = Vector2D::new(MARGIN, MARGIN + i as f64 * line_height);
        surface.draw_text(line, origin, palette.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use snowflake_core::{DrawOp, Raster, Recorder};

    use crate::SnowflakeKind;

    #[test]
    fn caption_names_kind_index_and_params() {
        let kind = SnowflakeKind::from_name("radiating-dendrite", &json!({})).unwrap();
        let text = caption(&kind, 2);
        assert!(text.starts_with("RADIATING-DENDRITE #002"), "{text}");
        assert!(text.contains("RATE=0.88"), "{text}");
        assert!(text.contains("ARM_LENGTH=420"), "{text}");
        assert_eq!(text, text.to_uppercase());
    }

    #[test]
    fn caption_rounds_to_three_significant_digits() {
        let kind =
            SnowflakeKind::from_name("radiating-dendrite", &json!({"rate": 0.123456})).unwrap();
        assert!(caption(&kind, 0).contains("RATE=0.123"));
    }

    #[test]
    fn caption_skips_non_numeric_params() {
        let kind = SnowflakeKind::from_name("crystal", &json!({})).unwrap();
        let text = caption(&kind, 0);
        assert!(!text.contains("MIRROR="), "{text}");
        assert!(text.contains("FOLD_COUNT=6"), "{text}");
    }

    #[test]
    fn wrap_keeps_lines_within_width() {
        let text = "ONE TWO THREE FOUR FIVE SIX SEVEN";
        let max = 100.0;
        let lines = wrap(text, max);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!((i64::from(text_width(line)) * TEXT_SCALE) as f64 <= max, "{line}");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn wrap_puts_overlong_word_on_its_own_line() {
        let lines = wrap("A ABCDEFGHIJKLMNOP B", 30.0);
        assert_eq!(lines, vec!["A", "ABCDEFGHIJKLMNOP", "B"]);
    }

    #[test]
    fn wrap_of_empty_caption_is_empty() {
        assert!(wrap("   ", 100.0).is_empty());
    }

    #[test]
    fn annotate_draws_at_top_left_in_label_color() {
        let palette = Palette::aurora();
        let mut rec = Recorder::new(2000, 2000);
        annotate(&mut rec, "CRYSTAL #000", &palette);
        assert_eq!(
            rec.ops(),
            &[DrawOp::Text {
                text: "CRYSTAL #000".into(),
                origin: Vector2D::new(MARGIN, MARGIN),
                color: palette.label,
            }]
        );
    }

    #[test]
    fn annotate_lights_pixels_on_a_raster() {
        let palette = Palette::classic();
        let mut raster = Raster::new(200, 60, palette.background).unwrap();
        annotate(&mut raster, "HI", &palette);
        assert!(raster.count_pixels(palette.label) > 0);
        assert_eq!(raster.pixel(0, 0), Some(palette.background.to_rgba8()));
    }
}
