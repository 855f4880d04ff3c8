//! CPU raster surface backed by a `tiny_skia::Pixmap`.
//!
//! Circles, lines and polygons are anti-aliased paths. Label text is stamped
//! from the built-in bitmap font as pixel-aligned blocks without blending.
//! Everything outside the pixmap is clipped.

use tiny_skia::{
    Color, FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::color::Srgb;
use crate::error::SnowflakeError;
use crate::font;
use crate::surface::Surface;
use crate::vector::Vector2D;

/// Screen pixels per font pixel when drawing text.
pub const TEXT_SCALE: i64 = 2;

/// An RGBA8 image, row-major, top-left origin.
///
/// The background and every paint are opaque, so each pixel stays fully
/// opaque and the pixmap's premultiplied bytes are plain RGBA.
#[derive(Debug, Clone)]
pub struct Raster {
    pixmap: Pixmap,
}

fn paint(color: Srgb, anti_alias: bool) -> Paint<'static> {
    let [r, g, b, a] = color.to_rgba8();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = anti_alias;
    paint
}

fn finite(p: Vector2D) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

impl Raster {
    /// Creates a raster filled with `background`.
    ///
    /// Returns `SnowflakeError::InvalidDimensions` if either dimension is zero
    /// or the image is too large to allocate.
    pub fn new(width: u32, height: u32, background: Srgb) -> Result<Self, SnowflakeError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(SnowflakeError::InvalidDimensions)?;
        let [r, g, b, a] = background.to_rgba8();
        pixmap.fill(Color::from_rgba8(r, g, b, a));
        Ok(Self { pixmap })
    }

    /// Row-major RGBA8 bytes, `width * height * 4` long.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn into_data(self) -> Vec<u8> {
        self.pixmap.take()
    }

    /// The pixel at `(x, y)`, or `None` outside the raster.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Number of pixels exactly equal to `color`.
    pub fn count_pixels(&self, color: Srgb) -> usize {
        let rgba = color.to_rgba8();
        self.data().chunks_exact(4).filter(|px| *px == rgba).count()
    }

    /// Fills the pixel-aligned block at `(x, y)` without anti-aliasing.
    fn fill_block(&mut self, x: i64, y: i64, size: i64, paint: &Paint) {
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, size as f32, size as f32) {
            self.pixmap.fill_rect(rect, paint, Transform::identity(), None);
        }
    }

    fn fill(&mut self, path: &Path, color: Srgb) {
        self.pixmap.fill_path(
            path,
            &paint(color, true),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }
}

impl Surface for Raster {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f64, color: Srgb) {
        if !(finite(center) && radius.is_finite()) {
            return;
        }
        if radius < 0.5 {
            let (x, y) = (center.x.floor() as i64, center.y.floor() as i64);
            self.fill_block(x, y, 1, &paint(color, false));
            return;
        }
        let (cx, cy) = (center.x as f32, center.y as f32);
        if let Some(path) = PathBuilder::from_circle(cx, cy, radius as f32) {
            self.fill(&path, color);
        }
    }

    fn draw_line(&mut self, from: Vector2D, to: Vector2D, color: Srgb, thickness: f64) {
        if !(finite(from) && finite(to)) {
            return;
        }
        let width = thickness.max(1.0);
        if from == to {
            self.fill_circle(from, width / 2.0, color);
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };
        let stroke = Stroke {
            width: width as f32,
            line_cap: LineCap::Round,
            ..Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint(color, true),
            &stroke,
            Transform::identity(),
            None,
        );
    }

    fn fill_polygon(&mut self, points: &[Vector2D], color: Srgb) {
        if points.len() < 3 || !points.iter().copied().all(finite) {
            return;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x as f32, points[0].y as f32);
        for p in &points[1..] {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.fill(&path, color);
        }
    }

    fn draw_text(&mut self, text: &str, origin: Vector2D, color: Srgb) {
        if !finite(origin) {
            return;
        }
        let paint = paint(color, false);
        let (ox, oy) = (origin.x.round() as i64, origin.y.round() as i64);
        let advance = i64::from(font::ADVANCE) * TEXT_SCALE;
        for (i, c) in text.chars().enumerate() {
            let gx = ox + i as i64 * advance;
            for (r, &bits) in font::glyph(c).iter().enumerate() {
                for col in 0..font::GLYPH_WIDTH {
                    if bits >> (font::GLYPH_WIDTH - 1 - col) & 1 == 0 {
                        continue;
                    }
                    let x = gx + i64::from(col) * TEXT_SCALE;
                    let y = oy + r as i64 * TEXT_SCALE;
                    self.fill_block(x, y, TEXT_SCALE, &paint);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];
    const BLACK: [u8; 4] = [0, 0, 0, 255];

    fn canvas(size: u32) -> Raster {
        Raster::new(size, size, Srgb::BLACK).unwrap()
    }

    /// Pixels that differ from the black background at all.
    fn touched(r: &Raster) -> usize {
        r.data().chunks_exact(4).filter(|px| *px != BLACK).count()
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(matches!(
            Raster::new(0, 10, Srgb::BLACK),
            Err(SnowflakeError::InvalidDimensions)
        ));
        assert!(Raster::new(10, 0, Srgb::BLACK).is_err());
    }

    #[test]
    fn new_fills_background() {
        let r = Raster::new(4, 3, Srgb::from_hex("#102030").unwrap()).unwrap();
        assert_eq!(r.data().len(), 4 * 3 * 4);
        assert_eq!(r.width(), 4);
        assert_eq!(r.pixel(3, 2), Some([0x10, 0x20, 0x30, 255]));
        assert_eq!(r.pixel(4, 0), None);
    }

    #[test]
    fn filled_circle_area_brackets_pi_r_squared() {
        let mut r = canvas(64);
        r.fill_circle(Vector2D::new(32.0, 32.0), 10.0, Srgb::WHITE);
        let expected = std::f64::consts::PI * 100.0;
        let full = r.count_pixels(Srgb::WHITE) as f64;
        let any = touched(&r) as f64;
        assert!(full < expected && expected < any, "full {full} any {any}");
        assert_eq!(r.pixel(32, 32), Some(WHITE));
        assert_eq!(r.pixel(32, 45), Some(BLACK));
    }

    #[test]
    fn tiny_circle_marks_one_pixel() {
        let mut r = canvas(8);
        r.fill_circle(Vector2D::new(3.2, 5.7), 0.0, Srgb::WHITE);
        assert_eq!(r.count_pixels(Srgb::WHITE), 1);
        assert_eq!(r.pixel(3, 5), Some(WHITE));
    }

    #[test]
    fn shapes_off_canvas_are_clipped() {
        let mut r = canvas(16);
        r.fill_circle(Vector2D::new(-100.0, -100.0), 20.0, Srgb::WHITE);
        assert_eq!(touched(&r), 0);
        r.fill_circle(Vector2D::new(0.0, 0.0), 4.0, Srgb::WHITE);
        r.fill_polygon(
            &[
                Vector2D::new(-50.0, -50.0),
                Vector2D::new(500.0, -50.0),
                Vector2D::new(500.0, 2.0),
            ],
            Srgb::WHITE,
        );
        r.draw_text("CLIPPED", Vector2D::new(10.0, 12.0), Srgb::WHITE);
        assert!(r.count_pixels(Srgb::WHITE) > 0);
    }

    #[test]
    fn non_finite_geometry_is_ignored() {
        let mut r = canvas(8);
        r.fill_circle(Vector2D::new(f64::NAN, 1.0), 3.0, Srgb::WHITE);
        r.fill_polygon(
            &[
                Vector2D::new(0.0, 0.0),
                Vector2D::new(f64::INFINITY, 0.0),
                Vector2D::new(4.0, 4.0),
            ],
            Srgb::WHITE,
        );
        r.draw_line(Vector2D::ZERO, Vector2D::new(f64::NAN, 2.0), Srgb::WHITE, 2.0);
        assert_eq!(touched(&r), 0);
    }

    #[test]
    fn axis_aligned_square_covers_its_interior() {
        let mut r = canvas(16);
        let square = [
            Vector2D::new(2.0, 2.0),
            Vector2D::new(6.0, 2.0),
            Vector2D::new(6.0, 6.0),
            Vector2D::new(2.0, 6.0),
        ];
        r.fill_polygon(&square, Srgb::WHITE);
        for y in 3..5 {
            for x in 3..5 {
                assert_eq!(r.pixel(x, y), Some(WHITE), "({x}, {y})");
            }
        }
        assert_eq!(r.pixel(10, 10), Some(BLACK));
        assert_eq!(r.pixel(0, 0), Some(BLACK));
    }

    #[test]
    fn polygon_with_two_points_draws_nothing() {
        let mut r = canvas(8);
        r.fill_polygon(&[Vector2D::ZERO, Vector2D::new(5.0, 5.0)], Srgb::WHITE);
        assert_eq!(touched(&r), 0);
    }

    #[test]
    fn thick_horizontal_line_covers_its_band() {
        let mut r = canvas(32);
        r.draw_line(
            Vector2D::new(4.0, 16.0),
            Vector2D::new(28.0, 16.0),
            Srgb::WHITE,
            4.0,
        );
        for x in 4..28 {
            assert_eq!(r.pixel(x, 15), Some(WHITE), "x={x}");
            assert_eq!(r.pixel(x, 16), Some(WHITE), "x={x}");
        }
        assert_eq!(r.pixel(16, 20), Some(BLACK));
    }

    #[test]
    fn round_caps_extend_past_endpoints() {
        let mut r = canvas(32);
        r.draw_line(
            Vector2D::new(10.0, 16.0),
            Vector2D::new(20.0, 16.0),
            Srgb::WHITE,
            6.0,
        );
        assert_ne!(r.pixel(21, 16), Some(BLACK));
        assert_ne!(r.pixel(8, 16), Some(BLACK));
        assert_eq!(r.pixel(25, 16), Some(BLACK));
    }

    #[test]
    fn zero_length_line_draws_a_dot() {
        let mut r = canvas(16);
        let p = Vector2D::new(8.0, 8.0);
        r.draw_line(p, p, Srgb::WHITE, 3.0);
        assert!(touched(&r) > 0);
    }

    #[test]
    fn text_paints_glyph_pixels_in_color() {
        let mut r = canvas(64);
        let red = Srgb::from_hex("#ff0000").unwrap();
        r.draw_text("I", Vector2D::new(0.0, 0.0), red);
        // 'I' has 3 + 5 + 3 = 11 lit font pixels, each a 2x2 block.
        assert_eq!(r.count_pixels(red), 11 * 4);
        assert_eq!(touched(&r), 11 * 4);
    }

    #[test]
    fn into_data_matches_data() {
        let r = Raster::new(3, 2, Srgb::WHITE).unwrap();
        let bytes = r.data().to_vec();
        assert_eq!(r.into_data(), bytes);
    }
}
