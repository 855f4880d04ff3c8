//! The drawing surface seam between snowflake geometry and pixels.
//!
//! Drawers only ever write through [`Surface`]; they never read pixels back.
//! [`Centered`] maps origin-centered geometry onto a surface whose origin is
//! its top-left corner.

use crate::color::Srgb;
use crate::vector::Vector2D;

/// A write-only 2D canvas.
///
/// Object-safe: drawers receive `&mut dyn Surface` borrowed for the duration
/// of a single draw call.
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn fill_circle(&mut self, center: Vector2D, radius: f64, color: Srgb);

    fn draw_line(&mut self, from: Vector2D, to: Vector2D, color: Srgb, thickness: f64);

    fn fill_polygon(&mut self, points: &[Vector2D], color: Srgb);

    /// Draws `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Vector2D, color: Srgb);
}

/// Adapter that shifts every coordinate by half the surface size, so
/// `(0, 0)` lands in the middle of the wrapped surface.
pub struct Centered<'a> {
    inner: &'a mut dyn Surface,
    offset: Vector2D,
}

impl<'a> Centered<'a> {
    pub fn new(inner: &'a mut dyn Surface) -> Self {
        let offset = Vector2D::new(
            f64::from(inner.width() / 2),
            f64::from(inner.height() / 2),
        );
        Self { inner, offset }
    }

    /// The pixel position that geometry origin maps to.
    pub fn offset(&self) -> Vector2D {
        self.offset
    }
}

impl Surface for Centered<'_> {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f64, color: Srgb) {
        self.inner.fill_circle(center.add(self.offset), radius, color);
    }

    fn draw_line(&mut self, from: Vector2D, to: Vector2D, color: Srgb, thickness: f64) {
        self.inner
            .draw_line(from.add(self.offset), to.add(self.offset), color, thickness);
    }

    fn fill_polygon(&mut self, points: &[Vector2D], color: Srgb) {
        let shifted: Vec<Vector2D> = points.iter().map(|p| p.add(self.offset)).collect();
        self.inner.fill_polygon(&shifted, color);
    }

    fn draw_text(&mut self, text: &str, origin: Vector2D, color: Srgb) {
        self.inner.draw_text(text, origin.add(self.offset), color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{DrawOp, Recorder};

    #[test]
    fn surface_trait_is_object_safe() {
        let mut rec = Recorder::new(8, 8);
        let surface: &mut dyn Surface = &mut rec;
        surface.fill_circle(Vector2D::ZERO, 1.0, Srgb::WHITE);
        assert_eq!(rec.ops().len(), 1);
    }

    #[test]
    fn centered_offsets_by_half_size() {
        let mut rec = Recorder::new(1024, 1024);
        {
            let mut stage = Centered::new(&mut rec);
            assert_eq!(stage.offset(), Vector2D::new(512.0, 512.0));
            stage.fill_circle(Vector2D::new(10.0, -20.0), 3.0, Srgb::WHITE);
        }
        assert_eq!(rec.circle_centers(), vec![Vector2D::new(522.0, 492.0)]);
    }

    #[test]
    fn centered_shifts_every_primitive() {
        let mut rec = Recorder::new(100, 60);
        {
            let mut stage = Centered::new(&mut rec);
            stage.draw_line(Vector2D::ZERO, Vector2D::new(1.0, 1.0), Srgb::WHITE, 2.0);
            stage.fill_polygon(&[Vector2D::ZERO, Vector2D::new(5.0, 0.0)], Srgb::BLACK);
            stage.draw_text("HI", Vector2D::new(-50.0, -30.0), Srgb::WHITE);
        }
        let ops = rec.ops();
        assert_eq!(
            ops[0],
            DrawOp::Line {
                from: Vector2D::new(50.0, 30.0),
                to: Vector2D::new(51.0, 31.0),
                color: Srgb::WHITE,
                thickness: 2.0,
            }
        );
        assert_eq!(rec.polygons()[0][1], Vector2D::new(55.0, 30.0));
        assert!(matches!(
            &ops[2],
            DrawOp::Text { origin, .. } if *origin == Vector2D::ZERO
        ));
    }

    #[test]
    fn centered_reports_inner_size() {
        let mut rec = Recorder::new(33, 17);
        let stage = Centered::new(&mut rec);
        assert_eq!((stage.width(), stage.height()), (33, 17));
        assert_eq!(stage.offset(), Vector2D::new(16.0, 8.0));
    }

    #[test]
    fn recorder_counts_lines() {
        let mut rec = Recorder::new(10, 10);
        rec.draw_line(Vector2D::ZERO, Vector2D::new(1.0, 0.0), Srgb::WHITE, 1.0);
        rec.fill_circle(Vector2D::ZERO, 1.0, Srgb::WHITE);
        rec.draw_line(Vector2D::ZERO, Vector2D::new(0.0, 1.0), Srgb::WHITE, 1.0);
        assert_eq!(rec.count_lines(), 2);
        assert_eq!(rec.circle_centers().len(), 1);
    }
}
