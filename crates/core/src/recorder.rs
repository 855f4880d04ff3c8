//! A [`Surface`] that records draw calls instead of rasterizing.
//!
//! Available to this crate's tests and, through the `test-util` feature,
//! to the family crates' tests.

use crate::color::Srgb;
use crate::surface::Surface;
use crate::vector::Vector2D;

/// One recorded call on a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Circle {
        center: Vector2D,
        radius: f64,
        color: Srgb,
    },
    Line {
        from: Vector2D,
        to: Vector2D,
        color: Srgb,
        thickness: f64,
    },
    Polygon {
        points: Vec<Vector2D>,
        color: Srgb,
    },
    Text {
        text: String,
        origin: Vector2D,
        color: Srgb,
    },
}

/// A surface that records every call in order instead of rasterizing.
#[derive(Debug, Clone)]
pub struct Recorder {
    width: u32,
    height: u32,
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Centers of every recorded circle, in draw order.
    pub fn circle_centers(&self) -> Vec<Vector2D> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Circle { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    pub fn count_lines(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }

    pub fn polygons(&self) -> Vec<&[Vector2D]> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polygon { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_circle(&mut self, center: Vector2D, radius: f64, color: Srgb) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn draw_line(&mut self, from: Vector2D, to: Vector2D, color: Srgb, thickness: f64) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            thickness,
        });
    }

    fn fill_polygon(&mut self, points: &[Vector2D], color: Srgb) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Vector2D, color: Srgb) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            origin,
            color,
        });
    }
}
