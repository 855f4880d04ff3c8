#![deny(unsafe_code)]
//! Core types for the snowflake generator.
//!
//! Provides `Vector2D`, the `RandomSource` capability and its `Xorshift64`
//! backing stream, the tangent particle-chain generator, `SymmetryGroup`
//! composition, shapes, `Srgb`/`Palette` colors, the `Surface` drawing seam
//! with its CPU `Raster`, label formatting, parameter helpers, `Recipe`, and
//! the `Drawer` trait implemented by each snowflake family.

pub mod chain;
pub mod color;
pub mod drawer;
pub mod error;
pub mod fmt;
pub mod font;
pub mod palette;
pub mod params;
pub mod prng;
pub mod random;
pub mod raster;
pub mod recipe;
#[cfg(any(test, feature = "test-util"))]
pub mod recorder;
pub mod shape;
pub mod surface;
pub mod symmetry;
pub mod vector;

pub use chain::{Particle, ParticleChain};
pub use color::Srgb;
pub use drawer::Drawer;
pub use error::SnowflakeError;
pub use palette::Palette;
pub use prng::Xorshift64;
pub use random::RandomSource;
pub use raster::Raster;
pub use recipe::Recipe;
pub use shape::{Polygon, Segment};
#[cfg(any(test, feature = "test-util"))]
pub use recorder::{DrawOp, Recorder};
pub use surface::{Centered, Surface};
pub use symmetry::{Symmetric, SymmetryGroup};
pub use vector::Vector2D;
