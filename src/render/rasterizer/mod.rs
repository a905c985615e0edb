//! Triangle rasterization.
//!
//! Only one algorithm is provided: [`DitherRasterizer`], an edge-function
//! rasterizer that turns a face's brightness into an ordered-dither halftone
//! of a single flat color.

mod dithered;

pub use dithered::{edge_function, DitherRasterizer};

use super::framebuffer::FrameBuffer;
use crate::math::vec2::Vec2;

/// A shaded face ready for rasterization in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub points: [Vec2; 3],
    /// Fraction of the halftone cell to fill, in `[0, 1]`.
    pub brightness: f32,
    /// Mean view-space z of the face's vertices; the painter's sort key.
    pub avg_depth: f32,
}

impl Triangle {
    pub fn new(points: [Vec2; 3], brightness: f32, avg_depth: f32) -> Self {
        Self {
            points,
            brightness,
            avg_depth,
        }
    }
}

/// Trait for triangle rasterization algorithms.
///
/// Implementors define how triangles are filled into a pixel buffer.
pub trait Rasterizer {
    /// Fill a triangle into the frame buffer.
    ///
    /// # Arguments
    /// * `triangle` - The triangle to rasterize
    /// * `buffer` - The frame buffer to draw into
    /// * `color` - The palette color written to every painted pixel
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: u32);
}
