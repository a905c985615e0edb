//! Edge function rasterization with a halftone fill.
//!
//! # Edge Function
//!
//! For an edge from point A to point B, the edge function at point P is:
//!
//! ```text
//! E(P) = (P.x - A.x) * (B.y - A.y) - (P.y - A.y) * (B.x - A.x)
//! ```
//!
//! This is the 2D cross product (P - A) × (B - A). Its sign says which side of
//! the directed edge P lies on, and `E(C)` for the third vertex C is twice the
//! triangle's signed area.
//!
//! # Winding
//!
//! If the signed area is negative the second and third points are swapped, so
//! every triangle is tested with the same convention: a pixel is inside when
//! all three edge values are `>= 0`. The boundary is inclusive, so a pixel on
//! an edge shared by two faces may be visited by both.
//!
//! # Halftone
//!
//! Inside pixels are written only when the face's brightness beats the
//! pixel's Bayer threshold (see [`crate::render::dither`]). Pixels that fail
//! keep whatever was drawn before.

use super::{Rasterizer, Triangle};
use crate::math::vec2::Vec2;
use crate::render::dither;
use crate::render::framebuffer::FrameBuffer;

/// Computes the edge function value for point P relative to edge (A -> B).
#[inline]
pub fn edge_function(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Flat-color triangle rasterizer with ordered dithering.
///
/// Pixels are sampled at their integer coordinates, matching the grid the
/// dither matrix is tiled on.
#[derive(Debug, Default, Clone, Copy)]
pub struct DitherRasterizer;

impl DitherRasterizer {
    /// Creates a new dither rasterizer instance.
    pub fn new() -> Self {
        DitherRasterizer
    }

    /// Draw one halftoned triangle. Returns the number of pixels written.
    pub fn fill(
        &self,
        p0: Vec2,
        p1: Vec2,
        p2: Vec2,
        brightness: f32,
        buffer: &mut FrameBuffer,
        color: u32,
    ) -> usize {
        let points = [p0, p1, p2];
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return 0;
        }
        if buffer.width() == 0 || buffer.height() == 0 {
            return 0;
        }

        // Normalize winding so the inside test is always ">= 0".
        let (p1, p2) = if edge_function(p0, p1, p2) < 0.0 {
            (p2, p1)
        } else {
            (p1, p2)
        };

        // Bounding box, clipped to framebuffer bounds
        let min_x = (p0.x.min(p1.x).min(p2.x).floor() as i32).max(0);
        let max_x = (p0.x.max(p1.x).max(p2.x).ceil() as i32).min(buffer.width() as i32 - 1);
        let min_y = (p0.y.min(p1.y).min(p2.y).floor() as i32).max(0);
        let max_y = (p0.y.max(p1.y).max(p2.y).ceil() as i32).min(buffer.height() as i32 - 1);

        let mut written = 0;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let p = Vec2::new(x as f32, y as f32);

                let inside = edge_function(p0, p1, p) >= 0.0
                    && edge_function(p1, p2, p) >= 0.0
                    && edge_function(p2, p0, p) >= 0.0;

                if inside && dither::is_lit(x, y, brightness) {
                    buffer.set_pixel(x, y, color);
                    written += 1;
                }
            }
        }
        written
    }
}

impl Rasterizer for DitherRasterizer {
    fn fill_triangle(&self, triangle: &Triangle, buffer: &mut FrameBuffer, color: u32) {
        let [p0, p1, p2] = triangle.points;
        self.fill(p0, p1, p2, triangle.brightness, buffer, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 32;
    const H: u32 = 32;
    const INK: u32 = 0xFF00FF00;

    fn count(buffer: &[u32]) -> usize {
        buffer.iter().filter(|&&c| c == INK).count()
    }

    #[test]
    fn edge_function_sign_follows_side() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(edge_function(a, b, Vec2::new(5.0, -1.0)) > 0.0);
        assert!(edge_function(a, b, Vec2::new(5.0, 1.0)) < 0.0);
        assert_eq!(edge_function(a, b, Vec2::new(5.0, 0.0)), 0.0);
    }

    #[test]
    fn both_windings_fill_the_same_pixels() {
        let a = Vec2::new(2.0, 2.0);
        let b = Vec2::new(20.0, 4.0);
        let c = Vec2::new(8.0, 25.0);

        let mut cw = vec![0u32; (W * H) as usize];
        let mut ccw = vec![0u32; (W * H) as usize];
        let raster = DitherRasterizer::new();
        let n1 = raster.fill(a, b, c, 1.0, &mut FrameBuffer::new(&mut cw, W, H), INK);
        let n2 = raster.fill(a, c, b, 1.0, &mut FrameBuffer::new(&mut ccw, W, H), INK);

        assert!(n1 > 0);
        assert_eq!(n1, n2);
        assert_eq!(cw, ccw);
    }

    #[test]
    fn full_brightness_covers_inclusive_rectangle_half() {
        // Right triangle with legs on the axes: pixels with x + y <= 9
        let mut buffer = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut buffer, W, H);
        let n = DitherRasterizer::new().fill(
            Vec2::new(0.0, 0.0),
            Vec2::new(9.0, 0.0),
            Vec2::new(0.0, 9.0),
            1.0,
            &mut fb,
            INK,
        );
        assert_eq!(n, (1..=10).sum::<usize>());
        assert_eq!(fb.get_pixel(9, 0), Some(INK));
        assert_eq!(fb.get_pixel(5, 5), Some(0));
    }

    #[test]
    fn zero_brightness_leaves_buffer_untouched() {
        let mut buffer = vec![7u32; (W * H) as usize];
        let tri = Triangle::new(
            [
                Vec2::new(0.0, 0.0),
                Vec2::new(30.0, 0.0),
                Vec2::new(0.0, 30.0),
            ],
            0.0,
            0.0,
        );
        DitherRasterizer::new().fill_triangle(&tri, &mut FrameBuffer::new(&mut buffer, W, H), INK);
        assert!(buffer.iter().all(|&c| c == 7));
    }

    #[test]
    fn half_brightness_paints_half_of_a_covered_tile() {
        let mut buffer = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut buffer, W, H);
        // Two triangles covering the full 8x8 square [0, 7]
        let raster = DitherRasterizer::new();
        let (a, b, c, d) = (
            Vec2::new(0.0, 0.0),
            Vec2::new(7.0, 0.0),
            Vec2::new(7.0, 7.0),
            Vec2::new(0.0, 7.0),
        );
        raster.fill(a, b, c, 0.5, &mut fb, INK);
        raster.fill(a, c, d, 0.5, &mut fb, INK);
        assert_eq!(count(&buffer), 32);
    }

    #[test]
    fn triangle_is_clipped_to_the_buffer() {
        let mut buffer = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut buffer, W, H);
        let n = DitherRasterizer::new().fill(
            Vec2::new(-100.0, -100.0),
            Vec2::new(500.0, -100.0),
            Vec2::new(-100.0, 500.0),
            1.0,
            &mut fb,
            INK,
        );
        assert_eq!(n, (W * H) as usize);
    }

    #[test]
    fn non_finite_points_draw_nothing() {
        let mut buffer = vec![0u32; (W * H) as usize];
        let mut fb = FrameBuffer::new(&mut buffer, W, H);
        let n = DitherRasterizer::new().fill(
            Vec2::new(f32::NAN, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
            1.0,
            &mut fb,
            INK,
        );
        assert_eq!(n, 0);
    }
}
