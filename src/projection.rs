//! Perspective projection.
//!
//! A pinhole camera sits on the +Z axis at the focal distance, looking back
//! toward the model origin. A view-space point is scaled by
//! `F / (F - z)` and then moved to the screen center plus an optional
//! offset. Points at or behind the camera (`z >= F`) are clamped to `F - 1`
//! so the divide never blows up; they project very large but stay finite.

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Distance from the model origin to the eye, in screen units.
pub const FOCAL_DISTANCE: f32 = 300.0;

/// Screen-space projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    focal_distance: f32,
    center: Vec2,
    offset: Vec2,
}

impl Projection {
    /// Projection centered on a `width` x `height` framebuffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            focal_distance: FOCAL_DISTANCE,
            center: Vec2::new(width as f32 / 2.0, height as f32 / 2.0),
            offset: Vec2::ZERO,
        }
    }

    /// Shift the projected image by `offset` pixels.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Perspective factor for a view-space depth.
    #[inline]
    pub fn perspective_scale(&self, z: f32) -> f32 {
        let f = self.focal_distance;
        let z = if z >= f { f - 1.0 } else { z };
        f / (f - z)
    }

    /// View space to screen space.
    #[inline]
    pub fn project(&self, point: Vec3) -> Vec2 {
        let scale = self.perspective_scale(point.z);
        Vec2::new(point.x, point.y) * scale + self.center + self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn point_on_origin_plane_is_not_scaled() {
        let proj = Projection::new(320, 240);
        let p = proj.project(Vec3::new(10.0, -20.0, 0.0));
        assert_eq!(p, Vec2::new(170.0, 100.0));
    }

    #[test]
    fn offset_shifts_result() {
        let proj = Projection::new(320, 240).with_offset(Vec2::new(5.0, -5.0));
        let p = proj.project(Vec3::new(10.0, -20.0, 0.0));
        assert_eq!(p, Vec2::new(175.0, 95.0));
    }

    #[test]
    fn nearer_points_project_larger() {
        let proj = Projection::new(320, 240);
        assert!(proj.perspective_scale(100.0) > 1.0);
        assert!(proj.perspective_scale(-100.0) < 1.0);
        assert_relative_eq!(proj.perspective_scale(150.0), 2.0);
    }

    #[test]
    fn depth_at_or_past_focal_plane_is_clamped() {
        let proj = Projection::new(320, 240);
        assert_relative_eq!(proj.perspective_scale(FOCAL_DISTANCE), FOCAL_DISTANCE);
        assert_relative_eq!(proj.perspective_scale(1e6), FOCAL_DISTANCE);
        assert!(proj.project(Vec3::new(1.0, 1.0, 500.0)).x.is_finite());
    }
}
