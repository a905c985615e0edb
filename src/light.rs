//! Lighting for flat-shaded faces.

use crate::math::vec3::Vec3;

/// Default share of brightness every face gets regardless of orientation.
pub const DEFAULT_AMBIENT: f32 = 0.2;

/// A directional light plus an ambient floor.
///
/// Directional lights suit distant sources where all rays are parallel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    /// The normalized direction the light is pointing (not where it comes from).
    pub direction: Vec3,
    pub ambient_intensity: f32,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self::new(Vec3::BACK)
    }
}

impl DirectionalLight {
    /// Create a new directional light pointing in the given direction.
    /// The direction will be normalized automatically.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
            ambient_intensity: DEFAULT_AMBIENT,
        }
    }

    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient_intensity = ambient;
        self
    }

    /// Lambert term for a unit normal, in `[0, 1]`.
    pub fn diffuse(&self, normal: Vec3) -> f32 {
        // Negate direction: light pointing at surface = positive dot product
        (-self.direction).dot(normal).max(0.0)
    }

    /// Ambient plus the diffuse term scaled into the remaining headroom,
    /// clamped to `[0, 1]`.
    pub fn brightness(&self, normal: Vec3) -> f32 {
        let ambient = self.ambient_intensity;
        (ambient + self.diffuse(normal) * (1.0 - ambient)).clamp(0.0, 1.0)
    }
}
