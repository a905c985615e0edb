//! Model rotation.
//!
//! The viewer orbits the model about its own origin with two angles. The
//! composition order is fixed: yaw about the vertical axis first, then pitch
//! about the horizontal axis applied to the already-yawed point. Swapping the
//! order changes how combined rotations look.

use std::f32::consts::TAU;

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::projection::Projection;

/// Yaw and pitch of the model, both kept in `[0, 2π)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    yaw: f32,
    pitch: f32,
}

/// Wraps an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

impl RotationState {
    pub fn new(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw: wrap_angle(yaw),
            pitch: wrap_angle(pitch),
        }
    }

    /// Rotation about the vertical axis, in radians.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Rotation about the horizontal axis, in radians.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set(&mut self, yaw: f32, pitch: f32) -> &mut Self {
        self.yaw = wrap_angle(yaw);
        self.pitch = wrap_angle(pitch);
        self
    }

    /// Add deltas to both angles, re-wrapping the result.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) -> &mut Self {
        self.set(self.yaw + delta_yaw, self.pitch + delta_pitch)
    }

    /// Model space to view space: yaw, then pitch.
    #[inline]
    pub fn apply(&self, vertex: Vec3) -> Vec3 {
        vertex.rotate_y(self.yaw).rotate_x(self.pitch)
    }
}

/// Vertices of one frame in view space and screen space.
///
/// Both vectors are index-parallel to the model's vertex buffer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransformedVertices {
    pub rotated: Vec<Vec3>,
    pub projected: Vec<Vec2>,
}

/// Rotate and project every vertex. Nothing is dropped, whatever its depth.
pub fn transform_vertices(
    vertices: &[Vec3],
    rotation: &RotationState,
    projection: &Projection,
) -> TransformedVertices {
    let rotated: Vec<Vec3> = vertices.iter().map(|&v| rotation.apply(v)).collect();
    let projected = rotated.iter().map(|&v| projection.project(v)).collect();
    TransformedVertices { rotated, projected }
}
