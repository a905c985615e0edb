//! Per-face visibility and flat shading.
//!
//! There is no back-face culling. Every face's normal is flipped into the
//! hemisphere facing the viewer (+z) before lighting, so all surviving faces
//! are lit as if front-facing. Combined with the painter's sort this only
//! looks right for convex, non-self-occluding models.
//!
//! Faces that cannot be shaded are skipped for the frame, never reported as
//! errors:
//! - an index outside the vertex buffers (or negative)
//! - a degenerate triangle whose normal has zero length
//! - a triangle whose normal overflows `f32` (or whose vertices are already
//!   infinite or NaN)

use log::trace;

use crate::light::DirectionalLight;
use crate::math::vec3::Vec3;
use crate::model::Face;
use crate::render::Triangle;
use crate::transform::TransformedVertices;

/// Counts of faces excluded while shading one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Exclusions {
    pub out_of_range: usize,
    pub degenerate: usize,
    pub non_finite: usize,
}

impl Exclusions {
    pub fn total(&self) -> usize {
        self.out_of_range + self.degenerate + self.non_finite
    }
}

/// Why a face has no usable normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalError {
    /// The edges are parallel; the triangle has no area.
    Degenerate,
    /// The cross product is infinite or NaN.
    NonFinite,
}

/// Resolve a face's indices against buffers of length `len`.
fn resolve(face: &Face, len: usize) -> Option<[usize; 3]> {
    let [a, b, c] = face.indices();
    let check = |i: i32| usize::try_from(i).ok().filter(|&i| i < len);
    Some([check(a)?, check(b)?, check(c)?])
}

/// Unit normal of a view-space triangle, oriented toward +z.
pub fn facing_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Result<Vec3, NormalError> {
    let cross = (v1 - v0).cross(v2 - v0);
    if !cross.magnitude().is_finite() {
        return Err(NormalError::NonFinite);
    }
    let normal = cross.try_normalize().ok_or(NormalError::Degenerate)?;
    Ok(if normal.z <= 0.0 { -normal } else { normal })
}

/// Build the render tuples for every shadeable face, in face-list order.
pub fn shade_faces(
    vertices: &TransformedVertices,
    faces: &[Face],
    light: &DirectionalLight,
) -> (Vec<Triangle>, Exclusions) {
    let len = vertices.rotated.len().min(vertices.projected.len());
    let mut triangles = Vec::with_capacity(faces.len());
    let mut excluded = Exclusions::default();

    for face in faces {
        let Some([i0, i1, i2]) = resolve(face, len) else {
            trace!("face {face:?} references a missing vertex");
            excluded.out_of_range += 1;
            continue;
        };

        let (v0, v1, v2) = (
            vertices.rotated[i0],
            vertices.rotated[i1],
            vertices.rotated[i2],
        );
        let normal = match facing_normal(v0, v1, v2) {
            Ok(normal) => normal,
            Err(NormalError::Degenerate) => {
                trace!("face {face:?} is degenerate");
                excluded.degenerate += 1;
                continue;
            }
            Err(NormalError::NonFinite) => {
                trace!("face {face:?} has a non-finite normal");
                excluded.non_finite += 1;
                continue;
            }
        };

        let brightness = light.brightness(normal);
        let avg_depth = (v0.z + v1.z + v2.z) / 3.0;
        let points = [
            vertices.projected[i0],
            vertices.projected[i1],
            vertices.projected[i2],
        ];
        triangles.push(Triangle::new(points, brightness, avg_depth));
    }

    (triangles, excluded)
}
