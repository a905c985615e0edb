//! Painter's algorithm ordering.
//!
//! The renderer has no depth buffer, so the submission order of faces is the
//! only visibility mechanism. Faces are drawn in descending order of their
//! depth key, later faces painting over earlier ones. This is adequate for
//! convex models and wrong for concave or interpenetrating ones.

use crate::render::Triangle;

/// Stable sort by `avg_depth`, largest key first.
///
/// Faces with equal keys keep their face-list order.
pub fn sort_by_depth_descending(triangles: &mut [Triangle]) {
    // slice::sort_by is a stable merge sort
    triangles.sort_by(|a, b| b.avg_depth.total_cmp(&a.avg_depth));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec2::Vec2;

    fn tri(depth: f32, tag: f32) -> Triangle {
        // brightness doubles as an identity tag
        Triangle::new([Vec2::ZERO; 3], tag, depth)
    }

    #[test]
    fn larger_depth_is_submitted_first() {
        let mut tris = vec![tri(-5.0, 0.0), tri(12.0, 1.0), tri(3.0, 2.0), tri(-40.0, 3.0)];
        sort_by_depth_descending(&mut tris);

        let depths: Vec<f32> = tris.iter().map(|t| t.avg_depth).collect();
        assert_eq!(depths, vec![12.0, 3.0, -5.0, -40.0]);
        for pair in tris.windows(2) {
            assert!(pair[0].avg_depth >= pair[1].avg_depth);
        }
    }

    #[test]
    fn ties_keep_face_order() {
        let mut tris = vec![tri(1.0, 0.0), tri(2.0, 1.0), tri(1.0, 2.0), tri(1.0, 3.0)];
        sort_by_depth_descending(&mut tris);
        let tags: Vec<f32> = tris.iter().map(|t| t.brightness).collect();
        assert_eq!(tags, vec![1.0, 0.0, 2.0, 3.0]);
    }
}
