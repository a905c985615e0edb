//! The per-frame rendering pipeline.
//!
//! ```text
//! Model ──rotate/project──▶ TransformedVertices ──shade──▶ [Triangle]
//!       ──sort (key, descending)──▶ [Triangle] ──dither-rasterize──▶ FrameBuffer
//! ```
//!
//! Every stage is a plain function over borrowed buffers; nothing here owns
//! state between frames.

use log::debug;

use crate::light::DirectionalLight;
use crate::model::Model;
use crate::projection::Projection;
use crate::render::{DitherRasterizer, FrameBuffer, Rasterizer};
use crate::shading::{shade_faces, Exclusions};
use crate::sorting::sort_by_depth_descending;
use crate::transform::{transform_vertices, RotationState};

/// What one call to [`render`] did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub drawn: usize,
    pub excluded: Exclusions,
}

/// Draw `model` into `buffer` as dithered `color` faces.
///
/// The buffer is not cleared first. An empty model draws nothing.
pub fn render(
    model: &Model,
    rotation: &RotationState,
    projection: &Projection,
    light: &DirectionalLight,
    color: u32,
    buffer: &mut FrameBuffer,
) -> FrameStats {
    render_with(
        &DitherRasterizer::new(),
        model,
        rotation,
        projection,
        light,
        color,
        buffer,
    )
}

/// [`render`] with a caller-chosen rasterizer.
///
/// Triangles reach `rasterizer` in descending depth-key order.
pub fn render_with<R: Rasterizer>(
    rasterizer: &R,
    model: &Model,
    rotation: &RotationState,
    projection: &Projection,
    light: &DirectionalLight,
    color: u32,
    buffer: &mut FrameBuffer,
) -> FrameStats {
    if model.is_empty() {
        return FrameStats::default();
    }

    let vertices = transform_vertices(model.vertices(), rotation, projection);
    let (mut triangles, excluded) = shade_faces(&vertices, model.faces(), light);
    sort_by_depth_descending(&mut triangles);

    for triangle in &triangles {
        rasterizer.fill_triangle(triangle, buffer, color);
    }

    let stats = FrameStats {
        drawn: triangles.len(),
        excluded,
    };
    debug!(
        "frame: {} faces drawn, {} out of range, {} degenerate, {} non-finite",
        stats.drawn, excluded.out_of_range, excluded.degenerate, excluded.non_finite
    );
    stats
}
