//! World-space placement math for hosts that build one flat quad per layer.
//!
//! None of this touches the packing core; it reproduces the coordinate
//! conventions a mesh-building host needs so that quads, layer origins and
//! the document offset stay consistent with the UV transform's half-margin
//! shift.

use crate::model::Rect;
use serde::{Deserialize, Serialize};

/// World-space conventions for layer meshes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MeshLayout {
    /// World units per pixel.
    pub pixel_size: f32,
    /// Depth step between consecutive layers.
    pub layer_depth: f32,
    /// Center the document on the world origin instead of aligning its
    /// top-left corner to it.
    pub align_center: bool,
}

impl Default for MeshLayout {
    fn default() -> Self {
        Self {
            pixel_size: 0.01,
            layer_depth: 0.01,
            align_center: true,
        }
    }
}

/// Quad vertices for one placed cell, in object space, wound to match
/// [`UvTransform::corners`](crate::uv::UvTransform::corners): top-left,
/// bottom-left, bottom-right, top-right. The quad lies in the XZ plane with
/// pixel y mapped to -Z.
pub fn quad_vertices(frame: &Rect, layout: &MeshLayout) -> [[f32; 3]; 4] {
    let w = frame.w as f32 * layout.pixel_size;
    let h = frame.h as f32 * layout.pixel_size;
    [
        [0.0, 0.0, 0.0],
        [0.0, 0.0, -h],
        [w, 0.0, -h],
        [w, 0.0, 0.0],
    ]
}

/// Object-space origin for the layer at `index`, positioned by the layer's
/// offset within the source document (`left`, `top`).
pub fn layer_origin(left: i32, top: i32, index: usize, layout: &MeshLayout) -> [f32; 3] {
    [
        left as f32 * layout.pixel_size,
        index as f32 * -layout.layer_depth,
        top as f32 * -layout.pixel_size,
    ]
}

/// Shared offset added to every layer origin: optional document centering
/// plus the half-margin correction matching the UV transform's shift.
pub fn document_offset(
    doc_width: u32,
    doc_height: u32,
    margin: u32,
    layout: &MeshLayout,
) -> [f32; 3] {
    let s = layout.pixel_size;
    let mut offset = if layout.align_center {
        [
            doc_width as f32 * -0.5 * s,
            0.0,
            doc_height as f32 * 0.5 * s,
        ]
    } else {
        [0.0; 3]
    };
    offset[0] += margin as f32 * -0.5 * s;
    offset[2] += margin as f32 * 0.5 * s;
    offset
}
