//! Core library for packing image-layer rectangles into a single atlas canvas.
//!
//! - Packer: deterministic guillotine placement over an ordered free-space list
//! - Pipeline: `build_atlas` grows the canvas through a fixed factor cycle until every layer fits
//! - UV: affine pixel-to-UV mapping (v-flipped, margin-corrected) for host mesh builders
//! - Geometry: world-space quad helpers for hosts that mesh each layer
//!
//! Quick example:
//! ```
//! use layer_atlas_core::{AtlasConfig, build_atlas};
//! # fn main() -> Result<(), layer_atlas_core::LayerAtlasError> {
//! let layers = vec![("hair".to_string(), 40, 40), ("face".to_string(), 40, 40)];
//! let atlas = build_atlas(layers, AtlasConfig::default())?;
//! let uv = atlas.uv_transform();
//! for item in &atlas.items {
//!     let _corners = item.uv_corners(&uv);
//! }
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod geometry;
pub mod model;
pub mod packer;
pub mod pipeline;
pub mod uv;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pipeline::*;
pub use uv::*;

/// Convenience prelude for common types and functions.
/// Importing `layer_atlas_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{AtlasConfig, AtlasConfigBuilder};
    pub use crate::error::LayerAtlasError;
    pub use crate::geometry::MeshLayout;
    pub use crate::model::{Atlas, AtlasStats, LayerRect, PlacedLayer, Rect};
    pub use crate::pipeline::build_atlas;
    pub use crate::uv::UvTransform;
}
