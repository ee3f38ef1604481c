use crate::error::{LayerAtlasError, Result};
use crate::uv::UvTransform;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }
    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }
    /// Returns true if `r` is fully inside `self` (inclusive edges).
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
}

/// One source layer's packing record.
///
/// Dimensions are stored margin-inflated; `weight` is the aspect-weighted
/// area of the declared size and only orders placement (heavier, less-square
/// layers go first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerRect<K = String> {
    /// User-specified key (e.g., layer name or asset path).
    pub key: K,
    /// Stable input sequence number; breaks weight ties and orders output.
    pub index: usize,
    /// Cell width (declared width plus margin).
    pub w: u32,
    /// Cell height (declared height plus margin).
    pub h: u32,
    weight: f64,
}

impl<K> LayerRect<K> {
    /// Builds the packing record for one layer, inflating it by `margin`.
    ///
    /// Zero-sized layers are rejected here so they never reach the packer:
    /// they would fit every space and divide by zero in the weight.
    pub fn new(key: K, index: usize, width: u32, height: u32, margin: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LayerAtlasError::DegenerateLayer {
                index,
                width,
                height,
            });
        }
        let long = width.max(height) as f64;
        let short = width.min(height) as f64;
        Ok(Self {
            key,
            index,
            w: width + margin,
            h: height + margin,
            weight: long / short * (width as f64) * (height as f64),
        })
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }
}

/// A layer placed within the accepted canvas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedLayer<K = String> {
    pub key: K,
    pub index: usize,
    /// Placed cell within the canvas; `w`/`h` include the margin inflation.
    pub frame: Rect,
    /// Declared (pre-inflation) layer size.
    pub source_size: (u32, u32),
}

impl<K> PlacedLayer<K> {
    /// UV coordinates of this cell's four corners under `uv`.
    pub fn uv_corners(&self, uv: &UvTransform) -> [[f32; 2]; 4] {
        uv.corners(&self.frame)
    }
}

/// Accepted canvas plus every placement within it, in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atlas<K = String> {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    /// Pack attempts the growth loop spent, counting the accepted one.
    pub attempts: u32,
    pub items: Vec<PlacedLayer<K>>,
}

impl<K> Atlas<K> {
    /// Pixel-to-UV transform for this canvas.
    pub fn uv_transform(&self) -> UvTransform {
        UvTransform::new(self.width, self.height, self.margin)
    }

    /// Computes packing statistics for this atlas.
    pub fn stats(&self) -> AtlasStats {
        let canvas_area = (self.width as u64) * (self.height as u64);
        let used_area: u64 = self
            .items
            .iter()
            .map(|it| (it.frame.w as u64) * (it.frame.h as u64))
            .sum();
        let occupancy = if canvas_area > 0 {
            used_area as f64 / canvas_area as f64
        } else {
            0.0
        };
        AtlasStats {
            num_items: self.items.len(),
            canvas_area,
            used_area,
            occupancy,
            attempts: self.attempts,
        }
    }
}

/// Statistics about atlas packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AtlasStats {
    /// Number of layers packed.
    pub num_items: usize,
    /// Canvas area (width * height).
    pub canvas_area: u64,
    /// Area covered by placed cells (margin-inflated).
    pub used_area: u64,
    /// used_area / canvas_area (0.0 to 1.0). Higher is better.
    pub occupancy: f64,
    /// Growth-loop attempts spent reaching the accepted canvas.
    pub attempts: u32,
}

impl AtlasStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Items: {}, Occupancy: {:.2}%, Canvas Area: {} px², Used Area: {} px², Attempts: {}",
            self.num_items,
            self.occupancy * 100.0,
            self.canvas_area,
            self.used_area,
            self.attempts,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.used_area)
    }
}
