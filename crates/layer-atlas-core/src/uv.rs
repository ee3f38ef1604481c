use crate::model::Rect;
use serde::{Deserialize, Serialize};

/// Affine pixel-to-UV transform: a 2x3 row-major matrix applied to the
/// homogeneous pixel coordinate `(x, y, 1)`.
///
/// `u = x/W - (margin/2)/W` and `v = 1 - y/H + (margin/2)/H`: the v axis is
/// flipped (pixel y grows downward, v grows upward) and the half-margin shift
/// re-centers each cell's content inside its margin-inflated placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UvTransform {
    pub rows: [[f32; 3]; 2],
}

impl UvTransform {
    pub fn new(canvas_w: u32, canvas_h: u32, margin: u32) -> Self {
        let w = canvas_w as f32;
        let h = canvas_h as f32;
        let half = margin as f32 * 0.5;
        Self {
            rows: [[1.0 / w, 0.0, -half / w], [0.0, -1.0 / h, 1.0 + half / h]],
        }
    }

    /// Maps one pixel coordinate into UV space.
    pub fn apply(&self, x: f32, y: f32) -> [f32; 2] {
        [
            self.rows[0][0] * x + self.rows[0][1] * y + self.rows[0][2],
            self.rows[1][0] * x + self.rows[1][1] * y + self.rows[1][2],
        ]
    }

    /// UV coordinates of a placed cell's corners, in pixel-space order
    /// top-left, bottom-left, bottom-right, top-right.
    pub fn corners(&self, r: &Rect) -> [[f32; 2]; 4] {
        let (x, y) = (r.x as f32, r.y as f32);
        let (w, h) = (r.w as f32, r.h as f32);
        [
            self.apply(x, y),
            self.apply(x, y + h),
            self.apply(x + w, y + h),
            self.apply(x + w, y),
        ]
    }

    /// Inverse affine (UV back to pixels), or `None` when the linear part is
    /// singular.
    pub fn invert(&self) -> Option<UvTransform> {
        let [[a, b, c], [d, e, f]] = self.rows;
        let det = a * e - b * d;
        if det == 0.0 {
            return None;
        }
        let (ia, ib, id, ie) = (e / det, -b / det, -d / det, a / det);
        Some(UvTransform {
            rows: [
                [ia, ib, -(ia * c + ib * f)],
                [id, ie, -(id * c + ie * f)],
            ],
        })
    }
}
