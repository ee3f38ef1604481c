//! Guillotine placement over an ordered free-space list.
//!
//! The free list is scanned from the most-recently-added space backward and
//! the first fit wins; each placement replaces the chosen space with its two
//! guillotine splits, bigger appended before smaller. Both the scan direction
//! and the append order feed the next scan, so they are part of the packing
//! contract, not implementation detail. Free spaces never overlap and are
//! never merged.

use crate::model::{LayerRect, Rect};

/// An unoccupied region of the canvas.
#[derive(Debug, Clone, Copy)]
struct Space {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

impl Space {
    fn fits(&self, w: u32, h: u32) -> bool {
        self.w >= w && self.h >= h
    }

    /// Cuts this space around a `w`x`h` cell placed at its top-left corner.
    ///
    /// The cut follows the cell's aspect: for a taller-than-wide cell the
    /// smaller leftover is the strip to its right and the bigger one the
    /// full-width strip below; for a wider-or-square cell the roles invert.
    /// Returns `(smaller, bigger)`; either may have zero area.
    fn split(&self, w: u32, h: u32) -> (Space, Space) {
        if w < h {
            (
                Space {
                    x: self.x + w,
                    y: self.y,
                    w: self.w - w,
                    h,
                },
                Space {
                    x: self.x,
                    y: self.y + h,
                    w: self.w,
                    h: self.h - h,
                },
            )
        } else {
            (
                Space {
                    x: self.x,
                    y: self.y + h,
                    w,
                    h: self.h - h,
                },
                Space {
                    x: self.x + w,
                    y: self.y,
                    w: self.w - w,
                    h: self.h,
                },
            )
        }
    }
}

/// Attempts to place every item on a `width`x`height` canvas.
///
/// Returns placements aligned with `items` (same order), or `None` as soon as
/// one item finds no free space; the growth loop treats `None` as "grow the
/// canvas and retry", so it is an expected outcome rather than an error.
pub fn pack<K>(items: &[LayerRect<K>], width: u32, height: u32, margin: u32) -> Option<Vec<Rect>> {
    let mut order: Vec<usize> = (0..items.len()).collect();
    // Stable order: heaviest first, declaration order on ties.
    order.sort_by(|&a, &b| {
        items[b]
            .weight()
            .total_cmp(&items[a].weight())
            .then_with(|| items[a].index.cmp(&items[b].index))
    });

    // One initial space, inset by the margin on the left/top edge. Items are
    // already margin-inflated, so every neighbor pair keeps the separation.
    let mut spaces = vec![Space {
        x: margin,
        y: margin,
        w: width.saturating_sub(margin),
        h: height.saturating_sub(margin),
    }];
    let mut placed = vec![Rect::new(0, 0, 0, 0); items.len()];

    for &idx in &order {
        let item = &items[idx];
        let chosen = (0..spaces.len())
            .rev()
            .find(|&i| spaces[i].fits(item.w, item.h))?;
        // Order-preserving removal: the positions of the remaining spaces are
        // observable through the next reverse scan.
        let space = spaces.remove(chosen);
        let (smaller, bigger) = space.split(item.w, item.h);
        spaces.push(bigger);
        spaces.push(smaller);
        placed[idx] = Rect::new(space.x, space.y, item.w, item.h);
    }
    Some(placed)
}
