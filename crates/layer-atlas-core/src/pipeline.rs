use crate::config::AtlasConfig;
use crate::error::{LayerAtlasError, Result};
use crate::model::{Atlas, LayerRect, PlacedLayer};
use crate::packer;
use tracing::{debug, instrument};

/// Growth factors applied to `(width, height)` in strict rotation after each
/// failed pack attempt. The 3-step cycle doubles total area on two steps out
/// of three while oscillating the aspect ratio toward near-square, which is
/// what keeps the accepted canvas close to minimal.
const GROWTH_CYCLE: [(f32, f32); 3] = [(2.0, 1.0), (0.5, 2.0), (2.0, 1.0)];

#[instrument(skip_all)]
/// Packs `(key, width, height)` layers into a single canvas, growing it
/// through `GROWTH_CYCLE` until every layer fits.
///
/// Notes:
/// - Placement is deterministic: identical inputs and config produce an
///   identical atlas.
/// - `items` come back in input order regardless of the weight order the
///   packer placed them in.
/// - The loop is bounded by `cfg.max_size`/`cfg.max_attempts`; exceeding
///   either is a terminal error with no partial atlas.
pub fn build_atlas<K>(inputs: Vec<(K, u32, u32)>, cfg: AtlasConfig) -> Result<Atlas<K>> {
    cfg.validate()?;

    if inputs.is_empty() {
        return Err(LayerAtlasError::Empty);
    }

    let mut items = Vec::with_capacity(inputs.len());
    for (index, (key, width, height)) in inputs.into_iter().enumerate() {
        items.push(LayerRect::new(key, index, width, height, cfg.margin)?);
    }

    // Canvas size is tracked in floats like the growth factors and floored to
    // whole pixels at each attempt.
    let mut size = (cfg.initial_width as f32, cfg.initial_height as f32);
    let mut cycle = 0usize;
    let mut attempts = 0u32;
    let (width, height, frames) = loop {
        let (w, h) = (size.0 as u32, size.1 as u32);
        if attempts >= cfg.max_attempts || w > cfg.max_size || h > cfg.max_size {
            return Err(LayerAtlasError::GrowthExhausted {
                attempts,
                width: w,
                height: h,
            });
        }
        attempts += 1;
        match packer::pack(&items, w, h, cfg.margin) {
            Some(frames) => {
                debug!(width = w, height = h, attempts, "atlas converged");
                break (w, h, frames);
            }
            None => {
                debug!(width = w, height = h, "canvas overflowed; growing");
                let (fw, fh) = GROWTH_CYCLE[cycle];
                size.0 *= fw;
                size.1 *= fh;
                cycle = (cycle + 1) % GROWTH_CYCLE.len();
            }
        }
    };

    let margin = cfg.margin;
    let items = items
        .into_iter()
        .zip(frames)
        .map(|(it, frame)| PlacedLayer {
            source_size: (it.w - margin, it.h - margin),
            key: it.key,
            index: it.index,
            frame,
        })
        .collect();

    Ok(Atlas {
        width,
        height,
        margin,
        attempts,
        items,
    })
}
