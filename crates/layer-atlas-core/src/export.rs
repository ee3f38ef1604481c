use crate::model::Atlas;
use serde_json::{Value, json};

/// Serialize an accepted layout as a JSON object
/// `{ width, height, margin, items }` with one entry per placed layer.
/// Suitable for generic tooling and simple host consumption.
pub fn to_json<K: ToString>(atlas: &Atlas<K>) -> Value {
    let items: Vec<Value> = atlas
        .items
        .iter()
        .map(|it| {
            json!({
                "key": it.key.to_string(),
                "index": it.index,
                "x": it.frame.x,
                "y": it.frame.y,
                "w": it.frame.w,
                "h": it.frame.h,
                "sourceSize": { "w": it.source_size.0, "h": it.source_size.1 },
            })
        })
        .collect();
    json!({
        "width": atlas.width,
        "height": atlas.height,
        "margin": atlas.margin,
        "items": items,
    })
}
