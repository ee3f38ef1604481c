use layer_atlas_core::geometry::{MeshLayout, document_offset, layer_origin, quad_vertices};
use layer_atlas_core::prelude::*;

fn assert_close(a: [f32; 3], b: [f32; 3]) {
    for (x, y) in a.iter().zip(b.iter()) {
        assert!((x - y).abs() < 1e-6, "{:?} != {:?}", a, b);
    }
}

#[test]
fn quad_matches_cell_size_and_winding() {
    let layout = MeshLayout::default();
    let quad = quad_vertices(&Rect::new(10, 20, 40, 30), &layout);
    // 0.01 world units per pixel; pixel y maps to -Z.
    assert_close(quad[0], [0.0, 0.0, 0.0]);
    assert_close(quad[1], [0.0, 0.0, -0.3]);
    assert_close(quad[2], [0.4, 0.0, -0.3]);
    assert_close(quad[3], [0.4, 0.0, 0.0]);
}

#[test]
fn layer_origin_steps_back_per_index() {
    let layout = MeshLayout::default();
    assert_close(layer_origin(50, 30, 0, &layout), [0.5, 0.0, -0.3]);
    assert_close(layer_origin(50, 30, 3, &layout), [0.5, -0.03, -0.3]);
    assert_close(layer_origin(-20, 0, 1, &layout), [-0.2, -0.01, 0.0]);
}

#[test]
fn document_offset_centers_or_keeps_corner() {
    let centered = MeshLayout::default();
    assert_close(document_offset(100, 50, 0, &centered), [-0.5, 0.0, 0.25]);

    let cornered = MeshLayout {
        align_center: false,
        ..MeshLayout::default()
    };
    assert_close(document_offset(100, 50, 0, &cornered), [0.0, 0.0, 0.0]);
    // The half-margin correction applies either way.
    assert_close(document_offset(100, 50, 4, &cornered), [-0.02, 0.0, 0.02]);
}
