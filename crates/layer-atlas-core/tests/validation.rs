use layer_atlas_core::prelude::*;

#[test]
fn zero_width_layer_is_rejected() {
    let layers = vec![("ok".to_string(), 32, 32), ("bad".to_string(), 0, 32)];
    let result = build_atlas(layers, AtlasConfig::default());
    match result {
        Err(LayerAtlasError::DegenerateLayer {
            index,
            width,
            height,
        }) => {
            assert_eq!(index, 1);
            assert_eq!((width, height), (0, 32));
        }
        other => panic!("expected DegenerateLayer, got {:?}", other),
    }
}

#[test]
fn zero_height_layer_is_rejected() {
    let result = build_atlas(vec![("bad".to_string(), 32, 0)], AtlasConfig::default());
    assert!(matches!(
        result,
        Err(LayerAtlasError::DegenerateLayer { index: 0, .. })
    ));
}

#[test]
fn empty_input_is_rejected() {
    let layers: Vec<(String, u32, u32)> = vec![];
    let result = build_atlas(layers, AtlasConfig::default());
    assert!(matches!(result, Err(LayerAtlasError::Empty)));
}

#[test]
fn zero_initial_canvas_is_invalid() {
    let cfg = AtlasConfig {
        initial_width: 0,
        ..Default::default()
    };
    assert!(matches!(
        cfg.validate(),
        Err(LayerAtlasError::InvalidConfig(_))
    ));
}

#[test]
fn max_size_below_initial_canvas_is_invalid() {
    let cfg = AtlasConfig::builder().initial_size(64, 64).max_size(32).build();
    assert!(matches!(
        cfg.validate(),
        Err(LayerAtlasError::InvalidConfig(_))
    ));
}

#[test]
fn zero_attempt_budget_is_invalid() {
    let cfg = AtlasConfig::builder().max_attempts(0).build();
    assert!(matches!(
        cfg.validate(),
        Err(LayerAtlasError::InvalidConfig(_))
    ));
}

#[test]
fn default_config_is_valid() {
    assert!(AtlasConfig::default().validate().is_ok());
}
