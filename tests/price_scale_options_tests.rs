use price_scale_rs::core::{PriceScaleMargins, PriceScaleMode, PriceScaleOptions};

#[test]
fn options_survive_a_json_round_trip() {
    let options = PriceScaleOptions {
        auto_scale: false,
        mode: PriceScaleMode::Logarithmic,
        invert_scale: true,
        scale_margins: PriceScaleMargins {
            top: 0.15,
            bottom: 0.05,
        },
        entire_text_only: true,
        ensure_edge_tick_marks_visible: true,
        font_size_px: 11.0,
    };

    let json = serde_json::to_string(&options).expect("serialize options");
    let restored: PriceScaleOptions = serde_json::from_str(&json).expect("deserialize options");
    assert_eq!(restored, options);
}

#[test]
fn default_options_match_the_documented_surface() {
    let options = PriceScaleOptions::default();
    assert!(options.auto_scale);
    assert_eq!(options.mode, PriceScaleMode::Normal);
    assert!(!options.invert_scale);
    assert_eq!(options.scale_margins.top, 0.2);
    assert_eq!(options.scale_margins.bottom, 0.1);
}

#[test]
fn mode_serializes_as_a_named_variant() {
    let json = serde_json::to_string(&PriceScaleMode::IndexedTo100).expect("serialize mode");
    assert_eq!(json, "\"IndexedTo100\"");
}
