use std::rc::Rc;

use price_scale_rs::core::{
    AutoscaleInfo, PriceDataSource, PriceRange, PriceScale, PriceScaleMargins, PriceScaleMode,
    PriceScaleOptions, PriceScaleStateChange, SourceFirstValue, StrictRange,
};

struct StubSource {
    first_value: f64,
    range: PriceRange,
}

impl PriceDataSource for StubSource {
    fn first_value(&self) -> Option<SourceFirstValue> {
        Some(SourceFirstValue {
            value: self.first_value,
            index: 0,
        })
    }

    fn autoscale_info(&self, _visible_window: StrictRange) -> Option<AutoscaleInfo> {
        Some(AutoscaleInfo {
            price_range: Some(self.range),
            margins: None,
        })
    }
}

fn scale_over(range: PriceRange, options: PriceScaleOptions) -> PriceScale {
    let mut scale = PriceScale::new("right", options).expect("price scale");
    scale.set_height(500.0);
    scale.add_source(Rc::new(StubSource {
        first_value: range.min(),
        range,
    }));
    scale.set_visible_window(StrictRange::new(0, 100));
    scale
}

fn flat_margin_options() -> PriceScaleOptions {
    PriceScaleOptions {
        scale_margins: PriceScaleMargins {
            top: 0.0,
            bottom: 0.0,
        },
        ..Default::default()
    }
}

#[test]
fn consecutive_marks_keep_the_minimum_spacing() {
    let mut scale = scale_over(PriceRange::new(0.0, 1_000.0), flat_margin_options());
    let min_spacing = (scale.options().font_size_px * 2.5).ceil();
    let marks = scale.marks();
    assert!(marks.len() >= 2);
    for pair in marks.windows(2) {
        assert!((pair[1].coord - pair[0].coord).abs() >= min_spacing - 1e-9);
    }
}

#[test]
fn marks_stay_inside_the_pixel_window() {
    let mut scale = scale_over(PriceRange::new(-250.0, 750.0), flat_margin_options());
    let height = scale.height();
    for mark in scale.marks() {
        assert!(mark.coord >= 0.0);
        assert!(mark.coord <= height - 1.0);
    }
}

#[test]
fn entire_text_only_excludes_clipped_boundary_marks() {
    let options = PriceScaleOptions {
        entire_text_only: true,
        ..flat_margin_options()
    };
    let mut scale = scale_over(PriceRange::new(0.0, 1_000.0), options);
    let half_font = scale.options().font_size_px / 2.0;
    let height = scale.height();
    for mark in scale.marks() {
        assert!(mark.coord >= half_font);
        assert!(mark.coord <= height - 1.0 - half_font);
    }
}

#[test]
fn labels_use_the_source_precision() {
    let mut scale = scale_over(PriceRange::new(0.0, 1_000.0), flat_margin_options());
    for mark in scale.marks() {
        assert!(!mark.label.is_empty());
        assert!(!mark.label.contains('.'));
    }
}

#[test]
fn percentage_labels_carry_the_suffix() {
    let options = PriceScaleOptions {
        mode: PriceScaleMode::Percentage,
        ..flat_margin_options()
    };
    let mut scale = scale_over(PriceRange::new(100.0, 200.0), options);
    let marks = scale.marks();
    assert!(!marks.is_empty());
    for mark in marks {
        assert!(mark.label.ends_with('%'));
    }
}

#[test]
fn log_mode_marks_keep_the_minimum_spacing() {
    let mut scale = scale_over(PriceRange::new(1.0, 10_000.0), flat_margin_options());
    scale.set_mode(PriceScaleStateChange {
        mode: Some(PriceScaleMode::Logarithmic),
        ..Default::default()
    });
    let min_spacing = (scale.options().font_size_px * 2.5).ceil();
    let marks = scale.marks();
    assert!(marks.len() >= 2);
    for pair in marks.windows(2) {
        assert!((pair[1].coord - pair[0].coord).abs() >= min_spacing - 1e-9);
    }
}

#[test]
fn zero_height_scale_produces_no_marks() {
    let options = flat_margin_options();
    let mut scale = PriceScale::new("right", options).expect("price scale");
    scale.add_source(Rc::new(StubSource {
        first_value: 0.0,
        range: PriceRange::new(0.0, 100.0),
    }));
    scale.set_visible_window(StrictRange::new(0, 100));
    assert!(scale.marks().is_empty());
}

#[test]
fn edge_marks_extend_to_the_boundaries() {
    let options = PriceScaleOptions {
        ensure_edge_tick_marks_visible: true,
        ..flat_margin_options()
    };
    let mut scale = scale_over(PriceRange::new(0.0, 1_000.0), options);
    let marks: Vec<_> = scale.marks().to_vec();
    assert!(marks.len() >= 2);
    for pair in marks.windows(2) {
        assert!(pair[0].coord <= pair[1].coord);
    }
    let first = marks.first().expect("first mark");
    let last = marks.last().expect("last mark");
    // Both boundary marks sit within one tick step of their edge.
    let height = scale.height();
    assert!(first.coord <= height * 0.25);
    assert!(last.coord >= height * 0.75);
}

#[test]
fn inversion_rebuild_reports_marks_changed() {
    let mut scale = scale_over(PriceRange::new(0.0, 1_000.0), flat_margin_options());
    let _ = scale.marks();
    assert!(scale.take_marks_changed());

    let _ = scale.marks();
    assert!(!scale.take_marks_changed());

    scale.set_mode(PriceScaleStateChange {
        is_inverted: Some(true),
        ..Default::default()
    });
    let _ = scale.marks();
    assert!(scale.take_marks_changed());
}
