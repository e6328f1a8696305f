use std::rc::Rc;

use criterion::{Criterion, criterion_group, criterion_main};
use price_scale_rs::core::{
    AutoscaleInfo, PriceDataSource, PriceRange, PriceScale, PriceScaleOptions, SourceFirstValue,
    StrictRange,
};
use std::hint::black_box;

struct FixtureSource {
    range: PriceRange,
}

impl PriceDataSource for FixtureSource {
    fn first_value(&self) -> Option<SourceFirstValue> {
        Some(SourceFirstValue {
            value: self.range.min(),
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

fn bench_price_coordinate_round_trip(c: &mut Criterion) {
    let mut scale = PriceScale::new("right", PriceScaleOptions::default()).expect("price scale");
    scale.set_height(1_080.0);
    scale.set_price_range(Some(PriceRange::new(0.0, 10_000.0)));

    c.bench_function("price_coordinate_round_trip", |b| {
        b.iter(|| {
            let y = scale
                .price_to_coordinate(black_box(4_321.123), 4_321.123)
                .expect("to pixel");
            let _ = scale.coordinate_to_price(y, 4_321.123).expect("from pixel");
        })
    });
}

fn bench_autoscale_refit(c: &mut Criterion) {
    let mut scale = PriceScale::new("right", PriceScaleOptions::default()).expect("price scale");
    scale.set_height(1_080.0);
    for lane in 0..8 {
        let offset = f64::from(lane) * 12.5;
        scale.add_source(Rc::new(FixtureSource {
            range: PriceRange::new(offset, 100.0 + offset),
        }));
    }

    let mut window_left = 0i64;
    c.bench_function("autoscale_refit_8_sources", |b| {
        b.iter(|| {
            window_left = (window_left + 1) % 1_000;
            scale.set_visible_window(StrictRange::new(window_left, window_left + 500));
            black_box(scale.price_range())
        })
    });
}

fn bench_tick_marks_rebuild(c: &mut Criterion) {
    let mut scale = PriceScale::new("right", PriceScaleOptions::default()).expect("price scale");
    scale.set_height(1_080.0);
    scale.add_source(Rc::new(FixtureSource {
        range: PriceRange::new(0.0, 25_000.0),
    }));
    scale.set_visible_window(StrictRange::new(0, 500));

    let ranges = [
        PriceRange::new(0.0, 25_000.0),
        PriceRange::new(0.0, 25_001.0),
    ];
    let mut flip = 0usize;
    c.bench_function("tick_marks_rebuild_1080px", |b| {
        b.iter(|| {
            flip ^= 1;
            scale.set_price_range(Some(ranges[flip]));
            black_box(scale.marks().len())
        })
    });
}

criterion_group!(
    benches,
    bench_price_coordinate_round_trip,
    bench_autoscale_refit,
    bench_tick_marks_rebuild
);
criterion_main!(benches);
