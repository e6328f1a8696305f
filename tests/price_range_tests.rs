use price_scale_rs::core::PriceRange;

#[test]
fn merge_takes_the_union_of_finite_spans() {
    let merged = PriceRange::new(10.0, 20.0).merge(PriceRange::new(5.0, 15.0));
    assert_eq!(merged, PriceRange::new(5.0, 20.0));
}

#[test]
fn merge_is_commutative_for_finite_ranges() {
    let left = PriceRange::new(-3.0, 7.0);
    let right = PriceRange::new(2.0, 11.0);
    assert_eq!(left.merge(right), right.merge(left));
}

#[test]
fn merge_with_all_infinite_range_returns_the_finite_side() {
    let range = PriceRange::new(42.0, 84.0);
    let infinite = PriceRange::new(f64::NEG_INFINITY, f64::INFINITY);
    assert_eq!(range.merge(infinite), range);
}

#[test]
fn merge_of_two_non_finite_ranges_falls_back_to_infinite_bounds() {
    let nan = PriceRange::new(f64::NAN, f64::NAN);
    let infinite = PriceRange::new(f64::NEG_INFINITY, f64::INFINITY);
    let merged = nan.merge(infinite);
    assert_eq!(merged.min(), f64::NEG_INFINITY);
    assert_eq!(merged.max(), f64::INFINITY);
}

#[test]
fn half_open_sentinel_defers_to_the_finite_bound() {
    let partial = PriceRange::new(f64::NEG_INFINITY, 50.0);
    let merged = partial.merge(PriceRange::new(10.0, 20.0));
    assert_eq!(merged, PriceRange::new(10.0, 50.0));
}

#[test]
fn emptiness_covers_flat_and_nan_ranges() {
    assert!(PriceRange::new(5.0, 5.0).is_empty());
    assert!(PriceRange::new(f64::NAN, 5.0).is_empty());
    assert!(PriceRange::new(5.0, f64::NAN).is_empty());
    assert!(!PriceRange::new(5.0, 6.0).is_empty());
}

#[test]
fn scale_around_center_keeps_the_center_fixed() {
    let mut range = PriceRange::new(10.0, 30.0);
    range.scale_around_center(0.5);
    assert_eq!(range, PriceRange::new(15.0, 25.0));
}

#[test]
fn scale_around_center_is_a_no_op_on_a_flat_range() {
    let mut range = PriceRange::new(10.0, 10.0);
    range.scale_around_center(2.0);
    assert_eq!(range, PriceRange::new(10.0, 10.0));
}

#[test]
fn shift_moves_both_bounds() {
    let mut range = PriceRange::new(10.0, 30.0);
    range.shift(-10.0);
    assert_eq!(range, PriceRange::new(0.0, 20.0));
}
