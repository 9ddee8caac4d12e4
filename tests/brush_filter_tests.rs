use approx::assert_relative_eq;
use case_chart::core::{
    BrushDirection, DataPoint, SelectionRange, TimeScale, ValueScale, filter_by_range,
};

fn series() -> Vec<DataPoint> {
    (0..10)
        .map(|i| DataPoint::new(f64::from(i), f64::from(i * 10)))
        .collect()
}

#[test]
fn absent_range_is_identity() {
    let data = series();
    assert_eq!(filter_by_range(&data, None), data);
}

#[test]
fn bounds_are_exclusive_on_both_axes() {
    let data = [
        DataPoint::new(5.0, 50.0),
        DataPoint::new(6.0, 60.0),
        DataPoint::new(7.0, 100.0),
    ];
    let range = SelectionRange::new(5.0, 10.0, 0.0, 100.0);
    let kept = filter_by_range(&data, Some(&range));
    assert_eq!(kept, vec![DataPoint::new(6.0, 60.0)]);
}

#[test]
fn filter_preserves_order() {
    let range = SelectionRange::new(1.5, 7.5, -1.0, 1_000.0);
    let kept = filter_by_range(&series(), Some(&range));
    let times: Vec<f64> = kept.iter().map(|point| point.time).collect();
    assert_eq!(times, vec![2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn clearing_restores_original_sequence() {
    let data = series();
    let range = SelectionRange::new(2.0, 4.0, -1.0, 1_000.0);
    let narrowed = filter_by_range(&data, Some(&range));
    assert_eq!(narrowed.len(), 1);

    let restored = filter_by_range(&data, None);
    assert_eq!(restored, data);
}

#[test]
fn horizontal_brush_spans_full_value_domain() {
    let x_scale = TimeScale::new(0.0, 100.0, 200.0).expect("time scale");
    let y_scale = ValueScale::new(0.0, 50.0, 100.0).expect("value scale");

    let range = SelectionRange::from_pixels(
        (150.0, 80.0),
        (50.0, 20.0),
        x_scale,
        y_scale,
        BrushDirection::Horizontal,
    )
    .expect("range");

    assert_relative_eq!(range.x0, 25.0);
    assert_relative_eq!(range.x1, 75.0);
    assert_relative_eq!(range.y0, 0.0);
    assert_relative_eq!(range.y1, 50.0);
}

#[test]
fn two_dimensional_brush_uses_drag_extent() {
    let x_scale = TimeScale::new(0.0, 100.0, 200.0).expect("time scale");
    let y_scale = ValueScale::new(0.0, 50.0, 100.0).expect("value scale");

    let range = SelectionRange::from_pixels(
        (50.0, 80.0),
        (150.0, 20.0),
        x_scale,
        y_scale,
        BrushDirection::Both,
    )
    .expect("range");

    assert_relative_eq!(range.y0, 10.0);
    assert_relative_eq!(range.y1, 40.0);
}

#[test]
fn default_direction_is_horizontal() {
    assert_eq!(BrushDirection::default(), BrushDirection::Horizontal);
}
