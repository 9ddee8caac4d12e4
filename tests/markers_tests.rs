use approx::assert_relative_eq;
use case_chart::api::default_wave_markers;
use case_chart::core::TimeScale;
use case_chart::core::primitives::date_to_unix_seconds;
use case_chart::extensions::{DateMarker, MarkerPlacementConfig, place_markers};
use chrono::NaiveDate;

fn unit_scale() -> TimeScale {
    // one pixel per second over [0, 1000]
    TimeScale::new(0.0, 1_000.0, 1_000.0).expect("time scale")
}

#[test]
fn default_waves_are_six_ordered_and_labelled() {
    let waves = default_wave_markers();
    assert_eq!(waves.len(), 6);

    let texts: Vec<&str> = waves
        .iter()
        .filter_map(|marker| marker.text.as_deref())
        .collect();
    assert_eq!(
        texts,
        vec![
            "1st wave", "2nd wave", "3rd wave", "4th wave", "5th wave", "6th wave"
        ]
    );

    let first = NaiveDate::from_ymd_opt(2020, 3, 10).expect("valid date");
    assert_eq!(waves[0].time, date_to_unix_seconds(first));
    assert!(waves.windows(2).all(|pair| pair[0].time < pair[1].time));
}

#[test]
fn overlapping_labels_move_down_a_lane() {
    let markers = vec![
        DateMarker::new("a", 100.0).with_text("first"),
        DateMarker::new("b", 150.0).with_text("second"),
        DateMarker::new("c", 300.0).with_text("third"),
    ];
    let config = MarkerPlacementConfig::default();
    let placed = place_markers(&markers, unit_scale(), 400.0, config).expect("placement");

    let lanes: Vec<usize> = placed.iter().map(|marker| marker.lane).collect();
    assert_eq!(lanes, vec![0, 1, 0]);

    let second_label = placed[1].label.as_ref().expect("label");
    assert_relative_eq!(
        second_label.top_px,
        config.top_offset_px + config.label_height_px + config.lane_gap_px
    );
    assert_relative_eq!(placed[1].line_bottom_px, 400.0);
}

#[test]
fn label_near_right_edge_hangs_left() {
    let markers = vec![DateMarker::new("edge", 990.0).with_text("late")];
    let placed = place_markers(
        &markers,
        unit_scale(),
        100.0,
        MarkerPlacementConfig::default(),
    )
    .expect("placement");

    let label = placed[0].label.as_ref().expect("label");
    assert_relative_eq!(label.left_px, 916.0);
    assert_relative_eq!(placed[0].collision_right_px, 990.0);
}

#[test]
fn markers_outside_domain_are_skipped() {
    let markers = vec![
        DateMarker::new("before", -5.0).with_text("early"),
        DateMarker::new("inside", 500.0).with_text("mid"),
        DateMarker::new("after", 1_500.0).with_text("late"),
    ];
    let placed = place_markers(
        &markers,
        unit_scale(),
        100.0,
        MarkerPlacementConfig::default(),
    )
    .expect("placement");

    assert_eq!(placed.len(), 1);
    assert_eq!(placed[0].id, "inside");
}

#[test]
fn textless_marker_has_zero_width_collision_box() {
    let markers = vec![DateMarker::new("bare", 200.0)];
    let placed = place_markers(
        &markers,
        unit_scale(),
        100.0,
        MarkerPlacementConfig::default(),
    )
    .expect("placement");

    assert!(placed[0].label.is_none());
    assert_eq!(placed[0].collision_left_px, placed[0].collision_right_px);
}

#[test]
fn placement_is_independent_of_input_order() {
    let forward = vec![
        DateMarker::new("a", 100.0).with_text("a"),
        DateMarker::new("b", 100.0).with_text("b").with_priority(5),
        DateMarker::new("c", 120.0).with_text("c"),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();

    let config = MarkerPlacementConfig::default();
    let first = place_markers(&forward, unit_scale(), 50.0, config).expect("placement");
    let second = place_markers(&reversed, unit_scale(), 50.0, config).expect("placement");
    assert_eq!(first, second);
    // Higher priority wins the top lane at an equal x.
    assert_eq!(first[0].id, "b");
    assert_eq!(first[0].lane, 0);
}

#[test]
fn invalid_placement_config_is_rejected() {
    let config = MarkerPlacementConfig {
        label_width_px: 0.0,
        ..MarkerPlacementConfig::default()
    };
    let markers = vec![DateMarker::new("a", 1.0)];
    assert!(place_markers(&markers, unit_scale(), 10.0, config).is_err());

    let markers = vec![DateMarker::new("nan", f64::NAN)];
    assert!(
        place_markers(
            &markers,
            unit_scale(),
            10.0,
            MarkerPlacementConfig::default()
        )
        .is_err()
    );
}
