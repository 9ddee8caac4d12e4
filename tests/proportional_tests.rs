use std::f64::consts::{FRAC_PI_2, PI, TAU};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use case_chart::core::{
    CategoryDatapoint, PIE_LABEL_MIN_ANGLE, PieArc, RegionTotals, derive_categories, layout_pie,
};
use case_chart::render::OrdinalPalette;
use indexmap::IndexMap;

fn arc(start_angle: f64, end_angle: f64) -> PieArc {
    PieArc {
        category: "test".to_owned(),
        value: 1.0,
        source_index: 0,
        start_angle,
        end_angle,
    }
}

#[test]
fn categories_are_population_percentages_in_input_order() {
    let mut regions = IndexMap::new();
    regions.insert(
        "Spain".to_owned(),
        RegionTotals {
            confirmed: 100.0,
            population: Some(1_000.0),
        },
    );
    regions.insert(
        "Nowhere".to_owned(),
        RegionTotals {
            confirmed: 5.0,
            population: Some(0.0),
        },
    );
    regions.insert(
        "Ghost".to_owned(),
        RegionTotals {
            confirmed: 5.0,
            population: None,
        },
    );

    let categories = derive_categories(&regions);
    let names: Vec<&str> = categories.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["Spain", "Nowhere", "Ghost"]);
    assert_relative_eq!(categories[0].value, 10.0);
    assert!(!categories[1].value.is_finite());
    assert!(categories[2].value.is_nan());
}

#[test]
fn wedges_sorted_ascending_and_cover_full_turn() {
    let layout = layout_pie(&[
        CategoryDatapoint::new("a", 30.0),
        CategoryDatapoint::new("b", 10.0),
        CategoryDatapoint::new("d", 20.0),
    ]);

    let order: Vec<&str> = layout.arcs.iter().map(|a| a.category.as_str()).collect();
    assert_eq!(order, vec!["b", "d", "a"]);
    assert_relative_eq!(layout.total, 60.0);

    assert_abs_diff_eq!(layout.arcs[0].start_angle, 0.0);
    assert_abs_diff_eq!(layout.arcs[0].end_angle, PI / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(layout.arcs[1].end_angle, PI, epsilon = 1e-12);
    assert_abs_diff_eq!(layout.arcs[2].end_angle, TAU, epsilon = 1e-12);

    for pair in layout.arcs.windows(2) {
        assert_eq!(pair[0].end_angle, pair[1].start_angle);
    }
    assert_eq!(layout.arcs[2].source_index, 0);
}

#[test]
fn non_finite_values_are_skipped_without_disturbing_others() {
    let clean = layout_pie(&[
        CategoryDatapoint::new("a", 30.0),
        CategoryDatapoint::new("b", 10.0),
    ]);
    let dirty = layout_pie(&[
        CategoryDatapoint::new("a", 30.0),
        CategoryDatapoint::new("x", f64::NAN),
        CategoryDatapoint::new("b", 10.0),
        CategoryDatapoint::new("y", f64::INFINITY),
    ]);

    assert_eq!(dirty.skipped, vec!["x".to_owned(), "y".to_owned()]);
    assert_eq!(dirty.arcs.len(), clean.arcs.len());
    for (a, b) in clean.arcs.iter().zip(&dirty.arcs) {
        assert_eq!(a.category, b.category);
        assert_eq!(a.start_angle, b.start_angle);
        assert_eq!(a.end_angle, b.end_angle);
    }
}

#[test]
fn zero_and_negative_values_get_empty_wedges() {
    let layout = layout_pie(&[
        CategoryDatapoint::new("neg", -4.0),
        CategoryDatapoint::new("zero", 0.0),
        CategoryDatapoint::new("pos", 8.0),
    ]);
    assert_eq!(layout.arcs[0].span(), 0.0);
    assert_eq!(layout.arcs[1].span(), 0.0);
    assert_abs_diff_eq!(layout.arcs[2].span(), TAU, epsilon = 1e-12);
}

#[test]
fn all_zero_total_yields_no_span() {
    let layout = layout_pie(&[
        CategoryDatapoint::new("a", 0.0),
        CategoryDatapoint::new("b", 0.0),
    ]);
    assert_eq!(layout.total, 0.0);
    assert!(layout.arcs.iter().all(|arc| arc.span() == 0.0));
}

#[test]
fn equal_values_keep_input_order() {
    let layout = layout_pie(&[
        CategoryDatapoint::new("x", 5.0),
        CategoryDatapoint::new("y", 5.0),
        CategoryDatapoint::new("z", 5.0),
    ]);
    let order: Vec<&str> = layout.arcs.iter().map(|a| a.category.as_str()).collect();
    assert_eq!(order, vec!["x", "y", "z"]);
}

#[test]
fn label_threshold_is_inclusive() {
    assert!(!arc(0.0, 0.09).has_space_for_label());
    assert!(arc(0.0, PIE_LABEL_MIN_ANGLE).has_space_for_label());
    assert!(arc(0.0, 0.5).has_space_for_label());
}

#[test]
fn centroid_and_rotation_follow_wedge_bisector() {
    let quarter = arc(0.0, FRAC_PI_2);
    let (x, y) = quarter.centroid(100.0);
    let expected = 50.0 * std::f64::consts::FRAC_1_SQRT_2;
    assert_abs_diff_eq!(x, expected, epsilon = 1e-9);
    assert_abs_diff_eq!(y, -expected, epsilon = 1e-9);
    assert_abs_diff_eq!(quarter.label_rotation_deg(), -45.0, epsilon = 1e-9);
}

#[test]
fn palette_assignment_is_deterministic_and_cycles() {
    let names = ["a", "b", "c", "d", "e"];
    let mut first = OrdinalPalette::default().with_domain(names);
    let mut second = OrdinalPalette::default().with_domain(names);

    for name in names {
        assert_eq!(first.color_for(name), second.color_for(name));
    }
    assert_eq!(first.color_for("e"), first.color_for("a"));
    assert_ne!(first.color_for("a"), first.color_for("b"));
    assert!(OrdinalPalette::new(Vec::new()).is_err());
}
