use std::f64::consts::{FRAC_PI_2, TAU};

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::CategoryDatapoint;

/// Minimum wedge span (radians) that still gets a label, about 1.6% of a turn.
pub const PIE_LABEL_MIN_ANGLE: f64 = 0.1;

/// Per-region totals as reported by the snapshot endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionTotals {
    pub confirmed: f64,
    #[serde(default)]
    pub population: Option<f64>,
}

/// Confirmed cases as a percentage of population, per region, in input order.
///
/// A zero or missing population yields a non-finite value; such regions are
/// kept so callers can report them, and are dropped later by `layout_pie`.
#[must_use]
pub fn derive_categories(regions: &IndexMap<String, RegionTotals>) -> Vec<CategoryDatapoint> {
    regions
        .iter()
        .map(|(region, totals)| {
            let population = totals.population.unwrap_or(f64::NAN);
            let value = totals.confirmed / population * 100.0;
            if !value.is_finite() {
                debug!(region = %region, population, "degenerate population share");
            }
            CategoryDatapoint::new(region.clone(), value)
        })
        .collect()
}

/// One wedge of the pie, angles in radians clockwise from 12 o'clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieArc {
    pub category: String,
    pub value: f64,
    /// Position of the category in the input, used for palette lookup.
    pub source_index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl PieArc {
    #[must_use]
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    #[must_use]
    pub fn mid_angle(&self) -> f64 {
        0.5 * (self.start_angle + self.end_angle)
    }

    #[must_use]
    pub fn has_space_for_label(&self) -> bool {
        self.span() >= PIE_LABEL_MIN_ANGLE
    }

    /// Centroid of the wedge for a full pie of `outer_radius`, relative to
    /// the pie center with y growing downward.
    #[must_use]
    pub fn centroid(&self, outer_radius: f64) -> (f64, f64) {
        let radius = 0.5 * outer_radius;
        let angle = self.mid_angle() - FRAC_PI_2;
        (radius * angle.cos(), radius * angle.sin())
    }

    /// Label rotation in degrees so the text follows the wedge's bisector.
    #[must_use]
    pub fn label_rotation_deg(&self) -> f64 {
        self.mid_angle().to_degrees() - 90.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLayout {
    pub arcs: Vec<PieArc>,
    /// Categories left out because their value is not finite.
    pub skipped: Vec<String>,
    pub total: f64,
}

/// Allocates a full turn across categories proportionally to their value.
///
/// Wedges are ordered by ascending value (stable for equal values). Values
/// that are zero or negative get an empty wedge; non-finite values are left
/// out entirely and reported in `skipped`.
#[must_use]
pub fn layout_pie(categories: &[CategoryDatapoint]) -> PieLayout {
    let mut skipped = Vec::new();
    let mut ordered: Vec<(usize, &CategoryDatapoint)> = Vec::with_capacity(categories.len());
    for (index, category) in categories.iter().enumerate() {
        if category.value.is_finite() {
            ordered.push((index, category));
        } else {
            skipped.push(category.category.clone());
        }
    }
    if !skipped.is_empty() {
        warn!(
            skipped = skipped.len(),
            "pie layout skipped categories with non-finite values"
        );
    }

    ordered.sort_by_key(|(_, category)| OrderedFloat(category.value));

    let total: f64 = ordered
        .iter()
        .map(|(_, category)| category.value.max(0.0))
        .sum();

    let mut angle = 0.0;
    let mut arcs = Vec::with_capacity(ordered.len());
    for (source_index, category) in ordered {
        let span = if total > 0.0 {
            category.value.max(0.0) / total * TAU
        } else {
            0.0
        };
        arcs.push(PieArc {
            category: category.category.clone(),
            value: category.value,
            source_index,
            start_angle: angle,
            end_angle: angle + span,
        });
        angle += span;
    }

    PieLayout {
        arcs,
        skipped,
        total,
    }
}
