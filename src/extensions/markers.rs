use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::TimeScale;
use crate::error::{ChartError, ChartResult};

/// Vertical annotation pinned to an instant on the time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateMarker {
    pub id: String,
    pub time: f64,
    pub text: Option<String>,
    pub priority: i32,
}

impl DateMarker {
    #[must_use]
    pub fn new(id: impl Into<String>, time: f64) -> Self {
        Self {
            id: id.into(),
            time,
            text: None,
            priority: 0,
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacementConfig {
    pub label_width_px: f64,
    pub label_height_px: f64,
    pub label_font_px: f64,
    pub lane_gap_px: f64,
    pub min_horizontal_gap_px: f64,
    pub top_offset_px: f64,
}

impl Default for MarkerPlacementConfig {
    fn default() -> Self {
        Self {
            label_width_px: 74.0,
            label_height_px: 18.0,
            label_font_px: 12.0,
            lane_gap_px: 4.0,
            min_horizontal_gap_px: 2.0,
            top_offset_px: 1.0,
        }
    }
}

impl MarkerPlacementConfig {
    pub fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.label_width_px, "label_width_px"),
            (self.label_height_px, "label_height_px"),
            (self.label_font_px, "label_font_px"),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "marker config `{name}` must be finite and > 0"
                )));
            }
        }
        for (value, name) in [
            (self.lane_gap_px, "lane_gap_px"),
            (self.min_horizontal_gap_px, "min_horizontal_gap_px"),
            (self.top_offset_px, "top_offset_px"),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "marker config `{name}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLabelGeometry {
    pub text: String,
    pub left_px: f64,
    pub top_px: f64,
    pub width_px: f64,
    pub height_px: f64,
}

/// Marker resolved to plot-local pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedMarker {
    pub id: String,
    pub time: f64,
    pub lane: usize,
    pub x: f64,
    pub line_top_px: f64,
    pub line_bottom_px: f64,
    pub label: Option<MarkerLabelGeometry>,
    pub collision_left_px: f64,
    pub collision_right_px: f64,
}

/// Places date markers on a plot with deterministic label lanes.
///
/// Markers whose time falls outside the scale's domain are skipped.
/// Placement order is stable by x, priority (desc), then marker id; a label
/// that would overlap an earlier one in the same lane moves down a lane.
pub fn place_markers(
    markers: &[DateMarker],
    time_scale: TimeScale,
    plot_height_px: f64,
    config: MarkerPlacementConfig,
) -> ChartResult<Vec<PlacedMarker>> {
    let config = config.validate()?;
    if !plot_height_px.is_finite() || plot_height_px < 0.0 {
        return Err(ChartError::InvalidData(
            "marker plot height must be finite and >= 0".to_owned(),
        ));
    }
    if markers.is_empty() {
        return Ok(Vec::new());
    }

    let (domain_start, domain_end) = time_scale.domain();
    let plot_width = time_scale.width_px();

    let mut prepared = Vec::with_capacity(markers.len());
    for (index, marker) in markers.iter().enumerate() {
        if !marker.time.is_finite() {
            return Err(ChartError::InvalidData(
                "marker time must be finite".to_owned(),
            ));
        }
        if marker.time < domain_start.min(domain_end) || marker.time > domain_start.max(domain_end)
        {
            debug!(id = %marker.id, time = marker.time, "marker outside time domain");
            continue;
        }

        let x = time_scale.time_to_pixel(marker.time)?;
        let (left, right) = match marker.text {
            Some(_) => label_span(x, plot_width, config.label_width_px),
            None => (x, x),
        };
        prepared.push(PreparedMarker {
            index,
            marker,
            x,
            left,
            right,
        });
    }

    prepared.sort_by(|a, b| {
        OrderedFloat(a.x)
            .cmp(&OrderedFloat(b.x))
            .then_with(|| b.marker.priority.cmp(&a.marker.priority))
            .then_with(|| a.marker.id.cmp(&b.marker.id))
            .then_with(|| a.index.cmp(&b.index))
    });

    let lane_step = config.label_height_px + config.lane_gap_px;
    let mut lane_last_right = Vec::<f64>::new();
    let mut placed = Vec::with_capacity(prepared.len());

    for item in prepared {
        let lane = allocate_lane(
            &mut lane_last_right,
            item.left,
            item.right,
            config.min_horizontal_gap_px,
        );
        let label = item.marker.text.as_ref().map(|text| MarkerLabelGeometry {
            text: text.clone(),
            left_px: item.left,
            top_px: config.top_offset_px + lane as f64 * lane_step,
            width_px: config.label_width_px,
            height_px: config.label_height_px,
        });

        placed.push(PlacedMarker {
            id: item.marker.id.clone(),
            time: item.marker.time,
            lane,
            x: item.x,
            line_top_px: 0.0,
            line_bottom_px: plot_height_px,
            label,
            collision_left_px: item.left,
            collision_right_px: item.right,
        });
    }

    Ok(placed)
}

#[derive(Debug)]
struct PreparedMarker<'a> {
    index: usize,
    marker: &'a DateMarker,
    x: f64,
    left: f64,
    right: f64,
}

// Labels hang to the right of the line unless that would leave the plot.
fn label_span(x: f64, plot_width: f64, label_width: f64) -> (f64, f64) {
    if x + label_width > plot_width && x - label_width >= 0.0 {
        (x - label_width, x)
    } else {
        (x, x + label_width)
    }
}

fn allocate_lane(last_right: &mut Vec<f64>, left: f64, right: f64, min_gap: f64) -> usize {
    for (lane, lane_last_right) in last_right.iter_mut().enumerate() {
        if left >= *lane_last_right + min_gap {
            *lane_last_right = right;
            return lane;
        }
    }
    last_right.push(right);
    last_right.len() - 1
}
