use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, TimeScale, ValueScale};
use crate::error::ChartResult;

/// Rectangular selection in data space.
///
/// `x0..x1` are unix seconds and `y0..y1` are values. Bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

/// Axes a brush gesture constrains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrushDirection {
    /// Only x follows the drag; y spans the full overview domain.
    #[default]
    Horizontal,
    Both,
}

impl SelectionRange {
    #[must_use]
    pub fn new(x0: f64, x1: f64, y0: f64, y1: f64) -> Self {
        Self { x0, x1, y0, y1 }
    }

    #[must_use]
    pub fn contains(&self, point: &DataPoint) -> bool {
        point.time > self.x0 && point.time < self.x1 && point.value > self.y0 && point.value < self.y1
    }

    /// Converts a drag rectangle in overview-local pixels into data space.
    ///
    /// Corners may be given in any order; the result is normalized so that
    /// `x0 <= x1` and `y0 <= y1`.
    pub fn from_pixels(
        start: (f64, f64),
        end: (f64, f64),
        x_scale: TimeScale,
        y_scale: ValueScale,
        direction: BrushDirection,
    ) -> ChartResult<Self> {
        let t_a = x_scale.pixel_to_time(start.0)?;
        let t_b = x_scale.pixel_to_time(end.0)?;

        let (v_a, v_b) = match direction {
            BrushDirection::Horizontal => y_scale.domain(),
            BrushDirection::Both => (
                y_scale.pixel_to_value(start.1)?,
                y_scale.pixel_to_value(end.1)?,
            ),
        };

        Ok(Self {
            x0: t_a.min(t_b),
            x1: t_a.max(t_b),
            y0: v_a.min(v_b),
            y1: v_a.max(v_b),
        })
    }
}

/// Keeps the points strictly inside `range`, preserving order.
///
/// `None` is the cleared selection and yields the whole dataset.
#[must_use]
pub fn filter_by_range(data: &[DataPoint], range: Option<&SelectionRange>) -> Vec<DataPoint> {
    match range {
        None => data.to_vec(),
        Some(range) => data
            .iter()
            .filter(|point| range.contains(point))
            .copied()
            .collect(),
    }
}
