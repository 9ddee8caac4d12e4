use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, TimeScale, ValueScale};
use crate::error::{ChartError, ChartResult};

/// Options for deriving a chart's scale pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleOptions {
    /// Round the value domain outward to tick-friendly bounds.
    pub nice_values: bool,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self { nice_values: true }
    }
}

/// The x (time) and y (magnitude) scales of one plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub x: TimeScale,
    pub y: ValueScale,
}

impl ChartScales {
    /// Pixel size of the plot the scales map onto.
    #[must_use]
    pub fn plot_size(self) -> (f64, f64) {
        (self.x.width_px(), self.y.height_px())
    }
}

/// Derives the time and value scales for `data` inside a plot of the given size.
///
/// The x domain spans the data's timestamps onto `[0, pixel_width]`. The y
/// domain is `[0, max(value)]` (niced) onto `[pixel_height, 0]`.
pub fn build_scales(
    data: &[DataPoint],
    pixel_width: f64,
    pixel_height: f64,
) -> ChartResult<ChartScales> {
    build_scales_with(data, pixel_width, pixel_height, ScaleOptions::default())
}

pub fn build_scales_with(
    data: &[DataPoint],
    pixel_width: f64,
    pixel_height: f64,
    options: ScaleOptions,
) -> ChartResult<ChartScales> {
    if data.is_empty() {
        return Err(ChartError::EmptyData("chart scales"));
    }

    Ok(ChartScales {
        x: TimeScale::from_data(data, pixel_width)?,
        y: ValueScale::from_data(data, pixel_height, options.nice_values)?,
    })
}
