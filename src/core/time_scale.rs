use crate::core::ticks::{TimeTick, time_ticks};
use crate::core::{DataPoint, LinearScale};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Time axis: unix seconds mapped onto `[0, width]` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeScale {
    linear: LinearScale,
}

impl TimeScale {
    pub fn new(time_start: f64, time_end: f64, width_px: f64) -> ChartResult<Self> {
        if !width_px.is_finite() || width_px < 0.0 {
            return Err(ChartError::InvalidData(
                "time scale width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            linear: LinearScale::new(time_start, time_end, 0.0, width_px)?,
        })
    }

    /// Fits the domain to `[min(time), max(time)]` of `points`.
    pub fn from_data(points: &[DataPoint], width_px: f64) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptyData("time scale"));
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for point in points {
            if !point.time.is_finite() {
                return Err(ChartError::InvalidData(
                    "time values must be finite".to_owned(),
                ));
            }
            min = min.min(point.time);
            max = max.max(point.time);
        }

        Self::new(min, max, width_px)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        self.linear.range_extent()
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.linear
    }

    pub fn time_to_pixel(self, time: f64) -> ChartResult<f64> {
        self.linear.map(time)
    }

    pub fn pixel_to_time(self, pixel: f64) -> ChartResult<f64> {
        self.linear.invert(pixel)
    }

    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<TimeTick> {
        let (start, end) = self.domain();
        time_ticks(start, end, tick_count)
    }
}
