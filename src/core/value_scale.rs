use crate::core::ticks::NICE_TICK_COUNT;
use crate::core::{DataPoint, LinearScale};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Magnitude axis anchored at zero and mapped to an inverted Y pixel axis.
///
/// `value_to_pixel(0.0)` is the bottom of the plot (`height_px`); the domain
/// maximum is the top (`0.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    linear: LinearScale,
}

impl ValueScale {
    pub fn new(value_min: f64, value_max: f64, height_px: f64) -> ChartResult<Self> {
        if !height_px.is_finite() || height_px < 0.0 {
            return Err(ChartError::InvalidData(
                "value scale height must be finite and >= 0".to_owned(),
            ));
        }
        Ok(Self {
            linear: LinearScale::new(value_min, value_max, height_px, 0.0)?,
        })
    }

    /// Fits `[0, max(value)]`, optionally rounded to nice tick bounds.
    ///
    /// A series with no positive value fits `[0, 1]`, keeping zero on the
    /// bottom edge.
    pub fn from_data(points: &[DataPoint], height_px: f64, nice: bool) -> ChartResult<Self> {
        if points.is_empty() {
            return Err(ChartError::EmptyData("value scale"));
        }

        let mut max = f64::NEG_INFINITY;
        for point in points {
            if !point.value.is_finite() {
                return Err(ChartError::InvalidData(
                    "values must be finite".to_owned(),
                ));
            }
            max = max.max(point.value);
        }

        if max <= 0.0 {
            max = 1.0;
        }

        let scale = Self::new(0.0, max, height_px)?;
        Ok(if nice { scale.nice(NICE_TICK_COUNT) } else { scale })
    }

    #[must_use]
    pub fn nice(self, tick_count: usize) -> Self {
        Self {
            linear: self.linear.nice(tick_count),
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.linear.domain()
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        self.linear.range_extent()
    }

    #[must_use]
    pub fn linear(self) -> LinearScale {
        self.linear
    }

    pub fn value_to_pixel(self, value: f64) -> ChartResult<f64> {
        self.linear.map(value)
    }

    pub fn pixel_to_value(self, pixel: f64) -> ChartResult<f64> {
        self.linear.invert(pixel)
    }

    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        self.linear.ticks(tick_count)
    }
}
