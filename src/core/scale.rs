use serde::{Deserialize, Serialize};

use crate::core::ticks::{linear_ticks, nice_domain};
use crate::error::{ChartError, ChartResult};

/// Linear mapping from a numeric domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`) for Y axes whose
/// origin is the top-left corner. A zero-width domain maps every value to
/// the middle of the range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Width of the pixel range regardless of its orientation.
    #[must_use]
    pub fn range_extent(self) -> f64 {
        (self.range_end - self.range_start).abs()
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_start == self.domain_end
    }

    pub fn map(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return Ok((self.range_start + self.range_end) * 0.5);
        }
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 || self.is_degenerate() {
            return Ok(self.domain_start);
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Returns a copy whose domain is extended to round tick values.
    #[must_use]
    pub fn nice(self, tick_count: usize) -> Self {
        let (domain_start, domain_end) = nice_domain(self.domain_start, self.domain_end, tick_count);
        Self {
            domain_start,
            domain_end,
            ..self
        }
    }

    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        linear_ticks(self.domain_start, self.domain_end, tick_count)
    }

    pub fn with_range(self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        Self::new(self.domain_start, self.domain_end, range_start, range_end)
    }
}
