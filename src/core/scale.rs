use serde::{Deserialize, Serialize};

use crate::core::ticks;
use crate::error::{ChartError, ChartResult};

/// Continuous value scale mapping a numeric domain onto a pixel range.
///
/// The range may be inverted (`range_start > range_end`), which is how the
/// vertical axis maps larger values closer to the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start: 0.0,
            range_end: 1.0,
        })
    }

    /// Builds a scale whose domain covers every finite value in `values`,
    /// extended to round tick boundaries.
    ///
    /// An empty input yields `[0, 1]`; a single distinct value `v` yields a
    /// unit-wide domain around it.
    pub fn from_values<I>(values: I, tick_count: usize) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for value in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(value);
            max = max.max(value);
        }

        let (start, end) = if min > max {
            (0.0, 1.0)
        } else if min == max {
            (min - 1.0, max + 1.0)
        } else {
            (min, max)
        };

        let (start, end) = ticks::nice(start, end, tick_count);
        Self::new(start, end)
    }

    pub fn with_range(mut self, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }
        self.range_start = range_start;
        self.range_end = range_end;
        Ok(self)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    pub fn pixel_to_domain(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return Err(ChartError::InvalidData(
                "scale range must be non-empty to invert".to_owned(),
            ));
        }
        let normalized = (pixel - self.range_start) / range_span;
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }

    /// Tick values inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain_start, self.domain_end, count)
    }

    /// Step between consecutive ticks for the given `count`.
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        ticks::tick_step(self.domain_start, self.domain_end, count)
    }
}
