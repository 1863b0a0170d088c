use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

pub const DEFAULT_BAND_PADDING: f64 = 0.1;
pub const DEFAULT_POINT_PADDING: f64 = 0.5;

/// Discrete scale splitting a pixel range into `count` equal bands.
///
/// Bands are laid out in input order; `padding_inner` is the fraction of a
/// step left empty between bands and `padding_outer` the fraction of a step
/// reserved at each end.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    count: usize,
    range_start: f64,
    range_end: f64,
    padding_inner: f64,
    padding_outer: f64,
    align: f64,
}

impl BandScale {
    pub fn new(count: usize, range_start: f64, range_end: f64) -> ChartResult<Self> {
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "band scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            count,
            range_start,
            range_end,
            padding_inner: DEFAULT_BAND_PADDING,
            padding_outer: DEFAULT_BAND_PADDING,
            align: 0.5,
        })
    }

    pub fn with_padding(mut self, inner: f64, outer: f64) -> ChartResult<Self> {
        if !(0.0..=1.0).contains(&inner) || !outer.is_finite() || outer < 0.0 {
            return Err(ChartError::InvalidData(
                "band padding must be inner in [0, 1] and outer >= 0".to_owned(),
            ));
        }
        self.padding_inner = inner;
        self.padding_outer = outer;
        Ok(self)
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.count
    }

    #[must_use]
    pub fn step(self) -> f64 {
        let slots = self.count as f64 - self.padding_inner + self.padding_outer * 2.0;
        (self.range_end - self.range_start) / slots.max(1.0)
    }

    #[must_use]
    pub fn bandwidth(self) -> f64 {
        self.step() * (1.0 - self.padding_inner)
    }

    fn offset(self) -> f64 {
        let step = self.step();
        let used = step * (self.count as f64 - self.padding_inner);
        self.range_start + (self.range_end - self.range_start - used) * self.align
    }

    /// Leading edge of the band at `index`.
    #[must_use]
    pub fn position(self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.offset() + self.step() * index as f64)
    }

    #[must_use]
    pub fn center(self, index: usize) -> Option<f64> {
        self.position(index).map(|start| start + self.bandwidth() / 2.0)
    }
}

/// Discrete scale placing `count` evenly spaced points across a pixel range.
///
/// This is a band scale with zero bandwidth; `padding` is the fraction of a
/// step kept free before the first and after the last point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    band: BandScale,
}

impl PointScale {
    pub fn new(count: usize, range_start: f64, range_end: f64) -> ChartResult<Self> {
        let band = BandScale::new(count, range_start, range_end)?
            .with_padding(1.0, DEFAULT_POINT_PADDING)?;
        Ok(Self { band })
    }

    #[must_use]
    pub fn count(self) -> usize {
        self.band.count()
    }

    #[must_use]
    pub fn step(self) -> f64 {
        self.band.step()
    }

    #[must_use]
    pub fn position(self, index: usize) -> Option<f64> {
        self.band.position(index)
    }

    /// Positions of every point, in index order.
    pub fn positions(self) -> impl Iterator<Item = f64> {
        (0..self.count()).filter_map(move |index| self.position(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{BandScale, PointScale};
    use approx::assert_relative_eq;

    #[test]
    fn band_scale_reserves_padding_between_and_around_bands() {
        let scale = BandScale::new(2, 0.0, 210.0).expect("scale");
        // 2 - 0.1 + 0.2 = 2.1 slots of 100px.
        assert_relative_eq!(scale.step(), 100.0);
        assert_relative_eq!(scale.bandwidth(), 90.0);
        assert_relative_eq!(scale.position(0).expect("band"), 10.0);
        assert_relative_eq!(scale.position(1).expect("band"), 110.0);
        assert!(scale.position(2).is_none());
    }

    #[test]
    fn point_scale_centers_points_with_half_step_padding() {
        let scale = PointScale::new(4, 0.0, 400.0).expect("scale");
        let positions: Vec<f64> = scale.positions().collect();
        assert_eq!(positions, vec![50.0, 150.0, 250.0, 350.0]);
    }

    #[test]
    fn point_scale_with_single_point_uses_range_middle() {
        let scale = PointScale::new(1, 100.0, 300.0).expect("scale");
        assert_relative_eq!(scale.position(0).expect("point"), 200.0);
    }

    #[test]
    fn empty_scales_have_no_positions() {
        let scale = PointScale::new(0, 0.0, 100.0).expect("scale");
        assert_eq!(scale.positions().count(), 0);
    }
}
