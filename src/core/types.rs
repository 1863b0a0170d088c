use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pixel size of one rendered chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One observation of the registration series.
///
/// The statistical fields are computed upstream and joined onto each point
/// before it reaches a chart. `None` marks a gap: no line segment is drawn
/// through that point for that field.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: String,
    #[serde(default)]
    pub y: Option<f64>,
    #[serde(default)]
    pub y_rolling_avg_3: Option<f64>,
    #[serde(default)]
    pub y_mean: Option<f64>,
    #[serde(default)]
    pub y_std_dev_plus_1_5: Option<f64>,
    #[serde(default)]
    pub y_std_dev_minus_1_5: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: impl Into<String>, y: f64) -> Self {
        Self {
            x: x.into(),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Point whose label is the ISO date (`YYYY-MM-DD`).
    #[must_use]
    pub fn from_date(date: NaiveDate, y: f64) -> Self {
        Self::new(date.format("%Y-%m-%d").to_string(), y)
    }

    /// Point with a missing raw count.
    #[must_use]
    pub fn missing(x: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_rolling_avg_3(mut self, value: f64) -> Self {
        self.y_rolling_avg_3 = Some(value);
        self
    }

    #[must_use]
    pub fn with_mean(mut self, value: f64) -> Self {
        self.y_mean = Some(value);
        self
    }

    /// Sets both std-dev band values (`mean + 1.5σ`, `mean - 1.5σ`).
    #[must_use]
    pub fn with_std_dev_bands(mut self, plus_1_5: f64, minus_1_5: f64) -> Self {
        self.y_std_dev_plus_1_5 = Some(plus_1_5);
        self.y_std_dev_minus_1_5 = Some(minus_1_5);
        self
    }
}

/// Numeric channels carried by a [`DataPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendField {
    #[serde(rename = "y")]
    Raw,
    #[serde(rename = "y_rolling_avg_3")]
    RollingAvg3,
    #[serde(rename = "y_mean")]
    Mean,
    #[serde(rename = "y_std_dev_plus_1_5")]
    StdDevPlus15,
    #[serde(rename = "y_std_dev_minus_1_5")]
    StdDevMinus15,
}

impl TrendField {
    pub const ALL: [TrendField; 5] = [
        TrendField::Raw,
        TrendField::RollingAvg3,
        TrendField::Mean,
        TrendField::StdDevPlus15,
        TrendField::StdDevMinus15,
    ];

    /// Stored value, finite or not.
    #[must_use]
    pub fn raw(self, point: &DataPoint) -> Option<f64> {
        match self {
            TrendField::Raw => point.y,
            TrendField::RollingAvg3 => point.y_rolling_avg_3,
            TrendField::Mean => point.y_mean,
            TrendField::StdDevPlus15 => point.y_std_dev_plus_1_5,
            TrendField::StdDevMinus15 => point.y_std_dev_minus_1_5,
        }
    }

    /// Returns the field value when present and finite.
    #[must_use]
    pub fn value(self, point: &DataPoint) -> Option<f64> {
        self.raw(point).filter(|v| v.is_finite())
    }

    #[must_use]
    pub fn field_name(self) -> &'static str {
        match self {
            TrendField::Raw => "y",
            TrendField::RollingAvg3 => "y_rolling_avg_3",
            TrendField::Mean => "y_mean",
            TrendField::StdDevPlus15 => "y_std_dev_plus_1_5",
            TrendField::StdDevMinus15 => "y_std_dev_minus_1_5",
        }
    }
}
