pub mod band_scale;
pub mod curve;
pub mod format;
pub mod scale;
pub mod ticks;
pub mod types;

pub use band_scale::{BandScale, PointScale};
pub use curve::{Curve, PathCommand};
pub use scale::LinearScale;
pub use types::{DataPoint, TrendField, Viewport};
