//! enarm-charts: declarative bar and trend charts for exam-registration
//! dashboards.
//!
//! Builders turn a series into a [`ChartSpec`]; mounting a spec on a
//! [`render::Renderer`] yields a [`ChartView`] that materializes frames and
//! tracks the pointer rule.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ChartSpec, ChartView, RenderOptions, Tooltip, bar_chart, trend_chart};
pub use error::{ChartError, ChartResult};
