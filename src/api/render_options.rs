use serde::{Deserialize, Serialize};

/// Per-call display options shared by both chart builders.
///
/// Defaults: `width: None`, meaning the chart auto-sizes to the container
/// width given at mount time (or [`DEFAULT_WIDTH`] when the container has
/// none).
///
/// [`DEFAULT_WIDTH`]: crate::api::DEFAULT_WIDTH
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub width: Option<u32>,
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the chart to `width` pixels.
    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn is_auto_sized(self) -> bool {
        self.width.is_none()
    }
}
