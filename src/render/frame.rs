use serde::{Deserialize, Serialize};

use crate::core::{TrendField, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// What a drawn item represents in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRole {
    GridLine,
    AxisTick,
    AxisLabel,
    AxisTitle,
    Frame,
    BaselineRule,
    Bar,
    ValueLabel,
    Line(TrendField),
    PointerRule,
    Tooltip,
}

impl ItemRole {
    /// Scaffolding is everything drawn regardless of the series content.
    #[must_use]
    pub fn is_scaffolding(self) -> bool {
        matches!(
            self,
            ItemRole::GridLine
                | ItemRole::AxisTick
                | ItemRole::AxisLabel
                | ItemRole::AxisTitle
                | ItemRole::Frame
                | ItemRole::BaselineRule
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line(LinePrimitive),
    Path(PathPrimitive),
    Rect(RectPrimitive),
    Text(TextPrimitive),
}

impl Primitive {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Primitive::Line(line) => line.validate(),
            Primitive::Path(path) => path.validate(),
            Primitive::Rect(rect) => rect.validate(),
            Primitive::Text(text) => text.validate(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameItem {
    pub role: ItemRole,
    pub primitive: Primitive,
}

/// Backend-agnostic scene for one chart draw pass.
///
/// Items are stored in paint order: later items are drawn over earlier ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub items: Vec<FrameItem>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, role: ItemRole, primitive: Primitive) {
        self.items.push(FrameItem { role, primitive });
    }

    #[must_use]
    pub fn with_line(mut self, role: ItemRole, line: LinePrimitive) -> Self {
        self.push(role, Primitive::Line(line));
        self
    }

    #[must_use]
    pub fn with_text(mut self, role: ItemRole, text: TextPrimitive) -> Self {
        self.push(role, Primitive::Text(text));
        self
    }

    #[must_use]
    pub fn with_rect(mut self, role: ItemRole, rect: RectPrimitive) -> Self {
        self.push(role, Primitive::Rect(rect));
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for item in &self.items {
            item.primitive.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items_with_role(&self, role: ItemRole) -> impl Iterator<Item = &FrameItem> {
        self.items.iter().filter(move |item| item.role == role)
    }

    #[must_use]
    pub fn count_role(&self, role: ItemRole) -> usize {
        self.items_with_role(role).count()
    }

    /// Texts drawn for `role`, in paint order.
    #[must_use]
    pub fn texts_with_role(&self, role: ItemRole) -> Vec<&TextPrimitive> {
        self.items_with_role(role)
            .filter_map(|item| match &item.primitive {
                Primitive::Text(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn rects_with_role(&self, role: ItemRole) -> Vec<&RectPrimitive> {
        self.items_with_role(role)
            .filter_map(|item| match &item.primitive {
                Primitive::Rect(rect) => Some(rect),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn lines_with_role(&self, role: ItemRole) -> Vec<&LinePrimitive> {
        self.items_with_role(role)
            .filter_map(|item| match &item.primitive {
                Primitive::Line(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn paths_with_role(&self, role: ItemRole) -> Vec<&PathPrimitive> {
        self.items_with_role(role)
            .filter_map(|item| match &item.primitive {
                Primitive::Path(path) => Some(path),
                _ => None,
            })
            .collect()
    }

    /// True when every item is data-independent scaffolding.
    #[must_use]
    pub fn is_scaffolding_only(&self) -> bool {
        self.items.iter().all(|item| item.role.is_scaffolding())
    }
}
