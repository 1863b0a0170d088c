use crate::error::ChartResult;
use crate::render::{ItemRole, Primitive, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so invalid geometry is caught before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_item_count: usize,
    pub last_text_count: usize,
    pub last_tooltip_visible: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_item_count = frame.items.len();
        self.last_text_count = frame
            .items
            .iter()
            .filter(|item| matches!(item.primitive, Primitive::Text(_)))
            .count();
        self.last_tooltip_visible = frame.count_role(ItemRole::Tooltip) > 0;
        Ok(())
    }
}
