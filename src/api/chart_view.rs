use tracing::{debug, trace, warn};

use crate::core::DataPoint;
use crate::error::ChartResult;
use crate::interaction::{PointerRuleState, PointerSnap, PointerState};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_render_frame;
use super::snap_resolver::resolve_snap;
use super::{ChartLayout, ChartSpec, Tooltip};

impl<'a> ChartSpec<'a> {
    /// Binds the spec to a renderer at the given container width.
    ///
    /// The returned view starts with the pointer rule `Idle`.
    pub fn mount<R: Renderer>(
        self,
        renderer: R,
        container_width: Option<u32>,
    ) -> ChartResult<ChartView<'a, R>> {
        let layout = ChartLayout::resolve(&self, container_width)?;
        debug!(
            kind = ?self.kind,
            points = self.data.len(),
            width = layout.viewport.width,
            height = layout.viewport.height,
            "mount chart"
        );
        let non_finite = self.non_finite_samples();
        if non_finite > 0 {
            warn!(
                kind = ?self.kind,
                samples = non_finite,
                "non-finite samples will render as gaps"
            );
        }
        Ok(ChartView {
            renderer,
            spec: self,
            layout,
            pointer: PointerRuleState::default(),
        })
    }
}

/// A spec mounted on a display surface.
///
/// Owns the renderer and the pointer-rule state for this mount only.
pub struct ChartView<'a, R: Renderer> {
    renderer: R,
    spec: ChartSpec<'a>,
    layout: ChartLayout,
    pointer: PointerRuleState,
}

impl<'a, R: Renderer> ChartView<'a, R> {
    #[must_use]
    pub fn spec(&self) -> &ChartSpec<'a> {
        &self.spec
    }

    #[must_use]
    pub fn layout(&self) -> ChartLayout {
        self.layout
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn pointer_state(&self) -> PointerRuleState {
        self.pointer
    }

    /// Re-lays the chart out for a new container width.
    ///
    /// A fixed spec width still wins over the container. The pointer snap is
    /// re-resolved against the new geometry.
    pub fn resize(&mut self, container_width: Option<u32>) -> ChartResult<()> {
        self.layout = ChartLayout::resolve(&self.spec, container_width)?;
        if self.pointer.is_hovering() {
            let (x, _) = self.pointer.cursor();
            self.pointer.set_snap(resolve_snap(self.spec.data, &self.layout, x));
        }
        Ok(())
    }

    #[must_use]
    pub fn map_index_to_pixel(&self, index: usize) -> Option<f64> {
        self.layout.x.position(index)
    }

    pub fn map_value_to_pixel(&self, value: f64) -> ChartResult<f64> {
        self.layout.y.domain_to_pixel(value)
    }

    /// Same as a move to `(x, y)`.
    pub fn pointer_enter(&mut self, x: f64, y: f64) {
        self.pointer_move(x, y);
    }

    /// Moves the pointer rule to the point nearest to `x`.
    ///
    /// Charts without a pointer rule, and non-finite coordinates, leave the
    /// state untouched.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.spec.pointer.is_none() || !x.is_finite() || !y.is_finite() {
            trace!(x, y, "pointer move ignored");
            return;
        }
        self.pointer.on_pointer_move(x, y);
        self.pointer.set_snap(resolve_snap(self.spec.data, &self.layout, x));
        trace!(x, y, snap = ?self.pointer.snap().map(|snap| snap.index), "pointer move");
    }

    pub fn pointer_leave(&mut self) {
        if self.pointer.state() == PointerState::Hovering {
            trace!("pointer leave");
        }
        self.pointer.on_pointer_leave();
    }

    /// Nearest point to `pointer_x`, independent of the pointer state.
    #[must_use]
    pub fn snap_at_x(&self, pointer_x: f64) -> Option<PointerSnap> {
        resolve_snap(self.spec.data, &self.layout, pointer_x)
    }

    #[must_use]
    pub fn nearest_point(&self, pointer_x: f64) -> Option<&'a DataPoint> {
        let data = self.spec.data;
        self.snap_at_x(pointer_x).and_then(|snap| data.get(snap.index))
    }

    /// Point currently under the pointer rule, if hovering.
    #[must_use]
    pub fn hovered_point(&self) -> Option<&'a DataPoint> {
        let data = self.spec.data;
        self.pointer.snap().and_then(|snap| data.get(snap.index))
    }

    /// Tooltip for the hovered point.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let pointer_spec = self.spec.pointer.as_ref()?;
        self.hovered_point().map(|point| Tooltip::for_point(pointer_spec, point))
    }

    #[must_use]
    pub fn tooltip_at_x(&self, pointer_x: f64) -> Option<Tooltip> {
        let pointer_spec = self.spec.pointer.as_ref()?;
        self.nearest_point(pointer_x).map(|point| Tooltip::for_point(pointer_spec, point))
    }

    pub fn build_render_frame(&self) -> ChartResult<RenderFrame> {
        build_render_frame(&self.spec, &self.layout, self.pointer)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }
}
