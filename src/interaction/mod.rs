use serde::{Deserialize, Serialize};

/// Lifecycle of the pointer rule on a mounted chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerState {
    /// No pointer over the chart. Every mount starts here.
    #[default]
    Idle,
    /// Pointer over the chart; the rule tracks the nearest point.
    Hovering,
}

/// Nearest data point resolved for a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSnap {
    /// Index of the resolved point in the input series.
    pub index: usize,
    /// Horizontal pixel position of the resolved point.
    pub x: f64,
    /// Vertical pixel position of the raw count, when present.
    pub y: Option<f64>,
    /// Horizontal pixel distance between pointer and resolved point.
    pub distance: f64,
}

/// Pointer-rule state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerRuleState {
    state: PointerState,
    cursor_x: f64,
    cursor_y: f64,
    snap: Option<PointerSnap>,
}

impl PointerRuleState {
    #[must_use]
    pub fn state(self) -> PointerState {
        self.state
    }

    #[must_use]
    pub fn is_hovering(self) -> bool {
        self.state == PointerState::Hovering
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn snap(self) -> Option<PointerSnap> {
        self.snap
    }

    /// `Idle -> Hovering` and `Hovering -> Hovering`; the caller re-resolves
    /// the snap afterwards.
    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.state = PointerState::Hovering;
        self.cursor_x = x;
        self.cursor_y = y;
    }

    /// `Hovering -> Idle`; clears the resolved point.
    pub fn on_pointer_leave(&mut self) {
        self.state = PointerState::Idle;
        self.snap = None;
    }

    pub fn set_snap(&mut self, snap: Option<PointerSnap>) {
        self.snap = match self.state {
            PointerState::Hovering => snap,
            PointerState::Idle => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{PointerRuleState, PointerSnap, PointerState};

    fn snap(index: usize) -> PointerSnap {
        PointerSnap {
            index,
            x: 10.0 * index as f64,
            y: None,
            distance: 0.0,
        }
    }

    #[test]
    fn starts_idle_without_snap() {
        let state = PointerRuleState::default();
        assert_eq!(state.state(), PointerState::Idle);
        assert!(state.snap().is_none());
    }

    #[test]
    fn move_then_leave_walks_the_state_machine() {
        let mut state = PointerRuleState::default();

        state.on_pointer_move(12.0, 40.0);
        state.set_snap(Some(snap(1)));
        assert!(state.is_hovering());
        assert_eq!(state.cursor(), (12.0, 40.0));
        assert_eq!(state.snap().map(|s| s.index), Some(1));

        state.on_pointer_move(31.0, 40.0);
        state.set_snap(Some(snap(3)));
        assert_eq!(state.state(), PointerState::Hovering);
        assert_eq!(state.snap().map(|s| s.index), Some(3));

        state.on_pointer_leave();
        assert_eq!(state.state(), PointerState::Idle);
        assert!(state.snap().is_none());
    }

    #[test]
    fn idle_state_ignores_snaps() {
        let mut state = PointerRuleState::default();
        state.set_snap(Some(snap(0)));
        assert!(state.snap().is_none());
    }
}
