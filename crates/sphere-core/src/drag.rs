use crate::constants::{DRAG_BUMP_PER_PX, DRAG_DISPLACEMENT_PER_PX};
use crate::params::{Param, ParameterStore};

/// Per-pixel sensitivities of a vertical drag. Dragging up (negative delta)
/// raises both parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSensitivity {
    pub bump_per_px: f32,
    pub displacement_per_px: f32,
}

impl Default for DragSensitivity {
    fn default() -> Self {
        Self {
            bump_per_px: DRAG_BUMP_PER_PX,
            displacement_per_px: DRAG_DISPLACEMENT_PER_PX,
        }
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        last_y: f32,
    },
}

/// Turns pointer down/move/up/leave into parameter deltas.
#[derive(Default, Clone, Debug)]
pub struct DragMapper {
    state: DragState,
    sensitivity: DragSensitivity,
}

impl DragMapper {
    pub fn new(sensitivity: DragSensitivity) -> Self {
        Self {
            state: DragState::Idle,
            sensitivity,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn pointer_down(&mut self, y: f32) {
        if y.is_finite() {
            self.state = DragState::Dragging { last_y: y };
        }
    }

    /// Apply one move. Returns `true` when the store was written.
    pub fn pointer_move(&mut self, y: f32, store: &mut ParameterStore) -> bool {
        let DragState::Dragging { last_y } = self.state else {
            return false;
        };
        if !y.is_finite() {
            return false;
        }
        let delta = y - last_y;
        self.state = DragState::Dragging { last_y: y };
        store.adjust(Param::Bump, -delta * self.sensitivity.bump_per_px);
        store.adjust(
            Param::Displacement,
            -delta * self.sensitivity.displacement_per_px,
        );
        true
    }

    pub fn pointer_up(&mut self) {
        self.state = DragState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.state = DragState::Idle;
    }
}
