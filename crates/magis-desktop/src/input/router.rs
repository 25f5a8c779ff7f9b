//! Input router state machine

use log::debug;
use serde::Serialize;

use crate::math::Vec2;
use crate::window::{WindowManager, WindowRegion};
use super::DragState;

/// What a pointer event did
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerOutcome {
    /// Nothing happened
    Ignored,
    /// Window raised
    Focused,
    /// Window raised and a drag started
    DragStarted,
    /// Window moved to the given origin
    Moved { x: f32, y: f32 },
    /// Drag finished
    DragEnded,
    /// Close button pressed
    Closed,
    /// Minimize button pressed
    Minimized,
}

/// Input router managing drag state
///
/// At most one drag is active. A press always replaces any previous drag,
/// so a lost pointer-up only leaves the window at its last dragged position.
#[derive(Debug, Default)]
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer pressed on `region` of window `id`
    ///
    /// Every press on a visible window focuses it first; a title bar press
    /// then starts a drag and a button press closes or minimizes.
    pub fn pointer_down(
        &mut self,
        wm: &mut WindowManager,
        id: &str,
        region: WindowRegion,
        pointer: Vec2,
    ) -> PointerOutcome {
        self.drag = None;

        let origin = match wm.get(id) {
            Some(window) if window.is_visible() => window.position,
            _ => {
                debug!("press on hidden or unknown window {}", id);
                return PointerOutcome::Ignored;
            }
        };

        wm.focus(id);

        match region {
            WindowRegion::CloseButton => {
                wm.close(id);
                PointerOutcome::Closed
            }
            WindowRegion::MinimizeButton => {
                wm.minimize(id);
                PointerOutcome::Minimized
            }
            WindowRegion::Content => PointerOutcome::Focused,
            WindowRegion::TitleBar => {
                self.drag = Some(DragState::new(id.into(), pointer, origin));
                PointerOutcome::DragStarted
            }
        }
    }

    /// Pointer moved; moves the dragged window if any
    pub fn pointer_move(&mut self, wm: &mut WindowManager, pointer: Vec2) -> PointerOutcome {
        let Some(drag) = &self.drag else {
            return PointerOutcome::Ignored;
        };

        let visible = wm
            .get(drag.window_id.as_str())
            .is_some_and(|w| w.is_visible());
        if !visible {
            debug!("dragged window {} went away, ending drag", drag.window_id);
            self.drag = None;
            return PointerOutcome::DragEnded;
        }

        let origin = drag.origin_for(pointer);
        wm.set_position(drag.window_id.as_str(), origin.x, origin.y);
        PointerOutcome::Moved { x: origin.x, y: origin.y }
    }

    /// Pointer released; ends the drag
    pub fn pointer_up(&mut self) -> PointerOutcome {
        match self.drag.take() {
            Some(_) => PointerOutcome::DragEnded,
            None => PointerOutcome::Ignored,
        }
    }

    /// Drop the current drag without a pointer-up
    #[inline]
    pub fn cancel(&mut self) {
        self.drag = None;
    }
}
