//! Window record and lifecycle phase

use serde::Serialize;

use crate::math::Vec2;
use super::{WindowId, WindowKind};

/// Lifecycle phase of a window
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowPhase {
    /// Not in the stack or taskbar
    Closed,
    /// Drawn on the desktop and listed in the taskbar
    Open,
    /// Listed in the taskbar only
    Minimized,
}

/// One logical panel of the desktop
///
/// `id`, `title` and `kind` never change after startup. `position` and
/// `z_index` are only written by the reducer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WindowRecord {
    /// Manifest id
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Content view selector
    pub kind: WindowKind,
    /// Present in the window stack
    pub is_open: bool,
    /// Open but hidden from the desktop
    pub is_minimized: bool,
    /// Window origin on the desktop
    pub position: Vec2,
    /// Stacking order (higher = on top)
    pub z_index: u32,
}

impl WindowRecord {
    /// Current lifecycle phase
    #[inline]
    pub fn phase(&self) -> WindowPhase {
        match (self.is_open, self.is_minimized) {
            (false, _) => WindowPhase::Closed,
            (true, false) => WindowPhase::Open,
            (true, true) => WindowPhase::Minimized,
        }
    }

    /// Drawn on the desktop (open and not minimized)
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.is_open && !self.is_minimized
    }
}
