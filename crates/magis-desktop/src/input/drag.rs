//! Drag state for window moves

use crate::math::Vec2;
use crate::window::WindowId;

/// An in-progress title-bar drag
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    /// Window being moved
    pub window_id: WindowId,
    /// Offset from window origin to cursor, recorded at press time
    pub offset: Vec2,
}

impl DragState {
    /// Start a drag from the pointer and window origin at press time
    pub fn new(window_id: WindowId, pointer: Vec2, origin: Vec2) -> Self {
        Self {
            window_id,
            offset: pointer - origin,
        }
    }

    /// Window origin that keeps the recorded offset under the pointer
    #[inline]
    pub fn origin_for(&self, pointer: Vec2) -> Vec2 {
        pointer - self.offset
    }
}
