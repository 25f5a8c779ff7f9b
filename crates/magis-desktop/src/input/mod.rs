//! Input routing module
//!
//! Provides the pointer state machine for title-bar drags. Drag state is
//! per-gesture and lives here, not on the window record.

mod router;
mod drag;

pub use router::{InputRouter, PointerOutcome};
pub use drag::DragState;
