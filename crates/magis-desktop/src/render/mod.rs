//! Render model
//!
//! Read-only view of the desktop state for the presentation layer: which
//! panels to draw and in what order, what the taskbar lists, and how the
//! dock launchers look. `Frame::diff` tells the presentation layer what to
//! redraw between two frames.

mod accent;
mod frame;
mod diff;

pub use accent::Accent;
pub use frame::{DockLauncher, Frame, PanelView, TaskbarEntry};
pub use diff::FrameChange;
