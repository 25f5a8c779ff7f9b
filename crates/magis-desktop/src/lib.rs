//! Window Manager Core for the MAGIS desktop
//!
//! This crate owns the state of the desktop's floating panels:
//! - Window records (open, minimized, position, z-order)
//! - Pure state transitions (toggle, focus, close, minimize, move)
//! - Notification dispatch for open/close/minimize cues
//! - Pointer press/move/release routing for title-bar drags
//! - A render model (stacked panels, taskbar, dock) with frame diffing
//!
//! ## Architecture
//!
//! - [`math`]: `Vec2` positions and offsets
//! - [`window`]: Records, the state object, commands and the reducer
//! - [`manifest`]: The fixed startup list of windows
//! - [`notify`]: Notification sinks and sound cue descriptors
//! - [`input`]: Drag state machine
//! - [`render`]: Read-only view model for the presentation layer
//!
//! ## Example
//!
//! ```rust
//! use magis_desktop::{Manifest, NullSink, WindowManager};
//!
//! let mut wm = WindowManager::new(&Manifest::magis(), NullSink);
//! wm.toggle("matrix");
//! assert_eq!(wm.state().focused().map(|w| w.id.as_str()), Some("matrix"));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Reducer**: `reduce(&state, &command)` has no side effects; the
//!    manager applies it and then dispatches the notification
//! 2. **Closed Universe**: ids come from the manifest; unknown ids are no-ops
//! 3. **No Browser Dependencies**: the core is testable natively; wasm glue
//!    lives behind the `wasm` feature

pub mod math;
pub mod window;
pub mod manifest;
pub mod notify;
pub mod input;
pub mod render;

mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::Vec2;
pub use window::{
    reduce, Command, DesktopState, Notification, SubscriptionId, Transition, WindowId,
    WindowKind, WindowManager, WindowPhase, WindowRecord, WindowRegion, DEFAULT_BASELINE_Z,
};
pub use manifest::{Manifest, ManifestEntry};
pub use notify::{CueSpec, LogSink, NotificationSink, NotifyError, NullSink, Waveform};
pub use input::{DragState, InputRouter, PointerOutcome};
pub use render::{Accent, DockLauncher, Frame, FrameChange, PanelView, TaskbarEntry};
pub use error::ManifestError;
