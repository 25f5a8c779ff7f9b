//! Window region for pointer presses

use serde::{Deserialize, Serialize};

/// Region of a window frame that received a pointer press
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Title bar area (starts a drag)
    TitleBar,
    /// Content area (focus only)
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
}
