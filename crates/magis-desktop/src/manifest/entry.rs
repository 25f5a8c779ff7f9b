//! Manifest entry for one window

use serde::{Deserialize, Serialize};

use crate::math::Vec2;
use crate::window::{WindowId, WindowKind};

/// Definition of one window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Unique id
    pub id: WindowId,
    /// Title bar text
    pub title: String,
    /// Content view selector
    pub kind: WindowKind,
    /// Initial origin
    pub position: Vec2,
    /// Open at startup
    #[serde(default)]
    pub open: bool,
    /// Initial z-index (defaults to the baseline)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<u32>,
    /// Dock launcher label, if the window has a dock icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dock_label: Option<String>,
}

impl ManifestEntry {
    /// Create a closed entry with no dock launcher
    pub fn new(
        id: impl Into<WindowId>,
        title: impl Into<String>,
        kind: WindowKind,
        position: Vec2,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            kind,
            position,
            open: false,
            z_index: None,
            dock_label: None,
        }
    }

    /// Start the window open
    pub fn opened(mut self) -> Self {
        self.open = true;
        self
    }

    /// Set the initial z-index
    pub fn with_z(mut self, z_index: u32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Give the window a dock launcher
    pub fn with_dock_label(mut self, label: impl Into<String>) -> Self {
        self.dock_label = Some(label.into());
        self
    }
}
