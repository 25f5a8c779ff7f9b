//! Frame view model

use serde::Serialize;

use crate::manifest::Manifest;
use crate::math::Vec2;
use crate::window::{DesktopState, WindowId, WindowKind};
use super::Accent;

/// A visible panel, ready to draw
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PanelView {
    pub id: WindowId,
    pub title: String,
    pub kind: WindowKind,
    pub position: Vec2,
    pub z_index: u32,
    pub accent: Accent,
    /// Hex colour of the frame glow
    pub glow: &'static str,
    /// Topmost visible panel
    pub focused: bool,
}

/// An open window's taskbar entry
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskbarEntry {
    pub id: WindowId,
    pub title: String,
    pub kind: WindowKind,
    pub minimized: bool,
    /// Entry of the focused panel
    pub active: bool,
}

/// A dock icon that toggles its window
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DockLauncher {
    pub id: WindowId,
    pub label: String,
    pub accent: Accent,
    pub glow: &'static str,
    pub open: bool,
}

/// Everything the presentation layer draws for one state
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Frame {
    /// Visible panels, back to front
    pub panels: Vec<PanelView>,
    /// Open windows in manifest order
    pub taskbar: Vec<TaskbarEntry>,
    /// Dock icons in manifest order
    pub launchers: Vec<DockLauncher>,
}

impl Frame {
    /// Build the frame for `state`; launcher labels come from `manifest`
    pub fn build(state: &DesktopState, manifest: &Manifest) -> Self {
        let focused = state.focused().map(|w| w.id.clone());
        let is_focused = |id: &WindowId| focused.as_ref() == Some(id);

        let panels = state
            .visible_by_z()
            .into_iter()
            .map(|w| PanelView {
                id: w.id.clone(),
                title: w.title.clone(),
                kind: w.kind,
                position: w.position,
                z_index: w.z_index,
                accent: w.kind.accent(),
                glow: w.kind.accent().hex(),
                focused: is_focused(&w.id),
            })
            .collect();

        let taskbar = state
            .taskbar()
            .map(|w| TaskbarEntry {
                id: w.id.clone(),
                title: w.title.clone(),
                kind: w.kind,
                minimized: w.is_minimized,
                active: is_focused(&w.id),
            })
            .collect();

        let launchers = manifest
            .launchers()
            .map(|(entry, label)| DockLauncher {
                id: entry.id.clone(),
                label: label.to_string(),
                accent: entry.kind.accent(),
                glow: entry.kind.accent().hex(),
                open: state.get(entry.id.as_str()).is_some_and(|w| w.is_open),
            })
            .collect();

        Self { panels, taskbar, launchers }
    }

    /// The focused panel, if any
    pub fn focused(&self) -> Option<&PanelView> {
        self.panels.iter().find(|p| p.focused)
    }

    /// Find a visible panel by id
    pub fn panel(&self, id: &str) -> Option<&PanelView> {
        self.panels.iter().find(|p| p.id == id)
    }
}
