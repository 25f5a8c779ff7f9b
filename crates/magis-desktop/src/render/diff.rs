//! Frame diffing

use std::collections::HashMap;

use serde::Serialize;

use crate::math::Vec2;
use crate::window::WindowId;
use super::{Frame, PanelView};

/// One redraw instruction between two frames
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameChange {
    /// Panel appeared
    Shown { id: WindowId },
    /// Panel disappeared (closed or minimized)
    Hidden { id: WindowId },
    /// Panel origin changed
    Moved { id: WindowId, position: Vec2 },
    /// Panel z-index changed
    Restacked { id: WindowId, z_index: u32 },
    /// Focused panel changed
    FocusChanged { id: Option<WindowId> },
    /// Taskbar entries changed
    TaskbarChanged,
    /// Dock launcher state changed
    DockChanged,
}

impl Frame {
    /// Changes needed to go from `previous` to `self`
    pub fn diff(&self, previous: &Frame) -> Vec<FrameChange> {
        let mut changes = Vec::new();
        let before: HashMap<&WindowId, &PanelView> =
            previous.panels.iter().map(|p| (&p.id, p)).collect();
        let after: HashMap<&WindowId, &PanelView> =
            self.panels.iter().map(|p| (&p.id, p)).collect();

        for panel in &previous.panels {
            if !after.contains_key(&panel.id) {
                changes.push(FrameChange::Hidden { id: panel.id.clone() });
            }
        }

        for panel in &self.panels {
            match before.get(&panel.id) {
                None => changes.push(FrameChange::Shown { id: panel.id.clone() }),
                Some(old) => {
                    if !old.position.approx_eq(panel.position) {
                        changes.push(FrameChange::Moved {
                            id: panel.id.clone(),
                            position: panel.position,
                        });
                    }
                    if old.z_index != panel.z_index {
                        changes.push(FrameChange::Restacked {
                            id: panel.id.clone(),
                            z_index: panel.z_index,
                        });
                    }
                }
            }
        }

        let focused_before = previous.focused().map(|p| &p.id);
        let focused_after = self.focused().map(|p| &p.id);
        if focused_before != focused_after {
            changes.push(FrameChange::FocusChanged { id: focused_after.cloned() });
        }

        if self.taskbar != previous.taskbar {
            changes.push(FrameChange::TaskbarChanged);
        }
        if self.launchers != previous.launchers {
            changes.push(FrameChange::DockChanged);
        }

        changes
    }
}
