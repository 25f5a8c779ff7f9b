//! Desktop state: the single owned collection of window records

use serde::Serialize;

use crate::manifest::Manifest;
use super::{WindowId, WindowRecord};

/// Z-index floor so the first focused window clears background layers
pub const DEFAULT_BASELINE_Z: u32 = 10;

/// All window records, in manifest order
///
/// Records are created once from the manifest and never added or removed.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopState {
    baseline_z: u32,
    windows: Vec<WindowRecord>,
}

impl DesktopState {
    /// Build the startup state from a manifest
    pub fn from_manifest(manifest: &Manifest) -> Self {
        let windows = manifest
            .windows
            .iter()
            .map(|entry| WindowRecord {
                id: entry.id.clone(),
                title: entry.title.clone(),
                kind: entry.kind,
                is_open: entry.open,
                is_minimized: false,
                position: entry.position,
                z_index: entry.z_index.unwrap_or(manifest.baseline_z),
            })
            .collect();

        Self {
            baseline_z: manifest.baseline_z,
            windows,
        }
    }

    /// Z-index floor
    #[inline]
    pub fn baseline_z(&self) -> u32 {
        self.baseline_z
    }

    /// All records in manifest order
    #[inline]
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Number of records
    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether the manifest was empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Get a record by id
    pub fn get(&self, id: &str) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    /// Highest z-index across every record, floored at the baseline
    ///
    /// Recomputed on each call; any transition may change it.
    pub fn max_z(&self) -> u32 {
        self.windows
            .iter()
            .map(|w| w.z_index)
            .fold(self.baseline_z, u32::max)
    }

    /// The topmost visible record
    pub fn focused(&self) -> Option<&WindowRecord> {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .max_by_key(|w| w.z_index)
    }

    /// Visible records sorted back to front
    pub fn visible_by_z(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| w.is_visible()).collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Records listed in the taskbar (every open record, minimized or not)
    pub fn taskbar(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|w| w.is_open)
    }
}
