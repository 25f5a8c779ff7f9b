//! Window manifest
//!
//! The manifest is the fixed, startup-time list of windows. It is loaded
//! once (from JSON or the built-in MAGIS set) and defines every id the
//! window manager will ever see.

mod entry;
mod builtin;

use std::collections::HashSet;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::ManifestError;
use crate::window::DEFAULT_BASELINE_Z;

pub use entry::ManifestEntry;

fn default_baseline_z() -> u32 {
    DEFAULT_BASELINE_Z
}

/// Ordered list of window definitions plus the z-index floor
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Z-index floor for `max_z`
    #[serde(default = "default_baseline_z")]
    pub baseline_z: u32,
    /// Window definitions in display order
    pub windows: Vec<ManifestEntry>,
}

impl Manifest {
    /// Create a manifest
    pub fn new(baseline_z: u32, windows: Vec<ManifestEntry>) -> Self {
        Self { baseline_z, windows }
    }

    /// Parse and validate a JSON manifest
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        manifest.validate()?;
        info!(
            "loaded manifest: {} windows, baseline z {}",
            manifest.windows.len(),
            manifest.baseline_z
        );
        Ok(manifest)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ManifestError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the manifest is non-empty with unique, non-empty ids
    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.windows.is_empty() {
            return Err(ManifestError::Empty);
        }

        let mut seen = HashSet::new();
        for (index, entry) in self.windows.iter().enumerate() {
            if entry.id.as_str().is_empty() {
                return Err(ManifestError::EmptyId { index });
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(ManifestError::DuplicateId(entry.id.to_string()));
            }
        }
        Ok(())
    }

    /// Get an entry by id
    pub fn entry(&self, id: &str) -> Option<&ManifestEntry> {
        self.windows.iter().find(|e| e.id == id)
    }

    /// Entries that have a dock launcher, with their labels
    pub fn launchers(&self) -> impl Iterator<Item = (&ManifestEntry, &str)> {
        self.windows
            .iter()
            .filter_map(|e| e.dock_label.as_deref().map(|label| (e, label)))
    }
}
