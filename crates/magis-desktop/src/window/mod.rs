//! Window management module
//!
//! Provides window records, the desktop state object, the command reducer
//! and the stateful manager that dispatches notifications.

mod kind;
mod record;
mod region;
mod state;
mod command;
mod reducer;
mod manager;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use kind::WindowKind;
pub use record::{WindowPhase, WindowRecord};
pub use region::WindowRegion;
pub use state::{DesktopState, DEFAULT_BASELINE_Z};
pub use command::{Command, Notification};
pub use reducer::{reduce, Transition};
pub use manager::{SubscriptionId, WindowManager};

/// Stable window identifier, fixed by the manifest and never reused
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create a window id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
