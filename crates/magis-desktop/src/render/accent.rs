//! Neon accent colours for window frames

use serde::Serialize;

/// Frame accent colour
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Gold,
    Purple,
    Cyan,
    Green,
    Red,
}

impl Accent {
    /// Hex colour used for the frame glow
    pub fn hex(self) -> &'static str {
        match self {
            Accent::Gold => "#FFD700",
            Accent::Purple => "#ff00ff",
            Accent::Cyan => "#00ffff",
            Accent::Green => "#00ff00",
            Accent::Red => "#ff0055",
        }
    }
}
