//! Error types for manifest loading

/// Errors that can occur while loading a window manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The document is not valid manifest JSON.
    #[error("manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The manifest lists no windows.
    #[error("manifest has no windows")]
    Empty,

    /// A window entry has an empty id.
    #[error("window entry {index} has an empty id")]
    EmptyId { index: usize },

    /// Two window entries share an id.
    #[error("duplicate window id: {0}")]
    DuplicateId(String),
}
