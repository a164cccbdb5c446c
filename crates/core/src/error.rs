//! Error types for the contextlens domain.
//!
//! Uses `thiserror` for ergonomic error definitions. Composition itself is
//! infallible and degrades to fallback text or omitted layers; the only
//! failures that reach a caller are acquisition problems and recompiling
//! before anything was loaded.

use thiserror::Error;

/// The top-level error type for all contextlens operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetch or parse of the raw snapshot failed. Raised by the acquisition
    /// layer only; the composition engine treats it as "no snapshot".
    #[error("Snapshot acquisition failed: {message}")]
    Acquisition { message: String },

    /// Recompilation was requested before any snapshot was loaded.
    #[error("No snapshot loaded — load a snapshot before selecting an output style")]
    NoSnapshotLoaded,

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap any acquisition-side failure (I/O, HTTP status, JSON parse).
    pub fn acquisition(message: impl Into<String>) -> Self {
        Self::Acquisition {
            message: message.into(),
        }
    }
}
