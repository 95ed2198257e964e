//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Navigation layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum NavigationError {
    /// No tab was registered with the controller
    #[error("Navigation configuration has no tabs")]
    EmptyConfiguration,

    /// A tab is referenced that is not a key of the group stacks
    #[error("Group is not registered: {0}")]
    UnregisteredGroup(String),

    /// A start route is owned by a different tab than the one it starts
    #[error("Start route {route} belongs to {actual}, expected {expected}")]
    StartRouteMismatch {
        route: String,
        expected: String,
        actual: String,
    },

    /// Snapshot (de)serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Snapshot written by an incompatible format version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedSnapshotVersion(u32),
}

impl NavigationError {
    /// Whether it is expected behavior, used for log classification.
    ///
    /// Integrity errors are wiring bugs and return `false` (level `error`).
    /// A stale or corrupt snapshot is something a host can recover from by
    /// starting fresh, so those return `true` (level `warn`).
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SerializationError(_) | Self::UnsupportedSnapshotVersion(_) => true,
            Self::EmptyConfiguration
            | Self::UnregisteredGroup(_)
            | Self::StartRouteMismatch { .. } => false,
        }
    }

    /// Whether the error reports a broken route/tab wiring.
    #[must_use]
    pub fn is_integrity_error(&self) -> bool {
        !self.is_expected()
    }
}

impl From<serde_json::Error> for NavigationError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Navigation layer Result type alias
pub type NavigationResult<T> = std::result::Result<T, NavigationError>;
