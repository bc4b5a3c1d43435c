// crates/swissgeo-core/src/error.rs
use thiserror::Error;

/// Raised where external data enters the core: a code that is not part of
/// the closed region/canton/sub-region domains.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassificationError {
    #[error("unknown region code: {0:?}")]
    UnknownRegion(String),

    #[error("unknown canton code: {0:?}")]
    UnknownCanton(String),

    #[error("unknown sub-region code: {0:?}")]
    UnknownSubRegion(String),

    #[error("unknown selection kind: {0:?} (expected region, canton or sub-region)")]
    UnknownSelectionKind(String),

    /// Only produced by [`crate::hierarchy::validate`].
    #[error("inconsistent hierarchy tables: {0}")]
    InconsistentHierarchy(String),
}

#[derive(Debug, Error)]
pub enum GeoError {
    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, GeoError>;
