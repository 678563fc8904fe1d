//! Error handling types and utilities.

use std::path::PathBuf;
use thiserror::Error;

/// A specialized Result type for dotadocs-search operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading a source-collection data file fails.
///
/// These only surface at startup, while the catalog is read from disk; the
/// search pipeline itself has no error conditions once the catalog is loaded.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data file could not be read.
    #[error("failed to read data file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The data file exists but is not valid collection JSON.
    #[error("failed to parse data file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
