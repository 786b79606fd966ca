//! Error types for the rigkit catalog and build system.

use thiserror::Error;

/// Storage-related errors
///
/// Persistence corruption is deliberately NOT a variant here: a corrupt
/// record is discarded and the owning facade reseeds itself, so only
/// backend failures surface.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// API-level errors surfaced to the CLI
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Import failed: {0}. The existing catalog was left unchanged.")]
    ImportError(String),

    #[error("Export failed: {0}")]
    ExportError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
