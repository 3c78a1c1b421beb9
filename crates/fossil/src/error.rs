//! Error types for the Fossil SDK.

use std::path::PathBuf;

use fossil_query::QueryError;
use thiserror::Error;

/// Result type for Fossil operations.
pub type Result<T> = std::result::Result<T, MuseumError>;

/// Errors that can occur when opening or querying a [`crate::Museum`].
#[derive(Debug, Error)]
pub enum MuseumError {
    /// A fixture file could not be read.
    #[error("failed to read fixture {}: {source}", path.display())]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A fixture file is not valid JSON for its record type.
    #[error("failed to parse fixture {}: {source}", path.display())]
    FixtureParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration could not be loaded.
    #[error("failed to load configuration: {source}")]
    Config {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    /// A collection query failed.
    #[error(transparent)]
    Query(#[from] QueryError),
}

impl MuseumError {
    /// Wraps a config loader error, keeping its context chain as the source.
    pub(crate) fn config(err: anyhow::Error) -> Self {
        Self::Config { source: err.into() }
    }
}
