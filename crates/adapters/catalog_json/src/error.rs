//! Catalog-specific error type wrapping IO and JSON errors.

use std::path::PathBuf;

use datadict_domain::error::DataDictError;

/// Errors originating from reading the JSON data layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The payload file could not be read.
    #[error("failed to read catalog file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The payload is not valid JSON or does not match the node layout.
    #[error("JSON deserialization error")]
    Json(#[from] serde_json::Error),

    /// The payload is valid JSON but not one of the accepted shapes.
    #[error("unrecognized catalog payload: {0}")]
    Shape(&'static str),
}

impl From<CatalogError> for DataDictError {
    fn from(err: CatalogError) -> Self {
        Self::Source(Box::new(err))
    }
}
