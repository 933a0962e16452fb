//! Unified error type for the design catalog
//!
//! The query engine itself never fails; every pipeline stage is a total
//! function. Errors only arise at the edges, when a
//! [`DesignSource`](crate::source::DesignSource) cannot produce a
//! collection or a lookup misses.

use thiserror::Error;

/// Errors surfaced by the catalog service and its data sources.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The data source failed to produce a collection
    #[error("design source failure: {message}")]
    Source { message: String },

    /// A serialized collection snapshot could not be decoded
    #[error("invalid collection snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// A lookup that requires a record found none
    #[error("{resource} not found")]
    NotFound { resource: String },
}

impl CatalogError {
    /// Create a Source error
    pub fn source(message: impl Into<String>) -> Self {
        Self::Source {
            message: message.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
