use std::path::PathBuf;

// ============================================================================
// Catalog Loading Errors
// ============================================================================
//
// Lookup never fails; a missing identifier is a `None`. These errors only
// cover reading catalog and cart documents.
//
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog document: {0}")]
    MalformedCatalog(#[source] serde_json::Error),

    #[error("Malformed cart document: {0}")]
    MalformedCart(#[source] serde_json::Error),
}
