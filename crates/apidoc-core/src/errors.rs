//! Error types for the apidoc pipeline.

use thiserror::Error;

/// Top-level error type.
#[derive(Debug, Error)]
pub enum DocError {
    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

/// Errors reading named resources.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("No such resource: {path}")]
    NotFound { path: String },

    #[error("I/O error reading resource: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors resolving a namespace into its view model.
///
/// A missing symbol inside a known namespace is not an error; lookups
/// return `Option` and the caller decides.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Namespace not found: {name}")]
    NamespaceNotFound { name: String },

    #[error("Invalid schema document for namespace {namespace}: {source}")]
    InvalidSchema {
        namespace: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Content(#[from] ContentError),
}
