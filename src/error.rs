//! Error types for manifest resolution
//!
//! Every failure mode of a `load` call maps to exactly one variant here.
//! All variants are fatal to the call they occur in; the resolver decides
//! at each recursion site whether a child failure also sinks the parent.

use thiserror::Error;

/// Errors produced while fetching, parsing, or resolving a manifest tree.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The manifest reference was empty; no I/O was attempted.
    #[error("invalid manifest reference: {0:?}")]
    InvalidReference(String),

    /// A remote (http/https) retrieval could not be completed.
    #[error("failed to fetch remote manifest {reference:?}")]
    RemoteFetch {
        reference: String,
        #[source]
        source: reqwest::Error,
    },

    /// A local-storage read failed (not found, permission, ...).
    #[error("failed to read local manifest {reference:?}")]
    StorageFetch {
        reference: String,
        #[source]
        source: std::io::Error,
    },

    /// Fetched bytes did not deserialize into an entry.
    #[error("failed to parse manifest {reference:?}")]
    Parse {
        reference: String,
        #[source]
        source: serde_json::Error,
    },

    /// A shape invariant was violated; the message names the offending node.
    #[error("invalid entry: {0}")]
    Validation(String),

    /// The mountpoint chain exceeded the recursion ceiling.
    #[error("recursion too deep: depth {depth} exceeds ceiling {ceiling}")]
    RecursionTooDeep { depth: usize, ceiling: usize },

    /// Settings or logging bootstrap failure.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for ResolveError {
    fn from(err: config::ConfigError) -> Self {
        ResolveError::ConfigError(err.to_string())
    }
}
