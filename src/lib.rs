//! Tocmount: Hierarchical Table-of-Contents Resolution
//!
//! Resolves a tree of table-of-contents manifests into a single in-memory
//! tree: every mountpoint entry (a reference to another manifest) is
//! fetched, validated, and replaced by the tree it points to, bounded by a
//! fixed recursion-depth ceiling.

pub mod config;
pub mod entry;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod resolver;

pub use entry::Entry;
pub use error::ResolveError;
pub use fetch::{Fetch, ManifestFetcher};
pub use resolver::{Resolver, MAX_DEPTH};
