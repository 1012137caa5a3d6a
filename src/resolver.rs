//! Recursive manifest resolution
//!
//! Turns a root manifest reference into a single fully-resolved entry tree:
//! every mountpoint is fetched, validated, and replaced by the tree it
//! points to. The only defense against reference cycles is the recursion
//! ceiling; no visited-set is kept, so a short cycle re-fetches the same
//! document until the ceiling trips.

use crate::entry::{usable, Entry, Shape};
use crate::error::ResolveError;
use crate::fetch::Fetch;
use futures::future::BoxFuture;

/// Maximum number of nested mountpoint hops from the root.
pub const MAX_DEPTH: usize = 10;

/// Resolver over a byte-retrieval strategy.
///
/// Resolution is purely sequential: each child mountpoint is resolved to
/// completion before the next sibling begins, and the depth counter is
/// passed by value down the call chain.
pub struct Resolver<F: Fetch> {
    fetcher: F,
}

impl<F: Fetch> Resolver<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Resolve the tree rooted at `reference`.
    ///
    /// Returns the complete tree, or the first fatal error on the path
    /// that produced it. Failures under sibling children are dropped and
    /// warn-logged instead of propagated.
    pub async fn resolve(&self, reference: &str) -> Result<Entry, ResolveError> {
        self.load(0, reference).await
    }

    /// One fetch-parse-validate-recurse step at the given depth.
    ///
    /// Boxed because async recursion needs an indirection for the future.
    fn load<'a>(
        &'a self,
        depth: usize,
        reference: &'a str,
    ) -> BoxFuture<'a, Result<Entry, ResolveError>> {
        Box::pin(async move {
            if depth > MAX_DEPTH {
                return Err(ResolveError::RecursionTooDeep {
                    depth,
                    ceiling: MAX_DEPTH,
                });
            }
            if reference.is_empty() {
                return Err(ResolveError::InvalidReference(reference.to_string()));
            }
            tracing::debug!(depth, reference, "loading manifest");

            let data = self.fetcher.fetch(reference).await?;
            let entry: Entry =
                serde_json::from_slice(&data).map_err(|source| ResolveError::Parse {
                    reference: reference.to_string(),
                    source,
                })?;

            match entry.shape() {
                Shape::Direct(title) => {
                    // A direct entry may carry a link and children, but a
                    // manifest reference would make it a mountpoint too.
                    if let Some(href) = usable(&entry.href) {
                        return Err(ResolveError::Validation(format!(
                            "entry {title:?} must not have a manifest reference, yet has {href:?}"
                        )));
                    }
                    self.resolve_children(depth, entry).await
                }
                Shape::Mountpoint(href) => {
                    if let Some(link) = usable(&entry.link) {
                        return Err(ResolveError::Validation(format!(
                            "mountpoint {href:?} must not have a link, yet has {link:?}"
                        )));
                    }
                    if entry.has_children() {
                        return Err(ResolveError::Validation(format!(
                            "mountpoint {href:?} must not have child entries"
                        )));
                    }
                    // The mountpoint occupies a required slot, so its
                    // failure is fatal to this call.
                    self.load(depth + 1, href).await
                }
                Shape::Empty => Ok(entry),
            }
        })
    }

    /// Rebuild a direct entry's child sequence, splicing in each child
    /// mountpoint's tree. A failing child is dropped and the remaining
    /// siblings keep resolving; children without a usable href pass
    /// through unchanged.
    async fn resolve_children(
        &self,
        depth: usize,
        mut entry: Entry,
    ) -> Result<Entry, ResolveError> {
        let Some(children) = entry.entries.take() else {
            return Ok(entry);
        };
        let mut resolved = Vec::with_capacity(children.len());
        for child in children {
            match usable(&child.href) {
                Some(href) => match self.load(depth + 1, href).await {
                    Ok(subtree) => resolved.push(subtree),
                    Err(err) => {
                        tracing::warn!(href, error = %err, "dropping unresolvable child entry");
                    }
                },
                None => resolved.push(child),
            }
        }
        entry.entries = Some(resolved);
        Ok(entry)
    }
}
