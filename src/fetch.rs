//! Manifest retrieval
//!
//! A manifest reference is either a network address (http/https prefix,
//! case-insensitive) or a path into local storage. Both strategies buffer
//! the whole payload before returning; there is no retry and no streaming.

use crate::error::ResolveError;
use async_trait::async_trait;

/// Byte retrieval seam for the resolver. Production code uses
/// [`ManifestFetcher`]; tests substitute in-memory fakes.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, ResolveError>;
}

/// Whether a reference denotes a network location rather than local storage.
pub fn is_remote_reference(reference: &str) -> bool {
    let bytes = reference.as_bytes();
    let prefix = |scheme: &[u8]| {
        bytes.len() >= scheme.len() && bytes[..scheme.len()].eq_ignore_ascii_case(scheme)
    };
    prefix(b"http://") || prefix(b"https://")
}

/// Dual-strategy fetcher: remote retrieval over HTTP(S), whole-file read
/// for everything else.
pub struct ManifestFetcher {
    client: reqwest::Client,
}

impl ManifestFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn fetch_remote(&self, reference: &str) -> Result<Vec<u8>, ResolveError> {
        // Any fully-received body counts as success; the status code is
        // deliberately not inspected.
        let response = self.client.get(reference).send().await.map_err(|source| {
            ResolveError::RemoteFetch {
                reference: reference.to_string(),
                source,
            }
        })?;
        let body = response
            .bytes()
            .await
            .map_err(|source| ResolveError::RemoteFetch {
                reference: reference.to_string(),
                source,
            })?;
        Ok(body.to_vec())
    }

    async fn fetch_local(&self, reference: &str) -> Result<Vec<u8>, ResolveError> {
        tokio::fs::read(reference)
            .await
            .map_err(|source| ResolveError::StorageFetch {
                reference: reference.to_string(),
                source,
            })
    }
}

impl Default for ManifestFetcher {
    fn default() -> Self {
        Self::new(reqwest::Client::new())
    }
}

#[async_trait]
impl Fetch for ManifestFetcher {
    async fn fetch(&self, reference: &str) -> Result<Vec<u8>, ResolveError> {
        if reference.is_empty() {
            return Err(ResolveError::InvalidReference(reference.to_string()));
        }
        if is_remote_reference(reference) {
            tracing::debug!(reference, "fetching remote manifest");
            self.fetch_remote(reference).await
        } else {
            tracing::debug!(reference, "reading local manifest");
            self.fetch_local(reference).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_and_https_prefixes_route_remote() {
        assert!(is_remote_reference("http://example.com/toc.json"));
        assert!(is_remote_reference("https://example.com/toc.json"));
        assert!(is_remote_reference("HTTPS://EXAMPLE.COM/TOC.JSON"));
        assert!(is_remote_reference("HtTp://mixed.case/manifest"));
    }

    #[test]
    fn everything_else_routes_local() {
        assert!(!is_remote_reference("manifest.json"));
        assert!(!is_remote_reference("/var/data/toc.json"));
        assert!(!is_remote_reference("ftp://example.com/toc.json"));
        assert!(!is_remote_reference("httpx://not-http/toc.json"));
        assert!(!is_remote_reference("http:/missing-slash"));
    }

    #[tokio::test]
    async fn empty_reference_fails_without_io() {
        let fetcher = ManifestFetcher::default();
        let err = fetcher.fetch("").await.unwrap_err();
        assert!(matches!(err, ResolveError::InvalidReference(_)));
    }

    #[tokio::test]
    async fn missing_local_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let fetcher = ManifestFetcher::default();
        let err = fetcher.fetch(path.to_str().unwrap()).await.unwrap_err();
        match err {
            ResolveError::StorageFetch { source, .. } => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected StorageFetch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn local_read_returns_whole_payload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("toc.json");
        std::fs::write(&path, br#"{"title":"Docs"}"#).unwrap();
        let fetcher = ManifestFetcher::default();
        let bytes = fetcher.fetch(path.to_str().unwrap()).await.unwrap();
        assert_eq!(bytes, br#"{"title":"Docs"}"#);
    }
}
