//! Request descriptors resolved against the API base URL.

use reqwest::Method;
use url::Url;

use crate::error::SmhiError;

/// An absolute, read-only request.
///
/// Built once per call and consumed by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    method: Method,
    url: Url,
}

impl RequestDescriptor {
    /// Resolves `path` against `base` into a GET request.
    ///
    /// `base` is expected to end with `/`; a relative `path` without a
    /// leading `/` is then appended to it verbatim. A leading `/` resolves
    /// against the origin root, as with any URL reference.
    ///
    /// # Errors
    ///
    /// Returns `SmhiError::MalformedUrl` if `path` cannot be resolved.
    pub fn get(base: &Url, path: &str) -> Result<Self, SmhiError> {
        let url = base.join(path).map_err(|source| SmhiError::MalformedUrl {
            path: String::from(path),
            source,
        })?;
        Ok(Self {
            method: Method::GET,
            url,
        })
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute request URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

/// Ensures the base URL path ends with `/` so that `join` appends to it
/// instead of replacing its last segment.
pub(crate) fn normalize_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}
