//! Endpoint routing: logical requests to URLs.
//!
//! # Design
//! `Endpoint::path` is a pure mapping with no failure mode. Joining a path
//! onto the base URL appends path segments rather than resolving a relative
//! reference, so `/v3/abc` lands under the base path instead of replacing it.

use url::Url;

use crate::error::ConfigError;

/// Path of the listing endpoint, relative to the base URL.
pub const LIST_PATH: &str = "v3/e8c52b55-7f44-41a8-b059-5d042269b520";

/// Host every endpoint is resolved against unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "https://mocky.io";

/// A remote resource the client knows how to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    List,
    /// Caller-supplied path, typically a listing's `details_url`.
    Details(String),
}

impl Endpoint {
    pub fn path(&self) -> &str {
        match self {
            Endpoint::List => LIST_PATH,
            Endpoint::Details(path) => path,
        }
    }
}

/// A validated `http`/`https` URL that endpoint paths are appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: input.to_string(),
            reason,
        };
        let url = Url::parse(input).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme `{}`", url.scheme())));
        }
        if url.cannot_be_a_base() {
            return Err(invalid("URL cannot carry a path".to_string()));
        }
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Append the segments of `path` to the base path.
    pub fn join(&self, path: &str) -> Result<Url, ConfigError> {
        let mut url = self.0.clone();
        let relative = path.trim_start_matches('/');
        {
            let mut segments = url.path_segments_mut().map_err(|()| ConfigError::InvalidBaseUrl {
                url: self.0.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?;
            segments.pop_if_empty();
            if !relative.is_empty() {
                segments.extend(relative.split('/'));
            }
        }
        Ok(url)
    }
}
