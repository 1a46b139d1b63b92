//! The resolve → fetch → decode request pipeline.
//!
//! # Design
//! `RequestPipeline` names the four capabilities a client needs. `request`
//! has a default body that composes the other three, so an implementor only
//! supplies resolution and fetching; test doubles can override any step,
//! including `decode`, to observe or replace it. A transport failure returns
//! before `decode` is ever called.

use async_trait::async_trait;
use bytes::Bytes;
use tracing::{debug, warn};
use url::Url;

use crate::decode::{self, Decode};
use crate::endpoint::{BaseUrl, Endpoint};
use crate::error::{ConfigError, DecodeError, PipelineError, TransportError};
use crate::transport::Transport;

#[async_trait]
pub trait RequestPipeline: Send + Sync {
    /// Turn a logical endpoint into the URL to fetch.
    fn resolve(&self, endpoint: &Endpoint) -> Result<Url, ConfigError>;

    async fn fetch(&self, url: &Url) -> Result<Bytes, TransportError>;

    fn decode<T: Decode>(&self, bytes: &[u8]) -> Result<T, DecodeError> {
        decode::from_slice(bytes)
    }

    /// Fetch `endpoint` and decode the body as `T`. Every failure comes back
    /// as a `PipelineError`.
    async fn request<T>(&self, endpoint: &Endpoint) -> Result<T, PipelineError>
    where
        T: Decode + Send,
    {
        let url = self.resolve(endpoint)?;
        debug!(%url, "fetching");

        let bytes = self.fetch(&url).await.map_err(|e| {
            warn!(%url, error = %e, "transport failed");
            e
        })?;
        debug!(%url, bytes = bytes.len(), "fetched");

        let value = self.decode::<T>(&bytes).map_err(|e| {
            warn!(%url, error = %e, "decode failed");
            e
        })?;
        Ok(value)
    }
}

/// Production pipeline: a base URL plus a transport.
#[derive(Debug, Clone)]
pub struct Pipeline<T> {
    base: BaseUrl,
    transport: T,
}

impl<T: Transport> Pipeline<T> {
    pub fn new(base: BaseUrl, transport: T) -> Self {
        Self { base, transport }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[async_trait]
impl<T: Transport> RequestPipeline for Pipeline<T> {
    fn resolve(&self, endpoint: &Endpoint) -> Result<Url, ConfigError> {
        self.base.join(endpoint.path())
    }

    async fn fetch(&self, url: &Url) -> Result<Bytes, TransportError> {
        self.transport.fetch(url).await
    }
}
