//! The network fetch seam.
//!
//! # Design
//! `Transport` is the only place bytes come off the wire. Tests swap in a
//! double; production uses `UreqTransport`, which runs ureq's blocking call
//! on tokio's blocking pool so callers still get a non-blocking future.
//! Status interpretation stays here: ureq is told not to treat 4xx/5xx as
//! errors, and this adapter turns any non-2xx into `TransportError::Status`.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use crate::config::ApiConfig;
use crate::error::TransportError;

/// Fetch the body at a fully-qualified URL.
///
/// One call is one outbound request: no retries, no caching.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<Bytes, TransportError>;
}

/// Blocking ureq agent driven from tokio's blocking pool.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(config: &ApiConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(config.timeout_secs.map(Duration::from_secs))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ApiConfig::default())
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn fetch(&self, url: &Url) -> Result<Bytes, TransportError> {
        let agent = self.agent.clone();
        let url = url.to_string();
        tokio::task::spawn_blocking(move || get(&agent, &url))
            .await
            .map_err(map_join_error)?
    }
}

fn get(agent: &ureq::Agent, url: &str) -> Result<Bytes, TransportError> {
    let mut response = agent.get(url).call().map_err(map_ureq_error)?;
    let status = response.status();
    if !status.is_success() {
        let body = response.body_mut().read_to_string().unwrap_or_default();
        return Err(TransportError::Status {
            status: status.as_u16(),
            body,
        });
    }
    response
        .body_mut()
        .read_to_vec()
        .map(Bytes::from)
        .map_err(|e| TransportError::Body(e.to_string()))
}

fn map_ureq_error(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        other => TransportError::Connection(other.to_string()),
    }
}

fn map_join_error(err: tokio::task::JoinError) -> TransportError {
    TransportError::Task(err.to_string())
}
