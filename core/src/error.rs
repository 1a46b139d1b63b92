//! Error types for the carsales client.
//!
//! # Design
//! Every failure a request can hit is funnelled into `PipelineError`, so the
//! caller inspects outcomes in exactly one place. Transport and decode
//! failures keep their own types because they carry different context: a
//! status code and body for the former, a JSON field path for the latter.
//! `ConfigError` is raised while building a client and only reaches the
//! request channel if a resolved URL cannot be joined.

use thiserror::Error;

use crate::decode::FieldPath;

/// Failure of the network fetch itself. Never retried by the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// DNS resolution, connect or TLS failure.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The transport's own timeout fired.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status after following redirects.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// The task running the blocking call panicked or was aborted.
    #[error("transport task failed: {0}")]
    Task(String),
}

/// What went wrong while mapping JSON into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("malformed JSON: {0}")]
    Syntax(String),

    #[error("missing required field")]
    MissingField,

    #[error("expected {expected}, found {found}")]
    Type {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown variant `{found}`, expected one of {expected:?}")]
    UnknownVariant {
        found: String,
        expected: &'static [&'static str],
    },
}

/// A decode failure located at a JSON path such as `$.Result[1].Title`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {path}")]
pub struct DecodeError {
    pub path: FieldPath,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    pub fn new(path: FieldPath, kind: DecodeErrorKind) -> Self {
        Self { path, kind }
    }

    pub(crate) fn syntax(err: serde_json::Error) -> Self {
        Self::new(FieldPath::root(), DecodeErrorKind::Syntax(err.to_string()))
    }
}

/// Construction-time configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid base URL `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Callback delivery needs a tokio runtime to spawn onto.
    #[error("no tokio runtime available for request delivery")]
    NoRuntime,
}

/// The single error channel for every request made through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
