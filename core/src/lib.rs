//! Async client core for the carsales listing service.
//!
//! # Overview
//! Fetches the vehicle listing and per-vehicle details from a single JSON
//! host and decodes them into typed models. Every request runs the same
//! pipeline: resolve the endpoint to a URL, fetch the bytes, decode them into
//! the caller's target type. Success and every failure come back through one
//! `Result<T, PipelineError>`.
//!
//! # Design
//! - `Transport` is the network seam; `UreqTransport` is the production
//!   adapter and tests substitute canned doubles.
//! - `RequestPipeline` names resolve/fetch/decode/request; `CarsalesApi` is
//!   generic over it, so a whole pipeline can be swapped as well.
//! - Decoding goes through explicit per-type key tables (`Decode` + `Fields`)
//!   rather than derived field matching, so errors carry a JSON path.
//! - Callback-style requests follow "last request wins": a generation counter
//!   decides whether a finished result is still wanted.

pub mod api;
pub mod config;
pub mod decode;
pub mod encode;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod models;
pub mod pipeline;
pub mod transport;

pub use api::{CarsalesApi, RequestHandle};
pub use config::ApiConfig;
pub use decode::{Decode, FieldPath, Fields};
pub use encode::Encode;
pub use endpoint::{BaseUrl, Endpoint};
pub use error::{ConfigError, DecodeError, DecodeErrorKind, PipelineError, TransportError};
pub use models::{CarDetails, ListItem, ListResult, Overview, SaleStatus};
pub use pipeline::{Pipeline, RequestPipeline};
pub use transport::{Transport, UreqTransport};
