//! The public carsales client.
//!
//! # Design
//! Two ways to call each endpoint:
//! - `list` / `details` are plain async methods; the caller awaits them
//!   wherever it likes.
//! - `get_list` / `get_details` spawn the request on the runtime handle the
//!   client was built with and hand the result to a callback. Each call takes
//!   a fresh id from a shared generation counter; when the result arrives the
//!   callback only runs if that id is still current. Starting another request
//!   or calling `cancel` bumps the counter, so a superseded result is dropped
//!   even though its transport call may still run to completion.
//!
//! The callback runs on a task of that runtime. Callers that own state on
//! another thread (a UI loop, say) send the result over a channel from the
//! callback.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinHandle};
use tracing::debug;

use crate::config::ApiConfig;
use crate::decode::Decode;
use crate::endpoint::Endpoint;
use crate::error::{ConfigError, PipelineError};
use crate::models::{CarDetails, ListResult};
use crate::pipeline::{Pipeline, RequestPipeline};
use crate::transport::UreqTransport;

/// Carsales client, generic over the pipeline so tests can inject a double.
pub struct CarsalesApi<P = Pipeline<UreqTransport>> {
    pipeline: Arc<P>,
    generation: Arc<AtomicU64>,
    runtime: Handle,
}

impl CarsalesApi {
    /// Client for the default host. Must be called inside a tokio runtime.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_config(&ApiConfig::default())
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        let pipeline = Pipeline::new(config.base_url()?, UreqTransport::new(config));
        Self::with_pipeline(pipeline)
    }
}

impl<P: RequestPipeline + 'static> CarsalesApi<P> {
    /// Deliver callbacks on the runtime this is called from.
    pub fn with_pipeline(pipeline: P) -> Result<Self, ConfigError> {
        let runtime = Handle::try_current().map_err(|_| ConfigError::NoRuntime)?;
        Ok(Self::with_runtime(pipeline, runtime))
    }

    /// Deliver callbacks on `runtime`.
    pub fn with_runtime(pipeline: P, runtime: Handle) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            generation: Arc::new(AtomicU64::new(0)),
            runtime,
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn list(&self) -> Result<ListResult, PipelineError> {
        self.pipeline.request(&Endpoint::List).await
    }

    pub async fn details(&self, path: &str) -> Result<CarDetails, PipelineError> {
        self.pipeline.request(&Endpoint::Details(path.to_string())).await
    }

    /// Fetch the listing and pass the outcome to `on_complete`, unless a
    /// newer request or `cancel` supersedes this one first.
    pub fn get_list<F>(&self, on_complete: F) -> RequestHandle
    where
        F: FnOnce(Result<ListResult, PipelineError>) + Send + 'static,
    {
        self.dispatch(Endpoint::List, on_complete)
    }

    /// Fetch one vehicle's details; same delivery rules as [`Self::get_list`].
    pub fn get_details<F>(&self, path: impl Into<String>, on_complete: F) -> RequestHandle
    where
        F: FnOnce(Result<CarDetails, PipelineError>) + Send + 'static,
    {
        self.dispatch(Endpoint::Details(path.into()), on_complete)
    }

    /// Stop the outstanding request's result from being delivered. The
    /// transport call itself is not interrupted.
    pub fn cancel(&self) {
        let retired = self.generation.fetch_add(1, Ordering::SeqCst);
        debug!(request = retired, "cancelled");
    }

    /// Id of the request whose result would currently be delivered.
    pub fn current_request(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn dispatch<T, F>(&self, endpoint: Endpoint, on_complete: F) -> RequestHandle
    where
        T: Decode + Send + 'static,
        F: FnOnce(Result<T, PipelineError>) + Send + 'static,
    {
        let id = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let pipeline = Arc::clone(&self.pipeline);
        debug!(request = id, ?endpoint, "dispatching");

        let task = self.runtime.spawn(async move {
            let result = pipeline.request::<T>(&endpoint).await;
            if generation.load(Ordering::SeqCst) == id {
                on_complete(result);
            } else {
                debug!(request = id, "dropping superseded result");
            }
        });
        RequestHandle { id, task }
    }
}

/// Token for one callback-style request.
///
/// Dropping it does not cancel anything; use [`CarsalesApi::cancel`] to stop
/// delivery or [`RequestHandle::abort`] to stop the task outright.
#[derive(Debug)]
pub struct RequestHandle {
    id: u64,
    task: JoinHandle<()>,
}

impl RequestHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True once the result has been delivered or dropped.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Abort the delivery task. A blocking transport call already in flight
    /// keeps running on its own thread.
    pub fn abort(&self) {
        self.task.abort();
    }

    /// Wait until the result has been delivered or dropped.
    pub fn wait(self) -> impl Future<Output = Result<(), JoinError>> {
        self.task
    }
}
