//! Test doubles for the transport and pipeline seams.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;
use carsales_core::decode::{self, Decode};
use carsales_core::{
    BaseUrl, ConfigError, DecodeError, Endpoint, Pipeline, RequestPipeline, Transport,
    TransportError,
};
use tokio::sync::Notify;
use url::Url;

pub const BASE_URL: &str = "https://mocky.io";

pub const LIST_JSON: &str = r#"{
    "Result": [
        {
            "Id": "AD-5989286",
            "Title": "2019 Mitsubishi Triton GLS MR Auto 4x4 MY19 Double Cab",
            "Location": "Victoria",
            "Price": "$53,081",
            "MainPhoto": "https://carsales.pxcrush.net/carsales/car/cil/bjk2g3yi1gxy2xfg6xf9ugyd7.jpg",
            "DetailsUrl": "/v3/9ea9359e-c29d-4493-ad02-69662dcb5586"
        },
        {
            "Id": "AD-5989287",
            "Title": "Mercedes Benz C300 Coupe",
            "Location": "New South Wales",
            "Price": "$103,400",
            "MainPhoto": "https://carsales.pxcrush.net/carsales/car/cil/bjk2g3yi1gxy2xfg6xf9ugyd7.jpg",
            "DetailsUrl": "/v3/9ea9359e-c29d-4493-ad02-69662dcb5589"
        }
    ]
}"#;

pub const DETAILS_JSON: &str = r#"{
    "Id": "AD-5989286",
    "SaleStatus": "Available",
    "Title": "2019 Mitsubishi Triton GLS MR Auto 4x4 MY19 Double Cab",
    "Overview": {
        "Location": "Victoria",
        "Price": "53081",
        "Photos": ["https://carsales.pxcrush.net/carsales/car/cil/bjk2g3yi1gxy2xfg6xf9ugyd7.jpg"]
    },
    "Comments": "Car details"
}"#;

pub fn base_url() -> BaseUrl {
    BaseUrl::parse(BASE_URL).unwrap()
}

/// Answers every fetch with the same canned outcome and records the URLs.
pub struct CannedTransport {
    response: Result<Bytes, TransportError>,
    requests: Mutex<Vec<Url>>,
}

impl CannedTransport {
    pub fn ok(body: &'static str) -> Self {
        Self::with(Ok(Bytes::from_static(body.as_bytes())))
    }

    pub fn failing(err: TransportError) -> Self {
        Self::with(Err(err))
    }

    fn with(response: Result<Bytes, TransportError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn fetch(&self, url: &Url) -> Result<Bytes, TransportError> {
        self.requests.lock().unwrap().push(url.clone());
        self.response.clone()
    }
}

/// Serves `LIST_JSON` for the list endpoint and `DETAILS_JSON` for anything
/// else. Fetches whose path contains `slow` wait until the gate is opened.
pub struct GatedTransport {
    pub gate: Arc<Notify>,
}

#[async_trait]
impl Transport for GatedTransport {
    async fn fetch(&self, url: &Url) -> Result<Bytes, TransportError> {
        if url.path().contains("slow") {
            self.gate.notified().await;
        }
        let body = if url.path().ends_with(carsales_core::endpoint::LIST_PATH) {
            LIST_JSON
        } else {
            DETAILS_JSON
        };
        Ok(Bytes::from_static(body.as_bytes()))
    }
}

/// Wraps a real `Pipeline` and counts how often `decode` runs.
pub struct CountingPipeline<T> {
    inner: Pipeline<T>,
    decodes: Arc<AtomicUsize>,
}

impl<T: Transport> CountingPipeline<T> {
    pub fn new(transport: T) -> Self {
        Self {
            inner: Pipeline::new(base_url(), transport),
            decodes: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn decode_calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.decodes)
    }

    pub fn transport(&self) -> &T {
        self.inner.transport()
    }
}

#[async_trait]
impl<T: Transport> RequestPipeline for CountingPipeline<T> {
    fn resolve(&self, endpoint: &Endpoint) -> Result<Url, ConfigError> {
        self.inner.resolve(endpoint)
    }

    async fn fetch(&self, url: &Url) -> Result<Bytes, TransportError> {
        self.inner.fetch(url).await
    }

    fn decode<D: Decode>(&self, bytes: &[u8]) -> Result<D, DecodeError> {
        self.decodes.fetch_add(1, Ordering::SeqCst);
        decode::from_slice(bytes)
    }
}
