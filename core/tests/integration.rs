//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `CarsalesApi` with
//! the production `UreqTransport` over real HTTP. Validates that endpoint
//! resolution, status handling and decoding agree with the server's schema.

use carsales_core::{
    ApiConfig, CarsalesApi, PipelineError, SaleStatus, TransportError,
};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Bind a random port, serve the sample inventory, return a client for it.
async fn start() -> CarsalesApi {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(mock_server::run(listener));

    let config = ApiConfig {
        base_url: format!("http://{addr}"),
        timeout_secs: Some(10),
    };
    CarsalesApi::from_config(&config).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn list_then_details() {
    let api = start().await;

    // Step 1: list: two sample listings in server order.
    let list = api.list().await.unwrap();
    assert_eq!(list.objects.len(), 2);
    let triton = &list.objects[0];
    assert_eq!(triton.title, "2019 Mitsubishi Triton GLS MR Auto 4x4 MY19 Double Cab");
    assert_eq!(triton.price_string(), "$53,081");
    assert_eq!(triton.location_string(), "Victoria");

    let c300 = &list.objects[1];
    assert_eq!(c300.price_string(), "Contact seller for price");
    assert_eq!(c300.location_string(), "Australia");

    // Step 2: details via each listing's own details URL.
    let details = api.details(&triton.details_url).await.unwrap();
    assert_eq!(details.id, "AD-5989286");
    assert_eq!(details.sale_status, SaleStatus::Available);
    assert_eq!(details.photos().len(), 1);

    let details = api.details(&c300.details_url).await.unwrap();
    assert_eq!(details.sale_status, SaleStatus::ComingSoon);
    assert!(details.photos().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_details_is_a_404_transport_error() {
    let api = start().await;

    let err = api.details("/v3/does-not-exist").await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Transport(TransportError::Status { status: 404, .. })
    ));
}

#[tokio::test(flavor = "multi_thread")]
async fn server_error_carries_status_and_body() {
    let api = start().await;

    let err = api.details("/status/500").await.unwrap_err();
    assert_eq!(
        err,
        PipelineError::Transport(TransportError::Status {
            status: 500,
            body: "status 500".to_string(),
        })
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn callback_delivery_over_http() {
    let api = start().await;
    let (tx, rx) = oneshot::channel();

    api.get_list(move |result| {
        let _ = tx.send(result.map(|list| list.objects.len()));
    })
    .wait()
    .await
    .unwrap();

    assert_eq!(rx.await.unwrap().unwrap(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn refused_connection_is_a_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = CarsalesApi::from_config(&ApiConfig::new(format!("http://{addr}"))).unwrap();
    let err = api.list().await.unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Transport(TransportError::Connection(_))
    ));
}
