#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use api::route::routes;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use kernel::testing::{
    InMemoryFlightRepository, InMemoryFlightReservationRepository, InMemoryHealthCheckRepository,
};
use registry::AppRegistry;
use serde_json::Value;
use tower::ServiceExt;

pub fn make_router() -> Router {
    make_router_with_db_health(true)
}

pub fn make_router_with_db_health(healthy: bool) -> Router {
    let flights = Arc::new(InMemoryFlightRepository::default());
    let reservations = Arc::new(InMemoryFlightReservationRepository::new(flights.clone()));
    let registry = AppRegistry::with_repositories(
        Arc::new(InMemoryHealthCheckRepository::new(healthy)),
        flights,
        reservations,
    );
    routes().with_state(registry)
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

pub async fn send(router: &Router, req: Request<Body>) -> Result<TestResponse> {
    let res = router.clone().oneshot(req).await?;
    let status = res.status();
    let content_type = res
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let body = to_bytes(res.into_body(), usize::MAX).await?.to_vec();
    Ok(TestResponse {
        status,
        content_type,
        body,
    })
}

pub async fn create_flight(router: &Router, flight_number: &str) -> Result<i64> {
    let res = send(
        router,
        json_request(
            Method::POST,
            "/flights",
            &serde_json::json!({ "flightNumber": flight_number }),
        ),
    )
    .await?;
    assert_eq!(res.status, StatusCode::CREATED);
    Ok(res.json()["id"].as_i64().expect("flight id is not a number"))
}
