mod helper;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use helper::{create_flight, empty_request, json_request, make_router, send};
use serde_json::json;

#[tokio::test]
async fn register_flight_returns_created_flight() -> Result<()> {
    let router = make_router();

    let res = send(
        &router,
        json_request(Method::POST, "/flights", &json!({ "flightNumber": "Holiday Inn" })),
    )
    .await?;

    assert_eq!(res.status, StatusCode::CREATED);
    let body = res.json();
    assert!(body["id"].is_i64());
    assert_eq!(body["flightNumber"], "Holiday Inn");
    Ok(())
}

#[tokio::test]
async fn register_flight_rejects_empty_flight_number() -> Result<()> {
    let router = make_router();

    let res = send(
        &router,
        json_request(Method::POST, "/flights", &json!({ "flightNumber": "" })),
    )
    .await?;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn show_flight_and_list() -> Result<()> {
    let router = make_router();
    let first = create_flight(&router, "NH 101").await?;
    let second = create_flight(&router, "JL 5").await?;

    let res = send(&router, empty_request(Method::GET, &format!("/flights/{second}"))).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({ "id": second, "flightNumber": "JL 5" }));

    let res = send(&router, empty_request(Method::GET, "/flights")).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json(),
        json!([
            { "id": first, "flightNumber": "NH 101" },
            { "id": second, "flightNumber": "JL 5" },
        ])
    );
    Ok(())
}

#[tokio::test]
async fn show_flight_returns_not_found() -> Result<()> {
    let router = make_router();

    let res = send(&router, empty_request(Method::GET, "/flights/99")).await?;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    Ok(())
}
