mod helper;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use helper::{empty_request, make_router, make_router_with_db_health, send};

#[tokio::test]
async fn health_check_is_ok() -> Result<()> {
    let res = send(&make_router(), empty_request(Method::GET, "/health")).await?;
    assert_eq!(res.status, StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn health_check_db_reflects_database_state() -> Result<()> {
    let res = send(&make_router(), empty_request(Method::GET, "/health/db")).await?;
    assert_eq!(res.status, StatusCode::OK);

    let res = send(
        &make_router_with_db_health(false),
        empty_request(Method::GET, "/health/db"),
    )
    .await?;
    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    Ok(())
}
