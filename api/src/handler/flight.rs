use crate::model::flight::{CreateFlightRequest, FlightResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::FlightId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_flight(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFlightRequest>,
) -> AppResult<(StatusCode, Json<FlightResponse>)> {
    req.validate()?;

    registry
        .flight_repository()
        .create(req.into())
        .await
        .map(|flight| (StatusCode::CREATED, Json(flight.into())))
}

pub async fn show_flight_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<FlightResponse>>> {
    registry
        .flight_repository()
        .find_all()
        .await
        .map(|flights| flights.into_iter().map(FlightResponse::from).collect())
        .map(Json)
}

pub async fn show_flight(
    Path(flight_id): Path<FlightId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FlightResponse>> {
    registry
        .flight_repository()
        .find_by_id(flight_id)
        .await
        .and_then(|flight| match flight {
            Some(flight) => Ok(Json(flight.into())),
            None => Err(AppError::EntityNotFound(format!(
                "flight ({flight_id}) was not found"
            ))),
        })
}
