use crate::model::reservation::{CreateFlightReservationRequest, FlightReservationResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::id::FlightReservationId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn make_reservation(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateFlightReservationRequest>,
) -> AppResult<(StatusCode, Json<FlightReservationResponse>)> {
    req.validate()?;

    registry
        .flight_reservation_service()
        .create(req.into())
        .await
        .map(|reservation| (StatusCode::CREATED, Json(reservation.into())))
}

pub async fn show_reservation(
    Path(id): Path<FlightReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<FlightReservationResponse>> {
    registry
        .flight_reservation_service()
        .find_by_id(id)
        .await
        .and_then(|reservation| match reservation {
            Some(reservation) => Ok(Json(reservation.into())),
            None => Err(AppError::EntityNotFound(format!(
                "reservation ({id}) was not found"
            ))),
        })
}

pub async fn show_reservation_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<FlightReservationResponse>>> {
    registry
        .flight_reservation_service()
        .find_all()
        .await
        .map(|reservations| {
            reservations
                .into_iter()
                .map(FlightReservationResponse::from)
                .collect()
        })
        .map(Json)
}

// 204 whether or not the reservation existed
pub async fn cancel_reservation(
    Path(id): Path<FlightReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .flight_reservation_service()
        .cancel(id)
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
