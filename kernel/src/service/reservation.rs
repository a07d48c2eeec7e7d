use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        id::FlightReservationId,
        reservation::{
            event::{CreateFlightReservation, ReserveFlight},
            FlightReservation, ReservationStatus,
        },
    },
    repository::{flight::FlightRepository, reservation::FlightReservationRepository},
};

#[async_trait]
pub trait FlightReservationService: Send + Sync {
    async fn create(&self, request: ReserveFlight) -> AppResult<FlightReservation>;
    async fn find_by_id(&self, id: FlightReservationId) -> AppResult<Option<FlightReservation>>;
    async fn find_all(&self) -> AppResult<Vec<FlightReservation>>;
    async fn cancel(&self, id: FlightReservationId) -> AppResult<()>;
}

#[derive(new)]
pub struct FlightReservationServiceImpl {
    flight_repository: Arc<dyn FlightRepository>,
    reservation_repository: Arc<dyn FlightReservationRepository>,
}

#[async_trait]
impl FlightReservationService for FlightReservationServiceImpl {
    async fn create(&self, request: ReserveFlight) -> AppResult<FlightReservation> {
        let flight = self
            .flight_repository
            .find_by_id(request.flight_id)
            .await?
            .ok_or_else(|| {
                AppError::InvalidReference(format!(
                    "flight ({}) does not exist",
                    request.flight_id
                ))
            })?;

        let ReserveFlight {
            reservation_id,
            seat_number,
            checkin_date,
            departure_date,
            ..
        } = request;
        let reservation = self
            .reservation_repository
            .create(CreateFlightReservation {
                reservation_id,
                flight_id: flight.id,
                seat_number,
                checkin_date,
                departure_date,
                status: ReservationStatus::Reserved,
            })
            .await?;

        tracing::info!(
            id = %reservation.id,
            reservation_id = reservation.reservation_id,
            flight_id = %reservation.flight_id,
            "flight reserved"
        );
        Ok(reservation)
    }

    async fn find_by_id(&self, id: FlightReservationId) -> AppResult<Option<FlightReservation>> {
        self.reservation_repository.find_by_id(id).await
    }

    async fn find_all(&self) -> AppResult<Vec<FlightReservation>> {
        self.reservation_repository.find_all().await
    }

    async fn cancel(&self, id: FlightReservationId) -> AppResult<()> {
        if self.reservation_repository.delete(id).await? {
            tracing::info!(%id, "reservation cancelled");
        } else {
            // Cancelling twice is not an error.
            tracing::debug!(%id, "reservation to cancel was not found");
        }
        Ok(())
    }
}
