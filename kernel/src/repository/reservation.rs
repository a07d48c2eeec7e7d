use crate::model::{
    id::FlightReservationId,
    reservation::{event::CreateFlightReservation, FlightReservation},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait FlightReservationRepository: Send + Sync {
    // Inserts the reservation and returns it with the assigned id
    async fn create(&self, event: CreateFlightReservation) -> AppResult<FlightReservation>;
    async fn find_by_id(&self, id: FlightReservationId) -> AppResult<Option<FlightReservation>>;
    // Ordered by id, i.e. insertion order
    async fn find_all(&self) -> AppResult<Vec<FlightReservation>>;
    // Returns whether a row was actually removed
    async fn delete(&self, id: FlightReservationId) -> AppResult<bool>;
}
