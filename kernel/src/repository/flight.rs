use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    flight::{event::CreateFlight, Flight},
    id::FlightId,
};

#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn create(&self, event: CreateFlight) -> AppResult<Flight>;
    async fn find_all(&self) -> AppResult<Vec<Flight>>;
    async fn find_by_id(&self, flight_id: FlightId) -> AppResult<Option<Flight>>;
}
