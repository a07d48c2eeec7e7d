use crate::model::id::FlightId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    pub id: FlightId,
    pub flight_number: String,
}
