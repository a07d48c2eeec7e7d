use garde::Validate;
use kernel::model::{
    flight::{event::CreateFlight, Flight},
    id::FlightId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightRequest {
    #[garde(length(min = 1))]
    pub flight_number: String,
}

impl From<CreateFlightRequest> for CreateFlight {
    fn from(value: CreateFlightRequest) -> Self {
        let CreateFlightRequest { flight_number } = value;
        CreateFlight { flight_number }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightResponse {
    pub id: FlightId,
    pub flight_number: String,
}

impl From<Flight> for FlightResponse {
    fn from(value: Flight) -> Self {
        let Flight { id, flight_number } = value;
        Self { id, flight_number }
    }
}
