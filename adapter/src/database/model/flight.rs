use kernel::model::{flight::Flight, id::FlightId};

#[derive(sqlx::FromRow)]
pub struct FlightRow {
    pub flight_id: FlightId,
    pub flight_number: String,
}

impl From<FlightRow> for Flight {
    fn from(value: FlightRow) -> Self {
        let FlightRow {
            flight_id,
            flight_number,
        } = value;
        Flight {
            id: flight_id,
            flight_number,
        }
    }
}
