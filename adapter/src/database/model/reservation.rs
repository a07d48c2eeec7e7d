use chrono::NaiveDate;
use kernel::model::{
    id::{FlightId, FlightReservationId},
    reservation::FlightReservation,
};
use shared::error::AppError;

// status is stored as text and parsed back into ReservationStatus
#[derive(sqlx::FromRow)]
pub struct FlightReservationRow {
    pub id: FlightReservationId,
    pub reservation_id: i64,
    pub flight_id: FlightId,
    pub seat_number: i32,
    pub checkin_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub status: String,
}

impl TryFrom<FlightReservationRow> for FlightReservation {
    type Error = AppError;

    fn try_from(value: FlightReservationRow) -> Result<Self, Self::Error> {
        let FlightReservationRow {
            id,
            reservation_id,
            flight_id,
            seat_number,
            checkin_date,
            departure_date,
            status,
        } = value;
        let status = status.parse().map_err(|_| {
            AppError::ConversionEntityError(format!(
                "unknown status {status:?} on reservation ({id})"
            ))
        })?;
        Ok(FlightReservation {
            id,
            reservation_id,
            flight_id,
            seat_number,
            checkin_date,
            departure_date,
            status,
        })
    }
}
