use crate::model::{id::FlightId, reservation::ReservationStatus};
use chrono::NaiveDate;
use derive_new::new;

// What a caller asks for. The service turns it into a CreateFlightReservation.
#[derive(new, Debug, Clone)]
pub struct ReserveFlight {
    pub flight_id: FlightId,
    pub reservation_id: i64,
    pub seat_number: i32,
    pub checkin_date: NaiveDate,
    pub departure_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct CreateFlightReservation {
    pub reservation_id: i64,
    pub flight_id: FlightId,
    pub seat_number: i32,
    pub checkin_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub status: ReservationStatus,
}
