use crate::model::id::{FlightId, FlightReservationId};
use chrono::NaiveDate;
use strum::{AsRefStr, EnumString};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightReservation {
    pub id: FlightReservationId,
    // Correlation id chosen by the caller, not unique.
    pub reservation_id: i64,
    pub flight_id: FlightId,
    pub seat_number: i32,
    pub checkin_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub status: ReservationStatus,
}

/// Lifecycle marker of a reservation. Cancelling deletes the row, so a
/// stored reservation is always `RESERVED`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatus {
    #[default]
    Reserved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_upper_snake_case() {
        assert_eq!(ReservationStatus::Reserved.as_ref(), "RESERVED");
        assert_eq!(
            "RESERVED".parse::<ReservationStatus>(),
            Ok(ReservationStatus::Reserved)
        );
        assert!("CANCELLED".parse::<ReservationStatus>().is_err());
    }
}
