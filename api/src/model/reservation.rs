use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    id::{FlightId, FlightReservationId},
    reservation::{event::ReserveFlight, FlightReservation, ReservationStatus},
};
use serde::{Deserialize, Serialize};

/// Body of `POST /reservation`.
///
/// Seat number and check-in date travel under `seatNumber` and `checkinDate`,
/// the same names the response uses.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightReservationRequest {
    #[garde(skip)]
    pub reservation_id: i64,
    #[garde(skip)]
    pub flight: FlightReference,
    #[garde(range(min = 1))]
    pub seat_number: i32,
    #[garde(skip)]
    pub checkin_date: NaiveDate,
    #[garde(custom(is_not_before(&self.checkin_date)))]
    pub departure_date: NaiveDate,
}

// Only the id of the referenced flight matters, other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct FlightReference {
    pub id: FlightId,
}

fn is_not_before(checkin_date: &NaiveDate) -> impl FnOnce(&NaiveDate, &()) -> garde::Result + '_ {
    move |departure_date, _| {
        if departure_date < checkin_date {
            return Err(garde::Error::new("departure date is before check-in date"));
        }
        Ok(())
    }
}

impl From<CreateFlightReservationRequest> for ReserveFlight {
    fn from(value: CreateFlightReservationRequest) -> Self {
        let CreateFlightReservationRequest {
            reservation_id,
            flight,
            seat_number,
            checkin_date,
            departure_date,
        } = value;
        ReserveFlight::new(
            flight.id,
            reservation_id,
            seat_number,
            checkin_date,
            departure_date,
        )
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReservationStatusName {
    Reserved,
}

impl From<ReservationStatus> for ReservationStatusName {
    fn from(value: ReservationStatus) -> Self {
        match value {
            ReservationStatus::Reserved => Self::Reserved,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightReservationResponse {
    pub id: FlightReservationId,
    pub reservation_id: i64,
    pub flight_id: FlightId,
    pub seat_number: i32,
    pub checkin_date: NaiveDate,
    pub departure_date: NaiveDate,
    pub status: ReservationStatusName,
}

impl From<FlightReservation> for FlightReservationResponse {
    fn from(value: FlightReservation) -> Self {
        let FlightReservation {
            id,
            reservation_id,
            flight_id,
            seat_number,
            checkin_date,
            departure_date,
            status,
        } = value;
        Self {
            id,
            reservation_id,
            flight_id,
            seat_number,
            checkin_date,
            departure_date,
            status: status.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(checkin: (i32, u32, u32), departure: (i32, u32, u32)) -> CreateFlightReservationRequest {
        CreateFlightReservationRequest {
            reservation_id: 1,
            flight: FlightReference {
                id: FlightId::new(1),
            },
            seat_number: 666,
            checkin_date: NaiveDate::from_ymd_opt(checkin.0, checkin.1, checkin.2).unwrap(),
            departure_date: NaiveDate::from_ymd_opt(departure.0, departure.1, departure.2)
                .unwrap(),
        }
    }

    #[test]
    fn same_day_departure_is_valid() {
        assert!(request((2022, 2, 9), (2022, 2, 9)).validate().is_ok());
    }

    #[test]
    fn departure_before_checkin_is_rejected() {
        assert!(request((2022, 2, 12), (2022, 2, 9)).validate().is_err());
    }

    #[test]
    fn seat_number_must_be_positive() {
        let mut req = request((2022, 2, 9), (2022, 2, 12));
        req.seat_number = 0;
        assert!(req.validate().is_err());
    }
}
