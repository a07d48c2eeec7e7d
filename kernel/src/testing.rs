//! In-memory repositories for exercising the service and the HTTP layer
//! without a database.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared::error::{AppError, AppResult};

use crate::{
    model::{
        flight::{event::CreateFlight, Flight},
        id::{FlightId, FlightReservationId},
        reservation::{event::CreateFlightReservation, FlightReservation},
    },
    repository::{
        flight::FlightRepository, health::HealthCheckRepository,
        reservation::FlightReservationRepository,
    },
};

struct Table<T> {
    last_id: i64,
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            last_id: 0,
            rows: Vec::new(),
        }
    }
}

impl<T> Table<T> {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }
}

#[derive(Default)]
pub struct InMemoryFlightRepository {
    table: Mutex<Table<Flight>>,
}

impl InMemoryFlightRepository {
    fn contains(&self, flight_id: FlightId) -> bool {
        let table = self.table.lock().expect("flight table poisoned");
        table.rows.iter().any(|f| f.id == flight_id)
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn create(&self, event: CreateFlight) -> AppResult<Flight> {
        let mut table = self.table.lock().expect("flight table poisoned");
        let flight = Flight {
            id: FlightId::new(table.next_id()),
            flight_number: event.flight_number,
        };
        table.rows.push(flight.clone());
        Ok(flight)
    }

    async fn find_all(&self) -> AppResult<Vec<Flight>> {
        let table = self.table.lock().expect("flight table poisoned");
        Ok(table.rows.clone())
    }

    async fn find_by_id(&self, flight_id: FlightId) -> AppResult<Option<Flight>> {
        let table = self.table.lock().expect("flight table poisoned");
        Ok(table.rows.iter().find(|f| f.id == flight_id).cloned())
    }
}

/// Checks the flight reference on insert the way the foreign key does.
pub struct InMemoryFlightReservationRepository {
    flights: Arc<InMemoryFlightRepository>,
    table: Mutex<Table<FlightReservation>>,
}

impl InMemoryFlightReservationRepository {
    pub fn new(flights: Arc<InMemoryFlightRepository>) -> Self {
        Self {
            flights,
            table: Mutex::default(),
        }
    }
}

#[async_trait]
impl FlightReservationRepository for InMemoryFlightReservationRepository {
    async fn create(&self, event: CreateFlightReservation) -> AppResult<FlightReservation> {
        if !self.flights.contains(event.flight_id) {
            return Err(AppError::InvalidReference(format!(
                "flight ({}) does not exist",
                event.flight_id
            )));
        }
        let mut table = self.table.lock().expect("reservation table poisoned");
        let reservation = FlightReservation {
            id: FlightReservationId::new(table.next_id()),
            reservation_id: event.reservation_id,
            flight_id: event.flight_id,
            seat_number: event.seat_number,
            checkin_date: event.checkin_date,
            departure_date: event.departure_date,
            status: event.status,
        };
        table.rows.push(reservation.clone());
        Ok(reservation)
    }

    async fn find_by_id(&self, id: FlightReservationId) -> AppResult<Option<FlightReservation>> {
        let table = self.table.lock().expect("reservation table poisoned");
        Ok(table.rows.iter().find(|r| r.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<FlightReservation>> {
        let table = self.table.lock().expect("reservation table poisoned");
        Ok(table.rows.clone())
    }

    async fn delete(&self, id: FlightReservationId) -> AppResult<bool> {
        let mut table = self.table.lock().expect("reservation table poisoned");
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        Ok(table.rows.len() < before)
    }
}

pub struct InMemoryHealthCheckRepository {
    healthy: bool,
}

impl InMemoryHealthCheckRepository {
    pub fn new(healthy: bool) -> Self {
        Self { healthy }
    }
}

#[async_trait]
impl HealthCheckRepository for InMemoryHealthCheckRepository {
    async fn check_db(&self) -> bool {
        self.healthy
    }
}
