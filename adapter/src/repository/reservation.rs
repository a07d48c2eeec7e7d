use crate::database::{model::reservation::FlightReservationRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::FlightReservationId,
    reservation::{event::CreateFlightReservation, FlightReservation},
};
use kernel::repository::reservation::FlightReservationRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct FlightReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl FlightReservationRepository for FlightReservationRepositoryImpl {
    async fn create(&self, event: CreateFlightReservation) -> AppResult<FlightReservation> {
        // The foreign key on flight_id is the last word on whether the flight
        // exists, even if it disappeared after the service looked it up.
        let row = sqlx::query_as::<_, FlightReservationRow>(
            r#"
                INSERT INTO flight_reservations
                (reservation_id, flight_id, seat_number,
                checkin_date, departure_date, status)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING
                id, reservation_id, flight_id, seat_number,
                checkin_date, departure_date, status
            "#,
        )
        .bind(event.reservation_id)
        .bind(event.flight_id)
        .bind(event.seat_number)
        .bind(event.checkin_date)
        .bind(event.departure_date)
        .bind(event.status.as_ref())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(|e| {
            if e
                .as_database_error()
                .is_some_and(|db| db.is_foreign_key_violation())
            {
                AppError::InvalidReference(format!("flight ({}) does not exist", event.flight_id))
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        row.try_into()
    }

    async fn find_by_id(&self, id: FlightReservationId) -> AppResult<Option<FlightReservation>> {
        sqlx::query_as::<_, FlightReservationRow>(
            r#"
                SELECT
                id, reservation_id, flight_id, seat_number,
                checkin_date, departure_date, status
                FROM flight_reservations
                WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(FlightReservation::try_from)
        .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<FlightReservation>> {
        sqlx::query_as::<_, FlightReservationRow>(
            r#"
                SELECT
                id, reservation_id, flight_id, seat_number,
                checkin_date, departure_date, status
                FROM flight_reservations
                ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(FlightReservation::try_from)
        .collect()
    }

    async fn delete(&self, id: FlightReservationId) -> AppResult<bool> {
        let res = sqlx::query("DELETE FROM flight_reservations WHERE id = $1")
            .bind(id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected() > 0)
    }
}
