use crate::database::{model::flight::FlightRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    flight::{event::CreateFlight, Flight},
    id::FlightId,
};
use kernel::repository::flight::FlightRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct FlightRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl FlightRepository for FlightRepositoryImpl {
    async fn create(&self, event: CreateFlight) -> AppResult<Flight> {
        let row = sqlx::query_as::<_, FlightRow>(
            r#"
                INSERT INTO flights (flight_number)
                VALUES ($1)
                RETURNING flight_id, flight_number
            "#,
        )
        .bind(event.flight_number)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into())
    }

    async fn find_all(&self) -> AppResult<Vec<Flight>> {
        let rows = sqlx::query_as::<_, FlightRow>(
            r#"
                SELECT flight_id, flight_number
                FROM flights
                ORDER BY flight_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn find_by_id(&self, flight_id: FlightId) -> AppResult<Option<Flight>> {
        let row = sqlx::query_as::<_, FlightRow>(
            r#"
                SELECT flight_id, flight_number
                FROM flights
                WHERE flight_id = $1
            "#,
        )
        .bind(flight_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Flight::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at PostgreSQL"]
    async fn test_register_flight(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = FlightRepositoryImpl::new(ConnectionPool::new(pool));

        let created = repo.create(CreateFlight::new("Holiday Inn".into())).await?;
        assert_eq!(created.flight_number, "Holiday Inn");

        let res = repo.find_all().await?;
        assert_eq!(res, vec![created.clone()]);

        let res = repo.find_by_id(created.id).await?;
        assert_eq!(res, Some(created.clone()));

        let missing = repo.find_by_id(FlightId::new(created.id.raw() + 1)).await?;
        assert!(missing.is_none());
        Ok(())
    }
}
