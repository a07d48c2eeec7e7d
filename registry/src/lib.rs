use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    flight::FlightRepositoryImpl, health::HealthCheckRepositoryImpl,
    reservation::FlightReservationRepositoryImpl,
};
use kernel::repository::{
    flight::FlightRepository, health::HealthCheckRepository,
    reservation::FlightReservationRepository,
};
use kernel::service::reservation::{FlightReservationService, FlightReservationServiceImpl};

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    flight_repository: Arc<dyn FlightRepository>,
    flight_reservation_service: Arc<dyn FlightReservationService>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let flight_repository = Arc::new(FlightRepositoryImpl::new(pool.clone()));
        let flight_reservation_repository =
            Arc::new(FlightReservationRepositoryImpl::new(pool.clone()));
        Self::with_repositories(
            health_check_repository,
            flight_repository,
            flight_reservation_repository,
        )
    }

    /// Builds the registry on top of arbitrary repository implementations.
    pub fn with_repositories(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        flight_repository: Arc<dyn FlightRepository>,
        flight_reservation_repository: Arc<dyn FlightReservationRepository>,
    ) -> Self {
        let flight_reservation_service = Arc::new(FlightReservationServiceImpl::new(
            flight_repository.clone(),
            flight_reservation_repository,
        ));
        Self {
            health_check_repository,
            flight_repository,
            flight_reservation_service,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn flight_repository(&self) -> Arc<dyn FlightRepository> {
        self.flight_repository.clone()
    }

    pub fn flight_reservation_service(&self) -> Arc<dyn FlightReservationService> {
        self.flight_reservation_service.clone()
    }
}
