use axum::Router;
use registry::AppRegistry;

pub mod flight;
pub mod health;
pub mod reservation;

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(health::build_health_check_routers())
        .merge(flight::build_flight_routers())
        .merge(reservation::build_reservation_routers())
}
