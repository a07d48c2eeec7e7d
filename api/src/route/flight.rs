use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::flight::{register_flight, show_flight, show_flight_list};

pub fn build_flight_routers() -> Router<AppRegistry> {
    let flights_routers = Router::new()
        .route("/", post(register_flight).get(show_flight_list))
        .route("/:flight_id", get(show_flight));

    Router::new().nest("/flights", flights_routers)
}
