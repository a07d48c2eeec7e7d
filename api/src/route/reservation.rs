use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    cancel_reservation, make_reservation, show_reservation, show_reservation_list,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/reservation", post(make_reservation))
        .route(
            "/reservation/:reservation_id",
            get(show_reservation).delete(cancel_reservation),
        )
        .route("/reservations", get(show_reservation_list))
}
