pub mod flight;
pub mod id;
pub mod reservation;
