pub mod flight;
pub mod reservation;
