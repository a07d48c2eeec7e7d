pub mod flight;
pub mod health;
pub mod reservation;
