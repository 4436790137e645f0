pub mod lot;
pub mod reservation;
pub mod user;
