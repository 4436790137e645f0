pub mod id;
pub mod lot;
pub mod occupancy;
pub mod reservation;
pub mod user;
