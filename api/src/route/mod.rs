pub mod auth;
pub mod health;
pub mod parking;
pub mod v1;
