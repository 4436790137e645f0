use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::parking::{checkin, checkout, show_parking_data};

pub fn build_parking_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/parking-data", get(show_parking_data))
        .route("/parking/checkin", post(checkin))
        .route("/parking/checkout", post(checkout))
}
