use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::auth::{login, register_user};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/register", post(register_user))
        .route("/login", post(login))
}
