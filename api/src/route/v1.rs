use super::{auth::build_auth_routers, parking::build_parking_routers};
use axum::Router;
use registry::AppRegistry;

// フロントエンドは /api 配下を呼ぶ
pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_auth_routers())
        .merge(build_parking_routers());
    Router::new().nest("/api", router)
}
