use crate::model::{
    auth::{LoginRequest, LoginResponse, RegisterUserRequest, UserResponse},
    parking::ReservationResponse,
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::id::UserId;
use registry::AppRegistry;
use shared::error::AppResult;

pub async fn register_user(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterUserRequest>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate(&())?;

    registry.user_repository().create(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "新規登録が完了しました。" })),
    ))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    req.validate(&())?;

    let LoginRequest {
        student_id,
        password,
    } = req;
    let user_id = UserId::new(student_id);
    let user = registry
        .auth_repository()
        .verify_credentials(&user_id, &password)
        .await?;

    // ログイン直後の画面に必要なので、駐車中であればその情報も一緒に返す
    let reservation = registry
        .reservation_repository()
        .find_active_by_user_id(&user.user_id)
        .await?;

    Ok(Json(LoginResponse::new(
        "ログイン成功".into(),
        UserResponse::from(user),
        reservation.map(ReservationResponse::from),
    )))
}
