use crate::model::parking::{CheckInRequest, CheckOutRequest, LotResponse, ReservationResponse};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{id::LotId, id::UserId, occupancy::reconcile};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

// 駐車場ごとの空き状況ビューを返す。
// サーバー側に状態は持たず、毎回ストレージから計算し直す
pub async fn show_parking_data(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<LotResponse>>> {
    let lots = registry.lot_repository().find_all().await?;
    let reservations = registry.reservation_repository().find_active_all().await?;

    let view = reconcile(lots, &reservations);
    Ok(Json(view.into_iter().map(LotResponse::from).collect()))
}

pub async fn checkin(
    State(registry): State<AppRegistry>,
    Json(req): Json<CheckInRequest>,
) -> AppResult<(StatusCode, Json<ReservationResponse>)> {
    req.validate(&())?;

    // スペースは行として存在しないため、駐車場の capacity で範囲を確かめる
    let lot_id = LotId::new(req.lot_id.clone());
    let lot = registry
        .lot_repository()
        .find_by_id(&lot_id)
        .await?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("駐車場（{}）が見つかりませんでした。", lot_id))
        })?;
    if !(1..=lot.capacity).contains(&req.space_id) {
        return Err(AppError::UnprocessableEntity(format!(
            "スペース番号 {} は {} に存在しません。",
            req.space_id, lot.lot_name
        )));
    }

    let reservation = registry.reservation_repository().create(req.into()).await?;

    Ok((StatusCode::CREATED, Json(reservation.into())))
}

pub async fn checkout(
    State(registry): State<AppRegistry>,
    Json(req): Json<CheckOutRequest>,
) -> AppResult<Json<serde_json::Value>> {
    req.validate(&())?;

    registry
        .reservation_repository()
        .delete_by_user_id(&UserId::new(req.user_id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "出庫しました。" })))
}
