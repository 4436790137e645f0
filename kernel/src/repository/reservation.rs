use crate::model::{
    id::UserId,
    reservation::{event::CheckIn, Reservation},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    // チェックイン操作を行う。
    // 「同一ユーザーの二重駐車」「同一スペースの二重使用」はどちらも Conflict。
    // 事前チェックをすり抜けた同時リクエストはストレージの一意制約で検出される
    async fn create(&self, event: CheckIn) -> AppResult<Reservation>;
    // チェックアウト操作を行う。駐車中レコードがなければ NotFound
    async fn delete_by_user_id(&self, user_id: &UserId) -> AppResult<()>;
    // すべての駐車中レコードを取得する
    async fn find_active_all(&self) -> AppResult<Vec<Reservation>>;
    // ユーザー ID に紐づく駐車中レコードを取得する
    async fn find_active_by_user_id(&self, user_id: &UserId) -> AppResult<Option<Reservation>>;
}
