use crate::model::{id::UserId, user::event::CreateUser, user::User};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    // 新規登録を行う。学籍番号が重複している場合は Conflict
    async fn create(&self, event: CreateUser) -> AppResult<()>;
    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>>;
}
