use crate::model::{id::UserId, user::User};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    // 学籍番号とパスワードを検証し、一致すれば公開プロフィールを返す。
    // ユーザー不存在とパスワード不一致は呼び出し側から区別できない
    async fn verify_credentials(&self, user_id: &UserId, password: &str) -> AppResult<User>;
}
