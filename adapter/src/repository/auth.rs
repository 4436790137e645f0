use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, user::User};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_credentials(&self, user_id: &UserId, password: &str) -> AppResult<User> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, password_hash
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // ユーザー不存在と照合失敗は同じエラーにする
        let row = row.ok_or(AppError::UnauthenticatedError)?;
        let valid = bcrypt::verify(password, &row.password_hash)?;
        if !valid {
            return Err(AppError::UnauthenticatedError);
        }

        Ok(User::from(row))
    }
}
