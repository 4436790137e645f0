use crate::database::{model::user::UserRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::UserId, user::event::CreateUser, user::User};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<()> {
        // 平文は保存しない。ソルト付きハッシュのみを持つ
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, password_hash)
                VALUES ($1, $2, $3)
            "#,
        )
        .bind(event.user_id.as_str())
        .bind(&event.user_name)
        .bind(&password_hash)
        .execute(self.db.inner_ref())
        .await
        .map_err(map_duplicate_user)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
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

        Ok(row.map(User::from))
    }
}

// 学籍番号の一意性はストレージの制約が最終的に保証する。
// 一意制約違反はそのまま Conflict として呼び出し側に返す
fn map_duplicate_user(e: sqlx::Error) -> AppError {
    let is_duplicate = e
        .as_database_error()
        .map(|de| de.is_unique_violation())
        .unwrap_or(false);
    if is_duplicate {
        AppError::ResourceConflict("この学籍番号は既に使用されています。".into())
    } else {
        AppError::SpecificOperationError(e)
    }
}
