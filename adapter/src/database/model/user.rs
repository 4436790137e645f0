use kernel::model::{id::UserId, user::User};

// 認証で使う adapter 内部の型。
// password_hash はこのクレートの外に出さず、公開プロフィールへの変換で落とす
#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: String,
    pub user_name: String,
    pub password_hash: String,
}

impl From<UserRow> for User {
    fn from(value: UserRow) -> Self {
        let UserRow {
            user_id,
            user_name,
            password_hash: _,
        } = value;
        User {
            user_id: UserId::new(user_id),
            user_name,
        }
    }
}
