use crate::model::id::UserId;
pub mod event;

// 公開プロフィール。パスワードハッシュは adapter の外に出さない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub user_name: String,
}
