use crate::model::id::UserId;
use derive_new::new;

#[derive(new)]
pub struct CreateUser {
    pub user_id: UserId,
    pub user_name: String,
    pub password: String,
}
