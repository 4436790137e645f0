use crate::model::id::{LotId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CheckIn {
    pub user_id: UserId,
    pub lot_id: LotId,
    pub space_number: i32,
    pub expected_end_time: Option<String>,
}
