use crate::model::id::{LotId, ReservationId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

// 駐車中のユーザーとスペースを結びつけるレコード。
// チェックインで作成され、チェックアウトで削除される。更新操作はない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub lot_id: LotId,
    pub space_number: i32,
    pub parked_at: DateTime<Utc>,
    // 退庫予定時刻は自由入力（"14:30" や "未定" など）
    pub expected_end_time: Option<String>,
}
