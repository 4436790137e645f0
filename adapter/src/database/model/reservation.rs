use kernel::model::{
    id::{LotId, ReservationId, UserId},
    reservation::Reservation,
};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;

// 駐車中レコードを取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub reservation_id: Uuid,
    pub user_id: String,
    pub lot_id: String,
    pub space_number: i32,
    pub parked_at: DateTime<Utc>,
    pub expected_end_time: Option<String>,
}

impl From<ReservationRow> for Reservation {
    fn from(value: ReservationRow) -> Self {
        let ReservationRow {
            reservation_id,
            user_id,
            lot_id,
            space_number,
            parked_at,
            expected_end_time,
        } = value;
        Reservation {
            reservation_id: ReservationId::from(reservation_id),
            user_id: UserId::new(user_id),
            lot_id: LotId::new(lot_id),
            space_number,
            parked_at,
            expected_end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_converts_into_reservation() {
        let id = Uuid::new_v4();
        let parked_at = Utc::now();
        let row = ReservationRow {
            reservation_id: id,
            user_id: "23db029".into(),
            lot_id: "A".into(),
            space_number: 5,
            parked_at,
            expected_end_time: Some("未定".into()),
        };

        let reservation = Reservation::from(row);
        assert_eq!(reservation.reservation_id.raw(), id);
        assert_eq!(reservation.user_id, UserId::new("23db029"));
        assert_eq!(reservation.lot_id, LotId::new("A"));
        assert_eq!(reservation.space_number, 5);
        assert_eq!(reservation.parked_at, parked_at);
        assert_eq!(reservation.expected_end_time.as_deref(), Some("未定"));
    }
}
