use crate::model::{
    id::{LotId, UserId},
    lot::Lot,
    reservation::Reservation,
};
use std::collections::HashMap;

// 駐車場ごとの空き状況ビュー。
// 駐車場マスタと駐車中レコードの二つの集合から毎回計算し直す純粋な導出値で、
// サーバー側に状態は持たない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotOccupancy {
    pub lot_id: LotId,
    pub lot_name: String,
    pub capacity: i32,
    pub available: i32,
    pub status: LotStatus,
    pub spaces: Vec<SpaceOccupancy>,
}

// スペース 1 つぶんの状態。occupant が Some なら使用中
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceOccupancy {
    pub space_number: i32,
    pub occupant: Option<Occupant>,
}

// 使用中スペースの占有者情報。公開してよいメタデータのみを持つ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    pub user_id: UserId,
    pub expected_end_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotStatus {
    Full,
    Available,
    Limited,
}

impl LotStatus {
    // 空き率 0.3 超で Available、空きゼロで Full、それ以外は Limited。
    // 浮動小数を避けて available/capacity > 3/10 を整数比較で判定する
    pub fn from_counts(available: i32, capacity: i32) -> Self {
        if available == 0 {
            Self::Full
        } else if available * 10 > capacity * 3 {
            Self::Available
        } else {
            Self::Limited
        }
    }
}

/// 駐車場一覧と駐車中レコード一覧から、駐車場ごとの空き状況を導出する。
/// スペース番号は 1..=capacity で決定的に採番する
pub fn reconcile(lots: Vec<Lot>, reservations: &[Reservation]) -> Vec<LotOccupancy> {
    let occupied: HashMap<(&LotId, i32), &Reservation> = reservations
        .iter()
        .map(|r| ((&r.lot_id, r.space_number), r))
        .collect();

    lots.into_iter()
        .map(|lot| {
            let spaces: Vec<SpaceOccupancy> = (1..=lot.capacity)
                .map(|space_number| SpaceOccupancy {
                    space_number,
                    occupant: occupied.get(&(&lot.lot_id, space_number)).map(|r| Occupant {
                        user_id: r.user_id.clone(),
                        expected_end_time: r.expected_end_time.clone(),
                    }),
                })
                .collect();

            let parked = spaces.iter().filter(|s| s.occupant.is_some()).count() as i32;
            let available = lot.capacity - parked;

            LotOccupancy {
                lot_id: lot.lot_id,
                lot_name: lot.lot_name,
                capacity: lot.capacity,
                available,
                status: LotStatus::from_counts(available, lot.capacity),
                spaces,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::id::ReservationId;
    use chrono::Utc;

    fn lot(id: &str, capacity: i32) -> Lot {
        Lot {
            lot_id: LotId::new(id),
            lot_name: format!("駐車場{id}"),
            capacity,
        }
    }

    fn reservation(user_id: &str, lot_id: &str, space_number: i32) -> Reservation {
        Reservation {
            reservation_id: ReservationId::new(),
            user_id: UserId::new(user_id),
            lot_id: LotId::new(lot_id),
            space_number,
            parked_at: Utc::now(),
            expected_end_time: None,
        }
    }

    #[test]
    fn available_equals_capacity_minus_reservations() {
        let reservations = vec![
            reservation("23db001", "A", 1),
            reservation("23db002", "A", 5),
            reservation("23db003", "A", 9),
        ];
        let view = reconcile(vec![lot("A", 10)], &reservations);

        assert_eq!(view.len(), 1);
        assert_eq!(view[0].available, 7);
        assert_eq!(view[0].status, LotStatus::Available);
    }

    #[test]
    fn status_is_full_iff_no_space_is_available() {
        let reservations: Vec<Reservation> = (1..=10)
            .map(|n| reservation(&format!("23db{n:03}"), "A", n))
            .collect();
        let view = reconcile(vec![lot("A", 10)], &reservations);

        assert_eq!(view[0].available, 0);
        assert_eq!(view[0].status, LotStatus::Full);
    }

    #[test]
    fn status_is_limited_when_rate_is_at_most_30_percent() {
        // 空き 2/10 = 0.2
        let reservations: Vec<Reservation> = (1..=8)
            .map(|n| reservation(&format!("23db{n:03}"), "A", n))
            .collect();
        let view = reconcile(vec![lot("A", 10)], &reservations);

        assert_eq!(view[0].available, 2);
        assert_eq!(view[0].status, LotStatus::Limited);
    }

    #[test]
    fn rate_exactly_30_percent_is_limited() {
        // 空き率ちょうど 0.3 は「> 0.3」を満たさない
        assert_eq!(LotStatus::from_counts(3, 10), LotStatus::Limited);
        assert_eq!(LotStatus::from_counts(4, 10), LotStatus::Available);
    }

    #[test]
    fn spaces_are_numbered_deterministically_from_one() {
        let view = reconcile(vec![lot("B", 4)], &[]);
        let numbers: Vec<i32> = view[0].spaces.iter().map(|s| s.space_number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert!(view[0].spaces.iter().all(|s| s.occupant.is_none()));
    }

    #[test]
    fn occupant_metadata_is_attached_to_the_right_space() {
        let mut r = reservation("23db029", "A", 5);
        r.expected_end_time = Some("14:30".into());
        let view = reconcile(vec![lot("A", 10)], &[r]);

        let space5 = &view[0].spaces[4];
        assert_eq!(space5.space_number, 5);
        let occupant = space5.occupant.as_ref().unwrap();
        assert_eq!(occupant.user_id, UserId::new("23db029"));
        assert_eq!(occupant.expected_end_time.as_deref(), Some("14:30"));
        // 他のスペースは空きのまま
        assert_eq!(view[0].available, 9);
    }

    #[test]
    fn reservations_only_affect_their_own_lot() {
        let reservations = vec![reservation("23db001", "A", 1)];
        let view = reconcile(vec![lot("A", 10), lot("B", 15)], &reservations);

        assert_eq!(view[0].available, 9);
        assert_eq!(view[1].available, 15);
        assert_eq!(view[1].status, LotStatus::Available);
    }
}
