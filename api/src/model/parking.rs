use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{LotId, ReservationId, UserId},
    occupancy::{LotOccupancy, LotStatus, SpaceOccupancy},
    reservation::{event::CheckIn, Reservation},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    #[garde(length(min = 1))]
    pub user_id: String,
    #[garde(length(min = 1))]
    pub lot_id: String,
    #[garde(range(min = 1))]
    pub space_id: i32,
    // 退庫予定時刻は自由入力のまま受け付ける（"未定" も有効な値）
    #[garde(skip)]
    pub end_time: Option<String>,
}

impl From<CheckInRequest> for CheckIn {
    fn from(value: CheckInRequest) -> Self {
        let CheckInRequest {
            user_id,
            lot_id,
            space_id,
            end_time,
        } = value;
        Self {
            user_id: UserId::new(user_id),
            lot_id: LotId::new(lot_id),
            space_number: space_id,
            expected_end_time: end_time,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutRequest {
    #[garde(length(min = 1))]
    pub user_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub lot_id: LotId,
    pub space_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<String>,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            reservation_id,
            user_id,
            lot_id,
            space_number,
            parked_at,
            expected_end_time,
        } = value;
        Self {
            reservation_id,
            user_id,
            lot_id,
            space_id: space_number,
            start_time: parked_at,
            end_time: expected_end_time,
        }
    }
}

// フロントエンドが getStatusClass で切り替えに使う文字列
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LotStatusLabel {
    Full,
    Available,
    Limited,
}

impl From<LotStatus> for LotStatusLabel {
    fn from(value: LotStatus) -> Self {
        match value {
            LotStatus::Full => Self::Full,
            LotStatus::Available => Self::Available,
            LotStatus::Limited => Self::Limited,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LotResponse {
    pub id: LotId,
    pub name: String,
    pub capacity: i32,
    pub available: i32,
    pub status: LotStatusLabel,
    pub spaces: Vec<SpaceResponse>,
}

impl From<LotOccupancy> for LotResponse {
    fn from(value: LotOccupancy) -> Self {
        let LotOccupancy {
            lot_id,
            lot_name,
            capacity,
            available,
            status,
            spaces,
        } = value;
        Self {
            id: lot_id,
            name: lot_name,
            capacity,
            available,
            status: status.into(),
            spaces: spaces.into_iter().map(SpaceResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceResponse {
    pub id: i32,
    pub is_parked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupant_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl From<SpaceOccupancy> for SpaceResponse {
    fn from(value: SpaceOccupancy) -> Self {
        let SpaceOccupancy {
            space_number,
            occupant,
        } = value;
        let (occupant_id, end_time) = match occupant {
            Some(o) => (Some(o.user_id), o.expected_end_time),
            None => (None, None),
        };
        Self {
            id: space_number,
            is_parked: occupant_id.is_some(),
            occupant_id,
            end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_labels_serialize_to_the_strings_the_ui_expects() {
        assert_eq!(
            serde_json::to_value(LotStatusLabel::Full).unwrap(),
            json!("full")
        );
        assert_eq!(
            serde_json::to_value(LotStatusLabel::Available).unwrap(),
            json!("available")
        );
        assert_eq!(
            serde_json::to_value(LotStatusLabel::Limited).unwrap(),
            json!("limited")
        );
    }

    #[test]
    fn checkin_request_accepts_camel_case_body() {
        let req: CheckInRequest = serde_json::from_value(json!({
            "userId": "23db029",
            "lotId": "A",
            "spaceId": 5,
            "endTime": "14:30"
        }))
        .unwrap();
        assert!(req.validate(&()).is_ok());

        let event = CheckIn::from(req);
        assert_eq!(event.user_id, UserId::new("23db029"));
        assert_eq!(event.lot_id, LotId::new("A"));
        assert_eq!(event.space_number, 5);
        assert_eq!(event.expected_end_time.as_deref(), Some("14:30"));
    }

    #[test]
    fn end_time_is_optional_free_text() {
        let req: CheckInRequest = serde_json::from_value(json!({
            "userId": "23db029",
            "lotId": "A",
            "spaceId": 1
        }))
        .unwrap();
        assert!(req.validate(&()).is_ok());
        assert!(req.end_time.is_none());
    }

    #[test]
    fn vacant_space_serializes_without_occupant_fields() {
        let space = SpaceResponse::from(SpaceOccupancy {
            space_number: 3,
            occupant: None,
        });
        let value = serde_json::to_value(space).unwrap();
        assert_eq!(value, json!({ "id": 3, "isParked": false }));
    }

    #[test]
    fn occupied_space_serializes_occupant_metadata() {
        use kernel::model::occupancy::Occupant;

        let space = SpaceResponse::from(SpaceOccupancy {
            space_number: 5,
            occupant: Some(Occupant {
                user_id: UserId::new("23db029"),
                expected_end_time: Some("未定".into()),
            }),
        });
        let value = serde_json::to_value(space).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 5,
                "isParked": true,
                "occupantId": "23db029",
                "endTime": "未定"
            })
        );
    }
}
