use crate::database::{model::reservation::ReservationRow, ConnectionPool};
use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use kernel::model::{
    id::{ReservationId, UserId},
    reservation::{event::CheckIn, Reservation},
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

// migrations で付与している一意制約の名前。
// チェックインの競合をどちらの Conflict に訳すかはこの名前で判別する
const USER_UNIQUE_CONSTRAINT: &str = "reservations_user_id_key";
const LOT_SPACE_UNIQUE_CONSTRAINT: &str = "reservations_lot_space_key";

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    // チェックイン操作を行う
    async fn create(&self, event: CheckIn) -> AppResult<Reservation> {
        // 事前チェックはあくまで早期失敗のための最適化。
        // 同時リクエストの最終的な裁定は INSERT 時の一意制約に任せる
        if self.find_active_by_user_id(&event.user_id).await?.is_some() {
            return Err(AppError::ResourceConflict(already_parked_message()));
        }
        if self
            .find_active_by_space(&event)
            .await?
            .is_some()
        {
            return Err(AppError::ResourceConflict(space_occupied_message()));
        }

        let reservation_id = ReservationId::new();
        let parked_at = Utc::now();

        let res = sqlx::query(
            r#"
                INSERT INTO reservations
                (reservation_id, user_id, lot_id, space_number, parked_at, expected_end_time)
                VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(reservation_id.raw())
        .bind(event.user_id.as_str())
        .bind(event.lot_id.as_str())
        .bind(event.space_number)
        .bind(parked_at)
        .bind(event.expected_end_time.as_deref())
        .execute(self.db.inner_ref())
        .await
        .map_err(map_checkin_violation)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No reservation record has been created".into(),
            ));
        }

        let CheckIn {
            user_id,
            lot_id,
            space_number,
            expected_end_time,
        } = event;
        Ok(Reservation {
            reservation_id,
            user_id,
            lot_id,
            space_number,
            parked_at,
            expected_end_time,
        })
    }

    // チェックアウト操作を行う
    async fn delete_by_user_id(&self, user_id: &UserId) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM reservations WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        // 二重チェックアウトはここに落ちる。通常のエラーとして返す
        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(
                "駐車中の記録が見つかりませんでした。".into(),
            ));
        }

        Ok(())
    }

    async fn find_active_all(&self) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, user_id, lot_id, space_number,
                       parked_at, expected_end_time
                FROM reservations
                ORDER BY parked_at ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Reservation::from).collect())
    }

    async fn find_active_by_user_id(&self, user_id: &UserId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, user_id, lot_id, space_number,
                       parked_at, expected_end_time
                FROM reservations
                WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Reservation::from))
    }
}

impl ReservationRepositoryImpl {
    // 対象スペースが使用中かどうかの事前チェックに使う
    async fn find_active_by_space(&self, event: &CheckIn) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT reservation_id, user_id, lot_id, space_number,
                       parked_at, expected_end_time
                FROM reservations
                WHERE lot_id = $1 AND space_number = $2
            "#,
        )
        .bind(event.lot_id.as_str())
        .bind(event.space_number)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Reservation::from))
    }
}

fn already_parked_message() -> String {
    "既に駐車済みです。出庫してから再度お試しください。".into()
}

fn space_occupied_message() -> String {
    "このスペースは既に使用中です。".into()
}

// 事前チェックをすり抜けた競合 INSERT は一意制約違反になる。
// どの制約に違反したかで Conflict の文言を出し分ける
fn map_checkin_violation(e: sqlx::Error) -> AppError {
    let conflict = e
        .as_database_error()
        .filter(|de| de.is_unique_violation())
        .and_then(|de| de.constraint())
        .and_then(conflict_for_constraint);
    match conflict {
        Some(message) => AppError::ResourceConflict(message),
        None => AppError::SpecificOperationError(e),
    }
}

fn conflict_for_constraint(name: &str) -> Option<String> {
    match name {
        USER_UNIQUE_CONSTRAINT => Some(already_parked_message()),
        LOT_SPACE_UNIQUE_CONSTRAINT => Some(space_occupied_message()),
        _ => None,
    }
}
