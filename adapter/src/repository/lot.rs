use crate::database::{model::lot::LotRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::LotId, lot::Lot};
use kernel::repository::lot::LotRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct LotRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl LotRepository for LotRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Lot>> {
        let rows: Vec<LotRow> = sqlx::query_as(
            r#"
                SELECT lot_id, lot_name, capacity
                FROM lots
                ORDER BY lot_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Lot::from).collect())
    }

    async fn find_by_id(&self, lot_id: &LotId) -> AppResult<Option<Lot>> {
        let row: Option<LotRow> = sqlx::query_as(
            r#"
                SELECT lot_id, lot_name, capacity
                FROM lots
                WHERE lot_id = $1
            "#,
        )
        .bind(lot_id.as_str())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Lot::from))
    }
}
