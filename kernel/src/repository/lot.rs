use crate::model::{id::LotId, lot::Lot};
use async_trait::async_trait;
use shared::error::AppResult;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait LotRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Lot>>;
    async fn find_by_id(&self, lot_id: &LotId) -> AppResult<Option<Lot>>;
}
