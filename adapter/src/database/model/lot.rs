use kernel::model::{id::LotId, lot::Lot};

#[derive(sqlx::FromRow)]
pub struct LotRow {
    pub lot_id: String,
    pub lot_name: String,
    pub capacity: i32,
}

impl From<LotRow> for Lot {
    fn from(value: LotRow) -> Self {
        let LotRow {
            lot_id,
            lot_name,
            capacity,
        } = value;
        Lot {
            lot_id: LotId::new(lot_id),
            lot_name,
            capacity,
        }
    }
}
