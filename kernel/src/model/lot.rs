use crate::model::id::LotId;

// 駐車場のマスタデータ。マイグレーションで投入される静的な参照データで、
// スペースは 1..=capacity の連番として暗黙に定まる（行としては持たない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lot {
    pub lot_id: LotId,
    pub lot_name: String,
    pub capacity: i32,
}
