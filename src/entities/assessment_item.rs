use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assessment line item. One row per piece of equipment evaluated within an
/// assessment; lifecycle bound to the header. The `kesesuaian_kontrak`,
/// `kondisi_fisik`, `kondisi_fungsi`, `score_item` and `status_kesesuaian`
/// columns are derived at submission time, never supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assessment_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub assessment_id: Uuid,
    pub equipment_id: Uuid,

    pub required_qty: i32,
    pub actual_qty: i32,
    pub layak: i32,
    pub tidak_layak: i32,
    pub berfungsi: i32,
    pub tidak_berfungsi: i32,

    pub kesesuaian_kontrak: i32,
    pub kondisi_fisik: i32,
    pub kondisi_fungsi: i32,
    pub score_item: i32,
    pub status_kesesuaian: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assessment::Entity",
        from = "Column::AssessmentId",
        to = "super::assessment::Column::Id"
    )]
    Assessment,
    #[sea_orm(
        belongs_to = "super::equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::equipment::Column::Id"
    )]
    Equipment,
}

impl Related<super::assessment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessment.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
