use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Equipment catalog entry. The `category` column drives ownership
/// resolution: `"Kendaraan"` marks vehicle-class equipment.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
    pub category: String,
    pub satuan: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::equipment_standard::Entity")]
    EquipmentStandard,
    #[sea_orm(has_many = "super::assessment_item::Entity")]
    AssessmentItem,
}

impl Related<super::equipment_standard::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EquipmentStandard.def()
    }
}

impl Related<super::assessment_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssessmentItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
