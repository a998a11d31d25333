use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived inventory record: the latest known state of a vendor's equipment
/// holding, one row per `(owner_id, equipment_id)` pair. Unlike assessments,
/// these rows are mutable and updated in place by every relevant submission.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vendor_assets")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub vendor_id: Uuid,
    pub peruntukan_id: Uuid,
    pub team_id: Option<Uuid>,
    pub personnel_id: Option<Uuid>,
    /// Resolved once per submission: the team for vehicle-based purposes,
    /// otherwise the primary personnel. Never both.
    pub owner_id: Uuid,
    pub equipment_id: Uuid,

    pub jumlah_terakhir: i32,
    pub tanggal_distribusi: NaiveDate,
    pub last_assessment_id: Uuid,
    pub last_assessed_at: DateTime<Utc>,

    pub kesesuaian_kontrak: i32,
    pub kondisi_fisik: i32,
    pub kondisi_fungsi: i32,
    pub score: i32,
    pub status_kesesuaian: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::equipment::Column::Id"
    )]
    Equipment,
    #[sea_orm(
        belongs_to = "super::assessment::Entity",
        from = "Column::LastAssessmentId",
        to = "super::assessment::Column::Id"
    )]
    LastAssessment,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
