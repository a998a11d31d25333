use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assessment header. One row per audit event; append-only once created by
/// the submission workflow.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "assessments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub tanggal_penilaian: NaiveDate,
    pub shift: String,
    pub vendor_id: Uuid,
    pub peruntukan_id: Uuid,
    pub team_id: Option<Uuid>,
    pub personnel_id: Option<Uuid>,
    pub assessor_id: Uuid,

    pub jumlah_item: i32,
    pub jumlah_layak: i32,
    pub jumlah_tidak_layak: i32,
    pub jumlah_berfungsi: i32,
    pub jumlah_tidak_berfungsi: i32,
    pub total_score: f64,

    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assessment_item::Entity")]
    AssessmentItem,
    #[sea_orm(has_many = "super::assessment_personnel::Entity")]
    AssessmentPersonnel,
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,
    #[sea_orm(
        belongs_to = "super::peruntukan::Entity",
        from = "Column::PeruntukanId",
        to = "super::peruntukan::Column::Id"
    )]
    Peruntukan,
}

impl Related<super::assessment_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssessmentItem.def()
    }
}

impl Related<super::assessment_personnel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssessmentPersonnel.def()
    }
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::peruntukan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Peruntukan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
