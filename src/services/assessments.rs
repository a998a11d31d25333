use crate::{
    db::DbPool,
    entities::assessment::{self, Entity as AssessmentEntity, Model as AssessmentModel},
    entities::assessment_item::{
        self, Entity as AssessmentItemEntity, Model as AssessmentItemModel,
    },
    errors::ServiceError,
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle status of an assessment. The submission workflow always
/// creates `Submitted` records; the remaining states exist for review
/// tooling that operates on the audit log afterwards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    strum::Display,
    strum::EnumString,
)]
pub enum AssessmentStatus {
    Draft,
    Submitted,
    Revised,
    Approved,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessmentResponse {
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

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessmentItemResponse {
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

#[derive(Debug, Serialize, ToSchema)]
pub struct AssessmentListResponse {
    pub assessments: Vec<AssessmentResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Read access to the assessment audit log. Assessments are immutable once
/// created by the submission workflow, so this service exposes no writes.
#[derive(Clone)]
pub struct AssessmentService {
    db_pool: Arc<DbPool>,
}

impl AssessmentService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Retrieves an assessment by ID
    #[instrument(skip(self), fields(assessment_id = %assessment_id))]
    pub async fn get_assessment(
        &self,
        assessment_id: Uuid,
    ) -> Result<Option<AssessmentResponse>, ServiceError> {
        let db = &*self.db_pool;

        let assessment = AssessmentEntity::find_by_id(assessment_id).one(db).await?;
        Ok(assessment.map(assessment_to_response))
    }

    /// Lists assessments with optional vendor/status filters and pagination
    #[instrument(skip(self))]
    pub async fn list_assessments(
        &self,
        vendor_id: Option<Uuid>,
        status: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<AssessmentListResponse, ServiceError> {
        let db = &*self.db_pool;

        let mut query = AssessmentEntity::find().order_by_desc(assessment::Column::CreatedAt);
        if let Some(vendor_id) = vendor_id {
            query = query.filter(assessment::Column::VendorId.eq(vendor_id));
        }
        if let Some(status) = status {
            query = query.filter(assessment::Column::Status.eq(status));
        }

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let assessments = paginator.fetch_page(page.saturating_sub(1)).await?;

        info!(
            total = total,
            page = page,
            per_page = per_page,
            "Assessments listed"
        );

        Ok(AssessmentListResponse {
            assessments: assessments.into_iter().map(assessment_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    /// Retrieves the line items of an assessment
    #[instrument(skip(self), fields(assessment_id = %assessment_id))]
    pub async fn get_assessment_items(
        &self,
        assessment_id: Uuid,
    ) -> Result<Vec<AssessmentItemResponse>, ServiceError> {
        let db = &*self.db_pool;

        let header = AssessmentEntity::find_by_id(assessment_id).one(db).await?;
        if header.is_none() {
            return Err(ServiceError::NotFound(format!(
                "Assessment {} not found",
                assessment_id
            )));
        }

        let items = AssessmentItemEntity::find()
            .filter(assessment_item::Column::AssessmentId.eq(assessment_id))
            .order_by_asc(assessment_item::Column::CreatedAt)
            .all(db)
            .await?;

        Ok(items.into_iter().map(item_to_response).collect())
    }
}

pub(crate) fn assessment_to_response(model: AssessmentModel) -> AssessmentResponse {
    AssessmentResponse {
        id: model.id,
        tanggal_penilaian: model.tanggal_penilaian,
        shift: model.shift,
        vendor_id: model.vendor_id,
        peruntukan_id: model.peruntukan_id,
        team_id: model.team_id,
        personnel_id: model.personnel_id,
        assessor_id: model.assessor_id,
        jumlah_item: model.jumlah_item,
        jumlah_layak: model.jumlah_layak,
        jumlah_tidak_layak: model.jumlah_tidak_layak,
        jumlah_berfungsi: model.jumlah_berfungsi,
        jumlah_tidak_berfungsi: model.jumlah_tidak_berfungsi,
        total_score: model.total_score,
        status: model.status,
        created_at: model.created_at,
    }
}

pub(crate) fn item_to_response(model: AssessmentItemModel) -> AssessmentItemResponse {
    AssessmentItemResponse {
        id: model.id,
        assessment_id: model.assessment_id,
        equipment_id: model.equipment_id,
        required_qty: model.required_qty,
        actual_qty: model.actual_qty,
        layak: model.layak,
        tidak_layak: model.tidak_layak,
        berfungsi: model.berfungsi,
        tidak_berfungsi: model.tidak_berfungsi,
        kesesuaian_kontrak: model.kesesuaian_kontrak,
        kondisi_fisik: model.kondisi_fisik,
        kondisi_fungsi: model.kondisi_fungsi,
        score_item: model.score_item,
        status_kesesuaian: model.status_kesesuaian,
        created_at: model.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        use std::str::FromStr;
        for status in [
            AssessmentStatus::Draft,
            AssessmentStatus::Submitted,
            AssessmentStatus::Revised,
            AssessmentStatus::Approved,
        ] {
            let text = status.to_string();
            assert_eq!(AssessmentStatus::from_str(&text).unwrap(), status);
        }
    }

    #[test]
    fn model_to_response_preserves_aggregates() {
        let now = Utc::now();
        let model = AssessmentModel {
            id: Uuid::new_v4(),
            tanggal_penilaian: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            shift: "Pagi".to_string(),
            vendor_id: Uuid::new_v4(),
            peruntukan_id: Uuid::new_v4(),
            team_id: None,
            personnel_id: Some(Uuid::new_v4()),
            assessor_id: Uuid::new_v4(),
            jumlah_item: 2,
            jumlah_layak: 5,
            jumlah_tidak_layak: 1,
            jumlah_berfungsi: 6,
            jumlah_tidak_berfungsi: 0,
            total_score: 1.0,
            status: AssessmentStatus::Submitted.to_string(),
            created_at: now,
        };

        let response = assessment_to_response(model.clone());
        assert_eq!(response.id, model.id);
        assert_eq!(response.jumlah_item, 2);
        assert_eq!(response.jumlah_tidak_layak, 1);
        assert_eq!(response.total_score, 1.0);
        assert_eq!(response.status, "Submitted");
    }
}
