use crate::{
    db::DbPool,
    entities::vendor_asset::{self, Entity as VendorAssetEntity, Model as VendorAssetModel},
    errors::ServiceError,
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::instrument;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VendorAssetResponse {
    pub id: Uuid,
    pub vendor_id: Uuid,
    pub peruntukan_id: Uuid,
    pub team_id: Option<Uuid>,
    pub personnel_id: Option<Uuid>,
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

#[derive(Debug, Serialize, ToSchema)]
pub struct VendorAssetListResponse {
    pub vendor_assets: Vec<VendorAssetResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Read access to the derived current-state ledger. Rows are written only by
/// the submission workflow's upsert pass.
#[derive(Clone)]
pub struct VendorAssetService {
    db_pool: Arc<DbPool>,
}

impl VendorAssetService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Retrieves a vendor asset by ID
    #[instrument(skip(self), fields(vendor_asset_id = %vendor_asset_id))]
    pub async fn get_vendor_asset(
        &self,
        vendor_asset_id: Uuid,
    ) -> Result<Option<VendorAssetResponse>, ServiceError> {
        let db = &*self.db_pool;

        let asset = VendorAssetEntity::find_by_id(vendor_asset_id).one(db).await?;
        Ok(asset.map(vendor_asset_to_response))
    }

    /// Lists vendor assets with optional vendor/owner filters and pagination
    #[instrument(skip(self))]
    pub async fn list_vendor_assets(
        &self,
        vendor_id: Option<Uuid>,
        owner_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<VendorAssetListResponse, ServiceError> {
        let db = &*self.db_pool;

        let mut query =
            VendorAssetEntity::find().order_by_desc(vendor_asset::Column::LastAssessedAt);
        if let Some(vendor_id) = vendor_id {
            query = query.filter(vendor_asset::Column::VendorId.eq(vendor_id));
        }
        if let Some(owner_id) = owner_id {
            query = query.filter(vendor_asset::Column::OwnerId.eq(owner_id));
        }

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let vendor_assets = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(VendorAssetListResponse {
            vendor_assets: vendor_assets
                .into_iter()
                .map(vendor_asset_to_response)
                .collect(),
            total,
            page,
            per_page,
        })
    }
}

fn vendor_asset_to_response(model: VendorAssetModel) -> VendorAssetResponse {
    VendorAssetResponse {
        id: model.id,
        vendor_id: model.vendor_id,
        peruntukan_id: model.peruntukan_id,
        team_id: model.team_id,
        personnel_id: model.personnel_id,
        owner_id: model.owner_id,
        equipment_id: model.equipment_id,
        jumlah_terakhir: model.jumlah_terakhir,
        tanggal_distribusi: model.tanggal_distribusi,
        last_assessment_id: model.last_assessment_id,
        last_assessed_at: model.last_assessed_at,
        kesesuaian_kontrak: model.kesesuaian_kontrak,
        kondisi_fisik: model.kondisi_fisik,
        kondisi_fungsi: model.kondisi_fungsi,
        score: model.score,
        status_kesesuaian: model.status_kesesuaian,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
