use crate::{
    db::DbPool,
    entities::vendor::{self, Entity as VendorEntity, Model as VendorModel},
    errors::ServiceError,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateVendorRequest {
    #[validate(length(min = 1, message = "Vendor name is required"))]
    pub name: String,
    pub org_unit_id: Option<Uuid>,
    pub alamat: Option<String>,
    pub phone: Option<String>,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateVendorRequest {
    #[validate(length(min = 1, message = "Vendor name must not be empty"))]
    pub name: Option<String>,
    pub org_unit_id: Option<Uuid>,
    pub alamat: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VendorResponse {
    pub id: Uuid,
    pub name: String,
    pub org_unit_id: Option<Uuid>,
    pub alamat: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VendorListResponse {
    pub vendors: Vec<VendorResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// CRUD over the vendor registry.
#[derive(Clone)]
pub struct VendorService {
    db_pool: Arc<DbPool>,
}

impl VendorService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Creates a new vendor
    #[instrument(skip(self, request))]
    pub async fn create_vendor(
        &self,
        request: CreateVendorRequest,
    ) -> Result<VendorResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let model = vendor::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            org_unit_id: Set(request.org_unit_id),
            alamat: Set(request.alamat),
            phone: Set(request.phone),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;

        info!(vendor_id = %model.id, "Vendor created");
        Ok(vendor_to_response(model))
    }

    /// Retrieves a vendor by ID
    #[instrument(skip(self), fields(vendor_id = %vendor_id))]
    pub async fn get_vendor(&self, vendor_id: Uuid) -> Result<Option<VendorResponse>, ServiceError> {
        let db = &*self.db_pool;
        let vendor = VendorEntity::find_by_id(vendor_id).one(db).await?;
        Ok(vendor.map(vendor_to_response))
    }

    /// Lists vendors with optional org-unit filter and pagination
    #[instrument(skip(self))]
    pub async fn list_vendors(
        &self,
        org_unit_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<VendorListResponse, ServiceError> {
        let db = &*self.db_pool;

        let mut query = VendorEntity::find().order_by_asc(vendor::Column::Name);
        if let Some(org_unit_id) = org_unit_id {
            query = query.filter(vendor::Column::OrgUnitId.eq(org_unit_id));
        }

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let vendors = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(VendorListResponse {
            vendors: vendors.into_iter().map(vendor_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    /// Updates a vendor
    #[instrument(skip(self, request), fields(vendor_id = %vendor_id))]
    pub async fn update_vendor(
        &self,
        vendor_id: Uuid,
        request: UpdateVendorRequest,
    ) -> Result<VendorResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let vendor = VendorEntity::find_by_id(vendor_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Vendor {} not found", vendor_id)))?;

        let mut active: vendor::ActiveModel = vendor.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(org_unit_id) = request.org_unit_id {
            active.org_unit_id = Set(Some(org_unit_id));
        }
        if let Some(alamat) = request.alamat {
            active.alamat = Set(Some(alamat));
        }
        if let Some(phone) = request.phone {
            active.phone = Set(Some(phone));
        }

        let model = active.update(db).await?;
        info!(vendor_id = %model.id, "Vendor updated");
        Ok(vendor_to_response(model))
    }

    /// Deletes a vendor
    #[instrument(skip(self), fields(vendor_id = %vendor_id))]
    pub async fn delete_vendor(&self, vendor_id: Uuid) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = VendorEntity::delete_by_id(vendor_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Vendor {} not found",
                vendor_id
            )));
        }

        info!(vendor_id = %vendor_id, "Vendor deleted");
        Ok(())
    }
}

fn vendor_to_response(model: VendorModel) -> VendorResponse {
    VendorResponse {
        id: model.id,
        name: model.name,
        org_unit_id: model.org_unit_id,
        alamat: model.alamat,
        phone: model.phone,
        created_at: model.created_at,
    }
}
