use crate::{
    db::DbPool,
    entities::org_unit::{self, Entity as OrgUnitEntity, Model as OrgUnitModel},
    errors::ServiceError,
};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateOrgUnitRequest {
    #[validate(length(min = 1, message = "Org unit name is required"))]
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateOrgUnitRequest {
    #[validate(length(min = 1, message = "Org unit name must not be empty"))]
    pub name: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrgUnitResponse {
    pub id: Uuid,
    pub name: String,
    pub code: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrgUnitListResponse {
    pub org_units: Vec<OrgUnitResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// CRUD over organizational units.
#[derive(Clone)]
pub struct OrgUnitService {
    db_pool: Arc<DbPool>,
}

impl OrgUnitService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, request))]
    pub async fn create_org_unit(
        &self,
        request: CreateOrgUnitRequest,
    ) -> Result<OrgUnitResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let model = org_unit::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            code: Set(request.code),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;

        info!(org_unit_id = %model.id, "Org unit created");
        Ok(org_unit_to_response(model))
    }

    #[instrument(skip(self), fields(org_unit_id = %org_unit_id))]
    pub async fn get_org_unit(
        &self,
        org_unit_id: Uuid,
    ) -> Result<Option<OrgUnitResponse>, ServiceError> {
        let db = &*self.db_pool;
        let unit = OrgUnitEntity::find_by_id(org_unit_id).one(db).await?;
        Ok(unit.map(org_unit_to_response))
    }

    #[instrument(skip(self))]
    pub async fn list_org_units(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<OrgUnitListResponse, ServiceError> {
        let db = &*self.db_pool;

        let paginator = OrgUnitEntity::find()
            .order_by_asc(org_unit::Column::Name)
            .paginate(db, per_page);
        let total = paginator.num_items().await?;
        let org_units = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(OrgUnitListResponse {
            org_units: org_units.into_iter().map(org_unit_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, request), fields(org_unit_id = %org_unit_id))]
    pub async fn update_org_unit(
        &self,
        org_unit_id: Uuid,
        request: UpdateOrgUnitRequest,
    ) -> Result<OrgUnitResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let unit = OrgUnitEntity::find_by_id(org_unit_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Org unit {} not found", org_unit_id)))?;

        let mut active: org_unit::ActiveModel = unit.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(code) = request.code {
            active.code = Set(Some(code));
        }

        let model = active.update(db).await?;
        info!(org_unit_id = %model.id, "Org unit updated");
        Ok(org_unit_to_response(model))
    }

    #[instrument(skip(self), fields(org_unit_id = %org_unit_id))]
    pub async fn delete_org_unit(&self, org_unit_id: Uuid) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = OrgUnitEntity::delete_by_id(org_unit_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Org unit {} not found",
                org_unit_id
            )));
        }

        info!(org_unit_id = %org_unit_id, "Org unit deleted");
        Ok(())
    }
}

fn org_unit_to_response(model: OrgUnitModel) -> OrgUnitResponse {
    OrgUnitResponse {
        id: model.id,
        name: model.name,
        code: model.code,
        created_at: model.created_at,
    }
}
