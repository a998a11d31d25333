use crate::{
    db::DbPool,
    entities::peruntukan::{self, Entity as PeruntukanEntity, Model as PeruntukanModel},
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
pub struct CreatePeruntukanRequest {
    #[validate(length(min = 1, message = "Peruntukan name is required"))]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdatePeruntukanRequest {
    #[validate(length(min = 1, message = "Peruntukan name must not be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PeruntukanResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PeruntukanListResponse {
    pub peruntukan: Vec<PeruntukanResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// CRUD over peruntukan (audit purposes).
#[derive(Clone)]
pub struct PeruntukanService {
    db_pool: Arc<DbPool>,
}

impl PeruntukanService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, request))]
    pub async fn create_peruntukan(
        &self,
        request: CreatePeruntukanRequest,
    ) -> Result<PeruntukanResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let model = peruntukan::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            description: Set(request.description),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;

        info!(peruntukan_id = %model.id, "Peruntukan created");
        Ok(peruntukan_to_response(model))
    }

    #[instrument(skip(self), fields(peruntukan_id = %peruntukan_id))]
    pub async fn get_peruntukan(
        &self,
        peruntukan_id: Uuid,
    ) -> Result<Option<PeruntukanResponse>, ServiceError> {
        let db = &*self.db_pool;
        let row = PeruntukanEntity::find_by_id(peruntukan_id).one(db).await?;
        Ok(row.map(peruntukan_to_response))
    }

    #[instrument(skip(self))]
    pub async fn list_peruntukan(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PeruntukanListResponse, ServiceError> {
        let db = &*self.db_pool;

        let paginator = PeruntukanEntity::find()
            .order_by_asc(peruntukan::Column::Name)
            .paginate(db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(PeruntukanListResponse {
            peruntukan: rows.into_iter().map(peruntukan_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, request), fields(peruntukan_id = %peruntukan_id))]
    pub async fn update_peruntukan(
        &self,
        peruntukan_id: Uuid,
        request: UpdatePeruntukanRequest,
    ) -> Result<PeruntukanResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let row = PeruntukanEntity::find_by_id(peruntukan_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Peruntukan {} not found", peruntukan_id))
            })?;

        let mut active: peruntukan::ActiveModel = row.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }

        let model = active.update(db).await?;
        info!(peruntukan_id = %model.id, "Peruntukan updated");
        Ok(peruntukan_to_response(model))
    }

    #[instrument(skip(self), fields(peruntukan_id = %peruntukan_id))]
    pub async fn delete_peruntukan(&self, peruntukan_id: Uuid) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = PeruntukanEntity::delete_by_id(peruntukan_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Peruntukan {} not found",
                peruntukan_id
            )));
        }

        info!(peruntukan_id = %peruntukan_id, "Peruntukan deleted");
        Ok(())
    }
}

fn peruntukan_to_response(model: PeruntukanModel) -> PeruntukanResponse {
    PeruntukanResponse {
        id: model.id,
        name: model.name,
        description: model.description,
        created_at: model.created_at,
    }
}
