use crate::{
    db::DbPool,
    entities::equipment::{self, Entity as EquipmentEntity, Model as EquipmentModel},
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
pub struct CreateEquipmentRequest {
    #[validate(length(min = 1, message = "Equipment name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Equipment category is required"))]
    pub category: String,
    pub satuan: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateEquipmentRequest {
    #[validate(length(min = 1, message = "Equipment name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Equipment category must not be empty"))]
    pub category: Option<String>,
    pub satuan: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentResponse {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub satuan: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentListResponse {
    pub equipment: Vec<EquipmentResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// CRUD over the equipment catalog. The `category` field feeds ownership
/// resolution, so renaming a category is a data-migration concern, not an
/// API one.
#[derive(Clone)]
pub struct EquipmentService {
    db_pool: Arc<DbPool>,
}

impl EquipmentService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, request))]
    pub async fn create_equipment(
        &self,
        request: CreateEquipmentRequest,
    ) -> Result<EquipmentResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let model = equipment::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            category: Set(request.category),
            satuan: Set(request.satuan),
            description: Set(request.description),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;

        info!(equipment_id = %model.id, "Equipment created");
        Ok(equipment_to_response(model))
    }

    #[instrument(skip(self), fields(equipment_id = %equipment_id))]
    pub async fn get_equipment(
        &self,
        equipment_id: Uuid,
    ) -> Result<Option<EquipmentResponse>, ServiceError> {
        let db = &*self.db_pool;
        let item = EquipmentEntity::find_by_id(equipment_id).one(db).await?;
        Ok(item.map(equipment_to_response))
    }

    #[instrument(skip(self))]
    pub async fn list_equipment(
        &self,
        category: Option<String>,
        page: u64,
        per_page: u64,
    ) -> Result<EquipmentListResponse, ServiceError> {
        let db = &*self.db_pool;

        let mut query = EquipmentEntity::find().order_by_asc(equipment::Column::Name);
        if let Some(category) = category {
            query = query.filter(equipment::Column::Category.eq(category));
        }

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let equipment = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(EquipmentListResponse {
            equipment: equipment.into_iter().map(equipment_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, request), fields(equipment_id = %equipment_id))]
    pub async fn update_equipment(
        &self,
        equipment_id: Uuid,
        request: UpdateEquipmentRequest,
    ) -> Result<EquipmentResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let item = EquipmentEntity::find_by_id(equipment_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Equipment {} not found", equipment_id))
            })?;

        let mut active: equipment::ActiveModel = item.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(category) = request.category {
            active.category = Set(category);
        }
        if let Some(satuan) = request.satuan {
            active.satuan = Set(Some(satuan));
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }

        let model = active.update(db).await?;
        info!(equipment_id = %model.id, "Equipment updated");
        Ok(equipment_to_response(model))
    }

    #[instrument(skip(self), fields(equipment_id = %equipment_id))]
    pub async fn delete_equipment(&self, equipment_id: Uuid) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = EquipmentEntity::delete_by_id(equipment_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Equipment {} not found",
                equipment_id
            )));
        }

        info!(equipment_id = %equipment_id, "Equipment deleted");
        Ok(())
    }
}

fn equipment_to_response(model: EquipmentModel) -> EquipmentResponse {
    EquipmentResponse {
        id: model.id,
        name: model.name,
        category: model.category,
        satuan: model.satuan,
        description: model.description,
        created_at: model.created_at,
    }
}
