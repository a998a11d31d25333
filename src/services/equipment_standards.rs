use crate::{
    db::DbPool,
    entities::equipment_standard::{
        self, Entity as EquipmentStandardEntity, Model as EquipmentStandardModel,
    },
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
pub struct CreateEquipmentStandardRequest {
    pub peruntukan_id: Uuid,
    pub equipment_id: Uuid,
    #[validate(range(min = 0, message = "Required quantity must not be negative"))]
    pub required_qty: i32,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateEquipmentStandardRequest {
    #[validate(range(min = 0, message = "Required quantity must not be negative"))]
    pub required_qty: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EquipmentStandardResponse {
    pub id: Uuid,
    pub peruntukan_id: Uuid,
    pub equipment_id: Uuid,
    pub required_qty: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EquipmentStandardListResponse {
    pub equipment_standards: Vec<EquipmentStandardResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// CRUD over contractual equipment standards.
#[derive(Clone)]
pub struct EquipmentStandardService {
    db_pool: Arc<DbPool>,
}

impl EquipmentStandardService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, request))]
    pub async fn create_equipment_standard(
        &self,
        request: CreateEquipmentStandardRequest,
    ) -> Result<EquipmentStandardResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let model = equipment_standard::ActiveModel {
            id: Set(Uuid::new_v4()),
            peruntukan_id: Set(request.peruntukan_id),
            equipment_id: Set(request.equipment_id),
            required_qty: Set(request.required_qty),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;

        info!(equipment_standard_id = %model.id, "Equipment standard created");
        Ok(standard_to_response(model))
    }

    #[instrument(skip(self), fields(equipment_standard_id = %equipment_standard_id))]
    pub async fn get_equipment_standard(
        &self,
        equipment_standard_id: Uuid,
    ) -> Result<Option<EquipmentStandardResponse>, ServiceError> {
        let db = &*self.db_pool;
        let row = EquipmentStandardEntity::find_by_id(equipment_standard_id)
            .one(db)
            .await?;
        Ok(row.map(standard_to_response))
    }

    #[instrument(skip(self))]
    pub async fn list_equipment_standards(
        &self,
        peruntukan_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<EquipmentStandardListResponse, ServiceError> {
        let db = &*self.db_pool;

        let mut query =
            EquipmentStandardEntity::find().order_by_asc(equipment_standard::Column::CreatedAt);
        if let Some(peruntukan_id) = peruntukan_id {
            query = query.filter(equipment_standard::Column::PeruntukanId.eq(peruntukan_id));
        }

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(EquipmentStandardListResponse {
            equipment_standards: rows.into_iter().map(standard_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, request), fields(equipment_standard_id = %equipment_standard_id))]
    pub async fn update_equipment_standard(
        &self,
        equipment_standard_id: Uuid,
        request: UpdateEquipmentStandardRequest,
    ) -> Result<EquipmentStandardResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let row = EquipmentStandardEntity::find_by_id(equipment_standard_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "Equipment standard {} not found",
                    equipment_standard_id
                ))
            })?;

        let mut active: equipment_standard::ActiveModel = row.into();
        if let Some(required_qty) = request.required_qty {
            active.required_qty = Set(required_qty);
        }

        let model = active.update(db).await?;
        info!(equipment_standard_id = %model.id, "Equipment standard updated");
        Ok(standard_to_response(model))
    }

    #[instrument(skip(self), fields(equipment_standard_id = %equipment_standard_id))]
    pub async fn delete_equipment_standard(
        &self,
        equipment_standard_id: Uuid,
    ) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = EquipmentStandardEntity::delete_by_id(equipment_standard_id)
            .exec(db)
            .await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Equipment standard {} not found",
                equipment_standard_id
            )));
        }

        info!(equipment_standard_id = %equipment_standard_id, "Equipment standard deleted");
        Ok(())
    }
}

fn standard_to_response(model: EquipmentStandardModel) -> EquipmentStandardResponse {
    EquipmentStandardResponse {
        id: model.id,
        peruntukan_id: model.peruntukan_id,
        equipment_id: model.equipment_id,
        required_qty: model.required_qty,
        created_at: model.created_at,
    }
}
