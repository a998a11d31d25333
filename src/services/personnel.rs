use crate::{
    db::DbPool,
    entities::personnel::{self, Entity as PersonnelEntity, Model as PersonnelModel},
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
pub struct CreatePersonnelRequest {
    #[validate(length(min = 1, message = "Personnel name is required"))]
    pub name: String,
    pub badge_number: Option<String>,
    pub jabatan: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdatePersonnelRequest {
    #[validate(length(min = 1, message = "Personnel name must not be empty"))]
    pub name: Option<String>,
    pub badge_number: Option<String>,
    pub jabatan: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PersonnelResponse {
    pub id: Uuid,
    pub name: String,
    pub badge_number: Option<String>,
    pub jabatan: Option<String>,
    pub vendor_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonnelListResponse {
    pub personnel: Vec<PersonnelResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// CRUD over vendor personnel.
#[derive(Clone)]
pub struct PersonnelService {
    db_pool: Arc<DbPool>,
}

impl PersonnelService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, request))]
    pub async fn create_personnel(
        &self,
        request: CreatePersonnelRequest,
    ) -> Result<PersonnelResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let model = personnel::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            badge_number: Set(request.badge_number),
            jabatan: Set(request.jabatan),
            vendor_id: Set(request.vendor_id),
            team_id: Set(request.team_id),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;

        info!(personnel_id = %model.id, "Personnel created");
        Ok(personnel_to_response(model))
    }

    #[instrument(skip(self), fields(personnel_id = %personnel_id))]
    pub async fn get_personnel(
        &self,
        personnel_id: Uuid,
    ) -> Result<Option<PersonnelResponse>, ServiceError> {
        let db = &*self.db_pool;
        let person = PersonnelEntity::find_by_id(personnel_id).one(db).await?;
        Ok(person.map(personnel_to_response))
    }

    #[instrument(skip(self))]
    pub async fn list_personnel(
        &self,
        vendor_id: Option<Uuid>,
        team_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<PersonnelListResponse, ServiceError> {
        let db = &*self.db_pool;

        let mut query = PersonnelEntity::find().order_by_asc(personnel::Column::Name);
        if let Some(vendor_id) = vendor_id {
            query = query.filter(personnel::Column::VendorId.eq(vendor_id));
        }
        if let Some(team_id) = team_id {
            query = query.filter(personnel::Column::TeamId.eq(team_id));
        }

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let personnel = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(PersonnelListResponse {
            personnel: personnel.into_iter().map(personnel_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, request), fields(personnel_id = %personnel_id))]
    pub async fn update_personnel(
        &self,
        personnel_id: Uuid,
        request: UpdatePersonnelRequest,
    ) -> Result<PersonnelResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let person = PersonnelEntity::find_by_id(personnel_id)
            .one(db)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Personnel {} not found", personnel_id))
            })?;

        let mut active: personnel::ActiveModel = person.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(badge_number) = request.badge_number {
            active.badge_number = Set(Some(badge_number));
        }
        if let Some(jabatan) = request.jabatan {
            active.jabatan = Set(Some(jabatan));
        }
        if let Some(vendor_id) = request.vendor_id {
            active.vendor_id = Set(Some(vendor_id));
        }
        if let Some(team_id) = request.team_id {
            active.team_id = Set(Some(team_id));
        }

        let model = active.update(db).await?;
        info!(personnel_id = %model.id, "Personnel updated");
        Ok(personnel_to_response(model))
    }

    #[instrument(skip(self), fields(personnel_id = %personnel_id))]
    pub async fn delete_personnel(&self, personnel_id: Uuid) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = PersonnelEntity::delete_by_id(personnel_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!(
                "Personnel {} not found",
                personnel_id
            )));
        }

        info!(personnel_id = %personnel_id, "Personnel deleted");
        Ok(())
    }
}

fn personnel_to_response(model: PersonnelModel) -> PersonnelResponse {
    PersonnelResponse {
        id: model.id,
        name: model.name,
        badge_number: model.badge_number,
        jabatan: model.jabatan,
        vendor_id: model.vendor_id,
        team_id: model.team_id,
        created_at: model.created_at,
    }
}
