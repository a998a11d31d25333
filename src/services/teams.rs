use crate::{
    db::DbPool,
    entities::team::{self, Entity as TeamEntity, Model as TeamModel},
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
pub struct CreateTeamRequest {
    #[validate(length(min = 1, message = "Team name is required"))]
    pub name: String,
    pub vendor_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, message = "Team name must not be empty"))]
    pub name: Option<String>,
    pub vendor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub vendor_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TeamListResponse {
    pub teams: Vec<TeamResponse>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// CRUD over vendor teams.
#[derive(Clone)]
pub struct TeamService {
    db_pool: Arc<DbPool>,
}

impl TeamService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, request))]
    pub async fn create_team(&self, request: CreateTeamRequest) -> Result<TeamResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let model = team::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(request.name),
            vendor_id: Set(request.vendor_id),
            created_at: Set(Utc::now()),
        }
        .insert(db)
        .await?;

        info!(team_id = %model.id, "Team created");
        Ok(team_to_response(model))
    }

    #[instrument(skip(self), fields(team_id = %team_id))]
    pub async fn get_team(&self, team_id: Uuid) -> Result<Option<TeamResponse>, ServiceError> {
        let db = &*self.db_pool;
        let team = TeamEntity::find_by_id(team_id).one(db).await?;
        Ok(team.map(team_to_response))
    }

    #[instrument(skip(self))]
    pub async fn list_teams(
        &self,
        vendor_id: Option<Uuid>,
        page: u64,
        per_page: u64,
    ) -> Result<TeamListResponse, ServiceError> {
        let db = &*self.db_pool;

        let mut query = TeamEntity::find().order_by_asc(team::Column::Name);
        if let Some(vendor_id) = vendor_id {
            query = query.filter(team::Column::VendorId.eq(vendor_id));
        }

        let paginator = query.paginate(db, per_page);
        let total = paginator.num_items().await?;
        let teams = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(TeamListResponse {
            teams: teams.into_iter().map(team_to_response).collect(),
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, request), fields(team_id = %team_id))]
    pub async fn update_team(
        &self,
        team_id: Uuid,
        request: UpdateTeamRequest,
    ) -> Result<TeamResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;

        let db = &*self.db_pool;
        let team = TeamEntity::find_by_id(team_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Team {} not found", team_id)))?;

        let mut active: team::ActiveModel = team.into();
        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(vendor_id) = request.vendor_id {
            active.vendor_id = Set(Some(vendor_id));
        }

        let model = active.update(db).await?;
        info!(team_id = %model.id, "Team updated");
        Ok(team_to_response(model))
    }

    #[instrument(skip(self), fields(team_id = %team_id))]
    pub async fn delete_team(&self, team_id: Uuid) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = TeamEntity::delete_by_id(team_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(format!("Team {} not found", team_id)));
        }

        info!(team_id = %team_id, "Team deleted");
        Ok(())
    }
}

fn team_to_response(model: TeamModel) -> TeamResponse {
    TeamResponse {
        id: model.id,
        name: model.name,
        vendor_id: model.vendor_id,
        created_at: model.created_at,
    }
}
