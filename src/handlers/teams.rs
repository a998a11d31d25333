use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginationParams,
};
use crate::{
    errors::ApiError,
    services::teams::{CreateTeamRequest, UpdateTeamRequest},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct TeamListQuery {
    pub vendor_id: Option<Uuid>,
}

async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let team = state
        .services
        .teams
        .create_team(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(team))
}

async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let team = state
        .services
        .teams
        .get_team(team_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Team {} not found", team_id)))?;

    Ok(success_response(team))
}

async fn list_teams(
    State(state): State<AppState>,
    Query(filter): Query<TeamListQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .teams
        .list_teams(filter.vendor_id, pagination.page, pagination.per_page)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
    Json(payload): Json<UpdateTeamRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let team = state
        .services
        .teams
        .update_team(team_id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(team))
}

async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .teams
        .delete_team(team_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/:id", get(get_team).put(update_team).delete(delete_team))
}
