use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginationParams,
};
use crate::{
    errors::ApiError,
    services::personnel::{CreatePersonnelRequest, UpdatePersonnelRequest},
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
pub struct PersonnelListQuery {
    pub vendor_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

async fn create_personnel(
    State(state): State<AppState>,
    Json(payload): Json<CreatePersonnelRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let person = state
        .services
        .personnel
        .create_personnel(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(person))
}

async fn get_personnel(
    State(state): State<AppState>,
    Path(personnel_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let person = state
        .services
        .personnel
        .get_personnel(personnel_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Personnel {} not found", personnel_id)))?;

    Ok(success_response(person))
}

async fn list_personnel(
    State(state): State<AppState>,
    Query(filter): Query<PersonnelListQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .personnel
        .list_personnel(
            filter.vendor_id,
            filter.team_id,
            pagination.page,
            pagination.per_page,
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

async fn update_personnel(
    State(state): State<AppState>,
    Path(personnel_id): Path<Uuid>,
    Json(payload): Json<UpdatePersonnelRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let person = state
        .services
        .personnel
        .update_personnel(personnel_id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(person))
}

async fn delete_personnel(
    State(state): State<AppState>,
    Path(personnel_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .personnel
        .delete_personnel(personnel_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_personnel).post(create_personnel))
        .route(
            "/:id",
            get(get_personnel)
                .put(update_personnel)
                .delete(delete_personnel),
        )
}
