use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginationParams,
};
use crate::{
    errors::ApiError,
    services::equipment::{CreateEquipmentRequest, UpdateEquipmentRequest},
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
pub struct EquipmentListQuery {
    pub category: Option<String>,
}

async fn create_equipment(
    State(state): State<AppState>,
    Json(payload): Json<CreateEquipmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let item = state
        .services
        .equipment
        .create_equipment(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(item))
}

async fn get_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let item = state
        .services
        .equipment
        .get_equipment(equipment_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Equipment {} not found", equipment_id)))?;

    Ok(success_response(item))
}

async fn list_equipment(
    State(state): State<AppState>,
    Query(filter): Query<EquipmentListQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .equipment
        .list_equipment(filter.category, pagination.page, pagination.per_page)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

async fn update_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<Uuid>,
    Json(payload): Json<UpdateEquipmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let item = state
        .services
        .equipment
        .update_equipment(equipment_id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(item))
}

async fn delete_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .equipment
        .delete_equipment(equipment_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_equipment).post(create_equipment))
        .route(
            "/:id",
            get(get_equipment)
                .put(update_equipment)
                .delete(delete_equipment),
        )
}
