use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginationParams,
};
use crate::{
    errors::ApiError,
    services::equipment_standards::{
        CreateEquipmentStandardRequest, UpdateEquipmentStandardRequest,
    },
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
pub struct EquipmentStandardListQuery {
    pub peruntukan_id: Option<Uuid>,
}

async fn create_equipment_standard(
    State(state): State<AppState>,
    Json(payload): Json<CreateEquipmentStandardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let standard = state
        .services
        .equipment_standards
        .create_equipment_standard(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(standard))
}

async fn get_equipment_standard(
    State(state): State<AppState>,
    Path(equipment_standard_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let standard = state
        .services
        .equipment_standards
        .get_equipment_standard(equipment_standard_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Equipment standard {} not found",
                equipment_standard_id
            ))
        })?;

    Ok(success_response(standard))
}

async fn list_equipment_standards(
    State(state): State<AppState>,
    Query(filter): Query<EquipmentStandardListQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .equipment_standards
        .list_equipment_standards(filter.peruntukan_id, pagination.page, pagination.per_page)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

async fn update_equipment_standard(
    State(state): State<AppState>,
    Path(equipment_standard_id): Path<Uuid>,
    Json(payload): Json<UpdateEquipmentStandardRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let standard = state
        .services
        .equipment_standards
        .update_equipment_standard(equipment_standard_id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(standard))
}

async fn delete_equipment_standard(
    State(state): State<AppState>,
    Path(equipment_standard_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .equipment_standards
        .delete_equipment_standard(equipment_standard_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_equipment_standards).post(create_equipment_standard),
        )
        .route(
            "/:id",
            get(get_equipment_standard)
                .put(update_equipment_standard)
                .delete(delete_equipment_standard),
        )
}
