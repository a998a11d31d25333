use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginationParams,
};
use crate::{
    errors::ApiError,
    services::org_units::{CreateOrgUnitRequest, UpdateOrgUnitRequest},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use uuid::Uuid;

async fn create_org_unit(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrgUnitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let unit = state
        .services
        .org_units
        .create_org_unit(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(unit))
}

async fn get_org_unit(
    State(state): State<AppState>,
    Path(org_unit_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let unit = state
        .services
        .org_units
        .get_org_unit(org_unit_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Org unit {} not found", org_unit_id)))?;

    Ok(success_response(unit))
}

async fn list_org_units(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .org_units
        .list_org_units(pagination.page, pagination.per_page)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

async fn update_org_unit(
    State(state): State<AppState>,
    Path(org_unit_id): Path<Uuid>,
    Json(payload): Json<UpdateOrgUnitRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let unit = state
        .services
        .org_units
        .update_org_unit(org_unit_id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(unit))
}

async fn delete_org_unit(
    State(state): State<AppState>,
    Path(org_unit_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .org_units
        .delete_org_unit(org_unit_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_org_units).post(create_org_unit))
        .route(
            "/:id",
            get(get_org_unit)
                .put(update_org_unit)
                .delete(delete_org_unit),
        )
}
