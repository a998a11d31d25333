use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginationParams,
};
use crate::{
    errors::ApiError,
    services::peruntukan::{CreatePeruntukanRequest, UpdatePeruntukanRequest},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use uuid::Uuid;

async fn create_peruntukan(
    State(state): State<AppState>,
    Json(payload): Json<CreatePeruntukanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let row = state
        .services
        .peruntukan
        .create_peruntukan(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(row))
}

async fn get_peruntukan(
    State(state): State<AppState>,
    Path(peruntukan_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let row = state
        .services
        .peruntukan
        .get_peruntukan(peruntukan_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Peruntukan {} not found", peruntukan_id)))?;

    Ok(success_response(row))
}

async fn list_peruntukan(
    State(state): State<AppState>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .peruntukan
        .list_peruntukan(pagination.page, pagination.per_page)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

async fn update_peruntukan(
    State(state): State<AppState>,
    Path(peruntukan_id): Path<Uuid>,
    Json(payload): Json<UpdatePeruntukanRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let row = state
        .services
        .peruntukan
        .update_peruntukan(peruntukan_id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(row))
}

async fn delete_peruntukan(
    State(state): State<AppState>,
    Path(peruntukan_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .peruntukan
        .delete_peruntukan(peruntukan_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_peruntukan).post(create_peruntukan))
        .route(
            "/:id",
            get(get_peruntukan)
                .put(update_peruntukan)
                .delete(delete_peruntukan),
        )
}
