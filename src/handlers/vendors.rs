use super::common::{
    created_response, map_service_error, no_content_response, success_response, validate_input,
    PaginationParams,
};
use crate::{
    errors::ApiError,
    services::vendors::{CreateVendorRequest, UpdateVendorRequest},
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct VendorListQuery {
    pub org_unit_id: Option<Uuid>,
}

/// Create a new vendor
#[utoipa::path(
    post,
    path = "/api/v1/vendors",
    request_body = CreateVendorRequest,
    responses(
        (status = 201, description = "Vendor created", body = crate::ApiResponse<crate::services::vendors::VendorResponse>),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse)
    ),
    tag = "vendors"
)]
pub async fn create_vendor(
    State(state): State<AppState>,
    Json(payload): Json<CreateVendorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let vendor = state
        .services
        .vendors
        .create_vendor(payload)
        .await
        .map_err(map_service_error)?;

    Ok(created_response(vendor))
}

/// Get a vendor by ID
#[utoipa::path(
    get,
    path = "/api/v1/vendors/{id}",
    params(("id" = Uuid, Path, description = "Vendor ID")),
    responses(
        (status = 200, description = "Vendor found", body = crate::ApiResponse<crate::services::vendors::VendorResponse>),
        (status = 404, description = "Vendor not found", body = crate::errors::ErrorResponse)
    ),
    tag = "vendors"
)]
pub async fn get_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let vendor = state
        .services
        .vendors
        .get_vendor(vendor_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Vendor {} not found", vendor_id)))?;

    Ok(success_response(vendor))
}

/// List vendors
#[utoipa::path(
    get,
    path = "/api/v1/vendors",
    params(VendorListQuery, PaginationParams),
    responses(
        (status = 200, description = "Vendors listed", body = crate::ApiResponse<crate::services::vendors::VendorListResponse>)
    ),
    tag = "vendors"
)]
pub async fn list_vendors(
    State(state): State<AppState>,
    Query(filter): Query<VendorListQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .vendors
        .list_vendors(filter.org_unit_id, pagination.page, pagination.per_page)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

/// Update a vendor
#[utoipa::path(
    put,
    path = "/api/v1/vendors/{id}",
    params(("id" = Uuid, Path, description = "Vendor ID")),
    request_body = UpdateVendorRequest,
    responses(
        (status = 200, description = "Vendor updated", body = crate::ApiResponse<crate::services::vendors::VendorResponse>),
        (status = 404, description = "Vendor not found", body = crate::errors::ErrorResponse)
    ),
    tag = "vendors"
)]
pub async fn update_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
    Json(payload): Json<UpdateVendorRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let vendor = state
        .services
        .vendors
        .update_vendor(vendor_id, payload)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(vendor))
}

/// Delete a vendor
#[utoipa::path(
    delete,
    path = "/api/v1/vendors/{id}",
    params(("id" = Uuid, Path, description = "Vendor ID")),
    responses(
        (status = 204, description = "Vendor deleted"),
        (status = 404, description = "Vendor not found", body = crate::errors::ErrorResponse)
    ),
    tag = "vendors"
)]
pub async fn delete_vendor(
    State(state): State<AppState>,
    Path(vendor_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .services
        .vendors
        .delete_vendor(vendor_id)
        .await
        .map_err(map_service_error)?;

    Ok(no_content_response())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vendors).post(create_vendor))
        .route(
            "/:id",
            get(get_vendor).put(update_vendor).delete(delete_vendor),
        )
}
