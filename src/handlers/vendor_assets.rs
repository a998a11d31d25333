use super::common::{map_service_error, success_response, PaginationParams};
use crate::{errors::ApiError, AppState};
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct VendorAssetListQuery {
    pub vendor_id: Option<Uuid>,
    pub owner_id: Option<Uuid>,
}

/// Get a vendor asset by ID
#[utoipa::path(
    get,
    path = "/api/v1/vendor-assets/{id}",
    params(("id" = Uuid, Path, description = "Vendor asset ID")),
    responses(
        (status = 200, description = "Vendor asset found", body = crate::ApiResponse<crate::services::vendor_assets::VendorAssetResponse>),
        (status = 404, description = "Vendor asset not found", body = crate::errors::ErrorResponse)
    ),
    tag = "vendor-assets"
)]
pub async fn get_vendor_asset(
    State(state): State<AppState>,
    Path(vendor_asset_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let asset = state
        .services
        .vendor_assets
        .get_vendor_asset(vendor_asset_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Vendor asset {} not found", vendor_asset_id))
        })?;

    Ok(success_response(asset))
}

/// List vendor assets
#[utoipa::path(
    get,
    path = "/api/v1/vendor-assets",
    params(VendorAssetListQuery, PaginationParams),
    responses(
        (status = 200, description = "Vendor assets listed", body = crate::ApiResponse<crate::services::vendor_assets::VendorAssetListResponse>)
    ),
    tag = "vendor-assets"
)]
pub async fn list_vendor_assets(
    State(state): State<AppState>,
    Query(filter): Query<VendorAssetListQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .vendor_assets
        .list_vendor_assets(
            filter.vendor_id,
            filter.owner_id,
            pagination.page,
            pagination.per_page,
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vendor_assets))
        .route("/:id", get(get_vendor_asset))
}
