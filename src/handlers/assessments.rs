use super::common::{
    created_response, map_service_error, success_response, validate_input, PaginationParams,
};
use crate::{
    errors::ApiError,
    services::submissions::SubmitAssessmentRequest,
    AppState,
};
use axum::{
    extract::{Json, Path, Query, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::info;
use utoipa::IntoParams;
use uuid::Uuid;

#[derive(Debug, Deserialize, IntoParams)]
pub struct AssessmentListQuery {
    pub vendor_id: Option<Uuid>,
    pub status: Option<String>,
}

/// Submit a completed assessment.
///
/// Runs the full write sequence: validation, score derivation, audit
/// record, personnel links, ownership resolution and vendor-asset
/// projection.
#[utoipa::path(
    post,
    path = "/api/v1/assessments",
    request_body = SubmitAssessmentRequest,
    responses(
        (status = 201, description = "Assessment submitted", body = crate::ApiResponse<crate::services::submissions::SubmissionOutcome>),
        (status = 400, description = "Invalid submission", body = crate::errors::ErrorResponse)
    ),
    tag = "assessments"
)]
pub async fn submit_assessment(
    State(state): State<AppState>,
    Json(payload): Json<SubmitAssessmentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validate_input(&payload)?;

    let outcome = state
        .services
        .submissions
        .submit(payload)
        .await
        .map_err(map_service_error)?;

    info!(assessment_id = %outcome.assessment.id, "Assessment submission accepted");
    Ok(created_response(outcome))
}

/// Get an assessment by ID
#[utoipa::path(
    get,
    path = "/api/v1/assessments/{id}",
    params(("id" = Uuid, Path, description = "Assessment ID")),
    responses(
        (status = 200, description = "Assessment found", body = crate::ApiResponse<crate::services::assessments::AssessmentResponse>),
        (status = 404, description = "Assessment not found", body = crate::errors::ErrorResponse)
    ),
    tag = "assessments"
)]
pub async fn get_assessment(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let assessment = state
        .services
        .assessments
        .get_assessment(assessment_id)
        .await
        .map_err(map_service_error)?
        .ok_or_else(|| ApiError::NotFound(format!("Assessment {} not found", assessment_id)))?;

    Ok(success_response(assessment))
}

/// List assessments
#[utoipa::path(
    get,
    path = "/api/v1/assessments",
    params(AssessmentListQuery, PaginationParams),
    responses(
        (status = 200, description = "Assessments listed", body = crate::ApiResponse<crate::services::assessments::AssessmentListResponse>)
    ),
    tag = "assessments"
)]
pub async fn list_assessments(
    State(state): State<AppState>,
    Query(filter): Query<AssessmentListQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let list = state
        .services
        .assessments
        .list_assessments(
            filter.vendor_id,
            filter.status,
            pagination.page,
            pagination.per_page,
        )
        .await
        .map_err(map_service_error)?;

    Ok(success_response(list))
}

/// Get the line items of an assessment
#[utoipa::path(
    get,
    path = "/api/v1/assessments/{id}/items",
    params(("id" = Uuid, Path, description = "Assessment ID")),
    responses(
        (status = 200, description = "Items listed", body = crate::ApiResponse<Vec<crate::services::assessments::AssessmentItemResponse>>),
        (status = 404, description = "Assessment not found", body = crate::errors::ErrorResponse)
    ),
    tag = "assessments"
)]
pub async fn get_assessment_items(
    State(state): State<AppState>,
    Path(assessment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let items = state
        .services
        .assessments
        .get_assessment_items(assessment_id)
        .await
        .map_err(map_service_error)?;

    Ok(success_response(items))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_assessment).get(list_assessments))
        .route("/:id", get(get_assessment))
        .route("/:id/items", get(get_assessment_items))
}
