//! OpenAPI documentation for the compliance-assessment API.

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::errors::ErrorResponse;
use crate::services::assessments::{
    AssessmentItemResponse, AssessmentListResponse, AssessmentResponse,
};
use crate::services::submissions::{
    SubmissionOutcome, SubmitAssessmentRequest, SubmitItemRequest, VendorAssetAction,
    VendorAssetChange,
};
use crate::services::vendor_assets::{VendorAssetListResponse, VendorAssetResponse};
use crate::services::vendors::{
    CreateVendorRequest, UpdateVendorRequest, VendorListResponse, VendorResponse,
};
use crate::{ApiResponse, ResponseMeta};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "K3 Audit API",
        description = "Safety-equipment compliance assessments: submission workflow, \
                       audit log, derived vendor assets and reference data.",
        version = env!("CARGO_PKG_VERSION"),
    ),
    paths(
        crate::handlers::assessments::submit_assessment,
        crate::handlers::assessments::get_assessment,
        crate::handlers::assessments::list_assessments,
        crate::handlers::assessments::get_assessment_items,
        crate::handlers::vendor_assets::get_vendor_asset,
        crate::handlers::vendor_assets::list_vendor_assets,
        crate::handlers::vendors::create_vendor,
        crate::handlers::vendors::get_vendor,
        crate::handlers::vendors::list_vendors,
        crate::handlers::vendors::update_vendor,
        crate::handlers::vendors::delete_vendor,
    ),
    components(schemas(
        ErrorResponse,
        ResponseMeta,
        ApiResponse<SubmissionOutcome>,
        ApiResponse<AssessmentResponse>,
        ApiResponse<AssessmentListResponse>,
        ApiResponse<Vec<AssessmentItemResponse>>,
        ApiResponse<VendorAssetResponse>,
        ApiResponse<VendorAssetListResponse>,
        ApiResponse<VendorResponse>,
        ApiResponse<VendorListResponse>,
        SubmitAssessmentRequest,
        SubmitItemRequest,
        SubmissionOutcome,
        VendorAssetAction,
        VendorAssetChange,
        AssessmentResponse,
        AssessmentItemResponse,
        AssessmentListResponse,
        VendorAssetResponse,
        VendorAssetListResponse,
        CreateVendorRequest,
        UpdateVendorRequest,
        VendorResponse,
        VendorListResponse,
    )),
    tags(
        (name = "assessments", description = "Assessment submission and audit log"),
        (name = "vendor-assets", description = "Derived current-state equipment ledger"),
        (name = "vendors", description = "Vendor registry"),
    )
)]
pub struct ApiDoc;

/// Swagger UI mounted at `/docs`, serving the generated document from
/// `/api-docs/openapi.json`.
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi())
}
