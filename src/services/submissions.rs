use crate::{
    db::DbPool,
    entities::assessment::ActiveModel as AssessmentActiveModel,
    entities::assessment_item::{
        ActiveModel as AssessmentItemActiveModel, Model as AssessmentItemModel,
    },
    entities::assessment_personnel,
    entities::vendor_asset,
    errors::ServiceError,
    events::{Event, EventSender},
    services::assessments::{
        assessment_to_response, item_to_response, AssessmentItemResponse, AssessmentResponse,
        AssessmentStatus,
    },
    services::ownership::{OwnershipResolver, ResolvedOwner},
    services::scoring::{self, ItemScore, Observation},
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// One equipment observation in a submission.
#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct SubmitItemRequest {
    pub equipment_id: Uuid,
    pub required_qty: i32,
    pub actual_qty: i32,
    pub layak: i32,
    pub tidak_layak: i32,
    pub berfungsi: i32,
    pub tidak_berfungsi: i32,
}

/// Request body for the assessment submission endpoint.
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct SubmitAssessmentRequest {
    pub tanggal_penilaian: NaiveDate,
    #[validate(length(min = 1, message = "Shift is required"))]
    pub shift: String,
    pub vendor_id: Uuid,
    pub peruntukan_id: Uuid,
    pub team_id: Option<Uuid>,
    pub personnel_id: Option<Uuid>,
    #[serde(default)]
    pub personnel_ids: Option<Vec<Uuid>>,
    pub assessor_id: Uuid,
    #[validate(length(min = 1, message = "At least one equipment item is required"))]
    pub items: Vec<SubmitItemRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VendorAssetAction {
    Created,
    Updated,
}

/// Per-item vendor-asset outcome tag, returned for observability.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VendorAssetChange {
    pub action: VendorAssetAction,
    pub id: Uuid,
    pub equipment_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SubmissionOutcome {
    pub assessment: AssessmentResponse,
    pub items: Vec<AssessmentItemResponse>,
    pub vendor_assets: Vec<VendorAssetChange>,
}

/// Assessment-level aggregates derived before anything is written.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Aggregates {
    jumlah_item: i32,
    jumlah_layak: i32,
    jumlah_tidak_layak: i32,
    jumlah_berfungsi: i32,
    jumlah_tidak_berfungsi: i32,
    total_score: f64,
}

/// Orchestrates the assessment submission write sequence.
///
/// Durability is deliberately asymmetric: the audit record (header + line
/// items) commits in a single transaction and is all-or-nothing, while the
/// personnel junction and the vendor-asset projection are best-effort
/// secondary writes that never fail the request.
#[derive(Clone)]
pub struct SubmissionService {
    db_pool: Arc<DbPool>,
    ownership: OwnershipResolver,
    event_sender: Option<Arc<EventSender>>,
}

impl SubmissionService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        let ownership = OwnershipResolver::new(db_pool.clone());
        Self {
            db_pool,
            ownership,
            event_sender,
        }
    }

    /// Runs the full submission sequence: validate, derive, persist the
    /// audit record, link personnel, resolve ownership, project vendor
    /// assets.
    #[instrument(
        skip(self, request),
        fields(vendor_id = %request.vendor_id, peruntukan_id = %request.peruntukan_id)
    )]
    pub async fn submit(
        &self,
        request: SubmitAssessmentRequest,
    ) -> Result<SubmissionOutcome, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::ValidationError(e.to_string()))?;
        validate_items(&request.items)?;

        let scores: Vec<ItemScore> = request
            .items
            .iter()
            .map(|item| {
                scoring::score_item(&Observation {
                    required_qty: item.required_qty,
                    actual_qty: item.actual_qty,
                    tidak_layak: item.tidak_layak,
                    tidak_berfungsi: item.tidak_berfungsi,
                })
            })
            .collect();
        let aggregates = derive_aggregates(&request.items, &scores)?;

        let db = &*self.db_pool;
        let now = Utc::now();
        let assessment_id = Uuid::new_v4();

        // Header and items are one logical audit record; they commit or
        // fail together.
        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for assessment submission");
            ServiceError::DatabaseError(e)
        })?;

        let header = AssessmentActiveModel {
            id: Set(assessment_id),
            tanggal_penilaian: Set(request.tanggal_penilaian),
            shift: Set(request.shift.clone()),
            vendor_id: Set(request.vendor_id),
            peruntukan_id: Set(request.peruntukan_id),
            team_id: Set(request.team_id),
            personnel_id: Set(request.personnel_id),
            assessor_id: Set(request.assessor_id),
            jumlah_item: Set(aggregates.jumlah_item),
            jumlah_layak: Set(aggregates.jumlah_layak),
            jumlah_tidak_layak: Set(aggregates.jumlah_tidak_layak),
            jumlah_berfungsi: Set(aggregates.jumlah_berfungsi),
            jumlah_tidak_berfungsi: Set(aggregates.jumlah_tidak_berfungsi),
            total_score: Set(aggregates.total_score),
            status: Set(AssessmentStatus::Submitted.to_string()),
            created_at: Set(now),
        }
        .insert(&txn)
        .await
        .map_err(|e| {
            error!(error = %e, assessment_id = %assessment_id, "Failed to insert assessment header");
            ServiceError::DatabaseError(e)
        })?;

        let mut item_models: Vec<AssessmentItemModel> = Vec::with_capacity(request.items.len());
        for (item, score) in request.items.iter().zip(&scores) {
            let model = AssessmentItemActiveModel {
                id: Set(Uuid::new_v4()),
                assessment_id: Set(assessment_id),
                equipment_id: Set(item.equipment_id),
                required_qty: Set(item.required_qty),
                actual_qty: Set(item.actual_qty),
                layak: Set(item.layak),
                tidak_layak: Set(item.tidak_layak),
                berfungsi: Set(item.berfungsi),
                tidak_berfungsi: Set(item.tidak_berfungsi),
                kesesuaian_kontrak: Set(score.kesesuaian_kontrak),
                kondisi_fisik: Set(score.kondisi_fisik),
                kondisi_fungsi: Set(score.kondisi_fungsi),
                score_item: Set(score.score_item),
                status_kesesuaian: Set(score.status_kesesuaian.to_string()),
                created_at: Set(now),
            }
            .insert(&txn)
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    assessment_id = %assessment_id,
                    equipment_id = %item.equipment_id,
                    "Failed to insert assessment item; rolling back submission"
                );
                ServiceError::DatabaseError(e)
            })?;
            item_models.push(model);
        }

        txn.commit().await.map_err(|e| {
            error!(error = %e, assessment_id = %assessment_id, "Failed to commit assessment submission");
            ServiceError::DatabaseError(e)
        })?;

        info!(
            assessment_id = %assessment_id,
            item_count = item_models.len(),
            total_score = aggregates.total_score,
            "Assessment submitted"
        );

        if let Some(event_sender) = &self.event_sender {
            if let Err(e) = event_sender
                .send(Event::AssessmentSubmitted {
                    assessment_id,
                    vendor_id: request.vendor_id,
                    item_count: item_models.len(),
                })
                .await
            {
                warn!(error = %e, assessment_id = %assessment_id, "Failed to send assessment submitted event");
            }
        }

        // Personnel attribution is less critical than the audit record
        // itself: a failure here is logged and the request continues.
        self.link_personnel(assessment_id, &request, now).await;

        let owner = match self
            .ownership
            .resolve(request.peruntukan_id, request.team_id, request.personnel_id)
            .await
        {
            Ok(owner) => owner,
            Err(e) => {
                warn!(
                    error = %e,
                    assessment_id = %assessment_id,
                    "Ownership resolution failed; skipping vendor asset projection"
                );
                None
            }
        };

        let mut vendor_assets = Vec::new();
        if let Some(owner) = owner {
            for item in &item_models {
                match self.upsert_vendor_asset(&request, owner, item, now).await {
                    Ok(change) => {
                        self.send_vendor_asset_event(assessment_id, &change).await;
                        vendor_assets.push(change);
                    }
                    Err(e) => {
                        warn!(
                            error = %e,
                            assessment_id = %assessment_id,
                            equipment_id = %item.equipment_id,
                            "Vendor asset upsert failed; continuing with remaining items"
                        );
                    }
                }
            }
        } else {
            warn!(
                assessment_id = %assessment_id,
                "No resolved owner for submission; vendor asset projection skipped"
            );
        }

        Ok(SubmissionOutcome {
            assessment: assessment_to_response(header),
            items: item_models.into_iter().map(item_to_response).collect(),
            vendor_assets,
        })
    }

    /// Insert the personnel junction rows, merging the primary personnel
    /// with any additional participants. Best-effort.
    async fn link_personnel(
        &self,
        assessment_id: Uuid,
        request: &SubmitAssessmentRequest,
        now: DateTime<Utc>,
    ) {
        let personnel = merge_personnel(request.personnel_id, request.personnel_ids.as_deref());
        if personnel.is_empty() {
            return;
        }

        let db = &*self.db_pool;
        let rows = personnel
            .iter()
            .map(|personnel_id| assessment_personnel::ActiveModel {
                id: Set(Uuid::new_v4()),
                assessment_id: Set(assessment_id),
                personnel_id: Set(*personnel_id),
                created_at: Set(now),
            });

        match assessment_personnel::Entity::insert_many(rows).exec(db).await {
            Ok(_) => {
                if let Some(event_sender) = &self.event_sender {
                    if let Err(e) = event_sender
                        .send(Event::PersonnelLinked {
                            assessment_id,
                            personnel_count: personnel.len(),
                        })
                        .await
                    {
                        warn!(error = %e, assessment_id = %assessment_id, "Failed to send personnel linked event");
                    }
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    assessment_id = %assessment_id,
                    "Failed to link assessment personnel; assessment and items are kept"
                );
            }
        }
    }

    /// Create or update the vendor-asset row for one line item, keyed by
    /// `(owner_id, equipment_id)`.
    async fn upsert_vendor_asset(
        &self,
        request: &SubmitAssessmentRequest,
        owner: ResolvedOwner,
        item: &AssessmentItemModel,
        now: DateTime<Utc>,
    ) -> Result<VendorAssetChange, ServiceError> {
        let db = &*self.db_pool;

        let existing = vendor_asset::Entity::find()
            .filter(vendor_asset::Column::OwnerId.eq(owner.owner_id()))
            .filter(vendor_asset::Column::EquipmentId.eq(item.equipment_id))
            .one(db)
            .await?;

        match existing {
            Some(model) => {
                let id = model.id;
                let mut active: vendor_asset::ActiveModel = model.into();
                active.vendor_id = Set(request.vendor_id);
                active.peruntukan_id = Set(request.peruntukan_id);
                active.team_id = Set(request.team_id);
                active.personnel_id = Set(request.personnel_id);
                active.jumlah_terakhir = Set(item.actual_qty);
                active.tanggal_distribusi = Set(request.tanggal_penilaian);
                active.last_assessment_id = Set(item.assessment_id);
                active.last_assessed_at = Set(now);
                active.kesesuaian_kontrak = Set(item.kesesuaian_kontrak);
                active.kondisi_fisik = Set(item.kondisi_fisik);
                active.kondisi_fungsi = Set(item.kondisi_fungsi);
                active.score = Set(item.score_item);
                active.status_kesesuaian = Set(item.status_kesesuaian.clone());
                active.updated_at = Set(Some(now));
                active.update(db).await?;

                Ok(VendorAssetChange {
                    action: VendorAssetAction::Updated,
                    id,
                    equipment_id: item.equipment_id,
                })
            }
            None => {
                let id = Uuid::new_v4();
                vendor_asset::ActiveModel {
                    id: Set(id),
                    vendor_id: Set(request.vendor_id),
                    peruntukan_id: Set(request.peruntukan_id),
                    team_id: Set(request.team_id),
                    personnel_id: Set(request.personnel_id),
                    owner_id: Set(owner.owner_id()),
                    equipment_id: Set(item.equipment_id),
                    jumlah_terakhir: Set(item.actual_qty),
                    tanggal_distribusi: Set(request.tanggal_penilaian),
                    last_assessment_id: Set(item.assessment_id),
                    last_assessed_at: Set(now),
                    kesesuaian_kontrak: Set(item.kesesuaian_kontrak),
                    kondisi_fisik: Set(item.kondisi_fisik),
                    kondisi_fungsi: Set(item.kondisi_fungsi),
                    score: Set(item.score_item),
                    status_kesesuaian: Set(item.status_kesesuaian.clone()),
                    created_at: Set(now),
                    updated_at: Set(None),
                }
                .insert(db)
                .await?;

                Ok(VendorAssetChange {
                    action: VendorAssetAction::Created,
                    id,
                    equipment_id: item.equipment_id,
                })
            }
        }
    }

    async fn send_vendor_asset_event(&self, assessment_id: Uuid, change: &VendorAssetChange) {
        let Some(event_sender) = &self.event_sender else {
            return;
        };

        let event = match change.action {
            VendorAssetAction::Created => Event::VendorAssetCreated {
                assessment_id,
                vendor_asset_id: change.id,
                equipment_id: change.equipment_id,
            },
            VendorAssetAction::Updated => Event::VendorAssetUpdated {
                assessment_id,
                vendor_asset_id: change.id,
                equipment_id: change.equipment_id,
            },
        };

        if let Err(e) = event_sender.send(event).await {
            warn!(error = %e, assessment_id = %assessment_id, "Failed to send vendor asset event");
        }
    }
}

/// Reject negative quantities with a field-level message before anything is
/// written.
fn validate_items(items: &[SubmitItemRequest]) -> Result<(), ServiceError> {
    for (index, item) in items.iter().enumerate() {
        let fields = [
            ("required_qty", item.required_qty),
            ("actual_qty", item.actual_qty),
            ("layak", item.layak),
            ("tidak_layak", item.tidak_layak),
            ("berfungsi", item.berfungsi),
            ("tidak_berfungsi", item.tidak_berfungsi),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(ServiceError::ValidationError(format!(
                    "items[{}].{} must not be negative",
                    index, name
                )));
            }
        }
    }
    Ok(())
}

/// Merge the primary personnel reference with the optional participant list,
/// de-duplicated, order preserved.
fn merge_personnel(primary: Option<Uuid>, extra: Option<&[Uuid]>) -> Vec<Uuid> {
    let mut merged: Vec<Uuid> = Vec::new();
    for id in primary
        .into_iter()
        .chain(extra.unwrap_or_default().iter().copied())
    {
        if !merged.contains(&id) {
            merged.push(id);
        }
    }
    merged
}

fn derive_aggregates(
    items: &[SubmitItemRequest],
    scores: &[ItemScore],
) -> Result<Aggregates, ServiceError> {
    let score_values: Vec<i32> = scores.iter().map(|s| s.score_item).collect();
    let total_score = scoring::total_score(&score_values).ok_or_else(|| {
        ServiceError::ValidationError("At least one equipment item is required".to_string())
    })?;

    Ok(Aggregates {
        jumlah_item: items.len() as i32,
        jumlah_layak: items.iter().map(|i| i.layak).sum(),
        jumlah_tidak_layak: items.iter().map(|i| i.tidak_layak).sum(),
        jumlah_berfungsi: items.iter().map(|i| i.berfungsi).sum(),
        jumlah_tidak_berfungsi: items.iter().map(|i| i.tidak_berfungsi).sum(),
        total_score,
    })
}
