use crate::{
    db::DbPool,
    entities::{equipment, equipment_standard},
    errors::ServiceError,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use std::sync::Arc;
use tracing::{instrument, warn};
use uuid::Uuid;

/// Equipment category that marks a peruntukan as vehicle-based.
pub const VEHICLE_CATEGORY: &str = "Kendaraan";

/// The party a submission's vendor assets are attributed to. Team for
/// vehicle-based purposes, personnel otherwise; never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedOwner {
    Team(Uuid),
    Personnel(Uuid),
}

impl ResolvedOwner {
    pub fn owner_id(&self) -> Uuid {
        match self {
            ResolvedOwner::Team(id) | ResolvedOwner::Personnel(id) => *id,
        }
    }
}

/// Decides, once per submission, whether derived vendor-asset rows attribute
/// to a team or to an individual.
#[derive(Clone)]
pub struct OwnershipResolver {
    db_pool: Arc<DbPool>,
}

impl OwnershipResolver {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    /// Resolve the owner for an assessment. The peruntukan is vehicle-based
    /// when at least one of its equipment standards references equipment
    /// catalogued under `"Kendaraan"`.
    ///
    /// Returns `None` when the relevant reference (team for vehicle-based,
    /// personnel otherwise) was not supplied. The source system degraded to
    /// unkeyed inserts in that case; here the caller skips the vendor-asset
    /// projection instead of writing rows it can never match again.
    #[instrument(skip(self), fields(peruntukan_id = %peruntukan_id))]
    pub async fn resolve(
        &self,
        peruntukan_id: Uuid,
        team_id: Option<Uuid>,
        personnel_id: Option<Uuid>,
    ) -> Result<Option<ResolvedOwner>, ServiceError> {
        let db = &*self.db_pool;

        let vehicle_standard_count = equipment_standard::Entity::find()
            .filter(equipment_standard::Column::PeruntukanId.eq(peruntukan_id))
            .inner_join(equipment::Entity)
            .filter(equipment::Column::Category.eq(VEHICLE_CATEGORY))
            .count(db)
            .await?;

        let owner = if vehicle_standard_count > 0 {
            match team_id {
                Some(id) => Some(ResolvedOwner::Team(id)),
                None => {
                    warn!(
                        peruntukan_id = %peruntukan_id,
                        "Vehicle-based peruntukan without a team reference; owner unresolved"
                    );
                    None
                }
            }
        } else {
            match personnel_id {
                Some(id) => Some(ResolvedOwner::Personnel(id)),
                None => {
                    warn!(
                        peruntukan_id = %peruntukan_id,
                        "Individual-based peruntukan without a personnel reference; owner unresolved"
                    );
                    None
                }
            }
        };

        Ok(owner)
    }
}
