pub mod assessments;
pub mod common;
pub mod equipment;
pub mod equipment_standards;
pub mod org_units;
pub mod personnel;
pub mod peruntukan;
pub mod teams;
pub mod vendor_assets;
pub mod vendors;

use crate::{
    db::DbPool,
    events::EventSender,
    services::{
        assessments::AssessmentService, equipment::EquipmentService,
        equipment_standards::EquipmentStandardService, org_units::OrgUnitService,
        personnel::PersonnelService, peruntukan::PeruntukanService,
        submissions::SubmissionService, teams::TeamService, vendor_assets::VendorAssetService,
        vendors::VendorService,
    },
};
use std::sync::Arc;

/// Service registry shared by all handlers through application state.
#[derive(Clone)]
pub struct AppServices {
    pub submissions: Arc<SubmissionService>,
    pub assessments: Arc<AssessmentService>,
    pub vendor_assets: Arc<VendorAssetService>,
    pub vendors: Arc<VendorService>,
    pub teams: Arc<TeamService>,
    pub personnel: Arc<PersonnelService>,
    pub org_units: Arc<OrgUnitService>,
    pub equipment: Arc<EquipmentService>,
    pub peruntukan: Arc<PeruntukanService>,
    pub equipment_standards: Arc<EquipmentStandardService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            submissions: Arc::new(SubmissionService::new(db_pool.clone(), event_sender)),
            assessments: Arc::new(AssessmentService::new(db_pool.clone())),
            vendor_assets: Arc::new(VendorAssetService::new(db_pool.clone())),
            vendors: Arc::new(VendorService::new(db_pool.clone())),
            teams: Arc::new(TeamService::new(db_pool.clone())),
            personnel: Arc::new(PersonnelService::new(db_pool.clone())),
            org_units: Arc::new(OrgUnitService::new(db_pool.clone())),
            equipment: Arc::new(EquipmentService::new(db_pool.clone())),
            peruntukan: Arc::new(PeruntukanService::new(db_pool.clone())),
            equipment_standards: Arc::new(EquipmentStandardService::new(db_pool)),
        }
    }
}
