pub mod assessment;
pub mod assessment_item;
pub mod assessment_personnel;
pub mod equipment;
pub mod equipment_standard;
pub mod org_unit;
pub mod personnel;
pub mod peruntukan;
pub mod team;
pub mod vendor;
pub mod vendor_asset;
