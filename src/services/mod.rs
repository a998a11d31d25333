pub mod assessments;
pub mod equipment;
pub mod equipment_standards;
pub mod org_units;
pub mod ownership;
pub mod personnel;
pub mod peruntukan;
pub mod scoring;
pub mod submissions;
pub mod teams;
pub mod vendor_assets;
pub mod vendors;
