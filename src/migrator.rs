use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_reference_tables::Migration),
            Box::new(m20240101_000002_create_assessment_tables::Migration),
            Box::new(m20240101_000003_create_vendor_assets_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_reference_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_reference_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(OrgUnits::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(OrgUnits::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(OrgUnits::Name).string().not_null())
                        .col(ColumnDef::new(OrgUnits::Code).string().null())
                        .col(ColumnDef::new(OrgUnits::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Vendors::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Vendors::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Vendors::Name).string().not_null())
                        .col(ColumnDef::new(Vendors::OrgUnitId).uuid().null())
                        .col(ColumnDef::new(Vendors::Alamat).string().null())
                        .col(ColumnDef::new(Vendors::Phone).string().null())
                        .col(ColumnDef::new(Vendors::CreatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_vendors_org_unit_id")
                                .from(Vendors::Table, Vendors::OrgUnitId)
                                .to(OrgUnits::Table, OrgUnits::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Teams::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Teams::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Teams::Name).string().not_null())
                        .col(ColumnDef::new(Teams::VendorId).uuid().null())
                        .col(ColumnDef::new(Teams::CreatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_teams_vendor_id")
                                .from(Teams::Table, Teams::VendorId)
                                .to(Vendors::Table, Vendors::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Personnel::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Personnel::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Personnel::Name).string().not_null())
                        .col(ColumnDef::new(Personnel::BadgeNumber).string().null())
                        .col(ColumnDef::new(Personnel::Jabatan).string().null())
                        .col(ColumnDef::new(Personnel::VendorId).uuid().null())
                        .col(ColumnDef::new(Personnel::TeamId).uuid().null())
                        .col(ColumnDef::new(Personnel::CreatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_personnel_vendor_id")
                                .from(Personnel::Table, Personnel::VendorId)
                                .to(Vendors::Table, Vendors::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_personnel_team_id")
                                .from(Personnel::Table, Personnel::TeamId)
                                .to(Teams::Table, Teams::Id)
                                .on_delete(ForeignKeyAction::SetNull)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Equipment::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Equipment::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Equipment::Name).string().not_null())
                        .col(ColumnDef::new(Equipment::Category).string().not_null())
                        .col(ColumnDef::new(Equipment::Satuan).string().null())
                        .col(ColumnDef::new(Equipment::Description).string().null())
                        .col(ColumnDef::new(Equipment::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Peruntukan::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Peruntukan::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Peruntukan::Name).string().not_null())
                        .col(ColumnDef::new(Peruntukan::Description).string().null())
                        .col(ColumnDef::new(Peruntukan::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(EquipmentStandards::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(EquipmentStandards::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EquipmentStandards::PeruntukanId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EquipmentStandards::EquipmentId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EquipmentStandards::RequiredQty)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(EquipmentStandards::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_equipment_standards_peruntukan_id")
                                .from(EquipmentStandards::Table, EquipmentStandards::PeruntukanId)
                                .to(Peruntukan::Table, Peruntukan::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_equipment_standards_equipment_id")
                                .from(EquipmentStandards::Table, EquipmentStandards::EquipmentId)
                                .to(Equipment::Table, Equipment::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // Ownership resolution scans standards by peruntukan
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_equipment_standards_peruntukan_id")
                        .table(EquipmentStandards::Table)
                        .col(EquipmentStandards::PeruntukanId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_equipment_category")
                        .table(Equipment::Table)
                        .col(Equipment::Category)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(EquipmentStandards::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Peruntukan::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Equipment::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Personnel::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Teams::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Vendors::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(OrgUnits::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum OrgUnits {
        Table,
        Id,
        Name,
        Code,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum Vendors {
        Table,
        Id,
        Name,
        OrgUnitId,
        Alamat,
        Phone,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum Teams {
        Table,
        Id,
        Name,
        VendorId,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum Personnel {
        Table,
        Id,
        Name,
        BadgeNumber,
        Jabatan,
        VendorId,
        TeamId,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum Equipment {
        Table,
        Id,
        Name,
        Category,
        Satuan,
        Description,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum Peruntukan {
        Table,
        Id,
        Name,
        Description,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum EquipmentStandards {
        Table,
        Id,
        PeruntukanId,
        EquipmentId,
        RequiredQty,
        CreatedAt,
    }
}

mod m20240101_000002_create_assessment_tables {

    use sea_orm_migration::prelude::*;

    use super::m20240101_000001_create_reference_tables::{
        Equipment, Personnel, Peruntukan, Vendors,
    };

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_assessment_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Assessments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Assessments::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Assessments::TanggalPenilaian)
                                .date()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Assessments::Shift).string().not_null())
                        .col(ColumnDef::new(Assessments::VendorId).uuid().not_null())
                        .col(ColumnDef::new(Assessments::PeruntukanId).uuid().not_null())
                        .col(ColumnDef::new(Assessments::TeamId).uuid().null())
                        .col(ColumnDef::new(Assessments::PersonnelId).uuid().null())
                        .col(ColumnDef::new(Assessments::AssessorId).uuid().not_null())
                        .col(
                            ColumnDef::new(Assessments::JumlahItem)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Assessments::JumlahLayak)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Assessments::JumlahTidakLayak)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Assessments::JumlahBerfungsi)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Assessments::JumlahTidakBerfungsi)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Assessments::TotalScore)
                                .double()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Assessments::Status).string().not_null())
                        .col(ColumnDef::new(Assessments::CreatedAt).timestamp().not_null())
                        // Audit rows pin their reference data; restrict, never
                        // cascade, so the log cannot lose history.
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assessments_vendor_id")
                                .from(Assessments::Table, Assessments::VendorId)
                                .to(Vendors::Table, Vendors::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assessments_peruntukan_id")
                                .from(Assessments::Table, Assessments::PeruntukanId)
                                .to(Peruntukan::Table, Peruntukan::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_assessments_vendor_id")
                        .table(Assessments::Table)
                        .col(Assessments::VendorId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_assessments_status")
                        .table(Assessments::Table)
                        .col(Assessments::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(AssessmentItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AssessmentItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::AssessmentId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::EquipmentId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::RequiredQty)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::ActualQty)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::Layak)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::TidakLayak)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::Berfungsi)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::TidakBerfungsi)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::KesesuaianKontrak)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::KondisiFisik)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::KondisiFungsi)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::ScoreItem)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::StatusKesesuaian)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentItems::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assessment_items_assessment_id")
                                .from(AssessmentItems::Table, AssessmentItems::AssessmentId)
                                .to(Assessments::Table, Assessments::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assessment_items_equipment_id")
                                .from(AssessmentItems::Table, AssessmentItems::EquipmentId)
                                .to(Equipment::Table, Equipment::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_assessment_items_assessment_id")
                        .table(AssessmentItems::Table)
                        .col(AssessmentItems::AssessmentId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(AssessmentPersonnel::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AssessmentPersonnel::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentPersonnel::AssessmentId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentPersonnel::PersonnelId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(AssessmentPersonnel::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assessment_personnel_assessment_id")
                                .from(
                                    AssessmentPersonnel::Table,
                                    AssessmentPersonnel::AssessmentId,
                                )
                                .to(Assessments::Table, Assessments::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_assessment_personnel_personnel_id")
                                .from(
                                    AssessmentPersonnel::Table,
                                    AssessmentPersonnel::PersonnelId,
                                )
                                .to(Personnel::Table, Personnel::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .unique()
                        .name("idx_assessment_personnel_unique")
                        .table(AssessmentPersonnel::Table)
                        .col(AssessmentPersonnel::AssessmentId)
                        .col(AssessmentPersonnel::PersonnelId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AssessmentPersonnel::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(AssessmentItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Assessments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Assessments {
        Table,
        Id,
        TanggalPenilaian,
        Shift,
        VendorId,
        PeruntukanId,
        TeamId,
        PersonnelId,
        AssessorId,
        JumlahItem,
        JumlahLayak,
        JumlahTidakLayak,
        JumlahBerfungsi,
        JumlahTidakBerfungsi,
        TotalScore,
        Status,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum AssessmentItems {
        Table,
        Id,
        AssessmentId,
        EquipmentId,
        RequiredQty,
        ActualQty,
        Layak,
        TidakLayak,
        Berfungsi,
        TidakBerfungsi,
        KesesuaianKontrak,
        KondisiFisik,
        KondisiFungsi,
        ScoreItem,
        StatusKesesuaian,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum AssessmentPersonnel {
        Table,
        Id,
        AssessmentId,
        PersonnelId,
        CreatedAt,
    }
}

mod m20240101_000003_create_vendor_assets_table {

    use sea_orm_migration::prelude::*;

    use super::m20240101_000001_create_reference_tables::{Equipment, Vendors};
    use super::m20240101_000002_create_assessment_tables::Assessments;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_vendor_assets_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(VendorAssets::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(VendorAssets::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(VendorAssets::VendorId).uuid().not_null())
                        .col(ColumnDef::new(VendorAssets::PeruntukanId).uuid().not_null())
                        .col(ColumnDef::new(VendorAssets::TeamId).uuid().null())
                        .col(ColumnDef::new(VendorAssets::PersonnelId).uuid().null())
                        .col(ColumnDef::new(VendorAssets::OwnerId).uuid().not_null())
                        .col(ColumnDef::new(VendorAssets::EquipmentId).uuid().not_null())
                        .col(
                            ColumnDef::new(VendorAssets::JumlahTerakhir)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(VendorAssets::TanggalDistribusi)
                                .date()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(VendorAssets::LastAssessmentId)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(VendorAssets::LastAssessedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(VendorAssets::KesesuaianKontrak)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(VendorAssets::KondisiFisik)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(VendorAssets::KondisiFungsi)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(VendorAssets::Score).integer().not_null())
                        .col(
                            ColumnDef::new(VendorAssets::StatusKesesuaian)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(VendorAssets::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(ColumnDef::new(VendorAssets::UpdatedAt).timestamp().null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_vendor_assets_vendor_id")
                                .from(VendorAssets::Table, VendorAssets::VendorId)
                                .to(Vendors::Table, Vendors::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_vendor_assets_equipment_id")
                                .from(VendorAssets::Table, VendorAssets::EquipmentId)
                                .to(Equipment::Table, Equipment::Id)
                                .on_delete(ForeignKeyAction::Cascade)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_vendor_assets_last_assessment_id")
                                .from(VendorAssets::Table, VendorAssets::LastAssessmentId)
                                .to(Assessments::Table, Assessments::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // The workflow upserts by (owner_id, equipment_id); the store
            // enforces the at-most-one-row invariant across concurrent
            // submissions.
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .unique()
                        .name("idx_vendor_assets_owner_equipment")
                        .table(VendorAssets::Table)
                        .col(VendorAssets::OwnerId)
                        .col(VendorAssets::EquipmentId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_vendor_assets_vendor_id")
                        .table(VendorAssets::Table)
                        .col(VendorAssets::VendorId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(VendorAssets::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum VendorAssets {
        Table,
        Id,
        VendorId,
        PeruntukanId,
        TeamId,
        PersonnelId,
        OwnerId,
        EquipmentId,
        JumlahTerakhir,
        TanggalDistribusi,
        LastAssessmentId,
        LastAssessedAt,
        KesesuaianKontrak,
        KondisiFisik,
        KondisiFungsi,
        Score,
        StatusKesesuaian,
        CreatedAt,
        UpdatedAt,
    }
}
