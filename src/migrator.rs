use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_hr_tables::Migration),
            Box::new(m20240101_000002_create_work_tables::Migration),
            Box::new(m20240101_000003_create_store_tables::Migration),
        ]
    }
}

mod m20240101_000001_create_hr_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_hr_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Department::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Department::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Department::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Department::Department).string().not_null())
                        .col(
                            ColumnDef::new(Department::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Department::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Department::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Designation::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Designation::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Designation::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Designation::Designation).string().not_null())
                        .col(ColumnDef::new(Designation::DepartmentUuid).uuid().null())
                        .col(
                            ColumnDef::new(Designation::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Designation::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Designation::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Employee::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Employee::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Employee::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Employee::Name).string().not_null())
                        .col(ColumnDef::new(Employee::Email).string().not_null().unique_key())
                        .col(ColumnDef::new(Employee::DesignationUuid).uuid().null())
                        .col(ColumnDef::new(Employee::DepartmentUuid).uuid().null())
                        .col(ColumnDef::new(Employee::Ext).string().null())
                        .col(ColumnDef::new(Employee::Phone).string().null())
                        .col(
                            ColumnDef::new(Employee::Status)
                                .string()
                                .not_null()
                                .default("active"),
                        )
                        .col(
                            ColumnDef::new(Employee::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Employee::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Employee::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_hr_employee_department_uuid")
                        .table(Employee::Table)
                        .col(Employee::DepartmentUuid)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(LeavePolicy::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(LeavePolicy::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(LeavePolicy::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(LeavePolicy::Name).string().not_null().unique_key())
                        .col(ColumnDef::new(LeavePolicy::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(LeavePolicy::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(LeavePolicy::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(LeavePolicy::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(LeaveCategory::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(LeaveCategory::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(LeaveCategory::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(LeaveCategory::Name).string().not_null().unique_key())
                        .col(ColumnDef::new(LeaveCategory::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(LeaveCategory::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(LeaveCategory::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(LeaveCategory::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Configuration::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Configuration::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Configuration::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Configuration::LeavePolicyUuid).uuid().null())
                        .col(ColumnDef::new(Configuration::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(Configuration::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Configuration::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Configuration::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(ConfigurationEntry::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ConfigurationEntry::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(ConfigurationEntry::Uuid)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(ConfigurationEntry::ConfigurationUuid)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ConfigurationEntry::LeaveCategoryUuid)
                                .uuid()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(ConfigurationEntry::MaximumNumberOfAllowedLeaves)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(ConfigurationEntry::EnableEarnedLeave)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(ConfigurationEntry::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(ConfigurationEntry::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(ConfigurationEntry::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(ConfigurationEntry::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_hr_configuration_entry_configuration_uuid")
                        .table(ConfigurationEntry::Table)
                        .col(ConfigurationEntry::ConfigurationUuid)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ConfigurationEntry::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Configuration::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(LeaveCategory::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(LeavePolicy::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Employee::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Designation::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Department::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Department {
        #[sea_orm(iden = "hr_department")]
        Table,
        Id,
        Uuid,
        Department,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum Designation {
        #[sea_orm(iden = "hr_designation")]
        Table,
        Id,
        Uuid,
        Designation,
        DepartmentUuid,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum Employee {
        #[sea_orm(iden = "hr_employee")]
        Table,
        Id,
        Uuid,
        Name,
        Email,
        DesignationUuid,
        DepartmentUuid,
        Ext,
        Phone,
        Status,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum LeavePolicy {
        #[sea_orm(iden = "hr_leave_policy")]
        Table,
        Id,
        Uuid,
        Name,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum LeaveCategory {
        #[sea_orm(iden = "hr_leave_category")]
        Table,
        Id,
        Uuid,
        Name,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum Configuration {
        #[sea_orm(iden = "hr_configuration")]
        Table,
        Id,
        Uuid,
        LeavePolicyUuid,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum ConfigurationEntry {
        #[sea_orm(iden = "hr_configuration_entry")]
        Table,
        Id,
        Uuid,
        ConfigurationUuid,
        LeaveCategoryUuid,
        MaximumNumberOfAllowedLeaves,
        EnableEarnedLeave,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }
}

mod m20240101_000002_create_work_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_work_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Problem::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Problem::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Problem::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Problem::Name).string().not_null())
                        .col(ColumnDef::new(Problem::Category).string().not_null())
                        .col(ColumnDef::new(Problem::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(Problem::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Problem::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Problem::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Info::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Info::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Info::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Info::UserUuid).uuid().null())
                        .col(
                            ColumnDef::new(Info::ReceivedDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Info::IsProductReceived)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Info::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(Info::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Info::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Info::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Order::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Order::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Order::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Order::InfoUuid).uuid().not_null())
                        .col(ColumnDef::new(Order::ProblemUuid).uuid().null())
                        .col(ColumnDef::new(Order::ProblemStatement).string().null())
                        .col(ColumnDef::new(Order::Accessories).string().null())
                        .col(
                            ColumnDef::new(Order::IsDiagnosisNeed)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Order::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(Order::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Order::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Order::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_work_order_info_uuid")
                        .table(Order::Table)
                        .col(Order::InfoUuid)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Diagnosis::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Diagnosis::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Diagnosis::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Diagnosis::OrderUuid).uuid().not_null())
                        .col(ColumnDef::new(Diagnosis::ProblemUuid).uuid().null())
                        .col(ColumnDef::new(Diagnosis::ProblemStatement).string().null())
                        .col(ColumnDef::new(Diagnosis::ProposedCost).decimal().null())
                        .col(
                            ColumnDef::new(Diagnosis::IsProceedToRepair)
                                .boolean()
                                .not_null()
                                .default(false),
                        )
                        .col(ColumnDef::new(Diagnosis::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(Diagnosis::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Diagnosis::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Diagnosis::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_work_diagnosis_order_uuid")
                        .table(Diagnosis::Table)
                        .col(Diagnosis::OrderUuid)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Diagnosis::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Order::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Info::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Problem::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Problem {
        #[sea_orm(iden = "work_problem")]
        Table,
        Id,
        Uuid,
        Name,
        Category,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum Info {
        #[sea_orm(iden = "work_info")]
        Table,
        Id,
        Uuid,
        UserUuid,
        ReceivedDate,
        IsProductReceived,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum Order {
        #[sea_orm(iden = "work_order")]
        Table,
        Id,
        Uuid,
        InfoUuid,
        ProblemUuid,
        ProblemStatement,
        Accessories,
        IsDiagnosisNeed,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum Diagnosis {
        #[sea_orm(iden = "work_diagnosis")]
        Table,
        Id,
        Uuid,
        OrderUuid,
        ProblemUuid,
        ProblemStatement,
        ProposedCost,
        IsProceedToRepair,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }
}

mod m20240101_000003_create_store_tables {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_store_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Vendor::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Vendor::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Vendor::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Vendor::Name).string().not_null())
                        .col(ColumnDef::new(Vendor::CompanyName).string().null())
                        .col(ColumnDef::new(Vendor::Phone).string().null())
                        .col(ColumnDef::new(Vendor::Address).string().null())
                        .col(
                            ColumnDef::new(Vendor::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Vendor::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(Vendor::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Vendor::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Vendor::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Warehouse::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Warehouse::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Warehouse::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Warehouse::Name).string().not_null().unique_key())
                        .col(ColumnDef::new(Warehouse::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(Warehouse::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Warehouse::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Warehouse::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Purchase::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Purchase::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Purchase::Uuid).uuid().not_null().unique_key())
                        .col(ColumnDef::new(Purchase::VendorUuid).uuid().null())
                        .col(ColumnDef::new(Purchase::WarehouseUuid).uuid().null())
                        .col(
                            ColumnDef::new(Purchase::Date)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Purchase::PaymentMode).string().null())
                        .col(ColumnDef::new(Purchase::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(Purchase::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Purchase::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(Purchase::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PurchaseReturn::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PurchaseReturn::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReturn::Uuid)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(PurchaseReturn::PurchaseUuid).uuid().not_null())
                        .col(ColumnDef::new(PurchaseReturn::WarehouseUuid).uuid().null())
                        .col(ColumnDef::new(PurchaseReturn::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(PurchaseReturn::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReturn::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(PurchaseReturn::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_store_purchase_return_purchase_uuid")
                        .table(PurchaseReturn::Table)
                        .col(PurchaseReturn::PurchaseUuid)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PurchaseReturnEntry::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PurchaseReturnEntry::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReturnEntry::Uuid)
                                .uuid()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReturnEntry::PurchaseReturnUuid)
                                .uuid()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReturnEntry::ProductName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReturnEntry::Quantity)
                                .integer()
                                .not_null()
                                .default(1),
                        )
                        .col(ColumnDef::new(PurchaseReturnEntry::UnitPrice).decimal().null())
                        .col(ColumnDef::new(PurchaseReturnEntry::CreatedBy).uuid().null())
                        .col(
                            ColumnDef::new(PurchaseReturnEntry::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseReturnEntry::UpdatedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(PurchaseReturnEntry::Remarks).string().null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_store_purchase_return_entry_purchase_return_uuid")
                        .table(PurchaseReturnEntry::Table)
                        .col(PurchaseReturnEntry::PurchaseReturnUuid)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PurchaseReturnEntry::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PurchaseReturn::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Purchase::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Warehouse::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Vendor::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Vendor {
        #[sea_orm(iden = "store_vendor")]
        Table,
        Id,
        Uuid,
        Name,
        CompanyName,
        Phone,
        Address,
        IsActive,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum Warehouse {
        #[sea_orm(iden = "store_warehouse")]
        Table,
        Id,
        Uuid,
        Name,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum Purchase {
        #[sea_orm(iden = "store_purchase")]
        Table,
        Id,
        Uuid,
        VendorUuid,
        WarehouseUuid,
        Date,
        PaymentMode,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum PurchaseReturn {
        #[sea_orm(iden = "store_purchase_return")]
        Table,
        Id,
        Uuid,
        PurchaseUuid,
        WarehouseUuid,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }

    #[derive(DeriveIden)]
    pub(super) enum PurchaseReturnEntry {
        #[sea_orm(iden = "store_purchase_return_entry")]
        Table,
        Id,
        Uuid,
        PurchaseReturnUuid,
        ProductName,
        Quantity,
        UnitPrice,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
        Remarks,
    }
}
