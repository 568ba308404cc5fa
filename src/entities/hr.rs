//! HR module: organizational structure, people, and leave configuration.

pub mod department {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "hr_department")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub department: String,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    crate::entities::audit_stamps!();
}

pub mod designation {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "hr_designation")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub designation: String,
        pub department_uuid: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::department::Entity",
            from = "Column::DepartmentUuid",
            to = "super::department::Column::Uuid"
        )]
        Department,
    }

    crate::entities::audit_stamps!();
}

pub mod employee {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "hr_employee")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub name: String,
        #[sea_orm(unique)]
        pub email: String,
        pub designation_uuid: Option<Uuid>,
        pub department_uuid: Option<Uuid>,
        pub ext: Option<String>,
        pub phone: Option<String>,
        pub status: String,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::designation::Entity",
            from = "Column::DesignationUuid",
            to = "super::designation::Column::Uuid"
        )]
        Designation,
        #[sea_orm(
            belongs_to = "super::department::Entity",
            from = "Column::DepartmentUuid",
            to = "super::department::Column::Uuid"
        )]
        Department,
    }

    crate::entities::audit_stamps!();
}

pub mod leave_policy {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "hr_leave_policy")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        #[sea_orm(unique)]
        pub name: String,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::employee::Entity",
            from = "Column::CreatedBy",
            to = "super::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod leave_category {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "hr_leave_category")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        #[sea_orm(unique)]
        pub name: String,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::employee::Entity",
            from = "Column::CreatedBy",
            to = "super::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod configuration {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    /// Leave configuration header. The per-category limits live in
    /// [`super::configuration_entry`].
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "hr_configuration")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub leave_policy_uuid: Option<Uuid>,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::leave_policy::Entity",
            from = "Column::LeavePolicyUuid",
            to = "super::leave_policy::Column::Uuid"
        )]
        LeavePolicy,
        #[sea_orm(
            belongs_to = "super::employee::Entity",
            from = "Column::CreatedBy",
            to = "super::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod configuration_entry {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "hr_configuration_entry")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub configuration_uuid: Uuid,
        pub leave_category_uuid: Option<Uuid>,
        pub maximum_number_of_allowed_leaves: i32,
        pub enable_earned_leave: bool,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::configuration::Entity",
            from = "Column::ConfigurationUuid",
            to = "super::configuration::Column::Uuid"
        )]
        Configuration,
        #[sea_orm(
            belongs_to = "super::leave_category::Entity",
            from = "Column::LeaveCategoryUuid",
            to = "super::leave_category::Column::Uuid"
        )]
        LeaveCategory,
        #[sea_orm(
            belongs_to = "super::employee::Entity",
            from = "Column::CreatedBy",
            to = "super::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}
