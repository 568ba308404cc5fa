//! Work module: service intake, work orders, problems, and diagnoses.

pub mod problem {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "work_problem")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub name: String,
        /// Who reported the class of problem: "customer" or "employee".
        pub category: String,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::CreatedBy",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod info {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    /// Service intake record. Its work orders are reached through the
    /// `/work/order/by/{info_uuid}` listing or the composite details read.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "work_info")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub user_uuid: Option<Uuid>,
        pub received_date: DateTimeUtc,
        pub is_product_received: bool,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::UserUuid",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        User,
        #[sea_orm(
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::CreatedBy",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod order {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "work_order")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub info_uuid: Uuid,
        pub problem_uuid: Option<Uuid>,
        pub problem_statement: Option<String>,
        pub accessories: Option<String>,
        pub is_diagnosis_need: bool,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::info::Entity",
            from = "Column::InfoUuid",
            to = "super::info::Column::Uuid"
        )]
        Info,
        #[sea_orm(
            belongs_to = "super::problem::Entity",
            from = "Column::ProblemUuid",
            to = "super::problem::Column::Uuid"
        )]
        Problem,
        #[sea_orm(
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::CreatedBy",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod diagnosis {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "work_diagnosis")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub order_uuid: Uuid,
        pub problem_uuid: Option<Uuid>,
        pub problem_statement: Option<String>,
        pub proposed_cost: Option<Decimal>,
        pub is_proceed_to_repair: bool,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::order::Entity",
            from = "Column::OrderUuid",
            to = "super::order::Column::Uuid"
        )]
        Order,
        #[sea_orm(
            belongs_to = "super::problem::Entity",
            from = "Column::ProblemUuid",
            to = "super::problem::Column::Uuid"
        )]
        Problem,
        #[sea_orm(
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::CreatedBy",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}
