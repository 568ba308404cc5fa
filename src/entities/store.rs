//! Store module: vendors, warehouses, purchasing, and purchase returns.

pub mod vendor {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "store_vendor")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub name: String,
        pub company_name: Option<String>,
        pub phone: Option<String>,
        pub address: Option<String>,
        pub is_active: bool,
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

pub mod warehouse {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "store_warehouse")]
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
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::CreatedBy",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod purchase {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    /// Purchase header, display-coded `SP<YY>-<seq>`.
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "store_purchase")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub vendor_uuid: Option<Uuid>,
        pub warehouse_uuid: Option<Uuid>,
        pub date: DateTimeUtc,
        pub payment_mode: Option<String>,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::vendor::Entity",
            from = "Column::VendorUuid",
            to = "super::vendor::Column::Uuid"
        )]
        Vendor,
        #[sea_orm(
            belongs_to = "super::warehouse::Entity",
            from = "Column::WarehouseUuid",
            to = "super::warehouse::Column::Uuid"
        )]
        Warehouse,
        #[sea_orm(
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::CreatedBy",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod purchase_return {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    /// Purchase return header, display-coded `SPR<YY>-<seq>`. Returned
    /// items live in [`super::purchase_return_entry`].
    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "store_purchase_return")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub purchase_uuid: Uuid,
        pub warehouse_uuid: Option<Uuid>,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::purchase::Entity",
            from = "Column::PurchaseUuid",
            to = "super::purchase::Column::Uuid"
        )]
        Purchase,
        #[sea_orm(
            belongs_to = "super::warehouse::Entity",
            from = "Column::WarehouseUuid",
            to = "super::warehouse::Column::Uuid"
        )]
        Warehouse,
        #[sea_orm(
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::CreatedBy",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}

pub mod purchase_return_entry {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "store_purchase_return_entry")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        #[sea_orm(unique)]
        pub uuid: Uuid,
        pub purchase_return_uuid: Uuid,
        pub product_name: String,
        pub quantity: i32,
        pub unit_price: Option<Decimal>,
        pub created_by: Option<Uuid>,
        pub created_at: DateTimeUtc,
        pub updated_at: Option<DateTimeUtc>,
        pub remarks: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        #[sea_orm(
            belongs_to = "super::purchase_return::Entity",
            from = "Column::PurchaseReturnUuid",
            to = "super::purchase_return::Column::Uuid"
        )]
        PurchaseReturn,
        #[sea_orm(
            belongs_to = "crate::entities::hr::employee::Entity",
            from = "Column::CreatedBy",
            to = "crate::entities::hr::employee::Column::Uuid"
        )]
        CreatedBy,
    }

    crate::entities::audit_stamps!();
}
