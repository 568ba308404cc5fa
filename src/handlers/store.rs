//! Store resources: vendors, warehouses, purchases, purchase returns and
//! their line entries, plus the purchase-return composite read.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult,
    IntoActiveModel, JoinType, QueryFilter, QuerySelect, RelationTrait, Select,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{crud_router, list_by_parent};
use crate::{
    crud::{composite::CompositeRead, display_code::display_code, CrudResource, Envelope, ToastKind},
    entities::hr::employee,
    entities::store::{purchase, purchase_return, purchase_return_entry, vendor, warehouse},
    errors::ApiError,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/vendor", crud_router::<Vendor>())
        .nest("/warehouse", crud_router::<Warehouse>())
        .nest("/purchase", crud_router::<Purchase>())
        .nest(
            "/purchase-return",
            crud_router::<PurchaseReturn>()
                .route("/details/:purchase_return_uuid", get(purchase_return_details)),
        )
        .nest(
            "/purchase-return-entry",
            crud_router::<PurchaseReturnEntry>().route(
                "/by/:purchase_return_uuid",
                get(list_by_parent::<PurchaseReturnEntry>),
            ),
        )
}

// -------------------------------------------------------------------- vendor

pub struct Vendor;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct VendorRead {
    pub id: i32,
    pub uuid: Uuid,
    pub name: String,
    pub company_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VendorCreate {
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1))]
    pub name: String,
    pub company_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VendorUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub company_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: Option<bool>,
    pub remarks: Option<String>,
}

fn default_true() -> bool {
    true
}

impl CrudResource for Vendor {
    type Entity = vendor::Entity;
    type Read = VendorRead;
    type Create = VendorCreate;
    type Update = VendorUpdate;

    const NAME: &'static str = "vendor";

    fn uuid_column() -> vendor::Column {
        vendor::Column::Uuid
    }

    fn order_column() -> vendor::Column {
        vendor::Column::CreatedAt
    }

    fn read_select() -> Select<vendor::Entity> {
        vendor::Entity::find()
            .join(JoinType::LeftJoin, vendor::Relation::CreatedBy.def())
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> vendor::ActiveModel {
        vendor::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            name: Set(input.name),
            company_name: Set(input.company_name),
            phone: Set(input.phone),
            address: Set(input.address),
            is_active: Set(input.is_active),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(model: vendor::Model, patch: Self::Update) -> vendor::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(name) = patch.name {
            row.name = Set(name);
        }
        if let Some(company_name) = patch.company_name {
            row.company_name = Set(Some(company_name));
        }
        if let Some(phone) = patch.phone {
            row.phone = Set(Some(phone));
        }
        if let Some(address) = patch.address {
            row.address = Set(Some(address));
        }
        if let Some(is_active) = patch.is_active {
            row.is_active = Set(is_active);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &vendor::Model) -> Uuid {
        model.uuid
    }
}

// ----------------------------------------------------------------- warehouse

pub struct Warehouse;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct WarehouseRead {
    pub id: i32,
    pub uuid: Uuid,
    pub name: String,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WarehouseCreate {
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1))]
    pub name: String,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WarehouseUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub remarks: Option<String>,
}

impl CrudResource for Warehouse {
    type Entity = warehouse::Entity;
    type Read = WarehouseRead;
    type Create = WarehouseCreate;
    type Update = WarehouseUpdate;

    const NAME: &'static str = "warehouse";

    fn uuid_column() -> warehouse::Column {
        warehouse::Column::Uuid
    }

    fn order_column() -> warehouse::Column {
        warehouse::Column::CreatedAt
    }

    fn read_select() -> Select<warehouse::Entity> {
        warehouse::Entity::find()
            .join(JoinType::LeftJoin, warehouse::Relation::CreatedBy.def())
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> warehouse::ActiveModel {
        warehouse::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            name: Set(input.name),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(model: warehouse::Model, patch: Self::Update) -> warehouse::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(name) = patch.name {
            row.name = Set(name);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &warehouse::Model) -> Uuid {
        model.uuid
    }
}

// ------------------------------------------------------------------ purchase

pub struct Purchase;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct PurchaseRead {
    pub id: i32,
    /// Derived display code `SP<YY>-<seq>`, never stored.
    #[sea_orm(skip)]
    pub purchase_id: String,
    pub uuid: Uuid,
    pub vendor_uuid: Option<Uuid>,
    pub vendor_name: Option<String>,
    pub warehouse_uuid: Option<Uuid>,
    pub warehouse_name: Option<String>,
    pub date: DateTime<Utc>,
    pub payment_mode: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseCreate {
    pub uuid: Option<Uuid>,
    pub vendor_uuid: Option<Uuid>,
    pub warehouse_uuid: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub payment_mode: Option<String>,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseUpdate {
    pub vendor_uuid: Option<Uuid>,
    pub warehouse_uuid: Option<Uuid>,
    pub date: Option<DateTime<Utc>>,
    pub payment_mode: Option<String>,
    pub remarks: Option<String>,
}

impl CrudResource for Purchase {
    type Entity = purchase::Entity;
    type Read = PurchaseRead;
    type Create = PurchaseCreate;
    type Update = PurchaseUpdate;

    const NAME: &'static str = "purchase";

    fn uuid_column() -> purchase::Column {
        purchase::Column::Uuid
    }

    fn order_column() -> purchase::Column {
        purchase::Column::CreatedAt
    }

    fn read_select() -> Select<purchase::Entity> {
        purchase::Entity::find()
            .join(JoinType::LeftJoin, purchase::Relation::Vendor.def())
            .join(JoinType::LeftJoin, purchase::Relation::Warehouse.def())
            .join(JoinType::LeftJoin, purchase::Relation::CreatedBy.def())
            .column_as(vendor::Column::Name, "vendor_name")
            .column_as(warehouse::Column::Name, "warehouse_name")
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> purchase::ActiveModel {
        purchase::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            vendor_uuid: Set(input.vendor_uuid),
            warehouse_uuid: Set(input.warehouse_uuid),
            date: Set(input.date),
            payment_mode: Set(input.payment_mode),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(model: purchase::Model, patch: Self::Update) -> purchase::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(vendor_uuid) = patch.vendor_uuid {
            row.vendor_uuid = Set(Some(vendor_uuid));
        }
        if let Some(warehouse_uuid) = patch.warehouse_uuid {
            row.warehouse_uuid = Set(Some(warehouse_uuid));
        }
        if let Some(date) = patch.date {
            row.date = Set(date);
        }
        if let Some(payment_mode) = patch.payment_mode {
            row.payment_mode = Set(Some(payment_mode));
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &purchase::Model) -> Uuid {
        model.uuid
    }

    fn decorate(row: &mut Self::Read) {
        row.purchase_id = display_code("SP", row.id, row.created_at);
    }
}

// ----------------------------------------------------------- purchase return

pub struct PurchaseReturn;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct PurchaseReturnRead {
    pub id: i32,
    /// Derived display code `SPR<YY>-<seq>`, never stored.
    #[sea_orm(skip)]
    pub purchase_return_id: String,
    pub uuid: Uuid,
    pub purchase_uuid: Uuid,
    pub warehouse_uuid: Option<Uuid>,
    pub warehouse_name: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
    /// Line entries, grouped in after the main query.
    #[sea_orm(skip)]
    pub purchase_return_entry: Vec<PurchaseReturnEntryRead>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseReturnCreate {
    pub uuid: Option<Uuid>,
    pub purchase_uuid: Uuid,
    pub warehouse_uuid: Option<Uuid>,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseReturnUpdate {
    pub warehouse_uuid: Option<Uuid>,
    pub remarks: Option<String>,
}

#[async_trait]
impl CrudResource for PurchaseReturn {
    type Entity = purchase_return::Entity;
    type Read = PurchaseReturnRead;
    type Create = PurchaseReturnCreate;
    type Update = PurchaseReturnUpdate;

    const NAME: &'static str = "purchase return";

    fn uuid_column() -> purchase_return::Column {
        purchase_return::Column::Uuid
    }

    fn order_column() -> purchase_return::Column {
        purchase_return::Column::CreatedAt
    }

    fn read_select() -> Select<purchase_return::Entity> {
        purchase_return::Entity::find()
            .join(JoinType::LeftJoin, purchase_return::Relation::Warehouse.def())
            .join(JoinType::LeftJoin, purchase_return::Relation::CreatedBy.def())
            .column_as(warehouse::Column::Name, "warehouse_name")
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> purchase_return::ActiveModel {
        purchase_return::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            purchase_uuid: Set(input.purchase_uuid),
            warehouse_uuid: Set(input.warehouse_uuid),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: purchase_return::Model,
        patch: Self::Update,
    ) -> purchase_return::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(warehouse_uuid) = patch.warehouse_uuid {
            row.warehouse_uuid = Set(Some(warehouse_uuid));
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &purchase_return::Model) -> Uuid {
        model.uuid
    }

    fn decorate(row: &mut Self::Read) {
        row.purchase_return_id = display_code("SPR", row.id, row.created_at);
    }

    async fn attach_children(
        db: &DatabaseConnection,
        rows: &mut [Self::Read],
    ) -> Result<(), ApiError> {
        if rows.is_empty() {
            return Ok(());
        }
        let parents: Vec<Uuid> = rows.iter().map(|row| row.uuid).collect();

        let children = PurchaseReturnEntry::read_select()
            .filter(purchase_return_entry::Column::PurchaseReturnUuid.is_in(parents))
            .into_model::<PurchaseReturnEntryRead>()
            .all(db)
            .await
            .map_err(ApiError::from_db)?;

        let mut grouped: HashMap<Uuid, Vec<PurchaseReturnEntryRead>> = HashMap::new();
        for child in children {
            grouped
                .entry(child.purchase_return_uuid)
                .or_default()
                .push(child);
        }
        for row in rows.iter_mut() {
            row.purchase_return_entry = grouped.remove(&row.uuid).unwrap_or_default();
        }
        Ok(())
    }
}

// ----------------------------------------------------- purchase return entry

pub struct PurchaseReturnEntry;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct PurchaseReturnEntryRead {
    pub id: i32,
    pub uuid: Uuid,
    pub purchase_return_uuid: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: Option<Decimal>,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseReturnEntryCreate {
    pub uuid: Option<Uuid>,
    pub purchase_return_uuid: Uuid,
    #[validate(length(min = 1))]
    pub product_name: String,
    #[validate(range(min = 1))]
    pub quantity: i32,
    pub unit_price: Option<Decimal>,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PurchaseReturnEntryUpdate {
    #[validate(length(min = 1))]
    pub product_name: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: Option<i32>,
    pub unit_price: Option<Decimal>,
    pub remarks: Option<String>,
}

impl CrudResource for PurchaseReturnEntry {
    type Entity = purchase_return_entry::Entity;
    type Read = PurchaseReturnEntryRead;
    type Create = PurchaseReturnEntryCreate;
    type Update = PurchaseReturnEntryUpdate;

    const NAME: &'static str = "purchase return entry";

    fn uuid_column() -> purchase_return_entry::Column {
        purchase_return_entry::Column::Uuid
    }

    fn order_column() -> purchase_return_entry::Column {
        purchase_return_entry::Column::CreatedAt
    }

    fn parent_column() -> Option<purchase_return_entry::Column> {
        Some(purchase_return_entry::Column::PurchaseReturnUuid)
    }

    fn read_select() -> Select<purchase_return_entry::Entity> {
        purchase_return_entry::Entity::find()
            .join(
                JoinType::LeftJoin,
                purchase_return_entry::Relation::CreatedBy.def(),
            )
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> purchase_return_entry::ActiveModel {
        purchase_return_entry::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            purchase_return_uuid: Set(input.purchase_return_uuid),
            product_name: Set(input.product_name),
            quantity: Set(input.quantity),
            unit_price: Set(input.unit_price),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: purchase_return_entry::Model,
        patch: Self::Update,
    ) -> purchase_return_entry::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(product_name) = patch.product_name {
            row.product_name = Set(product_name);
        }
        if let Some(quantity) = patch.quantity {
            row.quantity = Set(quantity);
        }
        if let Some(unit_price) = patch.unit_price {
            row.unit_price = Set(Some(unit_price));
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &purchase_return_entry::Model) -> Uuid {
        model.uuid
    }
}

// ------------------------------------------------------------ composite read

const PURCHASE_RETURN_DETAILS: CompositeRead = CompositeRead {
    parent_path: "/store/purchase-return",
    children_path: "/store/purchase-return-entry/by",
    children_field: "purchase_return_entry",
};

/// Purchase return joined with its line entries through the module's own
/// endpoints.
pub async fn purchase_return_details(
    State(state): State<AppState>,
    Path(purchase_return_uuid): Path<Uuid>,
) -> Result<Response, ApiError> {
    let data = PURCHASE_RETURN_DETAILS
        .fetch(
            &state.http,
            &state.config.internal_base_url(),
            purchase_return_uuid,
        )
        .await?;
    Ok(Envelope::ok(ToastKind::Select, "purchase return details", data).into_response())
}
