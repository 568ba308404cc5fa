//! HR resources: organizational structure, people, and leave
//! configuration, plus the configuration composite read.

use std::collections::HashMap;

use async_trait::async_trait;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
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
    crud::{composite::CompositeRead, CrudResource, Envelope, ToastKind},
    entities::hr::{
        configuration, configuration_entry, department, designation, employee, leave_category,
        leave_policy,
    },
    errors::ApiError,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/department", crud_router::<Department>())
        .nest("/designation", crud_router::<Designation>())
        .nest("/employee", crud_router::<Employee>())
        .nest("/leave-policy", crud_router::<LeavePolicy>())
        .nest("/leave-category", crud_router::<LeaveCategory>())
        .nest(
            "/configuration",
            crud_router::<Configuration>()
                .route("/details/:configuration_uuid", get(configuration_details)),
        )
        .nest(
            "/configuration-entry",
            crud_router::<ConfigurationEntry>().route(
                "/by/:configuration_uuid",
                get(list_by_parent::<ConfigurationEntry>),
            ),
        )
}

// ---------------------------------------------------------------- department

pub struct Department;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct DepartmentRead {
    pub id: i32,
    pub uuid: Uuid,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DepartmentCreate {
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1))]
    pub department: String,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DepartmentUpdate {
    #[validate(length(min = 1))]
    pub department: Option<String>,
    pub remarks: Option<String>,
}

impl CrudResource for Department {
    type Entity = department::Entity;
    type Read = DepartmentRead;
    type Create = DepartmentCreate;
    type Update = DepartmentUpdate;

    const NAME: &'static str = "department";

    fn uuid_column() -> department::Column {
        department::Column::Uuid
    }

    fn order_column() -> department::Column {
        department::Column::CreatedAt
    }

    fn read_select() -> Select<department::Entity> {
        department::Entity::find()
    }

    fn create_model(input: Self::Create) -> department::ActiveModel {
        department::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            department: Set(input.department),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: department::Model,
        patch: Self::Update,
    ) -> department::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(department) = patch.department {
            row.department = Set(department);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &department::Model) -> Uuid {
        model.uuid
    }
}

// --------------------------------------------------------------- designation

pub struct Designation;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct DesignationRead {
    pub id: i32,
    pub uuid: Uuid,
    pub designation: String,
    pub department_uuid: Option<Uuid>,
    pub department_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DesignationCreate {
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1))]
    pub designation: String,
    pub department_uuid: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DesignationUpdate {
    #[validate(length(min = 1))]
    pub designation: Option<String>,
    pub department_uuid: Option<Uuid>,
    pub remarks: Option<String>,
}

impl CrudResource for Designation {
    type Entity = designation::Entity;
    type Read = DesignationRead;
    type Create = DesignationCreate;
    type Update = DesignationUpdate;

    const NAME: &'static str = "designation";

    fn uuid_column() -> designation::Column {
        designation::Column::Uuid
    }

    fn order_column() -> designation::Column {
        designation::Column::CreatedAt
    }

    fn read_select() -> Select<designation::Entity> {
        designation::Entity::find()
            .join(JoinType::LeftJoin, designation::Relation::Department.def())
            .column_as(department::Column::Department, "department_name")
    }

    fn create_model(input: Self::Create) -> designation::ActiveModel {
        designation::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            designation: Set(input.designation),
            department_uuid: Set(input.department_uuid),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: designation::Model,
        patch: Self::Update,
    ) -> designation::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(designation) = patch.designation {
            row.designation = Set(designation);
        }
        if let Some(department_uuid) = patch.department_uuid {
            row.department_uuid = Set(Some(department_uuid));
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &designation::Model) -> Uuid {
        model.uuid
    }
}

// ------------------------------------------------------------------ employee

pub struct Employee;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct EmployeeRead {
    pub id: i32,
    pub uuid: Uuid,
    pub name: String,
    pub email: String,
    pub designation_uuid: Option<Uuid>,
    pub designation_name: Option<String>,
    pub department_uuid: Option<Uuid>,
    pub department_name: Option<String>,
    pub ext: Option<String>,
    pub phone: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

fn default_employee_status() -> String {
    "active".to_string()
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EmployeeCreate {
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub designation_uuid: Option<Uuid>,
    pub department_uuid: Option<Uuid>,
    pub ext: Option<String>,
    pub phone: Option<String>,
    #[serde(default = "default_employee_status")]
    pub status: String,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EmployeeUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub designation_uuid: Option<Uuid>,
    pub department_uuid: Option<Uuid>,
    pub ext: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
    pub remarks: Option<String>,
}

impl CrudResource for Employee {
    type Entity = employee::Entity;
    type Read = EmployeeRead;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;

    const NAME: &'static str = "employee";

    fn uuid_column() -> employee::Column {
        employee::Column::Uuid
    }

    fn order_column() -> employee::Column {
        employee::Column::CreatedAt
    }

    fn read_select() -> Select<employee::Entity> {
        employee::Entity::find()
            .join(JoinType::LeftJoin, employee::Relation::Designation.def())
            .join(JoinType::LeftJoin, employee::Relation::Department.def())
            .column_as(designation::Column::Designation, "designation_name")
            .column_as(department::Column::Department, "department_name")
    }

    fn create_model(input: Self::Create) -> employee::ActiveModel {
        employee::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            name: Set(input.name),
            email: Set(input.email),
            designation_uuid: Set(input.designation_uuid),
            department_uuid: Set(input.department_uuid),
            ext: Set(input.ext),
            phone: Set(input.phone),
            status: Set(input.status),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(model: employee::Model, patch: Self::Update) -> employee::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(name) = patch.name {
            row.name = Set(name);
        }
        if let Some(email) = patch.email {
            row.email = Set(email);
        }
        if let Some(designation_uuid) = patch.designation_uuid {
            row.designation_uuid = Set(Some(designation_uuid));
        }
        if let Some(department_uuid) = patch.department_uuid {
            row.department_uuid = Set(Some(department_uuid));
        }
        if let Some(ext) = patch.ext {
            row.ext = Set(Some(ext));
        }
        if let Some(phone) = patch.phone {
            row.phone = Set(Some(phone));
        }
        if let Some(status) = patch.status {
            row.status = Set(status);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &employee::Model) -> Uuid {
        model.uuid
    }
}

// -------------------------------------------------------------- leave policy

pub struct LeavePolicy;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct LeavePolicyRead {
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
pub struct LeavePolicyCreate {
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1))]
    pub name: String,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LeavePolicyUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub remarks: Option<String>,
}

impl CrudResource for LeavePolicy {
    type Entity = leave_policy::Entity;
    type Read = LeavePolicyRead;
    type Create = LeavePolicyCreate;
    type Update = LeavePolicyUpdate;

    const NAME: &'static str = "leave policy";

    fn uuid_column() -> leave_policy::Column {
        leave_policy::Column::Uuid
    }

    fn order_column() -> leave_policy::Column {
        leave_policy::Column::CreatedAt
    }

    fn read_select() -> Select<leave_policy::Entity> {
        leave_policy::Entity::find()
            .join(JoinType::LeftJoin, leave_policy::Relation::CreatedBy.def())
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> leave_policy::ActiveModel {
        leave_policy::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            name: Set(input.name),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: leave_policy::Model,
        patch: Self::Update,
    ) -> leave_policy::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(name) = patch.name {
            row.name = Set(name);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &leave_policy::Model) -> Uuid {
        model.uuid
    }
}

// ------------------------------------------------------------ leave category

pub struct LeaveCategory;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct LeaveCategoryRead {
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
pub struct LeaveCategoryCreate {
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1))]
    pub name: String,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LeaveCategoryUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub remarks: Option<String>,
}

impl CrudResource for LeaveCategory {
    type Entity = leave_category::Entity;
    type Read = LeaveCategoryRead;
    type Create = LeaveCategoryCreate;
    type Update = LeaveCategoryUpdate;

    const NAME: &'static str = "leave category";

    fn uuid_column() -> leave_category::Column {
        leave_category::Column::Uuid
    }

    fn order_column() -> leave_category::Column {
        leave_category::Column::CreatedAt
    }

    fn read_select() -> Select<leave_category::Entity> {
        leave_category::Entity::find()
            .join(JoinType::LeftJoin, leave_category::Relation::CreatedBy.def())
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> leave_category::ActiveModel {
        leave_category::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            name: Set(input.name),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: leave_category::Model,
        patch: Self::Update,
    ) -> leave_category::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(name) = patch.name {
            row.name = Set(name);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &leave_category::Model) -> Uuid {
        model.uuid
    }
}

// ------------------------------------------------------------- configuration

pub struct Configuration;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct ConfigurationRead {
    pub id: i32,
    pub uuid: Uuid,
    pub leave_policy_uuid: Option<Uuid>,
    pub leave_policy_name: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
    /// Per-category entries, `[]` when the configuration has none.
    #[sea_orm(skip)]
    pub configuration_entry: Vec<ConfigurationEntryRead>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfigurationCreate {
    pub uuid: Option<Uuid>,
    pub leave_policy_uuid: Option<Uuid>,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfigurationUpdate {
    pub leave_policy_uuid: Option<Uuid>,
    pub remarks: Option<String>,
}

#[async_trait]
impl CrudResource for Configuration {
    type Entity = configuration::Entity;
    type Read = ConfigurationRead;
    type Create = ConfigurationCreate;
    type Update = ConfigurationUpdate;

    const NAME: &'static str = "configuration";

    fn uuid_column() -> configuration::Column {
        configuration::Column::Uuid
    }

    fn order_column() -> configuration::Column {
        configuration::Column::CreatedAt
    }

    fn read_select() -> Select<configuration::Entity> {
        configuration::Entity::find()
            .join(JoinType::LeftJoin, configuration::Relation::LeavePolicy.def())
            .join(JoinType::LeftJoin, configuration::Relation::CreatedBy.def())
            .column_as(leave_policy::Column::Name, "leave_policy_name")
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> configuration::ActiveModel {
        configuration::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            leave_policy_uuid: Set(input.leave_policy_uuid),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: configuration::Model,
        patch: Self::Update,
    ) -> configuration::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(leave_policy_uuid) = patch.leave_policy_uuid {
            row.leave_policy_uuid = Set(Some(leave_policy_uuid));
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &configuration::Model) -> Uuid {
        model.uuid
    }

    async fn attach_children(
        db: &DatabaseConnection,
        rows: &mut [Self::Read],
    ) -> Result<(), ApiError> {
        if rows.is_empty() {
            return Ok(());
        }
        let parents: Vec<Uuid> = rows.iter().map(|row| row.uuid).collect();

        let children = ConfigurationEntry::read_select()
            .filter(configuration_entry::Column::ConfigurationUuid.is_in(parents))
            .into_model::<ConfigurationEntryRead>()
            .all(db)
            .await
            .map_err(ApiError::from_db)?;

        let mut grouped: HashMap<Uuid, Vec<ConfigurationEntryRead>> = HashMap::new();
        for child in children {
            grouped
                .entry(child.configuration_uuid)
                .or_default()
                .push(child);
        }
        for row in rows.iter_mut() {
            row.configuration_entry = grouped.remove(&row.uuid).unwrap_or_default();
        }
        Ok(())
    }
}

// ------------------------------------------------------- configuration entry

pub struct ConfigurationEntry;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct ConfigurationEntryRead {
    pub id: i32,
    pub uuid: Uuid,
    pub configuration_uuid: Uuid,
    pub leave_category_uuid: Option<Uuid>,
    pub leave_category_name: Option<String>,
    pub maximum_number_of_allowed_leaves: i32,
    pub enable_earned_leave: bool,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfigurationEntryCreate {
    pub uuid: Option<Uuid>,
    pub configuration_uuid: Uuid,
    pub leave_category_uuid: Option<Uuid>,
    #[validate(range(min = 0))]
    pub maximum_number_of_allowed_leaves: i32,
    #[serde(default)]
    pub enable_earned_leave: bool,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ConfigurationEntryUpdate {
    pub leave_category_uuid: Option<Uuid>,
    #[validate(range(min = 0))]
    pub maximum_number_of_allowed_leaves: Option<i32>,
    pub enable_earned_leave: Option<bool>,
    pub remarks: Option<String>,
}

impl CrudResource for ConfigurationEntry {
    type Entity = configuration_entry::Entity;
    type Read = ConfigurationEntryRead;
    type Create = ConfigurationEntryCreate;
    type Update = ConfigurationEntryUpdate;

    const NAME: &'static str = "configuration entry";

    fn uuid_column() -> configuration_entry::Column {
        configuration_entry::Column::Uuid
    }

    fn order_column() -> configuration_entry::Column {
        configuration_entry::Column::CreatedAt
    }

    fn parent_column() -> Option<configuration_entry::Column> {
        Some(configuration_entry::Column::ConfigurationUuid)
    }

    fn read_select() -> Select<configuration_entry::Entity> {
        configuration_entry::Entity::find()
            .join(
                JoinType::LeftJoin,
                configuration_entry::Relation::LeaveCategory.def(),
            )
            .join(
                JoinType::LeftJoin,
                configuration_entry::Relation::CreatedBy.def(),
            )
            .column_as(leave_category::Column::Name, "leave_category_name")
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> configuration_entry::ActiveModel {
        configuration_entry::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            configuration_uuid: Set(input.configuration_uuid),
            leave_category_uuid: Set(input.leave_category_uuid),
            maximum_number_of_allowed_leaves: Set(input.maximum_number_of_allowed_leaves),
            enable_earned_leave: Set(input.enable_earned_leave),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: configuration_entry::Model,
        patch: Self::Update,
    ) -> configuration_entry::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(leave_category_uuid) = patch.leave_category_uuid {
            row.leave_category_uuid = Set(Some(leave_category_uuid));
        }
        if let Some(maximum) = patch.maximum_number_of_allowed_leaves {
            row.maximum_number_of_allowed_leaves = Set(maximum);
        }
        if let Some(enable_earned_leave) = patch.enable_earned_leave {
            row.enable_earned_leave = Set(enable_earned_leave);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &configuration_entry::Model) -> Uuid {
        model.uuid
    }
}

// ------------------------------------------------------------ composite read

const CONFIGURATION_DETAILS: CompositeRead = CompositeRead {
    parent_path: "/hr/configuration",
    children_path: "/hr/configuration-entry/by",
    children_field: "configuration_entry",
};

/// Configuration header joined with its entries through the sibling
/// route module's own endpoints.
pub async fn configuration_details(
    State(state): State<AppState>,
    Path(configuration_uuid): Path<Uuid>,
) -> Result<Response, ApiError> {
    let data = CONFIGURATION_DETAILS
        .fetch(
            &state.http,
            &state.config.internal_base_url(),
            configuration_uuid,
        )
        .await?;
    Ok(Envelope::ok(ToastKind::Select, "configuration details", data).into_response())
}
