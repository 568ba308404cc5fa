//! Work resources: problems, service intake, work orders, diagnoses, and
//! the intake composite read.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Alias, Expr},
    ActiveValue::Set,
    EntityTrait, FromQueryResult, IntoActiveModel, JoinType, QuerySelect, RelationTrait,
    Select,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::{crud_router, list_by_parent};
use crate::{
    crud::{composite::CompositeRead, display_code::display_code, CrudResource, Envelope, ToastKind},
    entities::hr::employee,
    entities::work::{diagnosis, info, order, problem},
    errors::ApiError,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/problem", crud_router::<Problem>())
        .nest(
            "/info",
            crud_router::<WorkInfo>().route("/details/:info_uuid", get(info_details)),
        )
        .nest(
            "/order",
            crud_router::<WorkOrder>().route("/by/:info_uuid", get(list_by_parent::<WorkOrder>)),
        )
        .nest(
            "/diagnosis",
            crud_router::<Diagnosis>()
                .route("/by/:order_uuid", get(list_by_parent::<Diagnosis>)),
        )
}

// ------------------------------------------------------------------- problem

pub struct Problem;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct ProblemRead {
    pub id: i32,
    pub uuid: Uuid,
    pub name: String,
    pub category: String,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProblemCreate {
    pub uuid: Option<Uuid>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub category: String,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ProblemUpdate {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    pub remarks: Option<String>,
}

impl CrudResource for Problem {
    type Entity = problem::Entity;
    type Read = ProblemRead;
    type Create = ProblemCreate;
    type Update = ProblemUpdate;

    const NAME: &'static str = "work problem";

    fn uuid_column() -> problem::Column {
        problem::Column::Uuid
    }

    fn order_column() -> problem::Column {
        problem::Column::CreatedAt
    }

    fn read_select() -> Select<problem::Entity> {
        problem::Entity::find()
            .join(JoinType::LeftJoin, problem::Relation::CreatedBy.def())
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> problem::ActiveModel {
        problem::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            name: Set(input.name),
            category: Set(input.category),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(model: problem::Model, patch: Self::Update) -> problem::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(name) = patch.name {
            row.name = Set(name);
        }
        if let Some(category) = patch.category {
            row.category = Set(category);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &problem::Model) -> Uuid {
        model.uuid
    }
}

// ----------------------------------------------------------------- work info

pub struct WorkInfo;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct WorkInfoRead {
    pub id: i32,
    /// Derived display code `WI<YY>-<seq>`, never stored.
    #[sea_orm(skip)]
    pub info_id: String,
    pub uuid: Uuid,
    pub user_uuid: Option<Uuid>,
    pub user_name: Option<String>,
    pub received_date: DateTime<Utc>,
    pub is_product_received: bool,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkInfoCreate {
    pub uuid: Option<Uuid>,
    pub user_uuid: Option<Uuid>,
    pub received_date: DateTime<Utc>,
    #[serde(default)]
    pub is_product_received: bool,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkInfoUpdate {
    pub user_uuid: Option<Uuid>,
    pub received_date: Option<DateTime<Utc>>,
    pub is_product_received: Option<bool>,
    pub remarks: Option<String>,
}

impl CrudResource for WorkInfo {
    type Entity = info::Entity;
    type Read = WorkInfoRead;
    type Create = WorkInfoCreate;
    type Update = WorkInfoUpdate;

    const NAME: &'static str = "work info";

    fn uuid_column() -> info::Column {
        info::Column::Uuid
    }

    fn order_column() -> info::Column {
        info::Column::CreatedAt
    }

    fn read_select() -> Select<info::Entity> {
        // The employee table backs both the service user and the author,
        // so the first join needs an alias.
        info::Entity::find()
            .join_as(
                JoinType::LeftJoin,
                info::Relation::User.def(),
                Alias::new("user"),
            )
            .join(JoinType::LeftJoin, info::Relation::CreatedBy.def())
            .column_as(
                Expr::col((Alias::new("user"), employee::Column::Name)),
                "user_name",
            )
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> info::ActiveModel {
        info::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            user_uuid: Set(input.user_uuid),
            received_date: Set(input.received_date),
            is_product_received: Set(input.is_product_received),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(model: info::Model, patch: Self::Update) -> info::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(user_uuid) = patch.user_uuid {
            row.user_uuid = Set(Some(user_uuid));
        }
        if let Some(received_date) = patch.received_date {
            row.received_date = Set(received_date);
        }
        if let Some(is_product_received) = patch.is_product_received {
            row.is_product_received = Set(is_product_received);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &info::Model) -> Uuid {
        model.uuid
    }

    fn decorate(row: &mut Self::Read) {
        row.info_id = display_code("WI", row.id, row.created_at);
    }
}

// ---------------------------------------------------------------- work order

pub struct WorkOrder;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct WorkOrderRead {
    pub id: i32,
    /// Derived display code `WO<YY>-<seq>`, never stored.
    #[sea_orm(skip)]
    pub order_id: String,
    pub uuid: Uuid,
    pub info_uuid: Uuid,
    pub problem_uuid: Option<Uuid>,
    pub problem_name: Option<String>,
    pub problem_statement: Option<String>,
    pub accessories: Option<String>,
    pub is_diagnosis_need: bool,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkOrderCreate {
    pub uuid: Option<Uuid>,
    pub info_uuid: Uuid,
    pub problem_uuid: Option<Uuid>,
    pub problem_statement: Option<String>,
    pub accessories: Option<String>,
    #[serde(default)]
    pub is_diagnosis_need: bool,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct WorkOrderUpdate {
    pub problem_uuid: Option<Uuid>,
    pub problem_statement: Option<String>,
    pub accessories: Option<String>,
    pub is_diagnosis_need: Option<bool>,
    pub remarks: Option<String>,
}

impl CrudResource for WorkOrder {
    type Entity = order::Entity;
    type Read = WorkOrderRead;
    type Create = WorkOrderCreate;
    type Update = WorkOrderUpdate;

    const NAME: &'static str = "work order";

    fn uuid_column() -> order::Column {
        order::Column::Uuid
    }

    fn order_column() -> order::Column {
        order::Column::CreatedAt
    }

    fn parent_column() -> Option<order::Column> {
        Some(order::Column::InfoUuid)
    }

    fn read_select() -> Select<order::Entity> {
        order::Entity::find()
            .join(JoinType::LeftJoin, order::Relation::Problem.def())
            .join(JoinType::LeftJoin, order::Relation::CreatedBy.def())
            .column_as(problem::Column::Name, "problem_name")
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> order::ActiveModel {
        order::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            info_uuid: Set(input.info_uuid),
            problem_uuid: Set(input.problem_uuid),
            problem_statement: Set(input.problem_statement),
            accessories: Set(input.accessories),
            is_diagnosis_need: Set(input.is_diagnosis_need),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(model: order::Model, patch: Self::Update) -> order::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(problem_uuid) = patch.problem_uuid {
            row.problem_uuid = Set(Some(problem_uuid));
        }
        if let Some(problem_statement) = patch.problem_statement {
            row.problem_statement = Set(Some(problem_statement));
        }
        if let Some(accessories) = patch.accessories {
            row.accessories = Set(Some(accessories));
        }
        if let Some(is_diagnosis_need) = patch.is_diagnosis_need {
            row.is_diagnosis_need = Set(is_diagnosis_need);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &order::Model) -> Uuid {
        model.uuid
    }

    fn decorate(row: &mut Self::Read) {
        row.order_id = display_code("WO", row.id, row.created_at);
    }
}

// ----------------------------------------------------------------- diagnosis

pub struct Diagnosis;

#[derive(Debug, Serialize, FromQueryResult, ToSchema)]
pub struct DiagnosisRead {
    pub id: i32,
    /// Derived display code `WD<YY>-<seq>`, never stored.
    #[sea_orm(skip)]
    pub diagnosis_id: String,
    pub uuid: Uuid,
    pub order_uuid: Uuid,
    pub problem_uuid: Option<Uuid>,
    pub problem_name: Option<String>,
    pub problem_statement: Option<String>,
    pub proposed_cost: Option<Decimal>,
    pub is_proceed_to_repair: bool,
    pub created_by: Option<Uuid>,
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DiagnosisCreate {
    pub uuid: Option<Uuid>,
    pub order_uuid: Uuid,
    pub problem_uuid: Option<Uuid>,
    pub problem_statement: Option<String>,
    pub proposed_cost: Option<Decimal>,
    #[serde(default)]
    pub is_proceed_to_repair: bool,
    pub created_by: Option<Uuid>,
    pub remarks: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DiagnosisUpdate {
    pub problem_uuid: Option<Uuid>,
    pub problem_statement: Option<String>,
    pub proposed_cost: Option<Decimal>,
    pub is_proceed_to_repair: Option<bool>,
    pub remarks: Option<String>,
}

impl CrudResource for Diagnosis {
    type Entity = diagnosis::Entity;
    type Read = DiagnosisRead;
    type Create = DiagnosisCreate;
    type Update = DiagnosisUpdate;

    const NAME: &'static str = "diagnosis";

    fn uuid_column() -> diagnosis::Column {
        diagnosis::Column::Uuid
    }

    fn order_column() -> diagnosis::Column {
        diagnosis::Column::CreatedAt
    }

    fn parent_column() -> Option<diagnosis::Column> {
        Some(diagnosis::Column::OrderUuid)
    }

    fn read_select() -> Select<diagnosis::Entity> {
        diagnosis::Entity::find()
            .join(JoinType::LeftJoin, diagnosis::Relation::Problem.def())
            .join(JoinType::LeftJoin, diagnosis::Relation::CreatedBy.def())
            .column_as(problem::Column::Name, "problem_name")
            .column_as(employee::Column::Name, "created_by_name")
    }

    fn create_model(input: Self::Create) -> diagnosis::ActiveModel {
        diagnosis::ActiveModel {
            uuid: Set(input.uuid.unwrap_or_else(Uuid::new_v4)),
            order_uuid: Set(input.order_uuid),
            problem_uuid: Set(input.problem_uuid),
            problem_statement: Set(input.problem_statement),
            proposed_cost: Set(input.proposed_cost),
            is_proceed_to_repair: Set(input.is_proceed_to_repair),
            created_by: Set(input.created_by),
            remarks: Set(input.remarks),
            ..Default::default()
        }
    }

    fn apply_update(
        model: diagnosis::Model,
        patch: Self::Update,
    ) -> diagnosis::ActiveModel {
        let mut row = model.into_active_model();
        if let Some(problem_uuid) = patch.problem_uuid {
            row.problem_uuid = Set(Some(problem_uuid));
        }
        if let Some(problem_statement) = patch.problem_statement {
            row.problem_statement = Set(Some(problem_statement));
        }
        if let Some(proposed_cost) = patch.proposed_cost {
            row.proposed_cost = Set(Some(proposed_cost));
        }
        if let Some(is_proceed_to_repair) = patch.is_proceed_to_repair {
            row.is_proceed_to_repair = Set(is_proceed_to_repair);
        }
        if let Some(remarks) = patch.remarks {
            row.remarks = Set(Some(remarks));
        }
        row
    }

    fn model_uuid(model: &diagnosis::Model) -> Uuid {
        model.uuid
    }

    fn decorate(row: &mut Self::Read) {
        row.diagnosis_id = display_code("WD", row.id, row.created_at);
    }
}

// ------------------------------------------------------------ composite read

const INFO_DETAILS: CompositeRead = CompositeRead {
    parent_path: "/work/info",
    children_path: "/work/order/by",
    children_field: "order_entry",
};

/// Service intake joined with its work orders through the sibling route
/// module's own endpoints.
pub async fn info_details(
    State(state): State<AppState>,
    Path(info_uuid): Path<Uuid>,
) -> Result<Response, ApiError> {
    let data = INFO_DETAILS
        .fetch(&state.http, &state.config.internal_base_url(), info_uuid)
        .await?;
    Ok(Envelope::ok(ToastKind::Select, "order details by info", data).into_response())
}
