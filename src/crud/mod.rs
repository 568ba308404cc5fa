//! The table-driven CRUD engine.
//!
//! One generic implementation of insert / update / remove / select /
//! selectAll / list-by-parent serves every entity in the API; each entity
//! contributes a declarative [`CrudResource`] configuration (read
//! projection, DTO mapping, ordering, optional parent column, display-code
//! decoration, child attachment) instead of its own handler set.

pub mod composite;
pub mod display_code;
pub mod engine;

use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{
    ActiveModelBehavior, DatabaseConnection, EntityTrait, FromQueryResult, IntoActiveModel,
    Select,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::errors::ApiError;

/// Operation discriminant carried in every toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Insert,
    Update,
    Delete,
    Select,
}

/// Status/message envelope field returned with every response, intended
/// for client-side notification display.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct Toast {
    #[schema(example = 200)]
    pub status: u16,
    #[serde(rename = "type")]
    pub kind: ToastKind,
    #[schema(example = "department list")]
    pub message: String,
}

/// Uniform response envelope: a toast plus the operation's data payload.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub toast: Toast,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(kind: ToastKind, message: impl Into<String>, data: T) -> Self {
        Self {
            toast: Toast {
                status: StatusCode::OK.as_u16(),
                kind,
                message: message.into(),
            },
            data,
        }
    }

    pub fn created(kind: ToastKind, message: impl Into<String>, data: T) -> Self {
        Self {
            toast: Toast {
                status: StatusCode::CREATED.as_u16(),
                kind,
                message: message.into(),
            },
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.toast.status).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}

/// Per-entity configuration consumed by the generic engine.
///
/// Implementations are declarative: they name columns, build the joined
/// read projection, and map DTOs onto active models. All control flow
/// (lookup, 404 policy, ordering, decoration, child attachment) lives in
/// [`engine`].
#[async_trait]
pub trait CrudResource: Send + Sync + 'static
where
    <Self::Entity as EntityTrait>::Model:
        IntoActiveModel<<Self::Entity as EntityTrait>::ActiveModel> + Serialize + Send + Sync,
    <Self::Entity as EntityTrait>::ActiveModel: ActiveModelBehavior + Send,
{
    type Entity: EntityTrait;

    /// Joined read projection row. Entities without joins use the model
    /// itself.
    type Read: FromQueryResult + Serialize + Send + Sync + 'static;

    /// Insert payload, validated before any store operation runs.
    type Create: DeserializeOwned + Validate + Send + 'static;

    /// Partial update payload; absent fields leave the row untouched.
    type Update: DeserializeOwned + Validate + Send + 'static;

    /// Resource name used in toasts, tracing spans, and error messages.
    const NAME: &'static str;

    fn uuid_column() -> <Self::Entity as EntityTrait>::Column;

    /// Listing order column, newest first. `created_at` everywhere.
    fn order_column() -> <Self::Entity as EntityTrait>::Column;

    /// Column referencing the owning parent, for `by/{parent_uuid}`
    /// listings. `None` for entities without one.
    fn parent_column() -> Option<<Self::Entity as EntityTrait>::Column> {
        None
    }

    /// Base read projection: the entity's own columns plus left-joined
    /// display names. References may dangle, so joined names are optional.
    fn read_select() -> Select<Self::Entity>;

    /// Build the insert model from a validated create payload.
    fn create_model(input: Self::Create) -> <Self::Entity as EntityTrait>::ActiveModel;

    /// Apply a partial update onto the stored row.
    fn apply_update(
        model: <Self::Entity as EntityTrait>::Model,
        patch: Self::Update,
    ) -> <Self::Entity as EntityTrait>::ActiveModel;

    /// The row's external correlation key, used in toast messages.
    fn model_uuid(model: &<Self::Entity as EntityTrait>::Model) -> Uuid;

    /// Derived fields computed after the row leaves the store (display
    /// codes). Default: nothing to derive.
    fn decorate(_row: &mut Self::Read) {}

    /// Attach child rows as an array field on the read projection. The
    /// field must end up `[]` when no children exist, never null.
    async fn attach_children(
        _db: &DatabaseConnection,
        _rows: &mut [Self::Read],
    ) -> Result<(), ApiError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_serializes_with_type_field() {
        let toast = Toast {
            status: 201,
            kind: ToastKind::Insert,
            message: "abc inserted".into(),
        };
        let value = serde_json::to_value(&toast).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"status": 201, "type": "insert", "message": "abc inserted"})
        );
    }

    #[test]
    fn envelope_carries_data_verbatim() {
        let env = Envelope::ok(ToastKind::Select, "rows", vec![1, 2, 3]);
        let value = serde_json::to_value(&env).unwrap();
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
        assert_eq!(value["toast"]["status"], 200);
    }
}
