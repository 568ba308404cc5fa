//! HTTP handlers.
//!
//! The five standard CRUD endpoints exist once, generic over
//! [`CrudResource`]; [`crud_router`] instantiates them per entity. The
//! module files (`hr`, `work`, `store`) hold the per-entity resource
//! configurations and the few non-uniform routes (by-parent listings,
//! composite detail reads).

pub mod health;
pub mod hr;
pub mod store;
pub mod work;

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    crud::{engine, CrudResource, Envelope, ToastKind},
    errors::ApiError,
    AppState,
};

/// Standard CRUD route set for one resource:
/// `GET /`, `POST /`, `GET|PUT|DELETE /{uuid}`.
pub fn crud_router<R: CrudResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route(
            "/:uuid",
            get(fetch::<R>).put(update::<R>).delete(remove::<R>),
        )
}

pub async fn create<R: CrudResource>(
    State(state): State<AppState>,
    Json(input): Json<R::Create>,
) -> Result<Response, ApiError> {
    input.validate()?;
    let row = engine::insert::<R>(&state.db, input).await?;
    let message = format!("{} inserted", R::model_uuid(&row));
    Ok(Envelope::created(ToastKind::Insert, message, vec![row]).into_response())
}

pub async fn update<R: CrudResource>(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
    Json(patch): Json<R::Update>,
) -> Result<Response, ApiError> {
    patch.validate()?;
    let row = engine::update::<R>(&state.db, uuid, patch).await?;
    let message = format!("{} updated", R::model_uuid(&row));
    Ok(Envelope::ok(ToastKind::Update, message, vec![row]).into_response())
}

pub async fn remove<R: CrudResource>(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Response, ApiError> {
    let row = engine::remove::<R>(&state.db, uuid).await?;
    let message = format!("{} deleted", R::model_uuid(&row));
    Ok(Envelope::ok(ToastKind::Delete, message, vec![row]).into_response())
}

pub async fn fetch<R: CrudResource>(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> Result<Response, ApiError> {
    let row = engine::select::<R>(&state.db, uuid).await?;
    Ok(Envelope::ok(ToastKind::Select, R::NAME, row).into_response())
}

pub async fn list<R: CrudResource>(
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let rows = engine::select_all::<R>(&state.db).await?;
    let message = format!("{} list", R::NAME);
    Ok(Envelope::ok(ToastKind::Select, message, rows).into_response())
}

pub async fn list_by_parent<R: CrudResource>(
    State(state): State<AppState>,
    Path(parent_uuid): Path<Uuid>,
) -> Result<Response, ApiError> {
    let rows = engine::list_by_parent::<R>(&state.db, parent_uuid).await?;
    let message = format!("{} list", R::NAME);
    Ok(Envelope::ok(ToastKind::Select, message, rows).into_response())
}
