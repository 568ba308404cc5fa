//! Generic store operations over any [`CrudResource`].
//!
//! Not-found policy is uniform: any operation addressing a uuid that
//! matches zero rows fails with 404 instead of answering success with an
//! empty result.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::instrument;
use uuid::Uuid;

use super::CrudResource;
use crate::errors::ApiError;

/// Insert a new row. The store assigns `id` and the audit stamps.
#[instrument(skip_all, fields(resource = R::NAME))]
pub async fn insert<R: CrudResource>(
    db: &DatabaseConnection,
    input: R::Create,
) -> Result<<R::Entity as EntityTrait>::Model, ApiError> {
    R::create_model(input)
        .insert(db)
        .await
        .map_err(ApiError::from_db)
}

/// Patch the row addressed by `uuid`. Fails with 404 when it does not
/// exist; `updated_at` is refreshed by the audit-stamp behavior.
#[instrument(skip_all, fields(resource = R::NAME, %uuid))]
pub async fn update<R: CrudResource>(
    db: &DatabaseConnection,
    uuid: Uuid,
    patch: R::Update,
) -> Result<<R::Entity as EntityTrait>::Model, ApiError> {
    let current = find_by_uuid::<R>(db, uuid).await?;
    R::apply_update(current, patch)
        .update(db)
        .await
        .map_err(ApiError::from_db)
}

/// Delete the row addressed by `uuid`, returning it as it was stored.
#[instrument(skip_all, fields(resource = R::NAME, %uuid))]
pub async fn remove<R: CrudResource>(
    db: &DatabaseConnection,
    uuid: Uuid,
) -> Result<<R::Entity as EntityTrait>::Model, ApiError> {
    let current = find_by_uuid::<R>(db, uuid).await?;
    let result = R::Entity::delete_many()
        .filter(R::uuid_column().eq(uuid))
        .exec(db)
        .await
        .map_err(ApiError::from_db)?;
    // the row may have been deleted between the fetch and the exec
    if result.rows_affected == 0 {
        return Err(ApiError::not_found(R::NAME, uuid));
    }
    Ok(current)
}

/// Joined read of a single row.
#[instrument(skip_all, fields(resource = R::NAME, %uuid))]
pub async fn select<R: CrudResource>(
    db: &DatabaseConnection,
    uuid: Uuid,
) -> Result<R::Read, ApiError> {
    let mut rows = R::read_select()
        .filter(R::uuid_column().eq(uuid))
        .into_model::<R::Read>()
        .all(db)
        .await
        .map_err(ApiError::from_db)?;

    if rows.is_empty() {
        return Err(ApiError::not_found(R::NAME, uuid));
    }

    finish::<R>(db, &mut rows).await?;
    Ok(rows.swap_remove(0))
}

/// Joined read of every row, newest first. An empty table yields an empty
/// list, never null.
#[instrument(skip_all, fields(resource = R::NAME))]
pub async fn select_all<R: CrudResource>(
    db: &DatabaseConnection,
) -> Result<Vec<R::Read>, ApiError> {
    let mut rows = R::read_select()
        .order_by_desc(R::order_column())
        .into_model::<R::Read>()
        .all(db)
        .await
        .map_err(ApiError::from_db)?;

    finish::<R>(db, &mut rows).await?;
    Ok(rows)
}

/// Joined read of the rows owned by `parent_uuid`.
#[instrument(skip_all, fields(resource = R::NAME, %parent_uuid))]
pub async fn list_by_parent<R: CrudResource>(
    db: &DatabaseConnection,
    parent_uuid: Uuid,
) -> Result<Vec<R::Read>, ApiError> {
    let parent_column = R::parent_column().ok_or_else(|| {
        ApiError::Internal(format!("{} has no parent listing", R::NAME))
    })?;

    let mut rows = R::read_select()
        .filter(parent_column.eq(parent_uuid))
        .order_by_desc(R::order_column())
        .into_model::<R::Read>()
        .all(db)
        .await
        .map_err(ApiError::from_db)?;

    finish::<R>(db, &mut rows).await?;
    Ok(rows)
}

async fn find_by_uuid<R: CrudResource>(
    db: &DatabaseConnection,
    uuid: Uuid,
) -> Result<<R::Entity as EntityTrait>::Model, ApiError> {
    R::Entity::find()
        .filter(R::uuid_column().eq(uuid))
        .one(db)
        .await
        .map_err(ApiError::from_db)?
        .ok_or_else(|| ApiError::not_found(R::NAME, uuid))
}

async fn finish<R: CrudResource>(
    db: &DatabaseConnection,
    rows: &mut Vec<R::Read>,
) -> Result<(), ApiError> {
    for row in rows.iter_mut() {
        R::decorate(row);
    }
    R::attach_children(db, rows).await
}
