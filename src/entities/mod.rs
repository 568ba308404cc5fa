//! Relational entities, grouped per business module the way the HTTP
//! surface is (`/hr`, `/work`, `/store`).
//!
//! Every table carries the same audit contract: `created_at` is stamped
//! once at insert, `updated_at` stays NULL until the first update and is
//! refreshed on every one after that. The [`audit_stamps`] macro installs
//! that behavior on each entity's `ActiveModel` so no handler has to
//! remember it.

pub mod hr;
pub mod store;
pub mod work;

/// Installs the shared audit-stamp `ActiveModelBehavior` on the entity
/// module it is invoked in.
macro_rules! audit_stamps {
    () => {
        #[async_trait::async_trait]
        impl sea_orm::ActiveModelBehavior for ActiveModel {
            async fn before_save<C>(
                self,
                _db: &C,
                insert: bool,
            ) -> Result<Self, sea_orm::DbErr>
            where
                C: sea_orm::ConnectionTrait,
            {
                let mut stamped = self;
                if insert {
                    stamped.created_at = sea_orm::ActiveValue::Set(chrono::Utc::now());
                } else {
                    stamped.updated_at =
                        sea_orm::ActiveValue::Set(Some(chrono::Utc::now()));
                }
                Ok(stamped)
            }
        }
    };
}

pub(crate) use audit_stamps;
