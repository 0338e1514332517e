//! Startup table provisioning.

use super::store::{DeliveryStore, SchemaStatus, StoreError};

/// Makes sure the delivery table exists before the server starts.
///
/// The outcome is logged either way. A failed check is only fatal when
/// `strict` is set; otherwise startup continues and the failure resurfaces
/// as 500 responses on the first query.
///
/// When startup is aborted the store is closed before the error is returned.
///
/// # Errors
///
/// Returns the underlying [`StoreError`] when the check fails and `strict` is
/// `true`.
pub async fn provision_schema(
    store: &dyn DeliveryStore,
    strict: bool,
) -> Result<Option<SchemaStatus>, StoreError> {
    match store.ensure_schema().await {
        Ok(SchemaStatus::AlreadyExists) => {
            tracing::info!("Table already exists");
            Ok(Some(SchemaStatus::AlreadyExists))
        }
        Ok(SchemaStatus::Created) => {
            tracing::info!("Table is successfully created");
            Ok(Some(SchemaStatus::Created))
        }
        Err(error) if strict => {
            tracing::error!(%error, "{}; aborting startup", failure_context(&error));
            store.close().await;
            Err(error)
        }
        Err(error) => {
            tracing::error!(%error, "{}; continuing without it", failure_context(&error));
            Ok(None)
        }
    }
}

/// Names the provisioning step that failed.
const fn failure_context(error: &StoreError) -> &'static str {
    match error {
        StoreError::SchemaCreate(_) => "Error creating table",
        _ => "Error checking for table",
    }
}
