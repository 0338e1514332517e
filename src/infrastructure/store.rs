//! Delivery record storage abstraction.
//!
//! [`DeliveryStore`] is the only seam between the HTTP layer and persistence.
//! It is object safe so that the application can hold an
//! `Arc<dyn DeliveryStore>` and swap the Postgres implementation for the
//! in-memory one in tests.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{DeliveryRecord, NewDeliveryRecord};

/// Name of the table holding delivery records.
pub const DELIVERY_TABLE: &str = "delivery_data";

/// Errors raised by a [`DeliveryStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The database rejected the statement or could not be reached.
    #[error("Database error: {0}")]
    Database(String),
    /// A stored row could not be mapped back to a record.
    #[error("Corrupt row: {0}")]
    CorruptRow(String),
    /// Looking up whether the delivery table exists failed.
    #[error("Error checking for table: {0}")]
    SchemaCheck(String),
    /// The delivery table was missing and could not be created.
    #[error("Error creating table: {0}")]
    SchemaCreate(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::ColumnNotFound(_) => {
                Self::CorruptRow(error.to_string())
            }
            other => Self::Database(other.to_string()),
        }
    }
}

/// Outcome of [`DeliveryStore::ensure_schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaStatus {
    /// The table was already present; nothing was changed.
    AlreadyExists,
    /// The table was missing and has been created.
    Created,
}

/// Storage for delivery records.
///
/// Every operation is a single statement; no transaction spans two calls.
#[async_trait]
pub trait DeliveryStore: Send + Sync {
    /// Creates the delivery table if it does not exist yet.
    ///
    /// Calling this repeatedly is harmless.
    async fn ensure_schema(&self) -> Result<SchemaStatus, StoreError>;

    /// Stores a record and returns it with its assigned identifier.
    async fn insert(&self, record: NewDeliveryRecord) -> Result<DeliveryRecord, StoreError>;

    /// Returns every stored record, in no particular order.
    async fn list_all(&self) -> Result<Vec<DeliveryRecord>, StoreError>;

    /// Deletes all records of one organization and returns how many were
    /// removed. Zero matches is not an error.
    async fn delete_by_organization(&self, organization_id: &str) -> Result<u64, StoreError>;

    /// Deletes every record and returns how many were removed.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Releases held resources such as pooled connections.
    async fn close(&self) {}
}
