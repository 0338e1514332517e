//! In-memory implementation of [`DeliveryStore`].
//!
//! Records live in a `Vec` behind an `Arc<RwLock<...>>`, so clones share the
//! same data. Identifiers are assigned from a counter starting at 1 and, like
//! a `SERIAL` column, are never reused after deletes.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{DeliveryStore, SchemaStatus, StoreError};
use crate::domain::{DeliveryRecord, NewDeliveryRecord};

#[derive(Debug, Default)]
struct Table {
    rows: Vec<DeliveryRecord>,
    last_id: i32,
}

/// Process-local delivery store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeliveryStore {
    table: Arc<RwLock<Table>>,
}

impl InMemoryDeliveryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// Returns `true` if no records are stored.
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl DeliveryStore for InMemoryDeliveryStore {
    async fn ensure_schema(&self) -> Result<SchemaStatus, StoreError> {
        Ok(SchemaStatus::AlreadyExists)
    }

    async fn insert(&self, record: NewDeliveryRecord) -> Result<DeliveryRecord, StoreError> {
        let mut table = self.table.write().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Database("identifier sequence exhausted".to_string()))?;
        table.last_id = id;

        let stored = record.with_id(id);
        table.rows.push(stored.clone());
        Ok(stored)
    }

    async fn list_all(&self) -> Result<Vec<DeliveryRecord>, StoreError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn delete_by_organization(&self, organization_id: &str) -> Result<u64, StoreError> {
        let mut table = self.table.write().await;
        let before = table.rows.len();
        table
            .rows
            .retain(|record| record.organization_id != organization_id);
        Ok((before - table.rows.len()) as u64)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut table = self.table.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();
        Ok(removed)
    }
}
