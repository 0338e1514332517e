//! `PostgreSQL` implementation of [`DeliveryStore`].
//!
//! # Table Schema
//!
//! ```sql
//! CREATE TABLE delivery_data (
//!     id SERIAL PRIMARY KEY,
//!     organization_id VARCHAR(255) NOT NULL,
//!     zone VARCHAR(255) NOT NULL,
//!     total_distance FLOAT NOT NULL,
//!     item_type VARCHAR(255) NOT NULL,
//!     total_price FLOAT NOT NULL,
//!     currency VARCHAR(255) NOT NULL,
//!     timestamp TIMESTAMP NOT NULL
//! );
//! ```
//!
//! `timestamp` is a zone-less column; values are written and read as UTC.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::store::{DeliveryStore, SchemaStatus, StoreError};
use crate::domain::{DeliveryRecord, NewDeliveryRecord};

const MAX_CONNECTIONS: u32 = 10;

const TABLE_EXISTS_QUERY: &str = "SELECT to_regclass('public.delivery_data') IS NOT NULL";

const CREATE_TABLE_QUERY: &str = r"
    CREATE TABLE delivery_data (
        id SERIAL PRIMARY KEY,
        organization_id VARCHAR(255) NOT NULL,
        zone VARCHAR(255) NOT NULL,
        total_distance FLOAT NOT NULL,
        item_type VARCHAR(255) NOT NULL,
        total_price FLOAT NOT NULL,
        currency VARCHAR(255) NOT NULL,
        timestamp TIMESTAMP NOT NULL
    )
";

const INSERT_QUERY: &str = r"
    INSERT INTO delivery_data (organization_id, zone, total_distance, item_type, total_price, currency, timestamp)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    RETURNING id, organization_id, zone, total_distance, item_type, total_price, currency, timestamp
";

const SELECT_ALL_QUERY: &str = "SELECT id, organization_id, zone, total_distance, item_type, \
                                total_price, currency, timestamp FROM delivery_data";

const DELETE_BY_ORGANIZATION_QUERY: &str = "DELETE FROM delivery_data WHERE organization_id = $1";

const DELETE_ALL_QUERY: &str = "DELETE FROM delivery_data";

/// A `delivery_data` row as returned by Postgres.
#[derive(Debug, sqlx::FromRow)]
struct DeliveryRow {
    id: i32,
    organization_id: String,
    zone: String,
    total_distance: f64,
    item_type: String,
    total_price: f64,
    currency: String,
    timestamp: NaiveDateTime,
}

impl From<DeliveryRow> for DeliveryRecord {
    fn from(row: DeliveryRow) -> Self {
        Self {
            id: row.id,
            organization_id: row.organization_id,
            zone: row.zone,
            total_distance: row.total_distance,
            item_type: row.item_type,
            total_price: row.total_price,
            currency: row.currency,
            timestamp: row.timestamp.and_utc(),
        }
    }
}

/// Delivery store backed by a Postgres connection pool.
///
/// Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct PostgresDeliveryStore {
    pool: PgPool,
}

impl PostgresDeliveryStore {
    /// Wraps an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if no connection can be established.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }

}

#[async_trait]
impl DeliveryStore for PostgresDeliveryStore {
    async fn ensure_schema(&self) -> Result<SchemaStatus, StoreError> {
        let exists: bool = sqlx::query_scalar(TABLE_EXISTS_QUERY)
            .fetch_one(&self.pool)
            .await
            .map_err(|error| StoreError::SchemaCheck(error.to_string()))?;
        if exists {
            return Ok(SchemaStatus::AlreadyExists);
        }

        sqlx::query(CREATE_TABLE_QUERY)
            .execute(&self.pool)
            .await
            .map_err(|error| StoreError::SchemaCreate(error.to_string()))?;
        Ok(SchemaStatus::Created)
    }

    async fn insert(&self, record: NewDeliveryRecord) -> Result<DeliveryRecord, StoreError> {
        let row: DeliveryRow = sqlx::query_as(INSERT_QUERY)
            .bind(record.organization_id)
            .bind(record.zone)
            .bind(record.total_distance)
            .bind(record.item_type)
            .bind(record.total_price)
            .bind(record.currency)
            .bind(record.timestamp.naive_utc())
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<DeliveryRecord>, StoreError> {
        let rows: Vec<DeliveryRow> = sqlx::query_as(SELECT_ALL_QUERY)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(DeliveryRecord::from).collect())
    }

    async fn delete_by_organization(&self, organization_id: &str) -> Result<u64, StoreError> {
        let result = sqlx::query(DELETE_BY_ORGANIZATION_QUERY)
            .bind(organization_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let result = sqlx::query(DELETE_ALL_QUERY).execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    async fn close(&self) {
        self.pool.close().await;
    }
}
