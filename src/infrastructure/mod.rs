//! Infrastructure layer.
//!
//! - `config` - settings loaded from environment variables
//! - `store` - the [`DeliveryStore`] trait and its error type
//! - `postgres` - `sqlx` backed store
//! - `in_memory` - process-local store
//! - `provisioning` - startup table check
//! - `dependencies` - router state container

mod config;
mod dependencies;
mod in_memory;
mod postgres;
mod provisioning;
mod store;

pub use config::{AppConfig, ConfigError, LogFormat, StorageMode};
pub use dependencies::AppDependencies;
pub use in_memory::InMemoryDeliveryStore;
pub use postgres::PostgresDeliveryStore;
pub use provisioning::provision_schema;
pub use store::{DELIVERY_TABLE, DeliveryStore, SchemaStatus, StoreError};
