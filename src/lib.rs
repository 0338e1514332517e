//! # delivery-pricing
//!
//! HTTP service that quotes delivery prices and records every quote in
//! `PostgreSQL`.
//!
//! ## Layers
//!
//! - [`domain`] - pricing rule and delivery records, no I/O
//! - [`infrastructure`] - configuration, storage backends, schema provisioning
//! - [`api`] - axum handlers, DTOs and routing
//! - [`server`] - listener binding and graceful shutdown
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use delivery_pricing::api::create_router;
//! use delivery_pricing::infrastructure::{AppDependencies, InMemoryDeliveryStore};
//!
//! let store = Arc::new(InMemoryDeliveryStore::new());
//! let router = create_router(AppDependencies::with_default_pricing(store));
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod server;
