//! HTTP layer.
//!
//! - `dto` - request and response bodies
//! - `error` - [`ApiError`] and its status mapping
//! - `handlers` - one async function per endpoint
//! - `routes` - router assembly

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use routes::create_router;
