//! Route configuration.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /calculate-cost | `calculate_cost` |
//! | GET | /data | `list_data` |
//! | DELETE | /data | `delete_all_data` |
//! | DELETE | /data/{organization_id} | `delete_organization_data` |
//! | * | anything else | `unknown_request` (404) |

use axum::Router;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
    calculate_cost, delete_all_data, delete_organization_data, list_data, unknown_request,
};
use crate::infrastructure::AppDependencies;

/// Creates the router with all routes, middleware and state.
///
/// Unsupported methods on known paths answer like unknown paths (404) rather
/// than with 405.
///
/// # Example
///
/// ```rust,ignore
/// let store = Arc::new(InMemoryDeliveryStore::new());
/// let router = create_router(AppDependencies::with_default_pricing(store));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:4000").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        .route(
            "/calculate-cost",
            post(calculate_cost).fallback(unknown_request),
        )
        .route(
            "/data",
            get(list_data)
                .delete(delete_all_data)
                .fallback(unknown_request),
        )
        .route(
            "/data/{organization_id}",
            delete(delete_organization_data).fallback(unknown_request),
        )
        .fallback(unknown_request)
        .layer(TraceLayer::new_for_http())
        .layer(create_cors_layer())
        .with_state(dependencies)
}

/// Allows any origin, method and header.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
