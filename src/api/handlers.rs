//! HTTP handlers.
//!
//! Each handler follows the same pipeline:
//!
//! ```text
//! Request → Validate → Price → Store → Response
//! ```
//!
//! Validation and pricing are pure; the store call is the only I/O.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use chrono::Utc;

use super::dto::{CalculateCostRequest, CostResponse, MessageResponse};
use super::error::ApiError;
use crate::domain::{DeliveryRecord, NewDeliveryRecord};
use crate::infrastructure::AppDependencies;

/// POST /calculate-cost - Price a delivery and record it.
///
/// # Errors
///
/// - `400 Bad Request` - missing field, unknown item type, invalid distance
///   or malformed JSON
/// - `500 Internal Server Error` - the record could not be stored
pub async fn calculate_cost(
    State(dependencies): State<AppDependencies>,
    payload: Result<Json<CalculateCostRequest>, JsonRejection>,
) -> Result<Json<CostResponse>, ApiError> {
    let Json(request) = payload?;
    let request = request.validate()?;

    let pricing = dependencies.pricing();
    let record = NewDeliveryRecord::price(
        pricing,
        request.organization_id,
        request.zone,
        request.total_distance,
        request.item_type,
        Utc::now(),
    )?;
    let total_price = record.total_price;

    let stored = dependencies
        .store()
        .insert(record)
        .await
        .map_err(|error| ApiError::store_failure("Error saving data", &error))?;
    tracing::debug!(
        id = stored.id,
        organization_id = %stored.organization_id,
        total_price,
        "Delivery priced"
    );

    Ok(Json(CostResponse {
        total_price: pricing.quote(total_price),
    }))
}

/// GET /data - List every stored delivery record.
///
/// # Errors
///
/// - `500 Internal Server Error` - the store could not be read
pub async fn list_data(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<DeliveryRecord>>, ApiError> {
    dependencies
        .store()
        .list_all()
        .await
        .map(Json)
        .map_err(|error| ApiError::store_failure("Error fetching data", &error))
}

/// DELETE /data/{organization_id} - Delete one organization's records.
///
/// Succeeds whether or not any record matched.
///
/// # Errors
///
/// - `500 Internal Server Error` - the delete failed
pub async fn delete_organization_data(
    State(dependencies): State<AppDependencies>,
    Path(organization_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = dependencies
        .store()
        .delete_by_organization(&organization_id)
        .await
        .map_err(|error| ApiError::store_failure("Error deleting data", &error))?;
    tracing::debug!(%organization_id, removed, "Organization data deleted");

    Ok(Json(MessageResponse::new("Data Deleted Successfully")))
}

/// DELETE /data - Delete every record.
///
/// # Errors
///
/// - `500 Internal Server Error` - the delete failed
pub async fn delete_all_data(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = dependencies
        .store()
        .delete_all()
        .await
        .map_err(|error| ApiError::store_failure("Error deleting data", &error))?;
    tracing::debug!(removed, "All data deleted");

    Ok(Json(MessageResponse::new("All Data Deleted Successfully")))
}

/// Fallback for unmatched routes and methods.
#[allow(clippy::unused_async)]
pub async fn unknown_request() -> ApiError {
    ApiError::UnknownRequest
}
