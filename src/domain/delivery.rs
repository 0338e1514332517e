//! Delivery records.
//!
//! A [`DeliveryRecord`] is one priced delivery request as it sits in storage.
//! Records are only ever created from a [`NewDeliveryRecord`] produced by
//! [`NewDeliveryRecord::price`], which guarantees that the stored price is the
//! one the pricing rule yields for the stored distance and item type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pricing::{ItemType, PricingConfig, PricingError, calculate_price};

/// A persisted, priced delivery request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Identifier assigned by the store.
    pub id: i32,
    pub organization_id: String,
    pub zone: String,
    pub total_distance: f64,
    /// Item type exactly as submitted by the client.
    pub item_type: String,
    pub total_price: f64,
    pub currency: String,
    /// Insertion time.
    pub timestamp: DateTime<Utc>,
}

/// A priced delivery request that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDeliveryRecord {
    pub organization_id: String,
    pub zone: String,
    pub total_distance: f64,
    pub item_type: String,
    pub total_price: f64,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
}

impl NewDeliveryRecord {
    /// Prices a delivery and builds the record to store.
    ///
    /// `item_type` is the raw client value; it is matched case-insensitively
    /// but kept verbatim in the record.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidItemType`] for an unknown item type and
    /// [`PricingError::InvalidDistance`] for a distance the pricing rule
    /// rejects.
    pub fn price(
        config: &PricingConfig,
        organization_id: String,
        zone: String,
        total_distance: f64,
        item_type: String,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, PricingError> {
        let category: ItemType = item_type.parse()?;
        let total_price = calculate_price(config, total_distance, category)?;

        Ok(Self {
            organization_id,
            zone,
            total_distance,
            item_type,
            total_price,
            currency: config.currency.clone(),
            timestamp,
        })
    }

    /// Attaches the store-assigned identifier.
    #[must_use]
    pub fn with_id(self, id: i32) -> DeliveryRecord {
        DeliveryRecord {
            id,
            organization_id: self.organization_id,
            zone: self.zone,
            total_distance: self.total_distance,
            item_type: self.item_type,
            total_price: self.total_price,
            currency: self.currency,
            timestamp: self.timestamp,
        }
    }
}
