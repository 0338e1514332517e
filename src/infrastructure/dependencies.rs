//! Dependency injection container.
//!
//! [`AppDependencies`] is the axum router state. It carries the delivery store
//! and the pricing parameters; handlers receive both through `State` instead
//! of reaching for globals.

use std::sync::Arc;

use super::store::DeliveryStore;
use crate::domain::PricingConfig;

/// Application dependency container.
///
/// Cloning is cheap: both members are reference counted.
#[derive(Clone)]
pub struct AppDependencies {
    store: Arc<dyn DeliveryStore>,
    pricing: Arc<PricingConfig>,
}

impl AppDependencies {
    /// Creates a container from a store and pricing parameters.
    #[must_use]
    pub fn new(store: Arc<dyn DeliveryStore>, pricing: PricingConfig) -> Self {
        Self {
            store,
            pricing: Arc::new(pricing),
        }
    }

    /// Creates a container using the default tariff.
    #[must_use]
    pub fn with_default_pricing(store: Arc<dyn DeliveryStore>) -> Self {
        Self::new(store, PricingConfig::default())
    }

    /// Returns the delivery store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn DeliveryStore> {
        &self.store
    }

    /// Returns the pricing parameters.
    #[must_use]
    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("store", &"<dyn DeliveryStore>")
            .field("pricing", &self.pricing)
            .finish()
    }
}
