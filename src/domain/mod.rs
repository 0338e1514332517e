//! Domain layer: the pricing rule and the delivery record it produces.
//!
//! Nothing in here performs I/O.

pub mod delivery;
pub mod pricing;

pub use delivery::{DeliveryRecord, NewDeliveryRecord};
pub use pricing::{
    ItemType, PricingConfig, PricingError, calculate_price, format_number, parse_distance,
};
