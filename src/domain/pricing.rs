//! Delivery pricing rule.
//!
//! A delivery costs a flat base price for the first few distance units.
//! Every unit beyond that free threshold is charged at a rate that depends on
//! the item category. The result is returned as a raw `f64`; no rounding is
//! applied anywhere.
//!
//! # Examples
//!
//! ```rust
//! use delivery_pricing::domain::pricing::{ItemType, PricingConfig, calculate_price};
//!
//! let config = PricingConfig::default();
//! let price = calculate_price(&config, 12.0, ItemType::Perishable).unwrap();
//! assert!((price - 20.5).abs() < f64::EPSILON);
//! ```

use std::str::FromStr;

use thiserror::Error;

/// Errors raised while validating or pricing a delivery request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PricingError {
    /// One of the required request fields is absent or empty.
    #[error("Missing required fields")]
    MissingFields,
    /// The item type is not one of the priced categories.
    #[error("Invalid item type")]
    InvalidItemType,
    /// The distance is not a finite, strictly positive number.
    #[error("Invalid distance")]
    InvalidDistance,
}

/// Category of the delivered goods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemType {
    Perishable,
    Nonperishable,
}

impl FromStr for ItemType {
    type Err = PricingError;

    /// Parses an item type, ignoring ASCII case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "perishable" => Ok(Self::Perishable),
            "nonperishable" => Ok(Self::Nonperishable),
            _ => Err(PricingError::InvalidItemType),
        }
    }
}

/// Immutable pricing parameters.
///
/// The [`Default`] value carries the production tariff: a base price of 10,
/// a free threshold of 5 distance units, 1.5 per extra unit for perishable
/// goods and 1.0 for everything else, quoted in `euros`.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingConfig {
    /// Flat price charged for every delivery.
    pub base_price: f64,
    /// Distance covered by the base price.
    pub free_distance: f64,
    /// Rate per unit beyond `free_distance` for perishable goods.
    pub perishable_rate: f64,
    /// Rate per unit beyond `free_distance` for non-perishable goods.
    pub nonperishable_rate: f64,
    /// Currency label appended to quoted prices and stored with each record.
    pub currency: String,
}

impl PricingConfig {
    /// Returns the per-unit rate charged for `item_type`.
    #[must_use]
    pub const fn rate_for(&self, item_type: ItemType) -> f64 {
        match item_type {
            ItemType::Perishable => self.perishable_rate,
            ItemType::Nonperishable => self.nonperishable_rate,
        }
    }

    /// Formats a price the way it is quoted to clients, e.g. `"20.5 euros"`.
    #[must_use]
    pub fn quote(&self, price: f64) -> String {
        format!("{} {}", format_number(price), self.currency)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_price: 10.0,
            free_distance: 5.0,
            perishable_rate: 1.5,
            nonperishable_rate: 1.0,
            currency: "euros".to_string(),
        }
    }
}

/// Computes the price of a delivery.
///
/// # Errors
///
/// Returns [`PricingError::InvalidDistance`] if `distance` is NaN, infinite,
/// zero or negative.
pub fn calculate_price(
    config: &PricingConfig,
    distance: f64,
    item_type: ItemType,
) -> Result<f64, PricingError> {
    if !distance.is_finite() || distance <= 0.0 {
        return Err(PricingError::InvalidDistance);
    }

    let mut total_price = config.base_price;
    if distance > config.free_distance {
        let extra_distance = distance - config.free_distance;
        total_price += extra_distance * config.rate_for(item_type);
    }
    Ok(total_price)
}

/// Renders a number the way JSON clients print it.
///
/// Shortest round-trip digits, no trailing `.0`. Magnitudes of `1e21` and
/// above, or below `1e-6`, switch to exponent form with an explicit sign
/// (`1.5e+22`, `2e-7`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let exponent_form = format!("{value:e}");
        return match exponent_form.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => exponent_form,
        };
    }
    format!("{value}")
}

/// Parses a distance given as text.
///
/// Leading whitespace is skipped and the longest numeric prefix is read, so
/// `"12km"` is a distance of 12. The value must be finite and strictly
/// positive.
///
/// # Errors
///
/// Returns [`PricingError::InvalidDistance`] when the text does not start with
/// a number or the value is out of range.
pub fn parse_distance(text: &str) -> Result<f64, PricingError> {
    let distance: f64 = leading_number(text.trim_start())
        .and_then(|number| number.parse().ok())
        .ok_or(PricingError::InvalidDistance)?;
    if distance.is_finite() && distance > 0.0 {
        Ok(distance)
    } else {
        Err(PricingError::InvalidDistance)
    }
}

/// Returns the longest prefix of `text` shaped like a decimal literal:
/// optional sign, digits with an optional fraction, optional exponent.
fn leading_number(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer_digits = digits_from(end);
    end += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = digits_from(end + 1);
        if integer_digits + fraction_digits > 0 {
            end += 1 + fraction_digits;
        }
    }
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let exponent_digits = digits_from(exponent);
        if exponent_digits > 0 {
            end = exponent + exponent_digits;
        }
    }

    Some(&text[..end])
}
