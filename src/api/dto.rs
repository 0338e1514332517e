//! Request and response bodies.
//!
//! Request fields are all optional at the serde level so that a missing field
//! is reported as `Missing required fields` rather than as a JSON error.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{ItemType, PricingError, format_number, parse_distance};

/// Distance as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DistanceInput {
    Number(f64),
    Text(String),
    /// Anything else (booleans, arrays, objects); always rejected as a
    /// distance.
    Other(Value),
}

impl DistanceInput {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Resolves the distance to a number.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidDistance`] for text that is not a
    /// positive number and for non-numeric JSON values.
    pub fn resolve(&self) -> Result<f64, PricingError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Text(text) => parse_distance(text),
            Self::Other(_) => Err(PricingError::InvalidDistance),
        }
    }
}

/// `POST /calculate-cost` body.
///
/// ```json
/// {
///     "organization_id": "005",
///     "zone": "central",
///     "total_distance": 12,
///     "item_type": "perishable"
/// }
/// ```
///
/// `organization_id`, `zone` and `item_type` also accept numbers and booleans,
/// which are kept as their text form (`5` becomes `"5"`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CalculateCostRequest {
    #[serde(default, deserialize_with = "scalar_text")]
    pub organization_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub zone: Option<String>,
    pub total_distance: Option<DistanceInput>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub item_type: Option<String>,
}

/// A [`CalculateCostRequest`] that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCostRequest {
    pub organization_id: String,
    pub zone: String,
    pub total_distance: f64,
    /// Raw item type, kept verbatim for storage.
    pub item_type: String,
}

impl CalculateCostRequest {
    /// Validates the request.
    ///
    /// Checks run in a fixed order: presence of all four fields, then the
    /// item type, then the distance. The first failure is returned.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::MissingFields`], [`PricingError::InvalidItemType`]
    /// or [`PricingError::InvalidDistance`].
    pub fn validate(self) -> Result<ValidatedCostRequest, PricingError> {
        let (Some(organization_id), Some(zone), Some(total_distance), Some(item_type)) = (
            non_empty(self.organization_id),
            non_empty(self.zone),
            self.total_distance.filter(|distance| !distance.is_blank()),
            non_empty(self.item_type),
        ) else {
            return Err(PricingError::MissingFields);
        };

        item_type.parse::<ItemType>()?;
        let total_distance = total_distance.resolve()?;

        Ok(ValidatedCostRequest {
            organization_id,
            zone,
            total_distance,
            item_type,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Reads a JSON scalar as text. `null`, `false` and `0` count as absent.
fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    const EXPECTED: &str = "a string, number or boolean";

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null | Value::Bool(false)) => Ok(None),
        Some(Value::Bool(true)) => Ok(Some("true".to_string())),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(Value::Number(number)) => {
            let value = number.as_f64().unwrap_or_default();
            Ok((value != 0.0).then(|| format_number(value)))
        }
        Some(Value::Array(_)) => Err(de::Error::invalid_type(Unexpected::Seq, &EXPECTED)),
        Some(Value::Object(_)) => Err(de::Error::invalid_type(Unexpected::Map, &EXPECTED)),
    }
}

/// `POST /calculate-cost` success body, e.g. `{"total_price":"20.5 euros"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostResponse {
    pub total_price: String,
}

/// Confirmation body for the delete endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
