//! Price points
//!
//! A price point gives the price and the internal cost of one SKU under one
//! price list version. Both live in the point's `attributes` map; the cost
//! is a custom attribute whose name depends on how the price list was set up.

use crate::domain::{ReportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Price point projected to its `attributes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Attribute values keyed by attribute name (e.g. `price`, `v.custom_1`)
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl PricePoint {
    /// Create a price point from its attributes
    pub fn new(attributes: Map<String, Value>) -> Self {
        Self { attributes }
    }

    /// Numeric value of an attribute
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MalformedRecord`] if the attribute is missing
    /// or not a JSON number.
    pub fn numeric_attribute(&self, name: &str) -> Result<f64> {
        let field = format!("attributes.{name}");
        let value = self
            .attributes
            .get(name)
            .ok_or_else(|| ReportError::malformed("price point", &field, "is missing"))?;

        value
            .as_f64()
            .ok_or_else(|| ReportError::malformed("price point", &field, "is not a number"))
    }

    /// Margin between price and cost, truncated toward zero
    ///
    /// Remote values may carry decimals; the fractional part of the
    /// difference is dropped, so `10.9 - 0.5` gives `10` and `1.0 - 3.5`
    /// gives `-2`.
    pub fn cost_price_delta(&self, price_attribute: &str, cost_attribute: &str) -> Result<i64> {
        let price = self.numeric_attribute(price_attribute)?;
        let cost = self.numeric_attribute(cost_attribute)?;
        let delta = (price - cost).trunc();

        if !delta.is_finite() || delta < i64::MIN as f64 || delta > i64::MAX as f64 {
            return Err(ReportError::malformed(
                "price point",
                format!("attributes.{price_attribute}"),
                format!("gives a delta out of range ({price} - {cost})"),
            ));
        }

        Ok(delta as i64)
    }
}
