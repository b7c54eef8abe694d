//! Report rows
//!
//! One row is produced per matched request. The row is built from the
//! request's `asset` (the subscription the purchase created) and the run's
//! cost/price delta.

use crate::domain::ids::{CustomerId, SubscriptionId};
use crate::domain::request::CommerceRequest;
use crate::domain::{ReportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Column headers handed to renderers, in row order
pub const HEADERS: [&str; 4] = ["Subscription ID", "Customer ID", "Quantity", "Calculation"];

/// A normalized report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub subscription_id: SubscriptionId,
    pub customer_id: CustomerId,
    pub quantity: i64,
    pub calculated_value: i64,
}

impl ReportRow {
    /// Create a row from already-extracted values
    pub fn new(
        subscription_id: impl Into<SubscriptionId>,
        customer_id: impl Into<CustomerId>,
        quantity: i64,
        calculated_value: i64,
    ) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            customer_id: customer_id.into(),
            quantity,
            calculated_value,
        }
    }

    /// Normalize one request into a row
    ///
    /// The quantity is taken from the first line item only. A request whose
    /// `items` list is empty gets quantity `0`; older purchase requests were
    /// stored without line items. Every other missing or mis-shaped field is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MalformedRecord`] for missing fields, non-integer
    /// quantities, or a calculated value that overflows `i64`.
    pub fn from_request(request: &CommerceRequest, cost_price_delta: i64) -> Result<Self> {
        let items = request.array_field("asset.items")?;
        let quantity = match items.first() {
            Some(item) => parse_quantity(request, item)?,
            None => 0,
        };

        let subscription_id = request.str_field("asset.id")?;
        let customer_id = request.str_field("asset.tiers.customer.id")?;

        let calculated_value = cost_price_delta.checked_mul(quantity).ok_or_else(|| {
            ReportError::malformed(
                request.describe(),
                "asset.items.0.quantity",
                format!("overflows when multiplied by delta {cost_price_delta}"),
            )
        })?;

        Ok(Self::new(
            subscription_id,
            customer_id,
            quantity,
            calculated_value,
        ))
    }

    /// Cells as strings, in [`HEADERS`] order
    pub fn to_record(&self) -> [String; 4] {
        [
            self.subscription_id.to_string(),
            self.customer_id.to_string(),
            self.quantity.to_string(),
            self.calculated_value.to_string(),
        ]
    }
}

/// Quantities come back as integers, decimals or numeric strings depending
/// on the item type. Decimals are truncated.
fn parse_quantity(request: &CommerceRequest, item: &Value) -> Result<i64> {
    const FIELD: &str = "asset.items.0.quantity";

    let raw = item
        .get("quantity")
        .ok_or_else(|| ReportError::malformed(request.describe(), FIELD, "is missing"))?;

    let parsed = match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .map(f64::trunc)
                // i64::MAX as f64 rounds up to 2^63
                .filter(|f| f.is_finite() && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| {
        ReportError::malformed(
            request.describe(),
            FIELD,
            format!("is not an integer: {raw}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn request_with_items(items: Value) -> CommerceRequest {
        CommerceRequest::new(json!({
            "id": "PR-1",
            "asset": {
                "id": "AS-1",
                "items": items,
                "tiers": {"customer": {"id": "TA-1"}}
            }
        }))
    }

    #[test]
    fn test_row_from_request() {
        let row = ReportRow::from_request(&request_with_items(json!([{"quantity": 2}])), 10).unwrap();
        assert_eq!(row, ReportRow::new("AS-1", "TA-1", 2, 20));
    }

    #[test_case(0 ; "zero delta")]
    #[test_case(10 ; "positive delta")]
    #[test_case(-7 ; "negative delta")]
    fn test_empty_items_default_to_zero(delta: i64) {
        let row = ReportRow::from_request(&request_with_items(json!([])), delta).unwrap();
        assert_eq!(row.quantity, 0);
        assert_eq!(row.calculated_value, 0);
    }

    #[test]
    fn test_only_first_item_counts() {
        let request = request_with_items(json!([{"quantity": 3}, {"quantity": 100}]));
        let row = ReportRow::from_request(&request, 4).unwrap();
        assert_eq!(row.quantity, 3);
        assert_eq!(row.calculated_value, 12);
    }

    #[test_case(json!(5), 5 ; "integer")]
    #[test_case(json!("7"), 7 ; "numeric string")]
    #[test_case(json!(" 8 "), 8 ; "padded string")]
    #[test_case(json!(2.9), 2 ; "decimal truncates")]
    fn test_quantity_shapes(quantity: Value, expected: i64) {
        let request = request_with_items(json!([{ "quantity": quantity }]));
        let row = ReportRow::from_request(&request, 1).unwrap();
        assert_eq!(row.quantity, expected);
    }

    #[test]
    fn test_missing_items_is_fatal() {
        let request = CommerceRequest::new(json!({
            "id": "PR-2",
            "asset": {"id": "AS-2", "tiers": {"customer": {"id": "TA-2"}}}
        }));
        let err = ReportRow::from_request(&request, 1).unwrap_err();
        assert!(err.to_string().contains("asset.items"));
    }

    #[test]
    fn test_missing_quantity_is_fatal() {
        let err = ReportRow::from_request(&request_with_items(json!([{}])), 1).unwrap_err();
        assert!(err.to_string().contains("quantity"));
    }

    #[test]
    fn test_non_numeric_quantity_is_fatal() {
        let request = request_with_items(json!([{"quantity": "unlimited"}]));
        assert!(ReportRow::from_request(&request, 1).is_err());
    }

    #[test_case(json!(1e20) ; "float above range")]
    #[test_case(json!(-1e20) ; "float below range")]
    #[test_case(json!(u64::MAX) ; "unsigned above range")]
    #[test_case(json!(9_223_372_036_854_775_808u64) ; "one past max")]
    fn test_out_of_range_quantity_is_fatal(quantity: Value) {
        let request = request_with_items(json!([{ "quantity": quantity }]));
        match ReportRow::from_request(&request, 0).unwrap_err() {
            ReportError::MalformedRecord { field, .. } => {
                assert_eq!(field, "asset.items.0.quantity")
            }
            other => panic!("Expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_customer_is_fatal_even_without_items() {
        let request = CommerceRequest::new(json!({
            "id": "PR-3",
            "asset": {"id": "AS-3", "items": [], "tiers": {}}
        }));
        let err = ReportRow::from_request(&request, 1).unwrap_err();
        match err {
            ReportError::MalformedRecord { field, .. } => {
                assert_eq!(field, "asset.tiers.customer.id")
            }
            other => panic!("Expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_overflow_is_fatal() {
        let request = request_with_items(json!([{"quantity": 2}]));
        assert!(ReportRow::from_request(&request, i64::MAX).is_err());
    }

    #[test]
    fn test_to_record_matches_headers() {
        let row = ReportRow::new("AS-1", "TA-1", 2, 20);
        assert_eq!(row.to_record().len(), HEADERS.len());
        assert_eq!(row.to_record()[3], "20");
    }
}
