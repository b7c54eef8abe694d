//! Request query builder
//!
//! Builds the filter selecting approved purchase requests for the report's
//! product, optionally narrowed to a creation window.

use crate::domain::{ProductId, ReportError, ReportParameters, Result};
use crate::rql::{field, Filter};

/// Build the filter for the `requests` collection
///
/// The date window only applies when `after` is non-empty. In that case
/// `before` must be present too; there is no open-ended window. A `before`
/// given without `after` is ignored.
///
/// # Errors
///
/// Returns [`ReportError::InvalidParameters`] when `after` is set and
/// `before` is absent.
pub fn build_request_filter(product: &ProductId, parameters: &ReportParameters) -> Result<Filter> {
    let mut filter = field("type").eq("purchase")
        & field("status").eq("approved")
        & field("asset.product.id").eq(product.as_str());

    match parameters.active_date_range() {
        Some(range) => {
            let before = range.before.as_deref().ok_or_else(|| {
                ReportError::InvalidParameters(
                    "date.before is required when date.after is set".to_string(),
                )
            })?;

            filter &= field("created").ge(&range.after);
            filter &= field("created").le(before);
        }
        None => {
            let ignored_before = parameters
                .date
                .as_ref()
                .and_then(|range| range.before.as_deref())
                .filter(|before| !before.is_empty());

            if let Some(before) = ignored_before {
                tracing::warn!(
                    before = before,
                    "date.before ignored because date.after is empty"
                );
            }
        }
    }

    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DateRange;

    fn product() -> ProductId {
        ProductId::new("PRD-620-226-877").unwrap()
    }

    #[test]
    fn test_filter_without_date_range() {
        let filter = build_request_filter(&product(), &ReportParameters::new()).unwrap();
        assert_eq!(
            filter.to_rql(),
            "and(eq(type,purchase),eq(status,approved),eq(asset.product.id,PRD-620-226-877))"
        );
    }

    #[test]
    fn test_filter_with_date_range() {
        let params = ReportParameters::with_date_range("2021-01-01T00:00:00", "2021-02-01T00:00:00");
        let filter = build_request_filter(&product(), &params).unwrap();

        assert_eq!(filter.clauses().len(), 5);
        assert_eq!(
            filter.to_rql(),
            "and(eq(type,purchase),eq(status,approved),eq(asset.product.id,PRD-620-226-877),\
             ge(created,2021-01-01T00:00:00),le(created,2021-02-01T00:00:00))"
        );
    }

    #[test]
    fn test_empty_after_ignores_before() {
        let baseline = build_request_filter(&product(), &ReportParameters::new()).unwrap();

        for before in [None, Some(String::new()), Some("2021-02-01T00:00:00".to_string())] {
            let params = ReportParameters {
                date: Some(DateRange {
                    after: String::new(),
                    before,
                }),
            };
            assert_eq!(build_request_filter(&product(), &params).unwrap(), baseline);
        }
    }

    #[test]
    fn test_after_without_before_is_rejected() {
        let params = ReportParameters {
            date: Some(DateRange {
                after: "2021-01-01T00:00:00".to_string(),
                before: None,
            }),
        };

        let err = build_request_filter(&product(), &params).unwrap_err();
        assert!(matches!(err, ReportError::InvalidParameters(_)));
    }

    #[test]
    fn test_filter_uses_given_product() {
        let other = ProductId::new("PRD-000-000-001").unwrap();
        let filter = build_request_filter(&other, &ReportParameters::new()).unwrap();
        assert!(filter.to_rql().contains("eq(asset.product.id,PRD-000-000-001)"));
    }
}
