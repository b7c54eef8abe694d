//! Pricing lookup
//!
//! One round-trip to the pricing namespace per run, yielding the margin
//! applied to every row.

use crate::adapters::connect::CommerceApi;
use crate::config::ReportDefinition;
use crate::domain::{ReportError, Result};

/// Fetch the price point of the report's SKU and compute `price - cost`
///
/// Only the first returned price point is used.
///
/// # Errors
///
/// - [`ReportError::Configuration`] if the definition's ids are invalid
/// - [`ReportError::PricePointNotFound`] if the lookup returns nothing
/// - [`ReportError::MalformedRecord`] if the price or cost is missing or
///   not numeric
/// - any error from the remote call
pub async fn fetch_cost_price_delta(
    api: &dyn CommerceApi,
    definition: &ReportDefinition,
) -> Result<i64> {
    let product = definition.product().map_err(ReportError::Configuration)?;
    let version = definition.price_list().map_err(ReportError::Configuration)?;
    let item_global_id = product.item_global_id(&definition.sku_suffix);

    let points = api.list_price_points(&version, &item_global_id).await?;
    let point = points
        .first()
        .ok_or_else(|| ReportError::PricePointNotFound {
            price_list_version: version.to_string(),
            item_global_id: item_global_id.clone(),
        })?;

    if points.len() > 1 {
        tracing::debug!(
            item_global_id = %item_global_id,
            count = points.len(),
            "Several price points matched; using the first"
        );
    }

    let delta = point.cost_price_delta(&definition.price_attribute, &definition.cost_attribute)?;

    tracing::info!(
        price_list_version = %version,
        item_global_id = %item_global_id,
        cost_price_delta = delta,
        "Resolved cost/price delta"
    );

    Ok(delta)
}
