//! Report generator
//!
//! Entry point of the pipeline: validates inputs, builds the request
//! filter and hands back a lazy row stream.

use super::query::build_request_filter;
use super::rows::RowCursor;
use super::ReportRowStream;
use crate::adapters::connect::CommerceApi;
use crate::config::{ReportConfig, ReportDefinition};
use crate::domain::{ReportError, ReportParameters, Result};
use std::sync::Arc;

/// Builds row streams for one report definition
pub struct ReportGenerator {
    api: Arc<dyn CommerceApi>,
    definition: ReportDefinition,
    page_size: usize,
}

impl ReportGenerator {
    /// Create a generator
    pub fn new(api: Arc<dyn CommerceApi>, definition: ReportDefinition, page_size: usize) -> Self {
        Self {
            api,
            definition,
            page_size,
        }
    }

    /// Create a generator from a loaded configuration
    pub fn from_config(api: Arc<dyn CommerceApi>, config: &ReportConfig) -> Self {
        Self::new(api, config.report.clone(), config.connect.page_size)
    }

    pub fn definition(&self) -> &ReportDefinition {
        &self.definition
    }

    /// Start a report run
    ///
    /// No remote call is made here. The returned stream counts the matches
    /// and resolves the pricing delta on its first poll, then pages through
    /// the requests. `progress` is called with `(rows so far, total)` after
    /// each row is built and before the row is yielded, so a consumer that
    /// stops after row `n` has already seen progress `n`.
    ///
    /// # Errors
    ///
    /// Returns an error if the product id is invalid or the parameters
    /// describe an incomplete date window.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use futures::TryStreamExt;
    /// use margin_report::core::report::ReportGenerator;
    /// use margin_report::domain::ReportParameters;
    ///
    /// # async fn example(generator: ReportGenerator) -> margin_report::domain::Result<()> {
    /// let rows = generator.generate(&ReportParameters::new(), |current, total| {
    ///     println!("{current}/{total}");
    /// })?;
    /// let rows: Vec<_> = rows.try_collect().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn generate<F>(&self, parameters: &ReportParameters, progress: F) -> Result<ReportRowStream>
    where
        F: FnMut(u64, u64) + Send + 'static,
    {
        let product = self
            .definition
            .product()
            .map_err(ReportError::Configuration)?;
        let filter = build_request_filter(&product, parameters)?;

        tracing::debug!(filter = %filter, "Built request filter");

        let cursor = RowCursor::new(
            Arc::clone(&self.api),
            filter,
            self.definition.clone(),
            self.page_size,
            Box::new(progress),
        );

        Ok(cursor.into_stream())
    }
}
