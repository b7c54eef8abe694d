//! Margin report pipeline
//!
//! - [`query`] - filter selecting the report's requests
//! - [`pricing`] - cost/price delta lookup
//! - [`generator`] - lazy row stream
//! - [`runner`] - renderer selection and hand-off

pub mod generator;
pub mod pricing;
pub mod query;
mod rows;
pub mod runner;

use crate::domain::{ReportRow, Result};
use futures::stream::BoxStream;

pub use generator::ReportGenerator;
pub use pricing::fetch_cost_price_delta;
pub use query::build_request_filter;
pub use runner::{ReportRunner, RunOutcome};

/// Rows of a report run, in remote order
///
/// Ends after the last row or right after the first error.
pub type ReportRowStream = BoxStream<'static, Result<ReportRow>>;

/// Called with `(current, total)` once per row
pub type ProgressCallback = Box<dyn FnMut(u64, u64) + Send>;
