//! Domain models and types for margin reports.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`ProductId`], [`PriceListVersionId`],
//!   [`SubscriptionId`], [`CustomerId`])
//! - **Remote records** ([`CommerceRequest`], [`PricePoint`])
//! - **Report output** ([`ReportRow`], [`HEADERS`])
//! - **Report inputs** ([`ReportParameters`], [`DateRange`])
//! - **Error types** ([`ReportError`], [`ConnectError`]) and the [`Result`] alias
//!
//! # Example
//!
//! ```rust
//! use margin_report::domain::{CommerceRequest, ReportRow};
//! use serde_json::json;
//!
//! # fn example() -> margin_report::domain::Result<()> {
//! let request = CommerceRequest::new(json!({
//!     "id": "PR-1",
//!     "asset": {
//!         "id": "AS-1",
//!         "items": [{"quantity": 2}],
//!         "tiers": {"customer": {"id": "TA-1"}}
//!     }
//! }));
//!
//! let row = ReportRow::from_request(&request, 10)?;
//! assert_eq!(row.calculated_value, 20);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod ids;
pub mod parameters;
pub mod pricing;
pub mod request;
pub mod result;
pub mod row;

// Re-export commonly used types for convenience
pub use errors::{ConnectError, ReportError};
pub use ids::{CustomerId, PriceListVersionId, ProductId, SubscriptionId};
pub use parameters::{DateRange, ReportParameters};
pub use pricing::PricePoint;
pub use request::CommerceRequest;
pub use result::Result;
pub use row::{ReportRow, HEADERS};
