//! Core business logic for margin reports.
//!
//! # Modules
//!
//! - [`report`] - Query building, pricing lookup, row generation and the
//!   report runner
//!
//! # Report Workflow
//!
//! 1. **Build filter**: approved purchases of the configured product,
//!    optionally within a creation window
//! 2. **Count**: total matched requests, fetched once on the first pull
//! 3. **Price**: one price point lookup giving the cost/price delta
//! 4. **Iterate**: page through requests, one row and one progress
//!    callback per request
//! 5. **Render**: the renderer consumes headers and rows
//!
//! # Example
//!
//! ```rust,no_run
//! use margin_report::adapters::connect::ConnectClient;
//! use margin_report::config::load_config;
//! use margin_report::core::report::ReportGenerator;
//! use margin_report::domain::ReportParameters;
//! use futures::StreamExt;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("margin-report.toml")?;
//! let api = Arc::new(ConnectClient::new(&config.connect)?);
//! let generator = ReportGenerator::from_config(api, &config);
//!
//! let mut rows = generator.generate(&ReportParameters::new(), |_, _| {})?;
//! while let Some(row) = rows.next().await {
//!     println!("{:?}", row?.to_record());
//! }
//! # Ok(())
//! # }
//! ```

pub mod report;
