// Margin Report - Subscription margin reporting for commerce platforms
// Copyright (c) 2025 Margin Report Contributors
// Licensed under the MIT License

//! # Margin Report
//!
//! Streams one row per approved purchase of a product, giving the
//! subscription, the customer, the purchased quantity and the margin earned
//! on it (`(price - cost) * quantity`).
//!
//! ## Overview
//!
//! This library provides:
//! - **Querying** approved purchase requests through the platform's RQL filters
//! - **Pricing** one price point lookup per run to derive the cost/price delta
//! - **Streaming** rows lazily, page by page, with a per-row progress callback
//! - **Rendering** through a pluggable [`render::Renderer`]
//!
//! ## Architecture
//!
//! - [`core`] - Report pipeline (query, pricing, rows, runner)
//! - [`adapters`] - Platform API integration
//! - [`domain`] - Identifiers, remote records, rows and errors
//! - [`rql`] - Filter expressions
//! - [`render`] - Renderer contract
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use margin_report::adapters::connect::ConnectClient;
//! use margin_report::config::load_config;
//! use margin_report::core::report::ReportGenerator;
//! use margin_report::domain::ReportParameters;
//! use futures::TryStreamExt;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("margin-report.toml")?;
//!     let api = Arc::new(ConnectClient::new(&config.connect)?);
//!     let generator = ReportGenerator::from_config(api, &config);
//!
//!     let params = ReportParameters::with_date_range("2021-01-01T00:00:00", "2021-12-31T23:59:59");
//!     let rows: Vec<_> = generator
//!         .generate(&params, |current, total| println!("{current}/{total}"))?
//!         .try_collect()
//!         .await?;
//!
//!     println!("{} rows", rows.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`domain::ReportError`]. A run never recovers:
//! the row stream yields the first error and ends. The one tolerated gap
//! is a request without line items, which reports quantity `0`.
//!
//! ## Logging
//!
//! The pipeline logs through `tracing`; install a subscriber with
//! [`logging::init_logging`] or bring your own.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod render;
pub mod rql;
