//! External system integrations for margin reports.
//!
//! - [`connect`] - Commerce platform API (requests, pricing)
//!
//! # Design Pattern
//!
//! Adapters isolate third-party HTTP types behind the [`connect::CommerceApi`]
//! trait so the report pipeline can be tested with in-memory fakes.
//!
//! ```rust,no_run
//! use margin_report::adapters::connect::{CommerceApi, ConnectClient};
//! use margin_report::config::{secret_string, ConnectConfig};
//! use std::sync::Arc;
//!
//! # fn example() -> margin_report::domain::Result<()> {
//! let config = ConnectConfig {
//!     api_key: Some(secret_string("ApiKey SU-000:secret".to_string())),
//!     ..Default::default()
//! };
//!
//! let api: Arc<dyn CommerceApi> = Arc::new(ConnectClient::new(&config)?);
//! # Ok(())
//! # }
//! ```

pub mod connect;
