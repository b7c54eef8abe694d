//! Commerce platform adapter
//!
//! This module provides the integration with the platform's public API:
//! the [`CommerceApi`] seam the report generator depends on, its HTTP
//! implementation and the wire-level models they share.

pub mod client;
pub mod models;
pub mod traits;

pub use client::ConnectClient;
pub use models::ContentRange;
pub use traits::{CommerceApi, PageRequest};
