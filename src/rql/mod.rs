//! Resource Query Language filters
//!
//! The platform filters collections with RQL expressions passed in the
//! query string, e.g. `and(eq(type,purchase),ge(created,2021-01-01))`.
//! This module builds those expressions as a small predicate tree.

pub mod filter;

pub use filter::{field, Field, Filter, Operator};
