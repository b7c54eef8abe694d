//! Wire-level models for the platform API
//!
//! Collection endpoints return bare JSON arrays; totals travel in the
//! `Content-Range` response header (`items 0-99/1234`).

use crate::domain::ConnectError;
use std::str::FromStr;

/// Parsed `Content-Range` header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentRange {
    /// Index of the first and last returned item, when the server sent one.
    /// Empty pages may report `0--1` or `*`.
    pub range: Option<(u64, i64)>,

    /// Total number of items matching the query
    pub total: u64,
}

impl FromStr for ContentRange {
    type Err = ConnectError;

    fn from_str(header: &str) -> Result<Self, Self::Err> {
        let invalid =
            || ConnectError::InvalidResponse(format!("Malformed Content-Range header: '{header}'"));

        let body = header.trim().strip_prefix("items").ok_or_else(invalid)?.trim();
        let (range_part, total_part) = body.split_once('/').ok_or_else(invalid)?;
        let total = total_part.trim().parse::<u64>().map_err(|_| invalid())?;

        let range_part = range_part.trim();
        let range = if range_part == "*" {
            None
        } else {
            let (first, last) = range_part.split_once('-').ok_or_else(invalid)?;
            let first = first.parse::<u64>().map_err(|_| invalid())?;
            let last = last.parse::<i64>().map_err(|_| invalid())?;
            Some((first, last))
        };

        Ok(Self { range, total })
    }
}
