//! Report input parameters
//!
//! The hosting framework passes report inputs as a JSON mapping. The only
//! input this report understands is an optional `date` range.

use crate::domain::Result;
use serde::{Deserialize, Serialize};

/// Inputs for one report run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportParameters {
    /// Creation date window, matched against `created`
    #[serde(default)]
    pub date: Option<DateRange>,
}

/// Date window with string boundaries as entered by the user
///
/// Boundaries are passed through to the platform untouched. An empty
/// `after` disables the window altogether, whatever `before` holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub after: String,

    #[serde(default)]
    pub before: Option<String>,
}

impl ReportParameters {
    /// Parameters with no date window
    pub fn new() -> Self {
        Self::default()
    }

    /// Parameters with a date window
    pub fn with_date_range(after: impl Into<String>, before: impl Into<String>) -> Self {
        Self {
            date: Some(DateRange {
                after: after.into(),
                before: Some(before.into()),
            }),
        }
    }

    /// Parse the host's JSON input mapping
    pub fn from_json(input: &serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(input.clone())?)
    }

    /// The date window, if it is active
    pub fn active_date_range(&self) -> Option<&DateRange> {
        self.date.as_ref().filter(|range| !range.after.is_empty())
    }
}
