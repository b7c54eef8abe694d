//! Commerce request records
//!
//! Requests arrive from the platform as loosely-shaped JSON. They are kept
//! as raw documents and only picked apart one row at a time, so a malformed
//! record fails the run at that record instead of failing the whole page it
//! arrived in.

use crate::domain::{ReportError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A purchase request as returned by the platform's `requests` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommerceRequest(Value);

impl CommerceRequest {
    /// Wrap a raw JSON document
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// The request id, when present. Only used to describe the record in
    /// errors and logs.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// The raw document
    pub fn document(&self) -> &Value {
        &self.0
    }

    /// Human-readable label used in error messages
    pub fn describe(&self) -> String {
        match self.id() {
            Some(id) => format!("request {id}"),
            None => "request <unknown id>".to_string(),
        }
    }

    /// Look up a dotted path, failing if any segment is missing
    pub fn field(&self, path: &str) -> Result<&Value> {
        let mut current = &self.0;
        for segment in path.split('.') {
            current = current
                .get(segment)
                .ok_or_else(|| ReportError::malformed(self.describe(), path, "is missing"))?;
        }
        Ok(current)
    }

    /// Look up a dotted path that must hold a string
    pub fn str_field(&self, path: &str) -> Result<&str> {
        self.field(path)?
            .as_str()
            .ok_or_else(|| ReportError::malformed(self.describe(), path, "is not a string"))
    }

    /// Look up a dotted path that must hold an array
    pub fn array_field(&self, path: &str) -> Result<&Vec<Value>> {
        self.field(path)?
            .as_array()
            .ok_or_else(|| ReportError::malformed(self.describe(), path, "is not an array"))
    }
}

impl From<Value> for CommerceRequest {
    fn from(document: Value) -> Self {
        Self::new(document)
    }
}
