//! Renderer seam
//!
//! Renderers turn the header tuple and the row stream into an output
//! artifact (a spreadsheet, a templated document, ...). They live outside
//! this crate; this module only defines the contract and the discriminator
//! used to pick one.

use crate::core::report::ReportRowStream;
use crate::domain::Result;
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// Renderer type discriminator, as written in report definitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererKind {
    /// Excel workbook
    Xlsx,
    /// Comma-separated values
    Csv,
    /// JSON document
    Json,
    /// Jinja2 template; usually needs extra context
    Jinja2,
}

impl RendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::Xlsx => "xlsx",
            RendererKind::Csv => "csv",
            RendererKind::Json => "json",
            RendererKind::Jinja2 => "jinja2",
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RendererKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(RendererKind::Xlsx),
            "csv" => Ok(RendererKind::Csv),
            "json" => Ok(RendererKind::Json),
            "jinja2" => Ok(RendererKind::Jinja2),
            other => Err(format!(
                "Unsupported renderer type '{other}'. Supported: xlsx, csv, json, jinja2"
            )),
        }
    }
}

/// Consumer of a report run
///
/// A renderer pulls rows from the stream at its own pace. Every pull may
/// hit the platform and fires the run's progress callback. When the stream
/// yields an error the run is over; rows already consumed stand.
#[async_trait]
pub trait Renderer: Send {
    /// What the renderer produces (bytes, a file path, ...)
    type Output: Send;

    /// The renderer type this implementation handles
    fn kind(&self) -> RendererKind;

    /// Render the header tuple and the row stream
    ///
    /// `extra_context` carries whatever additional data template-based
    /// renderers need; other renderers ignore it.
    async fn render(
        &mut self,
        headers: &'static [&'static str; 4],
        rows: ReportRowStream,
        extra_context: Option<serde_json::Value>,
    ) -> Result<Self::Output>;
}
