//! Report runner
//!
//! Glue between the host's renderer selection and the generator.

use super::generator::ReportGenerator;
use crate::domain::{ReportError, ReportParameters, Result, HEADERS};
use crate::render::{Renderer, RendererKind};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use std::time::{Duration, Instant};

/// Result of a completed run
#[derive(Debug)]
pub struct RunOutcome<T> {
    /// Whatever the renderer produced
    pub output: T,
    pub renderer: RendererKind,
    pub started_at: DateTime<Utc>,
    pub duration: Duration,
}

/// Runs a report through a renderer
pub struct ReportRunner {
    generator: ReportGenerator,
}

impl ReportRunner {
    pub fn new(generator: ReportGenerator) -> Self {
        Self { generator }
    }

    pub fn generator(&self) -> &ReportGenerator {
        &self.generator
    }

    /// Run the report and render it
    ///
    /// `renderer_type` is the discriminator chosen by the host. It must be a
    /// known renderer type, listed in the report definition, and match the
    /// renderer passed in.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Validation`] for a bad renderer selection,
    /// otherwise whatever the generator or the renderer fails with.
    pub async fn run<R, F>(
        &self,
        parameters: &ReportParameters,
        renderer_type: &str,
        renderer: &mut R,
        extra_context: Option<serde_json::Value>,
        progress: F,
    ) -> Result<RunOutcome<R::Output>>
    where
        R: Renderer,
        F: FnMut(u64, u64) + Send + 'static,
    {
        let kind = RendererKind::from_str(renderer_type).map_err(ReportError::Validation)?;

        if !self.generator.definition().supports(kind) {
            return Err(ReportError::Validation(format!(
                "Renderer type '{kind}' is not enabled for this report"
            )));
        }

        if renderer.kind() != kind {
            return Err(ReportError::Validation(format!(
                "Renderer type '{kind}' requested but a '{}' renderer was supplied",
                renderer.kind()
            )));
        }

        let started_at = Utc::now();
        let start = Instant::now();
        tracing::info!(renderer = %kind, "Starting report run");

        let rows = self.generator.generate(parameters, progress)?;
        let output = renderer.render(&HEADERS, rows, extra_context).await?;

        let duration = start.elapsed();
        tracing::info!(
            renderer = %kind,
            duration_ms = duration.as_millis() as u64,
            "Report run completed"
        );

        Ok(RunOutcome {
            output,
            renderer: kind,
            started_at,
            duration,
        })
    }
}
