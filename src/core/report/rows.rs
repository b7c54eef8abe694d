//! Lazy row cursor
//!
//! Walks the matched requests page by page and turns each into a
//! [`ReportRow`]. Nothing is fetched until the first row is pulled; the
//! first pull counts the matches and resolves the pricing delta before the
//! first page is requested.

use super::pricing::fetch_cost_price_delta;
use super::{ProgressCallback, ReportRowStream};
use crate::adapters::connect::{CommerceApi, PageRequest};
use crate::config::ReportDefinition;
use crate::domain::{CommerceRequest, ReportError, ReportRow, Result};
use crate::rql::Filter;
use futures::stream::{self, StreamExt};
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NotStarted,
    Iterating,
    Done,
}

/// Cursor state owned by the row stream
pub(crate) struct RowCursor {
    api: Arc<dyn CommerceApi>,
    filter: Filter,
    definition: ReportDefinition,
    progress_callback: ProgressCallback,

    phase: Phase,
    next_page: PageRequest,
    /// Set once a short or empty page has been received
    exhausted: bool,
    buffer: VecDeque<CommerceRequest>,

    cost_price_delta: i64,
    progress: u64,
    total: u64,
    overrun_warned: bool,
}

impl RowCursor {
    pub(crate) fn new(
        api: Arc<dyn CommerceApi>,
        filter: Filter,
        definition: ReportDefinition,
        page_size: usize,
        progress_callback: ProgressCallback,
    ) -> Self {
        Self {
            api,
            filter,
            definition,
            progress_callback,
            phase: Phase::NotStarted,
            next_page: PageRequest::first(page_size.max(1)),
            exhausted: false,
            buffer: VecDeque::new(),
            cost_price_delta: 0,
            progress: 0,
            total: 0,
            overrun_warned: false,
        }
    }

    /// Turn the cursor into a stream that ends after the last row or the
    /// first error
    pub(crate) fn into_stream(self) -> ReportRowStream {
        stream::try_unfold(self, |mut cursor| async move {
            let row = cursor.next_row().await?;
            Ok::<_, ReportError>(row.map(|row| (row, cursor)))
        })
        .boxed()
    }

    async fn next_row(&mut self) -> Result<Option<ReportRow>> {
        match self.phase {
            Phase::Done => return Ok(None),
            Phase::NotStarted => self.start().await?,
            Phase::Iterating => {}
        }

        let request = match self.next_request().await? {
            Some(request) => request,
            None => {
                self.finish();
                return Ok(None);
            }
        };

        let row = ReportRow::from_request(&request, self.cost_price_delta)?;
        self.advance_progress();

        Ok(Some(row))
    }

    async fn start(&mut self) -> Result<()> {
        self.total = self.api.count_requests(&self.filter).await?;
        self.cost_price_delta = fetch_cost_price_delta(self.api.as_ref(), &self.definition).await?;
        self.phase = Phase::Iterating;

        crate::log_report_start!(&self.definition.product_id, self.total);
        Ok(())
    }

    async fn next_request(&mut self) -> Result<Option<CommerceRequest>> {
        if self.buffer.is_empty() && !self.exhausted {
            self.fetch_page().await?;
        }
        Ok(self.buffer.pop_front())
    }

    async fn fetch_page(&mut self) -> Result<()> {
        let page = self.next_page;
        let requests = self.api.list_requests(&self.filter, page).await?;
        let received = requests.len();

        tracing::debug!(
            offset = page.offset,
            limit = page.limit,
            received = received,
            "Fetched page of requests"
        );

        if received < page.limit {
            self.exhausted = true;
        }
        self.next_page = page.next(received);
        self.buffer.extend(requests);

        Ok(())
    }

    fn advance_progress(&mut self) {
        self.progress += 1;

        if self.progress > self.total && !self.overrun_warned {
            self.overrun_warned = true;
            tracing::warn!(
                progress = self.progress,
                total = self.total,
                "More requests returned than were counted"
            );
        }

        (self.progress_callback)(self.progress, self.total);
        crate::log_report_progress!(self.progress, self.total);
    }

    fn finish(&mut self) {
        self.phase = Phase::Done;
        tracing::info!(
            product_id = %self.definition.product_id,
            rows = self.progress,
            total = self.total,
            "Report rows exhausted"
        );
    }
}
