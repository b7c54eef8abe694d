//! Commerce platform trait definition
//!
//! `CommerceApi` is the narrow view of the platform the report needs: a
//! filterable, countable, pageable `requests` collection and the pricing
//! namespace's price points. The HTTP client implements it; tests swap in
//! in-memory fakes.

use crate::domain::{CommerceRequest, PriceListVersionId, PricePoint, Result};
use crate::rql::Filter;
use async_trait::async_trait;

/// One page of a collection listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Records to skip
    pub offset: usize,
    /// Maximum records to return
    pub limit: usize,
}

impl PageRequest {
    /// First page of the given size
    pub fn first(limit: usize) -> Self {
        Self { offset: 0, limit }
    }

    /// The page following this one, given how many records this one held
    pub fn next(&self, received: usize) -> Self {
        Self {
            offset: self.offset + received,
            limit: self.limit,
        }
    }
}

/// Trait for commerce platform access
///
/// # Example
///
/// ```no_run
/// use margin_report::adapters::connect::{CommerceApi, PageRequest};
/// use margin_report::rql::field;
///
/// # async fn example(api: &dyn CommerceApi) -> margin_report::domain::Result<()> {
/// let filter = field("status").eq("approved");
/// let total = api.count_requests(&filter).await?;
/// let first_page = api.list_requests(&filter, PageRequest::first(100)).await?;
/// println!("{} of {total}", first_page.len());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait CommerceApi: Send + Sync {
    /// Count the requests matching a filter
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server does not report
    /// a total.
    async fn count_requests(&self, filter: &Filter) -> Result<u64>;

    /// Fetch one page of requests matching a filter
    ///
    /// An empty page means the collection is exhausted.
    async fn list_requests(&self, filter: &Filter, page: PageRequest)
        -> Result<Vec<CommerceRequest>>;

    /// Fetch the price points of one item in a price list version,
    /// projected to their attributes
    async fn list_price_points(
        &self,
        version: &PriceListVersionId,
        item_global_id: &str,
    ) -> Result<Vec<PricePoint>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_advances_by_received() {
        let page = PageRequest::first(100);
        assert_eq!(page, PageRequest { offset: 0, limit: 100 });

        let next = page.next(100);
        assert_eq!(next.offset, 100);
        assert_eq!(next.limit, 100);

        assert_eq!(next.next(37).offset, 137);
    }
}
