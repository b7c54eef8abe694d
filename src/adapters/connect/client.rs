//! HTTP implementation of [`CommerceApi`]
//!
//! Talks to the platform's public REST API with `reqwest`. There is no
//! retry logic: a failed call fails the report run.

use super::models::ContentRange;
use super::traits::{CommerceApi, PageRequest};
use crate::config::{ConnectConfig, SecretString};
use crate::domain::{
    CommerceRequest, ConnectError, PriceListVersionId, PricePoint, ReportError, Result,
};
use crate::rql::{field, Filter};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_RANGE};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Platform API client
///
/// # Example
///
/// ```no_run
/// use margin_report::adapters::connect::ConnectClient;
/// use margin_report::config::ConnectConfig;
///
/// # fn example() -> margin_report::domain::Result<()> {
/// let client = ConnectClient::new(&ConnectConfig::default())?;
/// assert_eq!(client.base_url(), "https://api.connect.cloudblue.com/public/v1");
/// # Ok(())
/// # }
/// ```
pub struct ConnectClient {
    /// Base URL without trailing slash
    base_url: String,

    /// HTTP client for making requests
    client: Client,

    /// Sent verbatim as the `Authorization` header
    api_key: Option<SecretString>,

    /// Page size used for price point listings
    page_size: usize,
}

impl ConnectClient {
    /// Create a client from connection settings
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Configuration`] if the base URL does not parse
    /// or the HTTP client cannot be built.
    pub fn new(config: &ConnectConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            ReportError::Configuration(format!("Invalid connect.base_url '{base_url}': {e}"))
        })?;

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT);

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification disabled for platform API");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            ReportError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            base_url,
            client,
            api_key: config.api_key.clone(),
            page_size: config.page_size,
        })
    }

    /// Get the base URL of the platform API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a collection URL carrying an RQL filter, an optional field
    /// projection and paging parameters
    fn collection_url(
        &self,
        path: &str,
        filter: &Filter,
        select: &[&str],
        page: PageRequest,
    ) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))
            .map_err(|e| ReportError::Configuration(format!("Invalid API URL for {path}: {e}")))?;

        let mut clauses = Vec::with_capacity(4);
        if !filter.is_all() {
            clauses.push(filter.to_rql());
        }
        if !select.is_empty() {
            clauses.push(format!("select({})", select.join(",")));
        }
        clauses.push(format!("limit={}", page.limit));
        clauses.push(format!("offset={}", page.offset));
        url.set_query(Some(&clauses.join("&")));

        Ok(url)
    }

    /// Send a GET and turn non-success statuses into errors
    async fn get(&self, url: Url) -> Result<Response> {
        tracing::debug!(url = %url, "GET");

        let mut request = self.client.get(url.clone()).header(ACCEPT, "application/json");
        if let Some(ref key) = self.api_key {
            request = request.header(AUTHORIZATION, key.expose_secret().as_ref());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ConnectError::Timeout(format!("{url}: {e}"))
            } else {
                ConnectError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = match status {
            StatusCode::NOT_FOUND => ConnectError::NotFound(url.path().to_string()),
            s if s.is_client_error() => ConnectError::ClientError {
                status: s.as_u16(),
                message: body,
            },
            s => ConnectError::ServerError {
                status: s.as_u16(),
                message: body,
            },
        };

        tracing::error!(url = %url, status = status.as_u16(), error = %error, "Platform API call failed");
        Err(error.into())
    }
}

#[async_trait]
impl CommerceApi for ConnectClient {
    async fn count_requests(&self, filter: &Filter) -> Result<u64> {
        let url = self.collection_url("requests", filter, &[], PageRequest::first(0))?;
        let response = self.get(url).await?;

        let header = response
            .headers()
            .get(CONTENT_RANGE)
            .ok_or_else(|| {
                ConnectError::InvalidResponse("Count response has no Content-Range header".into())
            })?
            .to_str()
            .map_err(|e| ConnectError::InvalidResponse(format!("Unreadable Content-Range: {e}")))?;

        let range: ContentRange = header.parse()?;
        Ok(range.total)
    }

    async fn list_requests(
        &self,
        filter: &Filter,
        page: PageRequest,
    ) -> Result<Vec<CommerceRequest>> {
        let url = self.collection_url("requests", filter, &[], page)?;
        let response = self.get(url).await?;

        let requests = response
            .json::<Vec<CommerceRequest>>()
            .await
            .map_err(|e| ConnectError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            offset = page.offset,
            limit = page.limit,
            received = requests.len(),
            "Fetched requests page"
        );

        Ok(requests)
    }

    async fn list_price_points(
        &self,
        version: &PriceListVersionId,
        item_global_id: &str,
    ) -> Result<Vec<PricePoint>> {
        let path = format!("pricing/versions/{version}/points");
        let filter = field("item.global_id").eq(item_global_id);
        // Only the attributes carry prices
        let url = self.collection_url(
            &path,
            &filter,
            &["attributes"],
            PageRequest::first(self.page_size),
        )?;
        let response = self.get(url).await?;

        let points = response
            .json::<Vec<PricePoint>>()
            .await
            .map_err(|e| ConnectError::InvalidResponse(e.to_string()))?;

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ConnectClient {
        let config = ConnectConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        };
        ConnectClient::new(&config).unwrap()
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = client("https://api.example.com/public/v1/");
        assert_eq!(client.base_url(), "https://api.example.com/public/v1");
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ConnectConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            ConnectClient::new(&config),
            Err(ReportError::Configuration(_))
        ));
    }

    #[test]
    fn test_collection_url_with_filter() {
        let client = client("https://api.example.com/public/v1");
        let filter = field("type").eq("purchase") & field("status").eq("approved");
        let url = client
            .collection_url("requests", &filter, &[], PageRequest { offset: 200, limit: 100 })
            .unwrap();

        assert_eq!(url.path(), "/public/v1/requests");
        assert_eq!(
            url.query(),
            Some("and(eq(type,purchase),eq(status,approved))&limit=100&offset=200")
        );
    }

    #[test]
    fn test_collection_url_without_filter() {
        let client = client("https://api.example.com/public/v1");
        let url = client
            .collection_url("/requests", &Filter::all(), &[], PageRequest::first(0))
            .unwrap();
        assert_eq!(url.query(), Some("limit=0&offset=0"));
    }

    #[test]
    fn test_collection_url_with_select() {
        let client = client("https://api.example.com/public/v1");
        let filter = field("item.global_id").eq("PRD-620-226-877-0001");
        let url = client
            .collection_url(
                "pricing/versions/PLV-762-354-876-0001/points",
                &filter,
                &["attributes"],
                PageRequest::first(100),
            )
            .unwrap();

        assert_eq!(
            url.query(),
            Some("eq(item.global_id,PRD-620-226-877-0001)&select(attributes)&limit=100&offset=0")
        );
    }
}
