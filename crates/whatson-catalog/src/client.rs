//! HTTP client for the upstream catalog API.
//!
//! One GET per page against an already-paginated JSON endpoint, consumed in
//! fetch-all mode by following `totalPages`. Requests can be routed through
//! a CORS-relay passthrough that receives the percent-encoded target URL as
//! its `url` query parameter.

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use whatson_core::CatalogEvent;

use crate::error::{CatalogError, CatalogResult};
use crate::normalize::normalize_events;
use crate::raw::{CatalogPage, RawCatalogEvent};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the catalog listing endpoint.
#[derive(Debug)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: Url,
    relay: Option<Url>,
}

impl CatalogClient {
    /// Creates a client for the given endpoint.
    ///
    /// When `relay` is set, every request goes to the relay with the real
    /// target URL percent-encoded into its query string.
    pub fn new(endpoint: Url, relay: Option<Url>, timeout: Duration) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, endpoint, relay })
    }

    /// The URL actually requested for a given page.
    fn page_url(&self, page: u32) -> Url {
        let mut target = self.endpoint.clone();
        target.query_pairs_mut().append_pair("page", &page.to_string());

        match &self.relay {
            None => target,
            Some(relay) => {
                let mut relayed = relay.clone();
                relayed.set_query(Some(&format!("url={}", urlencoding::encode(target.as_str()))));
                relayed
            }
        }
    }

    /// Fetches and parses one page of the listing.
    pub async fn fetch_page(&self, page: u32) -> CatalogResult<CatalogPage> {
        let url = self.page_url(page);
        debug!(%url, page, "fetching catalog page");

        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Network("request timeout".to_string())
            } else if e.is_connect() {
                CatalogError::Network(format!("connection failed: {e}"))
            } else {
                CatalogError::Network(format!("request failed: {e}"))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "catalog API returned an error status");
            return Err(CatalogError::Http { status: status.as_u16() });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Network(format!("failed to read response body: {e}")))?;
        parse_page(&body)
    }

    /// Fetches every page of the listing.
    ///
    /// The first page announces `totalPages`; the rest are requested in
    /// order. One request is in flight at a time.
    pub async fn fetch_all(&self) -> CatalogResult<Vec<RawCatalogEvent>> {
        let first = self.fetch_page(1).await?;
        let total_pages = first.total_pages.unwrap_or(1).max(1);
        let mut docs = first.docs;

        for page in 2..=total_pages {
            docs.extend(self.fetch_page(page).await?.docs);
        }

        debug!(events = docs.len(), total_pages, "fetched catalog listing");
        Ok(docs)
    }

    /// Fetches every page and normalizes the records into core events.
    pub async fn fetch_events(&self) -> CatalogResult<Vec<CatalogEvent>> {
        let raw = self.fetch_all().await?;
        Ok(normalize_events(&raw))
    }
}

/// Parses a page body, mapping shape errors to [`CatalogError::InvalidResponse`].
pub fn parse_page(body: &str) -> CatalogResult<CatalogPage> {
    serde_json::from_str(body).map_err(|e| CatalogError::InvalidResponse(e.to_string()))
}
