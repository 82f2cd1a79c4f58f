use std::time::Duration;

use gunworks_core::ApiCredentials;
use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::auth::authorization_header;
use crate::csv_feed::{read_csv, CsvFeed};
use crate::error::VendorError;
use crate::types::{ApiItem, ItemsPage, ProductFeedResponse};

/// HTTP client for the Chattanooga Shooting Supplies REST API.
///
/// Every request carries the vendor's `Basic <SID>:<md5(token)>`
/// authorization header. Pagination is strictly sequential with a fixed
/// delay between pages.
pub struct ChattanoogaClient {
    client: Client,
    base_url: String,
    authorization: String,
}

/// Items gathered by [`ChattanoogaClient::fetch_all_items`].
#[derive(Debug, Default)]
pub struct ItemsFetch {
    pub items: Vec<ApiItem>,
    pub pages_fetched: usize,
    /// Pages that failed; a failure ends pagination, so this is 0 or 1.
    pub page_errors: usize,
    pub hit_page_limit: bool,
}

/// Whether another page should be requested after `page`.
///
/// Uses the declared `pagination` block when present, otherwise assumes more
/// pages while a full page of `per_page` items comes back. An empty page
/// always ends pagination.
pub(crate) fn has_next_page(page: &ItemsPage, per_page: u32) -> bool {
    if page.items.is_empty() {
        return false;
    }
    match page.pagination {
        Some(p) if p.page_count > 0 => p.has_more(),
        _ => page.items.len() >= per_page as usize,
    }
}

impl ChattanoogaClient {
    /// Creates a client with the configured timeout, `User-Agent`, and
    /// credentials.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        base_url: &str,
        credentials: &ApiCredentials,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, VendorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
            authorization: authorization_header(&credentials.sid, &credentials.token),
        })
    }

    fn items_url(&self, page: u32, per_page: u32) -> String {
        format!("{}/items?page={page}&per_page={per_page}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        context: &str,
    ) -> Result<T, VendorError> {
        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(VendorError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| VendorError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }

    /// Fetches one page of `GET /items`.
    ///
    /// # Errors
    ///
    /// - [`VendorError::UnexpectedStatus`] for any non-2xx response.
    /// - [`VendorError::Http`] on network or TLS failure.
    /// - [`VendorError::Deserialize`] if the body is not the expected shape.
    pub async fn fetch_items_page(&self, page: u32, per_page: u32) -> Result<ItemsPage, VendorError> {
        let url = self.items_url(page, per_page);
        self.get_json(&url, &format!("items page {page}")).await
    }

    /// Fetches every page of `GET /items`, starting at page 1.
    ///
    /// A page failure is logged and ends pagination; items from earlier pages
    /// are kept. Pagination also stops after `max_pages` pages.
    pub async fn fetch_all_items(
        &self,
        per_page: u32,
        max_pages: usize,
        inter_page_delay_ms: u64,
    ) -> ItemsFetch {
        let mut fetch = ItemsFetch::default();
        let mut page: u32 = 1;

        loop {
            if fetch.pages_fetched >= max_pages {
                tracing::warn!(max_pages, "page limit reached; stopping pagination");
                fetch.hit_page_limit = true;
                break;
            }

            if page > 1 && inter_page_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_page_delay_ms)).await;
            }

            match self.fetch_items_page(page, per_page).await {
                Ok(response) => {
                    fetch.pages_fetched += 1;
                    let more = has_next_page(&response, per_page);
                    tracing::debug!(page, items = response.items.len(), more, "fetched items page");
                    fetch.items.extend(response.items);
                    if !more {
                        break;
                    }
                    page += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        page,
                        status = ?e.status(),
                        error = %e,
                        "items page failed; stopping pagination"
                    );
                    fetch.page_errors += 1;
                    break;
                }
            }
        }

        tracing::info!(
            pages = fetch.pages_fetched,
            items = fetch.items.len(),
            page_errors = fetch.page_errors,
            "finished fetching items"
        );
        fetch
    }

    /// Asks the API for the current product-feed download URL.
    ///
    /// # Errors
    ///
    /// Any error from the request, or [`VendorError::MissingFeedUrl`] when
    /// the response carries no URL.
    pub async fn fetch_product_feed_url(&self) -> Result<String, VendorError> {
        let url = format!("{}/items/product-feed", self.base_url);
        let response: ProductFeedResponse = self.get_json(&url, "product feed").await?;
        response
            .feed_url()
            .map(str::to_owned)
            .ok_or(VendorError::MissingFeedUrl { url })
    }

    /// Downloads the CSV at `feed_url` and reads it.
    ///
    /// The feed URL is pre-signed, so no authorization header is sent.
    ///
    /// # Errors
    ///
    /// [`VendorError::UnexpectedStatus`] for non-2xx, [`VendorError::Http`]
    /// on transport failure, or any error from [`read_csv`].
    pub async fn download_feed(&self, feed_url: &str) -> Result<CsvFeed, VendorError> {
        let response = self.client.get(feed_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(VendorError::UnexpectedStatus {
                status: status.as_u16(),
                url: feed_url.to_owned(),
            });
        }
        let body = response.bytes().await?;
        read_csv(body.as_ref())
    }

    /// Resolves the product-feed URL and downloads it.
    ///
    /// # Errors
    ///
    /// Any error from [`Self::fetch_product_feed_url`] or
    /// [`Self::download_feed`].
    pub async fn fetch_product_feed(&self) -> Result<CsvFeed, VendorError> {
        let feed_url = self.fetch_product_feed_url().await?;
        tracing::info!("product feed URL received; downloading CSV");
        self.download_feed(&feed_url).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
