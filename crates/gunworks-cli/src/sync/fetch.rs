//! Pull raw records from the configured vendor source.

use anyhow::Context;
use gunworks_core::{AppConfig, FeedSource};
use gunworks_vendor::{read_csv_path, ApiItem, ChattanoogaClient, CsvRecord};

/// Raw records in their source-specific shape.
#[derive(Debug)]
pub(crate) enum FeedRecords {
    Api(Vec<ApiItem>),
    Csv(Vec<CsvRecord>),
}

impl FeedRecords {
    pub(crate) fn len(&self) -> usize {
        match self {
            FeedRecords::Api(items) => items.len(),
            FeedRecords::Csv(rows) => rows.len(),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
pub(crate) struct FetchedFeed {
    pub records: FeedRecords,
    /// Rows that could not be parsed.
    pub record_errors: usize,
    /// API pages that failed and truncated pagination.
    pub page_errors: usize,
    pub pages_fetched: usize,
    /// Pagination stopped at the configured page cap with pages remaining.
    pub hit_page_limit: bool,
}

fn build_client(config: &AppConfig) -> anyhow::Result<ChattanoogaClient> {
    let credentials = config
        .credentials
        .as_ref()
        .context("vendor API credentials are not configured")?;
    ChattanoogaClient::new(
        &config.api_base_url,
        credentials,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .context("failed to build vendor API client")
}

/// Read every record from `config.feed_source`.
///
/// API page failures are absorbed into [`FetchedFeed::page_errors`]; a
/// product-feed or local CSV failure is an error for the whole run.
pub(crate) async fn fetch_feed(config: &AppConfig) -> anyhow::Result<FetchedFeed> {
    match &config.feed_source {
        FeedSource::Api => {
            let client = build_client(config)?;
            let fetch = client
                .fetch_all_items(
                    config.api_per_page,
                    config.api_max_pages,
                    config.inter_page_delay_ms,
                )
                .await;
            Ok(FetchedFeed {
                records: FeedRecords::Api(fetch.items),
                record_errors: 0,
                page_errors: fetch.page_errors,
                pages_fetched: fetch.pages_fetched,
                hit_page_limit: fetch.hit_page_limit,
            })
        }
        FeedSource::ProductFeed => {
            let client = build_client(config)?;
            let feed = client
                .fetch_product_feed()
                .await
                .context("failed to download vendor product feed")?;
            Ok(FetchedFeed {
                records: FeedRecords::Csv(feed.records),
                record_errors: feed.record_errors,
                page_errors: 0,
                pages_fetched: 0,
                hit_page_limit: false,
            })
        }
        FeedSource::Csv(path) => {
            let feed = read_csv_path(path)
                .with_context(|| format!("failed to read CSV feed {}", path.display()))?;
            Ok(FetchedFeed {
                records: FeedRecords::Csv(feed.records),
                record_errors: feed.record_errors,
                page_errors: 0,
                pages_fetched: 0,
                hit_page_limit: false,
            })
        }
    }
}
