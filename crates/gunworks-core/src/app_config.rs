use std::path::PathBuf;

/// Where vendor records come from for a sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    /// Paginated `GET /items` REST endpoint.
    Api,
    /// CSV snapshot whose download URL is issued by the REST API.
    ProductFeed,
    /// CSV snapshot already on disk.
    Csv(PathBuf),
}

impl FeedSource {
    /// Whether this source talks to the vendor API and therefore needs credentials.
    #[must_use]
    pub fn needs_credentials(&self) -> bool {
        matches!(self, FeedSource::Api | FeedSource::ProductFeed)
    }
}

impl std::fmt::Display for FeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedSource::Api => write!(f, "api"),
            FeedSource::ProductFeed => write!(f, "feed"),
            FeedSource::Csv(path) => write!(f, "csv ({})", path.display()),
        }
    }
}

/// Vendor-issued API identity. The token is hashed before it goes on the wire.
#[derive(Clone)]
pub struct ApiCredentials {
    pub sid: String,
    pub token: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("sid", &"[redacted]")
            .field("token", &"[redacted]")
            .finish()
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub mapping_path: PathBuf,
    pub output_dir: PathBuf,
    pub feed_source: FeedSource,
    pub credentials: Option<ApiCredentials>,
    pub api_base_url: String,
    pub api_per_page: u32,
    pub api_max_pages: usize,
    pub inter_page_delay_ms: u64,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub image_size: u32,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("mapping_path", &self.mapping_path)
            .field("output_dir", &self.output_dir)
            .field("feed_source", &self.feed_source)
            .field(
                "credentials",
                &self.credentials.as_ref().map(|_| "[redacted]"),
            )
            .field("api_base_url", &self.api_base_url)
            .field("api_per_page", &self.api_per_page)
            .field("api_max_pages", &self.api_max_pages)
            .field("inter_page_delay_ms", &self.inter_page_delay_ms)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("image_size", &self.image_size)
            .finish()
    }
}
