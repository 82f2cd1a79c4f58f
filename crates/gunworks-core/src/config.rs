use std::path::PathBuf;

use crate::app_config::{ApiCredentials, AppConfig, FeedSource};
use crate::ConfigError;

pub(crate) const DEFAULT_API_BASE_URL: &str = "https://api.chattanoogashooting.com/rest/v5";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Does not read `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let feed_source = match or_default("GUNWORKS_FEED_SOURCE", "api")
        .trim()
        .to_ascii_lowercase()
        .as_str()
    {
        "api" => FeedSource::Api,
        "feed" => FeedSource::ProductFeed,
        "csv" => FeedSource::Csv(PathBuf::from(require("GUNWORKS_FEED_CSV")?)),
        other => {
            return Err(ConfigError::InvalidEnvVar {
                var: "GUNWORKS_FEED_SOURCE".to_string(),
                reason: format!("unknown feed source '{other}'; expected api, feed, or csv"),
            })
        }
    };

    let credentials = if feed_source.needs_credentials() {
        Some(ApiCredentials {
            sid: require("CHATTANOOGA_SID")?,
            token: require("CHATTANOOGA_TOKEN")?,
        })
    } else {
        None
    };

    let log_level = or_default("GUNWORKS_LOG_LEVEL", "info");
    let mapping_path = PathBuf::from(or_default(
        "GUNWORKS_MAPPING_PATH",
        "./config/category-mapping.json",
    ));
    let output_dir = PathBuf::from(or_default("GUNWORKS_OUTPUT_DIR", "./data/products"));
    let api_base_url = or_default("GUNWORKS_API_BASE_URL", DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string();

    let api_per_page = parse_u32("GUNWORKS_API_PER_PAGE", "100")?;
    if api_per_page == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "GUNWORKS_API_PER_PAGE".to_string(),
            reason: "page size must be at least 1".to_string(),
        });
    }
    let api_max_pages = parse_usize("GUNWORKS_API_MAX_PAGES", "500")?;
    let inter_page_delay_ms = parse_u64("GUNWORKS_INTER_PAGE_DELAY_MS", "500")?;
    let request_timeout_secs = parse_u64("GUNWORKS_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("GUNWORKS_USER_AGENT", "gunworks-sync/0.1");
    let image_size = parse_u32("GUNWORKS_IMAGE_SIZE", "500")?;

    Ok(AppConfig {
        log_level,
        mapping_path,
        output_dir,
        feed_source,
        credentials,
        api_base_url,
        api_per_page,
        api_max_pages,
        inter_page_delay_ms,
        request_timeout_secs,
        user_agent,
        image_size,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
