use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with the API credentials populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("CHATTANOOGA_SID", "SID123");
    m.insert("CHATTANOOGA_TOKEN", "secret-token");
    m
}

#[test]
fn build_app_config_fails_without_sid_for_api_source() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CHATTANOOGA_SID"),
        "expected MissingEnvVar(CHATTANOOGA_SID), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_without_token_for_feed_source() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GUNWORKS_FEED_SOURCE", "feed");
    map.insert("CHATTANOOGA_SID", "SID123");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CHATTANOOGA_TOKEN"),
        "expected MissingEnvVar(CHATTANOOGA_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_treats_blank_credentials_as_missing() {
    let mut map = full_env();
    map.insert("CHATTANOOGA_TOKEN", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "CHATTANOOGA_TOKEN"),
        "expected MissingEnvVar(CHATTANOOGA_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_succeeds_with_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_source, FeedSource::Api);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(
        cfg.mapping_path,
        PathBuf::from("./config/category-mapping.json")
    );
    assert_eq!(cfg.output_dir, PathBuf::from("./data/products"));
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.api_per_page, 100);
    assert_eq!(cfg.api_max_pages, 500);
    assert_eq!(cfg.inter_page_delay_ms, 500);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "gunworks-sync/0.1");
    assert_eq!(cfg.image_size, 500);
    let creds = cfg.credentials.expect("api source carries credentials");
    assert_eq!(creds.sid, "SID123");
    assert_eq!(creds.token, "secret-token");
}

#[test]
fn csv_source_needs_no_credentials() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GUNWORKS_FEED_SOURCE", "csv");
    map.insert("GUNWORKS_FEED_CSV", "/tmp/feed.csv");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.feed_source, FeedSource::Csv(PathBuf::from("/tmp/feed.csv")));
    assert!(cfg.credentials.is_none());
}

#[test]
fn csv_source_requires_path() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("GUNWORKS_FEED_SOURCE", "CSV");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GUNWORKS_FEED_CSV"),
        "expected MissingEnvVar(GUNWORKS_FEED_CSV), got: {result:?}"
    );
}

#[test]
fn unknown_feed_source_is_rejected() {
    let mut map = full_env();
    map.insert("GUNWORKS_FEED_SOURCE", "ftp");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GUNWORKS_FEED_SOURCE"),
        "expected InvalidEnvVar(GUNWORKS_FEED_SOURCE), got: {result:?}"
    );
}

#[test]
fn api_base_url_override_drops_trailing_slash() {
    let mut map = full_env();
    map.insert("GUNWORKS_API_BASE_URL", "http://localhost:9999/rest/v5/");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:9999/rest/v5");
}

#[test]
fn per_page_zero_is_rejected() {
    let mut map = full_env();
    map.insert("GUNWORKS_API_PER_PAGE", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GUNWORKS_API_PER_PAGE"),
        "expected InvalidEnvVar(GUNWORKS_API_PER_PAGE), got: {result:?}"
    );
}

#[test]
fn inter_page_delay_override() {
    let mut map = full_env();
    map.insert("GUNWORKS_INTER_PAGE_DELAY_MS", "1000");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.inter_page_delay_ms, 1000);
}

#[test]
fn inter_page_delay_invalid() {
    let mut map = full_env();
    map.insert("GUNWORKS_INTER_PAGE_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GUNWORKS_INTER_PAGE_DELAY_MS"),
        "expected InvalidEnvVar(GUNWORKS_INTER_PAGE_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn image_size_invalid() {
    let mut map = full_env();
    map.insert("GUNWORKS_IMAGE_SIZE", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "GUNWORKS_IMAGE_SIZE"),
        "expected InvalidEnvVar(GUNWORKS_IMAGE_SIZE), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_credentials() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(!rendered.contains("SID123"));
    assert!(rendered.contains("[redacted]"));
}
