use serde_json::json;

use super::*;

fn page(value: serde_json::Value) -> ItemsPage {
    serde_json::from_value(value).expect("valid items page")
}

fn test_credentials() -> ApiCredentials {
    ApiCredentials {
        sid: "SID".to_owned(),
        token: "token".to_owned(),
    }
}

#[test]
fn items_url_has_page_and_size() {
    let client = ChattanoogaClient::new("https://api.example.com/rest/v5/", &test_credentials(), 5, "ua")
        .expect("client");
    assert_eq!(
        client.items_url(3, 100),
        "https://api.example.com/rest/v5/items?page=3&per_page=100"
    );
}

#[test]
fn declared_pagination_drives_next_page() {
    let more = page(json!({ "items": [{}], "pagination": { "page": 1, "page_count": 2 } }));
    let last = page(json!({ "items": [{}], "pagination": { "page": 2, "page_count": 2 } }));
    assert!(has_next_page(&more, 100));
    assert!(!has_next_page(&last, 100));
}

#[test]
fn full_page_heuristic_without_pagination() {
    let full = page(json!({ "items": [{}, {}] }));
    let short = page(json!({ "items": [{}] }));
    assert!(has_next_page(&full, 2));
    assert!(!has_next_page(&short, 2));
}

#[test]
fn empty_page_ends_pagination() {
    let empty = page(json!({ "items": [], "pagination": { "page": 1, "page_count": 5 } }));
    assert!(!has_next_page(&empty, 100));
}
