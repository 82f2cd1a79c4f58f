//! Vendor feed adapters: the REST API client and the CSV product feed.

pub mod auth;
pub mod client;
pub mod csv_feed;
pub mod error;
pub mod types;

pub use client::{ChattanoogaClient, ItemsFetch};
pub use csv_feed::{read_csv, read_csv_path, CsvFeed, CsvRecord};
pub use error::VendorError;
pub use gunworks_core::VendorRecord;
pub use types::{ApiItem, ItemsPage, Pagination, ProductFeedResponse};
