//! Field extraction, facet inference, and category classification for vendor
//! catalog records.

pub mod brands;
pub mod classifier;
pub mod extract;
pub mod facets;
pub mod rules;

pub use brands::{brand_rank, display_brand, BRAND_PRIORITY, UNRANKED};
pub use classifier::{classify, classify_name, Classification, Classifier, Pass, Subject};
pub use extract::{display_price, extract_fields, high_res_image};
pub use facets::{extract_facets, Facets};
