//! Vendor REST API response types.
//!
//! ### Scalars
//! The API is loose about scalar types: prices arrive as numbers or numeric
//! strings, flags as `0`/`1` integers or booleans, and any field may be
//! `null`. [`ApiItem`] reads every scalar as text so field extraction sees
//! the same raw tokens a CSV row would supply.
//!
//! ### Pagination
//! `pagination.page` / `pagination.page_count` when present. Some responses
//! omit the object entirely, in which case callers fall back to the
//! full-page heuristic.

use gunworks_core::VendorRecord;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Top-level response from `GET /items`.
#[derive(Debug, Deserialize)]
pub struct ItemsPage {
    #[serde(default)]
    pub items: Vec<ApiItem>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_count: u32,
}

impl Pagination {
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page < self.page_count
    }
}

/// Response from `GET /items/product-feed`.
#[derive(Debug, Deserialize)]
pub struct ProductFeedResponse {
    #[serde(default)]
    pub product_feed: Option<ProductFeed>,
}

#[derive(Debug, Deserialize)]
pub struct ProductFeed {
    #[serde(default)]
    pub url: Option<String>,
}

impl ProductFeedResponse {
    /// The download URL, when present and non-blank.
    #[must_use]
    pub fn feed_url(&self) -> Option<&str> {
        self.product_feed
            .as_ref()
            .and_then(|feed| feed.url.as_deref())
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

/// One catalog item from the vendor API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiItem {
    #[serde(default, deserialize_with = "scalar_text")]
    pub cssi_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub manufacturer_item_number: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub retail_price: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub custom_price: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub map_price: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub msrp: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub inventory: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub in_stock_flag: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub serialized_flag: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub ffl_flag: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub drop_ship_flag: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub drop_ship_price: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub allocated_flag: Option<String>,
    #[serde(default, alias = "upc", deserialize_with = "scalar_text")]
    pub upc_code: Option<String>,
    #[serde(default, alias = "image", deserialize_with = "scalar_text")]
    pub image_location: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub ship_weight: Option<String>,
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

impl VendorRecord for ApiItem {
    fn sku(&self) -> Option<&str> {
        self.cssi_id.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn brand(&self) -> Option<&str> {
        self.manufacturer.as_deref()
    }

    fn manufacturer_part_number(&self) -> Option<&str> {
        self.manufacturer_item_number.as_deref()
    }

    fn vendor_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    fn msrp(&self) -> Option<&str> {
        self.msrp.as_deref()
    }

    fn map_price(&self) -> Option<&str> {
        self.map_price.as_deref()
    }

    /// Account-specific price when set, otherwise the list price.
    fn price(&self) -> Option<&str> {
        self.custom_price
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or(self.retail_price.as_deref())
    }

    fn quantity(&self) -> Option<&str> {
        self.inventory.as_deref()
    }

    fn upc(&self) -> Option<&str> {
        self.upc_code.as_deref()
    }

    fn image_url(&self) -> Option<&str> {
        self.image_location.as_deref()
    }

    fn drop_ship_flag(&self) -> Option<&str> {
        self.drop_ship_flag.as_deref()
    }

    fn drop_ship_price(&self) -> Option<&str> {
        self.drop_ship_price.as_deref()
    }

    fn allocated_flag(&self) -> Option<&str> {
        self.allocated_flag.as_deref()
    }

    fn ship_weight(&self) -> Option<&str> {
        self.ship_weight.as_deref()
    }

    fn in_stock_flag(&self) -> Option<&str> {
        self.in_stock_flag.as_deref()
    }

    fn serialized_flag(&self) -> Option<&str> {
        self.serialized_flag.as_deref()
    }

    fn ffl_flag(&self) -> Option<&str> {
        self.ffl_flag.as_deref()
    }
}
