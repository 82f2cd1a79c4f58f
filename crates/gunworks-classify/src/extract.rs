//! Field extraction from raw vendor records.
//!
//! Nothing here fails: malformed numbers, flags, and URLs fall back to safe
//! defaults so a record is never dropped at this stage.

use std::sync::LazyLock;

use gunworks_core::{NormalizedProduct, VendorRecord};
use regex::Regex;

use crate::brands::display_brand;

/// Vendor placeholders meaning "no advertised price".
const PRICE_PLACEHOLDERS: &[&str] = &["custom", "call", "quote"];

static IMAGE_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([?&])w=\d+&h=\d+").expect("valid image size regex"));

fn text(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

/// Parse a finite number, tolerating `$` and thousands separators.
#[must_use]
pub fn parse_number(raw: Option<&str>) -> Option<f64> {
    let cleaned: String = raw?
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A usable price: a finite number above zero that is not a placeholder token.
#[must_use]
pub fn price_or_none(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if PRICE_PLACEHOLDERS
        .iter()
        .any(|token| trimmed.eq_ignore_ascii_case(token))
    {
        return None;
    }
    parse_number(Some(trimmed)).filter(|n| *n > 0.0)
}

/// First usable price among MSRP, MAP, and list price.
#[must_use]
pub fn display_price(msrp: Option<&str>, map: Option<&str>, price: Option<&str>) -> Option<f64> {
    price_or_none(msrp)
        .or_else(|| price_or_none(map))
        .or_else(|| price_or_none(price))
}

/// Stock quantity as a non-negative integer; unparseable input is zero.
#[must_use]
pub fn parse_inventory(raw: Option<&str>) -> i64 {
    let Some(trimmed) = raw.map(str::trim) else {
        return 0;
    };
    trimmed
        .parse::<i64>()
        .ok()
        .or_else(|| {
            let (whole, frac) = trimmed.split_once('.')?;
            frac.chars()
                .all(|c| c.is_ascii_digit())
                .then(|| whole.parse::<i64>().ok())
                .flatten()
        })
        .unwrap_or(0)
        .max(0)
}

/// Vendor flag convention: `1`, `yes`, `true` (any case) are set.
#[must_use]
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw.map(str::trim).is_some_and(|v| {
        v == "1" || v.eq_ignore_ascii_case("yes") || v.eq_ignore_ascii_case("true")
    })
}

/// Rewrite a `w=<n>&h=<n>` CDN size pair to `size`; other URLs pass through.
#[must_use]
pub fn high_res_image(url: &str, size: u32) -> String {
    IMAGE_SIZE_RE
        .replace(url, format!("${{1}}w={size}&h={size}").as_str())
        .into_owned()
}

/// Pull scalar fields out of one vendor record.
///
/// Category, subcategory, and facets are left at their defaults for the
/// classifier and facet stages to fill.
#[must_use]
pub fn extract_fields<R: VendorRecord + ?Sized>(record: &R, image_size: u32) -> NormalizedProduct {
    let inventory = parse_inventory(record.quantity());

    NormalizedProduct {
        sku: text(record.sku()),
        name: text(record.name()),
        description: text(record.description()),
        brand: display_brand(record.brand().unwrap_or_default()),
        manufacturer_part_number: text(record.manufacturer_part_number()),
        price: parse_number(record.price()),
        msrp: parse_number(record.msrp()),
        map: parse_number(record.map_price()),
        display_price: display_price(record.msrp(), record.map_price(), record.price()),
        inventory,
        in_stock: inventory > 0,
        upc: text(record.upc()),
        image: high_res_image(record.image_url().unwrap_or_default().trim(), image_size),
        drop_ship: parse_flag(record.drop_ship_flag()),
        drop_ship_price: price_or_none(record.drop_ship_price()),
        allocated: parse_flag(record.allocated_flag()),
        ship_weight: parse_number(record.ship_weight()),
        raw_category: text(record.vendor_category()),
        ..NormalizedProduct::default()
    }
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
