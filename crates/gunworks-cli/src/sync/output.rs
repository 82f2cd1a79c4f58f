//! Per-category product files.
//!
//! Each file is a complete snapshot: written to `<category>.json.tmp` and
//! renamed over `<category>.json`, so readers see the old file or the new one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};
use gunworks_core::{Category, NormalizedProduct};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum FilterKind {
    Checkbox,
    Range,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FilterDefinition {
    pub label: &'static str,
    #[serde(rename = "type")]
    pub kind: FilterKind,
    pub searchable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_count: Option<u32>,
    pub collapsible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Filters {
    pub enabled: Vec<&'static str>,
    pub definitions: BTreeMap<&'static str, FilterDefinition>,
}

fn checkbox(label: &'static str, searchable: bool, show_count: u32) -> FilterDefinition {
    FilterDefinition {
        label,
        kind: FilterKind::Checkbox,
        searchable,
        show_count: Some(show_count),
        collapsible: true,
        min: None,
        max: None,
    }
}

fn definition(key: &str, category: Category) -> Option<FilterDefinition> {
    let def = match key {
        "subcategory" => checkbox("Type", false, 8),
        "caliber" => checkbox("Caliber", true, 5),
        "brand" => checkbox("Brand", true, 5),
        "bulletType" => checkbox("Bullet Type", true, 6),
        "caseMaterial" => checkbox("Case Material", false, 4),
        "grainWeight" => checkbox("Grain Weight", false, 5),
        "roundCount" => checkbox("Round Count", false, 8),
        "gearType" => checkbox(
            match category {
                Category::Optics => "Optic Type",
                Category::Survival => "Survival Gear",
                Category::Reloading => "Component Type",
                Category::GunParts => "Part Type",
                _ => "Gear Type",
            },
            false,
            8,
        ),
        "stock" => checkbox("Stock Status", false, 2),
        "price" => FilterDefinition {
            label: "Price",
            kind: FilterKind::Range,
            searchable: false,
            show_count: None,
            collapsible: true,
            min: Some(0),
            max: Some(10_000),
        },
        _ => return None,
    };
    Some(def)
}

/// Filter groups offered on a category page, in display order.
pub(crate) fn filters_for(category: Category) -> Filters {
    let enabled: &[&'static str] = match category {
        Category::Ammunition => &[
            "subcategory",
            "caliber",
            "brand",
            "bulletType",
            "caseMaterial",
            "grainWeight",
            "roundCount",
            "price",
            "stock",
        ],
        Category::Reloading => &[
            "gearType",
            "caliber",
            "brand",
            "bulletType",
            "grainWeight",
            "price",
            "stock",
        ],
        Category::Magazines => &["subcategory", "caliber", "brand", "roundCount", "price", "stock"],
        Category::GunParts => &["gearType", "caliber", "brand", "price", "stock"],
        Category::Optics | Category::Survival | Category::Gear => {
            &["gearType", "brand", "price", "stock"]
        }
    };

    Filters {
        enabled: enabled.to_vec(),
        definitions: enabled
            .iter()
            .filter_map(|key| definition(key, category).map(|def| (*key, def)))
            .collect(),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryFile<'a> {
    pub category: Category,
    pub last_updated: DateTime<Utc>,
    pub total_products: usize,
    pub filters: Filters,
    pub products: &'a [NormalizedProduct],
}

impl<'a> CategoryFile<'a> {
    pub(crate) fn new(
        category: Category,
        products: &'a [NormalizedProduct],
        last_updated: DateTime<Utc>,
    ) -> Self {
        Self {
            category,
            last_updated,
            total_products: products.len(),
            filters: filters_for(category),
            products,
        }
    }
}

pub(crate) fn category_path(output_dir: &Path, category: Category) -> PathBuf {
    output_dir.join(format!("{}.json", category.as_str()))
}

/// Serialize and atomically replace one category's file.
///
/// # Errors
///
/// Returns an error if the output directory cannot be created, or the file
/// cannot be serialized, written, or renamed into place.
pub(crate) fn write_category_file(
    output_dir: &Path,
    file: &CategoryFile<'_>,
) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create output dir {}", output_dir.display()))?;

    let path = category_path(output_dir, file.category);
    let tmp = path.with_extension("json.tmp");
    let body = serde_json::to_vec_pretty(file)
        .with_context(|| format!("failed to serialize {} products", file.category))?;

    std::fs::write(&tmp, body).with_context(|| format!("failed to write {}", tmp.display()))?;
    if let Err(e) = std::fs::rename(&tmp, &path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e).with_context(|| format!("failed to move {} into place", path.display()));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn product(sku: &str, category: Category) -> NormalizedProduct {
        NormalizedProduct {
            sku: sku.to_string(),
            name: format!("ITEM {sku}"),
            category,
            display_price: Some(9.99),
            inventory: 1,
            in_stock: true,
            ..NormalizedProduct::default()
        }
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 12, 0, 0).single().expect("valid time")
    }

    #[test]
    fn every_enabled_filter_has_a_definition() {
        for category in Category::ALL {
            let filters = filters_for(category);
            assert!(!filters.enabled.is_empty());
            for key in &filters.enabled {
                assert!(
                    filters.definitions.contains_key(key),
                    "{category} enables {key} without a definition"
                );
            }
        }
    }

    #[test]
    fn price_filter_is_a_range() {
        let def = &filters_for(Category::Gear).definitions["price"];
        assert_eq!(def.kind, FilterKind::Range);
        assert_eq!((def.min, def.max), (Some(0), Some(10_000)));
    }

    #[test]
    fn file_shape_matches_storefront_contract() {
        let products = vec![product("A1", Category::Ammunition)];
        let file = CategoryFile::new(Category::Ammunition, &products, timestamp());
        let json = serde_json::to_value(&file).expect("serializes");

        assert_eq!(json["category"], "ammunition");
        assert_eq!(json["lastUpdated"], "2026-01-15T12:00:00Z");
        assert_eq!(json["totalProducts"], 1);
        assert_eq!(json["products"][0]["sku"], "A1");
        assert_eq!(json["products"][0]["displayPrice"], 9.99);
        assert_eq!(json["filters"]["definitions"]["caliber"]["type"], "checkbox");
        assert_eq!(json["filters"]["definitions"]["caliber"]["showCount"], 5);
        assert!(json["filters"]["definitions"]["price"].get("showCount").is_none());
    }

    #[test]
    fn write_replaces_previous_snapshot() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("products");

        let first = vec![product("A1", Category::Optics), product("A2", Category::Optics)];
        let path = write_category_file(&out, &CategoryFile::new(Category::Optics, &first, timestamp()))
            .expect("first write");
        assert_eq!(path, out.join("optics.json"));

        let second = vec![product("B1", Category::Optics)];
        write_category_file(&out, &CategoryFile::new(Category::Optics, &second, timestamp()))
            .expect("second write");

        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&path).expect("read back")).expect("json");
        assert_eq!(written["totalProducts"], 1);
        assert_eq!(written["products"][0]["sku"], "B1");
        assert!(!out.join("optics.json.tmp").exists());
    }

    #[test]
    fn empty_category_still_writes_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write_category_file(dir.path(), &CategoryFile::new(Category::Gear, &[], timestamp()))
            .expect("write");
        let written: serde_json::Value =
            serde_json::from_slice(&std::fs::read(path).expect("read back")).expect("json");
        assert_eq!(written["totalProducts"], 0);
        assert_eq!(written["products"], serde_json::json!([]));
    }

    #[test]
    fn unwritable_dir_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"not a dir").expect("write blocker");
        let result = write_category_file(&blocker, &CategoryFile::new(Category::Gear, &[], timestamp()));
        assert!(result.is_err());
    }
}
