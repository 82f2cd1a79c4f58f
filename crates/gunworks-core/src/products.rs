use serde::{Deserialize, Serialize};

/// Storefront category. Every listed product belongs to exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Ammunition,
    Magazines,
    Reloading,
    GunParts,
    Optics,
    Survival,
    /// Catch-all for anything no narrower category claims.
    #[default]
    Gear,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Ammunition,
        Category::Magazines,
        Category::Reloading,
        Category::GunParts,
        Category::Optics,
        Category::Survival,
        Category::Gear,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Ammunition => "ammunition",
            Category::Magazines => "magazines",
            Category::Reloading => "reloading",
            Category::GunParts => "gun-parts",
            Category::Optics => "optics",
            Category::Survival => "survival",
            Category::Gear => "gear",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct ParseCategoryError(pub String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the canonical slugs plus the spellings found in hand-maintained
    /// mapping files (`Gun Parts`, `gun_parts`, `Ammo`, `Outdoors`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();
        match key.as_str() {
            "ammunition" | "ammo" => Ok(Category::Ammunition),
            "magazines" | "magazine" => Ok(Category::Magazines),
            "reloading" => Ok(Category::Reloading),
            "gun-parts" | "parts" => Ok(Category::GunParts),
            "optics" => Ok(Category::Optics),
            "survival" | "outdoors" => Ok(Category::Survival),
            "gear" => Ok(Category::Gear),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Grain-weight band used for filter grouping. The raw weight is not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GrainBucket {
    UpTo40,
    From41To80,
    From81To150,
    From151To250,
    Over250,
}

impl GrainBucket {
    pub const ALL: [GrainBucket; 5] = [
        GrainBucket::UpTo40,
        GrainBucket::From41To80,
        GrainBucket::From81To150,
        GrainBucket::From151To250,
        GrainBucket::Over250,
    ];

    #[must_use]
    pub fn from_grains(grains: u32) -> Self {
        match grains {
            0..=40 => GrainBucket::UpTo40,
            41..=80 => GrainBucket::From41To80,
            81..=150 => GrainBucket::From81To150,
            151..=250 => GrainBucket::From151To250,
            _ => GrainBucket::Over250,
        }
    }

    /// Smallest weight that lands in this band; `from_grains(b.lower_bound()) == b`.
    #[must_use]
    pub fn lower_bound(self) -> u32 {
        match self {
            GrainBucket::UpTo40 => 0,
            GrainBucket::From41To80 => 41,
            GrainBucket::From81To150 => 81,
            GrainBucket::From151To250 => 151,
            GrainBucket::Over250 => 251,
        }
    }

    /// Re-bucket an already bucketed value. Always returns `self`.
    #[must_use]
    pub fn rebucket(self) -> Self {
        Self::from_grains(self.lower_bound())
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GrainBucket::UpTo40 => "0-40",
            GrainBucket::From41To80 => "41-80",
            GrainBucket::From81To150 => "81-150",
            GrainBucket::From151To250 => "151-250",
            GrainBucket::Over250 => "250+",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label.trim())
    }
}

impl std::fmt::Display for GrainBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for GrainBucket {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for GrainBucket {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        GrainBucket::from_label(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown grain band '{raw}'")))
    }
}

/// A vendor record after field extraction, classification, and facet inference.
///
/// Serialized in camelCase for the storefront's product JSON files.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub brand: String,
    pub manufacturer_part_number: String,
    pub price: Option<f64>,
    pub msrp: Option<f64>,
    pub map: Option<f64>,
    /// First usable price among MSRP, MAP, list price. Absent means unpriced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_price: Option<f64>,
    pub inventory: i64,
    pub in_stock: bool,
    pub upc: String,
    pub image: String,
    pub drop_ship: bool,
    pub drop_ship_price: Option<f64>,
    pub allocated: bool,
    pub ship_weight: Option<f64>,
    pub category: Category,
    pub subcategory: Option<String>,
    pub raw_category: String,
    pub caliber: Option<String>,
    pub bullet_type: Option<String>,
    pub case_material: Option<String>,
    pub grain_weight: Option<GrainBucket>,
    pub round_count: Option<String>,
    pub gear_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn category_parses_mapping_spellings() {
        assert_eq!("Gun Parts".parse::<Category>(), Ok(Category::GunParts));
        assert_eq!("gun_parts".parse::<Category>(), Ok(Category::GunParts));
        assert_eq!(" Ammo ".parse::<Category>(), Ok(Category::Ammunition));
        assert_eq!("Outdoors".parse::<Category>(), Ok(Category::Survival));
    }

    #[test]
    fn category_rejects_unknown() {
        assert_eq!(
            "firearms".parse::<Category>(),
            Err(ParseCategoryError("firearms".to_string()))
        );
    }

    #[test]
    fn category_serializes_as_slug() {
        let json = serde_json::to_string(&Category::GunParts).unwrap();
        assert_eq!(json, "\"gun-parts\"");
    }

    #[test]
    fn gear_is_the_default_category() {
        assert_eq!(Category::default(), Category::Gear);
    }

    #[test]
    fn grain_bands_match_boundaries() {
        assert_eq!(GrainBucket::from_grains(0), GrainBucket::UpTo40);
        assert_eq!(GrainBucket::from_grains(40), GrainBucket::UpTo40);
        assert_eq!(GrainBucket::from_grains(41), GrainBucket::From41To80);
        assert_eq!(GrainBucket::from_grains(115), GrainBucket::From81To150);
        assert_eq!(GrainBucket::from_grains(150), GrainBucket::From81To150);
        assert_eq!(GrainBucket::from_grains(250), GrainBucket::From151To250);
        assert_eq!(GrainBucket::from_grains(251), GrainBucket::Over250);
    }

    #[test]
    fn rebucketing_is_stable() {
        for bucket in GrainBucket::ALL {
            assert_eq!(bucket.rebucket(), bucket);
            assert_eq!(bucket.rebucket().rebucket(), bucket);
            assert_eq!(GrainBucket::from_label(bucket.label()), Some(bucket));
        }
    }

    #[test]
    fn unpriced_product_omits_display_price() {
        let product = NormalizedProduct {
            name: "TEST".to_string(),
            ..NormalizedProduct::default()
        };
        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("displayPrice").is_none());
        assert_eq!(value["caliber"], serde_json::Value::Null);
        assert_eq!(value["category"], "gear");
    }

    #[test]
    fn grain_weight_serializes_as_label() {
        let product = NormalizedProduct {
            grain_weight: Some(GrainBucket::From81To150),
            display_price: Some(29.99),
            ..NormalizedProduct::default()
        };
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["grainWeight"], "81-150");
        assert_eq!(value["displayPrice"], 29.99);
    }
}
