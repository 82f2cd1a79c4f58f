//! Manufacturer display names and storefront brand priority.

/// Rank assigned to brands missing from [`BRAND_PRIORITY`].
pub const UNRANKED: usize = 9999;

/// Brands listed first on category pages, most prominent first.
pub const BRAND_PRIORITY: &[&str] = &[
    "Hornady",
    "Federal",
    "Sig Sauer",
    "Glock",
    "Smith & Wesson",
    "Ruger",
    "Springfield Armory",
    "Leupold",
    "Vortex",
    "Trijicon",
    "Magpul",
    "RCBS",
    "Lee Precision",
    "Redding",
    "Lyman",
    "Forster",
    "Remington",
    "Winchester",
    "Browning",
    "Savage",
    "Mossberg",
    "FN America",
    "Heckler & Koch",
    "Daniel Defense",
    "Wilson Combat",
    "Aero Precision",
    "Holosun",
    "Primary Arms",
    "EOTech",
    "Aimpoint",
    "Streamlight",
    "SureFire",
    "Burris",
    "Bushnell",
    "Athlon",
    "Nosler",
    "Barnes",
    "Sierra",
    "Berger",
    "Hodgdon",
    "Alliant Powder",
    "Fiocchi",
    "Blackhawk",
    "DeSantis",
    "Safariland",
    "ProMag",
    "Mec-Gar",
    "Kimber",
    "Walther",
    "Beretta",
    "Henry",
    "Kel-Tec",
    "Umarex",
    "Sellmark",
    "Hogue",
    "Meprolight",
];

/// Vendor manufacturer spellings (lowercase, trailing period removed) mapped
/// to storefront display names.
const MANUFACTURER_ALIASES: &[(&str, &str)] = &[
    ("hornady mfg", "Hornady"),
    ("hornady manufacturing", "Hornady"),
    ("federal cartridge co", "Federal"),
    ("federal cartridge", "Federal"),
    ("federal premium", "Federal"),
    ("sig", "Sig Sauer"),
    ("glock inc", "Glock"),
    ("smith & wesson inc", "Smith & Wesson"),
    ("smith and wesson", "Smith & Wesson"),
    ("sturm ruger & co", "Ruger"),
    ("springfield", "Springfield Armory"),
    ("leupold & stevens inc", "Leupold"),
    ("vortex optics", "Vortex"),
    ("magpul industries", "Magpul"),
    ("lee", "Lee Precision"),
    ("forster products", "Forster"),
    ("remington arms co. inc", "Remington"),
    ("winchester ammunition", "Winchester"),
    ("browning firearms", "Browning"),
    ("savage arms", "Savage"),
    ("mossberg & sons inc", "Mossberg"),
    ("fn usa", "FN America"),
    ("hk", "Heckler & Koch"),
    ("surefire llc", "SureFire"),
    ("athlon optics", "Athlon"),
];

fn alias_key(raw: &str) -> String {
    raw.trim().trim_end_matches('.').trim().to_lowercase()
}

/// Storefront display name for a vendor manufacturer string.
///
/// Known aliases and case-insensitive matches against [`BRAND_PRIORITY`]
/// resolve to the curated spelling; anything else is returned trimmed.
#[must_use]
pub fn display_brand(raw: &str) -> String {
    let key = alias_key(raw);
    if key.is_empty() {
        return String::new();
    }
    if let Some((_, name)) = MANUFACTURER_ALIASES.iter().find(|(alias, _)| *alias == key) {
        return (*name).to_string();
    }
    BRAND_PRIORITY
        .iter()
        .find(|name| name.to_lowercase() == key)
        .map_or_else(|| raw.trim().to_string(), |name| (*name).to_string())
}

/// Position of the brand in [`BRAND_PRIORITY`], or [`UNRANKED`].
#[must_use]
pub fn brand_rank(brand: &str) -> usize {
    let display = display_brand(brand);
    BRAND_PRIORITY
        .iter()
        .position(|name| *name == display)
        .unwrap_or(UNRANKED)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_resolve_to_display_names() {
        assert_eq!(display_brand("HORNADY MFG"), "Hornady");
        assert_eq!(display_brand("Sturm Ruger & Co."), "Ruger");
        assert_eq!(display_brand("lee"), "Lee Precision");
        assert_eq!(display_brand("VORTEX"), "Vortex");
    }

    #[test]
    fn unknown_brand_passes_through_trimmed() {
        assert_eq!(display_brand("  Butler Creek "), "Butler Creek");
        assert_eq!(display_brand("   "), "");
    }

    #[test]
    fn rank_follows_priority_list() {
        assert_eq!(brand_rank("Hornady"), 0);
        assert_eq!(brand_rank("FEDERAL CARTRIDGE CO"), 1);
        assert!(brand_rank("Magpul") < brand_rank("Streamlight"));
        assert_eq!(brand_rank("Butler Creek"), UNRANKED);
        assert_eq!(brand_rank(""), UNRANKED);
    }
}
