//! Facet inference from free-text product names.
//!
//! Every extractor is a pure function of the name. Each one walks an ordered
//! pattern table and returns the label of the first entry that matches, so
//! more specific spellings (`.308 WIN`) sit above generic ones (`.308`).

use std::sync::LazyLock;

use gunworks_core::{Category, GrainBucket};
use regex::Regex;

/// Ordered `(pattern, canonical label)` pairs. Patterns are matched
/// case-insensitively.
pub(crate) const CALIBER_PATTERNS: &[(&str, &str)] = &[
    (r"\b10\s*(?:GA|GAUGE)\b", "10 Gauge"),
    (r"\b12\s*(?:GA|GAUGE)\b", "12 Gauge"),
    (r"\b16\s*(?:GA|GAUGE)\b", "16 Gauge"),
    (r"\b20\s*(?:GA|GAUGE)\b", "20 Gauge"),
    (r"\b28\s*(?:GA|GAUGE)\b", "28 Gauge"),
    (
        r"(?:^|[^\d.])\.?410\s*(?:GA|GAUGE|BORE)\b|(?:^|[^\d.])\.410\b",
        ".410 Bore",
    ),
    (r"(?:^|[^\d.])\.?17\s*HMR\b", ".17 HMR"),
    (
        r"(?:^|[^\d.])\.?22\s*(?:WMR|WIN\s*MAG(?:NUM)?|MAGNUM|MAG)\b",
        ".22 WMR",
    ),
    (r"(?:^|[^\d.])\.?22\s*(?:LR|LONG\s*RIFLE)\b", ".22 LR"),
    (r"\b5\.7\s*X\s*28(?:\s*MM)?\b", "5.7x28mm"),
    (r"\b5\.56(?:\s*(?:MM|NATO|X\s*45(?:\s*MM)?))?\b", "5.56 NATO"),
    (r"(?:^|[^\d.])\.?223\s*(?:REM|REMINGTON|WYLDE)?\b", ".223 Remington"),
    (r"\b6\.5\s*(?:MM\s*)?(?:CREEDMOOR|CREED|CM)\b", "6.5 Creedmoor"),
    (r"\b6\.5\s*GRENDEL\b", "6.5 Grendel"),
    (r"\b6\.8\s*(?:REM\s*)?SPC\b", "6.8 SPC"),
    (r"(?:^|[^\d.])\.?300\s*(?:AAC\s*)?(?:BLK|BLACKOUT)\b", ".300 Blackout"),
    (
        r"(?:^|[^\d.])\.?300\s*(?:WIN\s*MAG|WINCHESTER\s*MAGNUM|WM)\b",
        ".300 Win Mag",
    ),
    (
        r"(?:^|[^\d.])\.?308\s*(?:WIN|WINCHESTER)\b|\b7\.62\s*X\s*51(?:\s*MM)?\b",
        ".308 Winchester",
    ),
    (r"(?:^|[^\d.])\.?308\b", ".308"),
    (r"(?:^|[^\d.])\.?30-06\b", ".30-06 Springfield"),
    (r"(?:^|[^\d.])\.?30-30\b", ".30-30 Winchester"),
    (r"\b7\.62\s*X\s*39(?:\s*MM)?\b", "7.62x39mm"),
    (r"\b7\.62\s*X\s*54\s*R\b", "7.62x54R"),
    (
        r"(?:^|[^\d.])(?:\.243\b|243\s*(?:WIN|WINCHESTER)\b)",
        ".243 Winchester",
    ),
    (r"(?:^|[^\d.])\.?270\s*(?:WIN|WINCHESTER)\b", ".270 Winchester"),
    (r"(?:^|[^\d.])\.?50\s*BMG\b", ".50 BMG"),
    (r"(?:^|[^\d.])\.?357\s*SIG\b", ".357 SIG"),
    (r"(?:^|[^\d.])\.?357\s*(?:MAG|MAGNUM)\b", ".357 Magnum"),
    (r"(?:^|[^\d.])\.?38\s*(?:SPL|SPECIAL|SPEC)\b", ".38 Special"),
    (r"(?:^|[^\d.])\.?44\s*(?:MAG|MAGNUM|REM\s*MAG)\b", ".44 Magnum"),
    (r"(?:^|[^\d.])\.?45\s*(?:ACP|AUTO)\b", ".45 ACP"),
    (r"(?:^|[^\d.])\.?45\s*(?:LONG\s*COLT|LC|COLT)\b", ".45 Colt"),
    (r"(?:^|[^\d.])\.?40\s*(?:S\s*&\s*W|SW|CAL)\b", ".40 S&W"),
    (
        r"(?:^|[^\d.])\.?380\s*(?:ACP|AUTO)\b|(?:^|[^\d.])\.380\b",
        ".380 ACP",
    ),
    (r"\b10\s*MM\b", "10mm"),
    (r"\b(?:9\s*MM|9\s*X\s*19(?:\s*MM)?)\b", "9mm"),
];

const BULLET_TYPE_PATTERNS: &[(&str, &str)] = &[
    (r"\b(?:TMJ|TOTAL\s*METAL\s*JACKET)\b", "TMJ"),
    (r"\b(?:FMJ\w*|FULL\s*METAL\s*JACKET)\b", "FMJ"),
    (
        r"\b(?:V-?MAX|ELD-?[XM]|A-?MAX|SST|FTX|BALLISTIC\s*TIP|POLYMER\s*TIP)\b",
        "Polymer Tip",
    ),
    (r"\b(?:BTHP|HPBT|OTM|SMK|MATCHKING)\b", "Open Tip Match"),
    (
        r"\b(?:JHP|HP|XTP|HST|GOLD\s*DOT|HOLLOW\s*POINTS?)\b",
        "Hollow Point",
    ),
    (r"\b(?:JSP|SP|PSP|INTERLOCK|SOFT\s*POINTS?)\b", "Soft Point"),
    (r"\b(?:SWC|WC|WADCUTTER|SEMI-?WADCUTTER)\b", "Wadcutter"),
    (r"\b(?:LRN|RN|RNFP|ROUND\s*NOSE)\b", "Round Nose"),
    (r"\b(?:FP|FN|FLAT\s*NOSE|FLAT\s*POINT)\b", "Flat Point"),
    (r"\b(?:\d{1,2}\s*BK|00\s*BUCK|BUCKSHOT|BUCK)\b", "Buckshot"),
    (r"\bSLUGS?\b", "Slug"),
    (r"\b(?:BIRDSHOT|BIRD\s*SHOT)\b|#\s*\d(?:\.5)?\s*SHOT\b", "Birdshot"),
    (r"\bFRANGIBLE\b", "Frangible"),
    (r"\b(?:TSX|TTSX|SOLID\s*COPPER|MONOLITHIC)\b", "Solid Copper"),
];

const CASE_MATERIAL_PATTERNS: &[(&str, &str)] = &[
    (r"\bNICKEL\b", "Nickel"),
    (r"\bBRASS\b", "Brass"),
    (r"\bSTEEL\b", "Steel"),
    (r"\bALUM(?:INUM)?\b", "Aluminum"),
    (r"\b(?:PLASTIC|POLYMER\s*CASED?)\b", "Plastic"),
];

const GEAR_TYPE_PATTERNS: &[(&str, &str)] = &[
    (r"\bPLATE\s*CARRIERS?\b", "Plate Carrier"),
    (r"\bHOLSTERS?\b", "Holster"),
    (r"\bPOUCH(?:ES)?\b", "Pouch"),
    (r"\bSLINGS?\b", "Sling"),
    (r"\bVESTS?\b", "Vest"),
    (r"\b(?:BACKPACKS?|RUCKSACK)\b", "Backpack"),
    (
        r"\b(?:CLEANING|CLEANER|SOLVENT|BRUSH(?:ES)?|BORE\s*SNAKE|BORESNAKE|JAG|MOP|PATCH(?:ES)?)\b",
        "Cleaning",
    ),
    (
        r"\b(?:AMMO\s*(?:BOX|CAN|CASE)|DRY\s*BOX|GUN\s*CASE|RIFLE\s*CASE|PISTOL\s*CASE|SAFE|LOCK\s*BOX)\b",
        "Storage",
    ),
    (r"\bTARGETS?\b", "Targets"),
    (r"\bBELTS?\b", "Belt"),
    (r"\b(?:FLASHLIGHTS?|WEAPON\s*LIGHTS?)\b", "Flashlight"),
    (r"\b(?:KNIFE|KNIVES)\b", "Knife"),
    (r"\b(?:MULTI-?TOOLS?|TOOLS?)\b", "Tool"),
];

const OPTICS_TYPE_PATTERNS: &[(&str, &str)] = &[
    (r"\bSPOTTING\s*SCOPES?\b", "Spotting Scope"),
    (r"\bMAGNIFIERS?\b", "Magnifier"),
    (r"\bHOLOGRAPHIC\b", "Holographic"),
    (r"\b(?:RED\s*DOTS?|REFLEX|MICRO\s*DOT|PRISM)\b", "Red Dot"),
    (r"\b(?:RANGE\s*FINDERS?|RANGEFINDERS?)\b", "Rangefinder"),
    (r"\b(?:BINOCULARS?|MONOCULARS?)\b", "Binoculars"),
    (
        r"\b(?:SCOPES?|RIFLESCOPES?|LPVO)\b|\b\d+(?:\.\d+)?-\d+(?:\.\d+)?\s*X\s*\d+",
        "Scope",
    ),
    (r"\bSIGHTS?\b", "Iron Sights"),
];

const SURVIVAL_TYPE_PATTERNS: &[(&str, &str)] = &[
    (r"\b(?:FIRST\s*AID|MEDICAL|TOURNIQUET|TRAUMA|IFAK)\b", "Medical"),
    (
        r"\b(?:KNIFE|KNIVES|BLADE|MACHETE|HATCHET|AXE|FOLDER)\b",
        "Knife",
    ),
    (
        r"\b(?:FLASHLIGHTS?|HEADLAMPS?|LANTERNS?|LIGHTS?|TORCH)\b",
        "Flashlight",
    ),
    (
        r"\b(?:WATER|FILTER|CANTEEN|HYDRATION|PURIFIER)\b",
        "Water",
    ),
    (r"\b(?:FOOD|MEALS?|MRE|RATIONS?)\b", "Food"),
    (r"\b(?:ROPE|PARACORD|CORD)\b", "Rope"),
    (
        r"\b(?:FIRE\s*STARTER|FIRESTARTER|FERRO\s*ROD|MATCHES|LIGHTER)\b",
        "Fire Starter",
    ),
    (
        r"\b(?:TENT|TARP|SHELTER|BIVY|HAMMOCK|SLEEPING\s*BAG|BLANKET)\b",
        "Shelter",
    ),
    (r"\b(?:BACKPACKS?|RUCKSACK|BUG\s*OUT\s*BAG)\b", "Backpack"),
    (r"\b(?:COMPASS|GPS|NAVIGATION)\b", "Navigation"),
    (r"\bWHISTLES?\b", "Whistle"),
    (r"\bKITS?\b", "Kit"),
];

const RELOADING_TYPE_PATTERNS: &[(&str, &str)] = &[
    (r"\bPRESS\b", "Press"),
    (r"\bDIES?\b", "Dies"),
    (r"\bSCALES?\b", "Scale"),
    (r"\bTUMBLER\b", "Tumbler"),
    (r"\bTRIMMER\b", "Trimmer"),
    (r"\bCALIPERS?\b", "Calipers"),
    (r"\bPOWDER\b", "Powder"),
    (r"\bPRIMERS?\b", "Primers"),
    (r"\b(?:BULLETS?|PROJECTILES?)\b|\.\d{3}\s*DIA", "Bullets"),
    (r"\b(?:BRASS|CASES?)\b", "Cases"),
];

const PARTS_TYPE_PATTERNS: &[(&str, &str)] = &[
    (r"\b(?:BOLT\s*CARRIERS?|BCG)\b", "Bolt Carrier"),
    (r"\b(?:HANDGUARDS?|HAND\s*GUARDS?)\b", "Handguard"),
    (r"\bBUFFER\b", "Buffer"),
    (r"\bUPPERS?\b", "Upper"),
    (r"\bLOWERS?\b", "Lower"),
    (r"\bTRIGGERS?\b", "Trigger"),
    (r"\bBARRELS?\b", "Barrel"),
    (r"\bGAS\b", "Gas"),
    (
        r"\b(?:MUZZLE|COMPENSATOR|FLASH\s*HIDER|BRAKE)\b",
        "Muzzle",
    ),
    (r"\b(?:STOCKS?|BRACE)\b", "Stock"),
    (r"\bGRIPS?\b", "Grip"),
    (r"\b(?:RAILS?|PICATINNY|M-?LOK|KEYMOD)\b", "Rail"),
];

static CALIBERS: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(CALIBER_PATTERNS));
static BULLET_TYPES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(BULLET_TYPE_PATTERNS));
static CASE_MATERIALS: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(CASE_MATERIAL_PATTERNS));
static GEAR_TYPES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(GEAR_TYPE_PATTERNS));
static OPTICS_TYPES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(OPTICS_TYPE_PATTERNS));
static SURVIVAL_TYPES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(SURVIVAL_TYPE_PATTERNS));
static RELOADING_TYPES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(RELOADING_TYPE_PATTERNS));
static PARTS_TYPES: LazyLock<Vec<(Regex, &'static str)>> =
    LazyLock::new(|| compile_table(PARTS_TYPE_PATTERNS));

static GRAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,4})(?:\.\d+)?\s*-?\s*(?:GR|GRS|GRN|GRAINS?)\b")
        .expect("valid grain regex")
});
static ROUND_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d{1,5})\s*-?\s*(?:ROUNDS?|RDS?|CT|COUNT|PK)\b")
        .expect("valid round count regex")
});

fn compile_table(table: &[(&str, &'static str)]) -> Vec<(Regex, &'static str)> {
    table
        .iter()
        .map(|(pattern, label)| {
            let re = Regex::new(&format!("(?i){pattern}")).expect("valid facet regex");
            (re, *label)
        })
        .collect()
}

fn first_match(table: &[(Regex, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(re, _)| re.is_match(name))
        .map(|(_, label)| *label)
}

/// Canonical caliber label, e.g. `"9mm"` or `".308 Winchester"`.
#[must_use]
pub fn caliber(name: &str) -> Option<&'static str> {
    first_match(&CALIBERS, name)
}

/// Canonical bullet construction, e.g. `"FMJ"` or `"Hollow Point"`.
#[must_use]
pub fn bullet_type(name: &str) -> Option<&'static str> {
    first_match(&BULLET_TYPES, name)
}

#[must_use]
pub fn case_material(name: &str) -> Option<&'static str> {
    first_match(&CASE_MATERIALS, name)
}

/// Grain weight bucketed into filter bands. The raw weight is discarded.
#[must_use]
pub fn grain_weight(name: &str) -> Option<GrainBucket> {
    GRAIN_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|grains| *grains > 0)
        .map(GrainBucket::from_grains)
}

/// Round count rendered as `"<n> rounds"`.
#[must_use]
pub fn round_count(name: &str) -> Option<String> {
    ROUND_COUNT_RE
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|n| *n > 0)
        .map(|n| format!("{n} rounds"))
}

/// Sub-type label driving the per-category filter groups.
///
/// Categories with a sub-type table always get a label, falling back to that
/// category's "Other" bucket. Ammunition and magazines have no sub-type.
#[must_use]
pub fn gear_type(name: &str, category: Category) -> Option<&'static str> {
    let (table, other): (&[(Regex, &'static str)], &'static str) = match category {
        Category::Gear => (&GEAR_TYPES, "Other Gear"),
        Category::Optics => (&OPTICS_TYPES, "Other Optics"),
        Category::Survival => (&SURVIVAL_TYPES, "Other"),
        Category::Reloading => (&RELOADING_TYPES, "Other"),
        Category::GunParts => (&PARTS_TYPES, "Other Parts"),
        Category::Ammunition | Category::Magazines => return None,
    };
    Some(first_match(table, name).unwrap_or(other))
}

/// All name-derived facets for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub caliber: Option<&'static str>,
    pub bullet_type: Option<&'static str>,
    pub case_material: Option<&'static str>,
    pub grain_weight: Option<GrainBucket>,
    pub round_count: Option<String>,
    pub gear_type: Option<&'static str>,
}

/// Infer the facets that make sense for `category`.
///
/// Cartridge facets (bullet, case, grain) apply to ammunition and reloading
/// components. Caliber and round count also apply to magazines and parts,
/// where they describe fit and capacity.
#[must_use]
pub fn extract_facets(name: &str, category: Category) -> Facets {
    let cartridge = matches!(category, Category::Ammunition | Category::Reloading);
    let sized = cartridge || matches!(category, Category::Magazines | Category::GunParts);

    Facets {
        caliber: if sized { caliber(name) } else { None },
        bullet_type: if cartridge { bullet_type(name) } else { None },
        case_material: if cartridge { case_material(name) } else { None },
        grain_weight: if cartridge { grain_weight(name) } else { None },
        round_count: if sized { round_count(name) } else { None },
        gear_type: gear_type(name, category),
    }
}

#[cfg(test)]
#[path = "facets_test.rs"]
mod tests;
