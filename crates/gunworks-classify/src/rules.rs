//! Vocabulary for the standard cascade.
//!
//! The pattern lists are curated data. Pass order, and exclusion-before-
//! inclusion within a pass, decide ambiguous names such as reloading bullets
//! versus loaded cartridges.

use gunworks_core::Category;

use crate::classifier::{Pass, Subject};
use crate::facets::CALIBER_PATTERNS;

const NON_PRODUCT_LINES: &[&str] = &[
    r"\bGIFT\s*(?:CARDS?|CERTIFICATES?)\b",
    r"\bVOUCHERS?\b",
    r"\bSTORE\s*CREDIT\b",
    r"\b(?:SERVICE|TRANSFER|PROCESSING|HANDLING|RESTOCKING|FFL)\s*FEES?\b",
    r"\b(?:ENGRAVING|GUNSMITHING|LABOR|INSTALLATION)\b",
    r"\b(?:TRAINING|CCW|CONCEALED\s*CARRY|SAFETY)\s*(?:CLASS|COURSE|SESSION)S?\b",
    r"\bRANGE\s*(?:FEE|TIME|MEMBERSHIP)\b",
];

const CLEANING: &str = r"\b(?:BRUSH(?:ES)?|CLEANING|CLEANER|SOLVENT|BORE\s*SNAKE|BORESNAKE|JAG|MOP|PATCH(?:ES)?)\b";

const RELOADING_EXCLUDE: &[&str] = &[
    r"\b(?:AMMO|AMMUNITION)\b",
    r"\b\d+\s*-?\s*(?:RDS?|ROUNDS?)\b",
    CLEANING,
    r"\b(?:BULLET\s*(?:PROOF|RESISTANT|BUTTON)|BULLETPROOF)\b",
    r"\b(?:SNAP\s*CAPS?|DUMMY|TRAINING\s*ROUNDS?)\b",
];

const RELOADING_INCLUDE: &[&str] = &[
    r"^\s*(?:HODGDON|IMR|ALLIANT|ACCURATE|RAMSHOT|VIHTAVUORI|BLACKHORN|PYRODEX)\b",
    r"\bPOWDER\b.*\b\d+(?:\.\d+)?\s*(?:LBS?|OZ)\b",
    r"\b\d+(?:\.\d+)?\s*(?:LBS?|OZ)\b.*\bPOWDER\b",
    r"\bSMOKELESS\b",
    r"\bPRIMERS?\b",
    r"\.\d{3}\s*(?:DIA|DIAMETER)\b",
    r"\b(?:BULLETS?|PROJECTILES?)\b",
    r"\b(?:UNPRIMED|PRIMED)\s*(?:BRASS|CASES?)\b",
    r"\b(?:BRASS\s*CASES?|NEW\s*BRASS|ONCE[-\s]*FIRED\s*BRASS)\b",
    r"\bRELOAD(?:ING|ER)?\b",
    r"\b(?:SINGLE\s*STAGE|PROGRESSIVE|TURRET|RELOADING)\s*PRESS\b",
    r"\bLOCK-?N-?LOAD\b",
    r"\b(?:DIE\s*SETS?|DIES|SIZING\s*DIE|SEATING\s*DIE|CRIMP\s*DIE)\b",
    r"\bCASE\s*(?:TRIMMER|PREP|LUBE|GAUGE|TUMBLER)\b",
    r"\bPOWDER\s*(?:MEASURE|SCALE|TRICKLER|FUNNEL|DISPENSER)\b",
    r"\b(?:SHELL\s*HOLDERS?|BULLET\s*PULLER|PRIMING\s*TOOL|TUMBLER)\b",
];

const AMMO_EXCLUDE: &[&str] = &[
    r"\b(?:BULLETS?|PROJECTILES?|PRIMERS?|POWDER|UNPRIMED|PRIMED)\b",
    r"\bBRASS\s*CASES?\b",
    r"\b(?:MAGAZINES?|PMAGS?|DRUMS?)\b",
    // Capacity right before MAG. Cartridge names (`22 MAG`, `357 MAG`) never
    // put a round count there.
    r"\b\d+\s*-?\s*(?:RDS?|ROUNDS?)\s+MAGS?\b",
    r"\bAMMO\s*(?:BOX(?:ES)?|CANS?|CASES?|CRATES?|CADDY|WALLET|POUCH|CARRIER)\b",
    r"\b(?:CARTRIDGE|SHELL)\s*(?:BOX(?:ES)?|CASES?|HOLDERS?|CARRIERS?|BELTS?|WALLETS?)\b",
    r"\b(?:BANDOLIER|POUCH(?:ES)?|CARRIER|HOLSTER|SLEEVE|BELT\s*STYLE|DRY\s*BOX)\b",
    CLEANING,
    r"\bRODS?\b",
    r"\b(?:TARGETS?|SNAP\s*CAPS?|DUMMY|TRAINING\s*ROUNDS?|BORE\s*SIGHT|BORESIGHT|LASER)\b",
    r"\b(?:DIES?|PRESS|TRIMMER)\b",
];

const AMMO_KEYWORDS: &str = r"\b(?:AMMO|AMMUNITION|CARTRIDGES?|SHOTSHELLS?|SHELLS|BUCKSHOT|BUCK|SLUGS?|BIRDSHOT|\d+\s*-?\s*(?:RDS?|ROUNDS?)|\d{2,3}\s*-?\s*(?:GR|GRS|GRAINS?)|FMJ\w*|JHP|HP|JSP|SP|OTM|TMJ|BTHP)\b";

const AMMO_BRAND_PREFIX: &str = r"^\s*(?:FEDERAL|HORNADY|WINCHESTER|REMINGTON|CCI|SPEER|FIOCCHI|PMC|SELLIER|AGUILA|NOSLER|BARNES|BLACK\s*HILLS|UNDERWOOD|BUFFALO\s*BORE|TULA|WOLF|PPU|PRVI|AMERICAN\s*EAGLE|SIG\s*SAUER|MAGTECH|ARMSCOR|NORMA|LAPUA|KENT|ESTATE|BROWNING|GECO|BERGER|HSM|CORBON)\b";

const MAGAZINE_EXCLUDE: &[&str] = &[
    r"\b(?:POUCH(?:ES)?|CARRIERS?|HOLSTERS?|HOLDERS?|LOADERS?|UPLULA|COUPLERS?|CLAMPS?|BANDOLIER)\b",
    r"\b(?:CASES?|BAGS?|BOX(?:ES)?|STORAGE|RACKS?)\b",
    r"\b(?:SPRINGS?|FOLLOWERS?|BASE\s*PADS?|BASE\s*PLATES?|BASEPLATES?|FLOOR\s*PLATES?|EXTENSIONS?|RELEASE|CATCH|MAG\s*WELL|MAGWELL|DUST\s*COVERS?)\b",
];

const MAGAZINE_INCLUDE: &[&str] = &[
    r"\bMAGAZINES?\b",
    r"\bPMAGS?\b",
    r"\bMAGS?\b.*\b\d+\s*-?\s*(?:RDS?|ROUNDS?)\b",
    r"\b\d+\s*-?\s*(?:RDS?|ROUNDS?)\b.*\bMAGS?\b",
    r"\bDRUM\s*MAG(?:AZINE)?S?\b",
    r"\b\d+\s*-?\s*(?:RD|ROUND)\s*DRUMS?\b",
];

const MAGAZINE_VOCABULARY: &str = r"\b(?:MAGAZINES?|MAGS?|PMAGS?|DRUMS?)\b";

const OPTICS_EXCLUDE: &[&str] = &[
    r"\b(?:COVERS?|CAPS?|FLIP[-\s]*(?:UP|OPEN)|LENS\s*(?:CLOTH|PEN|CLEANER|CLEANING)|SUNSHADE|SUN\s*SHADE|KILLFLASH|ANTI-?REFLECTION)\b",
    r"\b(?:MOUNTS?|RINGS?|BASES?|RAILS?|RISERS?|ADAPTERS?|ADAPTOR|SHIMS?|SPACERS?)\b",
    r"\b(?:TARGETS?|CLEANING|CLEANER|BATTER(?:Y|IES)|CR2032|CR123A?|SLINGS?|STRAPS?|HARNESS|CASES?|BAGS?|POUCH(?:ES)?)\b",
    r"\b(?:TOOLS?|WRENCH|PUSHER|BORE\s*SIGHT|BORESIGHT|LEVELS?)\b",
];

const OPTICS_INCLUDE: &[&str] = &[
    r"\b(?:SCOPES?|RIFLESCOPES?|LPVO|RED\s*DOTS?|REFLEX|HOLOGRAPHIC|MAGNIFIERS?|PRISM)\b",
    r"\b(?:BINOCULARS?|MONOCULARS?|RANGE\s*FINDERS?|RANGEFINDERS?|SPOTTING|THERMAL|NIGHT\s*VISION)\b",
    r"\bSIGHTS?\b",
    r"\b\d+(?:\.\d+)?-\d+(?:\.\d+)?\s*X\s*\d+",
];

const PARTS_EXCLUDE: &[&str] = &[
    CLEANING,
    r"\b(?:LUBRICANT|LUBE|OIL|GREASE)\b",
    r"\b(?:CASES?|BAGS?|SAFES?|POUCH(?:ES)?|HOLSTERS?|RACKS?)\b",
    r"\b(?:TRIGGER|CABLE|GUN)\s*LOCKS?\b",
    r"\b(?:PLATE|MAG(?:AZINE)?)\s*CARRIERS?\b",
    r"\b(?:AMMO|AMMUNITION|PRIMERS?|POWDER|BULLETS?|RELOADING|DIES?|PRESS)\b",
    r"\b(?:TOOLS?|WRENCH|VISE|PUNCH(?:ES)?|ARMORERS?)\b",
];

const PARTS_INCLUDE: &[&str] = &[
    r"\b(?:TRIGGERS?|HAMMERS?|SEARS?|DISCONNECTOR|FIRING\s*PINS?|EXTRACTORS?|EJECTORS?)\b",
    r"\b(?:BOLT\s*CARRIERS?|BCG|BOLTS?|CHARGING\s*HANDLES?)\b",
    r"\b(?:BARRELS?|HANDGUARDS?|HAND\s*GUARDS?|FORE-?ENDS?|FOREARMS?|GAS\s*(?:BLOCKS?|TUBES?|KEYS?))\b",
    r"\b(?:RECEIVERS?|UPPERS?|LOWERS?|LPK)\b",
    r"\b(?:BUFFERS?|RECOIL\s*SPRINGS?|GUIDE\s*RODS?|SPRINGS?|PINS?)\b",
    r"\b(?:STOCKS?|BRACES?|GRIPS?|SLIDES?|SELECTORS?)\b",
    r"\b(?:MUZZLE\s*(?:BRAKES?|DEVICES?)|COMPENSATORS?|FLASH\s*(?:HIDERS?|SUPPRESSORS?)|THREAD\s*PROTECTORS?)\b",
    r"\b(?:RAILS?|PICATINNY|M-?LOK|KEYMOD)\b",
    r"\b(?:MAG(?:AZINE)?\s*(?:RELEASE|CATCH)|MAGWELL|PARTS?\s*KITS?)\b",
];

const SURVIVAL_EXCLUDE: &[&str] = &[
    r"\b(?:MOUNTS?|HOLSTERS?|SHARPENERS?|SHARPENING)\b",
    r"\b(?:PRESSURE|TAPE|REMOTE)\s*(?:PADS?|SWITCH(?:ES)?)\b",
];

const SURVIVAL_INCLUDE: &[&str] = &[
    r"\b(?:KNIFE|KNIVES|FIXED\s*BLADE|FOLDING\s*BLADE|MACHETE|HATCHET|AXE|TOMAHAWK|MULTI-?TOOLS?)\b",
    r"\b(?:FLASHLIGHTS?|HEADLAMPS?|LANTERNS?)\b",
    r"\b(?:FIRE\s*STARTER|FIRESTARTER|FERRO\s*ROD|PARACORD|COMPASS|WHISTLE|TENT|TARP|BIVY|HAMMOCK|SLEEPING\s*BAG|EMERGENCY\s*BLANKET)\b",
    r"\b(?:SURVIVAL|CAMPING|WATER\s*FILTER|CANTEEN|HYDRATION|FIRST\s*AID|TOURNIQUET|IFAK|MRE|STOVE|COOK\s*SET)\b",
];

/// Branded merchandise and accessories that should never follow a brand into
/// its product category.
const BRAND_MERCHANDISE: &str = r"\b(?:HATS?|CAPS?|SHIRTS?|T-SHIRTS?|HOODIES?|JACKETS?|APPAREL|STICKERS?|DECALS?|BANNERS?|SIGNS?|GLOVES?|MUGS?|KEYCHAINS?|CATALOGS?|SAFES?|VAULTS?|EAR\s*(?:PRO|PROTECTION|PLUGS?)|MUFFS?|GLASSES)\b";

const AMMO_BRANDS: &str = r"\b(?:FEDERAL|HORNADY|WINCHESTER|REMINGTON|CCI|SPEER|FIOCCHI|PMC|SELLIER|AGUILA|BLACK\s*HILLS|UNDERWOOD|BUFFALO\s*BORE|TULA|WOLF|PPU|PRVI\s*PARTIZAN|AMERICAN\s*EAGLE|MAGTECH|ARMSCOR|NORMA|LAPUA|KENT|ESTATE|GECO|CORBON|HSM)\b";

const RELOADING_BRANDS: &str = r"\b(?:RCBS|LEE(?:\s*PRECISION)?|REDDING|LYMAN|FORSTER|DILLON|HODGDON|IMR|ALLIANT|ACCURATE|VIHTAVUORI|RAMSHOT|SIERRA|BERGER|NOSLER|BARNES|STARLINE|FRANKFORD\s*ARSENAL)\b";

const OPTICS_BRANDS: &str = r"\b(?:VORTEX|LEUPOLD|TRIJICON|EOTECH|AIMPOINT|HOLOSUN|PRIMARY\s*ARMS|BUSHNELL|BURRIS|NIGHTFORCE|ATHLON|STEINER|ZEISS|SWAROVSKI|NIKON|MEPROLIGHT|TRUGLO|SIGHTMARK|CRIMSON\s*TRACE)\b";

const MAGAZINE_BRANDS: &str = r"\b(?:PROMAG|PRO\s*MAG|MEC-?GAR|KCI|CHECKMATE|LANCER|HEXMAG|ETS\s*GROUP|SGM\s*TACTICAL|TRIPLE\s*K|ACT-?MAG)\b";

const SURVIVAL_BRANDS: &str = r"\b(?:BENCHMADE|KERSHAW|CRKT|SPYDERCO|GERBER|BUCK\s*KNIVES|COLD\s*STEEL|KA-?BAR|SOG|ESEE|MORAKNIV|LEATHERMAN|VICTORINOX|STREAMLIGHT|SUREFIRE|OLIGHT|FENIX|NITECORE|MAGLITE|ONTARIO\s*KNIFE|SCHRADE|BOKER)\b";

const PARTS_BRANDS: &str = r"\b(?:MAGPUL|AERO\s*PRECISION|BCM|BRAVO\s*COMPANY|GEISSELE|TIMNEY|CMC\s*TRIGGERS|RISE\s*ARMAMENT|BALLISTIC\s*ADVANTAGE|FAXON|ODIN\s*WORKS|STRIKE\s*INDUSTRIES|HOGUE|TROY\s*INDUSTRIES|MIDWEST\s*INDUSTRIES|RADIAN|CMMG|ANDERSON\s*MANUFACTURING|YANKEE\s*HILL|APEX\s*TACTICAL|TANGODOWN|B5\s*SYSTEMS)\b";

/// Union of every caliber pattern, for "names a caliber at all" checks.
fn any_caliber() -> String {
    CALIBER_PATTERNS
        .iter()
        .map(|(pattern, _)| format!("(?:{pattern})"))
        .collect::<Vec<_>>()
        .join("|")
}

fn with(base: &[&'static str], extra: &[&'static str]) -> Vec<&'static str> {
    base.iter().chain(extra).copied().collect()
}

/// Keyword passes first (narrowest vocabulary first), then the brand
/// fallback tables, each carrying its category's exclusions.
#[must_use]
pub fn standard_passes() -> Vec<Pass> {
    let caliber = any_caliber();

    vec![
        Pass::new("global-exclusions", Subject::Name, Category::Gear)
            .include_any(NON_PRODUCT_LINES),
        Pass::new("reloading", Subject::Name, Category::Reloading)
            .exclude(RELOADING_EXCLUDE)
            .include_any(RELOADING_INCLUDE),
        Pass::new("ammunition", Subject::Name, Category::Ammunition)
            .exclude(AMMO_EXCLUDE)
            .include_all(&[caliber.as_str(), AMMO_KEYWORDS])
            .include_all(&[AMMO_BRAND_PREFIX, caliber.as_str()]),
        Pass::new("magazines", Subject::Name, Category::Magazines)
            .exclude(MAGAZINE_EXCLUDE)
            .include_any(MAGAZINE_INCLUDE),
        Pass::new("optics", Subject::Name, Category::Optics)
            .exclude(OPTICS_EXCLUDE)
            .include_any(OPTICS_INCLUDE),
        Pass::new("gun-parts", Subject::Name, Category::GunParts)
            .exclude(PARTS_EXCLUDE)
            .include_any(PARTS_INCLUDE),
        Pass::new("survival", Subject::Name, Category::Survival)
            .exclude(SURVIVAL_EXCLUDE)
            .include_any(SURVIVAL_INCLUDE),
        Pass::new("brand:ammunition", Subject::Brand, Category::Ammunition)
            .exclude(&with(AMMO_EXCLUDE, &[BRAND_MERCHANDISE]))
            .include_any(&[AMMO_BRANDS]),
        Pass::new("brand:reloading", Subject::Brand, Category::Reloading)
            .exclude(&with(RELOADING_EXCLUDE, &[BRAND_MERCHANDISE]))
            .include_any(&[RELOADING_BRANDS]),
        Pass::new("brand:optics", Subject::Brand, Category::Optics)
            .exclude(&with(OPTICS_EXCLUDE, &[BRAND_MERCHANDISE]))
            .include_any(&[OPTICS_BRANDS]),
        Pass::new("brand:magazines", Subject::Brand, Category::Magazines)
            .exclude(&with(MAGAZINE_EXCLUDE, &[BRAND_MERCHANDISE]))
            .include_any(&[MAGAZINE_BRANDS]),
        Pass::new("brand:survival", Subject::Brand, Category::Survival)
            .exclude(&with(SURVIVAL_EXCLUDE, &[BRAND_MERCHANDISE]))
            .include_any(&[SURVIVAL_BRANDS]),
        // Parts brands such as Magpul also make magazines.
        Pass::new("brand:gun-parts", Subject::Brand, Category::GunParts)
            .exclude(&with(PARTS_EXCLUDE, &[MAGAZINE_VOCABULARY, BRAND_MERCHANDISE]))
            .include_any(&[PARTS_BRANDS]),
    ]
}
