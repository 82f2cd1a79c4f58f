use super::*;

/// Names and expected categories from the storefront's categorization checks.
const KNOWN_CASES: &[(&str, Category)] = &[
    (
        "BUTLER CREEK FLIP-OPEN SCOPE COVER #01 EYE #20010",
        Category::Gear,
    ),
    ("FEDERAL 9MM 115GR FMJRN 100RD AMMO", Category::Ammunition),
    ("9MM 115GR FMJRN 100RD BAG BULLET", Category::Gear),
    ("VORTEX VIPER HD 4-12x40 SCOPE", Category::Optics),
    ("ACCURATE MAG PRO 1LB POWDER", Category::Reloading),
    ("CCI #41 PRIMER FOR 5.56MM 1000CT", Category::Reloading),
    ("MAGPUL PMAG 30 MAGAZINE AR15", Category::Magazines),
    ("BENCHMADE INFIDEL KNIFE", Category::Survival),
    ("KleenBore 410 Gauge Shotgun Brush", Category::Gear),
    ("BIRCHWOOD CASEY BORE CLEANING COMPOUND", Category::Gear),
    ("MTM AMMO BOX 20 RD BELT STYLE", Category::Gear),
    (
        "SPRINGFIELD XD MOD.2 MAGAZINE .45 ACP 13-RD W/BLACK MOD.2 SLEEVE",
        Category::Magazines,
    ),
    ("44/40-200-RNFP 500ct bullets", Category::Reloading),
    ("FEDERAL 9MM 115GR FMJ 100RD", Category::Ammunition),
    ("MAGPUL PMAG 30 5.56 NATO MAGAZINE", Category::Magazines),
    ("ETS 9MM GLOCK 31RD MAG", Category::Magazines),
    ("SIG SAUER P365 9MM 10RD MAG", Category::Magazines),
    ("SPRINGFIELD XD 9MM 16RD MAG", Category::Magazines),
    ("KCI 7.62X39 75RD DRUM", Category::Magazines),
    ("WINCHESTER 22 MAG 40GR JHP 50RD", Category::Ammunition),
    ("HORNADY 357 MAG 125GR XTP 25RD", Category::Ammunition),
];

#[test]
fn known_names_land_in_expected_categories() {
    for (name, expected) in KNOWN_CASES {
        assert_eq!(
            classify_name(name),
            *expected,
            "unexpected category for {name:?}: {:?}",
            STANDARD.explain(name, "")
        );
    }
}

#[test]
fn standard_pass_order_is_fixed() {
    let names: Vec<&str> = Classifier::standard()
        .passes()
        .iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "global-exclusions",
            "reloading",
            "ammunition",
            "magazines",
            "optics",
            "gun-parts",
            "survival",
            "brand:ammunition",
            "brand:reloading",
            "brand:optics",
            "brand:magazines",
            "brand:survival",
            "brand:gun-parts",
        ]
    );
}

#[test]
fn reloading_component_beats_ammunition() {
    let outcome = STANDARD.explain("CCI #41 PRIMER FOR 5.56MM 1000CT", "CCI");
    assert_eq!(outcome.category, Category::Reloading);
    assert_eq!(outcome.pass, Some("reloading"));
}

#[test]
fn optics_brand_with_cover_keyword_is_gear() {
    let outcome = STANDARD.explain("BUTLER CREEK FLIP-OPEN SCOPE COVER #01", "Vortex");
    assert_eq!(outcome.category, Category::Gear);
    assert_eq!(outcome.pass, None);
}

#[test]
fn non_product_lines_exit_early() {
    let outcome = STANDARD.explain("GIFT CARD $50 FOR 9MM AMMO", "Federal");
    assert_eq!(outcome.category, Category::Gear);
    assert_eq!(outcome.pass, Some("global-exclusions"));
    assert_eq!(classify_name("CUSTOM ENGRAVING SERVICE"), Category::Gear);
    assert_eq!(classify_name("CCW CLASS SEAT"), Category::Gear);
}

#[test]
fn magpul_magazine_is_not_a_part() {
    let outcome = STANDARD.explain("MAGPUL PMAG 30 5.56 NATO MAGAZINE", "Magpul");
    assert_eq!(outcome.category, Category::Magazines);
    assert_eq!(outcome.pass, Some("magazines"));
}

#[test]
fn parts_brand_fallback_skips_magazine_vocabulary() {
    let part = STANDARD.explain("MAGPUL MBUS PRO", "Magpul");
    assert_eq!(part.category, Category::GunParts);
    assert_eq!(part.pass, Some("brand:gun-parts"));

    let guarded = STANDARD.explain("MAGPUL MAG BUMPER", "Magpul");
    assert_eq!(guarded.category, Category::Gear);
    assert_eq!(guarded.pass, None);
}

#[test]
fn brand_fallback_uses_manufacturer_field() {
    assert_eq!(classify("VIPER PST GEN II 5-25X50", "Vortex"), Category::Optics);
    assert_eq!(classify("TRAIL BOSS 9 OZ", "Hodgdon"), Category::Reloading);
    assert_eq!(classify("STINGER 22LR", "CCI"), Category::Ammunition);
    assert_eq!(classify("PROTAC HL-X", "Streamlight"), Category::Survival);
}

#[test]
fn brand_fallback_skips_merchandise() {
    assert_eq!(classify("LOGO TRUCKER HAT", "Hornady"), Category::Gear);
}

#[test]
fn brand_fallback_reads_name_when_manufacturer_blank() {
    assert_eq!(classify("STREAMLIGHT PROTAC HL-X", "  "), Category::Survival);
}

#[test]
fn blank_manufacturer_needs_brand_at_start_of_name() {
    assert_eq!(
        STANDARD.explain("GRAY WOLF CAMO BACKPACK", ""),
        Classification {
            category: Category::Gear,
            pass: None,
        }
    );
    assert_eq!(classify("RUCKSACK WITH KENT STITCHING", ""), Category::Gear);
    assert_eq!(
        STANDARD.explain("WOLF POLYFORMANCE 7.62X39", ""),
        Classification {
            category: Category::Ammunition,
            pass: Some("ammunition"),
        }
    );
}

#[test]
fn keyword_passes_cover_each_category() {
    assert_eq!(classify_name("BCM BOLT CARRIER GROUP 5.56"), Category::GunParts);
    assert_eq!(classify_name("GEISSELE SSA-E TRIGGER"), Category::GunParts);
    assert_eq!(classify_name("HOLOSUN 507C RED DOT"), Category::Optics);
    assert_eq!(classify_name("LEATHERMAN WAVE MULTI-TOOL"), Category::Survival);
    assert_eq!(classify_name("RCBS ROCK CHUCKER SUPREME RELOADING PRESS"), Category::Reloading);
    assert_eq!(classify_name("HORNADY 6.5 CREEDMOOR 140GR ELD-M 20RD"), Category::Ammunition);
    assert_eq!(classify_name("SAFARILAND 6360 HOLSTER"), Category::Gear);
}

#[test]
fn classification_is_total() {
    let long = "X".repeat(10_000);
    let inputs = [
        "",
        "   ",
        "|||",
        "ÆØÅ ÜBER PRODUKT",
        "12345",
        "....",
        long.as_str(),
    ];
    for name in inputs {
        assert!(Category::ALL.contains(&classify_name(name)));
    }
    assert_eq!(classify_name(""), Category::Gear);
}

#[test]
fn classification_is_deterministic() {
    let fresh = Classifier::standard();
    for (name, _) in KNOWN_CASES {
        let first = classify_name(name);
        assert_eq!(classify_name(name), first);
        assert_eq!(fresh.classify(name, ""), first);
    }
}

#[test]
fn earlier_pass_wins_on_overlap() {
    let passes = vec![
        Pass::new("first", Subject::Name, Category::Optics).include_any(&[r"\bWIDGET\b"]),
        Pass::new("second", Subject::Name, Category::GunParts).include_any(&[r"\bWIDGET\b"]),
    ];
    let classifier = Classifier::new(passes);
    assert_eq!(classifier.classify("blue widget", ""), Category::Optics);
}

#[test]
fn exclusion_blocks_inclusion_within_a_pass() {
    let pass = Pass::new("optics", Subject::Name, Category::Optics)
        .exclude(&[r"\bCOVER\b"])
        .include_any(&[r"\bSCOPE\b"]);
    assert!(pass.claims("SCOPE", ""));
    assert!(!pass.claims("SCOPE COVER", ""));
}

#[test]
fn include_all_needs_every_pattern() {
    let pass = Pass::new("ammo", Subject::Name, Category::Ammunition)
        .include_all(&[r"\b9MM\b", r"\bAMMO\b"]);
    assert!(pass.claims("9MM AMMO", ""));
    assert!(!pass.claims("9MM HOLSTER", ""));
}

#[test]
#[should_panic(expected = "valid classifier regex")]
fn invalid_pattern_panics_when_pass_is_built() {
    let _ = Pass::new("broken", Subject::Name, Category::Gear).include_any(&["(UNCLOSED"]);
}
