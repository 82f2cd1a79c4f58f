//! Vendor taxonomy → storefront category mapping.
//!
//! The mapping file is a flat object keyed by the vendor's category string:
//!
//! ```json
//! { "Ammunition|Handgun": { "top": "ammunition", "sub": "Handgun" } }
//! ```
//!
//! JSON is the usual format; files ending in `.yaml`/`.yml` are read as YAML.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::products::Category;
use crate::ConfigError;

/// Vendor department names that identify serialized firearms.
const FIREARM_DEPARTMENTS: &[&str] = &[
    "firearms",
    "firearm",
    "handguns",
    "pistols",
    "rifles",
    "shotguns",
    "revolvers",
    "used guns",
    "short barreled rifles",
    "nfa",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub top: String,
    #[serde(default)]
    pub sub: Option<String>,
}

impl MappingEntry {
    /// The storefront category named by `top`, when it names one.
    #[must_use]
    pub fn top_category(&self) -> Option<Category> {
        self.top.parse().ok()
    }

    /// Non-empty subcategory label.
    #[must_use]
    pub fn sub_label(&self) -> Option<&str> {
        self.sub.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Whether `top` routes the record to a firearm department.
    #[must_use]
    pub fn is_firearm(&self) -> bool {
        is_firearm_department(&self.top)
    }
}

/// Whether a vendor or mapping department name refers to firearms themselves.
#[must_use]
pub fn is_firearm_department(name: &str) -> bool {
    let lower = name.trim().to_ascii_lowercase();
    FIREARM_DEPARTMENTS.contains(&lower.as_str())
}

#[derive(Debug, Clone, Default)]
pub struct CategoryMapping {
    entries: HashMap<String, MappingEntry>,
}

impl CategoryMapping {
    /// Build a mapping from already-parsed entries.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] for an empty key or an empty `top`.
    pub fn from_entries(entries: HashMap<String, MappingEntry>) -> Result<Self, ConfigError> {
        let mut trimmed = HashMap::with_capacity(entries.len());
        for (key, entry) in entries {
            let key = key.trim().to_string();
            if key.is_empty() {
                return Err(ConfigError::Validation(
                    "category mapping key must be non-empty".to_string(),
                ));
            }
            if entry.top.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category mapping '{key}' has an empty top category"
                )));
            }
            trimmed.insert(key, entry);
        }
        Ok(Self { entries: trimmed })
    }

    /// Look up a vendor category string.
    ///
    /// Tries the full trimmed string first, then the first pipe segment, so
    /// `Ammunition|Rifle` falls back to an `Ammunition` entry.
    #[must_use]
    pub fn lookup(&self, vendor_category: &str) -> Option<&MappingEntry> {
        let key = vendor_category.trim();
        if key.is_empty() {
            return None;
        }
        self.entries.get(key).or_else(|| {
            key.split('|')
                .map(str::trim)
                .find(|s| !s.is_empty())
                .filter(|head| *head != key)
                .and_then(|head| self.entries.get(head))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Load and validate the category mapping file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_category_mapping(path: &Path) -> Result<CategoryMapping, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::MappingFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let entries: HashMap<String, MappingEntry> = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| ConfigError::MappingFileParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| ConfigError::MappingFileParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    };

    CategoryMapping::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn entry(top: &str, sub: Option<&str>) -> MappingEntry {
        MappingEntry {
            top: top.to_string(),
            sub: sub.map(str::to_string),
        }
    }

    fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(body.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn lookup_prefers_exact_key() {
        let mut entries = HashMap::new();
        entries.insert("Ammunition".to_string(), entry("ammunition", None));
        entries.insert(
            "Ammunition|Handgun".to_string(),
            entry("ammunition", Some("Handgun")),
        );
        let mapping = CategoryMapping::from_entries(entries).unwrap();

        let hit = mapping.lookup(" Ammunition|Handgun ").unwrap();
        assert_eq!(hit.sub_label(), Some("Handgun"));
    }

    #[test]
    fn lookup_falls_back_to_first_segment() {
        let mut entries = HashMap::new();
        entries.insert("Optics".to_string(), entry("optics", Some("Scopes")));
        let mapping = CategoryMapping::from_entries(entries).unwrap();

        let hit = mapping.lookup("Optics|Riflescopes").unwrap();
        assert_eq!(hit.top_category(), Some(Category::Optics));
        assert!(mapping.lookup("Knives|Folding").is_none());
        assert!(mapping.lookup("").is_none());
    }

    #[test]
    fn from_entries_rejects_empty_top() {
        let mut entries = HashMap::new();
        entries.insert("Misc".to_string(), entry("  ", None));
        let result = CategoryMapping::from_entries(entries);
        assert!(
            matches!(result, Err(ConfigError::Validation(ref msg)) if msg.contains("Misc")),
            "expected Validation error naming the key, got: {result:?}"
        );
    }

    #[test]
    fn from_entries_rejects_empty_key() {
        let mut entries = HashMap::new();
        entries.insert(" ".to_string(), entry("gear", None));
        assert!(matches!(
            CategoryMapping::from_entries(entries),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn firearm_tops_are_flagged() {
        assert!(entry("Firearms", None).is_firearm());
        assert!(entry("rifles", None).is_firearm());
        assert!(!entry("gun-parts", None).is_firearm());
        assert_eq!(entry("Firearms", None).top_category(), None);
    }

    #[test]
    fn blank_sub_label_is_none() {
        assert_eq!(entry("gear", Some("  ")).sub_label(), None);
    }

    #[test]
    fn load_category_mapping_reads_json() {
        let file = write_temp(
            ".json",
            r#"{ "Magazines|Rifle": { "top": "magazines", "sub": "Rifle" } }"#,
        );
        let mapping = load_category_mapping(file.path()).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.lookup("Magazines|Rifle").and_then(MappingEntry::top_category),
            Some(Category::Magazines)
        );
    }

    #[test]
    fn load_category_mapping_reads_yaml() {
        let file = write_temp(
            ".yaml",
            "\"Reloading|Powder\":\n  top: reloading\n  sub: Powder\n",
        );
        let mapping = load_category_mapping(file.path()).unwrap();
        assert_eq!(
            mapping.lookup("Reloading|Powder").and_then(MappingEntry::sub_label),
            Some("Powder")
        );
    }

    #[test]
    fn load_category_mapping_missing_file_is_io_error() {
        let result = load_category_mapping(Path::new("/nonexistent/category-mapping.json"));
        assert!(matches!(result, Err(ConfigError::MappingFileIo { .. })));
    }

    #[test]
    fn load_category_mapping_bad_json_is_parse_error() {
        let file = write_temp(".json", "{ not json");
        let result = load_category_mapping(file.path());
        assert!(matches!(result, Err(ConfigError::MappingFileParse { .. })));
    }
}
