//! Record → product pipeline: skip policy, classification, subcategory,
//! facets, then grouping by category.

use std::collections::BTreeMap;
use std::fmt;

use gunworks_classify::extract::parse_flag;
use gunworks_classify::{brand_rank, extract_facets, extract_fields, Classifier};
use gunworks_core::mapping::is_firearm_department;
use gunworks_core::{Category, CategoryMapping, MappingEntry, NormalizedProduct, VendorRecord};

/// Why a record was left out of every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SkipReason {
    /// Serialized, FFL-required, or in a firearm department.
    Restricted,
    OutOfStock,
    MissingName,
    /// No usable display price.
    Unpriced,
}

impl SkipReason {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            SkipReason::Restricted => "restricted",
            SkipReason::OutOfStock => "out_of_stock",
            SkipReason::MissingName => "missing_name",
            SkipReason::Unpriced => "unpriced",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SkipCounts {
    pub restricted: usize,
    pub out_of_stock: usize,
    pub missing_name: usize,
    pub unpriced: usize,
}

impl SkipCounts {
    fn record(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::Restricted => self.restricted += 1,
            SkipReason::OutOfStock => self.out_of_stock += 1,
            SkipReason::MissingName => self.missing_name += 1,
            SkipReason::Unpriced => self.unpriced += 1,
        }
    }

    pub(crate) fn total(&self) -> usize {
        self.restricted + self.out_of_stock + self.missing_name + self.unpriced
    }
}

/// Products grouped by category, plus the records that were suppressed.
///
/// Every category has an entry, possibly empty.
#[derive(Debug)]
pub(crate) struct PipelineOutput {
    pub categories: BTreeMap<Category, Vec<NormalizedProduct>>,
    pub skipped: SkipCounts,
}

impl PipelineOutput {
    pub(crate) fn classified(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

pub(crate) struct Pipeline<'a> {
    mapping: &'a CategoryMapping,
    classifier: Classifier,
    image_size: u32,
}

/// Serialized or FFL flag, a firearm vendor department, or a mapping that
/// routes to firearms.
fn is_restricted<R: VendorRecord + ?Sized>(
    record: &R,
    vendor_category: &str,
    entry: Option<&MappingEntry>,
) -> bool {
    parse_flag(record.serialized_flag())
        || parse_flag(record.ffl_flag())
        || vendor_category
            .split('|')
            .next()
            .is_some_and(is_firearm_department)
        || entry.is_some_and(MappingEntry::is_firearm)
}

/// A present, non-blank availability flag that is not set overrides a
/// positive quantity.
fn flagged_unavailable<R: VendorRecord + ?Sized>(record: &R) -> bool {
    record
        .in_stock_flag()
        .filter(|flag| !flag.trim().is_empty())
        .is_some_and(|flag| !parse_flag(Some(flag)))
}

impl<'a> Pipeline<'a> {
    pub(crate) fn new(mapping: &'a CategoryMapping, image_size: u32) -> Self {
        Self {
            mapping,
            classifier: Classifier::standard(),
            image_size,
        }
    }

    /// Turn one vendor record into a categorized product, or say why not.
    pub(crate) fn process<R: VendorRecord + ?Sized>(
        &self,
        record: &R,
    ) -> Result<NormalizedProduct, SkipReason> {
        let mut product = extract_fields(record, self.image_size);
        let entry = self.mapping.lookup(&product.raw_category);

        if is_restricted(record, &product.raw_category, entry) {
            return Err(SkipReason::Restricted);
        }
        if !product.in_stock || flagged_unavailable(record) {
            return Err(SkipReason::OutOfStock);
        }
        if product.name.is_empty() {
            return Err(SkipReason::MissingName);
        }
        if product.display_price.is_none() {
            return Err(SkipReason::Unpriced);
        }

        let category = self.classifier.classify(&product.name, &product.brand);
        product.category = category;
        product.subcategory = entry
            .filter(|e| e.top_category() == Some(category))
            .and_then(MappingEntry::sub_label)
            .map(str::to_string);

        let facets = extract_facets(&product.name, category);
        product.caliber = facets.caliber.map(str::to_string);
        product.bullet_type = facets.bullet_type.map(str::to_string);
        product.case_material = facets.case_material.map(str::to_string);
        product.grain_weight = facets.grain_weight;
        product.round_count = facets.round_count;
        product.gear_type = facets.gear_type.map(str::to_string);

        Ok(product)
    }

    /// Process a batch and partition it by category.
    ///
    /// Each category's list is ordered by brand priority, then name.
    pub(crate) fn run<'r, R, I>(&self, records: I) -> PipelineOutput
    where
        R: VendorRecord + ?Sized + 'r,
        I: IntoIterator<Item = &'r R>,
    {
        let mut categories: BTreeMap<Category, Vec<NormalizedProduct>> =
            Category::ALL.iter().map(|c| (*c, Vec::new())).collect();
        let mut skipped = SkipCounts::default();

        for record in records {
            match self.process(record) {
                Ok(product) => categories
                    .entry(product.category)
                    .or_default()
                    .push(product),
                Err(reason) => {
                    tracing::debug!(
                        sku = record.sku().unwrap_or_default(),
                        %reason,
                        "skipping record"
                    );
                    skipped.record(reason);
                }
            }
        }

        for products in categories.values_mut() {
            products.sort_by_cached_key(|p| (brand_rank(&p.brand), p.name.clone()));
        }

        PipelineOutput {
            categories,
            skipped,
        }
    }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
