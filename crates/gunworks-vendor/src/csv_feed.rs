//! Vendor CSV product feed.
//!
//! The feed's header row names the columns; several concepts appear under
//! more than one header depending on the export, so accessors try each
//! known alias in turn.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use gunworks_core::VendorRecord;

use crate::error::VendorError;

const NAME_COLUMNS: &[&str] = &["Item Name", "Web Item Name", "Item Description", "Name"];
const DESCRIPTION_COLUMNS: &[&str] = &["Web Item Description", "Item Description"];
const SKU_COLUMNS: &[&str] = &["SKU", "CSSI Item Number", "Manufacturer Item Number"];
const QUANTITY_COLUMNS: &[&str] = &["Quantity In Stock", "Qty On Hand"];
const MAP_COLUMNS: &[&str] = &["MAP", "Retail MAP"];
const UPC_COLUMNS: &[&str] = &["UPC", "UPC Code"];
const WEIGHT_COLUMNS: &[&str] = &["Item Weight", "Ship Weight"];

/// One data row keyed by header name.
#[derive(Debug, Clone, Default)]
pub struct CsvRecord {
    fields: HashMap<String, String>,
}

impl CsvRecord {
    #[must_use]
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Raw value of a column; blank cells read as absent.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    fn first_of(&self, columns: &[&str]) -> Option<&str> {
        columns.iter().find_map(|column| self.get(column))
    }
}

impl VendorRecord for CsvRecord {
    fn sku(&self) -> Option<&str> {
        self.first_of(SKU_COLUMNS)
    }

    fn name(&self) -> Option<&str> {
        self.first_of(NAME_COLUMNS)
    }

    fn description(&self) -> Option<&str> {
        self.first_of(DESCRIPTION_COLUMNS)
    }

    fn brand(&self) -> Option<&str> {
        self.get("Manufacturer")
    }

    fn manufacturer_part_number(&self) -> Option<&str> {
        self.get("Manufacturer Item Number")
    }

    fn vendor_category(&self) -> Option<&str> {
        self.get("Category")
    }

    fn msrp(&self) -> Option<&str> {
        self.get("MSRP")
    }

    fn map_price(&self) -> Option<&str> {
        self.first_of(MAP_COLUMNS)
    }

    fn price(&self) -> Option<&str> {
        self.get("Price")
    }

    fn quantity(&self) -> Option<&str> {
        self.first_of(QUANTITY_COLUMNS)
    }

    fn upc(&self) -> Option<&str> {
        self.first_of(UPC_COLUMNS)
    }

    fn image_url(&self) -> Option<&str> {
        self.get("Image Location")
    }

    fn drop_ship_flag(&self) -> Option<&str> {
        self.get("Drop Ship Flag")
    }

    fn drop_ship_price(&self) -> Option<&str> {
        self.get("Drop Ship Price")
    }

    fn allocated_flag(&self) -> Option<&str> {
        self.get("Allocated Item?")
    }

    fn ship_weight(&self) -> Option<&str> {
        self.first_of(WEIGHT_COLUMNS)
    }

    fn serialized_flag(&self) -> Option<&str> {
        self.get("Serialized Item?")
    }

    fn ffl_flag(&self) -> Option<&str> {
        self.get("FFL Required?")
    }
}

/// Rows read from one feed, plus the count of rows that could not be parsed.
#[derive(Debug, Default)]
pub struct CsvFeed {
    pub records: Vec<CsvRecord>,
    pub record_errors: usize,
}

/// Read a CSV feed from any byte source.
///
/// A malformed row is logged, counted in [`CsvFeed::record_errors`], and
/// skipped; reading continues with the next row.
///
/// # Errors
///
/// Returns [`VendorError::Csv`] if the header row cannot be read.
pub fn read_csv<R: Read>(source: R) -> Result<CsvFeed, VendorError> {
    let mut reader = csv::ReaderBuilder::new().from_reader(source);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();

    let mut feed = CsvFeed::default();
    for (index, row) in reader.records().enumerate() {
        match row {
            Ok(row) => feed.records.push(CsvRecord::from_pairs(
                headers.iter().cloned().zip(row.iter().map(str::to_string)),
            )),
            Err(e) => {
                feed.record_errors += 1;
                tracing::warn!(row = index + 1, error = %e, "skipping malformed CSV row");
            }
        }
    }

    tracing::debug!(
        rows = feed.records.len(),
        errors = feed.record_errors,
        "read CSV feed"
    );
    Ok(feed)
}

/// Read a CSV feed from a local file.
///
/// # Errors
///
/// Returns [`VendorError::Io`] if the file cannot be opened, or any error
/// from [`read_csv`].
pub fn read_csv_path(path: &Path) -> Result<CsvFeed, VendorError> {
    let file = File::open(path).map_err(|source| VendorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_csv(file)
}
