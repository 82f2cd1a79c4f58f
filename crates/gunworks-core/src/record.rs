//! Source-agnostic view of one raw vendor row.
//!
//! CSV rows and API objects name the same concepts differently. Each input
//! format implements [`VendorRecord`] once so the rest of the pipeline never
//! inspects raw column or key names. Accessors return the raw text as
//! supplied; interpretation (numbers, flags, placeholders) happens in field
//! extraction.

pub trait VendorRecord {
    fn sku(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
    fn description(&self) -> Option<&str> {
        None
    }
    fn brand(&self) -> Option<&str>;
    fn manufacturer_part_number(&self) -> Option<&str> {
        None
    }
    /// Vendor taxonomy string, often pipe-delimited (`Ammunition|Rifle`).
    fn vendor_category(&self) -> Option<&str>;
    fn msrp(&self) -> Option<&str>;
    fn map_price(&self) -> Option<&str>;
    fn price(&self) -> Option<&str>;
    fn quantity(&self) -> Option<&str>;
    /// Explicit availability flag, for sources that send one beside the
    /// quantity.
    fn in_stock_flag(&self) -> Option<&str> {
        None
    }
    fn upc(&self) -> Option<&str>;
    fn image_url(&self) -> Option<&str>;
    fn drop_ship_flag(&self) -> Option<&str>;
    fn drop_ship_price(&self) -> Option<&str>;
    fn allocated_flag(&self) -> Option<&str>;
    fn ship_weight(&self) -> Option<&str> {
        None
    }
    fn serialized_flag(&self) -> Option<&str> {
        None
    }
    fn ffl_flag(&self) -> Option<&str> {
        None
    }
}
