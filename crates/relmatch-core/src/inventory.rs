//! Inventory ingestion from an "all resources" CSV export.
//!
//! Only two columns matter: the resource type (required) and the location
//! (optional). Headers are matched after lowercasing and dropping anything
//! that is not alphanumeric, so `RESOURCE TYPE`, `Resource Type` and
//! `resource_type` all resolve to the same column.

use anyhow::Context;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::traits::InventorySource;
use crate::types::Inventory;

const RESOURCE_TYPE_HEADERS: &[&str] = &["resourcetype"];
const REGION_HEADERS: &[&str] = &["location", "region"];

pub struct CsvInventory {
    path: PathBuf,
}

impl CsvInventory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl InventorySource for CsvInventory {
    fn load_inventory(&self) -> anyhow::Result<Inventory> {
        let file = File::open(&self.path).with_context(|| format!("opening inventory {}", self.path.display()))?;
        let inventory = read_inventory(file).with_context(|| format!("reading inventory {}", self.path.display()))?;
        tracing::info!(
            path = %self.path.display(),
            resource_types = inventory.by_type.len(),
            regions = inventory.regions.len(),
            "inventory loaded"
        );
        Ok(inventory)
    }
}

/// Count rows per resource type and collect the distinct locations.
///
/// Identifiers are merged case-insensitively; the first spelling seen is the
/// one reported, and first-seen order is preserved.
pub fn read_inventory<R: Read>(reader: R) -> Result<Inventory> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?.clone();
    let type_col = find_column(&headers, RESOURCE_TYPE_HEADERS)
        .ok_or_else(|| Error::MissingColumn("RESOURCE TYPE".to_string()))?;
    let region_col = find_column(&headers, REGION_HEADERS);

    let mut inventory = Inventory::new();
    let mut spelling: HashMap<String, String> = HashMap::new();
    for record in rdr.records() {
        let record = record?;
        let raw = record.get(type_col).unwrap_or("").trim();
        if raw.is_empty() {
            continue;
        }
        let key = spelling.entry(raw.to_lowercase()).or_insert_with(|| raw.to_string()).clone();
        *inventory.by_type.entry(key).or_insert(0) += 1;

        if let Some(region) = region_col.and_then(|c| record.get(c)).map(str::trim) {
            if !region.is_empty() {
                inventory.regions.insert(region.to_string());
            }
        }
    }
    Ok(inventory)
}

fn find_column(headers: &csv::StringRecord, wanted: &[&str]) -> Option<usize> {
    wanted.iter().find_map(|w| headers.iter().position(|h| normalize_header(h) == *w))
}

fn normalize_header(h: &str) -> String {
    h.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect()
}
