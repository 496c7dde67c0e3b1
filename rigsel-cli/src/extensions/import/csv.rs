//! Import from a simple csv format logic.
#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/csv_test.rs"]
mod csv_test;

use rigsel_core::prelude::{Catalog, CatalogItem};
use serde::Deserialize;
use std::collections::HashSet;
use std::error::Error;
use std::io::{BufReader, Read};

#[derive(Debug, Deserialize)]
struct CsvCatalogItem {
    name: String,
    performance: u64,
    cost: u64,
    vram: u64,
}

fn read_csv_entries<T, R: Read>(reader: BufReader<R>) -> Result<Vec<T>, Box<dyn Error>>
where
    for<'de> T: Deserialize<'de>,
{
    let mut reader = csv::Reader::from_reader(reader);
    let mut entries = vec![];

    for entry in reader.deserialize() {
        entries.push(entry?);
    }

    Ok(entries)
}

/// Reads a GPU catalog from csv format with a `name,performance,cost,vram` header row.
/// Item names must be unique within the catalog.
pub fn read_csv_catalog<R: Read>(reader: BufReader<R>) -> Result<Catalog, Box<dyn Error>> {
    let entries = read_csv_entries::<CsvCatalogItem, _>(reader)?;

    let mut known_names = HashSet::new();
    for entry in entries.iter() {
        if !known_names.insert(entry.name.as_str()) {
            return Err(format!("duplicate item name: '{}'", entry.name).into());
        }
    }

    Ok(Catalog::new(
        entries
            .into_iter()
            .map(|entry| CatalogItem::new(entry.name.as_str(), entry.performance, entry.cost, entry.vram))
            .collect(),
    ))
}
