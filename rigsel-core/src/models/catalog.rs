#[cfg(test)]
#[path = "../../tests/unit/models/catalog_test.rs"]
mod catalog_test;

use std::ops::Index;
use std::sync::Arc;

/// Represents a single hardware item (a GPU) which can be picked into a build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    /// A name of the item.
    pub name: String,
    /// A relative performance score of the item.
    pub performance: u64,
    /// A cost of the item.
    pub cost: u64,
    /// An amount of VRAM of the item, in gigabytes.
    pub vram: u64,
}

impl CatalogItem {
    /// Creates a new instance of `CatalogItem`.
    pub fn new(name: &str, performance: u64, cost: u64, vram: u64) -> Self {
        Self { name: name.to_string(), performance, cost, vram }
    }
}

/// A read-only collection of catalog items shared between solver entities.
/// Genes refer to items by their index within the catalog.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    items: Arc<Vec<CatalogItem>>,
}

impl Catalog {
    /// Creates a new instance of `Catalog`.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items: Arc::new(items) }
    }

    /// Returns amount of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an item at the given index if it exists.
    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// Returns an iterator over catalog items.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }
}

impl Index<usize> for Catalog {
    type Output = CatalogItem;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}
