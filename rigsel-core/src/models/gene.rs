#[cfg(test)]
#[path = "../../tests/unit/models/gene_test.rs"]
mod gene_test;

use crate::models::Catalog;

/// A single position within a gene: an index of a catalog item.
pub type Allele = usize;

/// Represents a candidate solution as a fixed-length combination of catalog items.
/// The same item can be picked more than once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gene {
    alleles: Vec<Allele>,
}

impl Gene {
    /// Creates a new instance of `Gene`.
    pub fn new(alleles: Vec<Allele>) -> Self {
        Self { alleles }
    }

    /// Returns amount of alleles in the gene.
    pub fn len(&self) -> usize {
        self.alleles.len()
    }

    /// Returns true if the gene has no alleles.
    pub fn is_empty(&self) -> bool {
        self.alleles.is_empty()
    }

    /// Returns gene alleles as a slice.
    pub fn alleles(&self) -> &[Allele] {
        self.alleles.as_slice()
    }

    /// Accumulates characteristics of the gene over the given catalog.
    pub fn totals(&self, catalog: &Catalog) -> GeneTotals {
        self.alleles.iter().fold(GeneTotals::default(), |acc, &allele| {
            let item = &catalog[allele];
            GeneTotals {
                performance: acc.performance + item.performance,
                cost: acc.cost + item.cost,
                vram: acc.vram + item.vram,
            }
        })
    }
}

/// Accumulated characteristics of a gene.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GeneTotals {
    /// Total performance score.
    pub performance: u64,
    /// Total cost.
    pub cost: u64,
    /// Total amount of VRAM, in gigabytes.
    pub vram: u64,
}
