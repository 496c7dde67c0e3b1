#[cfg(test)]
#[path = "../../tests/unit/evolution/mutation_test.rs"]
mod mutation_test;

use crate::models::{Allele, Gene};
use crate::utils::{Float, Random};

/// Mutates a gene by rewriting one random position with a random catalog item.
pub struct RandomResetMutation {
    rate: Float,
    catalog_size: usize,
}

impl RandomResetMutation {
    /// Creates a new instance of `RandomResetMutation`.
    pub fn new(rate: Float, catalog_size: usize) -> Self {
        Self { rate, catalog_size }
    }

    /// Returns a mutated copy of the given gene or `None` when the mutation does not hit.
    /// The original gene is left untouched either way.
    pub fn mutate(&self, gene: &Gene, random: &(dyn Random + Send + Sync)) -> Option<Gene> {
        if !random.is_hit(self.rate) {
            return None;
        }

        let allele = random.uniform_int(0, self.catalog_size as i32 - 1) as Allele;
        let position = random.uniform_int(0, gene.len() as i32 - 1) as usize;

        let mut alleles = gene.alleles().to_vec();
        alleles[position] = allele;

        Some(Gene::new(alleles))
    }
}
