#[cfg(test)]
#[path = "../../tests/unit/evolution/crossover_test.rs"]
mod crossover_test;

use crate::models::Gene;
use crate::utils::{Float, Random};

/// Recombines two parent genes into an offspring using a single point cut: the offspring
/// takes the head of the first parent and the tail of the second one.
pub struct SinglePointCrossover {
    rate: Float,
}

impl SinglePointCrossover {
    /// Creates a new instance of `SinglePointCrossover`.
    pub fn new(rate: Float) -> Self {
        Self { rate }
    }

    /// Produces an offspring of the given parents.
    ///
    /// Both parents are expected to have the same size. When the crossover does not hit or
    /// the gene has a single allele, a copy of the first parent is returned.
    pub fn recombine(&self, parent1: &Gene, parent2: &Gene, random: &(dyn Random + Send + Sync)) -> Gene {
        if !random.is_hit(self.rate) {
            return parent1.clone();
        }

        let size = parent1.len();
        if size < 2 {
            return parent1.clone();
        }

        // the cut point splits the gene in two non-empty parts
        let point = random.uniform_int(1, size as i32 - 1) as usize;
        let alleles =
            parent1.alleles()[..point].iter().chain(parent2.alleles()[point..].iter()).copied().collect::<Vec<_>>();

        Gene::new(alleles)
    }
}
