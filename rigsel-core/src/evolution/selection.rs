#[cfg(test)]
#[path = "../../tests/unit/evolution/selection_test.rs"]
mod selection_test;

use crate::evolution::EvaluatedGene;
use crate::utils::{Float, SolverError, SolverResult, compare_floats};
use std::cmp::Ordering;

/// Breeds a parent pool proportionally to fitness and keeps only its elite half.
///
/// Every gene receives `ceil(fitness / total * population_size)` copies in the pool, so the
/// pool is usually bigger than the population; the surplus is dropped by the elite cut.
/// Genes with a negative fitness share receive no copies at all.
pub struct FitnessProportionateSelection {
    population_size: usize,
}

impl FitnessProportionateSelection {
    /// Creates a new instance of `FitnessProportionateSelection`.
    pub fn new(population_size: usize) -> Self {
        Self { population_size }
    }

    /// Selects parents of the next generation from the given population.
    /// Returns the best `population_size / 2` genes of the breeding pool, best first.
    pub fn select(&self, population: &[EvaluatedGene]) -> SolverResult<Vec<EvaluatedGene>> {
        let fitness_sum = population.iter().map(|evaluated| evaluated.fitness).sum::<Float>();
        if compare_floats(fitness_sum, 0.) == Ordering::Equal {
            return Err(SolverError::DegeneratePopulation);
        }

        let mut pool = Vec::with_capacity(population.len() + self.population_size);
        for evaluated in population {
            let expected_count = evaluated.fitness / fitness_sum * self.population_size as Float;
            let actual_count = expected_count.ceil().max(0.) as usize;

            (0..actual_count).for_each(|_| pool.push(evaluated.clone()));
        }

        pool.sort_by(|a, b| compare_floats(b.fitness, a.fitness));
        pool.truncate(self.population_size / 2);

        Ok(pool)
    }
}

/// Returns the best gene of the population, preferring the earliest one on fitness ties.
pub fn select_best(population: &[EvaluatedGene]) -> Option<&EvaluatedGene> {
    population.iter().fold(None, |best, candidate| match best {
        Some(best) if compare_floats(candidate.fitness, best.fitness) != Ordering::Greater => Some(best),
        _ => Some(candidate),
    })
}
