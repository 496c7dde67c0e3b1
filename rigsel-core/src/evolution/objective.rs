#[cfg(test)]
#[path = "../../tests/unit/evolution/objective_test.rs"]
mod objective_test;

use crate::models::{Catalog, Gene};
use crate::utils::Float;

/// A fitness value assigned to infeasible genes which are both over the cost budget and
/// under the VRAM floor. Such genes are kept alive with a tiny chance to breed.
const INFEASIBLE_FITNESS: Float = 1.;

/// A scaling factor which converts cost headroom into fitness units.
const COST_SCALE: Float = 15.;

/// Estimates quality of genes as a single scalar fitness value, the higher the better.
pub struct RigObjective {
    catalog: Catalog,
    max_cost: u64,
    min_vram: u64,
}

/// A gene with its cached fitness value.
#[derive(Clone, Debug)]
pub struct EvaluatedGene {
    /// An underlying gene.
    pub gene: Gene,
    /// A fitness of the gene.
    pub fitness: Float,
}

impl RigObjective {
    /// Creates a new instance of `RigObjective`.
    pub fn new(catalog: Catalog, max_cost: u64, min_vram: u64) -> Self {
        Self { catalog, max_cost, min_vram }
    }

    /// Estimates fitness of the given gene.
    ///
    /// The value rewards raw performance and remaining cost budget; a gene over the budget
    /// gets penalized by the negative headroom, possibly below zero. A gene which violates
    /// both constraints at once collapses to a small constant fitness.
    pub fn fitness(&self, gene: &Gene) -> Float {
        let totals = gene.totals(&self.catalog);

        if totals.cost > self.max_cost && totals.vram < self.min_vram {
            return INFEASIBLE_FITNESS;
        }

        // cost can exceed the budget here, so subtract as floats to keep the sign
        totals.performance as Float + (self.max_cost as Float - totals.cost as Float) / COST_SCALE
    }

    /// Evaluates the given gene caching its fitness.
    pub fn evaluate(&self, gene: Gene) -> EvaluatedGene {
        let fitness = self.fitness(&gene);
        EvaluatedGene { gene, fitness }
    }
}
