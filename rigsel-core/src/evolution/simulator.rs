#[cfg(test)]
#[path = "../../tests/unit/evolution/simulator_test.rs"]
mod simulator_test;

use crate::evolution::*;
use crate::models::{Allele, Gene};
use crate::utils::{SolverError, SolverResult, Timer, compare_floats};
use std::cmp::Ordering;

/// An entity which simulates evolution process.
pub struct EvolutionSimulator {
    config: EvolutionConfig,
}

impl EvolutionSimulator {
    /// Creates a new instance of `EvolutionSimulator`.
    pub fn new(config: EvolutionConfig) -> SolverResult<Self> {
        if config.catalog.is_empty() {
            return Err(SolverError::InvalidConfig("catalog must contain at least one item".to_string()));
        }

        if config.population_size < 2 || config.gene_size == 0 {
            return Err(SolverError::InvalidConfig(
                "population size must be at least 2 and gene size at least 1".to_string(),
            ));
        }

        Ok(Self { config })
    }

    /// Runs evolution with the given amount of generations.
    /// Returns the best gene of the final population and telemetry metrics when enabled.
    pub fn run(self) -> EvolutionResult {
        let EvolutionConfig {
            catalog,
            population_size,
            gene_size,
            generations,
            max_cost,
            min_vram,
            crossover_rate,
            mutation_rate,
            telemetry_mode,
            environment,
        } = self.config;

        let random = environment.random.clone();
        let mut telemetry = Telemetry::new(telemetry_mode);

        let objective = RigObjective::new(catalog.clone(), max_cost, min_vram);
        let selection = FitnessProportionateSelection::new(population_size);
        let crossover = SinglePointCrossover::new(crossover_rate);
        let mutation = RandomResetMutation::new(mutation_rate, catalog.len());

        let init_time = Timer::start();
        let mut population = (0..population_size)
            .map(|_| {
                let alleles =
                    (0..gene_size).map(|_| random.uniform_int(0, catalog.len() as i32 - 1) as Allele).collect();
                objective.evaluate(Gene::new(alleles))
            })
            .collect::<Vec<_>>();
        telemetry.log(format!("created initial population in {}ms", init_time.elapsed_millis()).as_str());

        let mut best_fitness = match select_best(&population) {
            Some(best) => {
                telemetry.on_generation(best, &population, init_time, true);
                best.fitness
            }
            None => return Err(SolverError::DegeneratePopulation),
        };

        for _ in 0..generations {
            let generation_time = Timer::start();

            let mut offspring = selection.select(&population)?;

            while offspring.len() < population_size {
                // parents are picked from the pool which already includes earlier children
                let parent1 = offspring[random.uniform_int(0, offspring.len() as i32 - 1) as usize].gene.clone();
                let parent2 = offspring[random.uniform_int(0, offspring.len() as i32 - 1) as usize].gene.clone();

                let child = crossover.recombine(&parent1, &parent2, random.as_ref());
                offspring.push(objective.evaluate(child));
            }

            population = offspring
                .into_iter()
                .map(|individual| match mutation.mutate(&individual.gene, random.as_ref()) {
                    Some(mutated) => objective.evaluate(mutated),
                    None => individual,
                })
                .collect();

            match select_best(&population) {
                Some(best) => {
                    let is_improved = compare_floats(best.fitness, best_fitness) == Ordering::Greater;
                    if is_improved {
                        best_fitness = best.fitness;
                    }

                    telemetry.on_generation(best, &population, generation_time, is_improved);
                }
                None => return Err(SolverError::DegeneratePopulation),
            }
        }

        match select_best(&population) {
            Some(best) => {
                telemetry.on_result(best, &population);

                let solution = SolverSolution { gene: best.gene.clone(), fitness: best.fitness };

                Ok((solution, telemetry.take_metrics()))
            }
            None => Err(SolverError::DegeneratePopulation),
        }
    }
}
