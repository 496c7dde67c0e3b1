#[cfg(test)]
#[path = "../../tests/unit/evolution/config_test.rs"]
mod config_test;

use crate::evolution::TelemetryMode;
use crate::models::Catalog;
use crate::utils::{Environment, Float, SolverError, SolverResult};
use std::sync::Arc;

/// A configuration which controls evolution execution.
pub struct EvolutionConfig {
    /// A catalog of items genes are built from.
    pub catalog: Catalog,
    /// An amount of genes in the population.
    pub population_size: usize,
    /// An amount of alleles in a single gene.
    pub gene_size: usize,
    /// An amount of generations to run.
    pub generations: usize,
    /// A cost budget for a single gene.
    pub max_cost: u64,
    /// A VRAM floor for a single gene, in gigabytes.
    pub min_vram: u64,
    /// A probability of the crossover.
    pub crossover_rate: Float,
    /// A probability of the mutation.
    pub mutation_rate: Float,
    /// A telemetry mode.
    pub telemetry_mode: TelemetryMode,
    /// An environment.
    pub environment: Arc<Environment>,
}

/// Provides configurable way to build evolution configuration using fluent interface style.
pub struct EvolutionConfigBuilder {
    catalog: Option<Catalog>,
    population_size: usize,
    gene_size: usize,
    generations: usize,
    max_cost: u64,
    min_vram: u64,
    crossover_rate: Float,
    mutation_rate: Float,
    telemetry_mode: TelemetryMode,
    environment: Option<Arc<Environment>>,
}

impl Default for EvolutionConfigBuilder {
    fn default() -> Self {
        Self {
            catalog: None,
            population_size: 5,
            gene_size: 3,
            generations: 30,
            max_cost: 50_000,
            min_vram: 40,
            crossover_rate: 0.7,
            mutation_rate: 0.1,
            telemetry_mode: TelemetryMode::None,
            environment: None,
        }
    }
}

impl EvolutionConfigBuilder {
    /// Sets the catalog to pick items from. Required.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets amount of genes in the population. Default is 5.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets amount of alleles in a single gene. Default is 3.
    pub fn with_gene_size(mut self, gene_size: usize) -> Self {
        self.gene_size = gene_size;
        self
    }

    /// Sets amount of generations to be run by evolution. Default is 30.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets a cost budget for a single gene. Default is 50000.
    pub fn with_max_cost(mut self, max_cost: u64) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Sets a VRAM floor for a single gene, in gigabytes. Default is 40.
    pub fn with_min_vram(mut self, min_vram: u64) -> Self {
        self.min_vram = min_vram;
        self
    }

    /// Sets a probability of the crossover. Default is 0.7.
    pub fn with_crossover_rate(mut self, crossover_rate: Float) -> Self {
        self.crossover_rate = crossover_rate;
        self
    }

    /// Sets a probability of the mutation. Default is 0.1.
    pub fn with_mutation_rate(mut self, mutation_rate: Float) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets a telemetry mode. Default is no telemetry.
    pub fn with_telemetry_mode(mut self, telemetry_mode: TelemetryMode) -> Self {
        self.telemetry_mode = telemetry_mode;
        self
    }

    /// Sets an environment. Default is an environment with a non deterministic random.
    pub fn with_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Builds the evolution configuration validating its parameters.
    pub fn build(self) -> SolverResult<EvolutionConfig> {
        let catalog = self.catalog.ok_or_else(|| SolverError::InvalidConfig("catalog is not set".to_string()))?;

        if catalog.is_empty() {
            return Err(SolverError::InvalidConfig("catalog must contain at least one item".to_string()));
        }

        if self.population_size < 2 {
            return Err(SolverError::InvalidConfig("population size must be at least 2".to_string()));
        }

        if self.gene_size == 0 {
            return Err(SolverError::InvalidConfig("gene size must be at least 1".to_string()));
        }

        if !(0. ..=1.).contains(&self.crossover_rate) {
            return Err(SolverError::InvalidConfig("crossover rate must be in [0, 1] range".to_string()));
        }

        if !(0. ..=1.).contains(&self.mutation_rate) {
            return Err(SolverError::InvalidConfig("mutation rate must be in [0, 1] range".to_string()));
        }

        Ok(EvolutionConfig {
            catalog,
            population_size: self.population_size,
            gene_size: self.gene_size,
            generations: self.generations,
            max_cost: self.max_cost,
            min_vram: self.min_vram,
            crossover_rate: self.crossover_rate,
            mutation_rate: self.mutation_rate,
            telemetry_mode: self.telemetry_mode,
            environment: self.environment.unwrap_or_else(|| Arc::new(Environment::default())),
        })
    }
}
