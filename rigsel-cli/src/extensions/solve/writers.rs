//! Solution writers for supported output formats.
#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/writers_test.rs"]
mod writers_test;

use rigsel_core::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};

#[derive(Serialize)]
struct JsonItem {
    name: String,
    performance: u64,
    cost: u64,
    vram: u64,
}

#[derive(Serialize)]
struct JsonTotals {
    performance: u64,
    cost: u64,
    vram: u64,
}

#[derive(Serialize)]
struct JsonMetrics {
    duration: usize,
    generations: usize,
    speed: Float,
    evolution: Vec<JsonGeneration>,
}

#[derive(Serialize)]
struct JsonGeneration {
    number: usize,
    timestamp: Float,
    is_improvement: bool,
    population: JsonPopulation,
}

#[derive(Serialize)]
struct JsonPopulation {
    individuals: Vec<JsonIndividual>,
}

#[derive(Serialize)]
struct JsonIndividual {
    difference: Float,
    fitness: Float,
}

#[derive(Serialize)]
struct JsonSolution {
    items: Vec<JsonItem>,
    totals: JsonTotals,
    fitness: Float,
    #[serde(skip_serializing_if = "Option::is_none")]
    metrics: Option<JsonMetrics>,
}

/// Writes the solution as a human readable report, one line per picked item.
pub fn write_text_solution<W: Write>(
    mut writer: BufWriter<W>,
    solution: &SolverSolution,
    catalog: &Catalog,
) -> Result<(), String> {
    writeln!(writer, "The best solution is:").map_err(|err| err.to_string())?;

    for item in get_solution_items(solution, catalog)? {
        writeln!(
            writer,
            "{} with performance {}, cost {}, and VRAM {} GB",
            item.name, item.performance, item.cost, item.vram
        )
        .map_err(|err| err.to_string())?;
    }

    writer.flush().map_err(|err| err.to_string())
}

/// Writes the solution as a json document with picked items, their totals, fitness
/// and telemetry metrics when they are collected.
pub fn write_json_solution<W: Write>(
    writer: BufWriter<W>,
    solution: &SolverSolution,
    catalog: &Catalog,
    metrics: Option<TelemetryMetrics>,
) -> Result<(), String> {
    let items = get_solution_items(solution, catalog)?
        .map(|item| JsonItem {
            name: item.name.clone(),
            performance: item.performance,
            cost: item.cost,
            vram: item.vram,
        })
        .collect();

    let totals = solution.gene.totals(catalog);
    let solution = JsonSolution {
        items,
        totals: JsonTotals { performance: totals.performance, cost: totals.cost, vram: totals.vram },
        fitness: solution.fitness,
        metrics: metrics.map(get_metrics),
    };

    serde_json::to_writer_pretty(writer, &solution).map_err(|err| err.to_string())
}

fn get_metrics(metrics: TelemetryMetrics) -> JsonMetrics {
    JsonMetrics {
        duration: metrics.duration,
        generations: metrics.generations,
        speed: metrics.speed,
        evolution: metrics
            .evolution
            .into_iter()
            .map(|generation| JsonGeneration {
                number: generation.number,
                timestamp: generation.timestamp,
                is_improvement: generation.is_improvement,
                population: JsonPopulation {
                    individuals: generation
                        .population
                        .individuals
                        .into_iter()
                        .map(|individual| JsonIndividual {
                            difference: individual.difference,
                            fitness: individual.fitness,
                        })
                        .collect(),
                },
            })
            .collect(),
    }
}

fn get_solution_items<'a>(
    solution: &'a SolverSolution,
    catalog: &'a Catalog,
) -> Result<impl Iterator<Item = &'a CatalogItem>, String> {
    solution
        .gene
        .alleles()
        .iter()
        .map(|&allele| catalog.get(allele).ok_or_else(|| format!("unknown catalog item index: {allele}")))
        .collect::<Result<Vec<_>, _>>()
        .map(|items| items.into_iter())
}
