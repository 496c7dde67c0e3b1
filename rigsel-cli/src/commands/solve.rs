use super::*;

#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use crate::extensions::import::read_csv_catalog;
use crate::extensions::solve::{write_json_solution, write_text_solution};
use rigsel_core::prelude::*;
use std::io::BufReader;
use std::sync::Arc;

const CATALOG_ARG_NAME: &str = "CATALOG";
const FORMAT_ARG_NAME: &str = "format";
const POPULATION_SIZE_ARG_NAME: &str = "population-size";
const GENE_SIZE_ARG_NAME: &str = "gene-size";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const MAX_COST_ARG_NAME: &str = "max-cost";
const MIN_VRAM_ARG_NAME: &str = "min-vram";
const CROSSOVER_RATE_ARG_NAME: &str = "crossover-rate";
const MUTATION_RATE_ARG_NAME: &str = "mutation-rate";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";
const RANDOM_SEED_ARG_NAME: &str = "seed";

/// Gets the solve subcommand definition.
pub fn get_solve_command() -> Command {
    Command::new("solve")
        .about("Solves a GPU rig selection problem")
        .arg(Arg::new(CATALOG_ARG_NAME).help("Sets the catalog csv file to use").required(true).index(1))
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies the result output format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new(POPULATION_SIZE_ARG_NAME)
                .help("Specifies amount of genes in the population")
                .short('p')
                .long(POPULATION_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENE_SIZE_ARG_NAME)
                .help("Specifies amount of items picked into a single build")
                .short('g')
                .long(GENE_SIZE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_COST_ARG_NAME)
                .help("Specifies a cost budget for the build")
                .short('c')
                .long(MAX_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MIN_VRAM_ARG_NAME)
                .help("Specifies a VRAM floor for the build, in gigabytes")
                .short('m')
                .long(MIN_VRAM_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(CROSSOVER_RATE_ARG_NAME)
                .help("Specifies a probability of the crossover")
                .long(CROSSOVER_RATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MUTATION_RATE_ARG_NAME)
                .help("Specifies a probability of the mutation")
                .long(MUTATION_RATE_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether default logging is enabled")
                .long(LOG_ARG_NAME)
                .required(false)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
}

/// Runs the solver command.
pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    // required
    let catalog_path = matches.get_one::<String>(CATALOG_ARG_NAME).ok_or("cannot get catalog path")?;
    let catalog_file = open_file(catalog_path, "catalog");

    // optional
    let population_size = parse_int_value::<usize>(matches, POPULATION_SIZE_ARG_NAME, "population size")?;
    let gene_size = parse_int_value::<usize>(matches, GENE_SIZE_ARG_NAME, "gene size")?;
    let generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")?;
    let max_cost = parse_int_value::<u64>(matches, MAX_COST_ARG_NAME, "max cost")?;
    let min_vram = parse_int_value::<u64>(matches, MIN_VRAM_ARG_NAME, "min vram")?;
    let crossover_rate = parse_float_value::<Float>(matches, CROSSOVER_RATE_ARG_NAME, "crossover rate")?;
    let mutation_rate = parse_float_value::<Float>(matches, MUTATION_RATE_ARG_NAME, "mutation rate")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;

    let result_format = matches.get_one::<String>(FORMAT_ARG_NAME).map(|arg| arg.as_str()).unwrap_or("text");
    let telemetry_mode = get_telemetry_mode(matches.get_flag(LOG_ARG_NAME), result_format);

    let random: Arc<dyn Random + Send + Sync> = match seed {
        Some(seed) => Arc::new(DefaultRandom::new_with_seed(seed)),
        None => Arc::new(DefaultRandom::default()),
    };
    let environment = Arc::new(Environment::new(random, Arc::new(|msg: &str| println!("{msg}"))));

    let catalog = read_csv_catalog(BufReader::new(catalog_file))
        .map_err(|err| format!("cannot read catalog from '{catalog_path}': '{err}'"))?;

    let mut builder = EvolutionConfigBuilder::default()
        .with_catalog(catalog.clone())
        .with_telemetry_mode(telemetry_mode)
        .with_environment(environment);

    if let Some(population_size) = population_size {
        builder = builder.with_population_size(population_size);
    }
    if let Some(gene_size) = gene_size {
        builder = builder.with_gene_size(gene_size);
    }
    if let Some(generations) = generations {
        builder = builder.with_generations(generations);
    }
    if let Some(max_cost) = max_cost {
        builder = builder.with_max_cost(max_cost);
    }
    if let Some(min_vram) = min_vram {
        builder = builder.with_min_vram(min_vram);
    }
    if let Some(crossover_rate) = crossover_rate {
        builder = builder.with_crossover_rate(crossover_rate);
    }
    if let Some(mutation_rate) = mutation_rate {
        builder = builder.with_mutation_rate(mutation_rate);
    }

    let config = builder.build().map_err(|err| format!("cannot build evolution config: '{err}'"))?;

    let (solution, metrics) = EvolutionSimulator::new(config)
        .and_then(|simulator| simulator.run())
        .map_err(|err| format!("cannot find solution: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_buffer = out_writer_func(out_result);

    match result_format {
        "text" => write_text_solution(out_buffer, &solution, &catalog),
        "json" => write_json_solution(out_buffer, &solution, &catalog, metrics),
        _ => Err(format!("unknown output format: '{result_format}'")),
    }
    .map_err(|err| format!("cannot write solution: '{err}'"))
}

fn get_telemetry_mode(is_log_requested: bool, result_format: &str) -> TelemetryMode {
    let logger: InfoLogger = Arc::new(|msg: &str| println!("{msg}"));

    match (is_log_requested, result_format) {
        (true, "json") => TelemetryMode::All { logger, log_best: 1, log_population: 10, track_population: 100 },
        (true, _) => TelemetryMode::OnlyLogging { logger, log_best: 1, log_population: 10 },
        (false, "json") => TelemetryMode::OnlyMetrics { track_population: 100 },
        _ => TelemetryMode::None,
    }
}
