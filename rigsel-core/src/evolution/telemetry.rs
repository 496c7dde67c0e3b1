//! A module which provides the logic to collect metrics about algorithm execution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::evolution::EvaluatedGene;
use crate::utils::{Float, InfoLogger, Timer, compare_floats};
use std::cmp::Ordering;

/// Encapsulates different measurements regarding algorithm evaluation.
pub struct TelemetryMetrics {
    /// Algorithm duration in seconds.
    pub duration: usize,
    /// Total amount of generations.
    pub generations: usize,
    /// Speed: generations per second.
    pub speed: Float,
    /// Evolution progress.
    pub evolution: Vec<TelemetryGeneration>,
}

/// Represents information about generation.
pub struct TelemetryGeneration {
    /// Generation sequence number.
    pub number: usize,
    /// Time since evolution started.
    pub timestamp: Float,
    /// True if this generation considered as improvement.
    pub is_improvement: bool,
    /// Population state.
    pub population: TelemetryPopulation,
}

/// Keeps essential information about particular gene in population.
pub struct TelemetryIndividual {
    /// Gene fitness difference from the best gene, in percent.
    pub difference: Float,
    /// Gene fitness value.
    pub fitness: Float,
}

/// Holds population state.
pub struct TelemetryPopulation {
    /// Population individuals.
    pub individuals: Vec<TelemetryIndividual>,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No telemetry at all.
    None,
    /// Only logging.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often population is logged.
        log_population: usize,
    },
    /// Only metrics collection.
    OnlyMetrics {
        /// Specifies how often population is tracked.
        track_population: usize,
    },
    /// Both logging and metrics collection.
    All {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_best: usize,
        /// Specifies how often population is logged.
        log_population: usize,
        /// Specifies how often population is tracked.
        track_population: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    metrics: TelemetryMetrics,
    time: Timer,
    mode: TelemetryMode,
    next_generation: Option<usize>,
    is_last_improved: bool,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self {
            time: Timer::start(),
            metrics: TelemetryMetrics { duration: 0, generations: 0, speed: 0.0, evolution: vec![] },
            mode,
            next_generation: None,
            is_last_improved: false,
        }
    }

    /// Reports generation statistics.
    pub fn on_generation(
        &mut self,
        best: &EvaluatedGene,
        population: &[EvaluatedGene],
        generation_time: Timer,
        is_improved: bool,
    ) {
        let generation = self.next_generation.unwrap_or(0);

        self.metrics.generations = generation;
        self.next_generation = Some(generation + 1);
        self.is_last_improved = is_improved;

        let (log_best, log_population, track_population) = match &self.mode {
            TelemetryMode::None => return,
            TelemetryMode::OnlyLogging { log_best, log_population, .. } => (Some(log_best), Some(log_population), None),
            TelemetryMode::OnlyMetrics { track_population, .. } => (None, None, Some(track_population)),
            TelemetryMode::All { log_best, log_population, track_population, .. } => {
                (Some(log_best), Some(log_population), Some(track_population))
            }
        };

        let should_log_best = generation % *log_best.unwrap_or(&usize::MAX) == 0;
        let should_log_population = generation % *log_population.unwrap_or(&usize::MAX) == 0;
        let should_track_population = generation % *track_population.unwrap_or(&usize::MAX) == 0;

        if should_log_best {
            self.log_individual(&self.get_individual_metrics(best, best), Some((generation, generation_time)));
        }

        self.on_population(best, population, should_log_population, should_track_population);
    }

    /// Reports population state.
    fn on_population(
        &mut self,
        best: &EvaluatedGene,
        population: &[EvaluatedGene],
        should_log_population: bool,
        should_track_population: bool,
    ) {
        if !should_log_population && !should_track_population {
            return;
        }

        let generation = self.metrics.generations;

        if should_log_population {
            self.log(
                format!(
                    "[{}s] population state (speed: {:.2} gen/sec):",
                    self.time.elapsed_secs(),
                    generation as Float / self.time.elapsed_secs_as_float(),
                )
                .as_str(),
            );
        }

        let individuals =
            population.iter().map(|individual| self.get_individual_metrics(best, individual)).collect::<Vec<_>>();

        if should_log_population {
            individuals.iter().for_each(|metrics| self.log_individual(metrics, None));
        }

        if should_track_population {
            self.metrics.evolution.push(TelemetryGeneration {
                number: generation,
                timestamp: self.time.elapsed_secs_as_float(),
                is_improvement: self.is_last_improved,
                population: TelemetryPopulation { individuals },
            });
        }
    }

    /// Reports final statistic.
    pub fn on_result(&mut self, best: &EvaluatedGene, population: &[EvaluatedGene]) {
        let generations = self.metrics.generations;

        let (should_log_population, should_track_population) = match &self.mode {
            TelemetryMode::OnlyLogging { .. } => (true, false),
            TelemetryMode::OnlyMetrics { track_population, .. } => (false, generations % track_population != 0),
            TelemetryMode::All { track_population, .. } => (true, generations % track_population != 0),
            _ => return,
        };

        self.on_population(best, population, should_log_population, should_track_population);

        let elapsed = self.time.elapsed_secs() as usize;
        let speed = generations as Float / self.time.elapsed_secs_as_float();

        self.log(format!("[{elapsed}s] total generations: {generations}, speed: {speed:.2} gen/sec").as_str());
        self.log(format!("\tbest fitness: {:.4}", best.fitness).as_str());

        self.metrics.duration = elapsed;
        self.metrics.speed = speed;
    }

    /// Gets metrics.
    pub fn take_metrics(self) -> Option<TelemetryMetrics> {
        match &self.mode {
            TelemetryMode::OnlyMetrics { .. } | TelemetryMode::All { .. } => Some(self.metrics),
            _ => None,
        }
    }

    /// Writes log message.
    pub fn log(&self, message: &str) {
        match &self.mode {
            TelemetryMode::OnlyLogging { logger, .. } => (logger)(message),
            TelemetryMode::All { logger, .. } => (logger)(message),
            _ => {}
        }
    }

    fn get_individual_metrics(&self, best: &EvaluatedGene, individual: &EvaluatedGene) -> TelemetryIndividual {
        let difference = if compare_floats(best.fitness, 0.) == Ordering::Equal {
            0.
        } else {
            (best.fitness - individual.fitness) / best.fitness.abs() * 100.
        };

        TelemetryIndividual { difference, fitness: individual.fitness }
    }

    fn log_individual(&self, metrics: &TelemetryIndividual, gen_info: Option<(usize, Timer)>) {
        let value = if let Some((r#gen, gen_time)) = gen_info {
            format!(
                "[{}s] generation {} took {}ms, fitness: {:.4}",
                self.time.elapsed_secs(),
                r#gen,
                gen_time.elapsed_millis(),
                metrics.fitness
            )
        } else {
            format!("\tfitness: {:.4}, difference: {:.3}%", metrics.fitness, metrics.difference)
        };

        self.log(value.as_str());
    }
}
