//! Simulation engine.
//!
//! This module provides the generational loop: selection under the current
//! optimum, reproduction among survivors, resampling to a fixed size, and
//! periodic statistics output.

use crate::analysis::GenerationSummary;
use crate::base::{clock_seed, RandomSource, SimRng};
use crate::errors::{ConfigError, SimulationError};
use crate::evolution::{
    reproduce, select, OffspringFactory, ReproductionOutcome, SelectionSummary,
};
use crate::genome::Individual;
use crate::simulation::{Configuration, Environment, Population};
use crate::storage::StatsSink;
use tracing::{debug, info, warn};

/// Result of a single generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Survivors bred a full new population.
    Reproduced { generation: usize },
    /// Too few survivors to reproduce; the population is unchanged.
    Extinct { generation: usize },
}

/// Result of a complete run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All configured generations ran; `generations` is how many.
    Completed { generations: usize },
    /// The run stopped at `generation` for lack of survivors.
    Extinct { generation: usize },
}

/// Main simulation engine.
#[derive(Debug)]
pub struct Simulation<R: RandomSource = SimRng> {
    /// Population alive at the start of the next generation
    population: Population,
    /// Survivors of the last selection
    survivors: Vec<Individual>,
    /// Offspring pool of the last reproduction
    pool: Vec<Individual>,
    /// Scratch buffer for the next cohort
    next: Vec<Individual>,
    environment: Environment,
    factory: OffspringFactory,
    config: Configuration,
    /// Number of generations that have reproduced
    generation: usize,
    /// Index of the last generation stepped
    last_step: Option<usize>,
    selection: SelectionSummary,
    extinct: bool,
    seed: u64,
    rng: R,
}

impl Simulation<SimRng> {
    /// Create a simulation seeded from the configuration, or from the clock
    /// if no seed is given.
    pub fn new(config: Configuration) -> Result<Self, ConfigError> {
        let seed = config.execution.seed.unwrap_or_else(clock_seed);
        Self::with_rng(config, SimRng::new(seed), seed)
    }
}

impl<R: RandomSource> Simulation<R> {
    /// Create a simulation drawing from `rng`.
    ///
    /// `seed` is only recorded in the parameter block.
    pub fn with_rng(config: Configuration, rng: R, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let population = Population::founders(
            config.execution.population_size,
            &config.genetics.founder_matrix(),
        );
        let environment = Environment::new(
            &config.environment,
            config.execution.switch_generation(),
        );
        let factory = config.genetics.offspring_factory();

        Ok(Self {
            population,
            survivors: Vec::new(),
            pool: Vec::new(),
            next: Vec::new(),
            environment,
            factory,
            config,
            generation: 0,
            last_step: None,
            selection: SelectionSummary::default(),
            extinct: false,
            seed,
            rng,
        })
    }

    /// Run one generation: selection, then reproduction.
    ///
    /// On extinction the population is left as it was before selection and
    /// further calls do nothing.
    pub fn step(&mut self) -> StepOutcome {
        if self.extinct {
            return StepOutcome::Extinct {
                generation: self.last_step.unwrap_or(self.generation),
            };
        }

        let generation = self.generation;
        let optimum = self.environment.advance(generation);
        self.last_step = Some(generation);

        self.selection = select(
            self.population.individuals(),
            self.environment.surface(),
            &optimum,
            &mut self.survivors,
            &mut self.rng,
        );

        let outcome = reproduce(
            &self.survivors,
            &self.factory,
            self.config.execution.population_size,
            &mut self.pool,
            &mut self.next,
            &mut self.rng,
        );

        match outcome {
            ReproductionOutcome::Refilled { .. } => {
                self.population.swap_individuals(&mut self.next);
                self.generation += 1;
                StepOutcome::Reproduced { generation }
            }
            ReproductionOutcome::Extinct { .. } => {
                self.extinct = true;
                StepOutcome::Extinct { generation }
            }
        }
    }

    /// Statistics of the current population and the last survivors.
    ///
    /// After a successful step the population is the freshly bred one;
    /// after extinction it is the one that failed to reproduce.
    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary::compute(
            self.last_step.unwrap_or(0),
            self.environment.optimum(),
            &self.selection,
            self.population.individuals(),
            &self.survivors,
        )
    }

    /// Run all remaining generations, writing statistics to `sink`.
    pub fn run<S: StatsSink>(&mut self, sink: S) -> Result<RunOutcome, SimulationError> {
        self.run_with_callback(sink, |_| {})
    }

    /// Run all remaining generations, calling `on_generation` after each one
    /// that reproduced.
    pub fn run_with_callback<S, F>(
        &mut self,
        mut sink: S,
        mut on_generation: F,
    ) -> Result<RunOutcome, SimulationError>
    where
        S: StatsSink,
        F: FnMut(usize),
    {
        let total = self.config.execution.total_generations;
        let record_every = self.config.execution.record_every;

        info!(
            seed = self.seed,
            population_size = self.config.execution.population_size,
            generations = total,
            "Starting simulation"
        );
        sink.write_header()?;

        while self.generation <= total {
            match self.step() {
                StepOutcome::Reproduced { generation } => {
                    if generation.is_multiple_of(record_every) {
                        let summary = self.summary();
                        debug!(
                            generation,
                            survivors = summary.survivors,
                            mean_survival = summary.mean_survival,
                            "Recording generation"
                        );
                        sink.record(&summary)?;
                    }
                    on_generation(generation);
                }
                StepOutcome::Extinct { generation } => {
                    warn!(
                        generation,
                        survivors = self.selection.survivors,
                        "Population extinct"
                    );
                    sink.record(&self.summary())?;
                    sink.flush()?;
                    return Ok(RunOutcome::Extinct { generation });
                }
            }
        }

        sink.write_parameters(&self.config, self.seed)?;
        sink.flush()?;
        info!(generations = self.generation, "Simulation complete");

        Ok(RunOutcome::Completed {
            generations: self.generation,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Number of generations that have reproduced so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Seed recorded for this run.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Survivors of the last selection.
    pub fn survivors(&self) -> &[Individual] {
        &self.survivors
    }

    pub fn last_selection(&self) -> &SelectionSummary {
        &self.selection
    }

    /// True once every generation ran or the population went extinct.
    pub fn is_finished(&self) -> bool {
        self.extinct || self.generation > self.config.execution.total_generations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::ScriptedSource;
    use crate::simulation::SimulationBuilder;

    fn create_test_simulation() -> Simulation {
        SimulationBuilder::new()
            .population_size(30)
            .generations(10)
            .record_every(5)
            .selection_strength(5.0)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_step_keeps_population_size() {
        let mut sim = create_test_simulation();
        for expected in 0..5 {
            assert_eq!(sim.step(), StepOutcome::Reproduced { generation: expected });
            assert_eq!(sim.population().size(), 30);
        }
        assert_eq!(sim.generation(), 5);
        assert!(!sim.is_finished());
    }

    #[test]
    fn test_run_records_every_n() {
        let mut sim = create_test_simulation();
        let mut rows: Vec<GenerationSummary> = Vec::new();
        let outcome = sim.run(&mut rows).unwrap();

        assert_eq!(outcome, RunOutcome::Completed { generations: 11 });
        let generations: Vec<usize> = rows.iter().map(|r| r.generation).collect();
        assert_eq!(generations, vec![0, 5, 10]);
        assert!(sim.is_finished());
        assert!(sim.environment().is_switched());
    }

    #[test]
    fn test_record_interval_not_dividing_run() {
        let mut sim = SimulationBuilder::new()
            .population_size(30)
            .generations(10)
            .record_every(4)
            .selection_strength(5.0)
            .seed(8)
            .build()
            .unwrap();
        let mut rows: Vec<GenerationSummary> = Vec::new();
        sim.run(&mut rows).unwrap();

        let generations: Vec<usize> = rows.iter().map(|r| r.generation).collect();
        assert_eq!(generations, vec![0, 4, 8]);
    }

    #[test]
    fn test_callback_sees_every_generation() {
        let mut sim = create_test_simulation();
        let mut seen = Vec::new();
        sim.run_with_callback(Vec::<GenerationSummary>::new(), |g| seen.push(g))
            .unwrap();
        assert_eq!(seen, (0..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_extinction_stops_run() {
        let mut sim = SimulationBuilder::new()
            .population_size(20)
            .generations(10)
            .selection_strength(1e-6)
            .rates([1.0, 0.5])
            .phase(1.0)
            .seed(3)
            .build()
            .unwrap();

        let mut rows: Vec<GenerationSummary> = Vec::new();
        let outcome = sim.run(&mut rows).unwrap();

        assert_eq!(outcome, RunOutcome::Extinct { generation: 0 });
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].survivors, 0);
        assert!(rows[0].survivor_stats.phenotype[0].mean.is_nan());
        assert_eq!(sim.population().size(), 20);
        assert_eq!(sim.step(), StepOutcome::Extinct { generation: 0 });
        assert!(sim.is_finished());
    }

    #[test]
    fn test_scripted_rng_everyone_survives() {
        let config = SimulationBuilder::new()
            .population_size(3)
            .generations(2)
            .selection_strength(1.0)
            .build_config()
            .unwrap();
        let rng = ScriptedSource::new().with_reals([0.0]).with_ints([1]);
        let mut sim = Simulation::with_rng(config, rng, 9).unwrap();

        assert_eq!(sim.step(), StepOutcome::Reproduced { generation: 0 });
        assert_eq!(sim.survivors().len(), 3);
        assert_eq!(sim.last_selection().mean_survival, 1.0);
        assert_eq!(sim.population().size(), 3);
        assert_eq!(sim.seed(), 9);
    }

    #[test]
    fn test_same_seed_same_statistics() {
        let run = || {
            let mut sim = create_test_simulation();
            let mut rows: Vec<GenerationSummary> = Vec::new();
            sim.run(&mut rows).unwrap();
            rows.iter().map(|r| r.to_record()).collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = Configuration::default();
        config.environment.selection_strength = -1.0;
        assert!(Simulation::new(config).is_err());
    }
}
