//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and validation.

use crate::errors::ConfigError;
use crate::evolution::MutationModel;
use crate::genome::MaternalMatrix;
use crate::simulation::{
    Configuration, EnvironmentConfig, ExecutionConfig, GeneticParameters, OptimumParameters,
    Simulation, DEFAULT_RECORD_EVERY,
};
use crate::TRAITS;

/// Builder for constructing [`Simulation`] instances with a fluent API.
///
/// Population size and generation count are required; everything else
/// falls back to the defaults of [`Configuration`]. Unless
/// [`SimulationBuilder::perturbation`] is called, the post-switch trajectory
/// equals the baseline one.
///
/// # Examples
///
/// ```
/// use maternevo_sim::simulation::SimulationBuilder;
///
/// let sim = SimulationBuilder::new()
///     .population_size(100)
///     .generations(50)
///     .selection_strength(0.8)
///     .genic_mutation(0.01, 0.02)
///     .initial_maternal([[0.2, 0.0], [0.0, 0.2]])
///     .perturbation([1.0, -1.0], [0.3, 0.5], 0.0)
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(sim.population().size(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    population_size: Option<usize>,
    generations: Option<usize>,

    record_every: usize,
    seed: Option<u64>,
    genetics: GeneticParameters,
    selection_strength: f64,
    baseline: OptimumParameters,
    perturbed: Option<OptimumParameters>,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        let environment = EnvironmentConfig::default();
        Self {
            population_size: None,
            generations: None,
            record_every: DEFAULT_RECORD_EVERY,
            seed: None,
            genetics: GeneticParameters::default(),
            selection_strength: environment.selection_strength,
            baseline: environment.baseline,
            perturbed: None,
        }
    }

    /// Set the population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the index of the last generation (required).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Write statistics every `interval` generations (default: 100).
    pub fn record_every(mut self, interval: usize) -> Self {
        self.record_every = interval;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Width of the Gaussian fitness surface.
    pub fn selection_strength(mut self, c: f64) -> Self {
        self.selection_strength = c;
        self
    }

    pub fn genic_mutation(mut self, rate: f64, step_sd: f64) -> Self {
        self.genetics.genic = MutationModel { rate, step_sd };
        self
    }

    pub fn maternal_mutation(mut self, rate: f64, step_sd: f64) -> Self {
        self.genetics.maternal = MutationModel { rate, step_sd };
        self
    }

    /// Variance of the developmental noise.
    pub fn noise_variance(mut self, variance: f64) -> Self {
        self.genetics.noise_variance = variance;
        self
    }

    /// Maternal-effect matrix of the founders.
    pub fn initial_maternal(mut self, matrix: MaternalMatrix) -> Self {
        self.genetics.initial_maternal = matrix;
        self
    }

    /// Restrict maternal effects to the diagonal.
    pub fn diagonal_only(mut self, diagonal_only: bool) -> Self {
        self.genetics.diagonal_only = diagonal_only;
        self
    }

    /// Pre-switch intercepts of the optimum.
    pub fn intercepts(mut self, intercepts: [f64; TRAITS]) -> Self {
        self.baseline.intercepts = intercepts;
        self
    }

    /// Pre-switch fluctuation rates.
    pub fn rates(mut self, rates: [f64; TRAITS]) -> Self {
        self.baseline.rates = rates;
        self
    }

    /// Pre-switch phase of trait 1.
    pub fn phase(mut self, phase: f64) -> Self {
        self.baseline.phase = phase;
        self
    }

    /// Trajectory adopted at the regime switch.
    pub fn perturbation(mut self, intercepts: [f64; TRAITS], rates: [f64; TRAITS], phase: f64) -> Self {
        self.perturbed = Some(OptimumParameters::new(intercepts, rates, phase));
        self
    }

    /// Assemble and validate the configuration without creating a simulation.
    pub fn build_config(&self) -> Result<Configuration, ConfigError> {
        let population_size = self
            .population_size
            .ok_or(ConfigError::MissingRequired("population_size"))?;
        let generations = self
            .generations
            .ok_or(ConfigError::MissingRequired("generations"))?;

        let mut execution = ExecutionConfig::new(population_size, generations, self.seed);
        execution.record_every = self.record_every;

        let config = Configuration {
            execution,
            genetics: self.genetics.clone(),
            environment: EnvironmentConfig {
                selection_strength: self.selection_strength,
                baseline: self.baseline,
                perturbed: self.perturbed.unwrap_or(self.baseline),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Build the simulation.
    pub fn build(self) -> Result<Simulation, ConfigError> {
        Simulation::new(self.build_config()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_basic() {
        let sim = SimulationBuilder::new()
            .population_size(10)
            .generations(5)
            .seed(1)
            .build()
            .unwrap();
        assert_eq!(sim.population().size(), 10);
        assert_eq!(sim.config().execution.total_generations, 5);
        assert_eq!(sim.seed(), 1);
    }

    #[test]
    fn test_builder_missing_required() {
        let err = SimulationBuilder::new().generations(5).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingRequired("population_size"));

        let err = SimulationBuilder::new().population_size(5).build().unwrap_err();
        assert_eq!(err, ConfigError::MissingRequired("generations"));
    }

    #[test]
    fn test_builder_invalid_values() {
        let err = SimulationBuilder::new()
            .population_size(5)
            .generations(5)
            .genic_mutation(1.5, 0.1)
            .build_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProbability { .. }));

        let err = SimulationBuilder::new()
            .population_size(0)
            .generations(5)
            .build_config()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyPopulation);
    }

    #[test]
    fn test_perturbation_defaults_to_baseline() {
        let config = SimulationBuilder::new()
            .population_size(5)
            .generations(5)
            .rates([0.2, 0.4])
            .phase(1.0)
            .build_config()
            .unwrap();
        assert_eq!(config.environment.perturbed, config.environment.baseline);
        assert_eq!(config.environment.baseline.rates, [0.2, 0.4]);

        let config = SimulationBuilder::new()
            .population_size(5)
            .generations(5)
            .perturbation([1.0, 2.0], [0.1, 0.2], 0.5)
            .build_config()
            .unwrap();
        assert_eq!(
            config.environment.perturbed,
            OptimumParameters::new([1.0, 2.0], [0.1, 0.2], 0.5)
        );
    }

    #[test]
    fn test_builder_full_configuration() {
        let config = SimulationBuilder::new()
            .population_size(8)
            .generations(20)
            .record_every(4)
            .selection_strength(0.9)
            .genic_mutation(0.02, 0.03)
            .maternal_mutation(0.0, 0.05)
            .noise_variance(0.25)
            .initial_maternal([[0.1, 0.2], [0.3, 0.4]])
            .diagonal_only(true)
            .intercepts([0.5, -0.5])
            .build_config()
            .unwrap();

        assert_eq!(config.execution.record_every, 4);
        assert_eq!(config.environment.selection_strength, 0.9);
        assert_eq!(config.genetics.genic, MutationModel { rate: 0.02, step_sd: 0.03 });
        assert_eq!(config.genetics.maternal.rate, 0.0);
        assert_eq!(config.genetics.noise_sd(), 0.5);
        assert!(config.genetics.diagonal_only);
        assert_eq!(config.environment.baseline.intercepts, [0.5, -0.5]);
    }
}
