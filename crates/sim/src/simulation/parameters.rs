//! Simulation parameters and configuration.
//!
//! All configuration types serialize with serde so a complete setup can be
//! stored as JSON and replayed. [`Configuration`] is the master struct; it can
//! also be built from the order-significant positional parameter list used
//! by the command line.

use crate::errors::ConfigError;
use crate::evolution::{MutationModel, OffspringFactory};
use crate::genome::MaternalMatrix;
use crate::TRAITS;
use serde::{Deserialize, Serialize};

/// Default population size.
pub const DEFAULT_POPULATION_SIZE: usize = 5000;
/// Default number of generations.
pub const DEFAULT_GENERATIONS: usize = 50_000;
/// Default statistics interval in generations.
pub const DEFAULT_RECORD_EVERY: usize = 100;
/// Number of positional parameters accepted by [`Configuration::from_positional`].
pub const POSITIONAL_COUNT: usize = 19;

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub execution: ExecutionConfig,
    pub genetics: GeneticParameters,
    pub environment: EnvironmentConfig,
}

/// Run length, population size, output cadence and seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of individuals alive at the start of every generation
    pub population_size: usize,
    /// Index of the last generation; generations `0..=total_generations` run
    pub total_generations: usize,
    /// Write statistics every N generations
    #[serde(default = "default_record_every")]
    pub record_every: usize,
    /// Optional RNG seed; a wall-clock seed is used when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_record_every() -> usize {
    DEFAULT_RECORD_EVERY
}

impl ExecutionConfig {
    pub fn new(population_size: usize, total_generations: usize, seed: Option<u64>) -> Self {
        Self {
            population_size,
            total_generations,
            record_every: DEFAULT_RECORD_EVERY,
            seed,
        }
    }

    /// Generation at which the environment switches regime.
    pub fn switch_generation(&self) -> usize {
        self.total_generations / 2
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POPULATION_SIZE, DEFAULT_GENERATIONS, None)
    }
}

/// Genetic architecture: mutation, developmental noise, maternal effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneticParameters {
    /// Mutation of the additive (genic) loci
    pub genic: MutationModel,
    /// Mutation of the maternal-effect loci
    pub maternal: MutationModel,
    /// Variance of developmental noise added to every phenotype
    pub noise_variance: f64,
    /// Maternal-effect matrix carried by every founder
    pub initial_maternal: MaternalMatrix,
    /// Restrict maternal effects to the matrix diagonal
    #[serde(default)]
    pub diagonal_only: bool,
}

impl GeneticParameters {
    /// Standard deviation of developmental noise.
    pub fn noise_sd(&self) -> f64 {
        self.noise_variance.sqrt()
    }

    /// The offspring factory implied by these parameters.
    pub fn offspring_factory(&self) -> OffspringFactory {
        OffspringFactory::new(self.genic, self.maternal, self.noise_sd(), self.diagonal_only)
    }

    /// Founder matrix as it will actually be carried.
    ///
    /// In diagonal-only mode the off-diagonal entries are zeroed so the
    /// closure holds from generation zero.
    pub fn founder_matrix(&self) -> MaternalMatrix {
        let mut m = self.initial_maternal;
        if self.diagonal_only {
            for (i, row) in m.iter_mut().enumerate() {
                for (j, entry) in row.iter_mut().enumerate() {
                    if i != j {
                        *entry = 0.0;
                    }
                }
            }
        }
        m
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.genic.validate("genic mutation")?;
        self.maternal.validate("maternal mutation")?;
        if !self.noise_variance.is_finite() || self.noise_variance < 0.0 {
            return Err(ConfigError::Negative {
                name: "noise variance",
                value: self.noise_variance,
            });
        }
        for &value in self.initial_maternal.iter().flatten() {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite {
                    name: "initial maternal matrix",
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for GeneticParameters {
    fn default() -> Self {
        Self {
            genic: MutationModel {
                rate: 0.01,
                step_sd: 0.02,
            },
            maternal: MutationModel {
                rate: 0.01,
                step_sd: 0.02,
            },
            noise_variance: 0.1,
            initial_maternal: [[0.0; TRAITS]; TRAITS],
            diagonal_only: false,
        }
    }
}

/// Parameters of the optimum trajectory.
///
/// ```text
/// θ1(t) = intercepts[0] + sin(rates[0] · (t + phase))
/// θ2(t) = intercepts[1] + sin(rates[1] · t)
/// ```
///
/// Only the first trait is phase shifted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimumParameters {
    #[serde(default)]
    pub intercepts: [f64; TRAITS],
    pub rates: [f64; TRAITS],
    #[serde(default)]
    pub phase: f64,
}

impl OptimumParameters {
    pub fn new(intercepts: [f64; TRAITS], rates: [f64; TRAITS], phase: f64) -> Self {
        Self {
            intercepts,
            rates,
            phase,
        }
    }

    /// Optimum for both traits at `generation`.
    #[inline]
    pub fn optimum(&self, generation: usize) -> [f64; TRAITS] {
        let t = generation as f64;
        [
            self.intercepts[0] + (self.rates[0] * (t + self.phase)).sin(),
            self.intercepts[1] + (self.rates[1] * t).sin(),
        ]
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let values = self
            .intercepts
            .iter()
            .chain(self.rates.iter())
            .chain(std::iter::once(&self.phase));
        for &value in values {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        Ok(())
    }
}

/// Selection surface and the optimum trajectory before and after the
/// regime switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Width `c` of the Gaussian fitness surface
    pub selection_strength: f64,
    /// Trajectory before the switch
    pub baseline: OptimumParameters,
    /// Trajectory from the switch generation onwards
    pub perturbed: OptimumParameters,
}

impl EnvironmentConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.selection_strength.is_finite() || self.selection_strength <= 0.0 {
            return Err(ConfigError::InvalidSelectionStrength(
                self.selection_strength,
            ));
        }
        self.baseline.validate("baseline optimum")?;
        self.perturbed.validate("perturbed optimum")
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        let baseline = OptimumParameters::new([0.0, 0.0], [0.0, 0.5], 0.0);
        Self {
            selection_strength: 0.7_f64.sqrt(),
            baseline,
            perturbed: baseline,
        }
    }
}

impl Configuration {
    /// Names of the positional parameters, in order.
    pub const POSITIONAL_NAMES: [&'static str; POSITIONAL_COUNT] = [
        "c", "mu_g", "sdmu_g", "mu_m", "sdmu_m", "phi", "m11", "m12", "m21", "m22", "var_p",
        "rate1", "rate2", "rate1ptb", "rate2ptb", "phiptb", "int1ptb", "int2ptb",
        "diagonal_only",
    ];

    /// Build a configuration from the positional parameter list.
    ///
    /// Order: selection strength; genic mutation rate and step; maternal
    /// mutation rate and step; trait-1 phase; `m11 m12 m21 m22`; noise
    /// variance; `rate1 rate2`; post-switch `rate1 rate2`; post-switch phase;
    /// post-switch intercepts; diagonal flag (any non-zero value is true).
    /// Pre-switch intercepts are zero.
    pub fn from_positional(values: &[f64], execution: ExecutionConfig) -> Result<Self, ConfigError> {
        let v: &[f64; POSITIONAL_COUNT] =
            values
                .try_into()
                .map_err(|_| ConfigError::PositionalCount {
                    expected: POSITIONAL_COUNT,
                    found: values.len(),
                })?;

        let config = Self {
            execution,
            genetics: GeneticParameters {
                genic: MutationModel {
                    rate: v[1],
                    step_sd: v[2],
                },
                maternal: MutationModel {
                    rate: v[3],
                    step_sd: v[4],
                },
                noise_variance: v[10],
                initial_maternal: [[v[6], v[7]], [v[8], v[9]]],
                diagonal_only: v[18] != 0.0,
            },
            environment: EnvironmentConfig {
                selection_strength: v[0],
                baseline: OptimumParameters::new([0.0, 0.0], [v[11], v[12]], v[5]),
                perturbed: OptimumParameters::new([v[16], v[17]], [v[13], v[14]], v[15]),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Inverse of [`Configuration::from_positional`].
    pub fn to_positional(&self) -> [f64; POSITIONAL_COUNT] {
        let g = &self.genetics;
        let e = &self.environment;
        let m = &g.initial_maternal;
        [
            e.selection_strength,
            g.genic.rate,
            g.genic.step_sd,
            g.maternal.rate,
            g.maternal.step_sd,
            e.baseline.phase,
            m[0][0],
            m[0][1],
            m[1][0],
            m[1][1],
            g.noise_variance,
            e.baseline.rates[0],
            e.baseline.rates[1],
            e.perturbed.rates[0],
            e.perturbed.rates[1],
            e.perturbed.phase,
            e.perturbed.intercepts[0],
            e.perturbed.intercepts[1],
            if g.diagonal_only { 1.0 } else { 0.0 },
        ]
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.execution.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.execution.record_every == 0 {
            return Err(ConfigError::InvalidRecordInterval);
        }
        self.genetics.validate()?;
        self.environment.validate()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            execution: ExecutionConfig::default(),
            genetics: GeneticParameters::default(),
            environment: EnvironmentConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positional() -> Vec<f64> {
        vec![
            0.8, 0.05, 0.4, 0.02, 0.3, 1.5, 0.1, 0.2, 0.3, 0.4, 0.25, 0.6, 0.7, 0.9, 1.1, 2.5,
            -1.0, 3.0, 1.0,
        ]
    }

    #[test]
    fn test_from_positional_maps_every_field() {
        let config =
            Configuration::from_positional(&positional(), ExecutionConfig::new(10, 20, Some(1)))
                .unwrap();

        assert_eq!(config.environment.selection_strength, 0.8);
        assert_eq!(config.genetics.genic, MutationModel { rate: 0.05, step_sd: 0.4 });
        assert_eq!(config.genetics.maternal, MutationModel { rate: 0.02, step_sd: 0.3 });
        assert_eq!(config.environment.baseline.phase, 1.5);
        assert_eq!(config.genetics.initial_maternal, [[0.1, 0.2], [0.3, 0.4]]);
        assert_eq!(config.genetics.noise_variance, 0.25);
        assert_eq!(config.genetics.noise_sd(), 0.5);
        assert_eq!(config.environment.baseline.rates, [0.6, 0.7]);
        assert_eq!(config.environment.baseline.intercepts, [0.0, 0.0]);
        assert_eq!(config.environment.perturbed.rates, [0.9, 1.1]);
        assert_eq!(config.environment.perturbed.phase, 2.5);
        assert_eq!(config.environment.perturbed.intercepts, [-1.0, 3.0]);
        assert!(config.genetics.diagonal_only);
    }

    #[test]
    fn test_positional_round_trip() {
        let values = positional();
        let config =
            Configuration::from_positional(&values, ExecutionConfig::default()).unwrap();
        assert_eq!(config.to_positional().to_vec(), values);
    }

    #[test]
    fn test_from_positional_wrong_count() {
        let err = Configuration::from_positional(&[1.0; 5], ExecutionConfig::default())
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::PositionalCount {
                expected: 19,
                found: 5
            }
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Configuration::default();
        config.environment.selection_strength = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSelectionStrength(_))
        ));

        let mut config = Configuration::default();
        config.execution.population_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::EmptyPopulation));

        let mut config = Configuration::default();
        config.execution.record_every = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRecordInterval));

        let mut config = Configuration::default();
        config.genetics.noise_variance = -0.1;
        assert!(config.validate().is_err());

        let mut config = Configuration::default();
        config.environment.perturbed.rates[1] = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_founder_matrix_respects_diagonal_only() {
        let mut genetics = GeneticParameters {
            initial_maternal: [[0.5, 0.1], [0.2, 0.6]],
            ..GeneticParameters::default()
        };
        assert_eq!(genetics.founder_matrix(), [[0.5, 0.1], [0.2, 0.6]]);
        genetics.diagonal_only = true;
        assert_eq!(genetics.founder_matrix(), [[0.5, 0.0], [0.0, 0.6]]);
    }

    #[test]
    fn test_optimum_formula() {
        let params = OptimumParameters::new([1.0, -1.0], [0.01, 0.5], 3.0);
        let [z1, z2] = params.optimum(7);
        assert!((z1 - (1.0 + (0.01_f64 * 10.0).sin())).abs() < 1e-12);
        assert!((z2 - (-1.0 + 3.5_f64.sin())).abs() < 1e-12);

        let zero = OptimumParameters::new([0.0, 0.0], [0.01, 0.0], 0.0);
        assert_eq!(zero.optimum(0), [0.0, 0.0]);
    }

    #[test]
    fn test_switch_generation_halves() {
        assert_eq!(ExecutionConfig::new(10, 50_000, None).switch_generation(), 25_000);
        assert_eq!(ExecutionConfig::new(10, 5, None).switch_generation(), 2);
    }

    #[test]
    fn test_configuration_json_round_trip() {
        let config = Configuration::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
