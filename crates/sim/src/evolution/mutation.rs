//! Mutation of continuous allelic values.
//!
//! Alleles are real numbers. A mutation adds a normally distributed step to
//! one transmitted allele copy; whole genotypes are never mutated at once.
//! Genic loci and maternal-effect loci each carry their own
//! [`MutationModel`].

use crate::base::RandomSource;
use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};

/// Per-allele mutation probability and Gaussian step size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutationModel {
    /// Probability that a transmitted allele mutates.
    pub rate: f64,
    /// Standard deviation of the mutational step.
    pub step_sd: f64,
}

impl MutationModel {
    /// Create a new mutation model.
    ///
    /// # Errors
    /// Returns an error if `rate` is outside `[0, 1]` or `step_sd` is
    /// negative or not finite.
    pub fn new(rate: f64, step_sd: f64) -> Result<Self, ConfigError> {
        let model = Self { rate, step_sd };
        model.validate("mutation")?;
        Ok(model)
    }

    /// A model that never mutates.
    pub fn none() -> Self {
        Self {
            rate: 0.0,
            step_sd: 0.0,
        }
    }

    pub(crate) fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.rate) {
            return Err(ConfigError::InvalidProbability {
                name,
                value: self.rate,
            });
        }
        if !self.step_sd.is_finite() || self.step_sd < 0.0 {
            return Err(ConfigError::Negative {
                name,
                value: self.step_sd,
            });
        }
        Ok(())
    }

    /// Return `value`, perturbed by a Gaussian step with probability `rate`.
    ///
    /// One uniform draw is always consumed; the Gaussian draw only happens
    /// when the allele actually mutates.
    #[inline]
    pub fn mutate<R: RandomSource + ?Sized>(&self, value: f64, rng: &mut R) -> f64 {
        if rng.uniform_real() < self.rate {
            value + rng.gaussian(self.step_sd)
        } else {
            value
        }
    }
}

impl Default for MutationModel {
    fn default() -> Self {
        Self::none()
    }
}
