//! The fluctuating environment.
//!
//! The selective optimum of each trait oscillates sinusoidally around an
//! intercept. At one fixed generation the environment switches regime once
//! and for all: intercepts, fluctuation rates and the trait-1 phase are
//! replaced by their post-switch values. There is no way back.

use crate::evolution::GaussianSurvival;
use crate::simulation::{EnvironmentConfig, OptimumParameters};
use crate::TRAITS;
use tracing::info;

/// Current state of the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    surface: GaussianSurvival,
    current: OptimumParameters,
    perturbed: OptimumParameters,
    switch_generation: usize,
    switched: bool,
    optimum: [f64; TRAITS],
}

impl Environment {
    /// Create an environment that switches regime at `switch_generation`.
    pub fn new(config: &EnvironmentConfig, switch_generation: usize) -> Self {
        Self {
            surface: GaussianSurvival::new(config.selection_strength),
            current: config.baseline,
            perturbed: config.perturbed,
            switch_generation,
            switched: false,
            optimum: config.baseline.optimum(0),
        }
    }

    /// Move the environment to `generation` and return the optimum there.
    ///
    /// Applies the regime switch when `generation` is the switch generation.
    pub fn advance(&mut self, generation: usize) -> [f64; TRAITS] {
        if generation == self.switch_generation {
            self.apply_regime_switch();
        }
        self.optimum = self.current.optimum(generation);
        self.optimum
    }

    /// Adopt the post-switch parameters.
    ///
    /// Returns `false` if the switch had already happened.
    pub fn apply_regime_switch(&mut self) -> bool {
        if self.switched {
            return false;
        }
        info!(
            generation = self.switch_generation,
            intercepts = ?self.perturbed.intercepts,
            rates = ?self.perturbed.rates,
            phase = self.perturbed.phase,
            "Environment regime switch"
        );
        self.current = self.perturbed;
        self.switched = true;
        true
    }

    /// Optimum computed by the last call to [`Environment::advance`].
    #[inline]
    pub fn optimum(&self) -> [f64; TRAITS] {
        self.optimum
    }

    #[inline]
    pub fn surface(&self) -> &GaussianSurvival {
        &self.surface
    }

    #[inline]
    pub fn is_switched(&self) -> bool {
        self.switched
    }

    #[inline]
    pub fn switch_generation(&self) -> usize {
        self.switch_generation
    }
}
