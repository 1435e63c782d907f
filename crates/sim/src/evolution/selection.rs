//! Viability selection under a Gaussian fitness surface.
//!
//! The probability that an individual survives to reproduce is
//!
//! ```text
//! p = Π_j exp(-(z_j - θ_j)² / (2c²))
//! ```
//!
//! for phenotype `z`, current optimum `θ` and selection width `c`. Smaller
//! `c` means stronger selection. The surface is axis-independent: the two
//! traits are selected separately and the probabilities multiply.
//!
//! Survival is decided by one independent Bernoulli trial per individual, so
//! the number of survivors varies from generation to generation.

use crate::base::RandomSource;
use crate::genome::Individual;
use crate::TRAITS;
use serde::{Deserialize, Serialize};

/// Gaussian fitness surface with width `strength`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianSurvival {
    /// Width `c` of the fitness surface.
    pub strength: f64,
}

impl GaussianSurvival {
    pub fn new(strength: f64) -> Self {
        Self { strength }
    }

    /// Survival probability of `phenotype` when the optimum is `optimum`.
    #[inline]
    pub fn survival_probability(&self, phenotype: &[f64; TRAITS], optimum: &[f64; TRAITS]) -> f64 {
        let denom = 2.0 * self.strength * self.strength;
        phenotype
            .iter()
            .zip(optimum)
            .map(|(z, theta)| (-(z - theta).powi(2) / denom).exp())
            .product()
    }
}

/// Outcome of one round of selection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SelectionSummary {
    /// Number of survivors.
    pub survivors: usize,
    /// Mean survival probability over the whole population.
    pub mean_survival: f64,
}

/// Run one survival trial per individual.
///
/// Survivors are copied into `survivors` (cleared first) in population
/// order. For every individual, in order, the survival probability is
/// computed and a single uniform draw decides its fate.
pub fn select<R: RandomSource + ?Sized>(
    population: &[Individual],
    surface: &GaussianSurvival,
    optimum: &[f64; TRAITS],
    survivors: &mut Vec<Individual>,
    rng: &mut R,
) -> SelectionSummary {
    survivors.clear();
    let mut total = 0.0;

    for individual in population {
        let p = surface.survival_probability(individual.phenotype(), optimum);
        total += p;

        if rng.uniform_real() < p {
            survivors.push(*individual);
        }
    }

    let mean_survival = if population.is_empty() {
        0.0
    } else {
        total / population.len() as f64
    };

    SelectionSummary {
        survivors: survivors.len(),
        mean_survival,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{ScriptedSource, SimRng};

    fn with_phenotype(z: [f64; 2]) -> Individual {
        Individual::new([[0.0; 2]; 2], [[[0.0; 2]; 2]; 2], z)
    }

    #[test]
    fn test_survival_probability_at_optimum_is_one() {
        let surface = GaussianSurvival::new(0.5);
        assert_eq!(surface.survival_probability(&[1.0, -2.0], &[1.0, -2.0]), 1.0);
    }

    #[test]
    fn test_survival_probability_formula() {
        let surface = GaussianSurvival::new(2.0);
        let p = surface.survival_probability(&[1.0, 2.0], &[0.0, 0.0]);
        let expected = (-1.0_f64 / 8.0).exp() * (-4.0_f64 / 8.0).exp();
        assert!((p - expected).abs() < 1e-12);
    }

    #[test]
    fn test_survival_probability_vanishes_far_from_optimum() {
        let surface = GaussianSurvival::new(1e-6);
        assert_eq!(surface.survival_probability(&[0.0, 0.0], &[0.8, 0.0]), 0.0);
    }

    #[test]
    fn test_select_keeps_population_order() {
        let population = vec![
            with_phenotype([0.0, 0.0]),
            with_phenotype([1.0, 0.0]),
            with_phenotype([2.0, 0.0]),
        ];
        let surface = GaussianSurvival::new(1.0);
        // First and third pass, second fails
        let mut src = ScriptedSource::new().with_reals([0.0, 0.99, 0.0]);
        let mut survivors = Vec::new();

        let summary = select(&population, &surface, &[0.0, 0.0], &mut survivors, &mut src);

        assert_eq!(summary.survivors, 2);
        assert_eq!(survivors[0].phenotype()[0], 0.0);
        assert_eq!(survivors[1].phenotype()[0], 2.0);
        let expected_mean = (1.0 + (-0.5_f64).exp() + (-2.0_f64).exp()) / 3.0;
        assert!((summary.mean_survival - expected_mean).abs() < 1e-12);
    }

    #[test]
    fn test_select_one_draw_per_individual() {
        let population = vec![with_phenotype([0.0, 0.0]); 25];
        let mut src = ScriptedSource::new().with_reals([0.5]);
        let mut survivors = Vec::new();

        select(&population, &GaussianSurvival::new(1.0), &[0.0, 0.0], &mut survivors, &mut src);

        assert_eq!(src.draws(), (25, 0, 0));
        assert_eq!(survivors.len(), 25);
    }

    #[test]
    fn test_select_clears_previous_survivors() {
        let population = vec![with_phenotype([5.0, 5.0]); 4];
        let mut survivors = vec![with_phenotype([0.0, 0.0]); 10];
        let mut rng = SimRng::new(3);

        let summary = select(
            &population,
            &GaussianSurvival::new(1e-3),
            &[0.0, 0.0],
            &mut survivors,
            &mut rng,
        );

        assert_eq!(summary.survivors, 0);
        assert!(survivors.is_empty());
        assert_eq!(summary.mean_survival, 0.0);
    }

    #[test]
    fn test_select_empty_population() {
        let mut survivors = Vec::new();
        let summary = select(
            &[],
            &GaussianSurvival::new(1.0),
            &[0.0, 0.0],
            &mut survivors,
            &mut SimRng::new(1),
        );
        assert_eq!(summary, SelectionSummary::default());
    }
}
