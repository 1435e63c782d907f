//! Population management.
//!
//! A [`Population`] is the living cohort of one generation. Its size is
//! fixed for the whole run and it is replaced wholesale every generation.

use crate::genome::{Individual, MaternalMatrix};

/// A fixed-size cohort of individuals.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Create a population from individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Create `size` identical founders carrying `initial` maternal effects.
    pub fn founders(size: usize, initial: &MaternalMatrix) -> Self {
        Self::new(vec![Individual::founder(initial); size])
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Exchange the population's storage with `buffer`.
    ///
    /// The old cohort ends up in `buffer`, so its allocation can be reused
    /// for the following generation.
    pub fn swap_individuals(&mut self, buffer: &mut Vec<Individual>) {
        std::mem::swap(&mut self.individuals, buffer);
    }
}
