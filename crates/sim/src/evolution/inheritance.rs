//! Offspring construction.
//!
//! A child receives one allele from each parent at every locus, each
//! transmitted copy mutated independently. Its phenotype for trait `i` is
//!
//! ```text
//! z_i = e_i + (g_i0 + g_i1) / 2 + Σ_j (m_ij0 + m_ij1) / 2 · z_mother_j
//! ```
//!
//! where `e_i` is developmental noise. In diagonal-only mode the
//! off-diagonal coefficients are erased in the child (both copies set to
//! zero) instead of being inherited, so they can never reappear.

use crate::base::RandomSource;
use crate::evolution::MutationModel;
use crate::genome::Individual;
use crate::TRAITS;

/// Builds offspring from a mother and a father.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffspringFactory {
    genic: MutationModel,
    maternal: MutationModel,
    noise_sd: f64,
    diagonal_only: bool,
}

impl OffspringFactory {
    /// Create a factory.
    ///
    /// `noise_sd` is the standard deviation of developmental noise, not its
    /// variance.
    pub fn new(
        genic: MutationModel,
        maternal: MutationModel,
        noise_sd: f64,
        diagonal_only: bool,
    ) -> Self {
        Self {
            genic,
            maternal,
            noise_sd,
            diagonal_only,
        }
    }

    /// Whether maternal coefficient `[i][j]` is inherited at all.
    #[inline]
    fn entry_active(&self, i: usize, j: usize) -> bool {
        !self.diagonal_only || i == j
    }

    /// Produce one offspring.
    ///
    /// Draw order: genic alleles trait by trait (mother's copy, then the
    /// father's, each followed by its mutation trial), then the noise term of
    /// each trait, then the maternal coefficients in row-major order.
    ///
    /// # Panics
    /// Panics if the offspring ends up with a non-finite value, which can
    /// only happen when a parent already carried one.
    pub fn create<R: RandomSource + ?Sized>(
        &self,
        mother: &Individual,
        father: &Individual,
        rng: &mut R,
    ) -> Individual {
        let mut genotype = [[0.0; 2]; TRAITS];
        for (t, locus) in genotype.iter_mut().enumerate() {
            let from_mother = mother.alleles(t)[rng.uniform_int(2)];
            locus[0] = self.genic.mutate(from_mother, rng);
            let from_father = father.alleles(t)[rng.uniform_int(2)];
            locus[1] = self.genic.mutate(from_father, rng);
        }

        let mut phenotype = [0.0; TRAITS];
        for z in phenotype.iter_mut() {
            *z = rng.gaussian(self.noise_sd);
        }

        let mut maternal = [[[0.0; 2]; TRAITS]; TRAITS];
        for i in 0..TRAITS {
            phenotype[i] += 0.5 * (genotype[i][0] + genotype[i][1]);

            for j in 0..TRAITS {
                if !self.entry_active(i, j) {
                    maternal[i][j] = [0.0, 0.0];
                    continue;
                }

                let from_mother = mother.maternal_alleles(i, j)[rng.uniform_int(2)];
                let m0 = self.maternal.mutate(from_mother, rng);
                let from_father = father.maternal_alleles(i, j)[rng.uniform_int(2)];
                let m1 = self.maternal.mutate(from_father, rng);

                maternal[i][j] = [m0, m1];
                phenotype[i] += 0.5 * (m0 + m1) * mother.phenotype()[j];
            }
        }

        let offspring = Individual::new(genotype, maternal, phenotype);
        if let Err(err) = offspring.validate() {
            panic!("offspring construction produced an invalid individual: {err}");
        }
        offspring
    }
}
