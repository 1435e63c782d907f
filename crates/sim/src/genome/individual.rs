use crate::errors::InvalidState;
use crate::TRAITS;

/// A 2×2 matrix of maternal-effect coefficients.
///
/// Entry `[i][j]` scales how strongly the mother's phenotype for trait `j`
/// shifts her offspring's phenotype for trait `i`.
pub type MaternalMatrix = [[f64; TRAITS]; TRAITS];

/// An individual organism.
///
/// Each trait has one diploid additive locus (`genotype[trait][allele]`), and
/// each entry of the maternal-effect matrix is itself a diploid locus
/// (`maternal[i][j][allele]`). The phenotype is realised once, when the
/// individual is created, and never recomputed.
///
/// Individuals are plain values: copying one into the survivor set or the
/// next generation is a bitwise copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Individual {
    genotype: [[f64; 2]; TRAITS],
    maternal: [[[f64; 2]; TRAITS]; TRAITS],
    phenotype: [f64; TRAITS],
}

impl Individual {
    /// Create an individual from explicit loci and phenotype.
    pub fn new(
        genotype: [[f64; 2]; TRAITS],
        maternal: [[[f64; 2]; TRAITS]; TRAITS],
        phenotype: [f64; TRAITS],
    ) -> Self {
        Self {
            genotype,
            maternal,
            phenotype,
        }
    }

    /// Create a founder.
    ///
    /// Founders have phenotype 0 on both traits, both genic alleles equal to
    /// that phenotype, and both allele copies of every maternal coefficient
    /// equal to the corresponding entry of `initial`.
    pub fn founder(initial: &MaternalMatrix) -> Self {
        let phenotype = [0.0; TRAITS];
        let mut genotype = [[0.0; 2]; TRAITS];
        let mut maternal = [[[0.0; 2]; TRAITS]; TRAITS];

        for i in 0..TRAITS {
            genotype[i] = [phenotype[i], phenotype[i]];
            for j in 0..TRAITS {
                maternal[i][j] = [initial[i][j], initial[i][j]];
            }
        }

        Self::new(genotype, maternal, phenotype)
    }

    /// Both genic alleles for `trait_idx`.
    #[inline]
    pub fn alleles(&self, trait_idx: usize) -> [f64; 2] {
        self.genotype[trait_idx]
    }

    /// Both allele copies of maternal coefficient `[i][j]`.
    #[inline]
    pub fn maternal_alleles(&self, i: usize, j: usize) -> [f64; 2] {
        self.maternal[i][j]
    }

    #[inline]
    pub fn phenotype(&self) -> &[f64; TRAITS] {
        &self.phenotype
    }

    /// Additive genetic value of a trait: the mean of its two alleles.
    #[inline]
    pub fn additive_value(&self, trait_idx: usize) -> f64 {
        let [a, b] = self.genotype[trait_idx];
        0.5 * (a + b)
    }

    /// Expressed maternal coefficient `[i][j]`: the mean of its two alleles.
    #[inline]
    pub fn maternal_value(&self, i: usize, j: usize) -> f64 {
        let [a, b] = self.maternal[i][j];
        0.5 * (a + b)
    }

    /// Check that no allele, coefficient, or phenotype is NaN or infinite.
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), InvalidState> {
        const GENOTYPE: [[&str; 2]; TRAITS] = [
            ["genotype[0][0]", "genotype[0][1]"],
            ["genotype[1][0]", "genotype[1][1]"],
        ];
        const MATERNAL: [[&str; TRAITS]; TRAITS] =
            [["maternal[0][0]", "maternal[0][1]"], ["maternal[1][0]", "maternal[1][1]"]];
        const PHENOTYPE: [&str; TRAITS] = ["phenotype[0]", "phenotype[1]"];

        let check = |field: &'static str, value: f64| {
            if value.is_finite() {
                Ok(())
            } else {
                Err(InvalidState { field, value })
            }
        };

        for i in 0..TRAITS {
            for (k, &allele) in self.genotype[i].iter().enumerate() {
                check(GENOTYPE[i][k], allele)?;
            }
            for j in 0..TRAITS {
                for &allele in &self.maternal[i][j] {
                    check(MATERNAL[i][j], allele)?;
                }
            }
            check(PHENOTYPE[i], self.phenotype[i])?;
        }
        Ok(())
    }
}
