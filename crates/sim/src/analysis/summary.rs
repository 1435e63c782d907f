use crate::evolution::SelectionSummary;
use crate::genome::Individual;
use crate::TRAITS;

/// Running sums for a mean and a biased variance.
#[derive(Debug, Clone, Copy, Default)]
struct Accumulator {
    sum: f64,
    sum_sq: f64,
}

impl Accumulator {
    #[inline]
    fn push(&mut self, x: f64) {
        self.sum += x;
        self.sum_sq += x * x;
    }

    fn finish(&self, n: usize) -> Moments {
        let n = n as f64;
        let mean = self.sum / n;
        Moments {
            mean,
            variance: self.sum_sq / n - mean * mean,
        }
    }
}

/// Mean and biased variance of one quantity.
///
/// Both are NaN when computed over an empty sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    pub mean: f64,
    pub variance: f64,
}

impl Moments {
    /// Moments of an arbitrary sample.
    pub fn of(values: impl IntoIterator<Item = f64>) -> Self {
        let mut acc = Accumulator::default();
        let mut n = 0;
        for x in values {
            acc.push(x);
            n += 1;
        }
        acc.finish(n)
    }
}

/// Per-trait moments of one group of individuals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// Number of individuals summarised
    pub size: usize,
    /// Phenotype per trait
    pub phenotype: [Moments; TRAITS],
    /// Additive genetic value (mean of the two genic alleles) per trait
    pub additive: [Moments; TRAITS],
    /// Expressed maternal coefficient per matrix entry
    pub maternal: [[Moments; TRAITS]; TRAITS],
}

impl SampleStats {
    pub fn from_individuals(individuals: &[Individual]) -> Self {
        let mut phen = [Accumulator::default(); TRAITS];
        let mut add = [Accumulator::default(); TRAITS];
        let mut mat = [[Accumulator::default(); TRAITS]; TRAITS];

        for ind in individuals {
            for i in 0..TRAITS {
                phen[i].push(ind.phenotype()[i]);
                add[i].push(ind.additive_value(i));
                for j in 0..TRAITS {
                    mat[i][j].push(ind.maternal_value(i, j));
                }
            }
        }

        let n = individuals.len();
        Self {
            size: n,
            phenotype: phen.map(|a| a.finish(n)),
            additive: add.map(|a| a.finish(n)),
            maternal: mat.map(|row| row.map(|a| a.finish(n))),
        }
    }

    fn push_fields(&self, out: &mut Vec<f64>, trait_idx: usize) {
        let t = trait_idx;
        out.extend([
            self.phenotype[t].mean,
            self.phenotype[t].variance,
            self.additive[t].mean,
            self.additive[t].variance,
        ]);
        for m in &self.maternal[t] {
            out.extend([m.mean, m.variance]);
        }
    }
}

/// One row of output: everything recorded about a generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub generation: usize,
    /// Number of survivors of this generation's selection
    pub survivors: usize,
    /// Optimum used for this generation's selection
    pub optimum: [f64; TRAITS],
    /// Statistics of the whole population
    pub population: SampleStats,
    /// Statistics of the survivors
    pub survivor_stats: SampleStats,
    /// Covariance between the two phenotypes, population-wide
    pub phenotypic_covariance: f64,
    /// Covariance between the two additive genetic values, population-wide.
    ///
    /// A plain covariance `E[a1·a2] − E[a1]·E[a2]` of the allele means, with
    /// no rescaling of the cross moment.
    pub genetic_covariance: f64,
    /// Mean survival probability over the population that underwent selection
    pub mean_survival: f64,
}

impl GenerationSummary {
    /// Number of columns in a row: generation, survivor count, optimum, two
    /// blocks of per-trait statistics per trait, and the three trailing
    /// population-wide values.
    pub const COLUMNS: usize = 4 + 2 * TRAITS * (4 + 2 * TRAITS) + 3;

    /// Summarise a generation.
    pub fn compute(
        generation: usize,
        optimum: [f64; TRAITS],
        selection: &SelectionSummary,
        population: &[Individual],
        survivors: &[Individual],
    ) -> Self {
        let n = population.len() as f64;
        let (mut zz, mut gg) = (0.0, 0.0);
        for ind in population {
            zz += ind.phenotype()[0] * ind.phenotype()[1];
            gg += ind.additive_value(0) * ind.additive_value(1);
        }

        let pop = SampleStats::from_individuals(population);
        let surv = SampleStats::from_individuals(survivors);

        Self {
            generation,
            survivors: selection.survivors,
            optimum,
            phenotypic_covariance: zz / n - pop.phenotype[0].mean * pop.phenotype[1].mean,
            genetic_covariance: gg / n - pop.additive[0].mean * pop.additive[1].mean,
            population: pop,
            survivor_stats: surv,
            mean_survival: selection.mean_survival,
        }
    }

    /// Column names, matching [`GenerationSummary::to_record`].
    ///
    /// Names are all lower case: `nsurv` for the survivor count, `var*` for
    /// every variance and `meansurvival` for the mean survival probability.
    pub fn header() -> Vec<String> {
        let mut cols = Vec::with_capacity(Self::COLUMNS);
        cols.extend(["generation", "nsurv", "zopt1", "zopt2"].map(String::from));

        for t in 1..=TRAITS {
            for suffix in ["", "surv"] {
                cols.push(format!("meanphen{suffix}{t}"));
                cols.push(format!("varphen{suffix}{t}"));
                cols.push(format!("meang{suffix}{t}"));
                cols.push(format!("varg{suffix}{t}"));
                for k in 1..=TRAITS {
                    cols.push(format!("meanm{suffix}{t}{k}"));
                    cols.push(format!("varm{suffix}{t}{k}"));
                }
            }
        }

        cols.extend(["phencov", "covg1g2", "meansurvival"].map(String::from));
        cols
    }

    /// The statistics of this row after the generation and survivor count.
    pub fn values(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(Self::COLUMNS - 2);
        out.extend(self.optimum);
        for t in 0..TRAITS {
            self.population.push_fields(&mut out, t);
            self.survivor_stats.push_fields(&mut out, t);
        }
        out.extend([
            self.phenotypic_covariance,
            self.genetic_covariance,
            self.mean_survival,
        ]);
        out
    }

    /// The full row as text fields.
    pub fn to_record(&self) -> Vec<String> {
        let mut record = vec![self.generation.to_string(), self.survivors.to_string()];
        record.extend(self.values().iter().map(|v| v.to_string()));
        record
    }
}
