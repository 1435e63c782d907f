//! Reproduction among survivors and resampling to a fixed population size.
//!
//! Every survivor acts once as a mother. Her mate is drawn uniformly from all
//! survivors, herself included, and the pair produces exactly two offspring.
//! The next generation is then filled by sampling the offspring pool
//! uniformly with replacement until it holds the target number of
//! individuals. These two sampling stages are the only source of drift
//! besides selection itself.

use crate::base::RandomSource;
use crate::evolution::OffspringFactory;
use crate::genome::Individual;

/// Smallest number of survivors that can found the next generation.
pub const MIN_SURVIVORS: usize = 2;

/// Offspring produced per mating.
const OFFSPRING_PER_MATING: usize = 2;

/// Result of a reproduction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReproductionOutcome {
    /// `next` now holds the new generation; `pool_size` offspring were bred.
    Refilled { pool_size: usize },
    /// Fewer than [`MIN_SURVIVORS`] survivors; nothing was drawn or written.
    Extinct { survivors: usize },
}

/// Breed the next generation from `survivors`.
///
/// `pool` and `next` are reusable buffers; both are cleared before use.
/// On success `next` holds exactly `population_size` individuals.
pub fn reproduce<R: RandomSource + ?Sized>(
    survivors: &[Individual],
    factory: &OffspringFactory,
    population_size: usize,
    pool: &mut Vec<Individual>,
    next: &mut Vec<Individual>,
    rng: &mut R,
) -> ReproductionOutcome {
    let n_surv = survivors.len();
    if n_surv < MIN_SURVIVORS {
        return ReproductionOutcome::Extinct { survivors: n_surv };
    }

    pool.clear();
    pool.reserve(OFFSPRING_PER_MATING * n_surv);
    for mother in survivors {
        let father = &survivors[rng.uniform_int(n_surv)];
        for _ in 0..OFFSPRING_PER_MATING {
            pool.push(factory.create(mother, father, rng));
        }
    }

    next.clear();
    next.reserve(population_size);
    for _ in 0..population_size {
        next.push(pool[rng.uniform_int(pool.len())]);
    }

    ReproductionOutcome::Refilled {
        pool_size: pool.len(),
    }
}
