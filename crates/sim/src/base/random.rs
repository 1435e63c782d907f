//! Random number service.
//!
//! Every stochastic step of the model (segregation, mutation, developmental
//! noise, survival trials, mate choice, resampling) draws from a single
//! stream. The order and number of draws per generation is part of the
//! reproducible behaviour: reordering calls changes the outcome of a run even
//! under an identical seed.
//!
//! [`SimRng`] is the production stream. [`ScriptedSource`] replays fixed
//! sequences of values and is meant for tests that need to pin down
//! individual draws.

use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the three kinds of random draws used by the model.
pub trait RandomSource {
    /// Uniform real in `[0, 1)`.
    fn uniform_real(&mut self) -> f64;

    /// Uniform integer in `0..n`.
    ///
    /// # Panics
    /// Implementations may panic if `n == 0`.
    fn uniform_int(&mut self, n: usize) -> usize;

    /// Normally distributed real with mean 0 and standard deviation `sd`.
    fn gaussian(&mut self, sd: f64) -> f64;
}

/// Production random stream backed by Xoshiro256++.
#[derive(Debug, Clone)]
pub struct SimRng {
    rng: Xoshiro256PlusPlus,
    seed: u64,
}

impl SimRng {
    /// Create a stream from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn uniform_real(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    #[inline]
    fn uniform_int(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }

    #[inline]
    fn gaussian(&mut self, sd: f64) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        z * sd
    }
}

/// Seed derived from the current wall-clock time in nanoseconds.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Deterministic source that cycles through scripted values.
///
/// Each kind of draw has its own script. An empty script yields `0.0` for
/// reals and Gaussians, and `0` for integers. Integer draws are reduced
/// modulo the requested range, and Gaussian draws are scaled by the requested
/// standard deviation, so a script holds standard-normal deviates.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    reals: Vec<f64>,
    ints: Vec<usize>,
    normals: Vec<f64>,
    real_pos: usize,
    int_pos: usize,
    normal_pos: usize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the script for [`RandomSource::uniform_real`].
    pub fn with_reals(mut self, reals: impl Into<Vec<f64>>) -> Self {
        self.reals = reals.into();
        self.real_pos = 0;
        self
    }

    /// Set the script for [`RandomSource::uniform_int`].
    pub fn with_ints(mut self, ints: impl Into<Vec<usize>>) -> Self {
        self.ints = ints.into();
        self.int_pos = 0;
        self
    }

    /// Set the script of standard-normal deviates for [`RandomSource::gaussian`].
    pub fn with_normals(mut self, normals: impl Into<Vec<f64>>) -> Self {
        self.normals = normals.into();
        self.normal_pos = 0;
        self
    }

    /// Number of draws of each kind served so far: `(reals, ints, gaussians)`.
    pub fn draws(&self) -> (usize, usize, usize) {
        (self.real_pos, self.int_pos, self.normal_pos)
    }
}

fn cycle<T: Copy + Default>(script: &[T], pos: &mut usize) -> T {
    let value = if script.is_empty() {
        T::default()
    } else {
        script[*pos % script.len()]
    };
    *pos += 1;
    value
}

impl RandomSource for ScriptedSource {
    fn uniform_real(&mut self) -> f64 {
        cycle(&self.reals, &mut self.real_pos)
    }

    fn uniform_int(&mut self, n: usize) -> usize {
        cycle(&self.ints, &mut self.int_pos) % n
    }

    fn gaussian(&mut self, sd: f64) -> f64 {
        cycle(&self.normals, &mut self.normal_pos) * sd
    }
}
