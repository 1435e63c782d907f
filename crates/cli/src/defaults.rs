//! Shared default values for the command line.
//! Sweep constants reproduce the parameter grid of the fluctuating-optimum study.

pub const POPULATION_SIZE: usize = 5000;
pub const GENERATIONS: usize = 50_000;
pub const RECORD_EVERY: usize = 100;

/// Prefix of the default output file name.
pub const OUTPUT_PREFIX: &str = "sim_maternal";

/// Exit status used when the population goes extinct.
pub const EXTINCTION_EXIT_CODE: i32 = 3;

// Sweep grid
pub const SWEEP_EXECUTABLE: &str = "maternevo";
/// sqrt(0.7)
pub const SWEEP_SELECTION_STRENGTH: f64 = 0.836_660_026_534_075_6;
pub const SWEEP_GENIC_MUTATION_RATE: f64 = 0.01;
pub const SWEEP_MUTATION_SD: f64 = 0.02;
pub const SWEEP_NOISE_VARIANCE: f64 = 0.1;
pub const SWEEP_RATE2: f64 = 0.5;
pub const SWEEP_RATE_STEPS: usize = 10;
pub const SWEEP_INTERCEPT_MAX: f64 = 5.0;
pub const SWEEP_INTERCEPT_STEP: f64 = 0.2;
pub const SWEEP_MATERNAL_RATES: [f64; 2] = [0.01, 0.0];
