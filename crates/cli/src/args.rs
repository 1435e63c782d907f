use clap::{ArgAction, Args};
use maternevo_sim::simulation::POSITIONAL_COUNT;
use std::path::PathBuf;

use crate::defaults;
use crate::utils::parse_flag;

/// The order-significant model parameters of `run`.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Width of the Gaussian fitness surface
    #[arg(allow_negative_numbers = true)]
    pub c: f64,
    /// Per-allele mutation probability of the genic loci
    #[arg(allow_negative_numbers = true)]
    pub mu_g: f64,
    /// Standard deviation of genic mutation steps
    #[arg(allow_negative_numbers = true)]
    pub sdmu_g: f64,
    /// Per-allele mutation probability of the maternal-effect loci
    #[arg(allow_negative_numbers = true)]
    pub mu_m: f64,
    /// Standard deviation of maternal-effect mutation steps
    #[arg(allow_negative_numbers = true)]
    pub sdmu_m: f64,
    /// Phase of the trait-1 optimum before the switch
    #[arg(allow_negative_numbers = true)]
    pub phi: f64,
    /// Initial maternal effect of mother's trait 1 on offspring trait 1
    #[arg(allow_negative_numbers = true)]
    pub m11: f64,
    /// Initial maternal effect of mother's trait 2 on offspring trait 1
    #[arg(allow_negative_numbers = true)]
    pub m12: f64,
    /// Initial maternal effect of mother's trait 1 on offspring trait 2
    #[arg(allow_negative_numbers = true)]
    pub m21: f64,
    /// Initial maternal effect of mother's trait 2 on offspring trait 2
    #[arg(allow_negative_numbers = true)]
    pub m22: f64,
    /// Variance of developmental noise
    #[arg(allow_negative_numbers = true)]
    pub var_p: f64,
    /// Fluctuation rate of the trait-1 optimum
    #[arg(allow_negative_numbers = true)]
    pub rate1: f64,
    /// Fluctuation rate of the trait-2 optimum
    #[arg(allow_negative_numbers = true)]
    pub rate2: f64,
    /// Trait-1 fluctuation rate after the switch
    #[arg(allow_negative_numbers = true)]
    pub rate1ptb: f64,
    /// Trait-2 fluctuation rate after the switch
    #[arg(allow_negative_numbers = true)]
    pub rate2ptb: f64,
    /// Trait-1 phase after the switch
    #[arg(allow_negative_numbers = true)]
    pub phiptb: f64,
    /// Trait-1 intercept after the switch
    #[arg(allow_negative_numbers = true)]
    pub int1ptb: f64,
    /// Trait-2 intercept after the switch
    #[arg(allow_negative_numbers = true)]
    pub int2ptb: f64,
    /// Restrict maternal effects to the diagonal (0/1/true/false)
    #[arg(action = ArgAction::Set, value_parser = parse_flag)]
    pub diagonal_only: bool,
}

impl ModelArgs {
    /// Values in positional order.
    pub fn to_values(&self) -> [f64; POSITIONAL_COUNT] {
        [
            self.c,
            self.mu_g,
            self.sdmu_g,
            self.mu_m,
            self.sdmu_m,
            self.phi,
            self.m11,
            self.m12,
            self.m21,
            self.m22,
            self.var_p,
            self.rate1,
            self.rate2,
            self.rate1ptb,
            self.rate2ptb,
            self.phiptb,
            self.int1ptb,
            self.int2ptb,
            if self.diagonal_only { 1.0 } else { 0.0 },
        ]
    }
}

/// Output and progress options shared by the run commands.
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Statistics file (default: sim_maternal_<seed>.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Population size
    #[arg(short = 'n', long, default_value_t = defaults::POPULATION_SIZE)]
    pub population_size: usize,

    /// Index of the last generation
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: usize,

    /// Write statistics every N generations
    #[arg(long, default_value_t = defaults::RECORD_EVERY)]
    pub record_every: usize,

    /// Random seed (default: derived from the clock)
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct RunConfigArgs {
    /// JSON configuration file
    pub config: PathBuf,

    /// Override random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override recording interval
    #[arg(long)]
    pub record_every: Option<usize>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    /// Program path written at the start of every command
    #[arg(long, default_value = defaults::SWEEP_EXECUTABLE)]
    pub executable: String,

    /// Width of the fitness surface
    #[arg(long, default_value_t = defaults::SWEEP_SELECTION_STRENGTH)]
    pub selection_strength: f64,

    /// Genic mutation probability
    #[arg(long, default_value_t = defaults::SWEEP_GENIC_MUTATION_RATE)]
    pub genic_mutation_rate: f64,

    /// Mutation step standard deviation (genic and maternal)
    #[arg(long, default_value_t = defaults::SWEEP_MUTATION_SD)]
    pub mutation_sd: f64,

    /// Variance of developmental noise
    #[arg(long, default_value_t = defaults::SWEEP_NOISE_VARIANCE)]
    pub noise_variance: f64,

    /// Trait-2 fluctuation rate
    #[arg(long, default_value_t = defaults::SWEEP_RATE2)]
    pub rate2: f64,

    /// Number of steps dividing [0, pi] for the trait-1 rate
    #[arg(long, default_value_t = defaults::SWEEP_RATE_STEPS)]
    pub rate_steps: usize,

    /// Upper bound (exclusive) of post-switch intercept magnitudes
    #[arg(long, default_value_t = defaults::SWEEP_INTERCEPT_MAX)]
    pub intercept_max: f64,

    /// Step between post-switch intercept magnitudes
    #[arg(long, default_value_t = defaults::SWEEP_INTERCEPT_STEP)]
    pub intercept_step: f64,

    /// Maternal mutation probabilities to sweep
    #[arg(long, value_delimiter = ',', default_values_t = defaults::SWEEP_MATERNAL_RATES)]
    pub maternal_rates: Vec<f64>,

    /// Population size passed to every run
    #[arg(long)]
    pub population_size: Option<usize>,

    /// Generation count passed to every run
    #[arg(long)]
    pub generations: Option<usize>,
}
