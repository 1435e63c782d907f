mod args;
mod commands;
pub mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use maternevo_sim::simulation::RunOutcome;
use tracing_subscriber::EnvFilter;

use args::{RunArgs, RunConfigArgs, SweepArgs};
use commands::{config, run, sweep};

/// Maternevo: maternal effects under a fluctuating optimum
///
/// Simulates two quantitative traits shaped by additive genetics,
/// developmental noise and inherited maternal effects, in a population
/// tracking a sinusoidally moving selective optimum that shifts once
/// halfway through the run.
#[derive(Parser, Debug)]
#[command(name = "maternevo")]
#[command(author, version, about = "Simulates maternal-effect evolution under a fluctuating optimum", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a simulation from positional model parameters.
    ///
    /// Parameters, in order: c mu_g sdmu_g mu_m sdmu_m phi m11 m12 m21 m22
    /// var_p rate1 rate2 rate1ptb rate2ptb phiptb int1ptb int2ptb diagonal_only.
    /// Exits with status 3 if the population goes extinct.
    Run(Box<RunArgs>),

    /// Run a simulation from a JSON configuration file.
    RunConfig(RunConfigArgs),

    /// Print the default configuration as JSON.
    ExampleConfig,

    /// Print one `run` command per point of the study's parameter grid.
    Sweep(SweepArgs),
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Run(args) => run::run_positional(&args)?,
        Commands::RunConfig(args) => run::run_from_file(&args)?,
        Commands::ExampleConfig => {
            println!("{}", config::example_config()?);
            return Ok(());
        }
        Commands::Sweep(args) => {
            for line in sweep::sweep_commands(&args) {
                println!("{line}");
            }
            return Ok(());
        }
    };

    if let RunOutcome::Extinct { .. } = outcome {
        std::process::exit(defaults::EXTINCTION_EXIT_CODE);
    }

    Ok(())
}
