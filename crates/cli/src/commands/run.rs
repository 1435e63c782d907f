use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use maternevo_sim::base::clock_seed;
use maternevo_sim::simulation::{Configuration, ExecutionConfig, RunOutcome, Simulation};
use maternevo_sim::storage::Recorder;
use std::io::Write;

use crate::args::{OutputArgs, RunArgs, RunConfigArgs};
use crate::commands::config::load_config;
use crate::printing::{print_outcome, print_parameters};
use crate::utils::default_output_path;

/// `run`: configuration from positional parameters.
pub fn run_positional(args: &RunArgs) -> Result<RunOutcome> {
    let mut execution = ExecutionConfig::new(args.population_size, args.generations, args.seed);
    execution.record_every = args.record_every;

    let config = Configuration::from_positional(&args.model.to_values(), execution)
        .context("Invalid simulation parameters")?;
    run_simulation(config, &args.output)
}

/// `run-config`: configuration from a JSON file.
pub fn run_from_file(args: &RunConfigArgs) -> Result<RunOutcome> {
    let mut config = load_config(&args.config)?;
    if let Some(seed) = args.seed {
        config.execution.seed = Some(seed);
    }
    if let Some(record_every) = args.record_every {
        config.execution.record_every = record_every;
    }
    run_simulation(config, &args.output)
}

fn run_simulation(mut config: Configuration, output: &OutputArgs) -> Result<RunOutcome> {
    println!("🧬 Maternevo - Running Simulation");
    println!("============================================");

    let seed = config.execution.seed.unwrap_or_else(clock_seed);
    config.execution.seed = Some(seed);
    let path = output
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(seed));

    print_parameters(&config, seed);

    let total = config.execution.total_generations;
    let mut sim = Simulation::new(config).context("Failed to initialize simulation")?;
    let mut recorder = Recorder::create(&path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;

    let pb = if output.progress {
        let pb = ProgressBar::new(total as u64 + 1);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )
                .context("Invalid progress bar template")?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let outcome = sim
        .run_with_callback(&mut recorder, |generation| {
            if let Some(pb) = &pb {
                pb.set_position(generation as u64 + 1);
            }
        })
        .context("Simulation failed")?;

    if let Some(pb) = pb {
        match outcome {
            RunOutcome::Completed { .. } => pb.finish_with_message("Done"),
            RunOutcome::Extinct { .. } => pb.abandon_with_message("Extinct"),
        }
    }

    recorder
        .into_inner()
        .and_then(|mut file| file.flush().map_err(Into::into))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    print_outcome(&outcome, &path);
    Ok(outcome)
}
