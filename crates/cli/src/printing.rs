use maternevo_sim::simulation::{Configuration, RunOutcome};
use std::path::Path;

pub fn print_parameters(config: &Configuration, seed: u64) {
    let exec = &config.execution;
    let genetics = &config.genetics;
    let env = &config.environment;

    println!("\n📋 Simulation Configuration");
    println!(
        "  • Population Size: {} [-n, --population-size]",
        exec.population_size
    );
    println!("  • Generations: {} [-g, --generations]", exec.total_generations);
    println!("  • Record Every: {} [--record-every]", exec.record_every);
    println!("  • Regime Switch: generation {}", exec.switch_generation());
    println!("  • Random Seed: {seed} [--seed]");

    println!("\n🧬 Genetics");
    println!(
        "  • Genic Mutation: rate {:.2e}, step sd {}",
        genetics.genic.rate, genetics.genic.step_sd
    );
    println!(
        "  • Maternal Mutation: rate {:.2e}, step sd {}",
        genetics.maternal.rate, genetics.maternal.step_sd
    );
    println!(
        "  • Noise: variance {} (sd {:.4})",
        genetics.noise_variance,
        genetics.noise_sd()
    );
    let m = &genetics.initial_maternal;
    println!(
        "  • Initial M: [[{}, {}], [{}, {}]]",
        m[0][0], m[0][1], m[1][0], m[1][1]
    );
    println!(
        "  • Diagonal Only: {}",
        if genetics.diagonal_only { "Yes" } else { "No" }
    );

    println!("\n🌦  Environment");
    println!("  • Selection Width (c): {:.4}", env.selection_strength);
    for (label, params) in [("Before Switch", &env.baseline), ("After Switch", &env.perturbed)] {
        println!(
            "  • {label}: intercepts {:?}, rates {:?}, phase {}",
            params.intercepts, params.rates, params.phase
        );
    }
    println!();
}

pub fn print_outcome(outcome: &RunOutcome, output: &Path) {
    match outcome {
        RunOutcome::Completed { generations } => {
            println!("\n✓ Simulation complete!");
            println!("  Generations run: {generations}");
        }
        RunOutcome::Extinct { generation } => {
            println!("\n✗ Population went extinct at generation {generation}");
        }
    }
    println!("  Statistics: {}", output.display());
}
