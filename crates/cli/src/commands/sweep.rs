use std::f64::consts::PI;

use crate::args::SweepArgs;

/// One `run` command line per point of the sweep grid.
///
/// Loop order, outermost first: trait-1 intercept magnitude, trait-2
/// intercept magnitude, trait-1 direction, trait-2 direction, maternal
/// mutation rate, trait-1 rate. Post-switch rates equal the pre-switch
/// rates and both phases are zero.
pub fn sweep_commands(args: &SweepArgs) -> Vec<String> {
    let steps = args.rate_steps.max(1);
    let rates1: Vec<f64> = (0..=steps).map(|i| i as f64 * PI / steps as f64).collect();

    let sizes: Vec<f64> = if args.intercept_step > 0.0 {
        (0..)
            .map(|i| i as f64 * args.intercept_step)
            .take_while(|size| *size < args.intercept_max - 1e-9)
            .collect()
    } else {
        vec![0.0]
    };

    let mut extra = String::new();
    if let Some(n) = args.population_size {
        extra.push_str(&format!(" --population-size {n}"));
    }
    if let Some(g) = args.generations {
        extra.push_str(&format!(" --generations {g}"));
    }

    let phi = 0.0;
    let mut commands = Vec::new();
    for &size1 in &sizes {
        for &size2 in &sizes {
            for dir1 in [-1.0, 1.0] {
                for dir2 in [-1.0, 1.0] {
                    // + 0.0 turns -0 into 0
                    let int1 = size1 * dir1 + 0.0;
                    let int2 = size2 * dir2 + 0.0;
                    for &mu_m in &args.maternal_rates {
                        for &rate1 in &rates1 {
                            let rate2 = args.rate2;
                            commands.push(format!(
                                "{exe} run {c} {mu_g} {sd} {mu_m} {sd} {phi} 0 0 0 0 {var_p} \
                                 {rate1} {rate2} {rate1} {rate2} {phi} {int1} {int2} 0{extra}",
                                exe = args.executable,
                                c = args.selection_strength,
                                mu_g = args.genic_mutation_rate,
                                sd = args.mutation_sd,
                                var_p = args.noise_variance,
                            ));
                        }
                    }
                }
            }
        }
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn default_args() -> SweepArgs {
        SweepArgs {
            executable: "maternevo".to_string(),
            selection_strength: defaults::SWEEP_SELECTION_STRENGTH,
            genic_mutation_rate: defaults::SWEEP_GENIC_MUTATION_RATE,
            mutation_sd: defaults::SWEEP_MUTATION_SD,
            noise_variance: defaults::SWEEP_NOISE_VARIANCE,
            rate2: defaults::SWEEP_RATE2,
            rate_steps: defaults::SWEEP_RATE_STEPS,
            intercept_max: defaults::SWEEP_INTERCEPT_MAX,
            intercept_step: defaults::SWEEP_INTERCEPT_STEP,
            maternal_rates: defaults::SWEEP_MATERNAL_RATES.to_vec(),
            population_size: None,
            generations: None,
        }
    }

    #[test]
    fn test_default_grid_size() {
        // 25 x 25 magnitudes, 2 x 2 directions, 2 maternal rates, 11 rates
        assert_eq!(sweep_commands(&default_args()).len(), 25 * 25 * 4 * 2 * 11);
    }

    #[test]
    fn test_command_layout() {
        let commands = sweep_commands(&default_args());
        let fields: Vec<&str> = commands[0].split_whitespace().collect();
        assert_eq!(fields[0], "maternevo");
        assert_eq!(fields[1], "run");
        assert_eq!(fields.len(), 2 + 19);
        assert_eq!(fields[4], "0.02");
        assert_eq!(fields[5], "0.01");
        assert_eq!(fields[12], "0.1");
        assert_eq!(fields[13], "0");
        assert_eq!(fields[14], "0.5");
        assert_eq!(fields[18], "0");
        assert_eq!(fields[20], "0");

        // the last rate of the first block is pi
        let last_rate: f64 = commands[10].split_whitespace().nth(13).unwrap().parse().unwrap();
        assert!((last_rate - PI).abs() < 1e-12);
        // maternal rate switches after the rate block
        assert_eq!(commands[11].split_whitespace().nth(5), Some("0"));
    }

    #[test]
    fn test_overrides() {
        let mut args = default_args();
        args.executable = "./bin/maternevo".to_string();
        args.rate_steps = 2;
        args.intercept_max = 1.0;
        args.intercept_step = 0.5;
        args.maternal_rates = vec![0.05];
        args.population_size = Some(100);
        args.generations = Some(10);

        let commands = sweep_commands(&args);
        assert_eq!(commands.len(), 2 * 2 * 4 * 3);
        assert!(commands[0].starts_with("./bin/maternevo run "));
        assert!(commands[0].ends_with(" 0 --population-size 100 --generations 10"));
        assert!(commands.iter().any(|c| c.contains(" 0.5 -0.5 0 ")));
    }
}
