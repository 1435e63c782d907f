use assert_cmd::Command;
use maternevo_sim::simulation::Configuration;
use predicates::prelude::*;
use tempfile::tempdir;

/// Positional parameters of a mild, well-adapted run.
const MILD: [&str; 19] = [
    "5", "0.01", "0.02", "0.01", "0.02", "0", "0", "0", "0", "0", "0.1", "0", "0.5", "0", "0.5",
    "0", "0", "0", "0",
];

fn maternevo() -> Command {
    Command::cargo_bin("maternevo").unwrap()
}

#[test]
fn test_help_lists_commands() {
    maternevo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("run-config"))
        .stdout(predicate::str::contains("example-config"))
        .stdout(predicate::str::contains("sweep"));
}

#[test]
fn test_run_writes_statistics_file() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("stats.csv");

    maternevo()
        .arg("run")
        .args(MILD)
        .args(["-n", "50", "-g", "10", "--record-every", "5", "--seed", "1"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Population Size: 50"))
        .stdout(predicate::str::contains("Simulation complete!"));

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("generation;nsurv;zopt1;zopt2"));
    assert!(lines[1].starts_with("0;"));
    assert!(lines[2].starts_with("5;"));
    assert!(lines[3].starts_with("10;"));
    assert_eq!(lines[4], "type;multivar M");
    assert!(lines.contains(&"seed;1"));
    assert_eq!(lines.len(), 1 + 3 + 24);
}

#[test]
fn test_run_accepts_negative_values_and_flags() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("neg.csv");

    let mut params = MILD;
    params[16] = "-0.5";
    params[17] = "0.5";
    params[18] = "true";

    maternevo()
        .arg("run")
        .args(params)
        .args(["-n", "30", "-g", "4", "--seed", "9"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Diagonal Only: Yes"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("int1ptb;-0.5"));
    assert!(text.contains("diagonalM;1"));
}

#[test]
fn test_extinction_exit_code() {
    let temp = tempdir().unwrap();
    let out = temp.path().join("extinct.csv");

    let mut params = MILD;
    params[0] = "1e-6";
    params[5] = "1";
    params[11] = "1";

    maternevo()
        .arg("run")
        .args(params)
        .args(["-n", "20", "-g", "10", "--seed", "3"])
        .arg("--output")
        .arg(&out)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("extinct at generation 0"));

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().count(), 2);
}

#[test]
fn test_run_rejects_bad_arguments() {
    maternevo()
        .arg("run")
        .args(&MILD[..10])
        .assert()
        .failure();

    let mut params = MILD;
    params[18] = "2";
    maternevo().arg("run").args(params).assert().failure();

    let mut params = MILD;
    params[0] = "0";
    maternevo()
        .arg("run")
        .args(params)
        .args(["-n", "10", "-g", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selection strength"));
}

#[test]
fn test_example_config_prints_json() {
    maternevo()
        .arg("example-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"population_size\": 5000"))
        .stdout(predicate::str::contains("\"selection_strength\""));
}

#[test]
fn test_run_config_from_file() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("config.json");
    let out = temp.path().join("from_config.csv");

    let mut config = Configuration::default();
    config.execution.population_size = 40;
    config.execution.total_generations = 6;
    config.environment.selection_strength = 5.0;
    std::fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

    maternevo()
        .arg("run-config")
        .arg(&config_path)
        .args(["--seed", "12", "--record-every", "3"])
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("seed;12"));
    assert!(text.contains("skip;3"));
    assert!(text.contains("npop;40"));
}

#[test]
fn test_sweep_prints_grid() {
    let output = maternevo()
        .args([
            "sweep",
            "--rate-steps",
            "1",
            "--intercept-max",
            "0.2",
            "--maternal-rates",
            "0.01",
            "--executable",
            "./maternevo",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4 * 2);
    assert!(lines.iter().all(|l| l.starts_with("./maternevo run ")));
}
