//! End-to-end tests for the `sparevest` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const BALANCED: &str = r#"
[[funds]]
name = "USDT Stable Fund"
target = 0.6
balance = 570.0

[[funds]]
name = "Growth Fund"
target = 0.25
balance = 237.5

[[funds]]
name = "Conservative Fund"
target = 0.15
balance = 142.5
"#;

const SKEWED: &str = r#"
[[funds]]
name = "A"
target = 0.5
balance = 80.0

[[funds]]
name = "B"
target = 0.5
balance = 20.0
"#;

fn config_file(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn sparevest() -> Command {
    let mut cmd = Command::cargo_bin("sparevest").unwrap();
    cmd.env_remove("SPAREVEST_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_template_lists_default_funds() {
    sparevest()
        .arg("template")
        .assert()
        .success()
        .stdout(predicate::str::contains("USDT Stable Fund"))
        .stdout(predicate::str::contains("[[funds]]"));
}

#[test]
fn test_template_ignores_config_file() {
    sparevest()
        .args(["--config", "/nonexistent/sparevest.toml", "template"])
        .assert()
        .success()
        .stdout(predicate::str::contains("USDT Stable Fund"));
}

#[test]
fn test_summary_json() {
    let file = config_file(BALANCED, ".toml");
    let json = json_stdout(
        sparevest()
            .arg("--config")
            .arg(file.path())
            .args(["--format", "json", "summary"]),
    );

    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["name"], "USDT Stable Fund");
    assert!((rows[0]["percentage_of_total"].as_f64().unwrap() - 60.0).abs() < 1e-9);
}

#[test]
fn test_summary_table_without_config() {
    sparevest()
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Growth Fund"))
        .stdout(predicate::str::contains("Total balance: 0.00"));
}

#[test]
fn test_strict_rebalance_fails() {
    let file = config_file(SKEWED, ".toml");
    sparevest()
        .arg("--config")
        .arg(file.path())
        .args(["rebalance", "--amount", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Must add more money for strictly positive rebalancing",
        ));
}

#[test]
fn test_relaxed_rebalance_sells_down() {
    let file = config_file(SKEWED, ".toml");
    let json = json_stdout(
        sparevest()
            .arg("--config")
            .arg(file.path())
            .args(["-f", "json", "rebalance", "--amount", "10", "--allow-negative"]),
    );

    assert_eq!(json[0]["dollars_to_add"].as_f64(), Some(-25.0));
    assert_eq!(json[1]["dollars_to_add"].as_f64(), Some(35.0));
}

#[test]
fn test_simulate_round_up() {
    let file = config_file(BALANCED, ".toml");
    let json = json_stdout(
        sparevest()
            .arg("--config")
            .arg(file.path())
            .args(["-f", "json", "simulate", "--amount", "2.5"]),
    );

    assert_eq!(json["success"], true);
    assert_eq!(json["total_invested"].as_f64(), Some(2.5));
    assert!((json["new_total_balance"].as_f64().unwrap() - 952.5).abs() < 1e-9);
}

#[test]
fn test_simulate_failure_is_not_an_error() {
    let file = config_file(SKEWED, ".toml");
    let output = sparevest()
        .arg("--config")
        .arg(file.path())
        .args(["-f", "json", "simulate", "--amount", "10"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], false);
    assert_eq!(json["total_invested"].as_f64(), Some(0.0));
    assert_eq!(json["new_total_balance"].as_f64(), Some(100.0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("could not be auto-invested"));
}

#[test]
fn test_simulate_purchase_minimal() {
    sparevest()
        .args(["-f", "minimal", "simulate", "--purchase", "47.30", "--rule", "10"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2.7"));
}

#[test]
fn test_invalid_targets_rejected() {
    let file = config_file(
        r#"
        [[funds]]
        name = "A"
        target = 0.5

        [[funds]]
        name = "B"
        target = 0.4
        "#,
        ".toml",
    );

    sparevest()
        .arg("--config")
        .arg(file.path())
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fund targets must sum to 1.0"));
}

#[test]
fn test_validate_json_config() {
    let file = config_file(
        r#"{"funds": [
            {"Fund": "A", "Target": 0.5, "Balance": 10},
            {"Fund": "B", "Target": 0.5}
        ]}"#,
        ".json",
    );

    sparevest()
        .arg("--config")
        .arg(file.path())
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio valid: 2 funds"));
}

#[test]
fn test_missing_config_file() {
    sparevest()
        .args(["--config", "/nonexistent/sparevest.toml", "summary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}
