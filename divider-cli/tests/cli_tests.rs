//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

/// Build command for the divider-cli binary (finds it in target/debug when run via cargo test).
fn divider_cli() -> Command {
    cargo_bin_cmd!("divider-cli")
}

#[test]
fn test_cli_help() {
    let mut cmd = divider_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("E-series"));
}

#[test]
fn test_cli_version() {
    let mut cmd = divider_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_voltage_divider() {
    let mut cmd = divider_cli();

    cmd.args(["--v-in", "5", "--v-out", "2.5"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("V_in"))
        .stdout(predicate::str::contains(
            "1 best results for ratio V_out / V_in = 0.50000 using series E12:",
        ))
        .stdout(predicate::str::contains("R1 = 1 Ohm, R2 = 1 Ohm, e_rel = 0.00%"));
}

#[test]
fn test_cli_underscore_aliases() {
    let mut cmd = divider_cli();

    cmd.args(["--v_in", "10", "--v_out", "5"]);

    cmd.assert().success().stdout(predicate::str::contains("0.50000"));
}

#[test]
fn test_cli_resistor_ratio() {
    let mut cmd = divider_cli();

    cmd.args(["--res-ratio", "1.2", "--num-results", "3"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 best results for ratio R1 / R2 = 1.20000"))
        .stdout(predicate::str::contains("R1 = 1.2 Ohm, R2 = 1 Ohm"))
        .stdout(predicate::str::contains("V_in").not());
}

#[test]
fn test_cli_series_option() {
    let mut cmd = divider_cli();

    cmd.args(["--res-ratio", "3", "--series", "E24"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("using series E24"));
}

#[test]
fn test_cli_unknown_series() {
    let mut cmd = divider_cli();

    cmd.args(["--res-ratio", "2", "--series", "E5"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Series 'E5' doesn't exist"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_v_out_larger_than_v_in() {
    let mut cmd = divider_cli();

    cmd.args(["--v-in", "3.3", "--v-out", "5"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("v_out can't be larger than v_in"));
}

#[test]
fn test_cli_negative_resistor_ratio() {
    let mut cmd = divider_cli();

    cmd.args(["--res-ratio=-2"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("can not be negative"));
}

#[test]
fn test_cli_negative_resistor_ratio_separate_value() {
    let mut cmd = divider_cli();

    cmd.args(["--res-ratio", "-2"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Resistor ratio can not be negative"));
}

#[test]
fn test_cli_negative_v_out() {
    let mut cmd = divider_cli();

    cmd.args(["--v-in", "5", "--v-out", "-1"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Voltage ratio can not be negative"));
}

#[test]
fn test_cli_negative_v_in() {
    let mut cmd = divider_cli();

    cmd.args(["--v-in", "-5", "--v-out", "1"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error: v_in must be positive"));
}

#[test]
fn test_cli_extreme_ratio_is_invalid_input() {
    let mut cmd = divider_cli();

    cmd.args(["--res-ratio", "1e308"]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("too extreme"))
        .stderr(predicate::str::contains("Domain error").not());
}

#[test]
fn test_cli_list_series_json() {
    let mut cmd = divider_cli();

    cmd.args(["--list-series", "--format", "json"]);

    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(0));

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["default"], "E12");
    assert_eq!(json["series"].as_array().unwrap().len(), 6);
}

#[test]
fn test_cli_missing_mode() {
    let mut cmd = divider_cli();

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Either specify"));
}

#[test]
fn test_cli_negative_count_is_empty() {
    let mut cmd = divider_cli();

    cmd.args(["--res-ratio", "2", "--num-results", "-1"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0 best results"))
        .stdout(predicate::str::contains("R1 =").not());
}

#[test]
fn test_cli_json_output() {
    let mut cmd = divider_cli();

    cmd.args(["--v-in", "12", "--v-out", "3.3", "-n", "4", "--format", "json"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(json["series_name"], "E12");
    assert_eq!(json["ratio_type"], "voltage");
    assert_eq!(json["configurations"].as_array().unwrap().len(), 4);
}

#[test]
fn test_cli_sort_absolute() {
    let mut cmd = divider_cli();

    cmd.args(["--res-ratio", "7", "--sort", "absolute", "--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"sort_key\": \"absolute\""));
}

#[test]
fn test_cli_list_series() {
    let mut cmd = divider_cli();

    cmd.arg("--list-series");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("E12 (12 values per decade)"))
        .stdout(predicate::str::contains("E96"));
}

#[test]
fn test_cli_conflicting_modes() {
    let mut cmd = divider_cli();

    cmd.args(["--v-in", "5", "--v-out", "2", "--res-ratio", "2"]);

    cmd.assert().failure();
}

#[test]
fn test_cli_output_formats_are_different() {
    let args = ["--res-ratio", "2.2", "-n", "2"];

    let human_output = divider_cli().args(args).output().unwrap();
    let json_output = divider_cli()
        .args(args)
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert_ne!(
        human_output.stdout,
        json_output.stdout,
        "Different formats should produce different output"
    );
}
