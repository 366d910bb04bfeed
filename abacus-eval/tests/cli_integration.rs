//! CLI integration tests for abacus-eval

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Command isolated from any user config file
fn abacus_eval(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("abacus-eval").unwrap();
    cmd.env("ABACUS_CONFIG", temp_dir.path().join("absent.toml"))
        .env_remove("RUST_LOG")
        .env_remove("ABACUS_LOG_FORMAT")
        .env_remove("ABACUS_LOG_LEVEL");
    cmd
}

#[test]
fn test_addition_from_args() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .args(["5", "+", "3", "="])
        .assert()
        .success()
        .stdout("8\n");
}

#[test]
fn test_square_root_of_nine() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .args(["9", "sqrt", "="])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_division_by_zero_is_successful_run() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .args(["8", "/", "0", "="])
        .assert()
        .success()
        .stdout("Error\n");
}

#[test]
fn test_stdin_input_handling() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .write_stdin("12.5 * 4\n=\n")
        .assert()
        .success()
        .stdout("50\n");
}

#[test]
fn test_trace_prints_each_press() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .args(["--trace", "12", "neg"])
        .assert()
        .success()
        .stdout("1\t1\n2\t12\n±\t-12\n-12\n");
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = abacus_eval(&temp_dir)
        .args(["--format", "json", "7", "+"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["display"], "0");
    assert_eq!(value["pending_operator"], "add");
    assert_eq!(value["operand1"], 7.0);
    assert_eq!(value["operand2"], 0.0);
}

#[test]
fn test_json_trace_is_json_lines() {
    let temp_dir = TempDir::new().unwrap();

    let output = abacus_eval(&temp_dir)
        .args(["--format", "json", "--trace", "4", "back"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["intent"], "4");
    assert_eq!(lines[1]["intent"], "←");
    assert_eq!(lines[1]["display"], "0");
    assert!(lines[2]["pending_operator"].is_null());
}

#[test]
fn test_unknown_token_exits_with_3() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .args(["5", "%", "3"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown token '%'"));
}

#[test]
fn test_error_entry_flag() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .args(["--error-entry", "literal", "1", "/", "=", "5"])
        .assert()
        .success()
        .stdout("Error5\n");

    abacus_eval(&temp_dir)
        .args(["1", "/", "=", "5"])
        .assert()
        .success()
        .stdout("5\n");
}

#[test]
fn test_error_entry_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[engine]\nerror_entry = \"literal\"\n").unwrap();

    abacus_eval(&temp_dir)
        .env("ABACUS_CONFIG", &config_path)
        .args(["1", "/", "=", "back"])
        .assert()
        .success()
        .stdout("Erro\n");
}

#[test]
fn test_malformed_config_exits_with_1() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[engine\n").unwrap();

    abacus_eval(&temp_dir)
        .args(["--config", config_path.to_str().unwrap(), "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_default_logging_is_quiet() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .args(["5", "+", "3", "="])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn test_logging_level_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[logging]\nlevel = \"debug\"\n").unwrap();

    abacus_eval(&temp_dir)
        .env("ABACUS_CONFIG", &config_path)
        .args(["5", "+", "3", "="])
        .assert()
        .success()
        .stdout("8\n")
        .stderr(predicate::str::contains("Applying 4 intents"));
}

#[test]
fn test_logging_env_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[logging]\nformat = \"text\"\nlevel = \"error\"\n").unwrap();

    abacus_eval(&temp_dir)
        .env("ABACUS_CONFIG", &config_path)
        .env("ABACUS_LOG_FORMAT", "json")
        .env("ABACUS_LOG_LEVEL", "debug")
        .args(["5", "+", "3", "="])
        .assert()
        .success()
        .stderr(predicate::str::contains("Applying 4 intents"))
        .stderr(predicate::str::contains("\"level\":\"DEBUG\""));
}

#[test]
fn test_verbose_flag_enables_debug_logging() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .args(["-v", "2", "*", "2", "="])
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("Applying 4 intents"));
}

#[test]
fn test_empty_input_shows_zero() {
    let temp_dir = TempDir::new().unwrap();

    abacus_eval(&temp_dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout("0\n");
}
