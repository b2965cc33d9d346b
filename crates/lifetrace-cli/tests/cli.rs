//! Binary-level tests for `lifetrace`.

use assert_cmd::Command;
use lifetrace_test_utils::temp_file;
use predicates::prelude::*;

fn lifetrace() -> Command {
    let mut cmd = Command::cargo_bin("lifetrace").unwrap();
    cmd.env_remove("LIFETRACE_CONFIG")
        .env_remove("LIFETRACE_CAPACITY")
        .env_remove("LIFETRACE_CHECK_BURST")
        .env_remove("LIFETRACE_CHECK_INTERVAL")
        .env_remove("LIFETRACE_TIME_FORMAT")
        .env_remove("LIFETRACE_MIRROR");
    cmd
}

#[test]
fn test_run_prints_trace() {
    lifetrace()
        .args(["run", "--name", "Ada", "--checks", "0", "--increments", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1 on_create: instance created"))
        .stdout(predicate::str::contains("name changed from unset to Ada"))
        .stdout(predicate::str::contains("counter incremented to 1"))
        .stdout(predicate::str::contains("on_destroy: instance destroyed"));
}

#[test]
fn test_run_json_output() {
    let output = lifetrace()
        .args(["run", "--checks", "20", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["phase"], "destroyed");
    // mount pass + 20 checks + 2 increment passes
    assert_eq!(value["check_counts"]["check"], 23);
    let entries = value["entries"].as_array().unwrap();
    assert!(entries.len() <= 50);
    assert_eq!(entries.last().unwrap()["hook"], "on_destroy");
}

#[test]
fn test_config_file_caps_buffer() {
    let (_dir, path) = temp_file("capacity: 4\n");
    lifetrace()
        .arg("--config")
        .arg(&path)
        .args(["run", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| {
            let value: serde_json::Value = serde_json::from_str(out).unwrap();
            value["entries"].as_array().map(|e| e.len()) == Some(4)
        }));
}

#[test]
fn test_invalid_config_exits_with_config_code() {
    let (_dir, path) = temp_file("capacity: 0\n");
    lifetrace()
        .arg("--config")
        .arg(&path)
        .arg("run")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("capacity must be greater than 0"));
}

#[test]
fn test_increment_past_max_fails() {
    lifetrace()
        .args(["run", "--counter", "9223372036854775807", "--increments", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("counter overflow"));
}

#[test]
fn test_config_show() {
    lifetrace()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity: 50"));
}
