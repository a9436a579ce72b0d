//! Integration tests for the tlctl CLI

use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::tlctl;

const PAUSED_TENTH_CONFIG: &str = r#"
[player]
rate = 0.1

[timeline]
start_paused = true
"#;

fn snapshot_json(stdout: &[u8]) -> serde_json::Value {
    serde_json::from_slice(stdout).expect("stdout should be JSON")
}

// ============================================================================
// Script Tests
// ============================================================================

#[test]
fn script_prints_final_snapshot() {
    let dir = TempDir::new().unwrap();
    let output = tlctl(&dir.path().join("config.toml"))
        .args(["script", "rate 2; advance 1", "--duration", "10"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = snapshot_json(&output.stdout);
    assert!((json["progress"].as_f64().unwrap() - 0.2).abs() < 1e-9);
    assert_eq!(json["rate"], 2.0);
    assert_eq!(json["playing"], true);
}

#[test]
fn script_output_snapshot() {
    let dir = TempDir::new().unwrap();
    let output = tlctl(&dir.path().join("config.toml"))
        .args(["script", "rate 0.5; advance 2; restart"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    insta::assert_snapshot!(stdout.trim_end(), @r#"
    {
      "progress": 0.0,
      "playing": true,
      "rate": 0.5,
      "scrubbing": false
    }
    "#);
}

#[test]
fn script_trace_prints_one_line_per_step() {
    let dir = TempDir::new().unwrap();
    let output = tlctl(&dir.path().join("config.toml"))
        .args(["script", "toggle; toggle; advance 1", "--trace"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["playing"], false);
}

#[test]
fn script_ignores_unsupported_rate_with_warning() {
    let dir = TempDir::new().unwrap();
    tlctl(&dir.path().join("config.toml"))
        .args(["script", "rate 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"rate\": 1.0"))
        .stderr(predicate::str::contains("intent rejected"));
}

#[test]
fn script_with_unknown_step_fails() {
    let dir = TempDir::new().unwrap();
    tlctl(&dir.path().join("config.toml"))
        .args(["script", "jump 3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown step"));
}

#[test]
fn script_with_invalid_duration_fails() {
    let dir = TempDir::new().unwrap();
    tlctl(&dir.path().join("config.toml"))
        .args(["script", "toggle", "--duration", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Timeline rejected"));
}

#[test]
fn script_uses_config_file_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, PAUSED_TENTH_CONFIG).unwrap();

    let output = tlctl(&path).args(["script", "advance 1"]).output().unwrap();
    assert!(output.status.success());
    let json = snapshot_json(&output.stdout);
    assert_eq!(json["rate"], 0.1);
    assert_eq!(json["playing"], false);
    assert_eq!(json["progress"], 0.0);
}

#[test]
fn playing_flag_overrides_paused_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, PAUSED_TENTH_CONFIG).unwrap();

    let output = tlctl(&path)
        .args(["script", "advance 1", "--playing"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = snapshot_json(&output.stdout);
    assert_eq!(json["playing"], true);
    assert!((json["progress"].as_f64().unwrap() - 0.01).abs() < 1e-9);
}

#[test]
fn script_trace_prints_one_line_per_written_step() {
    let dir = TempDir::new().unwrap();
    let output = tlctl(&dir.path().join("config.toml"))
        .args(["script", "scrub 0.4; advance 1", "--trace"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(first["progress"], 0.4);
    assert_eq!(first["scrubbing"], false);
}

// ============================================================================
// Config Command Tests
// ============================================================================

#[test]
fn config_show_prints_sections() {
    let dir = TempDir::new().unwrap();
    tlctl(&dir.path().join("config.toml"))
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("[timeline]"));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    tlctl(&path).args(["config", "init"]).assert().success();
    assert!(path.exists());

    tlctl(&path)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    tlctl(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_path_prints_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    tlctl(&path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn version_flag_prints_version() {
    let dir = TempDir::new().unwrap();
    tlctl(&dir.path().join("config.toml"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn script_help_lists_steps() {
    let dir = TempDir::new().unwrap();
    tlctl(&dir.path().join("config.toml"))
        .args(["script", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scrub-end"));
}
