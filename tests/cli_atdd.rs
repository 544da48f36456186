#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn gradecalc(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gradecalc").expect("binary should compile");
    cmd.env("HOME", dir).env_remove("RUST_LOG").arg("-C").arg(dir);
    cmd
}

fn stored_inputs(dir: &Path) -> Value {
    let content = fs::read_to_string(dir.join(".gradecalc/store.json"))
        .expect("store file should be readable");
    let outer: Value = serde_json::from_str(&content).expect("store should be json");
    let snapshot = outer["gradecalc-inputs"]
        .as_str()
        .expect("inputs should be stored as a string");
    let snapshot: Value = serde_json::from_str(snapshot).expect("snapshot should be json");
    snapshot["inputs"].clone()
}

#[test]
fn compute_single_module_drives_overall() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args(["compute", "--set", "tql-controle=15", "--set", "tql-td=10"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- tql (coef 2): 13.00"))
        .stdout(predicate::str::contains("- gpl (coef 2): -"))
        .stdout(predicate::str::contains("overall average: 13.00"))
        .stdout(predicate::str::contains("total coefficient: 2"));
}

#[test]
fn compute_weights_modules_by_coefficient() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args([
            "compute",
            "--set",
            "tql-controle=15",
            "--set",
            "tql-td=10",
            "--set",
            "gl2-controle=18",
            "--set",
            "gl2-td=16",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- gl2 (coef 4): 17.20"))
        .stdout(predicate::str::contains("overall average: 15.80"))
        .stdout(predicate::str::contains("total coefficient: 6"));
}

#[test]
fn compute_excludes_partially_entered_module() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args(["compute", "--set", "tql-controle=15", "--set", "tql-td="])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- tql (coef 2): -"))
        .stdout(predicate::str::contains("overall average: -"))
        .stdout(predicate::str::contains("total coefficient: -"));
}

#[test]
fn compute_flags_over_scale_and_negative_marks() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args([
            "compute",
            "--set",
            "daw-controle=25",
            "--set",
            "daw-tp=10",
            "--set",
            "dac-controle=-5",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("- ! daw-controle: corrected to 20"))
        .stdout(predicate::str::contains("- ! dac-controle: ignored"))
        .stdout(predicate::str::contains("- daw (coef 1): 16.00"));
}

#[test]
fn compute_rejects_unknown_field() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args(["compute", "--set", "tql-tp=12"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown field: tql-tp"));
}

#[test]
fn compute_never_writes_storage() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args(["compute", "--set", "tql-controle=15"])
        .assert()
        .code(0);
    assert!(!dir.path().join(".gradecalc/store.json").exists());
}

#[test]
fn compute_json_output_parses() {
    let dir = TempDir::new().expect("temp dir should be created");
    let output = gradecalc(dir.path())
        .args([
            "compute",
            "--format",
            "json",
            "--set",
            "tabd-controle=12",
            "--set",
            "tabd-td=14",
        ])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    let modules = value["modules"].as_array().expect("modules should be an array");
    assert_eq!(modules.len(), 6);
    assert_eq!(modules[5]["name"], "tabd");
    assert_eq!(modules[5]["display"], "12.80");
    assert_eq!(value["overall"]["total_display"], "2");
    assert_eq!(value["invalid_fields"].as_array().map(Vec::len), Some(0));
}

#[test]
fn set_persists_inputs_for_show() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args(["set", "tql-controle=15", "tql-td=10"])
        .assert()
        .code(0);

    assert_eq!(stored_inputs(dir.path())["tql-controle"], "15");

    gradecalc(dir.path())
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("overall average: 13.00"));
}

#[test]
fn set_stores_corrected_text_for_over_scale() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args(["set", "gl2-controle=25", "gl2-td=-5"])
        .assert()
        .code(1);

    let inputs = stored_inputs(dir.path());
    assert_eq!(inputs["gl2-controle"], "20");
    assert_eq!(inputs["gl2-td"], "-5");
}

#[test]
fn reset_clears_saved_inputs() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args(["set", "tql-controle=15", "tql-td=10"])
        .assert()
        .code(0);
    gradecalc(dir.path())
        .arg("reset")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("overall average: -"));
    gradecalc(dir.path())
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("- tql (coef 2): -"))
        .stdout(predicate::str::contains("total coefficient: -"));
}

#[test]
fn no_store_flag_disables_persistence() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .args(["--no-store", "set", "tql-controle=15", "tql-td=10"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("overall average: 13.00"));
    assert!(!dir.path().join(".gradecalc/store.json").exists());
}

#[test]
fn config_can_disable_storage_and_select_json() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(
        dir.path().join("gradecalc.toml"),
        r#"
[storage]
enabled = false

[output]
format = "json"
"#,
    )
    .expect("config should write");

    let output = gradecalc(dir.path())
        .args(["set", "daw-controle=10", "daw-tp=10"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(value["overall"]["display"], "10.00");
    assert!(!dir.path().join(".gradecalc/store.json").exists());
}

#[test]
fn malformed_config_is_a_runtime_failure() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::write(dir.path().join("gradecalc.toml"), "[storage\n").expect("config should write");
    gradecalc(dir.path())
        .arg("show")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config parse error"));
}

#[test]
fn corrupt_store_is_ignored() {
    let dir = TempDir::new().expect("temp dir should be created");
    fs::create_dir_all(dir.path().join(".gradecalc")).expect("store dir should create");
    fs::write(dir.path().join(".gradecalc/store.json"), "garbage").expect("store should write");
    gradecalc(dir.path())
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("overall average: -"));
}

#[test]
fn theme_defaults_to_dark_and_toggles() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .arg("theme")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("theme: dark"));
    gradecalc(dir.path())
        .args(["theme", "toggle"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("theme: light"));
    gradecalc(dir.path())
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Theme: light"));
}

#[test]
fn session_recomputes_per_line_and_saves_on_exit() {
    let dir = TempDir::new().expect("temp dir should be created");
    gradecalc(dir.path())
        .arg("session")
        .write_stdin("tql-controle=15\ntql-td=10\nbogus-field=3\nquit\n")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("tql=13.00"))
        .stdout(predicate::str::contains("overall=13.00 coef=2"))
        .stdout(predicate::str::contains("error: unknown field: bogus-field"));

    gradecalc(dir.path())
        .arg("show")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("overall average: 13.00"));
}
