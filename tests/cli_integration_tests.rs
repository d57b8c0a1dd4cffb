mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn complete_scaffold_exits_success() {
    let fixture = TestFixture::complete();

    scaffold_audit!()
        .arg(fixture.path())
        .arg("--no-external")
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("AUDIT SUMMARY"))
        .stdout(predicate::str::contains("❌ Failed: 0"))
        .stdout(predicate::str::contains("All validation checks passed!"));
}

#[test]
fn empty_project_exits_with_failure_code() {
    let fixture = TestFixture::new();

    scaffold_audit!()
        .arg(fixture.path())
        .arg("--no-external")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Project Structure: FAILED"))
        .stdout(predicate::str::contains("Some validation checks failed"));
}

#[test]
fn runs_against_current_directory_without_flags() {
    let fixture = TestFixture::complete();
    fixture.create_config("[compose]\nvalidator = []\n");

    scaffold_audit!()
        .current_dir(fixture.path())
        .assert()
        .success();
    assert_eq!(fixture.json_report()["failed_checks"], 0);
}

#[test]
fn progress_lists_every_check_in_order() {
    let fixture = TestFixture::complete();

    let output = scaffold_audit!()
        .arg(fixture.path())
        .arg("--no-external")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let positions: Vec<usize> = [
        "Checking Project Structure...",
        "Checking Python Dependencies...",
        "Checking Docker Compose Files...",
        "Checking YAML Configurations...",
        "Checking Python Syntax...",
        "Checking Required Files...",
        "Checking Script Permissions...",
    ]
    .iter()
    .map(|needle| stdout.find(needle).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn quiet_mode_prints_only_status() {
    let fixture = TestFixture::complete();

    scaffold_audit!()
        .arg(fixture.path())
        .arg("--no-external")
        .arg("--quiet")
        .arg("--color")
        .arg("never")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking").not())
        .stdout(predicate::str::contains("All validation checks passed!"));
}

#[test]
fn missing_root_is_config_error() {
    let fixture = TestFixture::new();

    scaffold_audit!()
        .arg(fixture.path().join("absent"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Project root is not a directory"));
}

#[test]
fn invalid_config_file_is_config_error() {
    let fixture = TestFixture::complete();
    fixture.create_config("[compose\ntimeout_secs = ");

    scaffold_audit!()
        .arg(fixture.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn no_config_ignores_project_config() {
    let fixture = TestFixture::complete();
    fixture.create_config("[compose\ntimeout_secs = ");

    scaffold_audit!()
        .arg(fixture.path())
        .arg("--no-config")
        .arg("--no-external")
        .assert()
        .success();
}

#[test]
fn explicit_config_path_is_used() {
    let fixture = TestFixture::new();
    fixture.create_dir("src");
    fixture.create_file(
        "audit.toml",
        r#"
[structure]
required_dirs = ["src"]

[dependencies]
mode = "text"
required = []
manifest = "audit.toml"

[compose]
files = []

[configs]
files = []

[required_files]
files = ["audit.toml"]
"#,
    );

    scaffold_audit!()
        .arg(fixture.path())
        .arg("--config")
        .arg(fixture.path().join("audit.toml"))
        .assert()
        .success();
}

#[test]
fn help_lists_exit_codes() {
    scaffold_audit!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit codes"));
}
