//! Integration tests for the snipcheck binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const X_ONLY: &str = "// [START x]\nfoo()\n// [END x]\n";
const X_AND_Y: &str = "// [START x]\n// [END x]\n// [START y]\n// [END y]\n";

fn setup_project(files: &[(&str, &str)]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = temp.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    temp
}

fn snipcheck(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("snipcheck"));
    cmd.current_dir(temp.path());
    cmd.env_remove("SNIPCHECK_PRIMARY_EXT")
        .env_remove("SNIPCHECK_SECONDARY_EXT")
        .env_remove("SNIPCHECK_SOURCE_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("snipcheck"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("snippet regions"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("snipcheck"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_matching_pair_prints_success() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[
        ("storage/app/src/java/StorageActivity.java", X_ONLY),
        ("storage/app/src/kotlin/StorageActivity.kt", X_ONLY),
    ]);
    let expected = format!(
        "Checking snippets in folder: {}\nSUCCESS: StorageActivity.java <--> StorageActivity.kt\nDone\n",
        std::path::Path::new(".").join("storage/app/src").display()
    );

    snipcheck(&temp).assert().success().stdout(expected);
    Ok(())
}

#[test]
fn cli_check_subcommand_matches_default() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/A.java", X_ONLY), ("src/A.kt", X_ONLY)]);
    let default_out = snipcheck(&temp).output()?;
    let check_out = snipcheck(&temp).arg("check").output()?;

    assert!(default_out.status.success());
    assert_eq!(default_out.stdout, check_out.stdout);
    Ok(())
}

#[test]
fn cli_missing_secondary_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("app/src/UploadActivity.java", X_ONLY)]);
    snipcheck(&temp)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Checking snippets in folder:"))
        .stdout(predicate::str::contains("Done").not())
        .stderr(predicate::str::contains(
            "ERROR: Missing .kt file for .java file UploadActivity.java",
        ));
    Ok(())
}

#[test]
fn cli_region_mismatch_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/A.java", X_AND_Y), ("src/A.kt", X_ONLY)]);
    snipcheck(&temp).assert().code(1).stderr(predicate::str::contains(
        "ERROR: The following snippets are missing from A.kt: {y}",
    ));
    Ok(())
}

#[test]
fn cli_unclosed_region_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[
        ("src/A.java", X_ONLY),
        ("src/A.kt", "// [START x]\n// [END x]\n// [START z]\n"),
    ]);
    snipcheck(&temp)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("are missing END tags: {z}"))
        .stderr(predicate::str::contains("A.kt"));
    Ok(())
}

#[test]
fn cli_primary_without_markers_needs_no_secondary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/Plain.java", "class Plain {}\n")]);
    snipcheck(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS").not())
        .stdout(predicate::str::contains("Done"));
    Ok(())
}

#[test]
fn cli_no_source_folders_prints_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("lib/A.java", X_ONLY)]);
    snipcheck(&temp).assert().success().stdout("");
    Ok(())
}

#[test]
fn cli_quiet_suppresses_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/A.java", X_ONLY), ("src/A.kt", X_ONLY)]);
    snipcheck(&temp).arg("--quiet").assert().success().stdout("");
    Ok(())
}

#[test]
fn cli_project_flag_overrides_cwd() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/A.java", X_ONLY), ("src/A.kt", X_ONLY)]);
    let mut cmd = Command::new(cargo_bin("snipcheck"));
    cmd.arg("--project").arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: A.java <--> A.kt"));
    Ok(())
}

#[test]
fn cli_missing_project_exits_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("snipcheck"));
    cmd.arg("--project").arg(temp.path().join("absent"));
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("ERROR: Failed to walk"));
    Ok(())
}

#[test]
fn cli_custom_extensions_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/View.m", X_ONLY), ("src/View.swift", X_ONLY)]);
    snipcheck(&temp)
        .env("SNIPCHECK_PRIMARY_EXT", "m")
        .env("SNIPCHECK_SECONDARY_EXT", "swift")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: View.m <--> View.swift"));
    Ok(())
}

#[test]
fn cli_custom_extensions_from_env_with_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/View.m", X_ONLY), ("src/View.swift", X_ONLY)]);
    snipcheck(&temp)
        .arg("check")
        .env("SNIPCHECK_PRIMARY_EXT", "m")
        .env("SNIPCHECK_SECONDARY_EXT", "swift")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: View.m <--> View.swift"));
    Ok(())
}

#[test]
fn cli_source_dir_from_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("Sources/A.java", X_ONLY), ("Sources/A.kt", X_ONLY)]);
    snipcheck(&temp)
        .env("SNIPCHECK_SOURCE_DIR", "Sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: A.java <--> A.kt"));
    Ok(())
}

#[test]
fn cli_source_dir_flag_without_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("Sources/A.java", X_ONLY), ("Sources/A.kt", X_ONLY)]);
    snipcheck(&temp)
        .args(["--source-dir", "Sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: A.java <--> A.kt"));
    Ok(())
}

#[test]
fn cli_flag_overrides_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/A.java", X_ONLY), ("src/A.kt", X_ONLY)]);
    snipcheck(&temp)
        .env("SNIPCHECK_PRIMARY_EXT", "m")
        .args(["--primary-ext", "java"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: A.java <--> A.kt"));
    Ok(())
}

#[test]
fn cli_shallow_secondary_file_wins() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[
        ("src/Upload.java", X_ONLY),
        ("src/Upload.kt", X_ONLY),
        ("src/A/Upload.kt", ""),
    ]);
    snipcheck(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: Upload.java <--> Upload.kt"));
    Ok(())
}

#[test]
fn cli_custom_source_dir_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("Sources/A.java", X_ONLY), ("Sources/A.kt", X_ONLY)]);
    snipcheck(&temp)
        .args(["check", "--source-dir", "Sources"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SUCCESS: A.java <--> A.kt"));
    Ok(())
}

#[test]
fn cli_runs_are_idempotent() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[
        ("a/src/One.java", X_ONLY),
        ("a/src/One.kt", X_ONLY),
        ("b/src/Two.java", X_AND_Y),
        ("b/src/kotlin/Two.kt", X_AND_Y),
    ]);
    let first = snipcheck(&temp).output()?;
    let second = snipcheck(&temp).output()?;

    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    Ok(())
}

#[test]
fn cli_debug_logs_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&[("src/A.java", X_ONLY), ("src/A.kt", X_ONLY)]);
    snipcheck(&temp)
        .arg("--debug")
        .assert()
        .success()
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("snipcheck"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("snipcheck"));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("snipcheck"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}
