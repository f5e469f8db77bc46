use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn render_nb(current_dir: &Path) -> Command {
    let mut command = Command::cargo_bin("render-nb").expect("binary should be built");
    command.current_dir(current_dir).args(["--log-locally", "--log-file", ""]);
    command
}

fn create_notebooks(root: &Path, directory: &str, names: &[&str]) {
    let dir = root.join("rail/examples").join(directory);
    fs::create_dir_all(&dir).unwrap();
    for name in names {
        fs::write(dir.join(name), "{}").unwrap();
    }
}

#[test]
fn test_missing_category_is_a_usage_error() {
    let temp_dir = tempdir().unwrap();

    Command::cargo_bin("render-nb")
        .unwrap()
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("<category>"));
}

#[test]
fn test_invalid_category_fails_with_message() {
    let temp_dir = tempdir().unwrap();

    render_nb(temp_dir.path())
        .arg("tutorial")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid notebook group given: 'tutorial'"))
        .stdout(predicate::str::contains("'goldenspike'"));

    assert!(!temp_dir.path().join("docs").exists());
}

#[test]
fn test_empty_category_succeeds() {
    let temp_dir = tempdir().unwrap();
    create_notebooks(temp_dir.path(), "core_examples", &[]);

    render_nb(temp_dir.path())
        .arg("core")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notebooks found for 'core'"));
}

#[test]
fn test_dry_run_lists_conversions() {
    let temp_dir = tempdir().unwrap();
    create_notebooks(temp_dir.path(), "creation_examples", &["degrade.ipynb"]);

    render_nb(temp_dir.path())
        .args(["creation", "--dry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("degrade.ipynb"))
        .stdout(predicate::str::contains("creation_examples/degrade.rst"));

    assert!(!temp_dir.path().join("docs").exists());
}

#[cfg(unix)]
#[test]
fn test_successful_converter() {
    let temp_dir = tempdir().unwrap();
    create_notebooks(temp_dir.path(), "core_examples", &["a.ipynb", "b.ipynb"]);
    fs::write(
        temp_dir.path().join("render.yaml"),
        "converter:\n  program: \"true\"\n  subcommand: null\n",
    )
    .unwrap();

    render_nb(temp_dir.path())
        .arg("core")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendered 2 of 2 notebooks for 'core'"));

    assert!(temp_dir.path().join("docs/rendered/core_examples").is_dir());
}

#[cfg(unix)]
#[test]
fn test_failing_converter_lists_failed_notebooks() {
    let temp_dir = tempdir().unwrap();
    create_notebooks(temp_dir.path(), "evaluation_examples", &["metrics.ipynb"]);
    fs::write(
        temp_dir.path().join("custom.yaml"),
        "converter:\n  program: \"false\"\n  subcommand: null\n",
    )
    .unwrap();

    render_nb(temp_dir.path())
        .args(["evaluation", "--config", "custom.yaml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("metrics.ipynb 1"))
        .stdout(predicate::str::contains("The following notebooks failed"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_invalid_category_writes_no_log_file() {
    let temp_dir = tempdir().unwrap();
    let config_home = temp_dir.path().join("config-home");

    Command::cargo_bin("render-nb")
        .unwrap()
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", &config_home)
        .arg("tutorial")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid notebook group given: 'tutorial'"));

    assert!(!config_home.exists());
}

#[cfg(target_os = "linux")]
#[test]
fn test_valid_category_logs_to_config_directory() {
    let temp_dir = tempdir().unwrap();
    let config_home = temp_dir.path().join("config-home");
    create_notebooks(temp_dir.path(), "core_examples", &[]);

    Command::cargo_bin("render-nb")
        .unwrap()
        .current_dir(temp_dir.path())
        .env("HOME", temp_dir.path())
        .env("XDG_CONFIG_HOME", &config_home)
        .arg("core")
        .assert()
        .success();

    assert!(config_home.join("nb_render/render-nb.log").is_file());
}
