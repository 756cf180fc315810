/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("resolved/batches.yml"))
            .assert()
            .code(0);
    }

    /// Exit code 0: unresolved dependencies without --fail-on-unresolved
    #[test]
    fn test_exit_code_unresolved_not_checked() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("unresolved/batches.yml"))
            .assert()
            .code(0);
    }

    /// Exit code 1: unresolved dependencies with --fail-on-unresolved
    #[test]
    fn test_exit_code_unresolved_dependencies() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("unresolved/batches.yml"))
            .arg("--fail-on-unresolved")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unresolved dependencies found"));
    }

    /// Exit code 0: --fail-on-unresolved only looks at the rendered target
    #[test]
    fn test_exit_code_unresolved_in_other_target() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("unresolved/batches.yml"))
            .args(["--fail-on-unresolved", "-t", "net8.0"])
            .assert()
            .code(0);
    }

    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("depsnap").arg("--help").assert().code(0);
    }

    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("depsnap").arg("--version").assert().code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("depsnap")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing script
    #[test]
    fn test_exit_code_missing_script_argument() {
        cargo_bin_cmd!("depsnap").assert().code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("resolved/batches.yml"))
            .args(["-f", "markdown"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - script does not exist
    #[test]
    fn test_exit_code_nonexistent_script() {
        cargo_bin_cmd!("depsnap")
            .arg("/nonexistent/batches.yml")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read file"));
    }

    /// Exit code 3: Application error - malformed script
    #[test]
    fn test_exit_code_malformed_script() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("malformed.yml"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse batch script"));
    }

    /// Exit code 3: Application error - unknown --target
    #[test]
    fn test_exit_code_unknown_target() {
        cargo_bin_cmd!("depsnap")
            .arg(fixture("resolved/batches.yml"))
            .args(["-t", "net9.0"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unknown target framework: net9.0"));
    }
}

#[test]
fn test_e2e_text_output() {
    cargo_bin_cmd!("depsnap")
        .arg(fixture("resolved/batches.yml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WebApp (/src/WebApp/WebApp.csproj)"))
        .stdout(predicate::str::contains(
            "net8.0 (.NETCoreApp,Version=v8.0) v2 - 3 dependencies, 0 unresolved, last build succeeded",
        ))
        .stdout(predicate::str::contains("├── Microsoft.NETCore.App [sdk] (implicit)"))
        .stdout(predicate::str::contains("└── Serilog 3.1.1 [package]"))
        .stdout(predicate::str::contains("    └── Serilog.Sinks.Console/5.0.0 [package]"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_e2e_text_output_marks_unresolved() {
    cargo_bin_cmd!("depsnap")
        .arg(fixture("unresolved/batches.yml"))
        .arg("--no-color")
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠ Contoso.Client [package]"))
        .stdout(predicate::str::contains("⚠ Contoso.Missing/1.0.0 [package]"))
        .stdout(predicate::str::contains("└── Newtonsoft.Json [package]"));
}

#[test]
fn test_e2e_json_format() {
    let output = cargo_bin_cmd!("depsnap")
        .arg(fixture("unresolved/batches.yml"))
        .args(["-f", "json", "-q"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["tool"]["name"], "depsnap");
    assert_eq!(json["project"]["display_name"], "Legacy");
    let targets = json["targets"].as_array().unwrap();
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0]["short_name"], "net8.0");
    assert_eq!(targets[1]["unresolved_count"], 1);

    let client = &targets[1]["dependencies"][0];
    assert_eq!(client["resolved"], true);
    assert_eq!(client["show_as_resolved"], false);
    assert_eq!(client["children"][0]["caption"], "Contoso.Missing/1.0.0");
}

#[test]
fn test_e2e_json_script() {
    cargo_bin_cmd!("depsnap")
        .arg(fixture("resolved/batches.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Lib [project]"));
}

#[test]
fn test_e2e_output_file() {
    let dir = TempDir::new().unwrap();
    let output_path = dir.path().join("snapshot.json");

    cargo_bin_cmd!("depsnap")
        .arg(fixture("resolved/batches.yml"))
        .args(["-f", "json", "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Output complete"));

    let content = std::fs::read_to_string(&output_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["targets"][0]["version"], 2);
}

#[test]
fn test_e2e_progress_goes_to_stderr() {
    cargo_bin_cmd!("depsnap")
        .arg(fixture("resolved/batches.yml"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Loading batch script"))
        .stderr(predicate::str::contains("Replayed 2 batch(es)"))
        .stdout(predicate::str::contains("Loading batch script").not());
}

#[test]
fn test_e2e_quiet() {
    cargo_bin_cmd!("depsnap")
        .arg(fixture("resolved/batches.yml"))
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
