//! Integration tests that run the CLI binary.

use std::process::Command;

const TOKEN_VARS: [&str; 4] = [
    "DEEPSEEK_API_TOKEN",
    "DEEPSEEK_TOKEN",
    "DEEPSEEK_API_KEY",
    "OPENAI_API_KEY",
];

/// Binary with no token in its environment, run from an empty directory
/// so dotenv() cannot pick up a `.env` file
fn bin(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_dsbc"));
    cmd.current_dir(dir.path());
    for var in TOKEN_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("LOG_FORMAT");
    cmd
}

#[test]
fn cli_help_lists_environment_variables() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(&tmp).arg("--help").output().expect("run dsbc");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    for var in TOKEN_VARS {
        assert!(stdout.contains(var), "help should mention {}", var);
    }
    assert!(stdout.contains("--token"));
}

#[test]
fn cli_version_succeeds() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(&tmp).arg("--version").output().expect("run dsbc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("dsbc"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn cli_without_token_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(&tmp).output().expect("run dsbc");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: No API token provided"));
    assert!(stderr.contains("DEEPSEEK_API_TOKEN"));
}

#[test]
fn cli_health_without_token_exits_with_error() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(&tmp).args(["--health", "--json"]).output().expect("run dsbc");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn cli_reversed_usage_range_rejected() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin(&tmp)
        .args([
            "--token",
            "sk-test",
            "--usage",
            "--start-date",
            "2024-02-01",
            "--end-date",
            "2024-01-01",
        ])
        .output()
        .expect("run dsbc");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid configuration"));
    assert!(stderr.contains("after end date"));
}
