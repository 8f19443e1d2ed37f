//! Integration tests for CLI argument handling
//!
//! Runs the binary in `--print` mode, which never touches the terminal and,
//! without a topic or credentials, never touches the network.

use std::process::Command;
use tempfile::TempDir;

/// Helper to run the CLI with given args in an isolated environment
fn run_cli(args: &[&str]) -> std::process::Output {
    let work_dir = TempDir::new().expect("Failed to create temp directory");
    let config_path = work_dir.path().join("absent.toml");

    Command::new(env!("CARGO_BIN_EXE_coursefinder"))
        .args(args)
        .arg("--config")
        .arg(&config_path)
        .current_dir(work_dir.path())
        .env_remove("GOOGLE_API_KEY")
        .env_remove("GOOGLE_CX")
        .output()
        .expect("Failed to execute coursefinder")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("coursefinder"), "Help should mention coursefinder");
    assert!(stdout.contains("--roadmap"), "Help should mention --roadmap flag");
    assert!(stdout.contains("--print"), "Help should mention --print flag");
}

#[test]
fn test_print_without_route_shows_roadmap_prompt() {
    let output = run_cli(&["--print", "--no-cache"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please create a Roadmap first"));
}

#[test]
fn test_print_topic_without_roadmap_shows_prompt() {
    let output = run_cli(&["topic", "--print", "--no-cache"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please create a Roadmap first"));
    assert!(!stdout.contains("Courses Related to"));
}

#[test]
fn test_print_unknown_route_shows_prompt() {
    let output = run_cli(&["settings", "--print", "--no-cache"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Please create a Roadmap first"));
}

#[test]
fn test_print_ai_without_credentials_fails() {
    let output = run_cli(&["ai", "--print", "--no-cache"]);
    assert!(!output.status.success(), "Missing credentials should fail");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Missing configuration"),
        "Should report missing configuration: {}",
        stderr
    );
}

#[test]
fn test_missing_roadmap_file_prints_error_and_exits() {
    let output = run_cli(&["topic", "--print", "--roadmap-file", "/nonexistent/roadmap.json"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("roadmap"), "Should mention the roadmap file: {}", stderr);
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use coursefinder::cli::{Cli, StartupConfig};
    use coursefinder::topic::{resolve_topic, RoadmapContext};

    #[test]
    fn test_cli_route_is_optional() {
        let cli = Cli::parse_from(["coursefinder"]);
        assert!(cli.route.is_none());
    }

    #[test]
    fn test_startup_config_carries_route_and_roadmap() {
        let cli = Cli::parse_from(["coursefinder", "topic", "--roadmap", "Data Science"]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert_eq!(config.route.as_deref(), Some("topic"));
        assert_eq!(config.roadmap.roadmap_name(), Some("Data Science"));

        let resolution = resolve_topic(config.route.as_deref(), &config.roadmap);
        assert_eq!(resolution.topic, "Data Science");
    }

    #[test]
    fn test_ai_route_ignores_roadmap_flag() {
        let cli = Cli::parse_from(["coursefinder", "ai", "--roadmap", "Data Science"]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        let resolution = resolve_topic(config.route.as_deref(), &config.roadmap);
        assert_eq!(resolution.topic, "AI");
    }

    #[test]
    fn test_no_cache_flag() {
        let cli = Cli::parse_from(["coursefinder", "--no-cache"]);
        assert!(cli.no_cache);
    }
}
