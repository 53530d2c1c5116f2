// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the command-line surface.
//!
//! Parses realistic argument patterns and runs the built binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use clap::Parser;
use cmm::cli::Cli;
use tempfile::TempDir;

fn cmm(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cmm"))
        .current_dir(cwd)
        .args(args)
        .env_remove("CMM_GENERATOR__CMAKE_MINIMUM_REQUIRED")
        .env_remove("CMM_LOG__LEVEL")
        .output()
        .unwrap()
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_positional_and_version_override() {
    let cli = Cli::try_parse_from(["cmm", "-m", "3.10", "src"]).unwrap();
    assert_eq!(cli.generate.solution_dir(), Some(&PathBuf::from("src")));
    assert_eq!(cli.generate.cmake_minimum_required.as_deref(), Some("3.10"));
}

#[test]
fn cli_help_is_an_error_result() {
    let err = Cli::try_parse_from(["cmm", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn binary_reports_missing_solution_dir() {
    let temp = TempDir::new().unwrap();
    let output = cmm(temp.path(), &["--no-default-config"]);

    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Argument Error: parameter solution_dir was not set.\n"
    );
}

#[test]
fn binary_is_silent_on_success() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "cmm.json", r#"{"name":"Demo"}"#);
    write(temp.path(), "App/cmm.json", r#"{"name":"App"}"#);
    write(temp.path(), "App/main.cpp", "");

    let output = cmm(temp.path(), &["--no-default-config", "."]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
    assert!(temp.path().join("CMakeLists.txt").is_file());
    assert!(temp.path().join("App/CMakeLists.txt").is_file());
}

#[test]
fn binary_applies_minimum_version() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "cmm.json", r#"{"name":"Demo"}"#);

    let output = cmm(
        temp.path(),
        &["--no-default-config", "-m", "3.16", "--solution-dir", "."],
    );

    assert!(output.status.success());
    let text = std::fs::read_to_string(temp.path().join("CMakeLists.txt")).unwrap();
    assert!(text.starts_with("cmake_minimum_required(VERSION 3.16)"));
}

#[test]
fn binary_reads_cmm_toml_from_cwd() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "cmm.json", r#"{"name":"Demo"}"#);
    write(
        temp.path(),
        "cmm.toml",
        "[generator]\ncmake_minimum_required = \"3.25\"\nline_ending = \"lf\"\n",
    );

    let output = cmm(temp.path(), &["."]);

    assert!(output.status.success());
    let text = std::fs::read_to_string(temp.path().join("CMakeLists.txt")).unwrap();
    assert!(text.starts_with("cmake_minimum_required(VERSION 3.25)\nproject(\"Demo\" VERSION 0.1 LANGUAGES CXX)"));
}

#[test]
fn binary_dump_prints_configuration() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "cmm.json", r#"{"name":"Demo"}"#);
    write(temp.path(), "App/cmm.json", r#"{"name":"App","type":"static-library"}"#);

    let output = cmm(temp.path(), &["--no-default-config", "--dry", "--dump", "."]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["solution"]["name"], "Demo");
    assert_eq!(json["projects"]["App"]["type"], "static-library");
    assert_eq!(json["projects"]["App"]["target_filename"], "App.lib");
    assert!(!temp.path().join("CMakeLists.txt").exists());
}

#[test]
fn binary_fails_on_missing_config_file() {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "cmm.json", r#"{"name":"Demo"}"#);

    let output = cmm(
        temp.path(),
        &["--no-default-config", "--config", "absent.toml", "."],
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("config file not found"));
    assert!(!temp.path().join("CMakeLists.txt").exists());
}
