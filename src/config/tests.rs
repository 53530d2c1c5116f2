// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::RunConfig;
use super::loader::ConfigLoader;
use super::types::LineEnding;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = RunConfig::default();
    assert_eq!(config.generator.cmake_minimum_required, "3.5");
    assert_eq!(config.generator.output_filename, "CMakeLists.txt");
    assert_eq!(config.generator.sources_variable, "PROJECT_SOURCES");
    assert_eq!(config.generator.line_ending, LineEnding::Native);
    assert_eq!(config.discovery.descriptor_filename, "cmm.json");
    assert!(config.discovery.follow_links);
    assert_eq!(config.log.level, LogLevel::WARN);
    assert_eq!(config.log.file, PathBuf::new());
}

#[test]
fn test_parse_partial_sections() {
    let toml = r#"
[generator]
cmake_minimum_required = "3.16"
line_ending = "crlf"

[discovery]
descriptor_filename = "project.json"
"#;
    let config = RunConfig::parse(toml).unwrap();
    assert_eq!(config.generator.cmake_minimum_required, "3.16");
    assert_eq!(config.generator.line_ending, LineEnding::Crlf);
    assert_eq!(config.generator.output_filename, "CMakeLists.txt");
    assert_eq!(config.discovery.descriptor_filename, "project.json");
    assert!(config.discovery.follow_links);
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let toml = r#"
[generator]
cmake_version = "3.16"
"#;
    assert!(RunConfig::parse(toml).is_err());
}

#[test]
fn test_parse_rejects_empty_filename() {
    let toml = r#"
[discovery]
descriptor_filename = ""
"#;
    let err = RunConfig::parse(toml).unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'descriptor_filename' in section '[discovery]': must not be empty"
    );
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    let toml = "
[log]
level = 9
";
    assert!(RunConfig::parse(toml).is_err());
}

#[test]
fn test_override_beats_file() {
    let config = ConfigLoader::new()
        .add_toml_str("[generator]\ncmake_minimum_required = \"3.10\"\n")
        .set("generator.cmake_minimum_required", "3.20")
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(config.generator.cmake_minimum_required, "3.20");
}

#[test]
fn test_missing_required_file() {
    let temp = tempfile::tempdir().unwrap();
    let err = ConfigLoader::new()
        .add_toml_file(temp.path().join("absent.toml"))
        .build()
        .unwrap_err();
    assert!(err.to_string().starts_with("config file not found:"));
}

#[test]
fn test_from_file_and_loaded_files() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("cmm.toml");
    std::fs::write(&path, "[log]\nlevel = 4\n").unwrap();

    let config = RunConfig::from_file(&path).unwrap();
    assert_eq!(config.log.level, LogLevel::DEBUG);

    let loader = ConfigLoader::new()
        .add_toml_file(&path)
        .add_toml_file_optional(temp.path().join("absent.toml"));
    assert_eq!(
        loader.format_loaded_files(),
        vec![format!("1. [file] {}", path.display())]
    );
}

#[test]
fn test_line_ending_parse_and_display() {
    assert_eq!("LF".parse::<LineEnding>().unwrap(), LineEnding::Lf);
    assert_eq!("crlf".parse::<LineEnding>().unwrap().as_str(), "\r\n");
    assert_eq!(LineEnding::Native.to_string(), "native");
    assert!("unix".parse::<LineEnding>().is_err());
}
