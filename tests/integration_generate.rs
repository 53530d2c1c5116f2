// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the generate pipeline.
//!
//! Builds descriptor trees on disk and checks the scripts written next to them.

use std::path::Path;

use cmm::cmd::generate::{GenerateOptions, run_generate_command};
use cmm::config::RunConfig;
use cmm::config::types::LineEnding;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn read(root: &Path, relative: &str) -> String {
    std::fs::read_to_string(root.join(relative)).unwrap()
}

fn config() -> RunConfig {
    let mut config = RunConfig::default();
    config.generator.line_ending = LineEnding::Lf;
    config
}

fn generate(root: &Path) {
    run_generate_command(root, &config(), GenerateOptions::default()).unwrap();
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn generate_single_console_application() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "cmm.json", r#"{"name":"Demo"}"#);
    write(root, "App/cmm.json", r#"{"name":"App","type":"console-application"}"#);
    write(root, "App/main.cpp", "int main() {}\n");

    generate(root);

    insta::assert_snapshot!(read(root, "App/CMakeLists.txt"), @r#"
    cmake_minimum_required(VERSION 3.5)
    project("App" LANGUAGES CXX)
    set(CMAKE_INCLUDE_CURRENT_DIR ON)
    set(CMAKE_CXX_STANDARD 11)
    set(CMAKE_CXX_STANDARD_REQUIRED ON)
    set(PROJECT_SOURCES
    main.cpp
    )
    add_executable("App" ${PROJECT_SOURCES})
    source_group("" FILES main.cpp)
    "#);

    let solution = read(root, "CMakeLists.txt");
    assert!(solution.contains("add_subdirectory(\"App\")"));
    assert!(!solution.contains("add_dependencies"));
}

#[test]
fn generate_cxx_standard_17() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "cmm.json", r#"{"name":"Demo"}"#);
    write(root, "App/cmm.json", r#"{"name":"App","cxx_standard":17}"#);

    generate(root);

    let project = read(root, "App/CMakeLists.txt");
    assert!(project.contains("set(CMAKE_CXX_STANDARD 17)"));
    assert!(!project.contains("set(CMAKE_CXX_STANDARD 11)"));
}

#[test]
fn generate_internal_library_dependency() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "cmm.json", r#"{"name":"Demo","output_directory":"bin"}"#);
    write(
        root,
        "A/cmm.json",
        r#"{"name":"A","type":"console-application","internal_libraries":["B"]}"#,
    );
    write(root, "A/main.cpp", "");
    write(root, "B/cmm.json", r#"{"name":"B","type":"static-library"}"#);
    write(root, "B/src/b.cpp", "");
    write(root, "B/include/b.h", "");

    generate(root);

    insta::assert_snapshot!(read(root, "A/CMakeLists.txt"), @r#"
    cmake_minimum_required(VERSION 3.5)
    project("A" LANGUAGES CXX)
    set(CMAKE_INCLUDE_CURRENT_DIR ON)
    set(CMAKE_CXX_STANDARD 11)
    set(CMAKE_CXX_STANDARD_REQUIRED ON)
    include_directories(../B)
    include_directories(../B/include)
    include_directories(../B/src)
    link_libraries("B.lib")
    link_directories(../bin)
    set(PROJECT_SOURCES
    main.cpp
    )
    add_executable("A" ${PROJECT_SOURCES})
    source_group("" FILES main.cpp)
    "#);

    insta::assert_snapshot!(read(root, "CMakeLists.txt"), @r#"
    cmake_minimum_required(VERSION 3.5)
    project("Demo" VERSION 0.1 LANGUAGES CXX)
    set(CMAKE_ARCHIVE_OUTPUT_DIRECTORY ${CMAKE_SOURCE_DIR}/bin)
    set(CMAKE_LIBRARY_OUTPUT_DIRECTORY ${CMAKE_SOURCE_DIR}/bin)
    set(CMAKE_RUNTIME_OUTPUT_DIRECTORY ${CMAKE_SOURCE_DIR}/bin)
    add_subdirectory("A")
    add_subdirectory("B")
    add_dependencies("A" "B")
    "#);
}

#[test]
fn generate_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "cmm.json", r#"{"name":"Demo","startup_project":"App"}"#);
    write(
        root,
        "App/cmm.json",
        r#"{"name":"App","internal_libraries":["Core"],"definitions":["X"]}"#,
    );
    write(root, "App/main.cpp", "");
    write(root, "App/ui/z.cpp", "");
    write(root, "App/ui/a.h", "");
    write(root, "libs/Core/cmm.json", r#"{"name":"Core","type":"dynamic-link-library"}"#);
    write(root, "libs/Core/core.cpp", "");

    generate(root);
    let first = [
        read(root, "CMakeLists.txt"),
        read(root, "App/CMakeLists.txt"),
        read(root, "libs/Core/CMakeLists.txt"),
    ];

    generate(root);
    let second = [
        read(root, "CMakeLists.txt"),
        read(root, "App/CMakeLists.txt"),
        read(root, "libs/Core/CMakeLists.txt"),
    ];

    assert_eq!(first, second);
    assert!(first[0].contains("add_subdirectory(\"libs/Core\")"));
    assert!(first[1].contains("link_libraries(\"Core.lib\")"));
    assert!(first[1].contains("include_directories(../libs/Core)"));
}

// =============================================================================
// Degenerate trees
// =============================================================================

#[test]
fn generate_without_solution_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "App/cmm.json", r#"{"name":"App"}"#);

    generate(root);

    assert!(!root.join("CMakeLists.txt").exists());
    assert!(!root.join("App/CMakeLists.txt").exists());
}

#[test]
fn generate_missing_directory_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    generate(&temp.path().join("missing"));
}

#[test]
fn generate_solution_without_name_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "cmm.json", r#"{"output_directory":"bin"}"#);
    write(root, "App/cmm.json", r#"{"name":"App"}"#);

    generate(root);

    assert!(!root.join("CMakeLists.txt").exists());
    assert!(!root.join("App/CMakeLists.txt").exists());
}

#[test]
fn generate_skips_malformed_project() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "cmm.json", r#"{"name":"Demo"}"#);
    write(root, "Bad/cmm.json", "{ not json");
    write(root, "Good/cmm.json", r#"{"name":"Good"}"#);

    generate(root);

    assert!(!root.join("Bad/CMakeLists.txt").exists());
    assert!(root.join("Good/CMakeLists.txt").exists());
    let solution = read(root, "CMakeLists.txt");
    assert!(solution.contains("add_subdirectory(\"Good\")"));
    assert!(!solution.contains("Bad"));
}

#[test]
fn generate_stops_at_first_marker() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "cmm.json", r#"{"name":"Demo"}"#);
    write(root, "App/cmm.json", r#"{"name":"App"}"#);
    write(root, "App/vendor/Lib/cmm.json", r#"{"name":"Lib"}"#);
    write(root, "App/vendor/Lib/lib.cpp", "");

    generate(root);

    assert!(!root.join("App/vendor/Lib/CMakeLists.txt").exists());
    // The nested sources still belong to the enclosing project.
    assert!(read(root, "App/CMakeLists.txt").contains("vendor/Lib/lib.cpp"));
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn generate_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "cmm.json", r#"{"name":"Demo"}"#);
    write(root, "App/cmm.json", r#"{"name":"App"}"#);

    let options = GenerateOptions {
        dry: true,
        dump: false,
    };
    run_generate_command(root, &config(), options).unwrap();

    assert!(!root.join("CMakeLists.txt").exists());
    assert!(!root.join("App/CMakeLists.txt").exists());
}

#[test]
fn generate_with_custom_names() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    write(root, "project.json", r#"{"name":"Demo"}"#);
    write(root, "App/project.json", r#"{"name":"App"}"#);

    let mut config = config();
    config.discovery.descriptor_filename = "project.json".to_string();
    config.generator.output_filename = "generated.cmake".to_string();
    config.generator.cmake_minimum_required = "3.21".to_string();
    config.generator.line_ending = LineEnding::Crlf;
    run_generate_command(root, &config, GenerateOptions::default()).unwrap();

    let project = read(root, "App/generated.cmake");
    assert!(project.starts_with("cmake_minimum_required(VERSION 3.21)\r\nproject(\"App\" LANGUAGES CXX)"));
    assert!(!root.join("App/CMakeLists.txt").exists());
}
