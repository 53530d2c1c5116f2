// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `CMake` statement builders.
//!
//! ```text
//! preamble   cmake_minimum_required, project
//! variables  CMAKE_INCLUDE_CURRENT_DIR, CMAKE_AUTO{UIC,MOC,RCC},
//!            CMAKE_CXX_STANDARD[_REQUIRED], CMAKE_EXE_LINKER_FLAGS,
//!            CMAKE_{ARCHIVE,LIBRARY,RUNTIME}_OUTPUT_DIRECTORY
//! paths      include_directories, link_directories, link_libraries
//! targets    add_executable, add_library [SHARED], source_group,
//!            target_compile_definitions, target_link_libraries
//! solution   add_subdirectory, add_dependencies, VS_* properties
//! ```
//!
//! Names are wrapped in double quotes without escaping. Path arguments are
//! expected to already use forward slashes.

use crate::model::CxxStandard;

fn quoted(value: &str) -> String {
    format!("\"{value}\"")
}

fn switch(variable: &str, enabled: bool) -> Option<String> {
    enabled.then(|| format!("set({variable} ON)"))
}

#[must_use]
pub fn cmake_minimum_required(version: &str) -> String {
    format!("cmake_minimum_required(VERSION {version})")
}

#[must_use]
pub fn project(name: &str, version: Option<&str>) -> String {
    match version {
        Some(version) => format!("project({} VERSION {version} LANGUAGES CXX)", quoted(name)),
        None => format!("project({} LANGUAGES CXX)", quoted(name)),
    }
}

#[must_use]
pub fn include_current_dir(enabled: bool) -> Option<String> {
    switch("CMAKE_INCLUDE_CURRENT_DIR", enabled)
}

#[must_use]
pub fn autouic(enabled: bool) -> Option<String> {
    switch("CMAKE_AUTOUIC", enabled)
}

#[must_use]
pub fn automoc(enabled: bool) -> Option<String> {
    switch("CMAKE_AUTOMOC", enabled)
}

#[must_use]
pub fn autorcc(enabled: bool) -> Option<String> {
    switch("CMAKE_AUTORCC", enabled)
}

/// Windows GUI subsystem with a regular `main` entry point.
#[must_use]
pub fn desktop_linker_flags() -> String {
    "set(CMAKE_EXE_LINKER_FLAGS \"${CMAKE_EXE_LINKER_FLAGS} /SUBSYSTEM:WINDOWS /ENTRY:mainCRTStartup\")"
        .to_string()
}

#[must_use]
pub fn cxx_standard(standard: CxxStandard) -> String {
    format!("set(CMAKE_CXX_STANDARD {})", standard.revision())
}

#[must_use]
pub fn cxx_standard_required(required: bool) -> Option<String> {
    switch("CMAKE_CXX_STANDARD_REQUIRED", required)
}

#[must_use]
pub fn include_directories(dir: &str) -> String {
    format!("include_directories({dir})")
}

#[must_use]
pub fn link_directories(dir: &str) -> String {
    format!("link_directories({dir})")
}

/// `None` for an empty library name.
#[must_use]
pub fn link_libraries(library: &str) -> Option<String> {
    (!library.is_empty()).then(|| format!("link_libraries({})", quoted(library)))
}

/// Locates Qt 6 or 5 first, then the component for the found major version.
#[must_use]
pub fn find_package_qt(package: &str) -> [String; 2] {
    [
        format!("find_package(QT NAMES Qt6 Qt5 COMPONENTS {package} REQUIRED)"),
        format!("find_package(Qt${{QT_VERSION_MAJOR}} COMPONENTS {package} REQUIRED)"),
    ]
}

/// Multi-line `set(VAR ...)` with one path per line.
#[must_use]
pub fn set_paths<'a>(variable: &str, paths: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut lines = vec![format!("set({variable}")];
    lines.extend(paths.into_iter().map(str::to_string));
    lines.push(")".to_string());
    lines
}

#[must_use]
pub fn add_executable(name: &str, sources_variable: &str) -> String {
    format!("add_executable({} ${{{sources_variable}}})", quoted(name))
}

#[must_use]
pub fn add_library(name: &str, sources_variable: &str, shared: bool) -> String {
    if shared {
        format!("add_library({} SHARED ${{{sources_variable}}})", quoted(name))
    } else {
        format!("add_library({} ${{{sources_variable}}})", quoted(name))
    }
}

#[must_use]
pub fn source_group(filter: &str, file: &str) -> String {
    format!("source_group({} FILES {file})", quoted(filter))
}

#[must_use]
pub fn target_compile_definitions(name: &str, definition: &str) -> String {
    format!("target_compile_definitions({} PRIVATE {definition})", quoted(name))
}

#[must_use]
pub fn target_link_libraries_qt(name: &str, package: &str) -> String {
    format!(
        "target_link_libraries({} PRIVATE Qt${{QT_VERSION_MAJOR}}::{package})",
        quoted(name)
    )
}

/// Archive, library and runtime output all land in `dir` under the source root.
#[must_use]
pub fn output_directories(dir: &str) -> [String; 3] {
    let target = if dir.is_empty() {
        "${CMAKE_SOURCE_DIR}".to_string()
    } else {
        format!("${{CMAKE_SOURCE_DIR}}/{dir}")
    };
    [
        format!("set(CMAKE_ARCHIVE_OUTPUT_DIRECTORY {target})"),
        format!("set(CMAKE_LIBRARY_OUTPUT_DIRECTORY {target})"),
        format!("set(CMAKE_RUNTIME_OUTPUT_DIRECTORY {target})"),
    ]
}

#[must_use]
pub fn add_subdirectory(dir: &str) -> String {
    format!("add_subdirectory({})", quoted(dir))
}

#[must_use]
pub fn startup_project(name: &str) -> String {
    format!(
        "set_property(DIRECTORY PROPERTY VS_STARTUP_PROJECT {})",
        quoted(name)
    )
}

#[must_use]
pub fn debugger_working_directory(name: &str, dir: &str) -> String {
    format!(
        "set_property(TARGET {} PROPERTY VS_DEBUGGER_WORKING_DIRECTORY ${{CMAKE_SOURCE_DIR}}/{dir}/${{CMAKE_CFG_INTDIR}})",
        quoted(name)
    )
}

#[must_use]
pub fn add_dependencies(depending: &str, depended: &str) -> String {
    format!("add_dependencies({} {})", quoted(depending), quoted(depended))
}
