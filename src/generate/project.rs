// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project script rendering.
//!
//! ```text
//!  1 project                      9 link_directories(<output dir>)
//!  2 CMAKE_INCLUDE_CURRENT_DIR   10 find_package(Qt...) x2 per package
//!  3 CMAKE_AUTOUIC/MOC/RCC       11 set(PROJECT_SOURCES ...)
//!  4 CMAKE_EXE_LINKER_FLAGS      12 add_executable | add_library
//!  5 CMAKE_CXX_STANDARD[_REQ]    13 source_group per file
//!  6 include_directories         14 target_compile_definitions
//!  7 link_libraries(<internal>)  15 target_link_libraries(Qt::pkg)
//!  8 link_directories, link_libraries (explicit)
//! ```

use std::path::Path;

use super::Document;
use super::cmake;
use super::paths::{OrderedPaths, relative_path, resolve, to_cmake_path};
use crate::config::types::GeneratorConfig;
use crate::model::{Configuration, ProjectConfig, ProjectType};

pub(super) fn render_project(
    doc: &mut Document,
    project: &ProjectConfig,
    configuration: &Configuration,
    generator: &GeneratorConfig,
) {
    let root = project.project_path.as_path();

    doc.push(cmake::project(&project.name, None));
    doc.push_opt(cmake::include_current_dir(project.include_current_dir));
    if let Some(qt) = &project.qt_config {
        doc.push_opt(cmake::autouic(qt.auto_uic));
        doc.push_opt(cmake::automoc(qt.auto_moc));
        doc.push_opt(cmake::autorcc(qt.auto_rcc));
    }
    if project.project_type == ProjectType::DesktopApplication {
        doc.push(cmake::desktop_linker_flags());
    }
    doc.push(cmake::cxx_standard(project.cxx_standard));
    doc.push_opt(cmake::cxx_standard_required(project.cxx_standard_required));

    let libraries: Vec<&ProjectConfig> = configuration
        .resolve(&project.internal_libraries)
        .filter(|dependency| dependency.project_type.is_library())
        .collect();

    let mut includes = OrderedPaths::default();
    add_source_dirs(&mut includes, project);
    for dependency in &libraries {
        includes.insert(&dependency.project_path);
        add_source_dirs(&mut includes, dependency);
    }
    for dependency in configuration.resolve(&project.internal_includes) {
        includes.insert(&dependency.project_path);
        add_source_dirs(&mut includes, dependency);
    }
    for dir in &project.include_directories {
        includes.insert(&resolve(root, dir));
    }
    for dir in includes.iter() {
        if let Some(dir) = relative_to(root, dir) {
            doc.push(cmake::include_directories(&dir));
        }
    }

    for dependency in &libraries {
        doc.push_opt(cmake::link_libraries(&dependency.link_artifact()));
    }

    for dir in &project.link_directories {
        if let Some(dir) = relative_to(root, &resolve(root, dir)) {
            doc.push(cmake::link_directories(&dir));
        }
    }
    for library in &project.link_libraries {
        let library = relative_to(root, &resolve(root, library)).unwrap_or_default();
        doc.push_opt(cmake::link_libraries(&library));
    }

    if !project.internal_libraries.is_empty()
        && let Some(dir) = relative_to(root, &configuration.solution.output_path())
    {
        doc.push(cmake::link_directories(&dir));
    }

    if let Some(qt) = &project.qt_config {
        for package in &qt.packages {
            doc.extend(cmake::find_package_qt(package));
        }
    }

    let files: Vec<String> = project.files.iter().map(|file| to_cmake_path(file)).collect();
    let variable = generator.sources_variable.as_str();
    doc.extend(cmake::set_paths(variable, files.iter().map(String::as_str)));
    if project.project_type.is_executable() {
        doc.push(cmake::add_executable(&project.name, variable));
    } else {
        let shared = project.project_type == ProjectType::DynamicLinkLibrary;
        doc.push(cmake::add_library(&project.name, variable, shared));
    }

    for (file, text) in project.files.iter().zip(&files) {
        doc.push(cmake::source_group(&group_filter(file), text));
    }
    for definition in &project.definitions {
        doc.push(cmake::target_compile_definitions(&project.name, definition));
    }
    if let Some(qt) = &project.qt_config {
        for package in &qt.packages {
            doc.push(cmake::target_link_libraries_qt(&project.name, package));
        }
    }
}

/// Parent directory of every source of `project`, resolved against its own root.
fn add_source_dirs(includes: &mut OrderedPaths, project: &ProjectConfig) {
    for file in &project.files {
        let path = project.project_path.join(file);
        if let Some(parent) = path.parent() {
            includes.insert(parent);
        }
    }
}

/// Forward-slash form of `target` relative to `root`, `None` when empty.
fn relative_to(root: &Path, target: &Path) -> Option<String> {
    let relative = relative_path(root, target);
    (!relative.as_os_str().is_empty()).then(|| to_cmake_path(&relative))
}

/// IDE filter for `file`: its containing subdirectory, empty at the root.
fn group_filter(file: &Path) -> String {
    file.parent().map(to_cmake_path).unwrap_or_default()
}
