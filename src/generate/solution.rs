// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Solution script rendering.

use super::Document;
use super::cmake;
use super::paths::{relative_path, to_cmake_path};
use crate::model::{Configuration, SolutionConfig};

pub(super) fn render_solution(
    doc: &mut Document,
    solution: &SolutionConfig,
    configuration: &Configuration,
) {
    doc.push(cmake::project(&solution.name, Some(solution.version.as_str())));
    doc.extend(cmake::output_directories(&to_cmake_path(
        &solution.output_directory,
    )));

    for name in &solution.subdirectories {
        doc.push(cmake::add_subdirectory(&subdirectory(
            solution,
            configuration,
            name,
        )));
    }

    if let Some(startup) = &solution.startup_project {
        doc.push(cmake::startup_project(startup));
        if let Some(dir) = &solution.debugger_working_directory {
            doc.push(cmake::debugger_working_directory(
                startup,
                &to_cmake_path(dir),
            ));
        }
    }

    for project in configuration.projects.values() {
        for dependency in &project.internal_libraries {
            doc.push(cmake::add_dependencies(&project.name, dependency));
        }
    }
}

/// Project directory relative to the solution, the bare name when unmapped.
fn subdirectory(solution: &SolutionConfig, configuration: &Configuration, name: &str) -> String {
    configuration
        .project(name)
        .map(|project| relative_path(&solution.solution_path, &project.project_path))
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| name.to_string(), |dir| to_cmake_path(&dir))
}
