// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Solution descriptor parsing.

use std::path::{Path, PathBuf};

use super::{Fields, read_descriptor};
use crate::error::DescriptorError;
use crate::model::SolutionConfig;

const NAME_KEY: &str = "name";
const OUTPUT_DIRECTORY_KEY: &str = "output_directory";
const STARTUP_PROJECT_KEY: &str = "startup_project";
const DEBUGGER_WORKING_DIRECTORY_KEY: &str = "debugger_working_directory";

/// Parses the solution descriptor at `descriptor`.
///
/// `subdirectories` is left empty; the aggregation step fills it.
///
/// # Errors
///
/// Returns a [`DescriptorError`] if the file cannot be read or parsed, or if
/// `name` is missing or empty.
pub fn parse_solution(descriptor: &Path) -> Result<SolutionConfig, DescriptorError> {
    let object = read_descriptor(descriptor)?;
    let fields = Fields::new(&object, descriptor);

    let solution_path = descriptor.parent().unwrap_or_else(|| Path::new(""));
    let mut solution = SolutionConfig::new(solution_path);

    solution.name = fields.get(NAME_KEY, String::new());
    if solution.name.is_empty() {
        return Err(DescriptorError::EmptyName {
            path: descriptor.to_path_buf(),
        });
    }

    if let Some(output) = non_empty(fields.get(OUTPUT_DIRECTORY_KEY, String::new())) {
        solution.output_directory = PathBuf::from(output);
    }
    solution.startup_project = non_empty(fields.get(STARTUP_PROJECT_KEY, String::new()));
    solution.debugger_working_directory =
        non_empty(fields.get(DEBUGGER_WORKING_DIRECTORY_KEY, String::new())).map(PathBuf::from);

    Ok(solution)
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
