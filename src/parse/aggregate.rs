// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Aggregation of parsed descriptors into one [`Configuration`].
//!
//! ```text
//! solution descriptor --parse--> SolutionConfig ---------------+
//!                                                              v
//! project descriptors --parse--> ProjectConfig --insert--> Configuration
//!        (each)            |                                projects[name]
//!                          +-- droppable error: skipped     solution.subdirectories += name
//!                          +-- read error:      abort
//! ```

use tracing::{debug, info, warn};

use super::project::parse_project;
use super::solution::parse_solution;
use crate::discovery::SolutionLayout;
use crate::error::{CmmError, DescriptorError, Result};
use crate::model::{Configuration, ProjectConfig, ProjectMap, SolutionConfig};

/// Parses every descriptor in `layout` and links the projects into the solution.
///
/// Returns `Ok(None)` when the solution descriptor itself is unusable.
/// Project descriptors that fail to parse are left out of the result.
///
/// # Errors
///
/// Returns an error if any descriptor cannot be read.
pub fn parse_solution_and_projects(
    layout: &SolutionLayout,
    follow_links: bool,
) -> Result<Option<Configuration>> {
    let solution = match parse_solution(&layout.solution_descriptor) {
        Ok(solution) => solution,
        Err(e) => return drop_or_abort(e).map(|()| None),
    };

    let mut parsed = Vec::with_capacity(layout.project_descriptors.len());
    for descriptor in &layout.project_descriptors {
        match parse_project(descriptor, follow_links) {
            Ok(project) => parsed.push(project),
            Err(e) => drop_or_abort(e)?,
        }
    }

    let configuration = link(solution, parsed);
    info!(
        solution = %configuration.solution.name,
        projects = configuration.projects.len(),
        "parsed descriptors"
    );
    Ok(Some(configuration))
}

/// Builds the name map and the solution's subdirectory list from parsed projects.
///
/// A later project with an already used name replaces the earlier one; the
/// name keeps its original position in `subdirectories`.
#[must_use]
pub fn link(mut solution: SolutionConfig, projects: Vec<ProjectConfig>) -> Configuration {
    let mut map = ProjectMap::new();
    for project in projects {
        let name = project.name.clone();
        if let Some(previous) = map.insert(name.clone(), project) {
            warn!(
                project = %name,
                replaced = %previous.project_path.display(),
                "duplicate project name, the later descriptor wins"
            );
        } else {
            solution.subdirectories.push(name);
        }
    }

    for project in map.values() {
        for dependency in project
            .internal_libraries
            .iter()
            .chain(&project.internal_includes)
        {
            if !map.contains_key(dependency) {
                debug!(project = %project.name, dependency = %dependency, "unresolved internal reference");
            }
        }
    }

    Configuration {
        solution,
        projects: map,
    }
}

fn drop_or_abort(error: DescriptorError) -> Result<()> {
    if error.is_fatal() {
        return Err(CmmError::from(error).into());
    }
    warn!(descriptor = %error.path().display(), error = %error, "skipping descriptor");
    Ok(())
}
