// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build script generation.
//!
//! ```text
//! Configuration
//!      |
//!      v
//! render_all ---> Generator::Project(p) (name order) --+
//!            \--> Generator::Solution(s) --------------+--> Vec<RenderedScript>
//!                                                      |
//!   Document = cmake_minimum_required + variant lines  |
//!                                                      v
//!                                  write_all (only after every render)
//! ```
//!
//! Every document is rendered in memory first, so a run either writes all
//! scripts or none of them.

pub mod cmake;
pub mod paths;
mod project;
mod solution;


use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::config::types::{GeneratorConfig, LineEnding};
use crate::error::{CmmResult, FsError, Result};
use crate::model::{Configuration, ProjectConfig, SolutionConfig};

/// Ordered statement lines of one generated script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends `line` if present.
    pub fn push_opt(&mut self, line: Option<String>) {
        if let Some(line) = line {
            self.lines.push(line);
        }
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines joined by `line_ending`, without a trailing terminator.
    #[must_use]
    pub fn to_text(&self, line_ending: LineEnding) -> String {
        self.lines.join(line_ending.as_str())
    }

    /// Overwrites `path` with the document text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path, line_ending: LineEnding) -> CmmResult<()> {
        std::fs::write(path, self.to_text(line_ending)).map_err(|source| {
            FsError::IoError {
                path: path.display().to_string(),
                source,
            }
            .into()
        })
    }
}

/// The two kinds of generated script.
#[derive(Debug, Clone, Copy)]
pub enum Generator<'a> {
    Solution(&'a SolutionConfig),
    Project(&'a ProjectConfig),
}

impl Generator<'_> {
    /// Directory the script is written into.
    #[must_use]
    pub fn directory(&self) -> &Path {
        match self {
            Self::Solution(solution) => &solution.solution_path,
            Self::Project(project) => &project.project_path,
        }
    }

    /// Renders the preamble followed by the variant's statements.
    #[must_use]
    pub fn render(&self, configuration: &Configuration, config: &GeneratorConfig) -> Document {
        let mut doc = Document::new();
        doc.push(cmake::cmake_minimum_required(&config.cmake_minimum_required));
        match self {
            Self::Solution(solution) => solution::render_solution(&mut doc, solution, configuration),
            Self::Project(project) => {
                project::render_project(&mut doc, project, configuration, config);
            }
        }
        doc
    }
}

/// A rendered script and the file it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScript {
    pub path: PathBuf,
    pub document: Document,
}

/// Renders every project script (name order) and then the solution script.
#[must_use]
pub fn render_all(configuration: &Configuration, config: &GeneratorConfig) -> Vec<RenderedScript> {
    let generators = configuration
        .projects
        .values()
        .map(Generator::Project)
        .chain(std::iter::once(Generator::Solution(&configuration.solution)));

    generators
        .map(|generator| {
            let path = generator.directory().join(&config.output_filename);
            let document = generator.render(configuration, config);
            debug!(path = %path.display(), lines = document.lines().len(), "rendered script");
            RenderedScript { path, document }
        })
        .collect()
}

/// Writes every rendered script, overwriting existing files.
///
/// # Errors
///
/// Returns an error on the first file that cannot be written.
pub fn write_all(scripts: &[RenderedScript], line_ending: LineEnding) -> Result<()> {
    for script in scripts {
        script
            .document
            .save(&script.path, line_ending)
            .with_context(|| format!("failed to write {}", script.path.display()))?;
    }
    info!(count = scripts.len(), "wrote build scripts");
    Ok(())
}
