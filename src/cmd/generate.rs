// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generate command: the whole pipeline for one solution tree.
//!
//! ```text
//! solution dir --discovery--> SolutionLayout --parse--> Configuration
//!                                                            |
//!                                 --dump: JSON on stdout <---+
//!                                                            v
//!                                                  render_all (memory)
//!                                                            |
//!                                      --dry: stop here <----+
//!                                                            v
//!                                                        write_all
//! ```
//!
//! A missing solution descriptor or an unusable solution descriptor ends
//! the run without output and without error.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::discovery::search_solution_and_projects;
use crate::error::Result;
use crate::generate::paths::normalize_path;
use crate::generate::{render_all, write_all};
use crate::parse::aggregate::parse_solution_and_projects;

/// Options of one generate run that do not come from [`RunConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Render without writing.
    pub dry: bool,
    /// Print the parsed configuration as JSON.
    pub dump: bool,
}

/// Runs discovery, parsing and generation for `solution_dir`.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined, a
/// descriptor cannot be read, or a script cannot be written.
pub fn run_generate_command(
    solution_dir: &Path,
    config: &RunConfig,
    options: GenerateOptions,
) -> Result<()> {
    let root = absolute(solution_dir)?;
    let follow_links = config.discovery.follow_links;

    let Some(layout) =
        search_solution_and_projects(&root, &config.discovery.descriptor_filename, follow_links)
    else {
        info!(root = %root.display(), "no solution found, nothing to generate");
        return Ok(());
    };

    let Some(configuration) = parse_solution_and_projects(&layout, follow_links)? else {
        info!(
            solution = %layout.solution_dir().display(),
            "solution descriptor unusable, nothing to generate"
        );
        return Ok(());
    };

    if options.dump {
        let json = serde_json::to_string_pretty(&configuration)
            .context("failed to serialize configuration")?;
        println!("{json}");
    }

    let scripts = render_all(&configuration, &config.generator);

    if options.dry {
        for script in &scripts {
            info!(path = %script.path.display(), "dry run, not writing");
            for line in script.document.lines() {
                debug!("{line}");
            }
        }
        return Ok(());
    }

    write_all(&scripts, config.generator.line_ending)
}

/// `dir` as a normalized absolute path, relative ones taken from the current directory.
fn absolute(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(normalize_path(dir));
    }
    let cwd = std::env::current_dir().context("failed to determine the current directory")?;
    Ok(normalize_path(&cwd.join(dir)))
}
