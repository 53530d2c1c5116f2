// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Generation arguments.

use clap::Args;
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::config::types::LineEnding;
use crate::error::Result;

/// Arguments selecting the solution tree and shaping the generated scripts.
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Solution directory, absolute or relative to the current directory.
    #[arg(value_name = "SOLUTION_DIR")]
    pub solution_dir: Option<PathBuf>,

    /// Solution directory (alternative to the positional form).
    #[arg(
        long = "solution-dir",
        alias = "solution_dir",
        value_name = "DIR",
        conflicts_with = "solution_dir"
    )]
    pub solution_dir_flag: Option<PathBuf>,

    /// Version written into `cmake_minimum_required` (default: 3.5).
    #[arg(
        short = 'm',
        long = "cmake-minimum-required",
        alias = "cmake_minimum_required",
        value_name = "VERSION"
    )]
    pub cmake_minimum_required: Option<String>,

    /// Line terminator of generated files: native, lf or crlf.
    #[arg(long = "line-ending", value_name = "STYLE")]
    pub line_ending: Option<LineEnding>,

    /// Prints the parsed solution and projects as JSON.
    #[arg(long)]
    pub dump: bool,
}

impl GenerateArgs {
    /// The solution directory from either form of the argument.
    #[must_use]
    pub fn solution_dir(&self) -> Option<&PathBuf> {
        self.solution_dir.as_ref().or(self.solution_dir_flag.as_ref())
    }

    /// Applies generator flags as the highest-priority overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be recorded.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(ref version) = self.cmake_minimum_required {
            loader = loader.set("generator.cmake_minimum_required", version.as_str())?;
        }
        if let Some(line_ending) = self.line_ending {
            loader = loader.set("generator.line_ending", line_ending.to_string())?;
        }
        Ok(loader)
    }
}
