// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for cmm using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! cmm [global options] [generate options] [SOLUTION_DIR]
//! ```
//!
//! There are no subcommands: every invocation generates the scripts of one
//! solution tree.

pub mod generate;
pub mod global;


use crate::cli::generate::GenerateArgs;
use crate::cli::global::GlobalOptions;
use clap::Parser;

/// CMake Maker
///
/// Generates `CMakeLists.txt` files from `cmm.json` descriptors.
#[derive(Debug, Parser)]
#[command(
    name = "cmm",
    author,
    version,
    about = "CMake Maker",
    long_about = "cmm Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Generates one CMakeLists.txt per project and one for the\n\
                  solution from the cmm.json descriptors found under\n\
                  SOLUTION_DIR. The root directory must hold the solution\n\
                  descriptor; every nested directory holding one is a project.",
    after_help = "CONFIG FILES:\n\n\
                  cmm reads `cmm.toml` from the current directory if present.\n\
                  Additional files can be given with --config and are loaded\n\
                  after it, in order. CMM_<SECTION>__<KEY> environment variables\n\
                  override both, and command-line flags override everything.\n\
                  Use --no-default-config to skip `cmm.toml`."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Generation options
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
