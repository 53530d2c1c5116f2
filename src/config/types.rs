// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for cmm.
//!
//! ```text
//! RunConfig: GeneratorConfig, DiscoveryConfig, LogSettings
//! LineEnding: Native (default) | Lf | Crlf
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Well-known descriptor filename shared by the solution and its projects.
pub const DEFAULT_DESCRIPTOR_FILENAME: &str = "cmm.json";

/// Filename of every generated build script.
pub const DEFAULT_OUTPUT_FILENAME: &str = "CMakeLists.txt";

/// Line terminator used when persisting generated scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// `\r\n` on Windows, `\n` elsewhere.
    #[default]
    Native,
    Lf,
    Crlf,
}

impl LineEnding {
    /// The terminator text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => {
                if cfg!(windows) {
                    "\r\n"
                } else {
                    "\n"
                }
            }
            Self::Lf => "\n",
            Self::Crlf => "\r\n",
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Lf => write!(f, "lf"),
            Self::Crlf => write!(f, "crlf"),
        }
    }
}

impl std::str::FromStr for LineEnding {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            _ => Err(ConfigError::InvalidValue {
                section: "generator".to_string(),
                key: "line_ending".to_string(),
                message: format!("expected 'native', 'lf' or 'crlf', got '{s}'"),
            }),
        }
    }
}

/// Options for the script generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Version written into the `cmake_minimum_required` preamble.
    pub cmake_minimum_required: String,
    /// Filename written into every solution and project directory.
    pub output_filename: String,
    /// Line terminator of generated files.
    pub line_ending: LineEnding,
    /// Name of the variable holding a project's source list.
    pub sources_variable: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            cmake_minimum_required: "3.5".to_string(),
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            line_ending: LineEnding::Native,
            sources_variable: "PROJECT_SOURCES".to_string(),
        }
    }
}

/// Options for descriptor discovery and source collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
    /// Well-known descriptor filename.
    pub descriptor_filename: String,
    /// Follow symbolic links while walking. Loops are detected and skipped.
    pub follow_links: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            descriptor_filename: DEFAULT_DESCRIPTOR_FILENAME.to_string(),
            follow_links: true,
        }
    }
}

/// Logging options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Console log level (0-5).
    pub level: LogLevel,
    /// File log level (0-5).
    pub file_level: LogLevel,
    /// Log file; empty disables file logging.
    pub file: PathBuf,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::WARN,
            file_level: LogLevel::TRACE,
            file: PathBuf::new(),
        }
    }
}
