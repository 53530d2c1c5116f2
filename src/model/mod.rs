// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory configuration model for one generation run.
//!
//! ```text
//! Configuration
//!   solution: SolutionConfig
//!     subdirectories: [name, ...]   back-reference, discovery order
//!   projects: BTreeMap<name, ProjectConfig>
//!     internal_libraries: [name, ...]
//!     qt_config: Option<QtConfig>
//! ```
//!
//! Every value is rebuilt from descriptors on each run and dropped once the
//! scripts are written.

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Kind of buildable unit a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    #[default]
    ConsoleApplication,
    DesktopApplication,
    StaticLibrary,
    DynamicLinkLibrary,
}

impl ProjectType {
    /// Parse the descriptor literal, `None` for anything unrecognized.
    #[must_use]
    pub fn from_literal(literal: &str) -> Option<Self> {
        match literal {
            "console-application" => Some(Self::ConsoleApplication),
            "desktop-application" => Some(Self::DesktopApplication),
            "static-library" => Some(Self::StaticLibrary),
            "dynamic-link-library" => Some(Self::DynamicLinkLibrary),
            _ => None,
        }
    }

    /// Descriptor literal for this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConsoleApplication => "console-application",
            Self::DesktopApplication => "desktop-application",
            Self::StaticLibrary => "static-library",
            Self::DynamicLinkLibrary => "dynamic-link-library",
        }
    }

    /// Suffix of the default target filename.
    #[must_use]
    pub const fn target_suffix(self) -> &'static str {
        match self {
            Self::ConsoleApplication | Self::DesktopApplication => ".exe",
            Self::StaticLibrary => ".lib",
            Self::DynamicLinkLibrary => ".dll",
        }
    }

    /// Whether other projects can link against this one.
    #[must_use]
    pub const fn is_library(self) -> bool {
        matches!(self, Self::StaticLibrary | Self::DynamicLinkLibrary)
    }

    /// Whether this project produces an executable.
    #[must_use]
    pub const fn is_executable(self) -> bool {
        matches!(self, Self::ConsoleApplication | Self::DesktopApplication)
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// C++ language revision, ordered from oldest to newest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize)]
pub enum CxxStandard {
    #[default]
    Cxx11,
    Cxx14,
    Cxx17,
    Cxx20,
}

impl CxxStandard {
    /// Map the descriptor integer, `None` for unsupported revisions.
    #[must_use]
    pub const fn from_revision(revision: i64) -> Option<Self> {
        match revision {
            11 => Some(Self::Cxx11),
            14 => Some(Self::Cxx14),
            17 => Some(Self::Cxx17),
            20 => Some(Self::Cxx20),
            _ => None,
        }
    }

    /// The two-digit revision number.
    #[must_use]
    pub const fn revision(self) -> u8 {
        match self {
            Self::Cxx11 => 11,
            Self::Cxx14 => 14,
            Self::Cxx17 => 17,
            Self::Cxx20 => 20,
        }
    }
}

/// Qt code generation passes and component packages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QtConfig {
    pub auto_uic: bool,
    pub auto_moc: bool,
    pub auto_rcc: bool,
    /// Component names such as `Core` or `Widgets`, in link order.
    pub packages: Vec<String>,
}

impl Default for QtConfig {
    fn default() -> Self {
        Self {
            auto_uic: true,
            auto_moc: true,
            auto_rcc: true,
            packages: Vec::new(),
        }
    }
}

/// One project descriptor after defaulting and source discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectConfig {
    /// Unique within a solution; defaults to the directory name.
    pub name: String,
    /// Absolute directory holding the descriptor. All relative paths resolve here.
    pub project_path: PathBuf,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    pub target_filename: String,
    /// Source files relative to `project_path`.
    pub files: Vec<PathBuf>,
    pub definitions: Vec<String>,
    pub include_current_dir: bool,
    pub cxx_standard: CxxStandard,
    pub cxx_standard_required: bool,
    pub include_directories: Vec<String>,
    pub link_directories: Vec<String>,
    pub link_libraries: Vec<String>,
    /// Names of sibling projects used for headers only.
    pub internal_includes: Vec<String>,
    /// Names of sibling projects linked into this one.
    pub internal_libraries: Vec<String>,
    pub qt_config: Option<QtConfig>,
}

impl ProjectConfig {
    /// A project rooted at `project_path` with every field at its default.
    #[must_use]
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            name: String::new(),
            project_path: project_path.into(),
            project_type: ProjectType::default(),
            target_filename: String::new(),
            files: Vec::new(),
            definitions: Vec::new(),
            include_current_dir: true,
            cxx_standard: CxxStandard::default(),
            cxx_standard_required: true,
            include_directories: Vec::new(),
            link_directories: Vec::new(),
            link_libraries: Vec::new(),
            internal_includes: Vec::new(),
            internal_libraries: Vec::new(),
            qt_config: None,
        }
    }

    /// `{name}{suffix}` for the project type.
    #[must_use]
    pub fn default_target_filename(&self) -> String {
        format!("{}{}", self.name, self.project_type.target_suffix())
    }

    /// Artifact name other projects link against.
    ///
    /// Dynamic libraries are linked through their import library, so the
    /// extension is always the static-library one.
    #[must_use]
    pub fn link_artifact(&self) -> String {
        Path::new(&self.target_filename)
            .with_extension("lib")
            .to_string_lossy()
            .into_owned()
    }
}

/// The solution descriptor at the root of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolutionConfig {
    pub name: String,
    /// Absolute directory holding the solution descriptor.
    pub solution_path: PathBuf,
    pub version: String,
    /// Build output directory, relative to `solution_path`. Empty means the root.
    pub output_directory: PathBuf,
    /// Member project names in the order they were parsed.
    pub subdirectories: Vec<String>,
    pub startup_project: Option<String>,
    pub debugger_working_directory: Option<PathBuf>,
}

impl SolutionConfig {
    /// A solution rooted at `solution_path` with every field at its default.
    #[must_use]
    pub fn new(solution_path: impl Into<PathBuf>) -> Self {
        Self {
            name: String::new(),
            solution_path: solution_path.into(),
            version: "0.1".to_string(),
            output_directory: PathBuf::new(),
            subdirectories: Vec::new(),
            startup_project: None,
            debugger_working_directory: None,
        }
    }

    /// Absolute build output directory.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.solution_path.join(&self.output_directory)
    }
}

/// Projects keyed by name. Iteration order is the name order.
pub type ProjectMap = BTreeMap<String, ProjectConfig>;

/// Aggregate result of parsing one descriptor tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    pub solution: SolutionConfig,
    pub projects: ProjectMap,
}

impl Configuration {
    /// Look up a project by name.
    #[must_use]
    pub fn project(&self, name: &str) -> Option<&ProjectConfig> {
        self.projects.get(name)
    }

    /// Projects referenced by `names` that exist in the map, in reference order.
    ///
    /// Dangling names are skipped.
    pub fn resolve<'a>(
        &'a self,
        names: &'a [String],
    ) -> impl Iterator<Item = &'a ProjectConfig> + 'a {
        names.iter().filter_map(|name| self.projects.get(name))
    }
}
