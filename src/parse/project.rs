// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project descriptor parsing.
//!
//! ```text
//! key                        field                  default
//! name                       name                   directory name
//! type                       project_type           console-application
//! target_filename            target_filename        {name}.exe|.lib|.dll
//! definitions                definitions            []
//! include_current_directory  include_current_dir    true
//! cxx_standard               cxx_standard           11
//! include_directory          include_directories    []
//! link_directories           link_directories       []
//! link_libraries             link_libraries         []
//! internal_includes          internal_includes      []
//! internal_libraries         internal_libraries     []
//! qt {auto_uic, auto_moc, auto_rcc, packages}      None
//! ```

use std::path::Path;

use tracing::debug;

use super::sources::collect_sources;
use super::{Fields, read_descriptor};
use crate::error::DescriptorError;
use crate::model::{CxxStandard, ProjectConfig, ProjectType, QtConfig};

const NAME_KEY: &str = "name";
const TYPE_KEY: &str = "type";
const TARGET_FILENAME_KEY: &str = "target_filename";
const DEFINITIONS_KEY: &str = "definitions";
const INCLUDE_CURRENT_DIRECTORY_KEY: &str = "include_current_directory";
const CXX_STANDARD_KEY: &str = "cxx_standard";
const INCLUDE_DIRECTORIES_KEY: &str = "include_directory";
const LINK_DIRECTORIES_KEY: &str = "link_directories";
const LINK_LIBRARIES_KEY: &str = "link_libraries";
const INTERNAL_INCLUDES_KEY: &str = "internal_includes";
const INTERNAL_LIBRARIES_KEY: &str = "internal_libraries";

const QT_KEY: &str = "qt";
const QT_AUTO_UIC_KEY: &str = "auto_uic";
const QT_AUTO_MOC_KEY: &str = "auto_moc";
const QT_AUTO_RCC_KEY: &str = "auto_rcc";
const QT_PACKAGES_KEY: &str = "packages";

/// Parses the project descriptor at `descriptor` and collects its sources.
///
/// # Errors
///
/// Returns a [`DescriptorError`] if the file cannot be read or parsed, or if
/// no name can be derived (explicit name empty and the directory has none).
pub fn parse_project(
    descriptor: &Path,
    follow_links: bool,
) -> Result<ProjectConfig, DescriptorError> {
    let object = read_descriptor(descriptor)?;
    let fields = Fields::new(&object, descriptor);

    let project_path = descriptor.parent().unwrap_or_else(|| Path::new(""));
    let mut project = ProjectConfig::new(project_path);

    project.name = fields.get(NAME_KEY, String::new());
    if project.name.is_empty() {
        project.name = directory_name(project_path);
    }
    if project.name.is_empty() {
        return Err(DescriptorError::EmptyName {
            path: descriptor.to_path_buf(),
        });
    }

    let type_literal = fields.get(TYPE_KEY, String::new());
    project.project_type = ProjectType::from_literal(&type_literal).unwrap_or_else(|| {
        if !type_literal.is_empty() {
            debug!(project = %project.name, literal = %type_literal, "unknown project type");
        }
        ProjectType::default()
    });

    project.target_filename = fields.get(TARGET_FILENAME_KEY, String::new());
    if project.target_filename.is_empty() {
        project.target_filename = project.default_target_filename();
    }

    project.definitions = fields.get(DEFINITIONS_KEY, Vec::new());
    project.include_current_dir = fields.get(INCLUDE_CURRENT_DIRECTORY_KEY, true);

    let revision = fields.get(CXX_STANDARD_KEY, i64::from(CxxStandard::default().revision()));
    project.cxx_standard = CxxStandard::from_revision(revision).unwrap_or_else(|| {
        debug!(project = %project.name, revision, "unsupported C++ standard");
        CxxStandard::default()
    });

    project.include_directories = fields.get(INCLUDE_DIRECTORIES_KEY, Vec::new());
    project.link_directories = fields.get(LINK_DIRECTORIES_KEY, Vec::new());
    project.link_libraries = fields.get(LINK_LIBRARIES_KEY, Vec::new());
    project.internal_includes = fields.get(INTERNAL_INCLUDES_KEY, Vec::new());
    project.internal_libraries = fields.get(INTERNAL_LIBRARIES_KEY, Vec::new());
    project.qt_config = fields.object(QT_KEY).map(parse_qt);

    project.files = collect_sources(project_path, follow_links);

    debug!(
        project = %project.name,
        project_type = %project.project_type,
        files = project.files.len(),
        "parsed project descriptor"
    );
    Ok(project)
}

fn parse_qt(fields: Fields<'_>) -> QtConfig {
    let defaults = QtConfig::default();
    QtConfig {
        auto_uic: fields.get(QT_AUTO_UIC_KEY, defaults.auto_uic),
        auto_moc: fields.get(QT_AUTO_MOC_KEY, defaults.auto_moc),
        auto_rcc: fields.get(QT_AUTO_RCC_KEY, defaults.auto_rcc),
        packages: fields.get(QT_PACKAGES_KEY, defaults.packages),
    }
}

fn directory_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
