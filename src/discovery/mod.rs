// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Descriptor discovery.
//!
//! ```text
//! root/                 cmm.json  -> solution descriptor
//!   App/                cmm.json  -> project descriptor
//!     plugins/Extra/    cmm.json  -> never reached (App already matched)
//!   libs/
//!     Core/             cmm.json  -> project descriptor
//! ```
//!
//! A directory holding the descriptor ends its branch: nothing below it is
//! searched for more descriptors. The root is the only exception.

use std::path::{Path, PathBuf};

use ignore::DirEntry;
use tracing::{debug, trace, warn};

use crate::utility::fs::walk::{WalkOptions, build_walker};

/// Descriptor files found under one source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionLayout {
    /// `<root>/<descriptor>`.
    pub solution_descriptor: PathBuf,
    /// Project descriptors in walk order (depth-first, file-name order).
    pub project_descriptors: Vec<PathBuf>,
}

impl SolutionLayout {
    /// Directory holding the solution descriptor.
    #[must_use]
    pub fn solution_dir(&self) -> &Path {
        self.solution_descriptor
            .parent()
            .unwrap_or_else(|| Path::new(""))
    }
}

/// Locates the solution descriptor at `root` and every project descriptor below it.
///
/// Returns `None` when `root` is not a directory or holds no descriptor
/// named `descriptor_filename`. Unreadable entries below the root are
/// logged and skipped.
#[must_use]
pub fn search_solution_and_projects(
    root: &Path,
    descriptor_filename: &str,
    follow_links: bool,
) -> Option<SolutionLayout> {
    if !root.is_dir() {
        debug!(root = %root.display(), "source directory is not a directory");
        return None;
    }

    let solution_descriptor = root.join(descriptor_filename);
    if !solution_descriptor.is_file() {
        debug!(root = %root.display(), descriptor_filename, "no solution descriptor at root");
        return None;
    }

    let project_descriptors = search_projects(root, descriptor_filename, follow_links);
    debug!(
        solution = %solution_descriptor.display(),
        projects = project_descriptors.len(),
        "discovered descriptors"
    );

    Some(SolutionLayout {
        solution_descriptor,
        project_descriptors,
    })
}

fn search_projects(root: &Path, descriptor_filename: &str, follow_links: bool) -> Vec<PathBuf> {
    let marker = descriptor_filename.to_string();
    let mut builder = build_walker(root, &WalkOptions::new(follow_links));

    // Entries whose parent directory is a project are pruned before descent.
    builder.filter_entry(move |entry| !inside_project(entry, &marker));

    let mut projects = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "walk error during descriptor discovery");
                continue;
            }
        };

        if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }

        let descriptor = entry.path().join(descriptor_filename);
        if descriptor.is_file() {
            trace!(descriptor = %descriptor.display(), "found project descriptor");
            projects.push(descriptor);
        }
    }
    projects
}

/// True when `entry` lives directly inside a non-root directory that holds the marker.
fn inside_project(entry: &DirEntry, marker: &str) -> bool {
    entry.depth() >= 2
        && entry
            .path()
            .parent()
            .is_some_and(|parent| parent.join(marker).is_file())
}
