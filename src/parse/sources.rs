// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source file discovery for one project directory.
//!
//! ```text
//! .h .c .i .hpp .cpp .cc .cxx .c++ .hh .hxx .h++ .ii
//! ```
//!
//! The extension set is the same for every project type, Qt included.
//! Every directory under the project is walked, nested projects included.
//! Symbolic links are followed when asked to; a link back to an ancestor is
//! reported and skipped.

use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::utility::fs::walk::{WalkOptions, build_walker};

/// C and C++ header/source extensions, lowercase, without the dot.
pub const CXX_EXTENSIONS: &[&str] = &[
    "h", "c", "i", "hpp", "cpp", "cc", "cxx", "c++", "hh", "hxx", "h++", "ii",
];

/// Whether `path` has a source extension (case-insensitive).
#[must_use]
pub fn is_source(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| CXX_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Source files under `project_path`, relative to it, in walk order.
#[must_use]
pub fn collect_sources(project_path: &Path, follow_links: bool) -> Vec<PathBuf> {
    let walker = build_walker(project_path, &WalkOptions::new(follow_links)).build();

    let mut files = Vec::new();
    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                warn!(project = %project_path.display(), error = %e, "walk error during source discovery");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) || !is_source(entry.path()) {
            continue;
        }

        if let Ok(relative) = entry.path().strip_prefix(project_path) {
            trace!(file = %relative.display(), "source file");
            files.push(relative.to_path_buf());
        }
    }
    files
}
