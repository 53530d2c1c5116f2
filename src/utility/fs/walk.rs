// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use bon::Builder;
use ignore::WalkBuilder;
use std::path::Path;

/// Options for sequential directory traversal.
///
/// Every entry is visited: hidden files are included and ignore files are
/// not consulted.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Follow symbolic links; loops are reported as walk errors
    #[builder(setters(name = with_follow_links), default = true)]
    follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub fn new(follow_links: bool) -> Self {
        Self::builder().with_follow_links(follow_links).build()
    }

    /// Returns whether to follow symbolic links.
    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }
}

/// Builds a `WalkBuilder` with the given options.
///
/// Entries are yielded depth-first in file-name order, so two walks over an
/// unchanged tree produce the same sequence.
pub(crate) fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder.follow_links(options.follow_links());
    builder.standard_filters(false);
    builder.require_git(false);
    builder.sort_by_file_name(|a, b| a.cmp(b));

    builder
}
