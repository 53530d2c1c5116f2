// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lexical path helpers for generated scripts.
//!
//! Nothing here touches the filesystem: generated paths must not depend on
//! whether a directory exists yet or on how symlinks resolve.

use std::path::{Component, Path, PathBuf};

/// Removes `.` components and folds `..` into the preceding normal component.
#[must_use]
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    components.iter().collect()
}

/// `raw` as an absolute path: unchanged when absolute, joined onto `base` otherwise.
#[must_use]
pub fn resolve(base: &Path, raw: impl AsRef<Path>) -> PathBuf {
    let raw = raw.as_ref();
    if raw.is_absolute() {
        normalize_path(raw)
    } else {
        normalize_path(&base.join(raw))
    }
}

/// `target` expressed relative to `base`.
///
/// Returns an empty path when both name the same directory, and `target`
/// unchanged when the two share no root (different drives).
#[must_use]
pub fn relative_path(base: &Path, target: &Path) -> PathBuf {
    let base = normalize_path(base);
    let target = normalize_path(target);

    let base_components: Vec<_> = base.components().collect();
    let target_components: Vec<_> = target.components().collect();

    let common = base_components
        .iter()
        .zip(&target_components)
        .take_while(|(a, b)| a == b)
        .count();

    if common == 0 && (base.has_root() || target.has_root()) {
        return target;
    }

    let mut relative = PathBuf::new();
    for _ in common..base_components.len() {
        relative.push("..");
    }
    for component in &target_components[common..] {
        relative.push(component);
    }
    relative
}

/// Path text with forward slashes, whatever the host separator.
#[must_use]
pub fn to_cmake_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Insertion-ordered set of directories.
#[derive(Debug, Clone, Default)]
pub struct OrderedPaths {
    order: Vec<PathBuf>,
    seen: std::collections::BTreeSet<PathBuf>,
}

impl OrderedPaths {
    /// Adds `path` (normalized) unless already present.
    pub fn insert(&mut self, path: &Path) {
        let path = normalize_path(path);
        if self.seen.insert(path.clone()) {
            self.order.push(path);
        }
    }

    /// Paths in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.order.iter().map(PathBuf::as_path)
    }
}
