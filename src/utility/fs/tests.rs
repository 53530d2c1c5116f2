// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::walk::{WalkOptions, build_walker};
use std::path::PathBuf;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn walked_files(temp: &TempDir, options: &WalkOptions) -> Vec<PathBuf> {
    build_walker(temp.path(), options)
        .build()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .map(|entry| entry.path().strip_prefix(temp.path()).unwrap().to_path_buf())
        .collect()
}

#[test]
fn test_walk_is_sorted_and_unfiltered() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("b")).unwrap();
    std::fs::create_dir_all(temp.path().join(".hidden")).unwrap();
    std::fs::write(temp.path().join("b/z.cpp"), "").unwrap();
    std::fs::write(temp.path().join("a.cpp"), "").unwrap();
    std::fs::write(temp.path().join(".hidden/h.cpp"), "").unwrap();
    std::fs::write(temp.path().join(".gitignore"), "a.cpp\n").unwrap();

    let files = walked_files(&temp, &WalkOptions::default());

    assert_eq!(
        files,
        vec![
            PathBuf::from(".gitignore"),
            PathBuf::from(".hidden/h.cpp"),
            PathBuf::from("a.cpp"),
            PathBuf::from("b/z.cpp"),
        ]
    );
}

#[test]
fn test_walk_options_defaults() {
    assert!(WalkOptions::default().follow_links());
    assert!(!WalkOptions::new(false).follow_links());
}

#[cfg(unix)]
#[test]
fn test_walk_survives_symlink_loop() {
    let temp = temp_dir();
    std::fs::create_dir_all(temp.path().join("src")).unwrap();
    std::fs::write(temp.path().join("src/main.cpp"), "").unwrap();
    std::os::unix::fs::symlink(temp.path(), temp.path().join("src/loop")).unwrap();

    let files = walked_files(&temp, &WalkOptions::new(true));

    assert_eq!(files, vec![PathBuf::from("src/main.cpp")]);
}
