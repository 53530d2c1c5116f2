// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! walk:  build_walker()   ignore::WalkBuilder, sorted, sequential
//!        WalkOptions      follow_links
//! ```

pub mod walk;

#[cfg(test)]
mod tests;
