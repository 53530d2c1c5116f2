// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Descriptor parsing.
//!
//! ```text
//! cmm.json --read--> serde_json::Map
//!     |
//!     +--> Fields::get(key, default)   lenient: wrong type => default
//!     |
//!     +--> solution::parse_solution()  SolutionConfig
//!     +--> project::parse_project()    ProjectConfig (+ sources::collect_sources)
//!     |
//!     v
//! aggregate::parse_solution_and_projects()  Configuration
//! ```
//!
//! A recognized key holding the wrong JSON type never fails a descriptor;
//! the field keeps its default. Only an empty `name` does.

pub mod aggregate;
pub mod project;
pub mod solution;
pub mod sources;


use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::DescriptorError;

/// A JSON value kind a descriptor field may hold.
pub trait FieldKind: Sized {
    /// Human-readable kind, used in diagnostics.
    const KIND: &'static str;

    /// Converts `value` if it has this kind.
    fn from_json(value: &Value) -> Option<Self>;
}

impl FieldKind for String {
    const KIND: &'static str = "string";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FieldKind for bool {
    const KIND: &'static str = "boolean";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldKind for i64 {
    const KIND: &'static str = "integer";

    /// Integral floats such as `17.0` count as integers.
    #[allow(clippy::cast_possible_truncation)]
    fn from_json(value: &Value) -> Option<Self> {
        const RANGE: std::ops::Range<f64> = -9.223_372_036_854_776e18..9.223_372_036_854_776e18;
        value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && RANGE.contains(f))
                .map(|f| f as i64)
        })
    }
}

impl FieldKind for Vec<String> {
    const KIND: &'static str = "array of string";

    fn from_json(value: &Value) -> Option<Self> {
        value
            .as_array()?
            .iter()
            .map(|item| item.as_str().map(str::to_string))
            .collect()
    }
}

/// `raw` converted to `T`, or `default` when absent or of another kind.
#[must_use]
pub fn lenient<T: FieldKind>(raw: Option<&Value>, default: T) -> T {
    raw.and_then(T::from_json).unwrap_or(default)
}

/// Lenient accessor over one descriptor object.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    object: &'a Map<String, Value>,
    origin: &'a Path,
}

impl<'a> Fields<'a> {
    #[must_use]
    pub const fn new(object: &'a Map<String, Value>, origin: &'a Path) -> Self {
        Self { object, origin }
    }

    /// Raw value of `key`, if present.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key)
    }

    /// Value of `key` as `T`, or `default`.
    #[must_use]
    pub fn get<T: FieldKind>(&self, key: &str, default: T) -> T {
        let raw = self.raw(key);
        if let Some(value) = raw
            && T::from_json(value).is_none()
        {
            debug!(
                descriptor = %self.origin.display(),
                key,
                expected = T::KIND,
                "ignoring field of unexpected type"
            );
        }
        lenient(raw, default)
    }

    /// Nested object under `key`, if it is one.
    #[must_use]
    pub fn object(&self, key: &str) -> Option<Fields<'a>> {
        self.raw(key)
            .and_then(Value::as_object)
            .map(|object| Fields::new(object, self.origin))
    }
}

/// Reads `path` and returns its top-level JSON object.
///
/// # Errors
///
/// Returns [`DescriptorError::Read`] if the file cannot be read,
/// [`DescriptorError::Json`] for malformed JSON or invalid UTF-8, and
/// [`DescriptorError::NotAnObject`] if the root is not an object.
pub fn read_descriptor(path: &Path) -> Result<Map<String, Value>, DescriptorError> {
    let content = std::fs::read(path).map_err(|source| DescriptorError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_slice(&content).map_err(|source| DescriptorError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(object) => Ok(object),
        _ => Err(DescriptorError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}
