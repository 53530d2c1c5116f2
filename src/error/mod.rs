// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        CmmError (~16 bytes)
//!               |
//!   +-----------+-----------+
//!   |           |           |
//!   v           v           v
//! Descriptor  Config        Fs
//!   Box        Box          Box
//!
//! Sub-errors (unboxed internally):
//!   Descriptor  Read (fatal), Json, NotAnObject, EmptyName
//!   Config      ParseError, InvalidValue, NotFound
//!   Fs          IoError
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`CmmError`].
pub type CmmResult<T> = std::result::Result<T, CmmError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum CmmError {
    /// A descriptor could not be turned into a configuration.
    #[error("descriptor error: {0}")]
    Descriptor(#[from] Box<DescriptorError>),

    /// Run configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for CmmError {
                fn from(err: $error) -> Self {
                    CmmError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    DescriptorError => Descriptor,
    ConfigError => Config,
    FsError => Fs,
}

// --- Descriptor Errors ---

/// Errors raised while turning a JSON descriptor into a configuration.
///
/// Only [`DescriptorError::Read`] is fatal for a run. Every other variant
/// drops the single descriptor it was raised for.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The descriptor file could not be read.
    #[error("failed to read descriptor '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not valid JSON.
    #[error("malformed descriptor '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The descriptor root is valid JSON but not an object.
    #[error("descriptor '{}' is not a JSON object", path.display())]
    NotAnObject { path: PathBuf },

    /// The `name` field ended up empty after defaulting.
    #[error("descriptor '{}' has no usable name", path.display())]
    EmptyName { path: PathBuf },
}

impl DescriptorError {
    /// Whether this error must abort the whole run.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Read { .. })
    }

    /// Path of the descriptor the error was raised for.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. }
            | Self::Json { path, .. }
            | Self::NotAnObject { path }
            | Self::EmptyName { path } => path,
        }
    }
}

// --- Config Errors ---

/// Run-configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
