// cmm: CMake Maker
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run configuration for cmm.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. cmm.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. CMM_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CMM_GENERATOR__CMAKE_MINIMUM_REQUIRED=3.16 → generator.cmake_minimum_required
//! CMM_DISCOVERY__DESCRIPTOR_FILENAME=x.json  → discovery.descriptor_filename
//! CMM_LOG__LEVEL=4                           → log.level
//! ```
//!
//! The descriptors themselves are not read through this layer; they are
//! parsed leniently by [`crate::parse`].

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{DiscoveryConfig, GeneratorConfig, LogSettings};

/// Complete run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Script generator options.
    pub generator: GeneratorConfig,
    /// Discovery options.
    pub discovery: DiscoveryConfig,
    /// Logging options.
    pub log: LogSettings,
}

impl RunConfig {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cmm::config::RunConfig;
    ///
    /// let config = RunConfig::builder()
    ///     .add_toml_file_optional("cmm.toml")
    ///     .with_env_prefix("CMM")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `RunConfig` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `RunConfig` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Reject values that deserialize fine but cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns an error if a filename or the minimum version is empty.
    pub fn validate(&self) -> Result<()> {
        use crate::error::ConfigError;

        let required = [
            (
                "generator",
                "cmake_minimum_required",
                &self.generator.cmake_minimum_required,
            ),
            (
                "generator",
                "output_filename",
                &self.generator.output_filename,
            ),
            (
                "generator",
                "sources_variable",
                &self.generator.sources_variable,
            ),
            (
                "discovery",
                "descriptor_filename",
                &self.discovery.descriptor_filename,
            ),
        ];

        for (section, key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    section: section.to_string(),
                    key: key.to_string(),
                    message: "must not be empty".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}
