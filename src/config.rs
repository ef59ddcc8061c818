//! Configuration management and validation.
//!
//! Provides the configuration structures for store locations and parser
//! behavior, with platform defaults resolved through the `dirs` crate.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, DATA_DIR_NAME, SSYSTEM_FILE_NAME};
use crate::{Error, Result};

/// Store location configuration
///
/// The importer never writes to an installation-provided store. It maintains
/// a per-user writable copy, bootstrapped from the installation default the
/// first time an import runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Per-user data directory holding the writable store copy
    pub user_data_dir: PathBuf,

    /// Installation-provided default store used to seed the user copy.
    /// When absent, a missing user store starts out empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_store: Option<PathBuf>,
}

/// Parser behavior configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Accept records whose fractional-digit counts fall below the published
    /// format (several real MPC distribution files carry such lines)
    pub variable_precision: bool,
}

/// Global configuration for the MPC importer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
    pub parser: ParserConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig {
                user_data_dir: default_user_data_dir(),
                default_store: None,
            },
            parser: ParserConfig::default(),
        }
    }
}

impl Config {
    /// Create configuration with a custom user data directory
    pub fn with_user_data_dir(mut self, dir: PathBuf) -> Self {
        self.paths.user_data_dir = dir;
        self
    }

    /// Create configuration with an installation default store
    pub fn with_default_store(mut self, store: PathBuf) -> Self {
        self.paths.default_store = Some(store);
        self
    }

    /// Enable variable-precision parsing
    pub fn with_variable_precision(mut self) -> Self {
        self.parser.variable_precision = true;
        self
    }

    /// Path of the per-user writable store
    pub fn user_store_path(&self) -> PathBuf {
        self.paths
            .user_data_dir
            .join(DATA_DIR_NAME)
            .join(SSYSTEM_FILE_NAME)
    }

    /// Validate the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(default_store) = &self.paths.default_store {
            if !default_store.exists() {
                return Err(Error::configuration(format!(
                    "Default store does not exist: {}",
                    default_store.display()
                )));
            }
            if !default_store.is_file() {
                return Err(Error::configuration(format!(
                    "Default store is not a file: {}",
                    default_store.display()
                )));
            }
        }
        Ok(())
    }
}

/// Platform default for the per-user data directory
///
/// Falls back to a dotted directory under the current directory when the
/// platform reports no data directory (e.g. stripped-down containers).
pub fn default_user_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from(".").join(format!(".{APP_DIR_NAME}")))
        .join(APP_DIR_NAME)
}
