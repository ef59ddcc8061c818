//! Store location, bootstrap and reset
//!
//! The importer only ever writes a per-user copy of the solar-system store.
//! On first use the copy is seeded from an installation-provided default
//! when one is configured; an existing user copy is never overwritten.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::{Error, Result};

/// Resolved locations of the user store and its installation default
#[derive(Debug, Clone)]
pub struct StoreLayout {
    user_store: PathBuf,
    default_store: Option<PathBuf>,
}

impl StoreLayout {
    /// Resolve the layout from configuration
    pub fn from_config(config: &Config) -> Self {
        Self {
            user_store: config.user_store_path(),
            default_store: config.paths.default_store.clone(),
        }
    }

    /// Path of the per-user writable store
    pub fn user_store(&self) -> &Path {
        &self.user_store
    }

    /// Make sure a writable user store exists, seeding it if needed
    ///
    /// - an existing user copy is left exactly as it is;
    /// - otherwise the configured default is copied into place;
    /// - with no default configured, an empty store file is created so the
    ///   import has something durable to extend.
    pub fn ensure_user_store(&self) -> Result<&Path> {
        if self.user_store.exists() {
            debug!(
                "Using existing user store at {}",
                self.user_store.display()
            );
            return Ok(&self.user_store);
        }

        let data_dir = self.user_store.parent().ok_or_else(|| {
            Error::configuration(format!(
                "User store path has no parent directory: {}",
                self.user_store.display()
            ))
        })?;
        fs::create_dir_all(data_dir).map_err(|e| {
            Error::sink_unavailable(self.user_store.display().to_string(), e.to_string())
        })?;

        match &self.default_store {
            Some(default) => {
                if !default.exists() {
                    return Err(Error::configuration(format!(
                        "Default store does not exist: {}",
                        default.display()
                    )));
                }
                fs::copy(default, &self.user_store).map_err(|e| {
                    Error::sink_unavailable(self.user_store.display().to_string(), e.to_string())
                })?;
                info!(
                    "Seeded user store at {} from {}",
                    self.user_store.display(),
                    default.display()
                );
            }
            None => {
                warn!(
                    "No default store configured; creating empty store at {}",
                    self.user_store.display()
                );
                fs::write(&self.user_store, "").map_err(|e| {
                    Error::sink_unavailable(self.user_store.display().to_string(), e.to_string())
                })?;
            }
        }

        Ok(&self.user_store)
    }

    /// Remove the per-user store copy
    ///
    /// Returns whether a copy existed. The installation default is never
    /// touched.
    pub fn reset_user_store(&self) -> Result<bool> {
        if !self.user_store.exists() {
            debug!("No user store at {}", self.user_store.display());
            return Ok(false);
        }

        fs::remove_file(&self.user_store).map_err(|e| {
            Error::io(
                format!("Failed to remove user store {}", self.user_store.display()),
                e,
            )
        })?;
        info!("Removed user store at {}", self.user_store.display());
        Ok(true)
    }
}
