//! Shared configuration storage.
//!
//! The store is the explicit configuration-service object handed to
//! dialogs and the startup gate at construction; there is no ambient
//! process-wide settings singleton.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Thread-safe config container with interior mutability.
///
/// Allows multiple readers to access config concurrently while
/// supporting atomic replacement when a dialog result is applied or
/// the file is reloaded.
#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore from initial config and path.
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Get a clone of the current config.
    ///
    /// This is cheap because Config is Clone.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Atomically replace the current config.
    pub fn replace(&self, config: Config) {
        *self.inner.write() = config;
    }

    /// Reload config from the file.
    ///
    /// On success, atomically replaces the current config.
    /// On failure, keeps the old config and returns the error.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    /// Persist the current config to the store's file.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.get().save_to(&self.path)
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
