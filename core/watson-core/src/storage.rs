//! Path configuration for Watson data.
//!
//! Production code uses `StorageConfig::default()` which resolves the user's
//! configuration directory (e.g. `~/.config/watson` on Linux). Tests inject a
//! temp directory via `StorageConfig::with_root()`.

use std::path::{Path, PathBuf};

/// Location of the Watson configuration directory.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory for Watson data (default: `<user-config-dir>/watson`).
    config_root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        let config_dir = dirs::config_dir().expect("Could not find user config directory");
        Self {
            config_root: config_dir.join("watson"),
        }
    }
}

impl StorageConfig {
    /// Creates a StorageConfig with a custom root directory.
    /// Used for testing with temp directories.
    pub fn with_root(config_root: PathBuf) -> Self {
        Self { config_root }
    }

    /// Returns the Watson configuration directory.
    pub fn config_root(&self) -> &Path {
        &self.config_root
    }

    /// Path to the state file Watson rewrites on every start/stop.
    pub fn state_file(&self) -> PathBuf {
        self.config_root.join("state")
    }
}
