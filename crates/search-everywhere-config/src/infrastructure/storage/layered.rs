//! User + workspace settings resolution.
//!
//! The editor resolves a setting by checking the workspace's settings first
//! and the user's settings second.  [`LayeredSettingsStore`] does the same
//! over two [`SettingsDocument`]s.  Values are not merged: a workspace
//! `files.exclude` replaces the user's `files.exclude` entirely.

use std::path::Path;

use serde_json::Value;

use super::settings_file::{
    config_dir, user_settings_path_in, workspace_settings_path, SettingsDocument, SettingsError,
};
use crate::application::config::SettingsStore;

/// Settings store that prefers workspace values over user values.
#[derive(Debug, Clone, Default)]
pub struct LayeredSettingsStore {
    user: SettingsDocument,
    workspace: SettingsDocument,
}

impl LayeredSettingsStore {
    pub fn new(user: SettingsDocument, workspace: SettingsDocument) -> Self {
        Self { user, workspace }
    }

    /// Loads both layers from disk.  A missing file is an empty layer.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if either file exists but cannot be read or
    /// parsed.
    pub fn load(user_path: &Path, workspace_path: &Path) -> Result<Self, SettingsError> {
        Ok(Self::new(
            SettingsDocument::load_or_empty(user_path)?,
            SettingsDocument::load_or_empty(workspace_path)?,
        ))
    }

    /// Loads the platform user settings and the settings of the workspace
    /// rooted at `workspace_root`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NoPlatformConfigDir`] when the user settings
    /// location cannot be determined, otherwise as [`LayeredSettingsStore::load`].
    pub fn discover(workspace_root: &Path) -> Result<Self, SettingsError> {
        Self::discover_in(&config_dir()?, workspace_root)
    }

    /// Like [`LayeredSettingsStore::discover`], with the user settings looked
    /// up below `config_dir` instead of the platform directory.
    ///
    /// # Errors
    ///
    /// As [`LayeredSettingsStore::load`].
    pub fn discover_in(config_dir: &Path, workspace_root: &Path) -> Result<Self, SettingsError> {
        Self::load(
            &user_settings_path_in(config_dir),
            &workspace_settings_path(workspace_root),
        )
    }

    pub fn user(&self) -> &SettingsDocument {
        &self.user
    }

    pub fn workspace(&self) -> &SettingsDocument {
        &self.workspace
    }

    /// Value at `path` from the highest-priority layer that defines it.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        self.workspace
            .lookup(path)
            .or_else(|| self.user.lookup(path))
    }
}

impl SettingsStore for LayeredSettingsStore {
    fn get(&self, section_path: &str, default: &Value) -> Value {
        self.lookup(section_path)
            .cloned()
            .unwrap_or_else(|| default.clone())
    }
}
