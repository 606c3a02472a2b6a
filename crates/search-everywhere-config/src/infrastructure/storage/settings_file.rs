//! Settings documents read from the host's settings files.
//!
//! The editor keeps settings in two files:
//! - user:      `<platform config dir>/Code/User/settings.json`
//! - workspace: `<workspace root>/.vscode/settings.json`
//!
//! # Flat and nested keys
//!
//! Editors usually write settings with flat, dot-joined keys:
//!
//! ```json
//! {
//!   "searchEverywhere.shouldHighlightSymbol": true,
//!   "files.exclude": { "**/.git": true }
//! }
//! ```
//!
//! Hand-written files (and every TOML file) tend to nest them instead:
//!
//! ```toml
//! [searchEverywhere]
//! shouldHighlightSymbol = true
//!
//! [files.exclude]
//! "**/.git" = true
//! ```
//!
//! [`SettingsDocument::lookup`] accepts both forms, and any mix of the two.
//!
//! Only plain JSON is accepted; comments and trailing commas are parse errors.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::application::config::SettingsStore;

/// Error type for settings file operations.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing settings at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The JSON content could not be parsed.
    #[error("failed to parse settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse settings TOML: {0}")]
    Toml(#[from] toml::de::Error),

    /// The document parsed, but its top level is not an object/table.
    #[error("settings document must be an object at the top level")]
    NotAnObject,

    /// The file extension is neither `.json` nor `.toml`.
    #[error("unsupported settings file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// One parsed settings file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsDocument {
    root: Map<String, Value>,
}

impl SettingsDocument {
    /// A document with no settings.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Json`] for malformed JSON and
    /// [`SettingsError::NotAnObject`] when the top level is not an object.
    pub fn from_json_str(content: &str) -> Result<Self, SettingsError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(value)
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Toml`] for malformed TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let value: Value = toml::from_str(content)?;
        Self::from_value(value)
    }

    /// Wraps an already-parsed value.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::NotAnObject`] unless `value` is an object.
    pub fn from_value(value: Value) -> Result<Self, SettingsError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            _ => Err(SettingsError::NotAnObject),
        }
    }

    /// Reads and parses the file at `path`, choosing the parser by extension.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnsupportedFormat`] for unknown extensions,
    /// [`SettingsError::Io`] when the file cannot be read, and a parse error
    /// when its content is malformed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded settings from {}", path.display());
        format.parse(&content)
    }

    /// Like [`SettingsDocument::load`], but a missing file yields an empty
    /// document.
    ///
    /// # Errors
    ///
    /// Same as [`SettingsDocument::load`], except for "not found".
    pub fn load_or_empty(path: &Path) -> Result<Self, SettingsError> {
        match Self::load(path) {
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                debug!(
                    "no settings file at {}, using empty document",
                    path.display()
                );
                Ok(Self::empty())
            }
            other => other,
        }
    }

    /// Value at the dot-joined `path`, if the document defines it.
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        resolve(&self.root, path)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl SettingsStore for SettingsDocument {
    fn get(&self, section_path: &str, default: &Value) -> Value {
        self.lookup(section_path)
            .cloned()
            .unwrap_or_else(|| default.clone())
    }
}

/// Looks `path` up as a flat key first, then splits it at each dot and
/// descends into any nested object named by the head.
fn resolve<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(value) = map.get(path) {
        return Some(value);
    }
    path.match_indices('.').find_map(|(i, _)| {
        let (head, rest) = (&path[..i], &path[i + 1..]);
        match map.get(head) {
            Some(Value::Object(inner)) => resolve(inner, rest),
            _ => None,
        }
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> Result<Self, SettingsError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Format::Toml),
            _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse(self, content: &str) -> Result<SettingsDocument, SettingsError> {
        match self {
            Format::Json => SettingsDocument::from_json_str(content),
            Format::Toml => SettingsDocument::from_toml_str(content),
        }
    }
}

// ── Settings file locations ───────────────────────────────────────────────────

/// Platform config base directory (`%APPDATA%`, `$XDG_CONFIG_HOME` or
/// `~/.config`, `~/Library/Application Support`).
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] when the directory cannot be
/// determined from the environment.
pub fn config_dir() -> Result<PathBuf, SettingsError> {
    platform_config_dir().ok_or(SettingsError::NoPlatformConfigDir)
}

/// Full path of the user's `settings.json`.
///
/// # Errors
///
/// Returns [`SettingsError::NoPlatformConfigDir`] if the base directory cannot
/// be determined.
pub fn user_settings_path() -> Result<PathBuf, SettingsError> {
    Ok(user_settings_path_in(&config_dir()?))
}

/// Path of the user's `settings.json` below the config base directory `dir`.
pub fn user_settings_path_in(dir: &Path) -> PathBuf {
    dir.join("Code").join("User").join("settings.json")
}

/// Full path of a workspace's `settings.json`.
pub fn workspace_settings_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join(".vscode").join("settings.json")
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config"))
            })
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
