//! Storage infrastructure: reading the host's settings files.
//!
//! The `settings_file` sub-module handles:
//!
//! - Locating the user and workspace settings files for the current platform.
//! - Parsing them from JSON or TOML into a [`settings_file::SettingsDocument`].
//! - Resolving dot-joined setting paths against flat or nested documents.
//!
//! The `layered` sub-module stacks a workspace document over a user document.

pub mod layered;
pub mod settings_file;
