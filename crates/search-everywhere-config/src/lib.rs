//! # search-everywhere-config
//!
//! Typed, defaulted and cached access to the settings of the "search
//! everywhere" editor extension.
//!
//! # Architecture overview (for beginners)
//!
//! The extension asks questions such as "should the matching symbol be
//! highlighted?" or "which glob patterns are excluded?".  The answers live in
//! the editor's settings store (the user's `settings.json` plus the
//! workspace's `.vscode/settings.json`).  Reading that store on every call
//! would be wasteful, so answers are remembered in a cache owned by the
//! extension.
//!
//! The crate is organised in three layers:
//!
//! - **`domain`** – The closed set of setting names ([`SettingKey`]), the
//!   namespaces they live in ([`Section`]), plain data shapes ([`Icons`],
//!   [`ItemsFilter`]) and the built-in fallback values ([`SettingsDefaults`]).
//!
//! - **`application`** – The [`Config`] facade with one getter per setting,
//!   and the two collaborator traits it is built on: [`ConfigCache`] and
//!   [`SettingsStore`].
//!
//! - **`infrastructure`** – Concrete collaborators: an in-memory cache and
//!   settings documents loaded from JSON or TOML files.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::config::{Config, ConfigCache, SettingsStore};
pub use domain::defaults::SettingsDefaults;
pub use domain::icons::Icons;
pub use domain::items_filter::ItemsFilter;
pub use domain::setting_key::{Section, SettingKey};
pub use infrastructure::cache::InMemoryConfigCache;
pub use infrastructure::storage::layered::LayeredSettingsStore;
pub use infrastructure::storage::settings_file::{SettingsDocument, SettingsError};
