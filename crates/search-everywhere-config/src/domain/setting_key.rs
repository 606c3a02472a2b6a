//! Setting names and the namespaces that contain them.
//!
//! The host settings store addresses every value by a dot-joined path such as
//! `searchEverywhere.shouldHighlightSymbol` or `files.exclude`.  The first
//! part is the [`Section`], the second the [`SettingKey`].

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Returned when a string does not name a known setting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown setting key: {0}")]
pub struct UnknownSettingKey(pub String);

/// The closed set of settings the extension understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SettingKey {
    ShouldDisplayNotificationInStatusBar,
    ShouldInitOnStartup,
    ShouldHighlightSymbol,
    ShouldUseDebounce,
    Icons,
    ItemsFilter,
    Exclude,
    Include,
    ShouldUseFilesAndSearchExclude,
}

impl SettingKey {
    /// Every key, in declaration order.
    pub const ALL: [SettingKey; 9] = [
        SettingKey::ShouldDisplayNotificationInStatusBar,
        SettingKey::ShouldInitOnStartup,
        SettingKey::ShouldHighlightSymbol,
        SettingKey::ShouldUseDebounce,
        SettingKey::Icons,
        SettingKey::ItemsFilter,
        SettingKey::Exclude,
        SettingKey::Include,
        SettingKey::ShouldUseFilesAndSearchExclude,
    ];

    /// The camelCase name used in the settings store.
    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::ShouldDisplayNotificationInStatusBar => {
                "shouldDisplayNotificationInStatusBar"
            }
            SettingKey::ShouldInitOnStartup => "shouldInitOnStartup",
            SettingKey::ShouldHighlightSymbol => "shouldHighlightSymbol",
            SettingKey::ShouldUseDebounce => "shouldUseDebounce",
            SettingKey::Icons => "icons",
            SettingKey::ItemsFilter => "itemsFilter",
            SettingKey::Exclude => "exclude",
            SettingKey::Include => "include",
            SettingKey::ShouldUseFilesAndSearchExclude => "shouldUseFilesAndSearchExclude",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = UnknownSettingKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSettingKey(s.to_string()))
    }
}

/// Namespace prefix under which a setting is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    /// The extension's own section.
    #[default]
    SearchEverywhere,
    /// The editor's `files.*` settings.
    Files,
    /// The editor's `search.*` settings.
    Search,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::SearchEverywhere => "searchEverywhere",
            Section::Files => "files",
            Section::Search => "search",
        }
    }

    /// Full dot-joined path of `key` inside this section.
    ///
    /// The same string is used as the cache key and as the lookup path in the
    /// settings store, so `files.exclude` and `search.exclude` never share an
    /// entry.
    pub fn path(self, key: SettingKey) -> String {
        format!("{}.{}", self.as_str(), key.as_str())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
