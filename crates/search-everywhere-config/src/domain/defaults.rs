//! Built-in fallback values for every setting.
//!
//! A [`SettingsDefaults`] record is built once, usually with
//! [`SettingsDefaults::default()`] (every flag off, every collection empty),
//! and handed to the facade by reference.  Nothing mutates it afterwards.

use super::icons::Icons;
use super::items_filter::ItemsFilter;

/// Fallback value for each setting, used when the store has none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsDefaults {
    pub should_display_notification_in_status_bar: bool,
    pub should_init_on_startup: bool,
    pub should_highlight_symbol: bool,
    pub should_use_debounce: bool,
    pub icons: Icons,
    pub items_filter: ItemsFilter,
    /// Fallback for `searchEverywhere.exclude`, `files.exclude` and `search.exclude`.
    pub exclude: Vec<String>,
    pub include: Vec<String>,
    pub should_use_files_and_search_exclude: bool,
}
