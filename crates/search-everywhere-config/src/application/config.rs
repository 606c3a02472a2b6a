//! The settings facade.
//!
//! [`Config`] exposes one zero-argument getter per setting.  Every getter goes
//! through the same read-through path:
//!
//! 1. Build the key `"<section>.<setting>"`.
//! 2. Ask the [`ConfigCache`].  A truthy cached value is returned as is.
//! 3. Otherwise read the [`SettingsStore`] (which substitutes the default when
//!    it has no value), write the result back into the cache and return it.
//!
//! # Falsy values are never cache hits
//!
//! Step 2 uses host truthiness (see [`super::truthy`]), so a cached `false`,
//! `0` or `""` is treated like a miss and re-read from the store on every
//! call.  A user who deliberately sets a flag to `false` therefore pays one
//! store read per call.  The behaviour matches the extension host and is kept
//! as is.
//!
//! # No errors
//!
//! Getters never fail.  A value of the wrong shape is logged and replaced by
//! the default.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::exclude::{enabled_patterns, merge_pattern_flags, pattern_flags};
use super::truthy::is_truthy;
use crate::domain::defaults::SettingsDefaults;
use crate::domain::icons::Icons;
use crate::domain::items_filter::ItemsFilter;
use crate::domain::setting_key::{Section, SettingKey};

/// Key-value cache owned outside the facade.
///
/// The facade only reads and writes entries; clearing them is the owner's
/// business.
pub trait ConfigCache: Send + Sync {
    /// Cached value for `key`, if any.
    fn get(&self, key: &str) -> Option<Value>;

    /// Stores `value` under `key`, replacing any previous entry.
    fn set(&self, key: &str, value: Value);
}

/// The host's settings store.
#[cfg_attr(test, mockall::automock)]
pub trait SettingsStore: Send + Sync {
    /// Value at the dot-joined `section_path`, or a copy of `default` when the
    /// store has none.
    fn get(&self, section_path: &str, default: &Value) -> Value;
}

/// Typed, defaulted, cached access to the extension settings.
pub struct Config<'d> {
    cache: Arc<dyn ConfigCache>,
    store: Arc<dyn SettingsStore>,
    defaults: &'d SettingsDefaults,
}

impl<'d> Config<'d> {
    pub fn new(
        cache: Arc<dyn ConfigCache>,
        store: Arc<dyn SettingsStore>,
        defaults: &'d SettingsDefaults,
    ) -> Self {
        Self {
            cache,
            store,
            defaults,
        }
    }

    pub fn should_display_notification_in_status_bar(&self) -> bool {
        self.get(
            SettingKey::ShouldDisplayNotificationInStatusBar,
            &self.defaults.should_display_notification_in_status_bar,
        )
    }

    pub fn should_init_on_startup(&self) -> bool {
        self.get(
            SettingKey::ShouldInitOnStartup,
            &self.defaults.should_init_on_startup,
        )
    }

    pub fn should_highlight_symbol(&self) -> bool {
        self.get(
            SettingKey::ShouldHighlightSymbol,
            &self.defaults.should_highlight_symbol,
        )
    }

    pub fn should_use_debounce(&self) -> bool {
        self.get(
            SettingKey::ShouldUseDebounce,
            &self.defaults.should_use_debounce,
        )
    }

    pub fn icons(&self) -> Icons {
        self.get(SettingKey::Icons, &self.defaults.icons)
    }

    pub fn items_filter(&self) -> ItemsFilter {
        self.get(SettingKey::ItemsFilter, &self.defaults.items_filter)
    }

    /// Glob patterns from `searchEverywhere.exclude`.
    pub fn exclude(&self) -> Vec<String> {
        self.get(SettingKey::Exclude, &self.defaults.exclude)
    }

    /// Glob patterns from `searchEverywhere.include`.
    pub fn include(&self) -> Vec<String> {
        self.get(SettingKey::Include, &self.defaults.include)
    }

    pub fn should_use_files_and_search_exclude(&self) -> bool {
        self.get(
            SettingKey::ShouldUseFilesAndSearchExclude,
            &self.defaults.should_use_files_and_search_exclude,
        )
    }

    /// Enabled patterns of the editor's `files.exclude` and `search.exclude`.
    ///
    /// Both maps are merged with `files.exclude` first, so `search.exclude`
    /// decides the flag of a pattern present in both.  The result is sorted.
    pub fn files_and_search_exclude(&self) -> Vec<String> {
        let default = to_json(&self.defaults.exclude);
        let files = self.get_value(SettingKey::Exclude, &default, Section::Files);
        let search = self.get_value(SettingKey::Exclude, &default, Section::Search);

        let merged = merge_pattern_flags([pattern_flags(&files), pattern_flags(&search)]);
        enabled_patterns(&merged)
    }

    fn get<T>(&self, key: SettingKey, default: &T) -> T
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        self.get_in(key, default, Section::default())
    }

    fn get_in<T>(&self, key: SettingKey, default: &T, section: Section) -> T
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        let value = self.get_value(key, &to_json(default), section);
        match serde_json::from_value(value) {
            Ok(typed) => typed,
            Err(e) => {
                warn!(
                    "setting {} has an unexpected shape, using default: {e}",
                    section.path(key)
                );
                default.clone()
            }
        }
    }

    fn get_value(&self, key: SettingKey, default: &Value, section: Section) -> Value {
        let cache_key = section.path(key);

        if let Some(cached) = self.cache.get(&cache_key) {
            if is_truthy(&cached) {
                debug!("config cache hit: {cache_key}");
                return cached;
            }
        }

        debug!("config cache miss: {cache_key}");
        let value = self.store.get(&cache_key, default);
        self.cache.set(&cache_key, value.clone());
        value
    }
}

fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::InMemoryConfigCache;
    use serde_json::json;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn store_returning_defaults() -> MockSettingsStore {
        let mut store = MockSettingsStore::new();
        store.expect_get().returning(|_, default| default.clone());
        store
    }

    fn store_with(path: &'static str, value: Value, times: usize) -> MockSettingsStore {
        let mut store = MockSettingsStore::new();
        store
            .expect_get()
            .withf(move |p, _| p == path)
            .times(times)
            .returning(move |_, _| value.clone());
        store
    }

    fn config_over(store: MockSettingsStore, defaults: &SettingsDefaults) -> Config<'_> {
        Config::new(
            Arc::new(InMemoryConfigCache::new()),
            Arc::new(store),
            defaults,
        )
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_every_getter_returns_default_when_store_is_empty() {
        // Arrange
        let defaults = SettingsDefaults::default();
        let config = config_over(store_returning_defaults(), &defaults);

        // Act / Assert
        assert!(!config.should_display_notification_in_status_bar());
        assert!(!config.should_init_on_startup());
        assert!(!config.should_highlight_symbol());
        assert!(!config.should_use_debounce());
        assert!(config.icons().is_empty());
        assert_eq!(config.items_filter(), ItemsFilter::default());
        assert!(config.exclude().is_empty());
        assert!(config.include().is_empty());
        assert!(!config.should_use_files_and_search_exclude());
        assert!(config.files_and_search_exclude().is_empty());
    }

    #[test]
    fn test_custom_defaults_record_is_used() {
        let defaults = SettingsDefaults {
            should_use_debounce: true,
            include: vec!["src/**".to_string()],
            ..SettingsDefaults::default()
        };
        let config = config_over(store_returning_defaults(), &defaults);

        assert!(config.should_use_debounce());
        assert_eq!(config.include(), vec!["src/**".to_string()]);
    }

    #[test]
    fn test_missing_value_caches_the_default() {
        let defaults = SettingsDefaults::default();
        let cache = Arc::new(InMemoryConfigCache::new());
        let store = store_returning_defaults();
        let config = Config::new(cache.clone(), Arc::new(store), &defaults);

        let _ = config.icons();

        assert_eq!(cache.get("searchEverywhere.icons"), Some(json!({})));
    }

    // ── Read-through caching ──────────────────────────────────────────────────

    #[test]
    fn test_stored_value_is_read_once_then_served_from_cache() {
        // Arrange: the mock fails the test if it is read more than once.
        let defaults = SettingsDefaults::default();
        let store = store_with(
            "searchEverywhere.include",
            json!(["src/**", "lib/**"]),
            1,
        );
        let config = config_over(store, &defaults);

        // Act
        let first = config.include();
        let rest: Vec<_> = (0..5).map(|_| config.include()).collect();

        // Assert
        assert_eq!(first, vec!["src/**".to_string(), "lib/**".to_string()]);
        assert!(rest.iter().all(|v| *v == first));
    }

    #[test]
    fn test_true_flag_is_cached() {
        let defaults = SettingsDefaults::default();
        let store = store_with("searchEverywhere.shouldHighlightSymbol", json!(true), 1);
        let config = config_over(store, &defaults);

        assert!(config.should_highlight_symbol());
        assert!(config.should_highlight_symbol());
        assert!(config.should_highlight_symbol());
    }

    #[test]
    fn test_false_flag_is_reread_on_every_call() {
        // A cached `false` is falsy and therefore never counts as a hit.
        let defaults = SettingsDefaults::default();
        let store = store_with("searchEverywhere.shouldUseDebounce", json!(false), 3);
        let config = config_over(store, &defaults);

        for _ in 0..3 {
            assert!(!config.should_use_debounce());
        }
    }

    #[test]
    fn test_truthy_cached_value_skips_the_store() {
        // Arrange: cache pre-populated by the owner; store must not be touched.
        let defaults = SettingsDefaults::default();
        let cache = Arc::new(InMemoryConfigCache::new());
        cache.set("searchEverywhere.exclude", json!(["**/target"]));
        let mut store = MockSettingsStore::new();
        store.expect_get().never();
        let config = Config::new(cache, Arc::new(store), &defaults);

        // Act / Assert
        assert_eq!(config.exclude(), vec!["**/target".to_string()]);
    }

    #[test]
    fn test_malformed_value_falls_back_to_default() {
        let defaults = SettingsDefaults::default();
        let store = store_with("searchEverywhere.itemsFilter", json!("not a filter"), 1);
        let config = config_over(store, &defaults);

        assert_eq!(config.items_filter(), ItemsFilter::default());
    }

    #[test]
    fn test_icons_are_typed_from_store_value() {
        let defaults = SettingsDefaults::default();
        let store = store_with(
            "searchEverywhere.icons",
            json!({ "5": "$(symbol-method)" }),
            1,
        );
        let config = config_over(store, &defaults);

        let icons = config.icons();

        assert_eq!(icons.for_symbol_kind(5), Some("$(symbol-method)"));
    }

    // ── Combined exclude ──────────────────────────────────────────────────────

    #[test]
    fn test_files_and_search_exclude_merges_with_search_winning() {
        // Arrange
        let defaults = SettingsDefaults::default();
        let mut store = MockSettingsStore::new();
        store
            .expect_get()
            .withf(|p, _| p == "files.exclude")
            .times(1)
            .returning(|_, _| json!({ "a": true, "b": false }));
        store
            .expect_get()
            .withf(|p, _| p == "search.exclude")
            .times(1)
            .returning(|_, _| json!({ "b": true, "c": true }));
        let config = config_over(store, &defaults);

        // Act
        let patterns = config.files_and_search_exclude();

        // Assert
        assert_eq!(patterns, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_exclude_cache_keys_do_not_collide() {
        // Arrange
        let defaults = SettingsDefaults::default();
        let cache = Arc::new(InMemoryConfigCache::new());
        let mut store = MockSettingsStore::new();
        store
            .expect_get()
            .withf(|p, _| p == "searchEverywhere.exclude")
            .returning(|_, _| json!(["**/own"]));
        store
            .expect_get()
            .withf(|p, _| p == "files.exclude")
            .returning(|_, _| json!({ "**/files": true }));
        store
            .expect_get()
            .withf(|p, _| p == "search.exclude")
            .returning(|_, _| json!({ "**/search": true }));
        let config = Config::new(cache.clone(), Arc::new(store), &defaults);

        // Act
        let own = config.exclude();
        let merged = config.files_and_search_exclude();

        // Assert
        assert_eq!(own, vec!["**/own".to_string()]);
        assert_eq!(merged, vec!["**/files", "**/search"]);
        assert_eq!(cache.len(), 3);
        assert_eq!(
            cache.get("files.exclude"),
            Some(json!({ "**/files": true }))
        );
        assert_eq!(
            cache.get("search.exclude"),
            Some(json!({ "**/search": true }))
        );
    }
}
