//! Merging of exclude-pattern maps.
//!
//! The editor stores `files.exclude` and `search.exclude` as objects mapping a
//! glob pattern to an enabled flag:
//!
//! ```json
//! { "**/node_modules": true, "**/dist": false }
//! ```
//!
//! The facade merges both maps in order, later maps overwriting earlier ones
//! for the same pattern, and keeps only the enabled patterns.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use super::truthy::is_truthy;

/// Pattern → enabled flag.
pub type PatternFlags = BTreeMap<String, bool>;

/// Reads a settings value as a pattern map.
///
/// Anything other than an object contributes no patterns.  Flags follow host
/// truthiness, so `1` enables a pattern and `""` disables it.
pub fn pattern_flags(value: &Value) -> PatternFlags {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(pattern, flag)| (pattern.clone(), is_truthy(flag)))
            .collect(),
        other => {
            debug!("exclude value is not a pattern map, ignoring: {other}");
            PatternFlags::new()
        }
    }
}

/// Merges `groups` in order; a later group's flag wins for a shared pattern.
pub fn merge_pattern_flags<I>(groups: I) -> PatternFlags
where
    I: IntoIterator<Item = PatternFlags>,
{
    let mut merged = PatternFlags::new();
    for group in groups {
        merged.extend(group);
    }
    merged
}

/// Patterns whose flag is `true`, in sorted order.
pub fn enabled_patterns(flags: &PatternFlags) -> Vec<String> {
    flags
        .iter()
        .filter(|(_, enabled)| **enabled)
        .map(|(pattern, _)| pattern.clone())
        .collect()
}
