use serde::{Deserialize, Serialize};

/// Which result items may be shown.
///
/// Kinds are numeric symbol kinds.  Every field may be omitted from the
/// settings file and then deserializes as an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemsFilter {
    /// When non-empty, only these kinds are shown.
    pub allowed_kinds: Vec<u32>,
    /// Kinds that are never shown.
    pub ignored_kinds: Vec<u32>,
    /// Item names that are never shown.
    pub ignored_names: Vec<String>,
}
