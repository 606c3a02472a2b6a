use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// User-selected glyphs keyed by item kind.
///
/// Keys are the kind as written in the settings file: usually the numeric
/// symbol kind (`"11"` for functions), sometimes a named kind.  Values are the
/// glyph or codicon reference shown next to matching results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Icons(BTreeMap<String, String>);

impl Icons {
    /// Glyph configured for `kind`, if any.
    pub fn get(&self, kind: &str) -> Option<&str> {
        self.0.get(kind).map(String::as_str)
    }

    /// Glyph configured for a numeric symbol kind.
    pub fn for_symbol_kind(&self, kind: u32) -> Option<&str> {
        self.get(&kind.to_string())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Icons {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
