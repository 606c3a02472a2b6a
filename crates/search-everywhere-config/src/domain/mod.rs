//! Domain types for the extension settings.
//!
//! Nothing in this module touches the file system or the editor.  The types
//! describe *what* can be configured and what the fallback values are; the
//! application layer decides *how* they are read.

/// Built-in fallback values.
pub mod defaults;
/// Glyphs shown next to search results.
pub mod icons;
/// Inclusion and exclusion rules for result items.
pub mod items_filter;
/// Setting names and the sections they live in.
pub mod setting_key;
