//! Application layer: the settings facade and its collaborators.
//!
//! # Sub-modules
//!
//! - **`config`**  – The [`config::Config`] facade.  One getter per setting,
//!   each backed by a read-through cache.
//!
//! - **`exclude`** – Merging of the editor's `files.exclude` and
//!   `search.exclude` pattern maps into a single list.
//!
//! - **`truthy`**  – The loose truthiness test the host uses to decide
//!   whether a cached value counts as "set".
//!
//! The facade depends only on the [`config::ConfigCache`] and
//! [`config::SettingsStore`] traits, so tests can substitute in-memory fakes.

pub mod config;
pub mod exclude;
pub mod truthy;
