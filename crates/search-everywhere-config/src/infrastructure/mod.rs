//! Infrastructure: concrete cache and settings-store implementations.
//!
//! - **`cache`**   – [`cache::InMemoryConfigCache`], a process-local
//!   implementation of the facade's cache collaborator, plus the
//!   invalidation operations its owner needs.
//!
//! - **`storage`** – Settings documents read from `settings.json` or TOML
//!   files, user/workspace layering, and platform path resolution.

pub mod cache;
pub mod storage;
