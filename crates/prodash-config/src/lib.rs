#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

//! File-backed settings for the demo context: tenant catalog, defaults and
//! URL sync tuning.
//!
//! Layout: `model.rs` (JSON document and resolved settings), `validate.rs`
//! (field validation and conversion), `loader.rs` (string/file/env entry
//! points), `defaults.rs` (constants).

pub mod defaults;
pub mod error;
pub mod loader;
pub mod model;
pub mod validate;

pub use defaults::{CONFIG_ENV, DEFAULT_DEBOUNCE_MS, MAX_DEBOUNCE_MS};
pub use error::{ConfigError, ConfigResult};
pub use loader::{load_from_env, load_from_optional_path, load_from_path, load_from_str};
pub use model::{DemoSettings, SettingsDocument, SyncSettings};
