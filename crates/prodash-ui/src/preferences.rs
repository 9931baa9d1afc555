//! Local-storage backed theme preference.

use prodash_core::{DemoDefaults, ThemeMode};
#[cfg(target_arch = "wasm32")]
use gloo::console;
#[cfg(target_arch = "wasm32")]
use gloo::storage::{LocalStorage, Storage};

/// Storage key for the last chosen theme mode.
pub const THEME_KEY: &str = "prodash.theme";

/// Parse a stored preference; anything but `light` or `dark` is ignored.
#[must_use]
pub fn parse_theme_preference(raw: &str) -> Option<ThemeMode> {
    raw.trim().parse().ok()
}

/// Defaults with the stored theme replacing the configured one.
#[must_use]
pub fn with_theme_preference(defaults: &DemoDefaults, preference: Option<ThemeMode>) -> DemoDefaults {
    DemoDefaults {
        theme_mode: preference.unwrap_or(defaults.theme_mode),
        ..defaults.clone()
    }
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn load_theme_preference() -> Option<ThemeMode> {
    LocalStorage::get::<String>(THEME_KEY)
        .ok()
        .and_then(|value| parse_theme_preference(&value))
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn persist_theme_preference(mode: ThemeMode) {
    if let Err(err) = LocalStorage::set(THEME_KEY, mode.as_str()) {
        log_storage_error("set", THEME_KEY, &err.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
fn log_storage_error(operation: &str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
