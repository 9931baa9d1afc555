//! Default values for settings documents.

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "PRODASH_CONFIG";
/// Debounce applied to URL writes when the document does not set one.
pub const DEFAULT_DEBOUNCE_MS: u32 = 150;
/// Largest accepted debounce window.
pub const MAX_DEBOUNCE_MS: u32 = 5_000;
