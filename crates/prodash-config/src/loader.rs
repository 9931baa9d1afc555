//! Entry points that read a settings document from a string, file or the environment.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::defaults::CONFIG_ENV;
use crate::error::{ConfigError, ConfigResult};
use crate::model::{DemoSettings, SettingsDocument};
use crate::validate::validate_document;

/// Parse and validate a JSON settings document.
///
/// # Errors
/// Returns [`ConfigError::Parse`] for malformed JSON or unknown keys, and the
/// validation errors of [`validate_document`].
pub fn load_from_str(json: &str) -> ConfigResult<DemoSettings> {
    let document: SettingsDocument = serde_json::from_str(json)?;
    validate_document(&document)
}

/// Read, parse and validate a settings file.
///
/// # Errors
/// Returns [`ConfigError::Io`] when the file cannot be read, plus the errors
/// of [`load_from_str`].
pub fn load_from_path(path: &Path) -> ConfigResult<DemoSettings> {
    let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = load_from_str(&json)?;
    info!(
        path = %path.display(),
        tenants = settings.catalog.len(),
        "loaded demo settings"
    );
    Ok(settings)
}

/// Load from the file named by `PRODASH_CONFIG`, or the built-ins when unset.
///
/// # Errors
/// See [`load_from_path`].
pub fn load_from_env() -> ConfigResult<DemoSettings> {
    load_from_optional_path(std::env::var_os(CONFIG_ENV))
}

/// Load from `path` when present and non-empty, or the built-ins otherwise.
///
/// # Errors
/// See [`load_from_path`].
pub fn load_from_optional_path(path: Option<impl Into<OsString>>) -> ConfigResult<DemoSettings> {
    match path.map(Into::into).filter(|path| !path.is_empty()) {
        Some(path) => load_from_path(&PathBuf::from(path)),
        None => {
            debug!("no settings file configured; using built-in tenants");
            Ok(DemoSettings::builtin())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_keys_are_parse_errors() {
        assert!(matches!(
            load_from_str(r#"{"tenantz": []}"#),
            Err(ConfigError::Parse { .. })
        ));
        assert!(matches!(
            load_from_str("not json"),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_path_uses_builtins() -> ConfigResult<()> {
        assert_eq!(load_from_optional_path(None::<OsString>)?, DemoSettings::builtin());
        assert_eq!(load_from_optional_path(Some(""))?, DemoSettings::builtin());
        Ok(())
    }

    #[test]
    fn unreadable_path_reports_io_error() {
        let result = load_from_optional_path(Some("/nonexistent/prodash.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
