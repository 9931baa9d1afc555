//! Error types for settings loading.

use std::io;
use std::path::PathBuf;

use prodash_core::DemoError;
use thiserror::Error;

/// Primary error type for settings operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the settings file failed.
    #[error("failed to read settings file '{}'", .path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Source IO error.
        source: io::Error,
    },
    /// The document was not valid JSON or did not match the schema.
    #[error("failed to parse settings document")]
    Parse {
        /// Source serde error.
        #[from]
        source: serde_json::Error,
    },
    /// Field contained an invalid value.
    #[error("invalid value for '{field}' in '{section}': {reason}")]
    InvalidField {
        /// Section that failed validation.
        section: String,
        /// Field that failed validation.
        field: String,
        /// Offending value when available.
        value: Option<String>,
        /// Machine-readable reason for the failure.
        reason: &'static str,
    },
    /// The tenant catalog failed structural validation.
    #[error("invalid tenant catalog")]
    Catalog {
        /// Source catalog error.
        source: DemoError,
    },
}

impl ConfigError {
    pub(crate) fn invalid(
        section: impl Into<String>,
        field: impl Into<String>,
        value: Option<&str>,
        reason: &'static str,
    ) -> Self {
        Self::InvalidField {
            section: section.into(),
            field: field.into(),
            value: value.map(str::to_string),
            reason,
        }
    }
}

/// Convenience alias for settings results.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn invalid_field_message_names_section_and_field() {
        let err = ConfigError::invalid("tenants[0]", "branding.light.primary", Some("red"), "must be #RRGGBB");
        assert_eq!(
            err.to_string(),
            "invalid value for 'branding.light.primary' in 'tenants[0]': must be #RRGGBB"
        );
    }

    #[test]
    fn catalog_error_chains_source() {
        let err = ConfigError::Catalog {
            source: DemoError::InvalidCatalog {
                reason: "duplicate tenant identifier 'cvs'".to_string(),
            },
        };
        assert_eq!(err.to_string(), "invalid tenant catalog");
        assert!(err.source().is_some());
    }
}
