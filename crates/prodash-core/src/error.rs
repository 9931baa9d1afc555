//! Error types for demo context operations.

use thiserror::Error;

/// Primary error type for demo context mutations and URL decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DemoError {
    /// Tenant identifier is not part of the catalog.
    #[error("unknown tenant '{value}'")]
    InvalidTenant {
        /// Identifier supplied by the caller.
        value: String,
    },
    /// Role value is not one of the accepted roles.
    #[error("unknown role '{value}'")]
    InvalidRole {
        /// Role payload supplied by the caller.
        value: String,
    },
    /// Scenario value is not one of the known demo scenarios.
    #[error("unknown scenario '{value}'")]
    InvalidScenario {
        /// Scenario payload supplied by the caller.
        value: String,
    },
    /// Version value is not one of the preview releases.
    #[error("unknown version '{value}'")]
    InvalidVersion {
        /// Version payload supplied by the caller.
        value: String,
    },
    /// Saved instance index is past the end of the list.
    #[error("saved instance {index} is out of range ({len} saved)")]
    InstanceOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of saved instances.
        len: usize,
    },
    /// Theme mode value is neither `light` nor `dark`.
    #[error("unknown theme mode '{value}'")]
    InvalidThemeMode {
        /// Theme payload supplied by the caller.
        value: String,
    },
    /// A URL parameter could not be decoded into demo state.
    #[error("ignored url parameter '{param}': {reason}")]
    MalformedUrlState {
        /// Query parameter name.
        param: String,
        /// Raw (decoded) parameter value.
        value: String,
        /// Machine-readable reason for ignoring the value.
        reason: &'static str,
    },
    /// Tenant catalog failed structural validation.
    #[error("invalid tenant catalog: {reason}")]
    InvalidCatalog {
        /// Human-readable description of the failure.
        reason: String,
    },
}

/// Convenience alias for demo context results.
pub type DemoResult<T> = Result<T, DemoError>;
