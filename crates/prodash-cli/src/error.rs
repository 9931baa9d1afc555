//! CLI error type distinguishing bad input from operational failures.

use std::fmt::{self, Display, Formatter};

use prodash_config::ConfigError;
use prodash_core::DemoError;

/// Validation problems exit with 2, everything else with 3.
#[derive(Debug)]
pub(crate) enum CliError {
    Validation(String),
    Failure(anyhow::Error),
}

/// Convenience alias for functions returning a `CliError`.
pub(crate) type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub(crate) fn failure(error: impl Into<anyhow::Error>) -> Self {
        Self::Failure(error.into())
    }

    pub(crate) const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 2,
            Self::Failure(_) => 3,
        }
    }

    pub(crate) fn display_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Failure(error) => format!("{error:#}"),
        }
    }
}

impl Display for CliError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.display_message())
    }
}

impl std::error::Error for CliError {}

impl From<DemoError> for CliError {
    fn from(err: DemoError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io { .. } => Self::Failure(err.into()),
            other => Self::Validation(format!("{:#}", anyhow::Error::from(other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn exit_codes_follow_error_kind() {
        assert_eq!(CliError::validation("bad").exit_code(), 2);
        assert_eq!(CliError::failure(io::Error::other("disk")).exit_code(), 3);
    }

    #[test]
    fn demo_errors_are_validation_failures() {
        let err = CliError::from(DemoError::InvalidTenant {
            value: "acme".to_string(),
        });
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "unknown tenant 'acme'");
    }

    #[test]
    fn config_errors_map_by_kind() {
        let io = CliError::from(ConfigError::Io {
            path: PathBuf::from("missing.json"),
            source: io::Error::other("not found"),
        });
        assert_eq!(io.exit_code(), 3);
        assert!(io.display_message().contains("missing.json"));

        let invalid = CliError::from(ConfigError::InvalidField {
            section: "sync".to_string(),
            field: "debounce_ms".to_string(),
            value: None,
            reason: "must be between 0 and 5000",
        });
        assert_eq!(invalid.exit_code(), 2);
        assert!(invalid.display_message().contains("debounce_ms"));
    }
}
