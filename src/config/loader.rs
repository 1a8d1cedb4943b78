//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServerConfig, ConfigError> {
    let config: ServerConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_partial_file_overrides_only_given_fields() {
        let config = parse_config(
            r#"
            [timeouts]
            request_secs = 5

            [observability]
            log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.timeouts.request_secs, 5);
        assert_eq!(config.observability.log_level, "debug");
        assert_eq!(config.limits.max_body_bytes, 2 * 1024 * 1024);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = parse_config("[websocket]\nmax_message_bytes = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref v) if v.len() == 1));
        assert!(err.to_string().contains("websocket.max_message_bytes"));
    }

    #[test]
    fn test_syntax_error_is_parse_error() {
        let err = parse_config("[timeouts\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[limits]\nmax_body_bytes = 1024").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.limits.max_body_bytes, 1024);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
