//! Validation utilities.

use std::fmt::Write;

use repo_relay_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        write!(error, "  - Missing env. var.: {}", name).unwrap();
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "RELAY_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "RELAY_SERVER_BIND_PORT");
    }
    if config.name.is_empty() {
        _missing(&mut error, "RELAY_NAME");
    }

    // Check API configuration
    if config.api.github.root_url.is_empty() {
        _missing(&mut error, "RELAY_API_GITHUB_ROOT_URL");
    }
    if config.api.github.user_agent.is_empty() {
        _missing(&mut error, "RELAY_API_GITHUB_USER_AGENT");
    }
    if config.api.github.request_timeout == 0 {
        _missing(&mut error, "RELAY_API_GITHUB_REQUEST_TIMEOUT");
    }
    if config.api.github.connect_timeout == 0 {
        _missing(&mut error, "RELAY_API_GITHUB_CONNECT_TIMEOUT");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_env_vars() {
        let mut config = Config::from_env_no_version();
        assert!(validate_env_vars(&config).is_ok());

        config.api.github.root_url = String::new();
        let result = validate_env_vars(&config);
        assert!(matches!(
            result,
            Err(ValidationError::EnvVarsError { errors })
                if errors.contains("RELAY_API_GITHUB_ROOT_URL")
        ));
    }

    #[test]
    fn test_validate_env_vars_multiple_errors() {
        let mut config = Config::from_env_no_version();
        config.server.bind_ip = String::new();
        config.server.bind_port = 0;

        let result = validate_env_vars(&config);
        assert!(matches!(
            result,
            Err(ValidationError::EnvVarsError { errors })
                if errors.contains("RELAY_SERVER_BIND_IP")
                    && errors.contains("RELAY_SERVER_BIND_PORT")
        ));
    }

    #[test]
    fn test_validate_env_vars_timeouts() {
        let mut config = Config::from_env_no_version();
        config.api.github.request_timeout = 0;
        config.api.github.connect_timeout = 0;

        let result = validate_env_vars(&config);
        assert!(matches!(
            result,
            Err(ValidationError::EnvVarsError { errors })
                if errors.contains("RELAY_API_GITHUB_REQUEST_TIMEOUT")
                    && errors.contains("RELAY_API_GITHUB_CONNECT_TIMEOUT")
        ));
    }
}
