//! Config module.

use std::env;

/// GitHub API options.
#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API root URL.
    pub root_url: String,
    /// Total request timeout (in milliseconds).
    pub request_timeout: u64,
    /// Connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// User-Agent header value sent on each request.
    pub user_agent: String,
}

/// API options.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

/// Logging options.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Server options.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
}

/// Relay configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Service name.
    pub name: String,
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version.
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            name: env_to_str("RELAY_NAME", "repo-relay"),
            api: ApiConfig {
                github: ApiGitHubConfig {
                    root_url: env_to_str("RELAY_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    request_timeout: env_to_u64("RELAY_API_GITHUB_REQUEST_TIMEOUT", 10_000),
                    connect_timeout: env_to_u64("RELAY_API_GITHUB_CONNECT_TIMEOUT", 5_000),
                    user_agent: env_to_str(
                        "RELAY_API_GITHUB_USER_AGENT",
                        "repo-relay-github-client",
                    ),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("RELAY_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("RELAY_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("RELAY_SERVER_BIND_PORT", 8000),
                workers_count: env_to_optional_u16("RELAY_SERVER_WORKERS_COUNT", None),
            },
            version,
        }
    }

    /// Create configuration from environment, with a placeholder version.
    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_to_u64() {
        env::set_var("RELAY_TEST_ENV_TO_U64", "2500");
        assert_eq!(env_to_u64("RELAY_TEST_ENV_TO_U64", 0), 2500);
        assert_eq!(env_to_u64("RELAY_TEST_ENV_TO_U64_UNSET", 42), 42);

        env::set_var("RELAY_TEST_ENV_TO_U64_INVALID", "nope");
        assert_eq!(env_to_u64("RELAY_TEST_ENV_TO_U64_INVALID", 42), 42);
    }

    #[test]
    fn test_env_to_optional_u16() {
        env::set_var("RELAY_TEST_ENV_TO_OPT_U16", "8");
        assert_eq!(env_to_optional_u16("RELAY_TEST_ENV_TO_OPT_U16", None), Some(8));
        assert_eq!(env_to_optional_u16("RELAY_TEST_ENV_TO_OPT_U16_UNSET", None), None);
    }

    #[test]
    fn test_env_to_bool() {
        env::set_var("RELAY_TEST_ENV_TO_BOOL", "1");
        assert!(env_to_bool("RELAY_TEST_ENV_TO_BOOL", false));
        assert!(!env_to_bool("RELAY_TEST_ENV_TO_BOOL_UNSET", false));
    }

    #[test]
    fn test_env_to_str() {
        env::set_var("RELAY_TEST_ENV_TO_STR", "value");
        assert_eq!(env_to_str("RELAY_TEST_ENV_TO_STR", "default"), "value");
        assert_eq!(env_to_str("RELAY_TEST_ENV_TO_STR_UNSET", "default"), "default");
    }
}
