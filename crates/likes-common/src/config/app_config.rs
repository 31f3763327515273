//! Application configuration structs
//!
//! Loads configuration from environment variables (with `.env` support).

use likes_core::DeleteFailurePolicy;
use std::env;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Likes API client configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Scheme and authority of the server, e.g. `http://localhost:5000`
    pub base_url: String,
    /// Request timeout, always at least one second
    pub timeout_secs: u64,
    pub delete_failure_policy: DeleteFailurePolicy,
}

impl ApiConfig {
    /// Create a config for the given server with default settings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: default_timeout_secs(),
            delete_failure_policy: DeleteFailurePolicy::default(),
        }
    }

    /// Collection url: `POST` creates a like
    #[must_use]
    pub fn likes_url(&self) -> String {
        format!("{}/api/likes", self.base_url)
    }

    /// Record url: `DELETE` removes the like
    #[must_use]
    pub fn like_url(&self, likes_id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.likes_url(), likes_id)
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Default value functions
fn default_app_name() -> String {
    "like-toggle".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url =
            lookup("LIKES_API_BASE_URL").ok_or(ConfigError::MissingVar("LIKES_API_BASE_URL"))?;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue("LIKES_API_BASE_URL", base_url));
        }

        let timeout_secs = match lookup("LIKES_API_TIMEOUT_SECS") {
            Some(s) => match s.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidValue("LIKES_API_TIMEOUT_SECS", s)),
            },
            None => default_timeout_secs(),
        };

        let delete_failure_policy = match lookup("LIKES_DELETE_FAILURE_POLICY") {
            Some(s) => DeleteFailurePolicy::parse(&s)
                .ok_or(ConfigError::InvalidValue("LIKES_DELETE_FAILURE_POLICY", s))?,
            None => DeleteFailurePolicy::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
            },
            api: ApiConfig {
                timeout_secs,
                delete_failure_policy,
                ..ApiConfig::new(base_url)
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
