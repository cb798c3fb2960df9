//! Runtime configuration for the HamStudy client.
//!
//! Values come from environment variables, read through an injectable
//! lookup so tests never touch the process environment:
//!
//! | Variable                  | Default                         |
//! |---------------------------|---------------------------------|
//! | `HAMSTUDY_API_BASE_URL`   | `https://hamstudy.org/api/v1`   |
//! | `HAMSTUDY_SITE_BASE_URL`  | `https://hamstudy.org`          |
//! | `HAMSTUDY_USER_AGENT`     | `hamstudy-bot/<version>`        |
//! | `HAMSTUDY_TIMEOUT_SECS`   | `5`                             |
//! | `HAMSTUDY_SESSION_LIMIT`  | `5`                             |

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

use crate::exam::render::{DEFAULT_SESSION_LIMIT, DEFAULT_SITE_BASE_URL};

/// Default HamStudy API root.
pub const DEFAULT_API_BASE_URL: &str = "https://hamstudy.org/api/v1";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("hamstudy-bot/", env!("CARGO_PKG_VERSION"));

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

const API_BASE_URL_VAR: &str = "HAMSTUDY_API_BASE_URL";
const SITE_BASE_URL_VAR: &str = "HAMSTUDY_SITE_BASE_URL";
const USER_AGENT_VAR: &str = "HAMSTUDY_USER_AGENT";
const TIMEOUT_VAR: &str = "HAMSTUDY_TIMEOUT_SECS";
const SESSION_LIMIT_VAR: &str = "HAMSTUDY_SESSION_LIMIT";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A URL setting could not be parsed.
    #[error("{variable} is not a valid URL: {value}")]
    InvalidUrl {
        /// Variable name.
        variable: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A numeric setting is not a positive integer.
    #[error("{variable} must be a positive integer, got '{value}'")]
    InvalidNumber {
        /// Variable name.
        variable: &'static str,
        /// Rejected value.
        value: String,
    },

    /// The user agent is blank.
    #[error("HAMSTUDY_USER_AGENT must not be empty")]
    EmptyUserAgent,
}

/// HamStudy client and rendering settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotConfig {
    api_base_url: Url,
    site_base_url: Url,
    user_agent: String,
    timeout: Duration,
    session_limit: usize,
}

impl BotConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration from an arbitrary variable lookup.
    ///
    /// Unset and blank variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(value) = read(API_BASE_URL_VAR) {
            config.api_base_url = parse_url(API_BASE_URL_VAR, &value)?;
        }
        if let Some(value) = read(SITE_BASE_URL_VAR) {
            config.site_base_url = parse_url(SITE_BASE_URL_VAR, &value)?;
        }
        if let Some(value) = read(USER_AGENT_VAR) {
            config = config.with_user_agent(value)?;
        }
        if let Some(value) = read(TIMEOUT_VAR) {
            config.timeout = Duration::from_secs(parse_positive(TIMEOUT_VAR, &value)?);
        }
        if let Some(value) = read(SESSION_LIMIT_VAR) {
            let limit = parse_positive(SESSION_LIMIT_VAR, &value)?;
            config.session_limit =
                usize::try_from(limit).map_err(|_| ConfigError::InvalidNumber {
                    variable: SESSION_LIMIT_VAR,
                    value,
                })?;
        }
        Ok(config)
    }

    /// Replaces the API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] when `value` is not a URL.
    pub fn with_api_base_url(mut self, value: &str) -> Result<Self, ConfigError> {
        self.api_base_url = parse_url(API_BASE_URL_VAR, value)?;
        Ok(self)
    }

    /// Replaces the user agent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUserAgent`] when `value` is blank.
    pub fn with_user_agent(mut self, value: impl Into<String>) -> Result<Self, ConfigError> {
        let trimmed = value.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(ConfigError::EmptyUserAgent);
        }
        self.user_agent = trimmed;
        Ok(self)
    }

    /// Replaces the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the number of sessions shown per search.
    #[must_use]
    pub const fn with_session_limit(mut self, session_limit: usize) -> Self {
        self.session_limit = session_limit;
        self
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    /// Returns the public site URL used for session links.
    #[must_use]
    pub const fn site_base_url(&self) -> &Url {
        &self.site_base_url
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the number of sessions shown per search.
    #[must_use]
    pub const fn session_limit(&self) -> usize {
        self.session_limit
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_url(DEFAULT_API_BASE_URL),
            site_base_url: default_url(DEFAULT_SITE_BASE_URL),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: DEFAULT_TIMEOUT,
            session_limit: DEFAULT_SESSION_LIMIT,
        }
    }
}

#[expect(
    clippy::expect_used,
    reason = "default URLs are compile-time constants known to parse"
)]
fn default_url(value: &str) -> Url {
    Url::parse(value).expect("default URL constants are valid")
}

fn parse_url(variable: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value.trim()).map_err(|_| ConfigError::InvalidUrl {
        variable,
        value: value.to_owned(),
    })
}

fn parse_positive(variable: &'static str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|parsed| *parsed > 0)
        .ok_or_else(|| ConfigError::InvalidNumber {
            variable,
            value: value.to_owned(),
        })
}
