//! # Client Configuration
//!
//! Connection settings for [`AmmClient`](crate::AmmClient). A config is
//! validated when it is built and never changes afterwards.
//!
//! ## Environment Variables
//!
//! [`ClientConfig::from_env`] reads:
//!
//! | Variable | Required | Meaning |
//! |----------|----------|---------|
//! | `AMM_BASE_URL` | yes | Absolute `http`/`https` URL of the AMM service |
//! | `AMM_CONNECT_TIMEOUT_SECS` | no | Connect timeout in seconds (default 10) |
//! | `AMM_REQUEST_TIMEOUT_SECS` | no | Whole-request deadline in seconds (default none) |
//!
//! ```rust,no_run
//! use lib_amm::ClientConfig;
//! use std::time::Duration;
//!
//! let config = ClientConfig::builder("https://amm.example.com/api/")
//!     .connect_timeout(Duration::from_secs(5))
//!     .request_timeout(Duration::from_secs(30))
//!     .build()?;
//! assert_eq!(config.base_url(), "https://amm.example.com/api");
//! # Ok::<(), lib_amm::AmmError>(())
//! ```

use std::time::Duration;

use lib_utils::{get_env, get_env_parse_opt, validate_not_empty};
use reqwest::Url;

use crate::error::{AmmError, Result};

/// Connect timeout used when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const ENV_BASE_URL: &str = "AMM_BASE_URL";
const ENV_CONNECT_TIMEOUT_SECS: &str = "AMM_CONNECT_TIMEOUT_SECS";
const ENV_REQUEST_TIMEOUT_SECS: &str = "AMM_REQUEST_TIMEOUT_SECS";

/// Validated settings for one AMM client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without trailing slash.
    base_url: String,

    /// Upper bound on establishing a connection.
    connect_timeout: Duration,

    /// Upper bound on a whole exchange, from send to last body byte.
    ///
    /// `None` leaves the transport default in place, which has no deadline.
    request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Config with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(base_url)
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url = get_env(ENV_BASE_URL).map_err(|e| AmmError::Config(e.to_string()))?;

        let mut builder = Self::builder(base_url);

        if let Some(secs) = get_env_parse_opt::<u64>(ENV_CONNECT_TIMEOUT_SECS)
            .map_err(|e| AmmError::Config(e.to_string()))?
        {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }

        if let Some(secs) = get_env_parse_opt::<u64>(ENV_REQUEST_TIMEOUT_SECS)
            .map_err(|e| AmmError::Config(e.to_string()))?
        {
            builder = builder.request_timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Absolute URL for `path`, relative to the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        normalize_base_url(&self.base_url)?;

        if self.connect_timeout.is_zero() {
            return Err(AmmError::Config("connect timeout must be greater than zero".to_string()));
        }

        if self.request_timeout.is_some_and(|t| t.is_zero()) {
            return Err(AmmError::Config("request timeout must be greater than zero".to_string()));
        }

        Ok(())
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: String,
    connect_timeout: Duration,
    request_timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: None,
        }
    }

    /// Set the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set a deadline for each whole request.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Normalize the base URL and validate every setting.
    pub fn build(self) -> Result<ClientConfig> {
        let config = ClientConfig {
            base_url: normalize_base_url(&self.base_url)?,
            connect_timeout: self.connect_timeout,
            request_timeout: self.request_timeout,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Trim whitespace and trailing slashes, then require an absolute http(s) URL.
fn normalize_base_url(raw: &str) -> Result<String> {
    validate_not_empty(raw, "base URL").map_err(AmmError::Config)?;

    let trimmed = raw.trim().trim_end_matches('/');

    let url = Url::parse(trimmed)
        .map_err(|e| AmmError::Config(format!("base URL '{}' is not a valid URL: {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(AmmError::Config(format!(
            "base URL '{}' must use http or https, got '{}'",
            raw,
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(AmmError::Config(format!("base URL '{}' has no host", raw)));
    }

    Ok(trimmed.to_string())
}
