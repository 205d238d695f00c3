//! HTTP reading source for the sensor REST endpoint
//!
//! ## Overview
//!
//! The sensor gateway exposes two JSON endpoints: the latest reading and the
//! full history. This source fetches them with a blocking `ureq` agent, so it
//! can run on a plain thread or inside `tokio::task::spawn_blocking`.
//!
//! ## Implementation Choices
//!
//! - Blocking client: a poll every 30 seconds does not need an async stack
//! - JSON only
//! - Retries with exponential backoff on transport errors, 5xx and 429
//! - Bodies are decoded into `RawReading`; validation is left to ingestion
//!
//! ## Example Usage
//!
//! ```no_run
//! use tempsec_connectors::{http::{HttpConfig, HttpReadingSource}, ReadingSource};
//!
//! let config = HttpConfig::new("http://sensor.local:5000")
//!     .api_key("X-Api-Key", "secret")
//!     .timeout_secs(5)
//!     .max_retries(2);
//!
//! let mut source = HttpReadingSource::new(config)?;
//! if let Some(row) = source.latest()? {
//!     println!("{} -> {}", row.data, row.valor);
//! }
//! # Ok::<(), tempsec_connectors::ConnectorError>(())
//! ```

use std::collections::HashMap;
use std::thread;
use std::time::Duration;

use base64::Engine;
use log::{debug, warn};
use tempsec_core::RawReading;

use crate::{ConnectorError, ConnectorResult, ReadingSource, SourceStats};

/// Path of the latest-reading endpoint
pub const LATEST_PATH: &str = "/temperatura/ultima";

/// Path of the history endpoint
pub const HISTORY_PATH: &str = "/temperatura";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default number of retries after the first attempt
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default delay before the first retry; doubled on each further retry
pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(200);

/// HTTP configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Base URL of the sensor gateway
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Authentication method
    pub auth: AuthMethod,
    /// Custom headers
    pub headers: HashMap<String, String>,
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Delay before the first retry
    pub retry_base_delay: Duration,
    /// User agent string
    pub user_agent: String,
    /// Latest-reading path
    pub latest_path: String,
    /// History path
    pub history_path: String,
}

/// Authentication methods
#[derive(Debug, Clone, PartialEq)]
pub enum AuthMethod {
    /// No authentication
    None,
    /// Bearer token
    Bearer(String),
    /// Basic authentication
    Basic { username: String, password: String },
    /// API key in header
    ApiKey { header: String, value: String },
}

impl HttpConfig {
    /// Create new configuration with base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
            auth: AuthMethod::None,
            headers: HashMap::new(),
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
            user_agent: format!("TempSec/{}", tempsec_core::VERSION),
            latest_path: LATEST_PATH.into(),
            history_path: HISTORY_PATH.into(),
        }
    }

    /// Set bearer token authentication
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = AuthMethod::Bearer(token.into());
        self
    }

    /// Set basic authentication
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = AuthMethod::Basic {
            username: username.into(),
            password: password.into(),
        };
        self
    }

    /// Set API key authentication
    pub fn api_key(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.auth = AuthMethod::ApiKey {
            header: header.into(),
            value: value.into(),
        };
        self
    }

    /// Set request timeout in seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Set the number of retries after the first attempt
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the delay before the first retry
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Add custom header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Override the endpoint paths
    pub fn paths(mut self, latest: impl Into<String>, history: impl Into<String>) -> Self {
        self.latest_path = latest.into();
        self.history_path = history.into();
        self
    }

    /// Check the URL scheme and timeout
    pub fn validate(&self) -> ConnectorResult<()> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConnectorError::Config(
                "Base URL must start with http:// or https://".into(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ConnectorError::Config("Timeout must be greater than zero".into()));
        }
        Ok(())
    }

    /// Full URL for `path`
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Delay before retry number `attempt` (1-based)
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.retry_base_delay
            .saturating_mul(1u32.checked_shl(attempt.saturating_sub(1)).unwrap_or(u32::MAX))
    }

    /// Value of the `Authorization` header, if any
    fn authorization(&self) -> Option<String> {
        match &self.auth {
            AuthMethod::Bearer(token) => Some(format!("Bearer {}", token)),
            AuthMethod::Basic { username, password } => {
                let credentials = base64::engine::general_purpose::STANDARD
                    .encode(format!("{}:{}", username, password));
                Some(format!("Basic {}", credentials))
            }
            AuthMethod::None | AuthMethod::ApiKey { .. } => None,
        }
    }
}

/// Reading source backed by the sensor REST endpoint
pub struct HttpReadingSource {
    config: HttpConfig,
    agent: ureq::Agent,
    stats: SourceStats,
}

impl HttpReadingSource {
    /// Validate `config` and build the agent
    pub fn new(config: HttpConfig) -> ConnectorResult<Self> {
        config.validate()?;

        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();

        Ok(Self {
            config,
            agent,
            stats: SourceStats::default(),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// GET `path` and return the body text
    pub fn get_text(&mut self, path: &str) -> ConnectorResult<String> {
        let url = self.config.url(path);
        match self.execute_with_retry(&url) {
            Ok(text) => {
                self.stats.requests_ok += 1;
                Ok(text)
            }
            Err(error) => {
                self.stats.requests_failed += 1;
                self.stats.last_error = Some(error.to_string());
                Err(error)
            }
        }
    }

    /// Build request with authentication and headers
    fn build_request(&self, url: &str) -> ureq::Request {
        let mut request = self.agent.get(url).set("Accept", "application/json");

        if let Some(authorization) = self.config.authorization() {
            request = request.set("Authorization", &authorization);
        }
        if let AuthMethod::ApiKey { header, value } = &self.config.auth {
            request = request.set(header, value);
        }
        for (name, value) in &self.config.headers {
            request = request.set(name, value);
        }

        request
    }

    /// Execute a GET with retry logic
    fn execute_with_retry(&mut self, url: &str) -> ConnectorResult<String> {
        let attempts = self.config.max_retries + 1;
        let mut last_error = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                self.stats.retries += 1;
                let delay = self.config.backoff(attempt);
                debug!("retrying {} in {:?} (attempt {}/{})", url, delay, attempt + 1, attempts);
                thread::sleep(delay);
            }

            match self.build_request(url).call() {
                Ok(response) => {
                    return response
                        .into_string()
                        .map_err(|e| ConnectorError::Request(e.to_string()));
                }
                Err(ureq::Error::Status(code, response)) => {
                    let error = ConnectorError::ServerError {
                        status: code,
                        message: response.into_string().unwrap_or_default(),
                    };
                    if !error.is_transient() {
                        return Err(error);
                    }
                    warn!("{} answered {}", url, code);
                    last_error = Some(error);
                }
                Err(ureq::Error::Transport(e)) => {
                    warn!("request to {} failed: {}", url, e);
                    last_error = Some(ConnectorError::Request(e.to_string()));
                }
            }
        }

        Err(ConnectorError::Exhausted {
            attempts,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown error".into()),
        })
    }
}

impl ReadingSource for HttpReadingSource {
    fn latest(&mut self) -> ConnectorResult<Option<RawReading>> {
        let path = self.config.latest_path.clone();
        let text = self.get_text(&path)?;
        parse_latest(&text)
    }

    fn history(&mut self) -> ConnectorResult<Vec<RawReading>> {
        let path = self.config.history_path.clone();
        let text = self.get_text(&path)?;
        parse_history(&text)
    }

    fn stats(&self) -> SourceStats {
        self.stats.clone()
    }
}

/// Decode the latest-reading body; empty or `null` means no reading yet
pub fn parse_latest(body: &str) -> ConnectorResult<Option<RawReading>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    Ok(serde_json::from_str::<Option<RawReading>>(body)?)
}

/// Decode the history body; empty means no readings
pub fn parse_history(body: &str) -> ConnectorResult<Vec<RawReading>> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = HttpConfig::new("https://sensor.example.com/")
            .bearer_token("test-token")
            .timeout_secs(5)
            .max_retries(1)
            .header("X-Custom", "value");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 1);
        assert!(config.headers.contains_key("X-Custom"));
        assert_eq!(config.auth, AuthMethod::Bearer("test-token".into()));
        assert_eq!(config.url(LATEST_PATH), "https://sensor.example.com/temperatura/ultima");
        assert_eq!(config.url("temperatura"), "https://sensor.example.com/temperatura");
    }

    #[test]
    fn test_defaults() {
        let config = HttpConfig::new("http://10.0.0.5:5000");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.latest_path, "/temperatura/ultima");
        assert_eq!(config.history_path, "/temperatura");
        assert!(config.user_agent.starts_with("TempSec/"));
    }

    #[test]
    fn test_url_validation() {
        assert!(matches!(
            HttpReadingSource::new(HttpConfig::new("not-a-url")),
            Err(ConnectorError::Config(_))
        ));
        assert!(HttpReadingSource::new(HttpConfig::new("ftp://sensor")).is_err());
        assert!(HttpReadingSource::new(HttpConfig::new("https://valid.url")).is_ok());

        let mut zero = HttpConfig::new("https://valid.url");
        zero.timeout = Duration::ZERO;
        assert!(zero.validate().is_err());
    }

    #[test]
    fn test_authorization_headers() {
        let basic = HttpConfig::new("http://x").basic_auth("user", "pass");
        assert_eq!(basic.authorization().as_deref(), Some("Basic dXNlcjpwYXNz"));

        let bearer = HttpConfig::new("http://x").bearer_token("abc");
        assert_eq!(bearer.authorization().as_deref(), Some("Bearer abc"));

        let key = HttpConfig::new("http://x").api_key("X-Api-Key", "k");
        assert_eq!(key.authorization(), None);
    }

    #[test]
    fn test_backoff_doubles() {
        let config = HttpConfig::new("http://x").retry_base_delay(Duration::from_millis(100));
        assert_eq!(config.backoff(1), Duration::from_millis(100));
        assert_eq!(config.backoff(2), Duration::from_millis(200));
        assert_eq!(config.backoff(3), Duration::from_millis(400));
    }

    #[test]
    fn test_parse_bodies() {
        let latest = parse_latest(r#"{"data":"2024-05-01T08:00:00Z","valor":37.2}"#).unwrap();
        assert_eq!(latest.unwrap().valor, 37.2);
        assert_eq!(parse_latest("null").unwrap(), None);
        assert_eq!(parse_latest("  ").unwrap(), None);
        assert!(matches!(parse_latest("{oops"), Err(ConnectorError::Serialization(_))));

        let history = parse_history(
            r#"[{"data":"2024-05-01T08:00:00Z","valor":37.2},{"data":"bad","valor":1}]"#,
        )
        .unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[1].data, "bad");
        assert!(parse_history("").unwrap().is_empty());
    }

    #[test]
    fn test_unreachable_endpoint_exhausts_retries() {
        let config = HttpConfig::new("http://127.0.0.1:1")
            .timeout_secs(1)
            .max_retries(1)
            .retry_base_delay(Duration::ZERO);
        let mut source = HttpReadingSource::new(config).unwrap();

        let err = source.latest().unwrap_err();
        assert!(matches!(err, ConnectorError::Exhausted { attempts: 2, .. }));

        let stats = source.stats();
        assert_eq!(stats.retries, 1);
        assert_eq!(stats.requests_failed, 1);
        assert!(stats.last_error.is_some());
    }
}
