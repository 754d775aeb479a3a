//! Client configuration.
//!
//! Provides [`ClientConfig`] for configuring a [`ContentClient`]. Values are
//! loaded from environment variables, falling back to the public Content API
//! endpoints.
//!
//! [`ContentClient`]: crate::client::ContentClient

use std::time::Duration;

use contentstack_auth::{DEFAULT_LOGIN_URI, DEFAULT_SERVICE, LoginParams};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Default Content API base URI, with trailing slash.
pub const DEFAULT_BASE_URI: &str = "https://content.googleapis.com/content/v1/";

/// Content API client configuration.
///
/// # Examples
///
/// ```
/// use contentstack_core::config::ClientConfig;
///
/// let config = ClientConfig::default();
/// assert_eq!(config.base_uri, "https://content.googleapis.com/content/v1/");
/// assert!(!config.dry_run);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Base URI every resource URI is built on. Always ends with `/`.
    #[builder(default = String::from(DEFAULT_BASE_URI))]
    pub base_uri: String,

    /// ClientLogin endpoint.
    #[builder(default = String::from(DEFAULT_LOGIN_URI))]
    pub login_uri: String,

    /// Service name requested at login.
    #[builder(default = String::from(DEFAULT_SERVICE))]
    pub login_service: String,

    /// `User-Agent` header and ClientLogin `source`.
    #[builder(default = String::from("contentstack"))]
    pub user_agent: String,

    /// Timeout of one HTTP exchange, in seconds.
    #[builder(default = 30)]
    pub timeout_secs: u64,

    /// Ask the server to return warnings on writes.
    #[builder(default = false)]
    pub warnings: bool,

    /// Ask the server to validate writes without applying them.
    #[builder(default = false)]
    pub dry_run: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_uri: String::from(DEFAULT_BASE_URI),
            login_uri: String::from(DEFAULT_LOGIN_URI),
            login_service: String::from(DEFAULT_SERVICE),
            user_agent: String::from("contentstack"),
            timeout_secs: 30,
            warnings: false,
            dry_run: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads the following environment variables (falling back to defaults):
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `CONTENT_API_BASE` | `https://content.googleapis.com/content/v1/` |
    /// | `CLIENTLOGIN_URI` | `https://www.google.com/accounts/ClientLogin` |
    /// | `CLIENTLOGIN_SERVICE` | `structuredcontent` |
    /// | `CONTENT_API_USER_AGENT` | `contentstack` |
    /// | `CONTENT_API_TIMEOUT_SECS` | `30` |
    /// | `CONTENT_API_WARNINGS` | `false` |
    /// | `CONTENT_API_DRY_RUN` | `false` |
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("CONTENT_API_BASE") {
            config.base_uri = with_trailing_slash(v);
        }
        if let Ok(v) = std::env::var("CLIENTLOGIN_URI") {
            config.login_uri = v;
        }
        if let Ok(v) = std::env::var("CLIENTLOGIN_SERVICE") {
            config.login_service = v;
        }
        if let Ok(v) = std::env::var("CONTENT_API_USER_AGENT") {
            config.user_agent = v;
        }
        if let Ok(v) = std::env::var("CONTENT_API_TIMEOUT_SECS") {
            if let Ok(n) = v.parse::<u64>() {
                config.timeout_secs = n;
            }
        }
        if let Ok(v) = std::env::var("CONTENT_API_WARNINGS") {
            config.warnings = parse_bool(&v);
        }
        if let Ok(v) = std::env::var("CONTENT_API_DRY_RUN") {
            config.dry_run = parse_bool(&v);
        }

        config
    }

    /// Timeout of one HTTP exchange.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Login parameters derived from this configuration.
    #[must_use]
    pub fn login_params(&self) -> LoginParams {
        LoginParams {
            uri: self.login_uri.clone(),
            service: self.login_service.clone(),
            source: self.user_agent.clone(),
            ..LoginParams::default()
        }
    }
}

fn with_trailing_slash(mut uri: String) -> String {
    if !uri.ends_with('/') {
        uri.push('/');
    }
    uri
}

/// Parse a string as a boolean, accepting `"1"` and `"true"` (case-insensitive).
fn parse_bool(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_create_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_uri, DEFAULT_BASE_URI);
        assert_eq!(config.login_uri, "https://www.google.com/accounts/ClientLogin");
        assert_eq!(config.login_service, "structuredcontent");
        assert_eq!(config.user_agent, "contentstack");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(!config.warnings);
        assert!(!config.dry_run);
    }

    #[test]
    fn test_should_load_from_env() {
        let config = ClientConfig::from_env();
        assert!(config.base_uri.ends_with('/'));
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = ClientConfig::builder()
            .base_uri("http://localhost:8080/content/v1/".into())
            .user_agent("test-agent".into())
            .timeout_secs(5)
            .warnings(true)
            .dry_run(true)
            .build();

        assert_eq!(config.base_uri, "http://localhost:8080/content/v1/");
        assert_eq!(config.login_service, "structuredcontent");
        assert_eq!(config.timeout_secs, 5);
        assert!(config.warnings);
        assert!(config.dry_run);
    }

    #[test]
    fn test_should_derive_login_params() {
        let config = ClientConfig::builder().user_agent("my-app".into()).build();
        let params = config.login_params();
        assert_eq!(params.source, "my-app");
        assert_eq!(params.service, "structuredcontent");
        assert_eq!(params.account_type, "GOOGLE");
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = ClientConfig::default();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("baseUri"));
        assert!(json.contains("dryRun"));
    }

    #[test]
    fn test_should_normalize_trailing_slash() {
        assert_eq!(with_trailing_slash("http://x/v1".into()), "http://x/v1/");
        assert_eq!(with_trailing_slash("http://x/v1/".into()), "http://x/v1/");
    }

    #[test]
    fn test_should_parse_bool_values() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool(""));
    }
}
