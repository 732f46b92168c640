//! Client configuration
//!
//! `Settings` carries everything a session handle needs to build its
//! transport: the API key, optional OAuth application credentials,
//! timeouts, TLS policy, and the two base URLs (overridable so tests can
//! point at a mock server).

use std::time::Duration;

use tricorn_domain::{TricornError, TricornResult};

/// Production platform root for JSON routes.
pub const PLATFORM_URL: &str = "https://www.bungie.net/Platform";
/// Production bare-domain root, used only for manifest content bytes.
pub const SITE_URL: &str = "https://www.bungie.net";
/// OAuth2 authorization endpoint.
pub const OAUTH_AUTHORIZE_URL: &str = "https://www.bungie.net/en/OAuth/Authorize/";

/// Default total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default bounded retry ceiling for transient 5xx responses.
pub const DEFAULT_MAX_RETRIES: u32 = 4;

/// Immutable configuration for a session handle.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub client_id: Option<i64>,
    pub client_secret: Option<String>,
    pub timeout: Duration,
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
    pub trust_proxy: bool,
    pub accept_invalid_certs: bool,
    pub basic_auth: Option<(String, String)>,
    pub max_retries: u32,
    pub platform_url: String,
    pub site_url: String,
}

impl Settings {
    /// Start building settings around the one required field.
    pub fn builder(api_key: impl Into<String>) -> SettingsBuilder {
        SettingsBuilder::new(api_key)
    }

    /// Settings with every optional field at its default.
    pub fn new(api_key: impl Into<String>) -> TricornResult<Self> {
        Self::builder(api_key).build()
    }

    /// The OAuth application credentials, when both are configured.
    pub fn oauth_credentials(&self) -> TricornResult<(i64, &str)> {
        match (self.client_id, self.client_secret.as_deref()) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            _ => Err(TricornError::Config(
                "client_id and client_secret are required for OAuth2 operations".into(),
            )),
        }
    }
}

/// Builder for [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsBuilder {
    api_key: String,
    client_id: Option<i64>,
    client_secret: Option<String>,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    trust_proxy: bool,
    accept_invalid_certs: bool,
    basic_auth: Option<(String, String)>,
    max_retries: u32,
    platform_url: String,
    site_url: String,
}

impl SettingsBuilder {
    fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            client_id: None,
            client_secret: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            read_timeout: None,
            trust_proxy: false,
            accept_invalid_certs: false,
            basic_auth: None,
            max_retries: DEFAULT_MAX_RETRIES,
            platform_url: PLATFORM_URL.to_owned(),
            site_url: SITE_URL.to_owned(),
        }
    }

    /// OAuth application credentials, required only for OAuth2 flows.
    pub fn oauth_credentials(mut self, client_id: i64, client_secret: impl Into<String>) -> Self {
        self.client_id = Some(client_id);
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Total request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Socket connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Socket read timeout.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Honor system proxy environment variables.
    pub fn trust_proxy(mut self, trust: bool) -> Self {
        self.trust_proxy = trust;
        self
    }

    /// Accept invalid TLS certificates. Test environments only.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Basic auth applied to every request.
    pub fn basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((user.into(), password.into()));
        self
    }

    /// Retry ceiling for transient 5xx responses.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the platform root. Tests point this at a mock server.
    pub fn platform_url(mut self, url: impl Into<String>) -> Self {
        self.platform_url = url.into();
        self
    }

    /// Override the bare-domain root used for manifest bytes.
    pub fn site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }

    /// Validate and produce the settings.
    pub fn build(self) -> TricornResult<Settings> {
        if self.api_key.trim().is_empty() {
            return Err(TricornError::Config("api_key must be non-empty".into()));
        }

        Ok(Settings {
            api_key: self.api_key,
            client_id: self.client_id,
            client_secret: self.client_secret,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            trust_proxy: self.trust_proxy,
            accept_invalid_certs: self.accept_invalid_certs,
            basic_auth: self.basic_auth,
            max_retries: self.max_retries,
            platform_url: self.platform_url,
            site_url: self.site_url,
        })
    }
}
