//! Session handle and request executor
//!
//! [`RestClient`] owns one lazily-built transport and serializes request
//! attempts through a handle mutex. The executor implements the full
//! pipeline: header attachment, rate-limit waits, bounded retries on
//! transient 5xx statuses, envelope unwrapping, and classification of
//! everything else into the error taxonomy.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use rand::Rng;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

use tricorn_domain::{TricornError, TricornResult};

use crate::backoff::ExponentialBackoff;
use crate::error::{classify, is_fatal_token, is_transient};
use crate::settings::Settings;

/// Ceiling for the retry backoff, in seconds. Short by design: the
/// server is typically either down or transiently loaded.
const RETRY_BACKOFF_MAXIMUM: f64 = 6.0;

/// Fixed User-Agent sent with every request.
static USER_AGENT: Lazy<String> = Lazy::new(|| {
    format!(
        "tricorn/{} (+https://github.com/tricorn-rs/tricorn) tokio reqwest",
        env!("CARGO_PKG_VERSION")
    )
});

/// Which base root a route is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// The platform root; every JSON route.
    Platform,
    /// The bare-domain root; manifest content bytes only.
    Site,
}

/// Per-request options routed to the transport.
///
/// Setting both `json` and `form` is a configuration error.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub json: Option<Value>,
    pub form: Option<Vec<(String, String)>>,
    pub bearer: Option<String>,
}

impl RequestOptions {
    /// Options with a bearer token and nothing else.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self { bearer: Some(token.into()), ..Self::default() }
    }

    /// Options with a JSON body and nothing else.
    pub fn json(body: Value) -> Self {
        Self { json: Some(body), ..Self::default() }
    }
}

/// An asynchronous session handle over the remote API.
///
/// Requests on one handle are serialized per attempt; the handle mutex
/// is released across retry sleeps so unrelated concurrent callers are
/// not starved by another caller's retries. Distinct handles share
/// nothing but configuration.
pub struct RestClient {
    settings: Settings,
    transport: parking_lot::Mutex<Option<reqwest::Client>>,
    closed: AtomicBool,
    attempt_lock: tokio::sync::Mutex<()>,
    metadata: Arc<DashMap<String, Value>>,
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .field("platform_url", &self.settings.platform_url)
            .finish_non_exhaustive()
    }
}

impl RestClient {
    /// Create a handle from validated settings.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            transport: parking_lot::Mutex::new(None),
            closed: AtomicBool::new(false),
            attempt_lock: tokio::sync::Mutex::new(()),
            metadata: Arc::new(DashMap::new()),
        }
    }

    /// Convenience constructor from a bare API key.
    pub fn with_key(api_key: impl Into<String>) -> TricornResult<Self> {
        Ok(Self::new(Settings::new(api_key)?))
    }

    /// The handle's configuration.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The per-handle metadata bag for user caching.
    pub fn metadata(&self) -> &DashMap<String, Value> {
        &self.metadata
    }

    /// Drop the transport. Closing twice is a no-op; any request issued
    /// after close fails with [`TricornError::ClientClosed`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.transport.lock().take();
    }

    /// Whether `close()` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn transport(&self) -> TricornResult<reqwest::Client> {
        if self.is_closed() {
            return Err(TricornError::ClientClosed);
        }

        let mut slot = self.transport.lock();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let mut builder = reqwest::Client::builder()
            .timeout(self.settings.timeout)
            .user_agent(USER_AGENT.as_str());
        if let Some(connect) = self.settings.connect_timeout {
            builder = builder.connect_timeout(connect);
        }
        if let Some(read) = self.settings.read_timeout {
            builder = builder.read_timeout(read);
        }
        if self.settings.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if !self.settings.trust_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build().map_err(|e| TricornError::Http {
            url: self.settings.platform_url.clone(),
            status: None,
            message: format!("failed to build transport: {e}"),
        })?;
        *slot = Some(client.clone());
        Ok(client)
    }

    fn resolve(&self, base: Base, route: &str) -> String {
        let root = match base {
            Base::Platform => &self.settings.platform_url,
            Base::Site => &self.settings.site_url,
        };
        format!("{}/{}", root.trim_end_matches('/'), route.trim_start_matches('/'))
    }

    /// One serialized request attempt. The handle mutex is held only
    /// while the attempt is in flight.
    async fn attempt(
        &self,
        method: Method,
        url: &str,
        options: &RequestOptions,
    ) -> TricornResult<(StatusCode, HashMap<String, String>, Bytes)> {
        let client = self.transport()?;
        let _serialized = self.attempt_lock.lock().await;

        let mut request = client
            .request(method, url)
            .header("X-API-KEY", &self.settings.api_key);
        if let Some(bearer) = &options.bearer {
            request = request.bearer_auth(bearer);
        }
        if let Some((user, password)) = &self.settings.basic_auth {
            request = request.basic_auth(user, Some(password));
        }
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        match (&options.json, &options.form) {
            (Some(_), Some(_)) => {
                return Err(TricornError::Config(
                    "a request may carry a JSON body or a form body, not both".into(),
                ));
            }
            (Some(json), None) => request = request.json(json),
            (None, Some(form)) => request = request.form(form),
            (None, None) => {}
        }

        let response = request.send().await.map_err(|e| TricornError::Http {
            url: url.to_owned(),
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        })?;

        let status = response.status();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                Some((name.to_string(), value.to_str().ok()?.to_owned()))
            })
            .collect();
        let body = response.bytes().await.map_err(|e| TricornError::Http {
            url: url.to_owned(),
            status: Some(status.as_u16()),
            message: e.to_string(),
        })?;

        Ok((status, headers, body))
    }

    /// Sleep out a 429, then hand the response to the classifier so the
    /// surfaced error comes from the same mapping as every other status.
    async fn rate_limited(
        &self,
        url: &str,
        headers: HashMap<String, String>,
        body: &[u8],
    ) -> TricornError {
        let envelope: Value = match serde_json::from_slice(body) {
            Ok(envelope) => envelope,
            // A non-JSON 429 is a server misconfiguration the client
            // cannot reason about.
            Err(_) => {
                return TricornError::Http {
                    url: url.to_owned(),
                    status: Some(429),
                    message: "rate limited with a non-JSON body".into(),
                };
            }
        };

        let throttle = envelope.get("ThrottleSeconds").and_then(Value::as_u64).unwrap_or(0);
        let wait = if throttle == 0 {
            Duration::from_secs_f64(rand::thread_rng().gen_range(0.0..3.0))
        } else {
            Duration::from_secs_f64(throttle as f64 + rand::thread_rng().gen::<f64>())
        };
        warn!(url, throttle, wait_secs = wait.as_secs_f64(), "rate limited, waiting");
        tokio::time::sleep(wait).await;

        classify(url, StatusCode::TOO_MANY_REQUESTS, Some(&envelope), &headers)
    }

    /// Run the attempt loop for one logical request. `Ok(None)` is an
    /// HTTP 204; `Ok(Some(body))` is a 2xx body the caller decodes.
    async fn execute(
        &self,
        method: Method,
        base: Base,
        route: &str,
        options: RequestOptions,
    ) -> TricornResult<Option<Bytes>> {
        let url = self.resolve(base, route);
        let mut retries = 0u32;
        let mut backoff = ExponentialBackoff::capped(RETRY_BACKOFF_MAXIMUM)?;

        loop {
            let (status, headers, body) = self.attempt(method.clone(), &url, &options).await?;
            debug!(%url, status = status.as_u16(), "request attempt completed");

            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(self.rate_limited(&url, headers, &body).await);
            }
            if status == StatusCode::NO_CONTENT {
                return Ok(None);
            }
            if status.is_success() {
                return Ok(Some(body));
            }

            let envelope: Option<Value> = serde_json::from_slice(&body).ok();

            if is_transient(status)
                && retries < self.settings.max_retries
                && !is_fatal_token(envelope.as_ref())
            {
                let wait = backoff.next();
                retries += 1;
                debug!(
                    %url,
                    status = status.as_u16(),
                    retries,
                    wait_secs = wait,
                    "transient server error, retrying"
                );
                tokio::time::sleep(Duration::from_secs_f64(wait)).await;
                continue;
            }

            return Err(classify(&url, status, envelope.as_ref(), &headers));
        }
    }

    /// Issue a JSON request against the platform root and return the
    /// decoded `Response` field, or `None` for HTTP 204.
    pub async fn request(
        &self,
        method: Method,
        route: &str,
        options: RequestOptions,
    ) -> TricornResult<Option<Value>> {
        let url = self.resolve(Base::Platform, route);
        let Some(body) = self.execute(method, Base::Platform, route, options).await? else {
            return Ok(None);
        };

        let document: Value = serde_json::from_slice(&body).map_err(|_| TricornError::Http {
            url: url.clone(),
            status: None,
            message: "expected a JSON body".into(),
        })?;
        match document.get("Response") {
            Some(response) => Ok(Some(response.clone())),
            None => {
                warn!(%url, "response envelope has no `Response` key, returning the whole document");
                Ok(Some(document))
            }
        }
    }

    /// Like [`RestClient::request`], but fails if the route returned no
    /// payload.
    pub async fn request_value(
        &self,
        method: Method,
        route: &str,
        options: RequestOptions,
    ) -> TricornResult<Value> {
        let url = self.resolve(Base::Platform, route);
        self.request(method, route, options).await?.ok_or(TricornError::Http {
            url,
            status: Some(204),
            message: "expected a response payload".into(),
        })
    }

    /// Fetch raw bytes against the bare-domain root. Used only by
    /// manifest content downloads.
    pub async fn request_bytes(&self, route: &str) -> TricornResult<Bytes> {
        self.execute(Method::GET, Base::Site, route, RequestOptions::default()).await?.ok_or(
            TricornError::Http {
                url: self.resolve(Base::Site, route),
                status: Some(204),
                message: "expected a response payload".into(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for handle lifecycle and request options.
    use super::*;

    /// Validates `RestClient::close` behavior for the double-close and
    /// use-after-close scenarios.
    ///
    /// Assertions:
    /// - Confirms closing twice is a no-op.
    /// - Ensures a request after close fails with `ClientClosed`.
    #[tokio::test]
    async fn test_close_semantics() {
        let client = RestClient::with_key("key").unwrap();
        assert!(!client.is_closed());
        client.close();
        client.close();
        assert!(client.is_closed());

        let err = client
            .request(Method::GET, "User/GetBungieNetUserById/1/", RequestOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TricornError::ClientClosed));
    }

    /// Validates `RestClient::request` behavior for conflicting bodies.
    ///
    /// Assertions:
    /// - Ensures a descriptor with both JSON and form bodies is rejected
    ///   as a configuration error before anything is sent.
    #[tokio::test]
    async fn test_conflicting_bodies_rejected() {
        let client = RestClient::with_key("key").unwrap();
        let options = RequestOptions {
            json: Some(serde_json::json!({})),
            form: Some(vec![("a".into(), "b".into())]),
            ..RequestOptions::default()
        };

        let err = client.request(Method::POST, "App/OAuth/token/", options).await.unwrap_err();
        assert!(matches!(err, TricornError::Config(_)));
    }

    /// Validates `RestClient::resolve` behavior for slash handling.
    ///
    /// Assertions:
    /// - Confirms roots and routes join with exactly one separator.
    #[test]
    fn test_url_resolution() {
        let client = RestClient::with_key("key").unwrap();
        assert_eq!(
            client.resolve(Base::Platform, "/User/GetBungieNetUserById/1/"),
            "https://www.bungie.net/Platform/User/GetBungieNetUserById/1/"
        );
        assert_eq!(
            client.resolve(Base::Site, "common/destiny2_content/sqlite/en/world.content"),
            "https://www.bungie.net/common/destiny2_content/sqlite/en/world.content"
        );
    }
}
