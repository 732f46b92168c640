//! OAuth2 subsystem
//!
//! The library provides the primitives of the authorization-code flow:
//! building the browser URL, exchanging a code for tokens, and refreshing
//! an access token. It never schedules refreshes; the caller owns the
//! timer. Token responses come back through the executor's
//! missing-`Response` fallback path, since the token endpoint is the one
//! route that does not use the platform envelope.

use once_cell::sync::OnceCell;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use tricorn_domain::{TricornError, TricornResult};

use crate::rest::{RequestOptions, RestClient};
use crate::settings::OAUTH_AUTHORIZE_URL;

/// Token endpoint route, relative to the platform root.
const TOKEN_ROUTE: &str = "App/OAuth/token/";

/// A rendered authorization URL descriptor with a fresh CSRF state.
#[derive(Debug)]
pub struct OAuthUrl {
    client_id: i64,
    state: String,
    rendered: OnceCell<String>,
}

impl OAuthUrl {
    pub(crate) fn new(client_id: i64) -> Self {
        Self { client_id, state: Uuid::new_v4().to_string(), rendered: OnceCell::new() }
    }

    /// The application's client id.
    pub fn client_id(&self) -> i64 {
        self.client_id
    }

    /// The opaque CSRF state. The caller must verify the redirect
    /// carries it back unchanged.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// The full authorization URL. Memoized; rendering twice yields the
    /// same string.
    pub fn url(&self) -> &str {
        self.rendered.get_or_init(|| {
            format!(
                "{OAUTH_AUTHORIZE_URL}?client_id={}&response_type=code&state={}",
                self.client_id,
                urlencoding::encode(&self.state)
            )
        })
    }
}

impl std::fmt::Display for OAuthUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.url())
    }
}

fn string_or_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().ok_or_else(|| D::Error::custom("membership_id overflow")),
        Value::String(s) => s.parse().map_err(D::Error::custom),
        other => Err(D::Error::custom(format!("unexpected membership_id shape: {other}"))),
    }
}

/// A successful token-endpoint response.
///
/// Storable in a handle's metadata bag (it serializes cleanly); the
/// caller is responsible for refreshing before `expires_in` elapses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthToken {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub refresh_expires_in: u64,
    /// The remote serializes this as a JSON string; both shapes are
    /// accepted.
    #[serde(deserialize_with = "string_or_int")]
    pub membership_id: i64,
}

impl RestClient {
    /// Build the browser authorization URL with a freshly generated CSRF
    /// state. Requires a configured client id.
    pub fn build_oauth2_url(&self) -> TricornResult<OAuthUrl> {
        let (client_id, _) = self.settings().oauth_credentials()?;
        Ok(OAuthUrl::new(client_id))
    }

    async fn token_request(&self, form: Vec<(String, String)>) -> TricornResult<OAuthToken> {
        let options = RequestOptions { form: Some(form), ..RequestOptions::default() };
        let value = self.request_value(Method::POST, TOKEN_ROUTE, options).await?;
        serde_json::from_value(value).map_err(TricornError::Json)
    }

    /// Exchange an authorization code for a token record.
    pub async fn fetch_oauth2_tokens(&self, code: &str) -> TricornResult<OAuthToken> {
        let (client_id, client_secret) = self.settings().oauth_credentials()?;
        self.token_request(vec![
            ("grant_type".to_owned(), "authorization_code".to_owned()),
            ("code".to_owned(), code.to_owned()),
            ("client_id".to_owned(), client_id.to_string()),
            ("client_secret".to_owned(), client_secret.to_owned()),
        ])
        .await
    }

    /// Trade a refresh token for a fresh token record.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> TricornResult<OAuthToken> {
        let (client_id, client_secret) = self.settings().oauth_credentials()?;
        self.token_request(vec![
            ("grant_type".to_owned(), "refresh_token".to_owned()),
            ("refresh_token".to_owned(), refresh_token.to_owned()),
            ("client_id".to_owned(), client_id.to_string()),
            ("client_secret".to_owned(), client_secret.to_owned()),
        ])
        .await
    }
}
