//! Error taxonomy for the tricorn workspace
//!
//! Remote failures are classified into a closed set of variants, each
//! carrying the original URL, the HTTP status where defined, the API's
//! in-band `ErrorStatus` token and the human-readable message. Ambient
//! variants cover local failures (configuration, closed handles, I/O,
//! decoding) so every fallible path in the workspace returns the same
//! error type.

use std::collections::HashMap;
use std::time::Duration;

use thiserror::Error;

use crate::frames::FrameError;

/// Result alias used across the workspace.
pub type TricornResult<T> = Result<T, TricornError>;

/// The closed error taxonomy.
///
/// The first group maps one-to-one onto the remote failure classes; the
/// second group covers local, non-remote failures.
#[derive(Debug, Error)]
pub enum TricornError {
    /// HTTP 404, or a 5xx whose `ErrorStatus` names a missing resource.
    #[error("{url}: not found: {message}")]
    NotFound { url: String, error_status: String, message: String },

    /// HTTP 403.
    #[error("{url}: forbidden: {message}")]
    Forbidden { url: String, error_status: String, message: String },

    /// HTTP 401, or a 5xx carrying an authentication `ErrorStatus` token.
    #[error("{url}: unauthorized: {message}")]
    Unauthorized { url: String, error_status: String, message: String },

    /// HTTP 429. Propagated after the client-side wait so callers can
    /// back off at a higher level.
    #[error("{url}: rate limited, retry after {retry_after}s: {message}")]
    RateLimited {
        url: String,
        retry_after: u64,
        message: String,
        headers: HashMap<String, String>,
    },

    /// 5xx with `ErrorStatus = DestinyInvalidMembershipType`. Carries the
    /// membership type the remote expected so the caller can retry with
    /// the right argument.
    #[error("{url}: invalid membership type, correct type is {correct_type}: {message}")]
    MembershipType { url: String, correct_type: i32, message: String },

    /// Unclassified 5xx, or retries exhausted on a transient 5xx.
    #[error("{url}: internal server error ({error_status}): {message}")]
    InternalServerError { url: String, status: u16, error_status: String, message: String },

    /// Transport-level failure, a non-JSON body where JSON was required,
    /// or a timeout.
    #[error("http error for {url}: {message}")]
    Http { url: String, status: Option<u16>, message: String },

    /// 5xx with `ErrorStatus = SystemDisabled`. Fatal for the call and
    /// never retried.
    #[error("{url}: the API is temporarily disabled: {message}")]
    ServiceDisabled { url: String, message: String },

    /// Any other 4xx response.
    #[error("{url}: response error {status}: {message}")]
    ResponseError { url: String, status: u16, error_status: String, message: String },

    /// Invalid client configuration (empty API key, missing OAuth
    /// credentials, conflicting request bodies).
    #[error("configuration error: {0}")]
    Config(String),

    /// The session handle was used after `close()`.
    #[error("client handle has been closed")]
    ClientClosed,

    /// Local filesystem failure (manifest extraction, cache writes).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A body that should have decoded as JSON did not.
    #[error("json decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest acquisition failure outside the remote taxonomy.
    #[error("manifest error: {0}")]
    Manifest(String),

    /// Deserialization framework failure on a payload of the wrong shape.
    #[error(transparent)]
    Frame(#[from] FrameError),
}

impl TricornError {
    /// Whether retrying the same call can reasonably succeed.
    ///
    /// `RateLimited` is retryable only after waiting; `ServiceDisabled`
    /// never is.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimited { .. }
                | Self::InternalServerError { .. }
                | Self::Http { status: None, .. }
        )
    }

    /// Suggested delay before a caller-level retry, when one exists.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RateLimited { retry_after, .. } => Some(Duration::from_secs(*retry_after)),
            _ => None,
        }
    }

    /// The HTTP status attached to this error, where one is defined.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Forbidden { .. } => Some(403),
            Self::Unauthorized { .. } => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::InternalServerError { status, .. } | Self::ResponseError { status, .. } => {
                Some(*status)
            }
            Self::Http { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for the error taxonomy.
    use super::*;

    /// Validates `TricornError::is_retryable` behavior across the closed
    /// variant set.
    ///
    /// Assertions:
    /// - Ensures rate-limited and internal-server errors are retryable.
    /// - Ensures service-disabled and not-found errors are not.
    #[test]
    fn test_retryable_classification() {
        let rate_limited = TricornError::RateLimited {
            url: "https://example.test".into(),
            retry_after: 2,
            message: "slow down".into(),
            headers: HashMap::new(),
        };
        assert!(rate_limited.is_retryable());

        let internal = TricornError::InternalServerError {
            url: "https://example.test".into(),
            status: 500,
            error_status: "UnhandledException".into(),
            message: "boom".into(),
        };
        assert!(internal.is_retryable());

        let disabled = TricornError::ServiceDisabled {
            url: "https://example.test".into(),
            message: "maintenance".into(),
        };
        assert!(!disabled.is_retryable());

        let not_found = TricornError::NotFound {
            url: "https://example.test".into(),
            error_status: "DestinyItemNotFound".into(),
            message: "gone".into(),
        };
        assert!(!not_found.is_retryable());
    }

    /// Validates `TricornError::retry_after` behavior for the rate limit
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the carried delay equals `Duration::from_secs(30)`.
    /// - Ensures non-rate-limit variants carry no delay.
    #[test]
    fn test_retry_after_extraction() {
        let err = TricornError::RateLimited {
            url: "u".into(),
            retry_after: 30,
            message: "m".into(),
            headers: HashMap::new(),
        };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(30)));
        assert_eq!(TricornError::ClientClosed.retry_after(), None);
    }

    /// Validates `TricornError::status` behavior for status extraction.
    ///
    /// Assertions:
    /// - Confirms the canonical statuses for the fixed-status variants.
    /// - Ensures local variants report no status.
    #[test]
    fn test_status_extraction() {
        let err = TricornError::Forbidden {
            url: "u".into(),
            error_status: "AccessDenied".into(),
            message: "m".into(),
        };
        assert_eq!(err.status(), Some(403));
        assert_eq!(TricornError::Config("bad".into()).status(), None);
    }
}
