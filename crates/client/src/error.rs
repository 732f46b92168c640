//! Response classification
//!
//! Maps an HTTP status plus the platform's in-band `ErrorStatus` token
//! onto exactly one variant of the closed error taxonomy. The executor
//! routes every failing response through here, including 429s after it
//! has slept out the throttle, so this table is the single mapping from
//! responses to errors.

use std::collections::HashMap;

use reqwest::StatusCode;
use serde_json::Value;

use tricorn_domain::TricornError;

/// `ErrorStatus` tokens that mean the caller's credentials are the
/// problem, regardless of the 5xx status they arrive with.
const AUTH_TOKENS: [&str; 4] = [
    "ApiKeyMissingFromRequest",
    "WebAuthRequired",
    "ApiInvalidOrExpiredKey",
    "AuthenticationInvalid",
];

fn envelope_str<'a>(envelope: Option<&'a Value>, key: &str) -> &'a str {
    envelope.and_then(|body| body.get(key)).and_then(Value::as_str).unwrap_or("")
}

fn correct_membership_type(envelope: Option<&Value>) -> i32 {
    envelope
        .and_then(|body| body.get("MessageData"))
        .and_then(|data| data.get("membershipType"))
        .and_then(|raw| match raw {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        })
        .map_or(0, |n| n as i32)
}

/// Classify a failing response into the taxonomy.
///
/// `envelope` is the decoded platform envelope when the body was JSON;
/// a non-JSON body on any path that required one is an [`TricornError::Http`].
/// For 429 the executor sleeps out the throttle before calling this, so
/// the returned `RateLimited` reaches the caller only after the wait.
pub(crate) fn classify(
    url: &str,
    status: StatusCode,
    envelope: Option<&Value>,
    headers: &HashMap<String, String>,
) -> TricornError {
    let error_status = envelope_str(envelope, "ErrorStatus").to_owned();
    let message = envelope_str(envelope, "Message").to_owned();
    let url = url.to_owned();

    match status.as_u16() {
        404 => TricornError::NotFound { url, error_status, message },
        403 => TricornError::Forbidden { url, error_status, message },
        401 => TricornError::Unauthorized { url, error_status, message },
        429 => {
            let retry_after = envelope
                .and_then(|body| body.get("ThrottleSeconds"))
                .and_then(Value::as_u64)
                .unwrap_or(0);
            TricornError::RateLimited { url, retry_after, message, headers: headers.clone() }
        }
        code @ 400..=499 => {
            TricornError::ResponseError { url, status: code, error_status, message }
        }
        code @ 500..=599 => {
            if envelope.is_none() {
                return TricornError::Http {
                    url,
                    status: Some(code),
                    message: "non-JSON error body".into(),
                };
            }
            if AUTH_TOKENS.contains(&error_status.as_str()) {
                TricornError::Unauthorized { url, error_status, message }
            } else if error_status == "SystemDisabled" {
                TricornError::ServiceDisabled { url, message }
            } else if error_status.contains("NotFound")
                || error_status == "UserCannotFindRequestedUser"
            {
                TricornError::NotFound { url, error_status, message }
            } else if error_status == "DestinyInvalidMembershipType" {
                TricornError::MembershipType {
                    url,
                    correct_type: correct_membership_type(envelope),
                    message,
                }
            } else {
                TricornError::InternalServerError { url, status: code, error_status, message }
            }
        }
        code => TricornError::Http { url, status: Some(code), message },
    }
}

/// Whether a 5xx status is worth an internal retry at all.
pub(crate) fn is_transient(status: StatusCode) -> bool {
    matches!(status.as_u16(), 500 | 502 | 503 | 504)
}

/// Whether the envelope's `ErrorStatus` forbids retrying a transient
/// status: authentication problems and platform maintenance will not
/// resolve by waiting.
pub(crate) fn is_fatal_token(envelope: Option<&Value>) -> bool {
    let token = envelope_str(envelope, "ErrorStatus");
    !token.is_empty()
        && (AUTH_TOKENS.contains(&token)
            || token == "SystemDisabled"
            || token == "DestinyInvalidMembershipType"
            || token.contains("NotFound")
            || token == "UserCannotFindRequestedUser")
}

#[cfg(test)]
mod tests {
    //! Unit tests for the response classifier.
    use serde_json::json;

    use super::*;

    fn envelope(error_status: &str, message: &str) -> Value {
        json!({
            "ErrorCode": 5,
            "ErrorStatus": error_status,
            "Message": message,
            "ThrottleSeconds": 0
        })
    }

    /// Validates `classify` behavior for the fixed-status 4xx rows.
    ///
    /// Assertions:
    /// - Confirms 404, 403, and 401 map to their dedicated variants.
    /// - Confirms another 4xx maps to the generic response error.
    #[test]
    fn test_fixed_status_rows() {
        let headers = HashMap::new();
        let body = envelope("DestinyItemNotFound", "gone");

        let err = classify("u", StatusCode::NOT_FOUND, Some(&body), &headers);
        assert!(matches!(err, TricornError::NotFound { .. }));

        let err = classify("u", StatusCode::FORBIDDEN, Some(&body), &headers);
        assert!(matches!(err, TricornError::Forbidden { .. }));

        let err = classify("u", StatusCode::UNAUTHORIZED, Some(&body), &headers);
        assert!(matches!(err, TricornError::Unauthorized { .. }));

        let err = classify("u", StatusCode::IM_A_TEAPOT, Some(&body), &headers);
        assert!(matches!(err, TricornError::ResponseError { status: 418, .. }));
    }

    /// Validates `classify` behavior for the 5xx token table.
    ///
    /// Assertions:
    /// - Confirms auth tokens map to `Unauthorized`.
    /// - Confirms `SystemDisabled` maps to `ServiceDisabled`.
    /// - Confirms missing-resource tokens map to `NotFound`.
    /// - Confirms the membership-type token carries the correct type.
    /// - Confirms unknown tokens default to `InternalServerError`.
    #[test]
    fn test_5xx_token_table() {
        let headers = HashMap::new();
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        let body = envelope("ApiKeyMissingFromRequest", "no key");
        let err = classify("u", status, Some(&body), &headers);
        assert!(matches!(err, TricornError::Unauthorized { .. }));

        let body = envelope("SystemDisabled", "maintenance");
        let err = classify("u", status, Some(&body), &headers);
        assert!(matches!(err, TricornError::ServiceDisabled { .. }));

        let body = envelope("DestinyCharacterNotFound", "who");
        let err = classify("u", status, Some(&body), &headers);
        assert!(matches!(err, TricornError::NotFound { .. }));

        let mut body = envelope("DestinyInvalidMembershipType", "wrong platform");
        body["MessageData"] = json!({ "membershipType": "2" });
        let err = classify("u", status, Some(&body), &headers);
        assert!(matches!(err, TricornError::MembershipType { correct_type: 2, .. }));

        let body = envelope("SomeFutureToken", "???");
        let err = classify("u", status, Some(&body), &headers);
        assert!(matches!(err, TricornError::InternalServerError { status: 500, .. }));
    }

    /// Validates `classify` behavior for a throttled response.
    ///
    /// Assertions:
    /// - Confirms a 429 maps to `RateLimited` carrying `ThrottleSeconds`
    ///   and the response headers.
    #[test]
    fn test_throttled_response() {
        let mut body = envelope("PerEndpointRequestThrottleExceeded", "slow down");
        body["ThrottleSeconds"] = json!(15);
        let headers = HashMap::from([("x-request-id".to_owned(), "abc".to_owned())]);

        let err = classify("u", StatusCode::TOO_MANY_REQUESTS, Some(&body), &headers);
        match err {
            TricornError::RateLimited { retry_after, headers, .. } => {
                assert_eq!(retry_after, 15);
                assert_eq!(headers.get("x-request-id").map(String::as_str), Some("abc"));
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
    }

    /// Validates `classify` behavior for a non-JSON 5xx body.
    ///
    /// Assertions:
    /// - Confirms the absence of an envelope degrades to `Http` rather
    ///   than guessing a token.
    #[test]
    fn test_non_json_5xx() {
        let err = classify("u", StatusCode::BAD_GATEWAY, None, &HashMap::new());
        assert!(matches!(err, TricornError::Http { status: Some(502), .. }));
    }

    /// Validates `is_fatal_token` behavior for retry gating.
    ///
    /// Assertions:
    /// - Ensures auth and maintenance tokens forbid retries.
    /// - Ensures unknown tokens and missing envelopes permit them.
    #[test]
    fn test_fatal_tokens() {
        assert!(is_fatal_token(Some(&envelope("SystemDisabled", ""))));
        assert!(is_fatal_token(Some(&envelope("WebAuthRequired", ""))));
        assert!(!is_fatal_token(Some(&envelope("UnhandledException", ""))));
        assert!(!is_fatal_token(None));
    }
}
