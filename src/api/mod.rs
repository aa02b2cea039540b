pub(crate) mod events;
pub(crate) mod scheduler;

use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::Operation;

/// Join an endpoint path onto the configured base URL.
///
/// The path is appended verbatim so base URLs carrying a path prefix
/// (`https://host/api`) keep it.
pub(crate) fn endpoint(base_url: &str, path: &str) -> Result<Url> {
    let url = format!("{}{path}", base_url.trim_end_matches('/'));
    Url::parse(&url).map_err(|e| Error::InvalidUrl {
        url,
        reason: e.to_string(),
    })
}

/// Issue one request and decode the JSON response as `T`.
///
/// Any failure is reported as [`Error::Api`] carrying the server's `error`
/// string when present, else the operation's fallback message.
pub(crate) async fn call<T, B>(
    client: &reqwest::Client,
    base_url: &str,
    method: Method,
    path: &str,
    body: Option<&B>,
    operation: Operation,
) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let url = endpoint(base_url, path)?;
    debug!(%url, %method, %operation, "calling events service");

    let mut request = client.request(method, url.clone());
    if let Some(body) = body {
        request = request.json(body);
    }

    let response = request.send().await.map_err(|e| {
        warn!(%url, %operation, error = %e, "request failed");
        Error::fallback(operation)
    })?;

    let status = response.status();
    let bytes = response.bytes().await.map_err(|e| {
        warn!(%url, %operation, error = %e, "failed to read response body");
        Error::fallback(operation)
    })?;

    if !status.is_success() {
        let message = server_error_message(&bytes);
        warn!(%url, %operation, %status, ?message, "events service returned an error");
        return Err(Error::api(operation, message));
    }

    decode(&bytes).map_err(|e| {
        warn!(%url, %operation, error = %e, "unexpected response payload");
        Error::fallback(operation)
    })
}

/// Decode a success body; an empty body reads as JSON `null`.
fn decode<T: DeserializeOwned>(bytes: &[u8]) -> serde_json::Result<T> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_slice(b"null")
    } else {
        serde_json::from_slice(bytes)
    }
}

/// Extract the `error` member of a failure payload, if the body carries one.
pub(crate) fn server_error_message(bytes: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes).ok()?;
    match value.get("error")? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_keeps_base_path() {
        let url = endpoint("https://example.com/api/", "/events/sample").unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/events/sample");

        let url = endpoint("http://localhost:5000", "/scheduler/status").unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/scheduler/status");
    }

    #[test]
    fn test_endpoint_rejects_garbage() {
        let err = endpoint("not a url", "/events").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_server_error_message() {
        assert_eq!(
            server_error_message(br#"{"error": "Database unavailable"}"#),
            Some("Database unavailable".to_string())
        );
        assert_eq!(server_error_message(br#"{"message": "nope"}"#), None);
        assert_eq!(server_error_message(br#"{"error": null}"#), None);
        assert_eq!(server_error_message(b"<html>Bad Gateway</html>"), None);
        assert_eq!(server_error_message(b""), None);
    }

    #[test]
    fn test_decode_empty_body_as_null() {
        let value: serde_json::Value = decode(b"  ").unwrap();
        assert!(value.is_null());

        let events: Option<Vec<u8>> = decode(b"").unwrap();
        assert!(events.is_none());
    }
}
