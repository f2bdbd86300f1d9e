//! HTTP helper functions for Crux Core
//!
//! Turns `crux_http` results into the data the reset actions carry. Failures
//! never escape as errors of the command itself; they become [`RemoteError`]
//! values.

use crux_http::{HttpError, Response};
use serde::Deserialize;

use crate::types::RemoteError;

/// Base URL of the public API the account-recovery endpoints live under.
///
/// `crux_http` requires absolute URLs. Shells talking to another deployment
/// replace this prefix before sending the request.
pub const BASE_URL: &str = "https://public-api.wordpress.com";

pub const LOOKUP_ENDPOINT: &str = "/wpcom/v2/account-recovery/lookup";
pub const REQUEST_RESET_ENDPOINT: &str = "/wpcom/v2/account-recovery/request-reset";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use account_recovery_core::http_helpers::build_url;
/// let url = build_url("/wpcom/v2/account-recovery/lookup");
/// assert_eq!(url, "https://public-api.wordpress.com/wpcom/v2/account-recovery/lookup");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Constructs the full address of an endpoint with url-encoded query parameters.
pub fn build_url_with_query(endpoint: &str, query: &[(&str, &str)]) -> Result<String, String> {
    url::Url::parse_with_params(&build_url(endpoint), query)
        .map(String::from)
        .map_err(|e| format!("invalid URL for {endpoint}: {e}"))
}

// Error body sent by the API on failures
#[derive(Deserialize)]
struct ErrorBody {
    status: Option<u16>,
    message: String,
}

/// Builds the error for a response or error body.
///
/// A `{status, message}` body is taken over as is; anything else is reported
/// with the HTTP status and the body text.
pub fn remote_error(status: u16, body: Option<&[u8]>) -> RemoteError {
    match body {
        Some(body) if !body.is_empty() => match serde_json::from_slice::<ErrorBody>(body) {
            Ok(error) => RemoteError::new(error.status.or(Some(status)), error.message),
            Err(_) => RemoteError::new(Some(status), String::from_utf8_lossy(body)),
        },
        _ => RemoteError::new(Some(status), format!("HTTP {status}")),
    }
}

/// Validates HTTP response.
///
/// Returns `true` if the response status is 2xx.
pub fn is_response_success(response: &Response<Vec<u8>>) -> bool {
    response.status().is_success()
}

/// Extracts the error of an unsuccessful response.
pub fn extract_remote_error(response: &mut Response<Vec<u8>>) -> RemoteError {
    let status = u16::from(response.status());
    let body = response.take_body();
    remote_error(status, body.as_deref())
}

/// Converts a transport failure.
pub fn map_http_error(error: HttpError) -> RemoteError {
    match error {
        HttpError::Http {
            code,
            message,
            body,
        } => match body {
            Some(body) if !body.is_empty() => remote_error(u16::from(code), Some(&body)),
            _ => RemoteError::new(Some(u16::from(code)), message),
        },
        other => RemoteError::new(None, other.to_string()),
    }
}

/// Parse JSON from response body.
///
/// Returns error if response is not successful or JSON parsing fails.
pub fn parse_json_response<T: serde::de::DeserializeOwned>(
    response: &mut Response<Vec<u8>>,
) -> Result<T, RemoteError> {
    if !is_response_success(response) {
        return Err(extract_remote_error(response));
    }

    let status = u16::from(response.status());
    match response.take_body() {
        Some(body) => serde_json::from_slice(&body)
            .map_err(|e| RemoteError::new(Some(status), format!("JSON parse error: {e}"))),
        None => Err(RemoteError::new(Some(status), "empty response body")),
    }
}

/// Check response status only (no body parsing).
pub fn check_response_status(response: &mut Response<Vec<u8>>) -> Result<(), RemoteError> {
    if is_response_success(response) {
        Ok(())
    } else {
        Err(extract_remote_error(response))
    }
}

/// Process HTTP response result and parse JSON
pub fn process_json_response<T: serde::de::DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, RemoteError> {
    match result {
        Ok(mut response) => parse_json_response(&mut response),
        Err(e) => Err(map_http_error(e)),
    }
}

/// Process HTTP response result and check status only (no JSON parsing)
pub fn process_status_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), RemoteError> {
    match result {
        Ok(mut response) => check_response_status(&mut response),
        Err(e) => Err(map_http_error(e)),
    }
}
