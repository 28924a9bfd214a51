//! Single-shot request helper with UltraDNS error-body decoding.
//!
//! Endpoint functions perform exactly one HTTP exchange; they never retry.
//! Retry of transient failures is the responsibility of the paginated-fetch
//! loop in [`crate::client::alerts`], which classifies errors via
//! [`ClientError::failure_class`](crate::error::ClientError::failure_class).

use reqwest::{RequestBuilder, Response};

use crate::error::{ClientError, Result};
use crate::models::ErrorInfo;

/// Send a request and convert non-success responses into
/// [`ClientError::ApiError`].
///
/// UltraDNS error responses carry a JSON array of `errorCode`/`errorMessage`
/// pairs; when the body parses as one, the messages are joined for display.
/// Otherwise the raw body text is used.
///
/// # Errors
///
/// Propagates transport failures as `ClientError::HttpError`. Any response
/// with a non-2xx status becomes `ClientError::ApiError` carrying the status
/// code for classification by the caller.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Try to parse UltraDNS error entries for a cleaner display
    let message = if let Ok(errors) = serde_json::from_str::<Vec<ErrorInfo>>(&body) {
        errors
            .iter()
            .map(|e| format!("{}: {}", e.error_code, e.error_message))
            .collect::<Vec<_>>()
            .join("; ")
    } else {
        body
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
    })
}
