//! Pieces shared by the clients of the third-party HTTP APIs.

use std::time::Duration;

use custom_error::custom_error;
use reqwest::{
    Client,
    Response,
};
use url::ParseError;

custom_error! {
///! Custom error for a failed call to an upstream provider.
pub UpstreamError
    InvalidUri {source:ParseError} = "{source}",
    InvalidRequest {source:reqwest::Error} = "{source}",
    ErrorResponse {
        provider:&'static str,
        code:u16,
        body:String
    } = "{provider} responded with status {code}: {body}",
    EmptyCompletion = "The language model returned no text",
}

pub(crate) fn http_client(timeout_secs: u64) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
}

/// Turns a non-2xx response into an error carrying the response body, which
/// is where providers explain what went wrong.
pub(crate) async fn ensure_success(
    provider: &'static str,
    response: Response,
) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::error!(
        provider,
        status = status.as_u16(),
        response_body = %body,
        "upstream call failed"
    );
    Err(UpstreamError::ErrorResponse {
        provider,
        code: status.as_u16(),
        body,
    })
}
