//! The single translation boundary between the HTTP transport and the SDK
//! error taxonomy. No raw `reqwest::Error` escapes past this module.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::errors::{decode_error_message, Error};

/// Executes a request and deserializes the success body into `T`.
///
/// A successful status with an empty body is treated as an internal server
/// error; servers must not return empty success bodies.
pub(crate) async fn execute<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, Error> {
    let (status, body) = send(request).await?;
    if !status.is_success() {
        return Err(error_for_status(status, &body));
    }
    if body.is_empty() {
        tracing::error!("Empty body on successful {} response", status);
        return Err(Error::internal_server_error());
    }
    serde_json::from_slice::<T>(&body).map_err(|e| {
        tracing::error!("Failed to parse response body: {}", e);
        Error::sdk_with_source("Failed to parse response body", e)
    })
}

/// Executes a request and returns the raw success body for the caller to
/// persist. An empty body is a valid zero-length file here.
pub(crate) async fn execute_raw(request: reqwest::RequestBuilder) -> Result<Vec<u8>, Error> {
    let (status, body) = send(request).await?;
    if !status.is_success() {
        return Err(error_for_status(status, &body));
    }
    Ok(body)
}

async fn send(request: reqwest::RequestBuilder) -> Result<(StatusCode, Vec<u8>), Error> {
    let response = request.send().await.map_err(classify_transport_error)?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(classify_transport_error)?
        .to_vec();
    Ok((status, body))
}

fn error_for_status(status: StatusCode, body: &[u8]) -> Error {
    // Error body shouldn't be absent if the request wasn't successful.
    if body.is_empty() {
        tracing::error!("Request failed with status {} and no error body", status);
        return Error::internal_server_error();
    }
    match decode_error_message(status, body) {
        Ok(message) => {
            tracing::error!("{}", message);
            Error::sdk(message)
        }
        Err(e) => {
            tracing::error!("Failed to decode {} error body: {}", status, e);
            Error::sdk_with_source("Failed to decode error response", e)
        }
    }
}

fn classify_transport_error(e: reqwest::Error) -> Error {
    if e.is_connect() || e.is_timeout() {
        tracing::error!("Network failure: {}", e);
        Error::Net(e)
    } else {
        tracing::error!("Request failed: {}", e);
        Error::sdk_with_source("Request failed", e)
    }
}
