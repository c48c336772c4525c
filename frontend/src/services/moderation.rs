//! HTTP client for the moderation API.
//!
//! `POST /moderate` takes a multipart body with a single `file` part and a
//! bearer token; `GET /moderate/categories` describes what is detected.
//! Transports are swappable through [`ModerationTransport`].

use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::{AbortController, File, FormData};

use crate::{CategoryCatalog, ClientConfig, ModerationResult};

/// Prefix of every user-facing moderation failure.
pub const FAILURE_PREFIX: &str = "Moderation failed: ";

// =============================================================================
// Errors
// =============================================================================

/// Why a moderation request did not produce a result.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModerationError {
    /// Network unreachable, CORS rejection, request could not be built.
    #[error("{0}")]
    Transport(String),

    /// Aborted by the client-side timeout.
    #[error("timeout of {timeout_ms}ms exceeded")]
    Timeout { timeout_ms: u32 },

    /// Non-2xx response.
    #[error("{}", service_message(.status, .detail))]
    Service { status: u16, detail: Option<String> },

    /// 2xx response that does not match the expected payload.
    #[error("invalid response: {0}")]
    Decode(String),
}

fn service_message(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(detail) => detail.to_string(),
        None => format!("Request failed with status code {}", status),
    }
}

impl ModerationError {
    /// Message shown to the user for a failed attempt.
    pub fn user_message(&self) -> String {
        format!("{}{}", FAILURE_PREFIX, self)
    }
}

/// Extract the string `detail` field of an error body.
///
/// Non-JSON bodies, and `detail` values that are not strings (validation
/// error lists), yield `None`.
pub fn parse_error_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

/// Turn a status code and body into a typed payload or a [`ModerationError`].
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ModerationError> {
    if !(200..300).contains(&status) {
        return Err(ModerationError::Service {
            status,
            detail: parse_error_detail(body),
        });
    }

    serde_json::from_str(body).map_err(|e| ModerationError::Decode(e.to_string()))
}

// =============================================================================
// Transport
// =============================================================================

/// Something that can carry a moderation request to the service.
#[allow(async_fn_in_trait)]
pub trait ModerationTransport {
    /// The selected-file handle this transport uploads.
    type File;

    /// `POST /moderate` with `file` as the multipart `file` part.
    async fn moderate(&self, file: &Self::File, token: &str) -> Result<ModerationResult, ModerationError>;

    /// `GET /moderate/categories`.
    async fn categories(&self, token: &str) -> Result<CategoryCatalog, ModerationError>;
}

/// Browser `fetch` transport built on gloo-net.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request under the configured timeout and return status and body.
    async fn execute(
        &self,
        builder: RequestBuilder,
        body: Option<FormData>,
    ) -> Result<(u16, String), ModerationError> {
        let controller = AbortController::new()
            .map_err(|e| ModerationError::Transport(format!("Failed to create AbortController: {:?}", e)))?;
        let signal = controller.signal();
        let builder = builder.abort_signal(Some(&signal));

        let request: Request = match body {
            Some(form) => builder.body(form),
            None => builder.build(),
        }
        .map_err(|e| ModerationError::Transport(format!("Failed to build request: {}", e)))?;

        let timed_out = Rc::new(Cell::new(false));
        let timeout_ms = self.config.timeout_ms;
        // Dropping the timer cancels it, so it must outlive the body read.
        let _timer = {
            let timed_out = timed_out.clone();
            Timeout::new(timeout_ms, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        let to_error = |e: gloo_net::Error| {
            if timed_out.get() {
                ModerationError::Timeout { timeout_ms }
            } else {
                ModerationError::Transport(e.to_string())
            }
        };

        let response = request.send().await.map_err(to_error)?;
        let status = response.status();
        let text = response.text().await.map_err(to_error)?;

        Ok((status, text))
    }

    fn with_token(builder: RequestBuilder, token: &str) -> RequestBuilder {
        builder.header("Authorization", &format!("Bearer {}", token))
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl ModerationTransport for HttpTransport {
    type File = File;

    async fn moderate(&self, file: &File, token: &str) -> Result<ModerationResult, ModerationError> {
        let form_data = FormData::new()
            .map_err(|e| ModerationError::Transport(format!("Failed to create FormData: {:?}", e)))?;
        form_data
            .append_with_blob("file", file)
            .map_err(|e| ModerationError::Transport(format!("Failed to append file: {:?}", e)))?;

        // Content-Type is left to the browser so it can add the multipart boundary.
        let url = self.config.endpoint("/moderate");
        let builder = Self::with_token(Request::post(&url), token);

        let (status, body) = self.execute(builder, Some(form_data)).await?;
        decode_response(status, &body)
    }

    async fn categories(&self, token: &str) -> Result<CategoryCatalog, ModerationError> {
        let url = self.config.endpoint("/moderate/categories");
        let builder = Self::with_token(Request::get(&url), token);

        let (status, body) = self.execute(builder, None).await?;
        decode_response(status, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_becomes_message() {
        let err: ModerationError = decode_response::<ModerationResult>(
            415,
            r#"{"detail": "unsupported file type"}"#,
        )
        .unwrap_err();

        assert_eq!(
            err,
            ModerationError::Service {
                status: 415,
                detail: Some("unsupported file type".to_string())
            }
        );
        assert_eq!(err.user_message(), "Moderation failed: unsupported file type");
    }

    #[test]
    fn test_service_error_without_detail() {
        let err = decode_response::<ModerationResult>(500, "Internal Server Error").unwrap_err();
        assert_eq!(
            err.user_message(),
            "Moderation failed: Request failed with status code 500"
        );

        let err = decode_response::<ModerationResult>(502, "").unwrap_err();
        assert_eq!(err, ModerationError::Service { status: 502, detail: None });
    }

    #[test]
    fn test_non_string_detail_is_ignored() {
        let body = r#"{"detail": [{"loc": ["body", "file"], "msg": "field required"}]}"#;
        assert_eq!(parse_error_detail(body), None);
        assert_eq!(parse_error_detail(r#"{"error": "nope"}"#), None);
        assert_eq!(parse_error_detail(r#"{"detail": "Invalid token"}"#).as_deref(), Some("Invalid token"));
    }

    #[test]
    fn test_transport_message_is_verbatim() {
        let err = ModerationError::Transport("Failed to fetch".to_string());
        assert_eq!(err.user_message(), "Moderation failed: Failed to fetch");

        let err = ModerationError::Timeout { timeout_ms: 10_000 };
        assert_eq!(err.user_message(), "Moderation failed: timeout of 10000ms exceeded");
    }

    #[test]
    fn test_success_body_is_decoded() {
        let body = r#"{"is_safe": true, "categories": {"violence": 0.01}}"#;
        let result: ModerationResult = decode_response(200, body).unwrap();
        assert!(result.is_safe);
        assert_eq!(result.categories.get("violence"), Some(&0.01));
    }

    #[test]
    fn test_malformed_success_body() {
        let err = decode_response::<ModerationResult>(200, "<html>").unwrap_err();
        assert!(matches!(err, ModerationError::Decode(_)));
        assert!(err.user_message().starts_with("Moderation failed: invalid response: "));
    }
}
