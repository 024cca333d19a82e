use std::any::Any;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use users_core::{ErrorKind, HttpError};
use users_manager::UserError;

/// Failures surfaced by the HTTP adapter
///
/// Responses are plain text. Internal detail never reaches the body.
#[derive(Debug)]
pub enum ApiError {
    /// Failure classified by the user operation
    User(UserError),
    /// The request body could not be decoded
    InvalidPayload(String),
    /// Failure that carries no classification
    Unclassified,
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::User(err) => err.status_code(),
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::Unclassified => ErrorKind::Unknown.status_code(),
        }
    }

    /// Message written to the response body
    pub fn client_message(&self) -> String {
        match self {
            Self::User(err) => err.client_message(),
            Self::InvalidPayload(detail) => format!("Error decoding request params, err: {detail}"),
            Self::Unclassified => ErrorKind::Unknown.client_message(""),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        Self::User(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.client_message()).into_response()
    }
}

/// Best-effort text of a panic payload, for logs only
pub fn panic_detail<'a>(panic: &'a (dyn Any + Send + 'static)) -> &'a str {
    panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("non-string panic payload")
}

/// Response for a request whose handler panicked outside the operation
///
/// The panic payload is logged and never written to the body.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!(
        kind = %ErrorKind::Unknown,
        panic = panic_detail(&*panic),
        "request handler panicked"
    );

    ApiError::Unclassified.into_response()
}
