use std::fmt;

use http::StatusCode;

/// Generic message returned for internal failures
const INTERNAL_MESSAGE: &str = "Internal server error, please retry later.";

/// Generic message returned for failures nobody classified
const UNKNOWN_MESSAGE: &str = "Unknown error, please retry later.";

/// Classification assigned to an operation failure
///
/// Chosen once, where the failure happens. Adapters map it to a
/// transport status and never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller sent something the operation cannot accept
    BadRequest,
    /// The request collides with existing state (e.g. an email in use)
    Conflict,
    /// A dependency of the operation failed
    InternalError,
    /// Catch-all for failures that carry no classification
    ///
    /// Never produced by a documented operation path.
    Unknown,
}

impl ErrorKind {
    /// HTTP status code for this classification
    #[must_use]
    pub const fn status_code(self) -> StatusCode {
        match self {
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::InternalError | Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable name (e.g. `bad_request`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "bad_request",
            Self::Conflict => "conflict",
            Self::InternalError => "internal_server_error",
            Self::Unknown => "unknown",
        }
    }

    /// Build the message shown to API consumers
    ///
    /// Client-caused failures echo `detail`. Internal and unknown failures
    /// get a generic retry message and `detail` is dropped.
    #[must_use]
    pub fn client_message(self, detail: &str) -> String {
        match self {
            Self::BadRequest => format!("Bad request: {detail}"),
            Self::Conflict => format!("Conflict: {detail}"),
            Self::InternalError => INTERNAL_MESSAGE.to_owned(),
            Self::Unknown => UNKNOWN_MESSAGE.to_owned(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for domain errors that can be converted to HTTP responses
///
/// Implemented by each domain crate's error type. The server layer turns
/// these into actual HTTP responses, so domain errors stay decoupled from
/// axum.
pub trait HttpError: std::error::Error {
    /// Classification of this error
    fn error_kind(&self) -> ErrorKind;

    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        self.error_kind().status_code()
    }

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String {
        self.error_kind().client_message(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::Conflict.status_code(), StatusCode::CONFLICT);
        assert_eq!(ErrorKind::InternalError.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorKind::Unknown.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn client_errors_echo_detail() {
        let msg = ErrorKind::BadRequest.client_message("The password contains some invalid characters.");
        assert_eq!(msg, "Bad request: The password contains some invalid characters.");

        let msg = ErrorKind::Conflict.client_message("taken");
        assert_eq!(msg, "Conflict: taken");
    }

    #[test]
    fn server_errors_hide_detail() {
        let detail = "mysql: connection refused";
        let internal = ErrorKind::InternalError.client_message(detail);
        let unknown = ErrorKind::Unknown.client_message(detail);

        assert_eq!(internal, "Internal server error, please retry later.");
        assert_eq!(unknown, "Unknown error, please retry later.");
        assert!(!internal.contains(detail));
        assert!(!unknown.contains(detail));
    }

    #[test]
    fn display_uses_machine_names() {
        assert_eq!(ErrorKind::BadRequest.to_string(), "bad_request");
        assert_eq!(ErrorKind::InternalError.to_string(), "internal_server_error");
        assert_eq!(ErrorKind::Unknown.to_string(), "unknown");
    }
}
