use thiserror::Error;
use users_core::{ErrorKind, HttpError};

pub type Result<T> = std::result::Result<T, UserError>;

/// User operation failures, classified where they happen
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    /// The input cannot be accepted (e.g. invalid password characters)
    #[error("{0}")]
    BadRequest(String),

    /// The email is already used by another user
    #[error("{0}")]
    Conflict(String),

    /// Persistence failed; the message is for logs only
    #[error("{0}")]
    Internal(String),
}

impl UserError {
    /// Classification of this failure
    ///
    /// Never [`ErrorKind::Unknown`].
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Internal(_) => ErrorKind::InternalError,
        }
    }

    /// Underlying message, including internal detail
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(msg) | Self::Conflict(msg) | Self::Internal(msg) => msg,
        }
    }

    pub(crate) fn email_in_use(email: &str) -> Self {
        Self::Conflict(format!("The email {email} has been used by another user."))
    }
}

impl HttpError for UserError {
    fn error_kind(&self) -> ErrorKind {
        self.kind()
    }
}
