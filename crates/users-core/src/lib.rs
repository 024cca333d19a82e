//! Shared error contract between the users service layers
//!
//! The operation layer classifies each failure once with an [`ErrorKind`].
//! Transport adapters only translate that classification into a response.

mod error;

pub use error::{ErrorKind, HttpError};
