mod memory;

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use crate::types::UserId;

pub use memory::MemoryStore;

/// Persistence failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A user with this email already exists
    #[error("duplicate email: {0}")]
    DuplicateEmail(String),

    /// The backend could not be reached
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected or failed the operation
    #[error("store backend: {0}")]
    Backend(String),
}

/// User fields handed to a store for insertion
#[derive(Debug)]
pub struct NewUserRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
}

/// A persisted user
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
}

/// Persistence seam for user records
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Whether a user already owns this email
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Persist a user and return the identifier minted for it
    ///
    /// Fails with [`StoreError::DuplicateEmail`] if the email was taken in
    /// the meantime.
    async fn insert(&self, user: NewUserRecord) -> Result<UserId, StoreError>;
}

/// Canonical form of an email used as a lookup key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}
