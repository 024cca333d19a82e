//! Store doubles for exercising persistence failures

use async_trait::async_trait;
use users_manager::{NewUserRecord, StoreError, UserId, UserStore};

/// Store that finds every email free but cannot write
pub struct UnwritableStore {
    pub reason: String,
}

impl UnwritableStore {
    pub fn new(reason: &str) -> Self {
        Self {
            reason: reason.to_owned(),
        }
    }
}

#[async_trait]
impl UserStore for UnwritableStore {
    async fn email_exists(&self, _email: &str) -> Result<bool, StoreError> {
        Ok(false)
    }

    async fn insert(&self, _user: NewUserRecord) -> Result<UserId, StoreError> {
        Err(StoreError::Backend(self.reason.clone()))
    }
}

/// Error text reported by [`OfflineStore`]
pub const OFFLINE_REASON: &str = "dial tcp 10.0.0.5:3306: connection refused";

/// Store whose backend cannot be reached at all
pub struct OfflineStore;

#[async_trait]
impl UserStore for OfflineStore {
    async fn email_exists(&self, _email: &str) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable(OFFLINE_REASON.to_owned()))
    }

    async fn insert(&self, _user: NewUserRecord) -> Result<UserId, StoreError> {
        Err(StoreError::Unavailable(OFFLINE_REASON.to_owned()))
    }
}
