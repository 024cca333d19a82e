use std::sync::Arc;

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    error::{Result, UserError},
    password::PasswordPolicy,
    store::{NewUserRecord, StoreError, UserStore},
    types::{NewUser, UserId},
};

/// User operations consumed by transport adapters
#[async_trait]
pub trait Manager: Send + Sync {
    /// Create a user and return its identifier
    async fn create(&self, user: NewUser) -> Result<UserId>;
}

/// Default [`Manager`] backed by a [`UserStore`]
#[derive(Clone)]
pub struct UserManager {
    store: Arc<dyn UserStore>,
    policy: PasswordPolicy,
}

impl UserManager {
    pub fn new(store: Arc<dyn UserStore>, policy: PasswordPolicy) -> Self {
        Self { store, policy }
    }
}

#[async_trait]
impl Manager for UserManager {
    /// Checks run cheapest first: password shape, then email uniqueness,
    /// then the insert itself.
    async fn create(&self, user: NewUser) -> Result<UserId> {
        self.policy.check(user.password.expose_secret())?;

        let taken = self
            .store
            .email_exists(&user.email)
            .await
            .map_err(|e| creation_failed(&user, &e))?;

        if taken {
            return Err(UserError::email_in_use(&user.email));
        }

        let record = NewUserRecord {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        };

        let id = self.store.insert(record).await.map_err(|e| match e {
            StoreError::DuplicateEmail(_) => UserError::email_in_use(&user.email),
            other => creation_failed(&user, &other),
        })?;

        tracing::debug!(user_id = %id, "user created");

        Ok(id)
    }
}

fn creation_failed(user: &NewUser, err: &StoreError) -> UserError {
    UserError::Internal(format!(
        "Error creating user {{Name: {} {}, Email: {}}}, err: {err}",
        user.first_name, user.last_name, user.email
    ))
}
