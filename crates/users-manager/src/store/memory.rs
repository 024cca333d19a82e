use std::sync::Arc;

use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use uuid::Uuid;

use super::{NewUserRecord, StoreError, UserRecord, UserStore, normalize_email};
use crate::types::UserId;

/// In-memory user store keyed by normalized email
#[derive(Clone, Default)]
pub struct MemoryStore {
    users: Arc<DashMap<String, UserRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Look up a user by email
    pub fn get_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users.get(&normalize_email(email)).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.users.contains_key(&normalize_email(email)))
    }

    async fn insert(&self, user: NewUserRecord) -> Result<UserId, StoreError> {
        match self.users.entry(normalize_email(&user.email)) {
            Entry::Occupied(_) => Err(StoreError::DuplicateEmail(user.email)),
            Entry::Vacant(slot) => {
                let id = UserId::new(Uuid::new_v4().to_string());

                slot.insert(UserRecord {
                    id: id.clone(),
                    first_name: user.first_name,
                    last_name: user.last_name,
                    email: user.email,
                    password: user.password,
                });

                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use secrecy::{ExposeSecret, SecretString};

    use super::*;

    fn record(email: &str) -> NewUserRecord {
        NewUserRecord {
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: email.into(),
            password: SecretString::from("cobol"),
        }
    }

    #[tokio::test]
    async fn insert_mints_unique_ids() {
        let store = MemoryStore::new();

        let a = store.insert(record("a@x.com")).await.unwrap();
        let b = store.insert(record("b@x.com")).await.unwrap();

        assert!(!a.as_str().is_empty());
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryStore::new();
        store.insert(record("used@x.com")).await.unwrap();

        let err = store.insert(record("USED@x.com ")).await.unwrap_err();

        assert!(matches!(err, StoreError::DuplicateEmail(_)));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn email_exists_ignores_case() {
        let store = MemoryStore::new();
        assert!(!store.email_exists("used@x.com").await.unwrap());

        store.insert(record("used@x.com")).await.unwrap();

        assert!(store.email_exists("Used@X.com").await.unwrap());
    }

    #[tokio::test]
    async fn get_by_email_returns_record() {
        let store = MemoryStore::new();
        let id = store.insert(record("grace@x.com")).await.unwrap();

        let stored = store.get_by_email("grace@x.com").unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.last_name, "Hopper");
        assert_eq!(stored.password.expose_secret(), "cobol");
        assert!(store.get_by_email("nobody@x.com").is_none());
    }
}
