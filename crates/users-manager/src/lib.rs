#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

//! User-creation business logic
//!
//! [`UserManager`] validates a [`NewUser`], checks email uniqueness against a
//! [`UserStore`], and persists the user. Every failure leaves this crate as a
//! [`UserError`] that already carries its classification.

mod error;
mod manager;
mod password;
pub mod store;
mod types;

pub use error::{Result, UserError};
pub use manager::{Manager, UserManager};
pub use password::PasswordPolicy;
pub use store::{MemoryStore, NewUserRecord, StoreError, UserRecord, UserStore};
pub use types::{NewUser, UserId};
