use users_config::UsersConfig;

use crate::error::UserError;

/// Character rules for passwords
///
/// ASCII letters and digits are always accepted, plus a configured list
/// of symbols.
#[derive(Debug, Clone)]
pub struct PasswordPolicy {
    symbols: Vec<char>,
}

impl PasswordPolicy {
    pub fn new(symbols: &str) -> Self {
        Self {
            symbols: symbols.chars().collect(),
        }
    }

    pub fn from_config(config: &UsersConfig) -> Self {
        Self::new(&config.password_symbols)
    }

    /// Whether a single character may appear in a password
    pub fn accepts(&self, c: char) -> bool {
        c.is_ascii_alphanumeric() || self.symbols.contains(&c)
    }

    /// Check a password's shape
    pub fn check(&self, password: &str) -> Result<(), UserError> {
        if password.is_empty() {
            return Err(UserError::BadRequest("The password must not be empty.".to_owned()));
        }

        if !password.chars().all(|c| self.accepts(c)) {
            return Err(UserError::BadRequest(
                "The password contains some invalid characters.".to_owned(),
            ));
        }

        Ok(())
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self::from_config(&UsersConfig::default())
    }
}
