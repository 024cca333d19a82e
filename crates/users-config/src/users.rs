use serde::Deserialize;

/// Symbols accepted in passwords besides ASCII letters and digits
pub const DEFAULT_PASSWORD_SYMBOLS: &str = "!@#%^&*()-_=+.,?";

/// User-creation rules
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersConfig {
    /// Extra characters allowed in a password
    ///
    /// ASCII letters and digits are always allowed.
    #[serde(default = "default_password_symbols")]
    pub password_symbols: String,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            password_symbols: default_password_symbols(),
        }
    }
}

fn default_password_symbols() -> String {
    DEFAULT_PASSWORD_SYMBOLS.to_string()
}
