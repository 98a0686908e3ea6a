//! Login credentials type.

use std::fmt;

/// Login credentials for the FnForge backend.
///
/// # Security
///
/// The password is never exposed in Debug output to prevent accidental
/// logging.
///
/// # Example
///
/// ```
/// use fnforge_core::Credentials;
///
/// let creds = Credentials::new("alice@example.com", "app-password-here");
/// assert_eq!(creds.email(), "alice@example.com");
/// ```
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the account email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    ///
    /// # Security
    ///
    /// Use this only when constructing authentication requests.
    /// Never log or display this value.
    pub fn password(&self) -> &str {
        &self.password
    }
}

// Intentionally hide password in Debug output
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hides_password_in_debug() {
        let creds = Credentials::new("alice@example.com", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("alice@example.com"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
