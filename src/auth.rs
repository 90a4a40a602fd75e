//! Login gate. A literal credential check standing in for a real identity
//! provider; failure is inline and retryable, never fatal.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Check a credential pair. Only `("test", "test")` is accepted.
pub fn login(username: &str, password: &str) -> Result<AuthenticatedUser, AuthError> {
    if username == "test" && password == "test" {
        Ok(AuthenticatedUser {
            username: username.to_string(),
        })
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
