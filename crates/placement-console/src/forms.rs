//! Form payloads and validation.
//!
//! Validation mirrors the portal forms: first failure wins, and a failed
//! validation never reaches storage or the network. Each form owns its
//! user-facing failure text.

use placement_core::error::{PortalError, PortalResult};

/// Student sign-in form values, taken as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> PortalResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(PortalError::missing_field(
                "Please fill in both email and password for Student Sign In.",
            ));
        }
        Ok(())
    }
}

/// Student create-account form values. Name and email are trimmed on
/// construction; both passwords are taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAccountForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl CreateAccountForm {
    pub fn new(name: &str, email: &str, password: String, confirm_password: String) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password,
            confirm_password,
        }
    }

    /// Checks emptiness, then the password match, then (when asked) the
    /// minimum password length. The length policy belongs to the server in
    /// remote mode, so only the local variant passes `enforce_length`.
    pub fn validate(&self, enforce_length: bool) -> PortalResult<()> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(PortalError::missing_field(
                "Please fill in all fields to create a new account.",
            ));
        }
        if self.password != self.confirm_password {
            return Err(PortalError::password_mismatch(
                "Passwords do not match. Please re-enter.",
            ));
        }
        if enforce_length && self.password.chars().count() < 6 {
            return Err(PortalError::weak_password(
                "Password must be at least 6 characters long.",
            ));
        }
        Ok(())
    }
}

/// Recruiter login form values, taken as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecruiterLoginForm {
    pub email: String,
    pub password: String,
}

impl RecruiterLoginForm {
    pub fn validate(&self) -> PortalResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(PortalError::missing_field(
                "Please fill in both email and password for Recruiter Login.",
            ));
        }
        Ok(())
    }
}
