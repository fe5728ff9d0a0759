//! Portal error types shared by validation, the HTTP client, and the console.

use std::fmt;

/// Categories of portal errors for consistent error handling.
///
/// The first three kinds are produced client-side before submission and
/// block the request entirely. The last two classify submission outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalErrorKind {
    /// A required form field was empty.
    MissingField,
    /// Password and confirmation password differ.
    PasswordMismatch,
    /// Password shorter than the local-mode minimum.
    WeakPassword,
    /// Server answered with a declared failure ({success: false}).
    ServerDeclined,
    /// Network or decode fault; no declared answer was received.
    Transport,
}

impl fmt::Display for PortalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalErrorKind::MissingField => write!(f, "missing_field"),
            PortalErrorKind::PasswordMismatch => write!(f, "password_mismatch"),
            PortalErrorKind::WeakPassword => write!(f, "weak_password"),
            PortalErrorKind::ServerDeclined => write!(f, "server_declined"),
            PortalErrorKind::Transport => write!(f, "transport"),
        }
    }
}

/// Structured portal error with kind and a one-line message.
///
/// For `ServerDeclined` the message is the server-provided text; for
/// `Transport` it is a diagnostic for logs, never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalError {
    /// Error category.
    pub kind: PortalErrorKind,
    /// One-line summary.
    pub message: String,
}

impl PortalError {
    /// Creates a new portal error.
    pub fn new(kind: PortalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a missing-field validation error.
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::MissingField, message)
    }

    /// Creates a password-mismatch validation error.
    pub fn password_mismatch(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::PasswordMismatch, message)
    }

    /// Creates a weak-password validation error.
    pub fn weak_password(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::WeakPassword, message)
    }

    /// Creates a declared-failure error from a server message.
    pub fn declined(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::ServerDeclined, message)
    }

    /// Creates a transport error (network or decode fault).
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(PortalErrorKind::Transport, message)
    }

    /// Returns true for errors raised before any submission happens.
    pub fn is_validation(&self) -> bool {
        matches!(
            self.kind,
            PortalErrorKind::MissingField
                | PortalErrorKind::PasswordMismatch
                | PortalErrorKind::WeakPassword
        )
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PortalError {}

/// Result type for portal operations.
pub type PortalResult<T> = std::result::Result<T, PortalError>;
