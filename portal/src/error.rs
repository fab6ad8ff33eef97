//! Error types surfaced to the UI layer.
//!
//! Messages are shown to the user verbatim, so the `#[error]` strings are the
//! exact copy rendered next to the offending form.

/// Error returned by [`SessionStore::login`](crate::SessionStore::login).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No registered account matches both the email and the password.
    #[error("Invalid credentials")]
    InvalidCredentials,
}

/// Error returned by [`JobBoard::submit`](crate::JobBoard::submit).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum JobError {
    /// Title or description is empty after trimming.
    #[error("Please fill in both job title and description.")]
    BlankFields,
}

/// A role string that does not name a known [`Role`](crate::Role).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct RoleParseError(pub String);
