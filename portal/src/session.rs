//! In-memory account registry and the signed-in session.
//!
//! DESIGN
//! ======
//! One `SessionStore` is owned by the application root and handed to views
//! that need it. Accounts are append-only, so the session is stored as an
//! index into the account list rather than a copy that could drift.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::account::Account;
use crate::error::AuthError;

/// Registered accounts plus the currently authenticated one, if any.
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    accounts: Vec<Account>,
    current: Option<usize>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an account. No validation and no duplicate check; always
    /// succeeds. Does not sign the account in.
    pub fn register(&mut self, account: Account) {
        tracing::info!(role = %account.role, total = self.accounts.len() + 1, "account registered");
        self.accounts.push(account);
    }

    /// Sign in as the first registered account whose email and password both
    /// match exactly. On failure the current session is left as it was.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Account, AuthError> {
        let Some(index) = self.accounts.iter().position(|a| a.matches(email, password)) else {
            tracing::warn!("login rejected: no account matches the supplied credentials");
            return Err(AuthError::InvalidCredentials);
        };
        self.current = Some(index);
        let account = &self.accounts[index];
        tracing::info!(role = %account.role, "login succeeded");
        Ok(account)
    }

    /// Clear the session unconditionally.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            tracing::debug!("session cleared");
        }
    }

    /// The signed-in account.
    #[must_use]
    pub fn current(&self) -> Option<&Account> {
        self.current.and_then(|i| self.accounts.get(i))
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.current.is_some()
    }

    /// All registered accounts in registration order.
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}
