//! Session read helpers for user-aware chrome.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header and dashboards read the shared `RwSignal<SessionStore>` through
//! these helpers so identity-dependent rendering has one definition.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use portal::{Role, SessionStore};

/// `Welcome, <name>` for the signed-in account.
pub fn welcome_line(store: &SessionStore) -> Option<String> {
    store.current().map(|account| format!("Welcome, {}", account.name))
}

/// The CV tools shortcut is only offered to job seekers.
pub fn shows_cv_tools(store: &SessionStore) -> bool {
    store.current().is_some_and(|account| account.role == Role::JobSeeker)
}
