//! Top-level screen selection.

#[cfg(test)]
#[path = "screen_test.rs"]
mod screen_test;

use crate::account::{Account, Role};

/// Which page fills the main area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// Signed out.
    #[default]
    Landing,
    EmployerDashboard,
    JobSeekerDashboard,
}

impl Screen {
    /// Derive the screen from the signed-in account.
    #[must_use]
    pub fn for_session(account: Option<&Account>) -> Self {
        match account.map(|a| a.role) {
            None => Self::Landing,
            Some(Role::Employer) => Self::EmployerDashboard,
            Some(Role::JobSeeker) => Self::JobSeekerDashboard,
        }
    }
}
