//! Registered accounts and their roles.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RoleParseError;

/// What a signed-in user can do on the platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Browses jobs and maintains a CV.
    #[default]
    JobSeeker,
    /// Posts jobs.
    Employer,
}

impl Role {
    /// Every role, in the order the registration form lists them.
    pub const ALL: [Role; 2] = [Role::JobSeeker, Role::Employer];

    /// Form value used by the registration `<select>`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JobSeeker => "job_seeker",
            Self::Employer => "employer",
        }
    }

    /// Human-readable option label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::JobSeeker => "Job Seeker",
            Self::Employer => "Employer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "job_seeker" => Ok(Self::JobSeeker),
            "employer" => Ok(Self::Employer),
            other => Err(RoleParseError(other.to_owned())),
        }
    }
}

/// A registered user. Credentials are held in plaintext; nothing leaves
/// process memory.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl Account {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self { name: name.into(), email: email.into(), password: password.into(), role }
    }

    /// Exact, case-sensitive credential comparison.
    #[must_use]
    pub fn matches(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }
}
