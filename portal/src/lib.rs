//! Domain model for the job platform UI.
//!
//! This crate owns everything the browser client renders from: registered
//! accounts and the signed-in session, top-level screen selection, the
//! employer job board, the demo CV, and the featured listing catalogue. It has
//! no UI dependency so every rule here is testable natively.

pub mod account;
pub mod cv;
pub mod error;
pub mod jobs;
pub mod listings;
pub mod screen;
pub mod session;

pub use account::{Account, Role};
pub use error::{AuthError, JobError, RoleParseError};
pub use jobs::{JobBoard, JobDraft, JobId, JobPosting};
pub use screen::Screen;
pub use session::SessionStore;
