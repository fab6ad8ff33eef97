//! Client-side UI state.
//!
//! DESIGN
//! ======
//! Domain state (accounts, session, job board) lives in `portal`. This module
//! only holds presentation concerns such as which modal is open and which
//! dashboard tab is selected, plus small read helpers over the session.

pub mod auth;
pub mod ui;
