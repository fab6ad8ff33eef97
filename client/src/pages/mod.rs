//! Page modules for the top-level screens.
//!
//! ARCHITECTURE
//! ============
//! `app` picks exactly one page from `portal::Screen`. Each page owns its
//! screen-scoped state and delegates rendering details to `components`.

pub mod employer_dashboard;
pub mod home;
pub mod seeker_dashboard;
