//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and forms while reading/writing shared state
//! from Leptos context providers set up in `app`.

pub mod cv_builder;
pub mod footer;
pub mod header;
pub mod job_list;
pub mod login_form;
pub mod modal;
pub mod registration_form;
