//! Local UI chrome state (modals and dashboard tabs).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the `portal` domain model so
//! modal and tab handling can change without touching session rules.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which auth modals are showing. Nothing stops both being open at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub login_open: bool,
    pub registration_open: bool,
}

impl UiState {
    pub fn open_login(&mut self) {
        self.login_open = true;
    }

    pub fn close_login(&mut self) {
        self.login_open = false;
    }

    pub fn open_registration(&mut self) {
        self.registration_open = true;
    }

    pub fn close_registration(&mut self) {
        self.registration_open = false;
    }

    /// The "Register" link inside the login modal.
    pub fn switch_to_registration(&mut self) {
        self.login_open = false;
        self.registration_open = true;
    }
}

/// Tabs on the job seeker dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeekerTab {
    #[default]
    Search,
    Cv,
}

impl SeekerTab {
    pub const ALL: [SeekerTab; 2] = [SeekerTab::Search, SeekerTab::Cv];

    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Job Search",
            Self::Cv => "CV Builder",
        }
    }
}
