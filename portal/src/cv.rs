//! The demo CV shown in the job seeker's CV builder tab.
//!
//! The record is fixed: there is no editing flow, and the completion figure
//! is a display constant rather than a measure of which fields are filled.

#[cfg(test)]
#[path = "cv_test.rs"]
mod cv_test;

/// Percentage shown on the CV builder progress bar.
pub const COMPLETION_PERCENT: u8 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Education {
    pub institution: &'static str,
    pub degree: &'static str,
    pub years: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkExperience {
    pub position: &'static str,
    pub company: &'static str,
    pub start_date: &'static str,
}

/// A read-only CV record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cv {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub age: &'static str,
    pub state_of_origin: &'static str,
    pub state_of_residence: &'static str,
    pub lga_of_residence: &'static str,
    pub education: &'static [Education],
    pub work_experience: &'static [WorkExperience],
}

static SAMPLE: Cv = Cv {
    name: "Cv Belo",
    email: "cv@myjobmag.com",
    phone: "07066839654",
    age: "1946-06-05 (74 years)",
    state_of_origin: "Bayelsa",
    state_of_residence: "Lagos",
    lga_of_residence: "Eti Osa",
    education: &[Education {
        institution: "Nnamdi Azikiwe University",
        degree: "Bachelor of Science - B.Sc, Computer Engineering",
        years: "2002 - 2017",
    }],
    work_experience: &[WorkExperience {
        position: "Product Developer",
        company: "MyJobMag Limited",
        start_date: "January 2015",
    }],
};

impl Cv {
    /// The hard-coded CV every job seeker sees.
    #[must_use]
    pub fn sample() -> &'static Cv {
        &SAMPLE
    }

    /// `Email: .. | Phone: .. | Age: ..`
    #[must_use]
    pub fn contact_line(&self) -> String {
        format!("Email: {} | Phone: {} | Age: {}", self.email, self.phone, self.age)
    }

    /// `State of Origin: .. | State of Residence: .. | LGA of Residence: ..`
    #[must_use]
    pub fn residence_line(&self) -> String {
        format!(
            "State of Origin: {} | State of Residence: {} | LGA of Residence: {}",
            self.state_of_origin, self.state_of_residence, self.lga_of_residence
        )
    }

    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        COMPLETION_PERCENT
    }
}
