//! Employer job board: the transient list of postings and its draft form.
//!
//! DESIGN
//! ======
//! Postings are kept newest-first. Ids come from a counter owned by the board,
//! so two postings created in the same instant still get distinct ids.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use std::fmt;

use time::Date;

use crate::error::JobError;

/// Identifier of a posting, unique within its board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A job created by an employer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub description: String,
    pub date_posted: Date,
}

impl JobPosting {
    /// Posting date as `M/D/YYYY`, without zero padding.
    #[must_use]
    pub fn date_posted_label(&self) -> String {
        format_date(self.date_posted)
    }
}

/// Format a date as `M/D/YYYY`.
#[must_use]
pub fn format_date(date: Date) -> String {
    format!("{}/{}/{}", u8::from(date.month()), date.day(), date.year())
}

/// Contents of the "Post a New Job" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
}

impl JobDraft {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }

    /// Both fields contain something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Postings created during the current dashboard visit, newest first.
#[derive(Clone, Debug, Default)]
pub struct JobBoard {
    postings: Vec<JobPosting>,
    next_id: u64,
}

impl JobBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish `draft` as a new posting dated `today`.
    ///
    /// On success the posting is placed ahead of every earlier one and the
    /// draft is reset. A draft with a blank title or description is rejected
    /// and neither the board nor the draft changes. Fields are stored as
    /// typed, surrounding whitespace included.
    pub fn submit(&mut self, draft: &mut JobDraft, today: Date) -> Result<JobId, JobError> {
        if !draft.is_complete() {
            tracing::warn!("job post rejected: blank title or description");
            return Err(JobError::BlankFields);
        }

        self.next_id += 1;
        let id = JobId(self.next_id);
        let JobDraft { title, description } = std::mem::take(draft);
        tracing::info!(%id, %title, date = %today, "job posted");
        self.postings.insert(0, JobPosting { id, title, description, date_posted: today });
        Ok(id)
    }

    /// Convenience wrapper over [`JobBoard::submit`] for callers without a
    /// draft to clear.
    pub fn post(&mut self, title: &str, description: &str, today: Date) -> Result<JobId, JobError> {
        self.submit(&mut JobDraft::new(title, description), today)
    }

    #[must_use]
    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
