//! Employer dashboard: post jobs and see this visit's postings.
//!
//! SYSTEM CONTEXT
//! ==============
//! The job board lives in component-local signals, so postings disappear when
//! the employer logs out or the page reloads.

#[cfg(test)]
#[path = "employer_dashboard_test.rs"]
mod employer_dashboard_test;

use leptos::prelude::*;
use portal::{JobBoard, JobDraft, JobError, JobId, JobPosting};
use time::Date;

use crate::util::clock;

/// Submit `draft` to `board`, returning the draft the form should show next.
///
/// Success yields a cleared draft; failure hands the typed draft back
/// untouched alongside the error.
pub(crate) fn post_draft(
    board: &mut JobBoard,
    draft: JobDraft,
    today: Date,
) -> (JobDraft, Result<JobId, JobError>) {
    let mut draft = draft;
    let outcome = board.submit(&mut draft, today);
    (draft, outcome)
}

#[component]
pub fn EmployerDashboard() -> impl IntoView {
    let board = RwSignal::new(JobBoard::new());
    let draft = RwSignal::new(JobDraft::default());
    let message = RwSignal::new(None::<String>);

    let on_post = move |_| {
        let today = clock::today();
        let Some((next, outcome)) = board.try_update(|b| post_draft(b, draft.get_untracked(), today))
        else {
            return;
        };
        draft.set(next);
        message.set(outcome.err().map(|e| e.to_string()));
    };

    view! {
        <div class="employer-dashboard">
            <section class="dashboard-section">
                <h2>"Post a New Job"</h2>
                <input
                    class="dashboard-section__input"
                    type="text"
                    placeholder="Job Title"
                    prop:value=move || draft.with(|d| d.title.clone())
                    on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                />
                <textarea
                    class="dashboard-section__input dashboard-section__input--tall"
                    placeholder="Job Description"
                    prop:value=move || draft.with(|d| d.description.clone())
                    on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                ></textarea>
                <button class="btn" on:click=on_post>"Post Job"</button>
                <Show when=move || message.get().is_some()>
                    <p class="form-message form-message--error">
                        {move || message.get().unwrap_or_default()}
                    </p>
                </Show>
            </section>

            <section class="dashboard-section">
                <h2>"Your Posted Jobs"</h2>
                <Show
                    when=move || !board.with(JobBoard::is_empty)
                    fallback=|| view! { <p>"No jobs posted yet."</p> }
                >
                    <ul class="posted-jobs">
                        <For
                            each=move || board.with(|b| b.postings().to_vec())
                            key=|job| job.id
                            children=|job: JobPosting| {
                                view! {
                                    <li class="posted-jobs__item">
                                        <h3>{job.title.clone()}</h3>
                                        <p>{job.description.clone()}</p>
                                        <small>"Posted on: " {job.date_posted_label()}</small>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>
        </div>
    }
}
