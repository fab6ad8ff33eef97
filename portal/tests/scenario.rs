//! End-to-end walk through an employer's first session.

use portal::{Account, JobBoard, JobDraft, JobError, Role, Screen, SessionStore};
use time::{Date, Month};

#[test]
fn employer_registers_logs_in_and_posts() {
    let today = Date::from_calendar_date(2026, Month::October, 18).unwrap();
    let mut store = SessionStore::new();

    store.register(Account::new("Ada", "a@x.com", "p1", Role::Employer));
    let account = store.login("a@x.com", "p1").unwrap();
    assert_eq!(account.role, Role::Employer);
    assert_eq!(Screen::for_session(store.current()), Screen::EmployerDashboard);

    let mut board = JobBoard::new();
    let mut draft = JobDraft::new("Title A", "Desc A");
    board.submit(&mut draft, today).unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board.postings()[0].title, "Title A");
    assert_eq!(board.postings()[0].description, "Desc A");
    assert_eq!(draft, JobDraft::default());

    assert_eq!(board.submit(&mut draft, today), Err(JobError::BlankFields));
    assert_eq!(board.len(), 1);

    store.logout();
    assert_eq!(Screen::for_session(store.current()), Screen::Landing);
}

#[test]
fn job_seeker_lands_on_seeker_dashboard() {
    let mut store = SessionStore::new();
    store.register(Account::new("Grace", "g@x.com", "pw", Role::JobSeeker));
    assert!(store.login("g@x.com", "wrong").is_err());
    assert_eq!(Screen::for_session(store.current()), Screen::Landing);

    store.login("g@x.com", "pw").unwrap();
    assert_eq!(Screen::for_session(store.current()), Screen::JobSeekerDashboard);
}
