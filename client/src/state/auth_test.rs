use super::*;
use portal::Account;

fn store_with(role: Role) -> SessionStore {
    let mut store = SessionStore::new();
    store.register(Account::new("Ada", "a@x.com", "p1", role));
    store
}

// =============================================================
// welcome_line
// =============================================================

#[test]
fn welcome_line_absent_when_signed_out() {
    let store = store_with(Role::Employer);
    assert_eq!(welcome_line(&store), None);
}

#[test]
fn welcome_line_uses_account_name() {
    let mut store = store_with(Role::Employer);
    store.login("a@x.com", "p1").unwrap();
    assert_eq!(welcome_line(&store).as_deref(), Some("Welcome, Ada"));
}

// =============================================================
// shows_cv_tools
// =============================================================

#[test]
fn cv_tools_hidden_when_signed_out() {
    assert!(!shows_cv_tools(&SessionStore::new()));
}

#[test]
fn cv_tools_shown_for_job_seekers_only() {
    let mut seeker = store_with(Role::JobSeeker);
    seeker.login("a@x.com", "p1").unwrap();
    assert!(shows_cv_tools(&seeker));

    let mut employer = store_with(Role::Employer);
    employer.login("a@x.com", "p1").unwrap();
    assert!(!shows_cv_tools(&employer));
}

#[test]
fn cv_tools_hidden_again_after_logout() {
    let mut store = store_with(Role::JobSeeker);
    store.login("a@x.com", "p1").unwrap();
    store.logout();
    assert!(!shows_cv_tools(&store));
}
