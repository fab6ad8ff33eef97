use super::*;
use time::Month;

fn day(d: u8) -> Date {
    Date::from_calendar_date(2026, Month::October, d).unwrap()
}

// =============================================================
// JobDraft
// =============================================================

#[test]
fn draft_default_is_incomplete() {
    assert!(!JobDraft::default().is_complete());
}

#[test]
fn draft_whitespace_only_is_incomplete() {
    assert!(!JobDraft::new("   ", "Desc").is_complete());
    assert!(!JobDraft::new("Title", "\n\t ").is_complete());
}

#[test]
fn draft_with_both_fields_is_complete() {
    assert!(JobDraft::new(" Title ", "Desc").is_complete());
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_prepends_one_posting_and_clears_draft() {
    let mut board = JobBoard::new();
    let mut draft = JobDraft::new("Title A", "Desc A");
    let id = board.submit(&mut draft, day(18)).unwrap();

    assert_eq!(board.len(), 1);
    let posting = &board.postings()[0];
    assert_eq!(posting.id, id);
    assert_eq!(posting.title, "Title A");
    assert_eq!(posting.description, "Desc A");
    assert_eq!(posting.date_posted, day(18));
    assert_eq!(draft, JobDraft::default());
}

#[test]
fn newest_posting_comes_first() {
    let mut board = JobBoard::new();
    board.post("First", "one", day(1)).unwrap();
    board.post("Second", "two", day(2)).unwrap();
    board.post("Third", "three", day(3)).unwrap();

    let titles: Vec<&str> = board.postings().iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);
}

#[test]
fn blank_title_is_rejected_and_board_unchanged() {
    let mut board = JobBoard::new();
    board.post("Existing", "job", day(1)).unwrap();
    let before = board.postings().to_vec();

    let mut draft = JobDraft::new("  ", "Desc");
    assert_eq!(board.submit(&mut draft, day(2)), Err(JobError::BlankFields));
    assert_eq!(board.postings(), before.as_slice());
    assert_eq!(draft, JobDraft::new("  ", "Desc"));
}

#[test]
fn blank_description_is_rejected() {
    let mut board = JobBoard::new();
    assert_eq!(board.post("Title", "", day(1)), Err(JobError::BlankFields));
    assert!(board.is_empty());
}

#[test]
fn fields_are_stored_as_typed() {
    let mut board = JobBoard::new();
    board.post("  Padded  ", " text ", day(1)).unwrap();
    assert_eq!(board.postings()[0].title, "  Padded  ");
    assert_eq!(board.postings()[0].description, " text ");
}

#[test]
fn ids_are_unique_for_same_day_postings() {
    let mut board = JobBoard::new();
    let a = board.post("A", "a", day(5)).unwrap();
    let b = board.post("B", "b", day(5)).unwrap();
    assert_ne!(a, b);
    assert!(b > a);
}

#[test]
fn rejected_post_does_not_consume_an_id() {
    let mut board = JobBoard::new();
    let _ = board.post("", "", day(1));
    let id = board.post("A", "a", day(1)).unwrap();
    assert_eq!(id, JobId(1));
}

#[test]
fn blank_fields_message_is_fixed() {
    assert_eq!(
        JobError::BlankFields.to_string(),
        "Please fill in both job title and description."
    );
}

// =============================================================
// date formatting
// =============================================================

#[test]
fn date_label_is_unpadded_month_day_year() {
    let date = Date::from_calendar_date(2024, Month::March, 7).unwrap();
    assert_eq!(format_date(date), "3/7/2024");
}

#[test]
fn posting_exposes_date_label() {
    let mut board = JobBoard::new();
    board.post("A", "a", day(18)).unwrap();
    assert_eq!(board.postings()[0].date_posted_label(), "10/18/2026");
}
