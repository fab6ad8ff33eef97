use super::*;

#[test]
fn js_parts_use_zero_based_month() {
    let date = date_from_js_parts(2026, 9, 18).unwrap();
    assert_eq!(date.year(), 2026);
    assert_eq!(date.month(), Month::October);
    assert_eq!(date.day(), 18);
}

#[test]
fn js_parts_january_and_december() {
    assert_eq!(date_from_js_parts(2024, 0, 1).unwrap().month(), Month::January);
    assert_eq!(date_from_js_parts(2024, 11, 31).unwrap().month(), Month::December);
}

#[test]
fn js_parts_reject_out_of_range_values() {
    assert_eq!(date_from_js_parts(2024, 12, 1), None);
    assert_eq!(date_from_js_parts(2023, 1, 29), None);
    assert_eq!(date_from_js_parts(2024, 0, 0), None);
    assert_eq!(date_from_js_parts(2024, 0, 300), None);
}

#[test]
fn today_is_callable_natively() {
    let date = today();
    assert!(date.year() >= 2024);
}
