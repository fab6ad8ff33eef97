//! Local calendar date for stamping job postings.
//!
//! In the browser the date comes from the JS `Date` object so it matches the
//! user's timezone. Native builds (tests) fall back to the UTC date.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Date, Month, OffsetDateTime};

/// Today's date in the user's local timezone.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        date_from_js_parts(now.get_full_year(), now.get_month(), now.get_date())
            .unwrap_or(OffsetDateTime::UNIX_EPOCH.date())
    }
    #[cfg(not(feature = "csr"))]
    {
        OffsetDateTime::now_utc().date()
    }
}

/// Build a date from JS `Date` getters, where the month is zero-based.
pub fn date_from_js_parts(year: u32, month_index: u32, day: u32) -> Option<Date> {
    let year = i32::try_from(year).ok()?;
    let month = Month::try_from(u8::try_from(month_index.checked_add(1)?).ok()?).ok()?;
    let day = u8::try_from(day).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}
