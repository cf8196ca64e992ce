//! # Temporal Helpers — Lenient Birth Dates
//!
//! Birth dates arrive as free text from registration forms and watchlist
//! feeds. This module parses them leniently and computes ages, returning
//! `None` instead of failing so the scoring path can treat a bad date as
//! "no contribution".
//!
//! Accepted formats, tried in order:
//!
//! | Format       | Example      |
//! |--------------|--------------|
//! | `YYYY-MM-DD` | `1980-05-15` |
//! | `DD/MM/YYYY` | `15/05/1980` |
//! | `DD-MM-YYYY` | `15-05-1980` |
//! | `YYYY/MM/DD` | `1980/05/15` |

use chrono::{Datelike, NaiveDate, Utc};

const BIRTH_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%Y/%m/%d"];

/// Parse a birth date in any accepted format. Blank or unparseable input
/// yields `None`.
pub fn parse_birth_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    BIRTH_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Whole years between `birth` and `as_of`, decremented by one when the
/// birthday has not yet occurred in the `as_of` year.
///
/// Returns `None` for a birth date after `as_of`.
pub fn age_on(birth: NaiveDate, as_of: NaiveDate) -> Option<u32> {
    if birth > as_of {
        return None;
    }
    let mut years = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    u32::try_from(years).ok()
}

/// Current UTC calendar date.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Whether two textual birth dates denote the same day.
///
/// Dates are compared as calendar dates when both parse, so `1980-05-15`
/// equals `15/05/1980`. Otherwise the trimmed texts must be identical and
/// non-empty.
pub fn birth_dates_match(a: &str, b: &str) -> bool {
    match (parse_birth_date(a), parse_birth_date(b)) {
        (Some(x), Some(y)) => x == y,
        _ => {
            let (a, b) = (a.trim(), b.trim());
            !a.is_empty() && a == b
        }
    }
}
