//! Promotion period parsing.
//!
//! The export carries one string column that is either a single end date
//! in `DD-MMM-YY[YY]` form with a Portuguese month abbreviation, or a
//! `start/end` pair of ISO 8601 timestamps. Anything unparseable maps to
//! `None`; this parser never fails a row.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// `31-MAR-24` / `31-MAR-2024`. Anchored at the start only: the source
/// system occasionally appends trailing annotations, which are ignored.
static PTBR_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})-([A-Za-z]{3})-(\d{2,4})").expect("invalid pt-BR date regex")
});

/// Parses the promotion period column into `(start, end)` ISO timestamps.
///
/// - Missing column: both `None` (no promotion).
/// - Contains `/`: the first two segments parse independently as ISO
///   timestamps; a failed side is `None` while the other may survive.
/// - Otherwise: a single Portuguese-format end date; start stays `None`
///   and the end becomes midnight of the parsed day. Unrecognized months
///   or malformed patterns yield `(None, None)`.
pub fn parse_promo_period(raw: Option<&str>) -> (Option<String>, Option<String>) {
    let Some(raw) = raw else {
        return (None, None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return (None, None);
    }

    if trimmed.contains('/') {
        let segments: Vec<&str> = trimmed.split('/').collect();
        let start = segments.first().copied().and_then(parse_iso_timestamp);
        let end = segments.get(1).copied().and_then(parse_iso_timestamp);
        (start, end)
    } else {
        (None, parse_end_date(trimmed))
    }
}

/// Accepts `YYYY-MM-DD` and `YYYY-MM-DDTHH:MM:SS[.fff]`, reformatting to
/// seconds precision without an offset.
fn parse_iso_timestamp(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let formats = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
    let datetime = formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })?;
    Some(format_iso(datetime))
}

/// `DD-MMM-YY[YY]` with a Portuguese month abbreviation, to midnight of
/// that day. Two-digit years are read as `20YY`. Calendar-impossible days
/// (`31-FEV-24`) count as parse failure.
fn parse_end_date(value: &str) -> Option<String> {
    let caps = PTBR_DATE.captures(value)?;
    let day: u32 = caps[1].parse().ok()?;
    let month = month_number(&caps[2].to_uppercase())?;
    let year_digits = &caps[3];
    let year: i32 = if year_digits.len() == 2 {
        2000 + year_digits.parse::<i32>().ok()?
    } else {
        year_digits.parse().ok()?
    };
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    Some(format_iso(date.and_time(NaiveTime::MIN)))
}

fn month_number(abbr: &str) -> Option<u32> {
    match abbr {
        "JAN" => Some(1),
        "FEV" => Some(2),
        "MAR" => Some(3),
        "ABR" => Some(4),
        "MAI" => Some(5),
        "JUN" => Some(6),
        "JUL" => Some(7),
        "AGO" => Some(8),
        "SET" => Some(9),
        "OUT" => Some(10),
        "NOV" => Some(11),
        "DEZ" => Some(12),
        _ => None,
    }
}

fn format_iso(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S").to_string()
}
