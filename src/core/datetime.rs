//! Due-date parsing and display formatting.
//!
//! Accepts a small set of patterns for the `--due` flag:
//! - `today`, `tomorrow`
//! - `in 3 days`, `in 2 weeks`
//! - `25/12/2026`, `25/12` (day/month, current or next year)
//! each with an optional trailing `HH:MM`.
//!
//! Timestamps are stored in UTC and displayed in local time as
//! `dd/mm/yyyy HH:MM`.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static DATE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})(?:/(\d{2,4}))?$")
        .unwrap_or_else(|e| panic!("Invalid date regex: {e}"))
});

static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

/// Parse a due expression into a UTC timestamp.
///
/// The date part is interpreted in local time; a missing time means
/// midnight. Returns `None` if the input matches no known pattern.
#[must_use]
pub fn parse_due(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim().to_lowercase();
    let today = Local::now().date_naive();

    let (date_part, time) = split_time(&input);
    let date = parse_date(date_part.trim(), today)?;
    let time = time.unwrap_or_else(|| NaiveTime::from_hms_opt(0, 0, 0).unwrap_or_default());

    let local = Local.from_local_datetime(&date.and_time(time)).earliest()?;
    Some(local.with_timezone(&Utc))
}

/// Format a timestamp in local time as `dd/mm/yyyy HH:MM`.
#[must_use]
pub fn format_local(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string()
}

fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    match input {
        "today" => return Some(today),
        "tomorrow" => return Some(today + Duration::days(1)),
        _ => {},
    }

    // "in X days/weeks"
    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() == 3 && parts[0] == "in" {
        let amount: i64 = parts[1].parse().ok()?;
        let days = match parts[2].trim_end_matches('s') {
            "day" => amount,
            "week" => amount * 7,
            _ => return None,
        };
        return Some(today + Duration::days(days));
    }

    // Numeric day/month[/year]
    if let Some(caps) = DATE_PATTERN.captures(input) {
        let day: u32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;

        return match caps.get(3) {
            Some(y) => {
                let year: i32 = y.as_str().parse().ok()?;
                let year = if year < 100 { 2000 + year } else { year };
                NaiveDate::from_ymd_opt(year, month, day)
            },
            None => {
                // Current year, or next year if the date already passed.
                let mut year = today.year();
                let date = NaiveDate::from_ymd_opt(year, month, day)?;
                if date < today {
                    year += 1;
                }
                NaiveDate::from_ymd_opt(year, month, day)
            },
        };
    }

    None
}

/// Split a trailing `HH:MM` off the input, if present.
fn split_time(input: &str) -> (&str, Option<NaiveTime>) {
    let Some((date_part, last)) = input.rsplit_once(' ') else {
        return (input, None);
    };

    let Some(caps) = TIME_PATTERN.captures(last) else {
        return (input, None);
    };

    let hour: Option<u32> = caps.get(1).and_then(|m| m.as_str().parse().ok());
    let minute: Option<u32> = caps.get(2).and_then(|m| m.as_str().parse().ok());

    match (hour, minute) {
        (Some(h), Some(m)) => match NaiveTime::from_hms_opt(h, m, 0) {
            Some(time) => (date_part, Some(time)),
            None => (input, None),
        },
        _ => (input, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_date(ts: DateTime<Utc>) -> NaiveDate {
        ts.with_timezone(&Local).date_naive()
    }

    #[test]
    fn test_parse_today() {
        let due = parse_due("today").unwrap();
        assert_eq!(local_date(due), Local::now().date_naive());
    }

    #[test]
    fn test_parse_tomorrow() {
        let due = parse_due("tomorrow").unwrap();
        assert_eq!(local_date(due), Local::now().date_naive() + Duration::days(1));
    }

    #[test]
    fn test_parse_relative() {
        let due = parse_due("in 3 days").unwrap();
        assert_eq!(local_date(due), Local::now().date_naive() + Duration::days(3));

        let due = parse_due("in 2 weeks").unwrap();
        assert_eq!(
            local_date(due),
            Local::now().date_naive() + Duration::days(14)
        );
    }

    #[test]
    fn test_parse_full_date() {
        let due = parse_due("25/12/2030").unwrap();
        assert_eq!(local_date(due), NaiveDate::from_ymd_opt(2030, 12, 25).unwrap());
    }

    #[test]
    fn test_parse_date_with_time() {
        let due = parse_due("25/12/2030 14:30").unwrap();
        let local = due.with_timezone(&Local);
        assert_eq!(local.format("%d/%m/%Y %H:%M").to_string(), "25/12/2030 14:30");
    }

    #[test]
    fn test_parse_time_with_relative_date() {
        let due = parse_due("tomorrow 09:15").unwrap();
        let local = due.with_timezone(&Local);
        assert_eq!(local.format("%H:%M").to_string(), "09:15");
    }

    #[test]
    fn test_parse_two_digit_year() {
        let due = parse_due("01/06/31").unwrap();
        assert_eq!(local_date(due), NaiveDate::from_ymd_opt(2031, 6, 1).unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_due("").is_none());
        assert!(parse_due("someday").is_none());
        assert!(parse_due("32/13/2030").is_none());
        assert!(parse_due("in five days").is_none());
    }

    #[test]
    fn test_format_roundtrip() {
        let due = parse_due("05/01/2031 08:05").unwrap();
        assert_eq!(format_local(due), "05/01/2031 08:05");
    }
}
