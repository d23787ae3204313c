// src/relative_time.rs
//! "5 minutes ago" style labels for `last_accessed` timestamps.
//!
//! Thresholds follow date-fns `formatDistanceToNow`, so labels match what
//! the webview shows for the same timestamp.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

const MINUTES_IN_DAY: f64 = 1440.0;
const MINUTES_IN_ALMOST_TWO_DAYS: f64 = 2520.0;
const MINUTES_IN_MONTH: f64 = 43200.0;
const MINUTES_IN_TWO_MONTHS: f64 = 86400.0;

/// Accepts RFC 3339 and the bare `YYYY-MM-DD HH:MM:SS` form SQLite's
/// `CURRENT_TIMESTAMP` writes (always UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

fn plural(count: i64, one: &str, other: &str) -> String {
    if count == 1 {
        one.to_string()
    } else {
        other.replace("{}", &count.to_string())
    }
}

fn is_last_day_of_month(at: DateTime<Utc>) -> bool {
    at.date_naive()
        .succ_opt()
        .map_or(true, |next| next.month() != at.month())
}

// Whole calendar months between two instants, `earlier <= later`. A later
// date on the last day of a short month counts the month as full when the
// earlier day does not exist in it (Jan 31 -> Feb 29 is one month).
fn difference_in_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        let clamped_to_month_end = is_last_day_of_month(later)
            && later.day() < earlier.day()
            && later.time() >= earlier.time();
        if !clamped_to_month_end {
            months -= 1;
        }
    }
    months
}

/// Distance between `then` and `now` in words, without suffix.
pub fn format_distance(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (earlier, later) = if then <= now { (then, now) } else { (now, then) };
    let seconds = (later - earlier).num_seconds() as f64;
    let minutes = (seconds / 60.0).round();

    if minutes < 2.0 {
        return if minutes == 0.0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45.0 {
        return format!("{} minutes", minutes as i64);
    }
    if minutes < 90.0 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes / 60.0).round() as i64;
        return plural(hours, "about 1 hour", "about {} hours");
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes / MINUTES_IN_DAY).round() as i64;
        return plural(days, "1 day", "{} days");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes / MINUTES_IN_MONTH).round() as i64;
        return plural(months, "about 1 month", "about {} months");
    }

    let months = difference_in_months(earlier, later);
    if months < 12 {
        let nearest = (minutes / MINUTES_IN_MONTH).round() as i64;
        return plural(nearest, "1 month", "{} months");
    }

    let into_year = months % 12;
    let years = months / 12;
    if into_year < 3 {
        plural(years, "about 1 year", "about {} years")
    } else if into_year < 9 {
        plural(years, "over 1 year", "over {} years")
    } else {
        plural(years + 1, "almost 1 year", "almost {} years")
    }
}

/// Distance with direction: "3 days ago" or "in about 2 hours".
pub fn format_distance_to_now(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let distance = format_distance(then, now);
    if then > now {
        format!("in {}", distance)
    } else {
        format!("{} ago", distance)
    }
}

/// Label for a stored timestamp; unparseable input is shown as-is.
pub fn label_for_timestamp(raw: &str, now: DateTime<Utc>) -> String {
    match parse_timestamp(raw) {
        Some(then) => format_distance_to_now(then, now),
        None => raw.to_string(),
    }
}
