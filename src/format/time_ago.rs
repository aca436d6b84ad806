//! Humanized relative publish times.
//!
//! Thresholds follow the common "formatDistance" convention used on the
//! web, so `Apr 19, 2019` seen in mid 2024 reads `about 5 years ago`.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::error::TimestampError;

const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Parse a publish timestamp.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD` and `Mon D, YYYY`.
/// Zone-less values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    ["%Y-%m-%d", "%b %d, %Y", "%B %d, %Y"]
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| TimestampError::new(raw))
}

/// Distance between `date` and `now` in words, with an `ago`/`in` suffix.
pub fn format_distance(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let (earlier, later, future) = if date > now {
        (now, date, true)
    } else {
        (date, now, false)
    };

    let seconds = (later - earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    let words = if minutes < 2 {
        if minutes == 0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        }
    } else if minutes < 45 {
        format!("{} minutes", minutes)
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("about {} hours", round_div(minutes, 60))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        format!("{} days", round_div(minutes, MINUTES_IN_DAY))
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        plural("about ", round_div(minutes, MINUTES_IN_MONTH), "month")
    } else {
        let months = calendar_months_between(earlier, later);
        if months < 12 {
            plural("", round_div(minutes, MINUTES_IN_MONTH), "month")
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => plural("about ", years, "year"),
                3..=8 => plural("over ", years, "year"),
                _ => plural("almost ", years + 1, "year"),
            }
        }
    };

    if future {
        format!("in {}", words)
    } else {
        format!("{} ago", words)
    }
}

/// Relative time for a raw publish timestamp.
pub fn time_ago(raw: &str, now: DateTime<Utc>) -> Result<String, TimestampError> {
    parse_timestamp(raw).map(|date| format_distance(date, now))
}

/// Relative time, or the raw string when it cannot be parsed.
pub fn published_label(raw: &str, now: DateTime<Utc>) -> String {
    time_ago(raw, now).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "showing raw publish time");
        raw.to_string()
    })
}

fn plural(prefix: &str, n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{}1 {}", prefix, unit)
    } else {
        format!("{}{} {}s", prefix, n, unit)
    }
}

/// Integer division rounding half up; both operands non-negative.
fn round_div(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}

/// Whole calendar months from `earlier` to `later`.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12 + i64::from(later.month())
        - i64::from(earlier.month());
    if months > 0 && (later.day(), later.time()) < (earlier.day(), earlier.time()) {
        months -= 1;
    }
    months
}
