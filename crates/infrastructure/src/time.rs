use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use domain::TimeInput;

/// Precision code for a year (coarser codes are decades, centuries...)
pub const PRECISION_YEAR: u8 = 9;
/// Precision code for a month
pub const PRECISION_MONTH: u8 = 10;
/// Precision code for a day
pub const PRECISION_DAY: u8 = 11;

static WIKIBASE_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-]?)(\d+)-(\d{2})-(\d{2})T(\d{2}):(\d{2}):(\d{2})Z$")
        .expect("Invalid time regex")
});

/// Calendar fields of a Wikibase time string such as `+1939-11-08T00:00:00Z`.
///
/// Month and day are `0` when the value is less precise than a month or day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFields {
    pub negative: bool,
    /// Year digits as written, without sign
    pub year_digits: String,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CalendarFields {
    /// Signed year, `None` if it does not fit in an `i64`.
    pub fn year(&self) -> Option<i64> {
        let year: i64 = self.year_digits.parse().ok()?;
        Some(if self.negative { -year } else { year })
    }

    /// Year without leading zeros, signed only when negative.
    pub fn display_year(&self) -> String {
        let trimmed = self.year_digits.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        if self.negative && digits != "0" {
            format!("-{digits}")
        } else {
            digits.to_string()
        }
    }

    /// Point in time with zeroed month/day moved to the first.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let year = i32::try_from(self.year()?).ok()?;
        NaiveDate::from_ymd_opt(year, self.month.max(1), self.day.max(1))?
            .and_hms_opt(self.hour, self.minute, self.second)
            .map(|naive| naive.and_utc())
    }
}

/// Split a Wikibase time string into calendar fields.
pub fn parse_wikibase_time(time: &str) -> Option<CalendarFields> {
    let captures = WIKIBASE_TIME.captures(time)?;
    let field = |index: usize| -> Option<u32> { captures.get(index)?.as_str().parse().ok() };

    Some(CalendarFields {
        negative: &captures[1] == "-",
        year_digits: captures[2].to_string(),
        month: field(3)?,
        day: field(4)?,
        hour: field(5)?,
        minute: field(6)?,
        second: field(7)?,
    })
}

fn to_datetime(input: &TimeInput<'_>) -> Option<DateTime<Utc>> {
    let datetime = parse_wikibase_time(input.time()).and_then(|fields| fields.to_datetime());
    if datetime.is_none() {
        debug!(time = %input.time(), "Time cannot be represented as a calendar date");
    }
    datetime
}

/// ISO-8601 rendering with millisecond precision, expanded `±YYYYYY` years
/// outside 0..=9999. Unrepresentable times come back as the raw string.
pub fn to_iso_string(input: TimeInput<'_>) -> Value {
    match to_datetime(&input) {
        Some(datetime) => Value::String(format_iso(&datetime)),
        None => Value::String(input.time().to_string()),
    }
}

fn format_iso(datetime: &DateTime<Utc>) -> String {
    let year = datetime.year();
    let year_part = if (0..=9999).contains(&year) {
        format!("{year:04}")
    } else if year < 0 {
        format!("-{:06}", -year)
    } else {
        format!("+{year:06}")
    };
    format!("{year_part}{}", datetime.format("-%m-%dT%H:%M:%S%.3fZ"))
}

/// Milliseconds since the Unix epoch, `null` for unrepresentable times.
pub fn to_epoch_millis(input: TimeInput<'_>) -> Value {
    match to_datetime(&input) {
        Some(datetime) => Value::from(datetime.timestamp_millis()),
        None => Value::Null,
    }
}

/// `Y`, `Y-MM` or `Y-MM-DD` depending on precision; bare strings are
/// rendered at day precision.
pub fn to_simple_day(input: TimeInput<'_>) -> Value {
    let Some(fields) = parse_wikibase_time(input.time()) else {
        return Value::String(input.time().to_string());
    };

    let year = fields.display_year();
    let precision = input.precision().unwrap_or(PRECISION_DAY);
    let rendered = if precision <= PRECISION_YEAR {
        year
    } else if precision == PRECISION_MONTH {
        format!("{year}-{:02}", fields.month)
    } else {
        format!("{year}-{:02}-{:02}", fields.month, fields.day)
    };
    Value::String(rendered)
}

/// The embedded time string, untouched.
pub fn to_raw_time(input: TimeInput<'_>) -> Value {
    Value::String(input.time().to_string())
}
