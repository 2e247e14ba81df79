//! Time range resolution for task queries.
//!
//! Converts the range phrases accepted by `list` and `report` into concrete
//! inclusive `[from, until]` bounds. Nothing in this module reads the wall
//! clock: every resolution that depends on the current instant takes `now`
//! as a parameter so callers (and tests) control it.
//!
//! ## Units
//!
//! | Unit              | Length                         |
//! |-------------------|--------------------------------|
//! | `day` / `days`    | 24 hours                       |
//! | `week` / `weeks`  | 7 days                         |
//! | `year` / `years`  | exactly 365 days (imprecise)   |
//! | `month` / `months`| refused, use weeks instead     |
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use qtask::libs::range::{resolve_relative, TimeRange};
//!
//! let now = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(15, 0, 0).unwrap();
//! let range = TimeRange::last(resolve_relative(2, "weeks").unwrap(), now);
//! assert_eq!(range.from, "2024-02-25 15:00:00");
//! assert_eq!(range.until, "2024-03-10 15:00:00");
//! ```

use super::error::{LedgerError, LedgerResult};
use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};

/// Timestamp layout used for every bound and every stored timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Earliest bound SQLite's `datetime()` can read; older bounds are clamped to it.
pub const EARLIEST_BOUND: &str = "0000-01-01 00:00:00";

const MONTH_REFUSAL: &str = "month precision is not supported, please use weeks instead";
const RANGE_UNITS: &str = "expected day(s), week(s) or year(s)";

/// An inclusive range of logical task times.
///
/// Bounds are kept as text because absolute ranges are handed to the store
/// verbatim; the store compares them through SQLite's `datetime()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeRange {
    pub from: String,
    pub until: String,
}

impl TimeRange {
    /// `[now - duration, now]`, with the lower bound clamped to [`EARLIEST_BOUND`].
    pub fn last(duration: Duration, now: NaiveDateTime) -> Self {
        Self {
            from: now
                .checked_sub_signed(duration)
                .filter(|from| from.year() >= 0)
                .map(stamp)
                .unwrap_or_else(|| EARLIEST_BOUND.to_string()),
            until: stamp(now),
        }
    }

    /// From local midnight of the current day up to `now`.
    pub fn today(now: NaiveDateTime) -> Self {
        Self {
            from: stamp(now.date().and_time(NaiveTime::MIN)),
            until: stamp(now),
        }
    }

    /// The whole previous calendar day, `00:00:00` through `23:59:59`.
    pub fn yesterday(now: NaiveDateTime) -> Self {
        match now.date().pred_opt() {
            Some(day) => Self {
                from: format!("{} 00:00:00", day.format("%Y-%m-%d")),
                until: format!("{} 23:59:59", day.format("%Y-%m-%d")),
            },
            // no previous day; bounds before year zero match nothing
            None => Self {
                from: stamp(now),
                until: stamp(now),
            },
        }
    }
}

/// Formats an instant the way the ledger stores timestamps.
pub fn stamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Resolves a `<quantity> <unit>` phrase into a duration.
///
/// A year is treated as exactly 365 days. Months are refused and callers are
/// pointed at weeks instead.
pub fn resolve_relative(quantity: i64, unit: &str) -> LedgerResult<Duration> {
    let days = match unit {
        "day" | "days" => Some(quantity),
        "week" | "weeks" => quantity.checked_mul(7),
        "year" | "years" => quantity.checked_mul(365),
        "month" | "months" => return Err(LedgerError::unknown_unit(unit, MONTH_REFUSAL)),
        _ => return Err(LedgerError::unknown_unit(unit, RANGE_UNITS)),
    };

    days.and_then(Duration::try_days)
        .ok_or_else(|| LedgerError::InvalidNumber(quantity.to_string()))
}

/// Builds a range from two caller supplied literals without inspecting them.
pub fn resolve_absolute(from: &str, until: &str) -> TimeRange {
    TimeRange {
        from: from.to_string(),
        until: until.to_string(),
    }
}
