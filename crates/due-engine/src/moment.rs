//! Wall-clock arithmetic on the working moment.
//!
//! Weekday and clock-time tokens edit the *local* date and time in the
//! configured timezone; duration tokens add absolute time. Every helper
//! returns `None` instead of panicking when the result cannot be represented,
//! and the caller keeps the previous moment in that case.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDateTime, TimeZone, Timelike, Weekday};
use chrono_tz::Tz;
use tracing::warn;

use crate::options::WeekStartDay;

/// Resolve a local wall-clock time in `tz`.
///
/// Ambiguous times (DST fall back) take the earlier instant. Times inside a
/// DST gap (spring forward) move one hour forward, the way the clock does.
pub fn localize(tz: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, latest) => {
            warn!(%earliest, %latest, "ambiguous local time, using the earliest");
            Some(earliest)
        }
        LocalResult::None => {
            let shifted = naive.checked_add_signed(Duration::hours(1))?;
            warn!(%naive, timezone = ?tz, "local time falls in a DST gap, moving forward one hour");
            tz.from_local_datetime(&shifted).earliest()
        }
    }
}

/// Move by whole calendar days, keeping the wall-clock time.
pub fn shift_days(moment: &DateTime<Tz>, days: i64) -> Option<DateTime<Tz>> {
    if days == 0 {
        return Some(*moment);
    }
    let naive = moment
        .naive_local()
        .checked_add_signed(Duration::try_days(days)?)?;
    localize(&moment.timezone(), naive)
}

/// Move to `weekday` inside the week that contains `moment`.
///
/// The result may lie before `moment` (e.g. Monday when `moment` is a
/// Wednesday and weeks start on Sunday).
pub fn with_weekday(
    moment: &DateTime<Tz>,
    weekday: Weekday,
    week_start: WeekStartDay,
) -> Option<DateTime<Tz>> {
    let delta = week_start.days_from_start(weekday) - week_start.days_from_start(moment.weekday());
    shift_days(moment, delta)
}

/// Set hour and minute on the local wall clock. Seconds are kept.
pub fn with_clock(moment: &DateTime<Tz>, hour: u32, minute: u32) -> Option<DateTime<Tz>> {
    let naive = moment.naive_local().with_hour(hour)?.with_minute(minute)?;
    localize(&moment.timezone(), naive)
}

/// Add an absolute number of minutes.
pub fn add_minutes(moment: &DateTime<Tz>, minutes: i64) -> Option<DateTime<Tz>> {
    moment.checked_add_signed(Duration::try_minutes(minutes)?)
}
