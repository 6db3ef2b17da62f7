//! Configuration for due-date parsing.

use std::str::FromStr;

use chrono::Weekday;
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::DueError;

/// Which day begins a week when a weekday token moves the working moment.
///
/// A weekday token first lands on that day *inside the current week* and is
/// only pushed a week forward when the result is not in the future, so the
/// week start matters once earlier tokens have moved the moment (`"1w sun"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStartDay {
    /// US convention, and the default of the to-do UI (Sunday = day 0).
    #[default]
    Sunday,
    /// ISO 8601 (Monday = day 0).
    Monday,
}

impl WeekStartDay {
    /// How many days `weekday` is from the week-start day.
    pub fn days_from_start(self, weekday: Weekday) -> i64 {
        match self {
            WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
            WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
        }
    }
}

impl FromStr for WeekStartDay {
    type Err = DueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStartDay::Sunday),
            "monday" | "mon" => Ok(WeekStartDay::Monday),
            other => Err(DueError::InvalidWeekStart(format!(
                "'{other}' (expected 'sunday' or 'monday')"
            ))),
        }
    }
}

/// Options for [`parse_with_options`](crate::parse_with_options).
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Timezone whose wall clock weekday and clock-time tokens refer to.
    pub timezone: Tz,
    /// Which day starts the week for weekday tokens.
    pub week_start: WeekStartDay,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            week_start: WeekStartDay::default(),
        }
    }
}

impl ParseOptions {
    pub fn new(timezone: Tz) -> Self {
        Self {
            timezone,
            ..Default::default()
        }
    }

    /// Build options from an IANA timezone name (e.g. `"Europe/Berlin"`).
    pub fn with_timezone_name(name: &str) -> Result<Self, DueError> {
        Ok(Self::new(parse_timezone(name)?))
    }

    pub fn with_week_start(mut self, week_start: WeekStartDay) -> Self {
        self.week_start = week_start;
        self
    }
}

/// Parse an IANA timezone string into `Tz`.
pub fn parse_timezone(s: &str) -> Result<Tz, DueError> {
    s.trim()
        .parse::<Tz>()
        .map_err(|_| DueError::InvalidTimezone(format!("'{}'", s)))
}
