//! Recognized tokens and their effect on the working moment.

use std::fmt;

use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, warn};

use crate::moment;
use crate::options::WeekStartDay;

/// What a token means, carrying only the data its effect needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TokenKind {
    /// `mon`, `tues`, `friday`: the next such day, same wall-clock time.
    WeekDay {
        #[serde(serialize_with = "serialize_weekday")]
        day: Weekday,
    },
    /// `9pm`, `12:30am`, `21`: that wall-clock time today, or tomorrow if it passed.
    ClockTime { hour: u32, minute: u32 },
    /// `2d4h`, `90m`: a relative offset, always added forward.
    DurationShorthand { minutes: i64 },
}

/// A recognized lexical unit: the exact text consumed plus its meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub raw: String,
    #[serde(flatten)]
    pub kind: TokenKind,
}

impl Token {
    pub fn new(raw: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            raw: raw.into(),
            kind,
        }
    }

    /// Apply this token to the working moment.
    ///
    /// Weekday and clock-time results that are not strictly after `now` roll
    /// forward by a week or a day. If the result cannot be represented the
    /// moment is returned unchanged.
    pub fn apply(
        &self,
        current: DateTime<Tz>,
        now: DateTime<Utc>,
        week_start: WeekStartDay,
    ) -> DateTime<Tz> {
        let next = match self.kind {
            TokenKind::WeekDay { day } => moment::with_weekday(&current, day, week_start)
                .and_then(|moved| roll_forward(moved, now, 7)),
            TokenKind::ClockTime { hour, minute } => moment::with_clock(&current, hour, minute)
                .and_then(|moved| roll_forward(moved, now, 1)),
            TokenKind::DurationShorthand { minutes } => moment::add_minutes(&current, minutes),
        };

        match next {
            Some(next) => {
                debug!(token = %self.raw, from = %current, to = %next, "applied token");
                next
            }
            None => {
                warn!(token = %self.raw, moment = %current, "token effect out of range, ignored");
                current
            }
        }
    }
}

/// Push `moved` forward by `days` when it is at or before `now`.
fn roll_forward(moved: DateTime<Tz>, now: DateTime<Utc>, days: i64) -> Option<DateTime<Tz>> {
    if moved <= now {
        moment::shift_days(&moved, days)
    } else {
        Some(moved)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn serialize_weekday<S: serde::Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(weekday_name(*day))
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "monday",
        Weekday::Tue => "tuesday",
        Weekday::Wed => "wednesday",
        Weekday::Thu => "thursday",
        Weekday::Fri => "friday",
        Weekday::Sat => "saturday",
        Weekday::Sun => "sunday",
    }
}
