//! Human-readable feedback for a parsed due date.
//!
//! The to-do form re-parses the due-date field on every keystroke and shows
//! the result under it: the due moment as weekday and time, as a full date,
//! relative to now, and the tokens that were understood.

use chrono::{DateTime, Utc};
use chrono_humanize::HumanTime;
use chrono_tz::Tz;
use serde::Serialize;

use crate::error::{DueError, Result};
use crate::parser::ParsedDue;

/// Rendered feedback for a due moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    /// e.g. `"Monday 14:30"`
    pub weekday_time: String,
    /// e.g. `"2026/10/19 14:30"`
    pub date_time: String,
    /// e.g. `"in 5 days"`, `"2 hours ago"`
    pub relative: String,
    /// Raw text of each recognized token.
    pub tokens: Vec<String>,
}

/// Render feedback for a fresh parse.
///
/// Returns `None` when nothing was recognized: the form shows no preview
/// rather than an error.
pub fn render(parsed: &ParsedDue, now: DateTime<Utc>) -> Option<Preview> {
    if parsed.tokens.is_empty() {
        return None;
    }
    let moment = parsed.moment?;
    let mut preview = render_moment(&moment, now);
    preview.tokens = parsed.tokens.iter().map(|t| t.raw.clone()).collect();
    Some(preview)
}

/// Render a due moment on its own (no tokens), e.g. a stored due date.
pub fn render_moment(moment: &DateTime<Tz>, now: DateTime<Utc>) -> Preview {
    Preview {
        weekday_time: moment.format("%A %H:%M").to_string(),
        date_time: moment.format("%Y/%m/%d %H:%M").to_string(),
        relative: HumanTime::from(moment.with_timezone(&Utc) - now).to_string(),
        tokens: Vec::new(),
    }
}

/// Wrap a stored due date (RFC 3339) as a parse result with no tokens.
///
/// Editing a to-do keeps its due date until the user types a new expression.
pub fn existing_due(rfc3339: &str, tz: Tz) -> Result<ParsedDue> {
    let moment = DateTime::parse_from_rfc3339(rfc3339.trim())
        .map_err(|e| DueError::InvalidDatetime(format!("'{}': {}", rfc3339, e)))?
        .with_timezone(&tz);
    Ok(ParsedDue {
        moment: Some(moment),
        tokens: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use chrono::TimeZone;

    // Wednesday 2026-10-14 10:00 UTC
    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 14, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_render_parsed() {
        let parsed = parse(Some("mon 2h"), anchor());
        let preview = render(&parsed, anchor()).unwrap();
        assert_eq!(preview.weekday_time, "Monday 12:00");
        assert_eq!(preview.date_time, "2026/10/19 12:00");
        assert!(preview.relative.starts_with("in "), "got: {}", preview.relative);
        assert!(preview.relative.contains("5 days"), "got: {}", preview.relative);
        assert_eq!(preview.tokens, ["mon", "2h"]);
    }

    #[test]
    fn test_render_hours_ahead() {
        let parsed = parse(Some("3h"), anchor());
        let preview = render(&parsed, anchor()).unwrap();
        assert_eq!(preview.weekday_time, "Wednesday 13:00");
        assert!(preview.relative.contains("3 hours"), "got: {}", preview.relative);
    }

    #[test]
    fn test_render_nothing_without_tokens() {
        assert!(render(&parse(Some("someday"), anchor()), anchor()).is_none());
        assert!(render(&parse(None, anchor()), anchor()).is_none());
    }

    #[test]
    fn test_render_in_timezone() {
        let tz: Tz = "Asia/Tokyo".parse().unwrap();
        let moment = Utc.with_ymd_and_hms(2026, 10, 14, 15, 30, 0).unwrap().with_timezone(&tz);
        let preview = render_moment(&moment, anchor());
        assert_eq!(preview.weekday_time, "Thursday 00:30");
        assert_eq!(preview.date_time, "2026/10/15 00:30");
    }

    #[test]
    fn test_render_past_moment() {
        let moment = Utc.with_ymd_and_hms(2026, 10, 12, 10, 0, 0).unwrap().with_timezone(&Tz::UTC);
        let preview = render_moment(&moment, anchor());
        assert!(preview.relative.ends_with(" ago"), "got: {}", preview.relative);
    }

    #[test]
    fn test_existing_due() {
        let parsed = existing_due("2026-10-20T08:15:00Z", Tz::UTC).unwrap();
        assert!(parsed.tokens.is_empty());
        assert_eq!(
            parsed.moment_utc(),
            Some(Utc.with_ymd_and_hms(2026, 10, 20, 8, 15, 0).unwrap())
        );
        let preview = render_moment(&parsed.moment.unwrap(), anchor());
        assert_eq!(preview.weekday_time, "Tuesday 08:15");
    }

    #[test]
    fn test_existing_due_invalid() {
        let err = existing_due("next tuesday", Tz::UTC).unwrap_err();
        assert!(err.to_string().contains("Invalid datetime"), "got: {err}");
    }
}
