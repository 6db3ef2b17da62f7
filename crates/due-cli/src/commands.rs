use std::io::Write;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use due_engine::{parse_with_options, render, render_moment, snooze, ParseOptions, Preview, Token};
use serde::Serialize;
use tracing::info;

use crate::cli::{ParseArgs, SnoozeArgs};

#[derive(Debug, Serialize)]
struct ParseReport<'a> {
    input: &'a str,
    now: DateTime<Utc>,
    due: Option<DateTime<Tz>>,
    due_utc: Option<DateTime<Utc>>,
    tokens: &'a [Token],
    preview: Option<&'a Preview>,
}

#[derive(Debug, Serialize)]
struct SnoozeReport {
    due: DateTime<Tz>,
    snoozed: DateTime<Tz>,
}

fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => Ok(DateTime::parse_from_rfc3339(s.trim())
            .with_context(|| format!("invalid --now '{s}', expected RFC 3339"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

pub fn run_parse(args: &ParseArgs, out: &mut impl Write) -> Result<()> {
    let options = ParseOptions::with_timezone_name(&args.timezone)
        .context("invalid --timezone")?
        .with_week_start(args.week_start);
    let now = resolve_now(args.now.as_deref())?;
    let text = args.text.join(" ");

    let parsed = parse_with_options(Some(text.as_str()), now, &options);
    let preview = render(&parsed, now);
    info!(input = %text, tokens = parsed.tokens.len(), "parsed due expression");

    if args.json {
        let report = ParseReport {
            input: &text,
            now,
            due: parsed.moment,
            due_utc: parsed.moment_utc(),
            tokens: &parsed.tokens,
            preview: preview.as_ref(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    // Nothing recognized: blank feedback.
    let Some(preview) = preview else {
        return Ok(());
    };
    writeln!(out, "{} ({})", preview.weekday_time, preview.relative)?;
    writeln!(out, "{}", preview.date_time)?;
    writeln!(out, "tokens: {}", preview.tokens.join(" "))?;
    Ok(())
}

pub fn run_snooze(args: &SnoozeArgs, out: &mut impl Write) -> Result<()> {
    let timezone = due_engine::parse_timezone(&args.timezone).context("invalid --timezone")?;
    let now = resolve_now(args.now.as_deref())?;
    let due = DateTime::parse_from_rfc3339(args.due.trim())
        .with_context(|| format!("invalid due date '{}', expected RFC 3339", args.due))?
        .with_timezone(&timezone);
    let snoozed = snooze(due);

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &SnoozeReport { due, snoozed })?;
        writeln!(out)?;
        return Ok(());
    }

    let preview = render_moment(&snoozed, now);
    writeln!(out, "{}", snoozed.to_rfc3339())?;
    writeln!(out, "{} ({})", preview.date_time, preview.relative)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use due_engine::WeekStartDay;

    fn parse_args(text: &[&str]) -> ParseArgs {
        ParseArgs {
            text: text.iter().map(|s| s.to_string()).collect(),
            now: Some("2026-10-14T10:00:00Z".to_string()),
            timezone: "UTC".to_string(),
            week_start: WeekStartDay::Sunday,
            json: false,
        }
    }

    fn output(args: &ParseArgs) -> String {
        let mut out = Vec::new();
        run_parse(args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output() {
        let out = output(&parse_args(&["mon", "2h"]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3, "got: {out}");
        assert!(lines[0].starts_with("Monday 12:00 (in "), "got: {}", lines[0]);
        assert_eq!(lines[1], "2026/10/19 12:00");
        assert_eq!(lines[2], "tokens: mon 2h");
    }

    #[test]
    fn test_nothing_recognized_prints_nothing() {
        assert_eq!(output(&parse_args(&["someday"])), "");
    }

    #[test]
    fn test_json_output() {
        let mut args = parse_args(&["9pm"]);
        args.json = true;
        let value: serde_json::Value = serde_json::from_str(&output(&args)).unwrap();
        assert_eq!(value["input"], "9pm");
        assert_eq!(value["due_utc"], "2026-10-14T21:00:00Z");
        assert_eq!(value["tokens"][0]["raw"], "9pm");
        assert_eq!(value["tokens"][0]["kind"], "clock_time");
        assert_eq!(value["tokens"][0]["hour"], 21);
        assert_eq!(value["preview"]["weekday_time"], "Wednesday 21:00");
    }

    #[test]
    fn test_json_for_unrecognized_input() {
        let mut args = parse_args(&["someday"]);
        args.json = true;
        let value: serde_json::Value = serde_json::from_str(&output(&args)).unwrap();
        assert_eq!(value["tokens"].as_array().map(Vec::len), Some(0));
        assert!(value["preview"].is_null());
        assert_eq!(value["due_utc"], "2026-10-14T10:00:00Z");
    }

    #[test]
    fn test_invalid_timezone_is_an_error() {
        let mut args = parse_args(&["mon"]);
        args.timezone = "Mars/Olympus".to_string();
        let err = run_parse(&args, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("Mars/Olympus"));
    }

    #[test]
    fn test_invalid_now_is_an_error() {
        let mut args = parse_args(&["mon"]);
        args.now = Some("yesterday".to_string());
        let err = run_parse(&args, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("--now"));
    }

    fn snooze_args(due: &str) -> SnoozeArgs {
        SnoozeArgs {
            due: due.to_string(),
            now: Some("2026-10-14T10:00:00Z".to_string()),
            timezone: "UTC".to_string(),
            json: false,
        }
    }

    #[test]
    fn test_snooze_text_output() {
        let mut out = Vec::new();
        run_snooze(&snooze_args("2026-10-14T10:30:00Z"), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2, "got: {out}");
        assert_eq!(lines[0], "2026-10-14T11:30:00+00:00");
        assert!(lines[1].starts_with("2026/10/14 11:30 (in "), "got: {}", lines[1]);
    }

    #[test]
    fn test_snooze_invalid_due_date() {
        let err = run_snooze(&snooze_args("next tuesday"), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("invalid due date 'next tuesday'"));
    }

    #[test]
    fn test_snooze_json() {
        let mut args = snooze_args("2026-10-14T10:30:00Z");
        args.timezone = "Europe/Berlin".to_string();
        args.json = true;
        let mut out = Vec::new();
        run_snooze(&args, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["due"], "2026-10-14T12:30:00+02:00");
        assert_eq!(value["snoozed"], "2026-10-14T13:30:00+02:00");
    }
}
