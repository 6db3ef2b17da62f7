//! Token matchers.
//!
//! Each matcher looks at the *start* of the remaining input and returns the
//! token it recognizes, or `None`. Matchers are pure: they never look at the
//! clock. [`MATCHERS`] fixes the order in which the tokenizer tries them.

use std::sync::OnceLock;

use chrono::Weekday;
use regex::Regex;
use tracing::warn;

use crate::token::{Token, TokenKind};

/// A function recognizing one token kind at the start of the input.
pub type Matcher = fn(&str) -> Option<Token>;

/// Matchers in precedence order: weekday, then clock time, then duration
/// shorthand. The first one that matches wins.
pub const MATCHERS: [(&str, Matcher); 3] = [
    ("weekday", match_weekday),
    ("clock_time", match_clock_time),
    ("duration", match_duration),
];

// ── Weekday ─────────────────────────────────────────────────────────────────

/// One alternative per day, Monday first. Two leading letters are required,
/// every further letter of the name is optional (`mo`, `mon`, `monday`, `mody`).
const WEEKDAY_PATTERN: &str = r"(?i)^(?:(mon?d?a?y?)|(tue?s?d?a?y?)|(wed?n?e?s?d?a?y?)|(thu?r?s?d?a?y?)|(fri?d?a?y?)|(sat?u?r?d?a?y?)|(sun?d?a?y?))";

/// Capture group `i + 1` of [`WEEKDAY_PATTERN`] is `WEEKDAY_GROUPS[i]`.
const WEEKDAY_GROUPS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

fn weekday_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(WEEKDAY_PATTERN).ok()).as_ref()
}

/// Match a (possibly abbreviated) weekday name, case-insensitively.
///
/// The match is not word-bounded: `"month"` yields `"mon"` and leaves `"th"`.
pub fn match_weekday(input: &str) -> Option<Token> {
    let captures = weekday_pattern()?.captures(input)?;
    WEEKDAY_GROUPS
        .iter()
        .enumerate()
        .find_map(|(i, day)| {
            captures
                .get(i + 1)
                .map(|m| Token::new(m.as_str(), TokenKind::WeekDay { day: *day }))
        })
}

// ── Clock time ──────────────────────────────────────────────────────────────

/// Match an explicit time of day: `9`, `21`, `9pm`, `12:30AM`, `12:`.
///
/// Scans character by character. A space or an unrelated character ends the
/// literal; a duration unit right after the digits (`1234w`) means the text
/// is a duration shorthand, not a time, and nothing is matched.
pub fn match_clock_time(input: &str) -> Option<Token> {
    let mut literal = String::new();

    for c in input.chars() {
        let last = literal.chars().last();
        // am/pm letters in any case
        let meridiem = c.to_ascii_lowercase();

        if c == ' ' {
            break;
        }

        if matches!(last.map(|l| l.to_ascii_lowercase()), Some('a' | 'p')) {
            if meridiem == 'm' {
                literal.push(c);
                break;
            }
            return None;
        }

        let after_digit = last.is_some_and(|l| l.is_ascii_digit());

        if after_digit && c == ':' {
            literal.push(c);
            continue;
        }

        if (after_digit || last == Some(':')) && matches!(meridiem, 'a' | 'p') {
            literal.push(c);
            continue;
        }

        if c.is_ascii_digit() {
            literal.push(c);
            continue;
        }

        if is_duration_unit(c) {
            return None;
        }

        break;
    }

    if literal.is_empty() {
        return None;
    }

    let (hour, minute) = parse_clock_literal(&literal)?;
    Some(Token::new(literal, TokenKind::ClockTime { hour, minute }))
}

/// Lenient `H[:m][a|p]` reading of a scanned clock literal.
///
/// Hour is the first one or two digits. A `:` after it is skipped, the minute
/// is the next run of one or two digits (default 0) and the first `a`/`p`
/// after that, in either case, is the meridiem. Leftover characters are
/// ignored, which is why `"12:"` reads as 12:00 and `"123"` as 12:03.
fn parse_clock_literal(literal: &str) -> Option<(u32, u32)> {
    let hour_len = leading_digits(literal).min(2);
    if hour_len == 0 {
        return None;
    }
    let mut hour: u32 = literal[..hour_len].parse().ok()?;
    let mut rest = &literal[hour_len..];

    if let Some(colon) = rest.find(':') {
        rest = &rest[colon + 1..];
    }

    let mut minute: u32 = 0;
    if let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        let digits = &rest[start..];
        let len = leading_digits(digits).min(2);
        minute = digits[..len].parse().ok()?;
        rest = &digits[len..];
    }

    match rest
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .find(|c| matches!(c, 'a' | 'p'))
    {
        Some('p') if hour < 12 => hour += 12,
        Some('a') if hour == 12 => hour = 0,
        _ => {}
    }

    if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
        return None;
    }
    // 24:00 is midnight
    Some((hour % 24, minute))
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

// ── Duration shorthand ──────────────────────────────────────────────────────

const DURATION_PATTERN: &str = r"^(?:[0-9]+[wdhm])+";
const DURATION_GROUP_PATTERN: &str = r"([0-9]+)([wdhm])";

fn duration_patterns() -> Option<&'static (Regex, Regex)> {
    static PATTERNS: OnceLock<Option<(Regex, Regex)>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            Some((
                Regex::new(DURATION_PATTERN).ok()?,
                Regex::new(DURATION_GROUP_PATTERN).ok()?,
            ))
        })
        .as_ref()
}

fn is_duration_unit(c: char) -> bool {
    matches!(c, 'w' | 'd' | 'h' | 'm')
}

fn unit_minutes(unit: &str) -> i64 {
    match unit {
        "w" => 7 * 24 * 60,
        "d" => 24 * 60,
        "h" => 60,
        _ => 1,
    }
}

/// Match any number of concatenated `<digits><unit>` groups (`2d4h`, `1w2d3h4m5m6h`).
///
/// Units are `w`eek, `d`ay, `h`our and `m`inute. A total that does not fit in
/// `i64` minutes yields a token with no effect.
pub fn match_duration(input: &str) -> Option<Token> {
    let (whole, group) = duration_patterns()?;
    let raw = whole.find(input)?.as_str();

    let minutes = group
        .captures_iter(raw)
        .try_fold(0i64, |total, caps| {
            let n: i64 = caps[1].parse().ok()?;
            n.checked_mul(unit_minutes(&caps[2]))?.checked_add(total)
        })
        .unwrap_or_else(|| {
            warn!(raw, "duration shorthand overflows, treating it as zero minutes");
            0
        });

    Some(Token::new(raw, TokenKind::DurationShorthand { minutes }))
}
