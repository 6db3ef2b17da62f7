//! Due-date expression parsing.
//!
//! [`parse`] turns free-form text such as `"mon 2h30m"`, `"9pm"` or `"2d4h"`
//! into a due moment plus the tokens that were recognized. The caller
//! provides `now`; nothing here reads the system clock.
//!
//! Parsing is best-effort: text after the last recognized token is dropped
//! silently and no input ever produces an error.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::{debug, trace};

use crate::matcher::MATCHERS;
use crate::options::ParseOptions;
use crate::token::Token;

/// The outcome of parsing a due-date expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedDue {
    /// The due moment; `None` only for empty input.
    pub moment: Option<DateTime<Tz>>,
    /// Recognized tokens, in input order (which is also application order).
    pub tokens: Vec<Token>,
}

impl ParsedDue {
    pub fn empty() -> Self {
        Self {
            moment: None,
            tokens: Vec::new(),
        }
    }

    /// The due moment as an absolute instant, for storage.
    pub fn moment_utc(&self) -> Option<DateTime<Utc>> {
        self.moment.map(|m| m.with_timezone(&Utc))
    }

    /// Raw texts of the recognized tokens.
    pub fn raw_tokens(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.raw.as_str()).collect()
    }
}

/// Split `input` into tokens, left to right.
///
/// At each step the matchers are tried in [`MATCHERS`] order and the first
/// match is taken; its raw text is sliced off and leading whitespace trimmed.
/// Tokenizing stops at the end of input or at the first remainder no matcher
/// accepts.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() {
        let Some(token) = match_token(remaining) else {
            trace!(remaining, "no matcher accepts the remainder, stopping");
            break;
        };
        remaining = remaining[token.raw.len()..].trim_start();
        tokens.push(token);
    }

    tokens
}

fn match_token(input: &str) -> Option<Token> {
    MATCHERS.iter().find_map(|(name, matcher)| {
        let token = matcher(input)?;
        debug!(matcher = *name, raw = %token.raw, "matched token");
        Some(token)
    })
}

/// Parse a due-date expression with default options (UTC, weeks start on Sunday).
///
/// See [`parse_with_options`].
pub fn parse(input: Option<&str>, now: DateTime<Utc>) -> ParsedDue {
    parse_with_options(input, now, &ParseOptions::default())
}

/// Parse a due-date expression.
///
/// Empty or absent input gives `(None, [])`. Otherwise the working moment
/// starts at `now` in the configured timezone and every token's effect is
/// applied in order:
///
/// - weekday (`mon`, `tuesday`): that day of the current week, pushed a week
///   forward if not after `now`;
/// - clock time (`9pm`, `21:30`): that time of day, pushed a day forward if
///   not after `now`;
/// - duration shorthand (`2d4h`): added as is.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use due_engine::parse;
///
/// // Wednesday, October 14 2026, 10:00 UTC
/// let now = Utc.with_ymd_and_hms(2026, 10, 14, 10, 0, 0).unwrap();
/// let parsed = parse(Some("mon 2h"), now);
///
/// assert_eq!(parsed.raw_tokens(), ["mon", "2h"]);
/// let due = parsed.moment_utc().unwrap();
/// assert_eq!(due, Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap());
/// ```
#[tracing::instrument(level = "debug", skip(options), fields(timezone = ?options.timezone))]
pub fn parse_with_options(
    input: Option<&str>,
    now: DateTime<Utc>,
    options: &ParseOptions,
) -> ParsedDue {
    let Some(input) = input.filter(|s| !s.is_empty()) else {
        return ParsedDue::empty();
    };

    let tokens = tokenize(input);
    let seed = now.with_timezone(&options.timezone);
    let moment = tokens
        .iter()
        .fold(seed, |moment, token| token.apply(moment, now, options.week_start));

    debug!(tokens = tokens.len(), %moment, "parsed due date");

    ParsedDue {
        moment: Some(moment),
        tokens,
    }
}
