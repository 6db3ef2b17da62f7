//! # due-engine
//!
//! Natural due dates for a to-do list.
//!
//! Turns what people type into a due-date field, such as `"mon 2h"`, `"9pm"`
//! or `"2d4h"`, into a concrete moment plus the tokens that were understood.
//! All functions take an explicit `now`, so results are deterministic.
//!
//! ## Modules
//!
//! - [`parser`]: tokenizer and the [`parse`] entry point
//! - [`matcher`]: weekday, clock-time and duration-shorthand matchers, in precedence order
//! - [`token`]: token kinds and their effect on the working moment
//! - [`moment`]: wall-clock arithmetic in a timezone
//! - [`options`]: timezone and week start
//! - [`preview`]: human-readable feedback for a parsed due date
//! - [`reminder`]: snoozing and due-window selection
//! - [`error`]: Error types

pub mod error;
pub mod matcher;
pub mod moment;
pub mod options;
pub mod parser;
pub mod preview;
pub mod reminder;
pub mod token;

pub use error::DueError;
pub use options::{parse_timezone, ParseOptions, WeekStartDay};
pub use parser::{parse, parse_with_options, tokenize, ParsedDue};
pub use preview::{existing_due, render, render_moment, Preview};
pub use reminder::{due_between, is_due_between, snooze};
pub use token::{Token, TokenKind};
