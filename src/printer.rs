use colored::Color;
use std::fmt;
use time::OffsetDateTime;

use crate::config::Config;
use crate::level::Level;
use crate::location::CallerLocation;
use crate::stack;

const RESET: &str = "\x1b[0m";

/// Wraps `text` in the foreground escape for `color`.
pub fn paint(color: Color, text: &str) -> String {
    format!("\x1b[{}m{}{RESET}", color.to_fg_str(), text)
}

/// A single log call on its way to the sink.
#[derive(Debug)]
pub struct Record<'a> {
    pub level: Level,
    pub message: fmt::Arguments<'a>,
    pub location: Option<CallerLocation>,
    pub trace: bool,
}

/// The text a record turns into: the (possibly colored) line and the
/// (possibly empty) stack trace block that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub line: String,
    pub trace: String,
}

pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn render(config: &Config, record: &Record<'_>, at: OffsetDateTime) -> Rendered {
    let file = CallerLocation::prefix_segment(record.location.as_ref(), config.file_name);
    let prefix = format!("{}{}", config.prefix(record.level), file);

    let trace = if record.trace && config.backtrace {
        stack::capture(config.colored)
    } else {
        String::new()
    };

    let plain = format!(
        "{} {} {}\n",
        config.time_format.render(at),
        prefix,
        record.message
    );
    let line = if config.colored {
        paint(record.level.color(), &plain)
    } else {
        plain
    };

    Rendered { line, trace }
}
