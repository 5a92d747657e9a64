//! The process-wide logger behind the free functions and macros.

use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::sync::OnceLock;

use crate::error::Result;
use crate::level::{FileNameMode, Level};
use crate::logger::Logger;
use crate::sink::Sink;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The shared logger, created with default settings on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Routes the `log` crate's macros through the shared logger.
pub fn init() -> Result<()> {
    log::set_logger(global())?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

pub fn enable_colored() {
    global().enable_colored();
}

pub fn disable_colored() {
    global().disable_colored();
}

pub fn enable_backtrace() {
    global().enable_backtrace();
}

pub fn disable_backtrace() {
    global().disable_backtrace();
}

pub fn enable_debug() {
    global().enable_debug();
}

pub fn disable_debug() {
    global().disable_debug();
}

pub fn set_file_name_mode(mode: FileNameMode) {
    global().set_file_name_mode(mode);
}

pub fn set_file_name_mode_code(code: u8) {
    global().set_file_name_mode_code(code);
}

pub fn set_prefix(level: Level, prefix: impl Into<String>) {
    global().set_prefix(level, prefix);
}

pub fn set_time_format(format: &str) -> Result<()> {
    global().set_time_format(format)
}

pub fn set_output(sink: impl Sink + 'static) {
    global().set_output(sink);
}

pub fn set_writer(writer: impl Write + Send + 'static) {
    global().set_writer(writer);
}

#[track_caller]
pub fn error_err<E: fmt::Display + ?Sized>(err: Option<&E>) -> bool {
    global().error_err(err)
}

#[track_caller]
pub fn warning_err<E: fmt::Display + ?Sized>(err: Option<&E>) -> bool {
    global().warning_err(err)
}

#[track_caller]
pub fn fatal_err<E: fmt::Display + ?Sized>(err: Option<&E>) {
    global().fatal_err(err);
}

#[track_caller]
pub fn json_debug<T: Serialize + ?Sized>(value: &T) {
    global().json_debug(value);
}

#[track_caller]
pub fn recover<T>(f: impl FnOnce() -> T) -> Option<T> {
    global().recover(f)
}

/// Logs the error of a `Result` through the shared logger and keeps the value.
pub trait ResultExt<T> {
    /// Error level on `Err`.
    fn log_err(self) -> Option<T>;
    /// Warning level on `Err`.
    fn log_warn(self) -> Option<T>;
}

impl<T, E: fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                global().error_err(Some(&err));
                None
            }
        }
    }

    #[track_caller]
    fn log_warn(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                global().warning_err(Some(&err));
                None
            }
        }
    }
}
