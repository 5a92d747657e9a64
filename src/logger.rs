use serde::Serialize;
use std::any::Any;
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe, Location};
use std::process;
use std::sync::{Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{Config, TimeFormat};
use crate::error::Result;
use crate::level::{FileNameMode, Level};
use crate::location::CallerLocation;
use crate::printer::{self, Record};
use crate::sink::{Sink, StreamSink};

/// A leveled logger: a [`Config`] plus the [`Sink`] lines are written to.
///
/// Settings are read on every call, so a mutator takes effect for the next
/// line. Each line is written to the sink in a single `emit` under the sink
/// lock; a mutator racing an in-flight call may or may not be observed by it.
pub struct Logger {
    config: RwLock<Config>,
    sink: Mutex<Box<dyn Sink>>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &*self.read())
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Default settings, writing to stdout.
    pub fn new() -> Self {
        Self::with_config(Config::default(), StreamSink::stdout())
    }

    pub fn with_sink(sink: impl Sink + 'static) -> Self {
        Self::with_config(Config::default(), sink)
    }

    pub fn with_config(config: Config, sink: impl Sink + 'static) -> Self {
        Self {
            config: RwLock::new(config),
            sink: Mutex::new(Box::new(sink)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Config> {
        self.config.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Config> {
        self.config.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// A copy of the current settings.
    pub fn config(&self) -> Config {
        self.read().clone()
    }

    pub fn enable_colored(&self) {
        self.write().colored = true;
    }

    pub fn disable_colored(&self) {
        self.write().colored = false;
    }

    pub fn is_colored(&self) -> bool {
        self.read().colored
    }

    pub fn enable_backtrace(&self) {
        self.write().backtrace = true;
    }

    pub fn disable_backtrace(&self) {
        self.write().backtrace = false;
    }

    pub fn backtrace_enabled(&self) -> bool {
        self.read().backtrace
    }

    pub fn enable_debug(&self) {
        self.write().debug = true;
    }

    pub fn disable_debug(&self) {
        self.write().debug = false;
    }

    pub fn debug_enabled(&self) -> bool {
        self.read().debug
    }

    pub fn set_file_name_mode(&self, mode: FileNameMode) {
        self.write().file_name = mode;
    }

    /// Numeric form of [`set_file_name_mode`](Self::set_file_name_mode);
    /// codes other than 0, 1 and 2 are ignored.
    pub fn set_file_name_mode_code(&self, code: u8) {
        if let Ok(mode) = FileNameMode::try_from(code) {
            self.set_file_name_mode(mode);
        }
    }

    pub fn file_name_mode(&self) -> FileNameMode {
        self.read().file_name
    }

    pub fn set_prefix(&self, level: Level, prefix: impl Into<String>) {
        self.write().set_prefix(level, prefix);
    }

    pub fn set_time_format(&self, format: &str) -> Result<()> {
        let parsed = TimeFormat::parse(format)?;
        self.write().time_format = parsed;
        Ok(())
    }

    /// Replaces the destination for subsequent lines.
    pub fn set_output(&self, sink: impl Sink + 'static) {
        *self.sink.lock().unwrap_or_else(PoisonError::into_inner) = Box::new(sink);
    }

    /// Shorthand for `set_output(StreamSink::new(writer))`.
    pub fn set_writer(&self, writer: impl Write + Send + 'static) {
        self.set_output(StreamSink::new(writer));
    }

    /// Formats and writes one line. Debug lines are dropped while debug
    /// output is disabled; sink errors are discarded.
    pub fn emit(
        &self,
        level: Level,
        message: fmt::Arguments<'_>,
        location: Option<CallerLocation>,
    ) {
        // Rendering runs caller `Display` impls, which may use this logger.
        let config = self.config();
        if level == Level::Debug && !config.debug {
            return;
        }
        let record = Record {
            level,
            message,
            location,
            trace: level.wants_trace(),
        };
        let rendered = printer::render(&config, &record, printer::now());
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.emit(level, &rendered.line, &rendered.trace);
    }

    #[track_caller]
    pub fn info(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Info, message, Some(Location::caller().into()));
    }

    #[track_caller]
    pub fn warning(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Warning, message, Some(Location::caller().into()));
    }

    #[track_caller]
    pub fn error(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Error, message, Some(Location::caller().into()));
    }

    #[track_caller]
    pub fn debug(&self, message: fmt::Arguments<'_>) {
        self.emit(Level::Debug, message, Some(Location::caller().into()));
    }

    /// Logs at error level and exits the process with status 1. Destructors
    /// of live values do not run.
    #[track_caller]
    pub fn fatal(&self, message: fmt::Arguments<'_>) -> ! {
        self.emit(Level::Error, message, Some(Location::caller().into()));
        process::exit(1)
    }

    /// Turns backtraces off for this logger, logs at error level and unwinds
    /// with the formatted message as a `String` payload.
    ///
    /// The default panic hook is bypassed, so the message is printed once.
    /// Catch it with [`recover`](Self::recover). An uncaught panic ends only
    /// the thread it was raised on: on the main thread the process exits with
    /// status 101, on a spawned thread the unwind stops at `join` and the
    /// rest of the process keeps running.
    #[track_caller]
    pub fn panic(&self, message: fmt::Arguments<'_>) -> ! {
        self.disable_backtrace();
        let text = message.to_string();
        self.emit(
            Level::Error,
            format_args!("{text}"),
            Some(Location::caller().into()),
        );
        panic::resume_unwind(Box::new(text))
    }

    /// Logs `err` at error level. Returns whether there was an error.
    #[track_caller]
    pub fn error_err<E: fmt::Display + ?Sized>(&self, err: Option<&E>) -> bool {
        match err {
            Some(err) => {
                self.emit(
                    Level::Error,
                    format_args!("{err}"),
                    Some(Location::caller().into()),
                );
                true
            }
            None => false,
        }
    }

    /// Logs `err` at warning level. Returns whether there was an error.
    #[track_caller]
    pub fn warning_err<E: fmt::Display + ?Sized>(&self, err: Option<&E>) -> bool {
        match err {
            Some(err) => {
                self.emit(
                    Level::Warning,
                    format_args!("{err}"),
                    Some(Location::caller().into()),
                );
                true
            }
            None => false,
        }
    }

    /// Exits through [`fatal`](Self::fatal) when `err` is present.
    #[track_caller]
    pub fn fatal_err<E: fmt::Display + ?Sized>(&self, err: Option<&E>) {
        if let Some(err) = err {
            self.fatal(format_args!("{err}"));
        }
    }

    /// Logs `value` as indented JSON at debug level. A value that fails to
    /// serialize is reported as a warning instead.
    #[track_caller]
    pub fn json_debug<T: Serialize + ?Sized>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => self.emit(
                Level::Debug,
                format_args!("{text}"),
                Some(Location::caller().into()),
            ),
            Err(err) => {
                self.warning_err(Some(&err));
            }
        }
    }

    /// Runs `f`, stopping any panic that escapes it. A caught panic is logged
    /// as `PANIC: <payload>` at error level and yields `None`.
    #[track_caller]
    pub fn recover<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        let location = CallerLocation::from(Location::caller());
        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => Some(value),
            Err(payload) => {
                let text = payload_text(payload.as_ref());
                self.emit(Level::Error, format_args!("PANIC: {text}"), Some(location));
                None
            }
        }
    }
}

fn payload_text(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "Box<dyn Any>"
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        Level::from(metadata.level()) != Level::Debug || self.debug_enabled()
    }

    fn log(&self, record: &log::Record<'_>) {
        let location = match (record.file(), record.line()) {
            (Some(file), Some(line)) => Some(CallerLocation::new(file, line)),
            _ => None,
        };
        self.emit(record.level().into(), *record.args(), location);
    }

    fn flush(&self) {}
}
