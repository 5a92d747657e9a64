use colored::Color;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warning,
    Error,
    Debug,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Info, Level::Warning, Level::Error, Level::Debug];

    /// Label printed after the timestamp unless overridden with
    /// [`Config::set_prefix`](crate::Config::set_prefix).
    pub fn default_prefix(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warning => "WARN",
            Level::Error => " ERR",
            Level::Debug => " DEB",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Level::Info => Color::Green,
            Level::Warning => Color::Yellow,
            Level::Error => Color::Red,
            Level::Debug => Color::Blue,
        }
    }

    /// Whether lines of this level carry a stack trace when backtraces are on.
    pub fn wants_trace(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }

    /// Routes to stderr on a console-routed sink.
    pub fn is_problem(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Debug => "debug",
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warning),
            "err" | "error" => Ok(Level::Error),
            "debug" => Ok(Level::Debug),
            _ => Err(Error::UnknownLevel(s.to_string())),
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warning,
            log::Level::Info => Level::Info,
            log::Level::Debug | log::Level::Trace => Level::Debug,
        }
    }
}

/// How much of the caller's source path goes into the prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileNameMode {
    #[default]
    None,
    Short,
    Long,
}

impl TryFrom<u8> for FileNameMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(FileNameMode::None),
            1 => Ok(FileNameMode::Short),
            2 => Ok(FileNameMode::Long),
            other => Err(Error::UnknownFileNameMode(other.to_string())),
        }
    }
}

impl FromStr for FileNameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" | "no" => Ok(FileNameMode::None),
            "short" => Ok(FileNameMode::Short),
            "long" | "full" => Ok(FileNameMode::Long),
            _ => Err(Error::UnknownFileNameMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefixes_are_four_columns_wide() {
        for level in Level::ALL {
            assert_eq!(level.default_prefix().len(), 4, "{level}");
        }
    }

    #[test]
    fn only_warning_and_error_request_traces() {
        assert!(!Level::Info.wants_trace());
        assert!(Level::Warning.wants_trace());
        assert!(Level::Error.wants_trace());
        assert!(!Level::Debug.wants_trace());
    }

    #[test]
    fn file_name_mode_codes() {
        assert_eq!(FileNameMode::try_from(0).unwrap(), FileNameMode::None);
        assert_eq!(FileNameMode::try_from(1).unwrap(), FileNameMode::Short);
        assert_eq!(FileNameMode::try_from(2).unwrap(), FileNameMode::Long);
        assert!(FileNameMode::try_from(7).is_err());
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warning);
        assert_eq!("Short".parse::<FileNameMode>().unwrap(), FileNameMode::Short);
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn trace_records_map_to_debug() {
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
        assert_eq!(Level::from(log::Level::Warn), Level::Warning);
    }
}
