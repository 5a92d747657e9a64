use indexmap::IndexMap;
use std::fmt;
use time::format_description::OwnedFormatItem;
use time::OffsetDateTime;

use crate::error::{Error, Result};
use crate::level::{FileNameMode, Level};

/// `2024-Mar-7 09:05:01.1234`
pub const DEFAULT_TIME_FORMAT: &str =
    "[year]-[month repr:short]-[day padding:none] [hour]:[minute]:[second].[subsecond digits:4]";

/// A parsed timestamp layout in the `time` crate's format description syntax.
#[derive(Clone)]
pub struct TimeFormat {
    source: String,
    items: OwnedFormatItem,
}

impl TimeFormat {
    pub fn parse(format: &str) -> Result<Self> {
        let items = time::format_description::parse_owned::<2>(format).map_err(|source| {
            Error::InvalidTimeFormat {
                format: format.to_string(),
                source,
            }
        })?;
        Ok(Self {
            source: format.to_string(),
            items,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Renders `at`; a component the layout cannot express yields `???`.
    pub fn render(&self, at: OffsetDateTime) -> String {
        at.format(&self.items)
            .unwrap_or_else(|_| String::from("???"))
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        let items = time::format_description::parse_owned::<2>(DEFAULT_TIME_FORMAT)
            .unwrap_or_else(|_| OwnedFormatItem::Compound(Box::default()));
        Self {
            source: DEFAULT_TIME_FORMAT.to_string(),
            items,
        }
    }
}

impl fmt::Debug for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TimeFormat").field(&self.source).finish()
    }
}

/// Settings read by every print call.
#[derive(Debug, Clone)]
pub struct Config {
    pub colored: bool,
    pub backtrace: bool,
    pub debug: bool,
    pub file_name: FileNameMode,
    pub time_format: TimeFormat,
    prefixes: IndexMap<Level, String>,
}

impl Default for Config {
    fn default() -> Self {
        let prefixes = Level::ALL
            .iter()
            .map(|level| (*level, level.default_prefix().to_string()))
            .collect();
        Self {
            colored: false,
            backtrace: true,
            debug: true,
            file_name: FileNameMode::None,
            time_format: TimeFormat::default(),
            prefixes,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn with_backtrace(mut self, backtrace: bool) -> Self {
        self.backtrace = backtrace;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_file_name(mut self, mode: FileNameMode) -> Self {
        self.file_name = mode;
        self
    }

    pub fn with_time_format(mut self, format: &str) -> Result<Self> {
        self.time_format = TimeFormat::parse(format)?;
        Ok(self)
    }

    pub fn with_prefix(mut self, level: Level, prefix: impl Into<String>) -> Self {
        self.set_prefix(level, prefix);
        self
    }

    pub fn prefix(&self, level: Level) -> &str {
        self.prefixes
            .get(&level)
            .map(String::as_str)
            .unwrap_or_else(|| level.default_prefix())
    }

    pub fn set_prefix(&mut self, level: Level, prefix: impl Into<String>) {
        self.prefixes.insert(level, prefix.into());
    }

    pub fn prefixes(&self) -> impl Iterator<Item = (Level, &str)> {
        self.prefixes.iter().map(|(level, p)| (*level, p.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert!(!config.colored);
        assert!(config.backtrace);
        assert!(config.debug);
        assert_eq!(config.file_name, FileNameMode::None);
        assert_eq!(config.time_format.as_str(), DEFAULT_TIME_FORMAT);
        assert_eq!(config.prefix(Level::Error), " ERR");
    }

    #[test]
    fn default_time_format_renders_short_month_and_unpadded_day() {
        let at = datetime!(2024-03-07 09:05:01.123456789 UTC);
        assert_eq!(
            TimeFormat::default().render(at),
            "2024-Mar-7 09:05:01.1234"
        );
    }

    #[test]
    fn invalid_time_format_is_rejected() {
        let err = TimeFormat::parse("[nonsense]").unwrap_err();
        assert!(matches!(err, Error::InvalidTimeFormat { .. }));
        assert!(err.to_string().contains("[nonsense]"));
    }

    #[test]
    fn prefixes_keep_level_order_and_accept_overrides() {
        let config = Config::new().with_prefix(Level::Info, "NOTE");
        let labels: Vec<_> = config.prefixes().collect();
        assert_eq!(labels[0], (Level::Info, "NOTE"));
        assert_eq!(labels[1], (Level::Warning, "WARN"));
        assert_eq!(labels.len(), 4);
    }
}
