use std::fmt;
use std::panic::Location;

use crate::level::FileNameMode;

/// Source position of the code that issued a log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    pub file: String,
    pub line: u32,
}

impl CallerLocation {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Stand-in used when the caller cannot be resolved.
    pub fn unknown() -> Self {
        Self::new("???", 0)
    }

    /// The final path segment, or the whole path when it has no `/`.
    pub fn short_file(&self) -> &str {
        self.file
            .rsplit_once('/')
            .map(|(_, name)| name)
            .unwrap_or(&self.file)
    }

    /// ` file:line` as it appears after the level label, or nothing for
    /// [`FileNameMode::None`].
    pub(crate) fn prefix_segment(location: Option<&Self>, mode: FileNameMode) -> String {
        let unknown;
        let location = match location {
            Some(location) => location,
            None => {
                unknown = Self::unknown();
                &unknown
            }
        };
        match mode {
            FileNameMode::None => String::new(),
            FileNameMode::Short => format!(" {}:{}", location.short_file(), location.line),
            FileNameMode::Long => format!(" {location}"),
        }
    }
}

impl From<&Location<'_>> for CallerLocation {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}
