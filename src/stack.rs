use backtrace::{Backtrace, BacktraceSymbol};
use colored::Color;

use crate::printer::paint;

/// Deepest trace rendered for a single log line.
pub const MAX_FRAMES: usize = 50;

/// Leading frames with these symbol prefixes belong to the capture machinery
/// and are not part of the caller's stack.
const INTERNAL_SYMBOLS: &[&str] = &[
    "backtrace::",
    "log::",
    concat!(env!("CARGO_CRATE_NAME"), "::stack::capture"),
    concat!(env!("CARGO_CRATE_NAME"), "::printer::render"),
    concat!(env!("CARGO_CRATE_NAME"), "::logger::Logger"),
    concat!(env!("CARGO_CRATE_NAME"), "::global::"),
];

/// Trait impls of this crate's own traits, e.g. `<Result<T, E> as ResultExt<T>>`.
const INTERNAL_IMPL: &str = concat!(" as ", env!("CARGO_CRATE_NAME"), "::global::");

/// One resolved stack entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEntry {
    pub file: String,
    pub line: u32,
    pub symbol: String,
}

impl StackEntry {
    pub fn new(file: impl Into<String>, line: u32, symbol: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            symbol: symbol.into(),
        }
    }

    fn is_internal(&self) -> bool {
        let name = self.symbol.trim_start_matches('<');
        INTERNAL_SYMBOLS.iter().any(|prefix| name.starts_with(prefix))
            || self.symbol.contains(INTERNAL_IMPL)
    }
}

impl From<&BacktraceSymbol> for StackEntry {
    fn from(symbol: &BacktraceSymbol) -> Self {
        let file = symbol
            .filename()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "???".to_string());
        let name = symbol
            .name()
            .map(|name| format!("{name:#}"))
            .unwrap_or_else(|| "???".to_string());
        Self::new(file, symbol.lineno().unwrap_or(0), name)
    }
}

/// Captures the current call stack, starting at the first frame outside the
/// logger, and renders it as a trace block.
pub fn capture(colored: bool) -> String {
    let trace = Backtrace::new();
    let entries: Vec<StackEntry> = trace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .map(StackEntry::from)
        .skip_while(StackEntry::is_internal)
        .take(MAX_FRAMES)
        .collect();
    render(&entries, colored)
}

/// Two lines per entry: `\t<file>:<line>` then `\t\t<symbol>`.
pub fn render(entries: &[StackEntry], colored: bool) -> String {
    let mut out = String::new();
    for entry in entries {
        let line = format!("\t{}:{}\n", entry.file, entry.line);
        let func = format!("\t\t{}\n", entry.symbol);
        if colored {
            out.push_str(&paint(Color::Magenta, &line));
            out.push_str(&paint(Color::Magenta, &func));
        } else {
            out.push_str(&line);
            out.push_str(&func);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_lines_per_entry() {
        let entries = [
            StackEntry::new("src/app.rs", 12, "app::run"),
            StackEntry::new("src/main.rs", 3, "app::main"),
        ];
        assert_eq!(
            render(&entries, false),
            "\tsrc/app.rs:12\n\t\tapp::run\n\tsrc/main.rs:3\n\t\tapp::main\n"
        );
    }

    #[test]
    fn colored_entries_wrap_each_line_in_magenta() {
        let entries = [StackEntry::new("a.rs", 1, "a::f")];
        let out = render(&entries, true);
        assert_eq!(out, "\x1b[35m\ta.rs:1\n\x1b[0m\x1b[35m\t\ta::f\n\x1b[0m");
    }

    #[test]
    fn internal_symbols_are_recognised() {
        let internal = StackEntry::new("x", 0, "<stacklog::logger::Logger as log::Log>::log");
        assert!(internal.is_internal());
        assert!(StackEntry::new("x", 0, "backtrace::capture::Backtrace::new").is_internal());
        let ext = "<core::result::Result<T,E> as stacklog::global::ResultExt<T>>::log_err";
        assert!(StackEntry::new("x", 0, ext).is_internal());
        assert!(!StackEntry::new("x", 0, "stacklog::stack::tests::f").is_internal());
        assert!(!StackEntry::new("x", 0, "myapp::main").is_internal());
    }

    #[test]
    fn capture_starts_at_the_caller() {
        let block = capture(false);
        let first_symbol = block.lines().nth(1).unwrap_or_default();
        assert!(
            first_symbol.contains("capture_starts_at_the_caller"),
            "unexpected trace:\n{block}"
        );
    }

    #[test]
    fn capture_is_bounded() {
        let block = capture(false);
        assert!(block.lines().count() <= MAX_FRAMES * 2);
    }
}
