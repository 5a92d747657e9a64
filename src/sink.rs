use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Arc, Mutex, PoisonError};

use crate::level::Level;

/// Destination for rendered log lines.
pub trait Sink: Send {
    /// Writes one rendered line followed by its (possibly empty) trace block.
    fn emit(&mut self, level: Level, line: &str, trace: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn emit(&mut self, level: Level, line: &str, trace: &str) -> io::Result<()> {
        (**self).emit(level, line, trace)
    }
}

/// Writes every line, trace included, to a single stream.
#[derive(Debug)]
pub struct StreamSink<W> {
    writer: W,
}

impl<W: Write + Send> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StreamSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Sink for StreamSink<W> {
    fn emit(&mut self, _level: Level, line: &str, trace: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + trace.len());
        buf.push_str(line);
        buf.push_str(trace);
        self.writer.write_all(buf.as_bytes())?;
        self.writer.flush()
    }
}

/// Routes by level the way a browser console does: info and debug go to
/// `out`, warnings and errors go to `err`.
#[derive(Debug)]
pub struct ConsoleSink<O, E> {
    out: O,
    err: E,
}

impl<O: Write + Send, E: Write + Send> ConsoleSink<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl ConsoleSink<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write + Send, E: Write + Send> Sink for ConsoleSink<O, E> {
    fn emit(&mut self, level: Level, line: &str, trace: &str) -> io::Result<()> {
        let target: &mut dyn Write = if level.is_problem() {
            &mut self.err
        } else {
            &mut self.out
        };
        let mut buf = String::with_capacity(line.len() + trace.len());
        buf.push_str(line);
        buf.push_str(trace);
        target.write_all(buf.as_bytes())?;
        target.flush()
    }
}

/// In-memory sink; clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Log lines emitted so far with color escapes removed and trace lines
    /// dropped.
    pub fn records(&self) -> Vec<String> {
        strip_ansi(&self.contents())
            .lines()
            .filter(|line| !line.is_empty() && !line.starts_with('\t'))
            .map(str::to_string)
            .collect()
    }

    pub fn clear(&self) {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Sink for MemorySink {
    fn emit(&mut self, _level: Level, line: &str, trace: &str) -> io::Result<()> {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.extend_from_slice(line.as_bytes());
        buf.extend_from_slice(trace.as_bytes());
        Ok(())
    }
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
