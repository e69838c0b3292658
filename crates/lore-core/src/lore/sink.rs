//! Output sinks for recall text
//!
//! The assembler never touches a terminal or a file: every piece of text
//! goes through [`LoreSink::emit`]. Front ends pick the sink.

use std::fmt;
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::data::TermColor;

/// Receiver of colored recall text
pub trait LoreSink {
    /// Emit a run of text in the given color
    fn emit(&mut self, color: TermColor, text: &str);

    /// Emit uncolored text
    fn emit_plain(&mut self, text: &str) {
        self.emit(TermColor::White, text);
    }
}

/// Records every emitted span; used by tests and by front ends that lay
/// text out themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    spans: Vec<(TermColor, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[(TermColor, String)] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<(TermColor, String)> {
        self.spans
    }

    /// All text without colors
    pub fn text(&self) -> String {
        self.spans.iter().map(|(_, s)| s.as_str()).collect()
    }

    /// Color of the first span whose text is exactly `text`
    pub fn color_of(&self, text: &str) -> Option<TermColor> {
        self.spans
            .iter()
            .find(|(_, s)| s == text)
            .map(|(color, _)| *color)
    }

    pub fn clear(&mut self) {
        self.spans.clear();
    }
}

impl LoreSink for RecordingSink {
    fn emit(&mut self, color: TermColor, text: &str) {
        if text.is_empty() {
            return;
        }
        // Merge adjacent runs of the same color
        if let Some((last_color, last)) = self.spans.last_mut()
            && *last_color == color
        {
            last.push_str(text);
            return;
        }
        self.spans.push((color, text.to_string()));
    }
}

/// Collects text and drops colors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainTextSink {
    buf: String,
}

impl PlainTextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl LoreSink for PlainTextSink {
    fn emit(&mut self, _color: TermColor, text: &str) {
        self.buf.push_str(text);
    }
}

impl fmt::Display for PlainTextSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buf)
    }
}

/// Display column at which spoiler files wrap
pub const SPOILER_WRAP: usize = 75;

/// Writes recall text to a spoiler file, word-wrapped, colors dropped
///
/// Emitting cannot fail; the first I/O error is kept and returned by
/// [`SpoilerFileSink::finish`], and later writes are skipped.
pub struct SpoilerFileSink<W: Write> {
    writer: W,
    width: usize,
    line: String,
    error: Option<io::Error>,
}

impl<W: Write> SpoilerFileSink<W> {
    pub fn new(writer: W) -> Self {
        Self::with_width(writer, SPOILER_WRAP)
    }

    pub fn with_width(writer: W, width: usize) -> Self {
        Self {
            writer,
            width: width.max(10),
            line: String::new(),
            error: None,
        }
    }

    /// Write a line directly, bypassing word wrap
    pub fn write_line(&mut self, text: &str) {
        self.flush_line();
        self.write_raw(text);
        self.write_raw("\n");
    }

    /// Flush pending text and hand back the writer, or the first error
    pub fn finish(mut self) -> io::Result<W> {
        if !self.line.is_empty() {
            self.flush_line();
        }
        if self.error.is_none()
            && let Err(e) = self.writer.flush()
        {
            self.error = Some(e);
        }
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.writer),
        }
    }

    fn write_raw(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.writer.write_all(text.as_bytes()) {
            self.error = Some(e);
        }
    }

    fn flush_line(&mut self) {
        let line = std::mem::take(&mut self.line);
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            self.write_raw(trimmed);
            self.write_raw("\n");
        }
    }

    fn push_char(&mut self, ch: char) {
        self.line.push(ch);
        if self.line.as_str().width() <= self.width {
            return;
        }
        // Break at the last space; a single overlong word is cut hard
        match self.line.rfind(' ') {
            Some(pos) if pos > 0 => {
                let rest = self.line[pos + 1..].to_string();
                self.line.truncate(pos);
                self.flush_line();
                self.line = rest;
            }
            _ => {
                let last = self.line.pop();
                self.flush_line();
                if let Some(c) = last {
                    self.line.push(c);
                }
            }
        }
    }
}

impl<W: Write> LoreSink for SpoilerFileSink<W> {
    fn emit(&mut self, _color: TermColor, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.flush_line();
            } else if ch == ' ' && self.line.is_empty() {
                continue;
            } else {
                self.push_char(ch);
            }
        }
    }
}
