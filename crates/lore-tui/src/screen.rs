//! Recall sink producing wrapped, colored ratatui lines

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use lore_core::data::TermColor;
use lore_core::lore::LoreSink;

/// Terminal color of a recall color
pub fn term_color(color: TermColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Collects recall text as lines no wider than `width` columns
#[derive(Debug, Clone)]
pub struct ScreenSink {
    width: usize,
    lines: Vec<Line<'static>>,
    spans: Vec<Span<'static>>,
    used: usize,
}

impl ScreenSink {
    pub fn new(width: u16) -> Self {
        Self {
            width: usize::from(width).max(10),
            lines: Vec::new(),
            spans: Vec::new(),
            used: 0,
        }
    }

    /// Finished lines so far
    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// All lines, including the one still being filled
    pub fn into_lines(mut self) -> Vec<Line<'static>> {
        if !self.spans.is_empty() {
            self.break_line();
        }
        self.lines
    }

    fn break_line(&mut self) {
        let spans = std::mem::take(&mut self.spans);
        self.lines.push(Line::from(spans));
        self.used = 0;
    }

    fn push_word(&mut self, word: &str, style: Style) {
        let mut word = word;
        if self.used == 0 && !self.lines.is_empty() && word.trim().is_empty() {
            return;
        }
        // Trailing spaces may hang past the margin
        let mut fit = Span::raw(word.trim_end()).width();
        if self.used > 0 && self.used + fit > self.width {
            self.break_line();
            word = word.trim_start();
            if word.is_empty() {
                return;
            }
            fit = Span::raw(word.trim_end()).width();
        }
        if fit > self.width {
            let mut buf = [0u8; 4];
            for ch in word.chars() {
                self.push_word(ch.encode_utf8(&mut buf), style);
            }
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.content.to_mut().push_str(word),
            _ => self.spans.push(Span::styled(word.to_string(), style)),
        }
        self.used += Span::raw(word).width();
    }
}

impl LoreSink for ScreenSink {
    fn emit(&mut self, color: TermColor, text: &str) {
        let style = Style::default().fg(term_color(color));
        for (i, segment) in text.split('\n').enumerate() {
            if i > 0 {
                self.break_line();
            }
            for word in segment.split_inclusive(' ') {
                self.push_word(word, style);
            }
        }
    }
}
